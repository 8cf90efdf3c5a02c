//======================================================================
// src/schedule.rs
// Subkey expansion for the five (block size, key size) pairs.
//======================================================================

use cipher::consts::{U42, U44, U68, U69, U72};
use cipher::generic_array::GenericArray;

use crate::consts::{Z2, Z3, Z4};
use crate::word::SimonWord;

/// One derived subkey of the two-key-word recurrence (m = 2 or 3):
/// `c ^ bit ^ back ^ (prev >>> 3) ^ (prev >>> 4)` with `c = ~3`.
#[inline(always)]
fn two_word_round<W: SimonWord>(bit: u64, prev: W, back: W) -> W {
    let c = !W::from_u64(3);
    c ^ W::from_u64(bit) ^ back ^ prev.rotr(3) ^ prev.rotr(4)
}

/// One derived subkey of the four-key-word recurrence (m = 4). `third`
/// is the subkey three positions back, folded in both directly and
/// rotated right by one.
#[inline(always)]
fn four_word_round<W: SimonWord>(bit: u64, prev: W, third: W, back: W) -> W {
    let c = !W::from_u64(3);
    c ^ W::from_u64(bit) ^ back ^ third ^ third.rotr(1) ^ prev.rotr(3) ^ prev.rotr(4)
}

/// SIMON-64/96: 42 subkeys from three key words and z2.
pub(crate) fn simon64_96(k: &[u32]) -> GenericArray<u32, U42> {
    let mut rk = GenericArray::default();
    let mut z = Z2;

    rk[0] = k[2];
    rk[1] = k[1];
    rk[2] = k[0];
    for i in 3..42 {
        rk[i] = two_word_round(z & 1, rk[i - 1], rk[i - 3]);
        z >>= 1;
    }
    rk
}

/// SIMON-64/128: 44 subkeys from four key words and z3.
pub(crate) fn simon64_128(k: &[u32]) -> GenericArray<u32, U44> {
    let mut rk = GenericArray::default();
    let mut z = Z3;

    rk[0] = k[3];
    rk[1] = k[2];
    rk[2] = k[1];
    rk[3] = k[0];
    for i in 4..44 {
        rk[i] = four_word_round(z & 1, rk[i - 1], rk[i - 3], rk[i - 4]);
        z >>= 1;
    }
    rk
}

/// SIMON-128/128: 68 subkeys from two key words and z2. The final two
/// subkeys fall past the 62 usable z bits and take literal bits instead.
pub(crate) fn simon128_128(k: &[u64]) -> GenericArray<u64, U68> {
    let mut rk = GenericArray::default();
    let mut z = Z2;

    rk[0] = k[1];
    rk[1] = k[0];
    for i in 2..66 {
        rk[i] = two_word_round(z & 1, rk[i - 1], rk[i - 2]);
        z >>= 1;
    }
    rk[66] = two_word_round(1, rk[65], rk[64]);
    rk[67] = two_word_round(0, rk[66], rk[65]);
    rk
}

/// SIMON-128/192: 69 subkeys from three key words and z3.
pub(crate) fn simon128_192(k: &[u64]) -> GenericArray<u64, U69> {
    let mut rk = GenericArray::default();
    let mut z = Z3;

    rk[0] = k[2];
    rk[1] = k[1];
    rk[2] = k[0];
    for i in 3..67 {
        rk[i] = two_word_round(z & 1, rk[i - 1], rk[i - 3]);
        z >>= 1;
    }
    rk[67] = two_word_round(0, rk[66], rk[64]);
    rk[68] = two_word_round(1, rk[67], rk[65]);
    rk
}

/// SIMON-128/256: 72 subkeys from four key words and z4.
pub(crate) fn simon128_256(k: &[u64]) -> GenericArray<u64, U72> {
    let mut rk = GenericArray::default();
    let mut z = Z4;

    rk[0] = k[3];
    rk[1] = k[2];
    rk[2] = k[1];
    rk[3] = k[0];
    for i in 4..68 {
        rk[i] = four_word_round(z & 1, rk[i - 1], rk[i - 3], rk[i - 4]);
        z >>= 1;
    }
    rk[68] = four_word_round(0, rk[67], rk[65], rk[64]);
    rk[69] = four_word_round(1, rk[68], rk[66], rk[65]);
    rk[70] = four_word_round(0, rk[69], rk[67], rk[66]);
    rk[71] = four_word_round(0, rk[70], rk[68], rk[67]);
    rk
}
