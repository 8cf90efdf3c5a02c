//======================================================================
// src/backends/soft.rs
// Software (scalar) implementation of the SIMON round function.
//======================================================================

use cipher::consts::U1;
use cipher::inout::InOut;
use cipher::{Block, BlockBackend, BlockSizeUser, ParBlocksSizeUser};

use crate::block::SimonBlockCore;
use crate::variant::SimonVariant;
use crate::word::SimonWord;

/// The round helper `f(v) = ((v <<< 1) & (v <<< 8)) ^ (v <<< 2)`.
#[inline(always)]
fn f<W: SimonWord>(v: W) -> W {
    (v.rotl(1) & v.rotl(8)) ^ v.rotl(2)
}

/// A pair of Feistel rounds. The updated `y` feeds the `x` update.
#[inline(always)]
fn r2<W: SimonWord>(x: &mut W, y: &mut W, k: W, l: W) {
    *y = *y ^ f(*x) ^ k;
    *x = *x ^ f(*y) ^ l;
}

/// Forward transform over the subkey table. An odd round count leaves
/// one unpaired round and a half-swap at the end.
#[inline(always)]
pub(crate) fn encrypt<W: SimonWord>(subkeys: &[W], mut x: W, mut y: W) -> (W, W) {
    let rounds = subkeys.len();

    let mut i = 0;
    while i + 1 < rounds {
        r2(&mut x, &mut y, subkeys[i], subkeys[i + 1]);
        i += 2;
    }

    if rounds & 1 != 0 {
        y = y ^ f(x) ^ subkeys[rounds - 1];
        core::mem::swap(&mut x, &mut y);
    }

    (x, y)
}

/// Inverse transform: the unpaired round is undone first (when present),
/// then the paired rounds run in reverse with the halves exchanged.
#[inline(always)]
pub(crate) fn decrypt<W: SimonWord>(subkeys: &[W], mut x: W, mut y: W) -> (W, W) {
    let mut rounds = subkeys.len();

    if rounds & 1 != 0 {
        core::mem::swap(&mut x, &mut y);
        y = y ^ subkeys[rounds - 1] ^ f(x);
        rounds -= 1;
    }

    let mut i = rounds;
    while i >= 2 {
        i -= 2;
        r2(&mut y, &mut x, subkeys[i + 1], subkeys[i]);
    }

    (x, y)
}

/// Scalar encryption backend borrowing a keyed core.
pub(crate) struct EncBackend<'a, V: SimonVariant>(pub(crate) &'a SimonBlockCore<V>);

impl<'a, V: SimonVariant> BlockSizeUser for EncBackend<'a, V> {
    type BlockSize = V::BlockSize;
}

impl<'a, V: SimonVariant> ParBlocksSizeUser for EncBackend<'a, V> {
    type ParBlocksSize = U1;
}

impl<'a, V: SimonVariant> BlockBackend for EncBackend<'a, V> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let input = block.clone_in();
        let (hi, lo) = input.split_at(<V::Word as SimonWord>::BYTES);
        let x = <V::Word as SimonWord>::read_be(hi);
        let y = <V::Word as SimonWord>::read_be(lo);

        let (x, y) = encrypt(self.0.subkeys.as_slice(), x, y);

        let out = block.get_out();
        let (hi, lo) = out.split_at_mut(<V::Word as SimonWord>::BYTES);
        x.write_be(hi);
        y.write_be(lo);
    }
}

/// Scalar decryption backend borrowing a keyed core.
pub(crate) struct DecBackend<'a, V: SimonVariant>(pub(crate) &'a SimonBlockCore<V>);

impl<'a, V: SimonVariant> BlockSizeUser for DecBackend<'a, V> {
    type BlockSize = V::BlockSize;
}

impl<'a, V: SimonVariant> ParBlocksSizeUser for DecBackend<'a, V> {
    type ParBlocksSize = U1;
}

impl<'a, V: SimonVariant> BlockBackend for DecBackend<'a, V> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let input = block.clone_in();
        let (hi, lo) = input.split_at(<V::Word as SimonWord>::BYTES);
        let x = <V::Word as SimonWord>::read_be(hi);
        let y = <V::Word as SimonWord>::read_be(lo);

        let (x, y) = decrypt(self.0.subkeys.as_slice(), x, y);

        let out = block.get_out();
        let (hi, lo) = out.split_at_mut(<V::Word as SimonWord>::BYTES);
        x.write_be(hi);
        y.write_be(lo);
    }
}
