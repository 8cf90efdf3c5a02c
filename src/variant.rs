//======================================================================
// src/variant.rs
// Defines the (block size, key size) parameter sets of the SIMON family.
//======================================================================

use cipher::consts::{U12, U16, U24, U32, U42, U44, U68, U69, U72, U8};
use cipher::generic_array::GenericArray;
use cipher::ArrayLength;

use crate::schedule;
use crate::word::SimonWord;

/// A trait that defines the parameters of one SIMON variant.
pub trait SimonVariant: Sized + Clone + Send + Sync + 'static {
    /// Machine word of the block halves.
    type Word: SimonWord;

    /// User key length in bytes.
    type KeySize: ArrayLength<u8>;
    /// Block length in bytes (two words).
    type BlockSize: ArrayLength<u8>;
    /// Subkey table length as a type-level integer.
    type Rounds: ArrayLength<Self::Word>;

    /// Number of words in the user key.
    const KEY_WORDS: usize;
    /// Number of rounds; equals the subkey count.
    const ROUNDS: usize;

    /// Printable algorithm name.
    const NAME: &'static str;

    /// Expands the decoded big-endian key words into the subkey table.
    /// The first `KEY_WORDS` subkeys are the key words in reverse order.
    fn expand_key(k: &[Self::Word]) -> GenericArray<Self::Word, Self::Rounds>;
}

/// SIMON-64 with a 96-bit key (42 rounds).
#[derive(Clone)]
pub struct Simon64_96;
impl SimonVariant for Simon64_96 {
    type Word = u32;
    type KeySize = U12;
    type BlockSize = U8;
    type Rounds = U42;
    const KEY_WORDS: usize = 3;
    const ROUNDS: usize = 42;
    const NAME: &'static str = "SIMON-64/96";

    fn expand_key(k: &[u32]) -> GenericArray<u32, U42> {
        schedule::simon64_96(k)
    }
}

/// SIMON-64 with a 128-bit key (44 rounds).
#[derive(Clone)]
pub struct Simon64_128;
impl SimonVariant for Simon64_128 {
    type Word = u32;
    type KeySize = U16;
    type BlockSize = U8;
    type Rounds = U44;
    const KEY_WORDS: usize = 4;
    const ROUNDS: usize = 44;
    const NAME: &'static str = "SIMON-64/128";

    fn expand_key(k: &[u32]) -> GenericArray<u32, U44> {
        schedule::simon64_128(k)
    }
}

/// SIMON-128 with a 128-bit key (68 rounds).
#[derive(Clone)]
pub struct Simon128_128;
impl SimonVariant for Simon128_128 {
    type Word = u64;
    type KeySize = U16;
    type BlockSize = U16;
    type Rounds = U68;
    const KEY_WORDS: usize = 2;
    const ROUNDS: usize = 68;
    const NAME: &'static str = "SIMON-128/128";

    fn expand_key(k: &[u64]) -> GenericArray<u64, U68> {
        schedule::simon128_128(k)
    }
}

/// SIMON-128 with a 192-bit key. The only variant with an odd round
/// count (69), which exercises the unpaired-round path of the transform.
#[derive(Clone)]
pub struct Simon128_192;
impl SimonVariant for Simon128_192 {
    type Word = u64;
    type KeySize = U24;
    type BlockSize = U16;
    type Rounds = U69;
    const KEY_WORDS: usize = 3;
    const ROUNDS: usize = 69;
    const NAME: &'static str = "SIMON-128/192";

    fn expand_key(k: &[u64]) -> GenericArray<u64, U69> {
        schedule::simon128_192(k)
    }
}

/// SIMON-128 with a 256-bit key (72 rounds).
#[derive(Clone)]
pub struct Simon128_256;
impl SimonVariant for Simon128_256 {
    type Word = u64;
    type KeySize = U32;
    type BlockSize = U16;
    type Rounds = U72;
    const KEY_WORDS: usize = 4;
    const ROUNDS: usize = 72;
    const NAME: &'static str = "SIMON-128/256";

    fn expand_key(k: &[u64]) -> GenericArray<u64, U72> {
        schedule::simon128_256(k)
    }
}
