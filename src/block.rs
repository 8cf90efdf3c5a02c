//======================================================================
// src/block.rs
// The keyed SIMON block transform and its cipher-trait surface.
//======================================================================

use core::fmt;

use cipher::consts::{U16, U8};
use cipher::generic_array::GenericArray;
use cipher::{
    AlgorithmName, BlockCipher, BlockClosure, BlockDecrypt, BlockEncrypt, BlockSizeUser, Key,
    KeyInit, KeySizeUser,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends;
use crate::variant::{
    Simon128_128, Simon128_192, Simon128_256, Simon64_128, Simon64_96, SimonVariant,
};
use crate::word::SimonWord;

/// A keyed SIMON instance: the immutable subkey table for one variant.
///
/// After key setup the instance is read-only and freely shareable across
/// threads for concurrent block processing. The subkey table is wiped
/// when the instance is dropped.
#[derive(Clone)]
pub struct SimonBlockCore<V: SimonVariant> {
    pub(crate) subkeys: GenericArray<V::Word, V::Rounds>,
}

impl<V: SimonVariant> KeySizeUser for SimonBlockCore<V> {
    type KeySize = V::KeySize;
}

impl<V: SimonVariant> BlockSizeUser for SimonBlockCore<V> {
    type BlockSize = V::BlockSize;
}

impl<V: SimonVariant> KeyInit for SimonBlockCore<V> {
    fn new(key: &Key<Self>) -> Self {
        // Decode the user key as big-endian words, expand, then wipe the
        // decoded words.
        let mut words = [<V::Word>::default(); 4];
        for (w, chunk) in words
            .iter_mut()
            .zip(key.chunks_exact(<V::Word as SimonWord>::BYTES))
        {
            *w = <V::Word as SimonWord>::read_be(chunk);
        }
        let subkeys = V::expand_key(&words[..V::KEY_WORDS]);
        words.zeroize();
        Self { subkeys }
    }
}

impl<V: SimonVariant> BlockCipher for SimonBlockCore<V> {}

impl<V: SimonVariant> BlockEncrypt for SimonBlockCore<V> {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::EncBackend(self));
    }
}

impl<V: SimonVariant> BlockDecrypt for SimonBlockCore<V> {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::DecBackend(self));
    }
}

impl<V: SimonVariant> AlgorithmName for SimonBlockCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)
    }
}

impl<V: SimonVariant> Drop for SimonBlockCore<V> {
    fn drop(&mut self) {
        self.subkeys.as_mut_slice().zeroize();
    }
}

impl<V: SimonVariant> ZeroizeOnDrop for SimonBlockCore<V> {}

/// The user key byte length does not select any SIMON variant for the
/// requested block size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidKeyLength;

impl fmt::Display for InvalidKeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid SIMON key length")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidKeyLength {}

/// SIMON-64 with the key length chosen at runtime, as in the original
/// key setup: 12 key bytes select the 42-round variant, 16 bytes the
/// 44-round variant.
#[derive(Clone)]
pub enum Simon64 {
    /// 96-bit key, 42 rounds.
    K96(SimonBlockCore<Simon64_96>),
    /// 128-bit key, 44 rounds.
    K128(SimonBlockCore<Simon64_128>),
}

impl Simon64 {
    /// Accepted user key lengths in bytes.
    pub const KEY_SIZES: [usize; 2] = [12, 16];

    /// Builds a cipher from a variable-length key, selecting the variant
    /// from the byte length.
    pub fn new_from_slice(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        match key.len() {
            12 => Ok(Self::K96(SimonBlockCore::new(GenericArray::from_slice(
                key,
            )))),
            16 => Ok(Self::K128(SimonBlockCore::new(GenericArray::from_slice(
                key,
            )))),
            _ => Err(InvalidKeyLength),
        }
    }
}

impl BlockSizeUser for Simon64 {
    type BlockSize = U8;
}

impl BlockCipher for Simon64 {}

impl BlockEncrypt for Simon64 {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        match self {
            Self::K96(c) => c.encrypt_with_backend(f),
            Self::K128(c) => c.encrypt_with_backend(f),
        }
    }
}

impl BlockDecrypt for Simon64 {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        match self {
            Self::K96(c) => c.decrypt_with_backend(f),
            Self::K128(c) => c.decrypt_with_backend(f),
        }
    }
}

impl ZeroizeOnDrop for Simon64 {}

/// SIMON-128 with the key length chosen at runtime: 16, 24 or 32 key
/// bytes select 68, 69 or 72 rounds.
#[derive(Clone)]
pub enum Simon128 {
    /// 128-bit key, 68 rounds.
    K128(SimonBlockCore<Simon128_128>),
    /// 192-bit key, 69 rounds.
    K192(SimonBlockCore<Simon128_192>),
    /// 256-bit key, 72 rounds.
    K256(SimonBlockCore<Simon128_256>),
}

impl Simon128 {
    /// Accepted user key lengths in bytes.
    pub const KEY_SIZES: [usize; 3] = [16, 24, 32];

    /// Builds a cipher from a variable-length key, selecting the variant
    /// from the byte length.
    pub fn new_from_slice(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        match key.len() {
            16 => Ok(Self::K128(SimonBlockCore::new(GenericArray::from_slice(
                key,
            )))),
            24 => Ok(Self::K192(SimonBlockCore::new(GenericArray::from_slice(
                key,
            )))),
            32 => Ok(Self::K256(SimonBlockCore::new(GenericArray::from_slice(
                key,
            )))),
            _ => Err(InvalidKeyLength),
        }
    }
}

impl BlockSizeUser for Simon128 {
    type BlockSize = U16;
}

impl BlockCipher for Simon128 {}

impl BlockEncrypt for Simon128 {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        match self {
            Self::K128(c) => c.encrypt_with_backend(f),
            Self::K192(c) => c.encrypt_with_backend(f),
            Self::K256(c) => c.encrypt_with_backend(f),
        }
    }
}

impl BlockDecrypt for Simon128 {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        match self {
            Self::K128(c) => c.decrypt_with_backend(f),
            Self::K192(c) => c.decrypt_with_backend(f),
            Self::K256(c) => c.decrypt_with_backend(f),
        }
    }
}

impl ZeroizeOnDrop for Simon128 {}
