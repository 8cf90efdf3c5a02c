#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires up the modules.
//======================================================================

#[cfg(feature = "std")]
extern crate std;

// --- Module declarations ---
pub mod variant;

mod backends;
mod block;
mod consts;
mod schedule;
mod word;


// --- Re-exports ---
pub use cipher;

pub use crate::block::{InvalidKeyLength, Simon128, Simon64, SimonBlockCore};
pub use crate::word::SimonWord;

use crate::variant::{Simon128_128, Simon128_192, Simon128_256, Simon64_128, Simon64_96};

// --- Convenience Type Aliases for Users ---

/// SIMON-64 with a 96-bit key.
pub type Simon64_96Cipher = SimonBlockCore<Simon64_96>;

/// SIMON-64 with a 128-bit key.
pub type Simon64_128Cipher = SimonBlockCore<Simon64_128>;

/// SIMON-128 with a 128-bit key.
pub type Simon128_128Cipher = SimonBlockCore<Simon128_128>;

/// SIMON-128 with a 192-bit key.
pub type Simon128_192Cipher = SimonBlockCore<Simon128_192>;

/// SIMON-128 with a 256-bit key.
pub type Simon128_256Cipher = SimonBlockCore<Simon128_256>;
