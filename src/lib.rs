//! QuadMix selectable-order block transformation engine.
//!
//! QuadMix encodes 64-bit blocks by applying a sequence of reversible
//! bit-mixing transforms, each bound to its own derived key. The order in
//! which the transforms are applied is selected by a 4-bit control word,
//! and decoding applies the exact inverse of each transform in reverse
//! order.
//!
//! This crate is an experimental construction, not a vetted cipher. It
//! preserves the algebraic behavior of the reference design faithfully
//! (rotations, XOR, modular addition/multiplication) without adding
//! authentication or key-derivation hardening.
//!
//! # Architecture
//!
//! ```text
//! generate_keys   (key schedule — scramble/generate/mutate over P, Q, S)
//!       +
//! build_catalog   (transform library — 4 reversible kinds, round-robin)
//!       +
//! select_order    (4-bit control word -> permutation of transform slots)
//!       ↓
//! QuadMix         (orchestrator — forward order to encode,
//!                  reverse order to decode, per-slot side parameters)
//! ```
//!
//! # Examples
//!
//! Encode and decode a 64-bit block:
//!
//! ```
//! use quadmix::{ControlWord, QuadMix};
//!
//! let engine = QuadMix::new(
//!     18446744073709551557,
//!     18446744073709551533,
//!     12345678901234567890,
//!     6,
//!     ControlWord::new(0b1011),
//! )
//! .unwrap();
//!
//! let encoded = engine.encode_block(0xDEADBEEF_CAFEBABE);
//! assert_ne!(encoded.value, 0xDEADBEEF_CAFEBABE);
//!
//! let decoded = engine.decode_block(&encoded).unwrap();
//! assert_eq!(decoded, 0xDEADBEEF_CAFEBABE);
//! ```
//!
//! Encode a whole message, block by block:
//!
//! ```
//! use quadmix::{ControlWord, QuadMix};
//!
//! let engine = QuadMix::new(104729, 1299709, 982451653, 4, ControlWord::random()).unwrap();
//!
//! let message = b"attack at dawn";
//! let encoded = engine.encode_message(message);
//! let decoded = engine.decode_message(&encoded).unwrap();
//! assert_eq!(decoded, message);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod utils;

mod engine;
mod key_schedule;
mod order;
mod transform;

pub use engine::{decode_block, encode_block, EncodedBlock, QuadMix};
pub use key_schedule::generate_keys;
pub use order::{select_order, ControlWord};
pub use transform::{build_catalog, SideParams, Transform};
