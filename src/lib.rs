//! A fixed-capacity bit array packed into machine words, written in pure Rust.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! [`PackedBitArray`] is the main struct in this library. The number of bits is
//! chosen at runtime when the array is created and never changes afterwards.
//! Bits are stored in words of a configurable unsigned integer type (`u32` by
//! default, see [`Word`]).
//!
//! # Examples
//! ```
//! use packed_bitarray::PackedBitArray;
//!
//! let mut bits = PackedBitArray::<u32>::new(10);
//! assert_eq!(bits.get(3), Ok(false));
//! bits.set(3, true).unwrap();
//! assert!(bits[3]);
//! assert_eq!(bits.to_string(), "0001000000");
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible (needs `alloc`)
//! - Per-bit operations: `set`, `reset`, `flip`, `get`, indexing
//! - Whole-array operations: `set_all`, `reset_all`, `flip_all`
//! - Checked positions: out-of-range access returns
//!   [`BitArrayError::OutOfRange`] and never mutates the array
//! - Rendering as a `'0'`/`'1'` string via `render()` or `Display`, and parsing
//!   it back via `FromStr`
//! - Word width selectable per array: `u8`, `u16`, `u32`, `u64`
//! - `tracing` events for allocation, whole-array writes and rejected positions

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitarray;
mod error;
mod word;

pub use bitarray::{Iter, PackedBitArray};
pub use error::BitArrayError;
pub use word::{Word, word_count};
