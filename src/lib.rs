/* src/lib.rs */

//! Zero-copy sequential reader for little-endian binary data.
//!
//! [`MemStream`] walks a borrowed byte buffer with a forward-only cursor
//! and decodes typed values in the order the caller asks for them:
//!
//! - scalars: `u8`, `i16`, `u16`, `i32`, `u32`, `f32`, `f64`
//! - `u32` length-prefixed strings of single-byte character codes
//! - bulk runs of elements returned as [`ArrayView`] windows that alias the
//!   source buffer instead of copying it
//!
//! Multi-byte values are always little-endian. Two interchangeable decode
//! strategies are available through [`Decode`]: the native one uses the
//! standard byte conversions, the manual one assembles every value from
//! single bytes and rebuilds floats from their IEEE-754 fields.
//!
//! ```
//! use memstream::{Decode, MemStream};
//!
//! let mut data = Vec::new();
//! data.extend_from_slice(&2u32.to_le_bytes());
//! data.extend_from_slice(&1.0f32.to_le_bytes());
//! data.extend_from_slice(&(-2.0f32).to_le_bytes());
//!
//! let mut s = MemStream::with_decode(&data, Decode::Manual);
//! let count = s.read_u32().unwrap() as usize;
//! let floats = s.read_f32_array(count).unwrap();
//! assert_eq!(floats.to_vec(), vec![1.0, -2.0]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod decode;
mod endian;
mod error;
mod reader;
pub mod view;

pub use crate::decode::Decode;
pub use crate::endian::Endian;
pub use crate::error::Error;
pub use crate::reader::MemStream;
pub use crate::view::{ArrayView, Element};
