/* src/view.rs */

//! Zero-copy typed windows returned by bulk reads.
//!
//! An [`ArrayView`] borrows a run of bytes from the reader's buffer and
//! decodes elements on access, using the [`Decode`] strategy of the
//! reader that produced it.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::slice::ChunksExact;

use crate::decode::Decode;

#[allow(unreachable_pub)]
mod sealed {
	pub trait Sealed {}
}

/// A fixed-width little-endian value that can appear in an [`ArrayView`].
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `f32` and `f64`.
/// This trait is sealed.
pub trait Element: Copy + fmt::Debug + sealed::Sealed {
	/// Encoded width in bytes.
	const WIDTH: usize;

	/// Label used in error reports for a bulk read of this element.
	const ARRAY_NAME: &'static str;

	/// Decode one element from exactly [`Self::WIDTH`] little-endian bytes.
	#[doc(hidden)]
	fn decode_le(decode: Decode, bytes: &[u8]) -> Self;
}

macro_rules! impl_element {
	($($ty:ident => $name:literal),* $(,)?) => {$(
		impl sealed::Sealed for $ty {}

		impl Element for $ty {
			const WIDTH: usize = core::mem::size_of::<$ty>();
			const ARRAY_NAME: &'static str = $name;

			fn decode_le(decode: Decode, bytes: &[u8]) -> Self {
				let mut raw = [0u8; core::mem::size_of::<$ty>()];
				raw.copy_from_slice(bytes);
				decode.$ty(raw)
			}
		}
	)*};
}

impl_element! {
	u8 => "u8 array",
	i8 => "i8 array",
	u16 => "u16 array",
	i16 => "i16 array",
	u32 => "u32 array",
	i32 => "i32 array",
	f32 => "f32 array",
	f64 => "f64 array",
}

/// Zero-copy window over a run of little-endian elements.
///
/// The view borrows the reader's buffer and decodes elements only when
/// they are accessed.
#[derive(Clone, Copy)]
pub struct ArrayView<'a, T> {
	bytes: &'a [u8],
	decode: Decode,
	_marker: PhantomData<T>,
}

impl<'a, T: Element> ArrayView<'a, T> {
	pub(crate) fn new(bytes: &'a [u8], decode: Decode) -> Self {
		debug_assert_eq!(bytes.len() % T::WIDTH, 0);
		Self {
			bytes,
			decode,
			_marker: PhantomData,
		}
	}

	/// Decode strategy inherited from the reader.
	#[must_use]
	pub fn decode(&self) -> Decode {
		self.decode
	}

	/// Number of elements in the view.
	#[must_use]
	pub fn len(&self) -> usize {
		self.bytes.len() / T::WIDTH
	}

	/// Return `true` if the view holds no elements.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Extent of the view in bytes.
	#[must_use]
	pub fn byte_len(&self) -> usize {
		self.bytes.len()
	}

	/// Raw bytes covered by the view, borrowed from the source buffer.
	#[must_use]
	pub fn as_bytes(&self) -> &'a [u8] {
		self.bytes
	}

	/// Decode the element at `index`.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<T> {
		let start = index.checked_mul(T::WIDTH)?;
		let end = start.checked_add(T::WIDTH)?;
		self.bytes
			.get(start..end)
			.map(|raw| T::decode_le(self.decode, raw))
	}

	/// Decode the first element.
	#[must_use]
	pub fn first(&self) -> Option<T> {
		self.get(0)
	}

	/// Decode the last element.
	#[must_use]
	pub fn last(&self) -> Option<T> {
		self.len().checked_sub(1).and_then(|i| self.get(i))
	}

	/// Iterate over the decoded elements.
	#[must_use]
	pub fn iter(&self) -> Iter<'a, T> {
		Iter {
			chunks: self.bytes.chunks_exact(T::WIDTH),
			decode: self.decode,
			_marker: PhantomData,
		}
	}

	/// Decode every element into a new vector.
	#[must_use]
	pub fn to_vec(&self) -> Vec<T> {
		self.iter().collect()
	}
}

impl<T: Element> fmt::Debug for ArrayView<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<'a, T: Element> IntoIterator for ArrayView<'a, T> {
	type Item = T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T: Element> IntoIterator for &ArrayView<'a, T> {
	type Item = T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the elements of an [`ArrayView`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
	chunks: ChunksExact<'a, u8>,
	decode: Decode,
	_marker: PhantomData<T>,
}

impl<T: Element> Iterator for Iter<'_, T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		let decode = self.decode;
		self.chunks.next().map(|raw| T::decode_le(decode, raw))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.chunks.size_hint()
	}
}

impl<T: Element> DoubleEndedIterator for Iter<'_, T> {
	fn next_back(&mut self) -> Option<T> {
		let decode = self.decode;
		self.chunks.next_back().map(|raw| T::decode_le(decode, raw))
	}
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {}

impl<T: Element> FusedIterator for Iter<'_, T> {}
