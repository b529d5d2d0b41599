/* src/reader.rs */

use alloc::string::String;

use tracing::{debug, trace};

use crate::Error;
use crate::decode::Decode;
use crate::endian::Endian;
use crate::view::{ArrayView, Element};

/// Forward-only little-endian reader over a borrowed byte buffer.
///
/// Every successful read advances the cursor by the exact width of the
/// value it decoded. A read that would run past the end of the buffer
/// fails with [`Error::OutOfRange`] and leaves the cursor untouched.
///
/// Cloning a reader yields an independent cursor over the same buffer.
///
/// ```
/// use memstream::MemStream;
///
/// let data = [0x03, 0x00, 0x00, 0x00, b'A', b'B', b'C', 0x2A];
/// let mut s = MemStream::new(&data);
/// assert_eq!(s.read_string().unwrap(), "ABC");
/// assert_eq!(s.position(), 7);
/// assert_eq!(s.read_u8().unwrap(), 42);
/// assert!(s.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MemStream<'a> {
	data: &'a [u8],
	pos: usize,
	decode: Decode,
	host: Endian,
}

impl<'a> MemStream<'a> {
	/// Create a reader at offset 0 using [`Decode::Native`].
	#[must_use]
	pub fn new(data: &'a [u8]) -> Self {
		Self::with_decode(data, Decode::Native)
	}

	/// Create a reader at offset 0 using the given decode strategy.
	#[must_use]
	pub fn with_decode(data: &'a [u8], decode: Decode) -> Self {
		let host = Endian::host();
		trace!(len = data.len(), ?decode, %host, "memstream opened");
		Self {
			data,
			pos: 0,
			decode,
			host,
		}
	}

	/// Create a reader from a buffer that may be absent.
	///
	/// An empty buffer is accepted; only a missing one is rejected.
	///
	/// # Errors
	///
	/// Returns [`Error::NullBuffer`] when `data` is `None`.
	pub fn from_optional(data: Option<&'a [u8]>) -> Result<Self, Error> {
		data.map(Self::new).ok_or(Error::NullBuffer)
	}

	/// Current cursor offset from the start of the buffer.
	#[must_use]
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Bytes left between the cursor and the end of the buffer.
	#[must_use]
	pub fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	/// Total length of the underlying buffer.
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Return `true` if the underlying buffer is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Return `true` once every byte has been consumed.
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.pos == self.data.len()
	}

	/// The whole underlying buffer.
	#[must_use]
	pub fn as_slice(&self) -> &'a [u8] {
		self.data
	}

	/// Unread bytes, without advancing the cursor.
	#[must_use]
	pub fn rest(&self) -> &'a [u8] {
		&self.data[self.pos..]
	}

	/// Decode strategy chosen at construction.
	#[must_use]
	pub fn decode(&self) -> Decode {
		self.decode
	}

	/// Host byte order observed at construction.
	///
	/// Informational only: every read decodes little-endian regardless.
	#[must_use]
	pub fn host_endian(&self) -> Endian {
		self.host
	}

	/// Read one unsigned byte.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if the buffer is exhausted.
	pub fn read_u8(&mut self) -> Result<u8, Error> {
		let [b] = self.take_array("u8")?;
		Ok(b)
	}

	/// Read a little-endian `i16`.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if fewer than 2 bytes remain.
	pub fn read_i16(&mut self) -> Result<i16, Error> {
		let bytes = self.take_array("i16")?;
		Ok(self.decode.i16(bytes))
	}

	/// Read a little-endian `u16`.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if fewer than 2 bytes remain.
	pub fn read_u16(&mut self) -> Result<u16, Error> {
		let bytes = self.take_array("u16")?;
		Ok(self.decode.u16(bytes))
	}

	/// Read a little-endian `i32`.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if fewer than 4 bytes remain.
	pub fn read_i32(&mut self) -> Result<i32, Error> {
		let bytes = self.take_array("i32")?;
		Ok(self.decode.i32(bytes))
	}

	/// Read a little-endian `u32`.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if fewer than 4 bytes remain.
	pub fn read_u32(&mut self) -> Result<u32, Error> {
		self.read_u32_as("u32")
	}

	/// Read a little-endian IEEE-754 single-precision float.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if fewer than 4 bytes remain.
	pub fn read_f32(&mut self) -> Result<f32, Error> {
		let bytes = self.take_array("f32")?;
		Ok(self.decode.f32(bytes))
	}

	/// Read a little-endian IEEE-754 double-precision float.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if fewer than 8 bytes remain.
	pub fn read_f64(&mut self) -> Result<f64, Error> {
		let bytes = self.take_array("f64")?;
		Ok(self.decode.f64(bytes))
	}

	/// Read a `u32` length prefix followed by that many raw bytes.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if either the prefix or the body is
	/// truncated. The cursor is restored to the start of the prefix.
	pub fn read_string_bytes(&mut self) -> Result<&'a [u8], Error> {
		let start = self.pos;
		let len = self.read_u32_as("string length")?;
		let len = usize::try_from(len).unwrap_or(usize::MAX);
		self.take(len, "string body").inspect_err(|_| self.pos = start)
	}

	/// Read a length-prefixed string of single-byte character codes.
	///
	/// Each byte maps to the `char` with the same code point, so the
	/// result is the Latin-1 reading of the body. No multi-byte decoding
	/// is attempted.
	///
	/// # Errors
	///
	/// Same as [`MemStream::read_string_bytes`].
	pub fn read_string(&mut self) -> Result<String, Error> {
		let body = self.read_string_bytes()?;
		Ok(body.iter().copied().map(char::from).collect())
	}

	/// Borrow the next `n` bytes without copying.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] if fewer than `n` bytes remain.
	pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Error> {
		self.take(n, "bytes")
	}

	/// Borrow the next `count` elements of `T` as a zero-copy view.
	///
	/// The cursor advances by `count * T::WIDTH` bytes. Elements are
	/// decoded little-endian when accessed through the view, with the same
	/// [`Decode`] strategy as this reader's scalar reads.
	///
	/// # Errors
	///
	/// Returns [`Error::LengthOverflow`] if the byte size does not fit in
	/// `usize`, or [`Error::OutOfRange`] if the buffer is too short.
	///
	/// ```
	/// let data = [0x01, 0x00, 0x02, 0x00, 0x03, 0x00];
	/// let mut s = memstream::MemStream::new(&data);
	/// let view = s.read_array::<u16>(3).unwrap();
	/// assert_eq!(view.to_vec(), vec![1, 2, 3]);
	/// assert!(s.is_at_end());
	/// ```
	pub fn read_array<T: Element>(&mut self, count: usize) -> Result<ArrayView<'a, T>, Error> {
		let Some(size) = count.checked_mul(T::WIDTH) else {
			debug!(count, width = T::WIDTH, offset = self.pos, "bulk read size overflows");
			return Err(Error::LengthOverflow {
				count,
				width: T::WIDTH,
			});
		};
		let decode = self.decode;
		self
			.take(size, T::ARRAY_NAME)
			.map(|bytes| ArrayView::new(bytes, decode))
	}

	/// Zero-copy view over the next `count` bytes.
	///
	/// # Errors
	///
	/// See [`MemStream::read_array`].
	pub fn read_u8_array(&mut self, count: usize) -> Result<ArrayView<'a, u8>, Error> {
		self.read_array(count)
	}

	/// Zero-copy view over the next `count` little-endian `u16` values.
	///
	/// # Errors
	///
	/// See [`MemStream::read_array`].
	pub fn read_u16_array(&mut self, count: usize) -> Result<ArrayView<'a, u16>, Error> {
		self.read_array(count)
	}

	/// Zero-copy view over the next `count` little-endian `u32` values.
	///
	/// # Errors
	///
	/// See [`MemStream::read_array`].
	pub fn read_u32_array(&mut self, count: usize) -> Result<ArrayView<'a, u32>, Error> {
		self.read_array(count)
	}

	/// Zero-copy view over the next `count` little-endian `f32` values.
	///
	/// # Errors
	///
	/// See [`MemStream::read_array`].
	pub fn read_f32_array(&mut self, count: usize) -> Result<ArrayView<'a, f32>, Error> {
		self.read_array(count)
	}

	/// Zero-copy view over the next `count` little-endian `f64` values.
	///
	/// # Errors
	///
	/// See [`MemStream::read_array`].
	pub fn read_f64_array(&mut self, count: usize) -> Result<ArrayView<'a, f64>, Error> {
		self.read_array(count)
	}

	fn read_u32_as(&mut self, what: &'static str) -> Result<u32, Error> {
		let bytes = self.take_array(what)?;
		Ok(self.decode.u32(bytes))
	}

	fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8], Error> {
		if self.remaining() < n {
			return Err(self.out_of_range(n, what));
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	fn take_array<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N], Error> {
		let Some(&bytes) = self.rest().first_chunk::<N>() else {
			return Err(self.out_of_range(N, what));
		};
		self.pos += N;
		Ok(bytes)
	}

	fn out_of_range(&self, need: usize, what: &'static str) -> Error {
		let have = self.remaining();
		debug!(what, offset = self.pos, need, have, "read past end of buffer");
		Error::OutOfRange {
			what,
			offset: self.pos,
			need,
			have,
		}
	}
}
