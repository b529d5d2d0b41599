/* src/error.rs */

/// Errors produced while reading from a [`MemStream`](crate::MemStream).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// A read would run past the end of the buffer.
	///
	/// The cursor is left where it was before the failed read.
	#[error("out of range reading {what} at offset {offset}: need {need} bytes, have {have}")]
	OutOfRange {
		/// Kind of value being read.
		what: &'static str,
		/// Cursor position when the read was attempted.
		offset: usize,
		/// Bytes the read requires.
		need: usize,
		/// Bytes left in the buffer.
		have: usize,
	},

	/// A reader was requested over an absent buffer.
	#[error("cannot construct a reader over a missing buffer")]
	NullBuffer,

	/// The byte size of a bulk read does not fit in `usize`.
	#[error("array of {count} elements of {width} bytes overflows the address space")]
	LengthOverflow {
		/// Requested element count.
		count: usize,
		/// Width of one element in bytes.
		width: usize,
	},
}

impl Error {
	/// Return `true` for [`Error::OutOfRange`].
	#[must_use]
	pub fn is_out_of_range(&self) -> bool {
		matches!(self, Self::OutOfRange { .. })
	}
}
