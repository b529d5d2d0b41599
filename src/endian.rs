/* src/endian.rs */

use core::fmt;

/// Byte order of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
	/// Least significant byte first.
	Little,
	/// Most significant byte first.
	Big,
}

impl Endian {
	/// Byte order of the host this crate was compiled for.
	///
	/// ```
	/// let host = memstream::Endian::host();
	/// assert_eq!(host.is_little(), cfg!(target_endian = "little"));
	/// ```
	#[must_use]
	pub const fn host() -> Self {
		// A u16 of 1 stores 0x01 in its first byte only on little-endian hosts.
		if 1u16.to_ne_bytes()[0] == 1 {
			Self::Little
		} else {
			Self::Big
		}
	}

	/// Return `true` for [`Endian::Little`].
	#[must_use]
	pub const fn is_little(self) -> bool {
		matches!(self, Self::Little)
	}
}

impl fmt::Display for Endian {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Little => f.write_str("little-endian"),
			Self::Big => f.write_str("big-endian"),
		}
	}
}
