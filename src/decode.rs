/* src/decode.rs */

//! Decode strategies for multi-byte little-endian values.
//!
//! [`Decode::Native`] goes through the standard `from_le_bytes`
//! constructors. [`Decode::Manual`] builds every value from single bytes
//! with shifts and masks, and rebuilds IEEE-754 floats from their sign,
//! exponent and mantissa fields. Both produce bit-identical results for
//! every input except NaN payloads, which the manual path does not carry.
//!
//! The manual decoders are exposed as free functions so they can be used
//! and tested on their own.

/// Strategy a [`MemStream`](crate::MemStream) uses for multi-byte reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Decode {
	/// Use the platform's typed little-endian conversions.
	#[default]
	Native,
	/// Assemble values byte by byte with explicit bit manipulation.
	Manual,
}

impl Decode {
	// Single bytes read the same either way; these keep `ArrayView` uniform.
	#[allow(clippy::unused_self)]
	pub(crate) fn u8(self, bytes: [u8; 1]) -> u8 {
		bytes[0]
	}

	#[allow(clippy::unused_self)]
	pub(crate) fn i8(self, bytes: [u8; 1]) -> i8 {
		bytes[0] as i8
	}

	pub(crate) fn u16(self, bytes: [u8; 2]) -> u16 {
		match self {
			Self::Native => u16::from_le_bytes(bytes),
			Self::Manual => manual_u16(bytes),
		}
	}

	pub(crate) fn i16(self, bytes: [u8; 2]) -> i16 {
		match self {
			Self::Native => i16::from_le_bytes(bytes),
			Self::Manual => manual_i16(bytes),
		}
	}

	pub(crate) fn u32(self, bytes: [u8; 4]) -> u32 {
		match self {
			Self::Native => u32::from_le_bytes(bytes),
			Self::Manual => manual_u32(bytes),
		}
	}

	pub(crate) fn i32(self, bytes: [u8; 4]) -> i32 {
		match self {
			Self::Native => i32::from_le_bytes(bytes),
			Self::Manual => manual_i32(bytes),
		}
	}

	pub(crate) fn f32(self, bytes: [u8; 4]) -> f32 {
		match self {
			Self::Native => f32::from_le_bytes(bytes),
			Self::Manual => manual_f32(bytes),
		}
	}

	pub(crate) fn f64(self, bytes: [u8; 8]) -> f64 {
		match self {
			Self::Native => f64::from_le_bytes(bytes),
			Self::Manual => manual_f64(bytes),
		}
	}
}

/// Assemble a little-endian `u16` from two bytes.
#[must_use]
pub fn manual_u16(bytes: [u8; 2]) -> u16 {
	u16::from(bytes[0]) | (u16::from(bytes[1]) << 8)
}

/// Assemble a little-endian two's-complement `i16` from two bytes.
#[must_use]
pub fn manual_i16(bytes: [u8; 2]) -> i16 {
	manual_u16(bytes) as i16
}

/// Assemble a little-endian `u32` from four bytes.
///
/// ```
/// assert_eq!(memstream::decode::manual_u32([0x01, 0x00, 0x00, 0x00]), 1);
/// ```
#[must_use]
pub fn manual_u32(bytes: [u8; 4]) -> u32 {
	u32::from(bytes[0])
		| (u32::from(bytes[1]) << 8)
		| (u32::from(bytes[2]) << 16)
		| (u32::from(bytes[3]) << 24)
}

/// Assemble a little-endian two's-complement `i32` from four bytes.
///
/// ```
/// assert_eq!(memstream::decode::manual_i32([0xFF; 4]), -1);
/// ```
#[must_use]
pub fn manual_i32(bytes: [u8; 4]) -> i32 {
	manual_u32(bytes) as i32
}

/// Assemble a little-endian `u64` from eight bytes.
#[must_use]
pub fn manual_u64(bytes: [u8; 8]) -> u64 {
	bytes
		.iter()
		.rev()
		.fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Decode a little-endian IEEE-754 single-precision float field by field.
///
/// Exponent `0` yields a signed zero or a subnormal scaled by 2^-126
/// without the implicit leading one. Exponent `0xFF` yields a signed
/// infinity for a zero mantissa and NaN otherwise.
///
/// ```
/// use memstream::decode::manual_f32;
///
/// assert_eq!(manual_f32(1.5f32.to_le_bytes()), 1.5);
/// assert!(manual_f32([0x01, 0x00, 0x80, 0x7F]).is_nan());
/// ```
#[must_use]
pub fn manual_f32(bytes: [u8; 4]) -> f32 {
	let mantissa =
		u32::from(bytes[0]) | (u32::from(bytes[1]) << 8) | (u32::from(bytes[2] & 0x7F) << 16);
	let exponent = (i32::from(bytes[3] & 0x7F) << 1) | i32::from(bytes[2] >> 7);
	let negative = bytes[3] & 0x80 != 0;

	let magnitude = match exponent {
		0xFF if mantissa == 0 => f32::INFINITY,
		0xFF => return f32::NAN,
		// Every intermediate below is exact in f64, so the final narrowing is too.
		0 => (f64::from(mantissa) * pow2(-23) * pow2(-126)) as f32,
		_ => ((1.0 + f64::from(mantissa) * pow2(-23)) * pow2(exponent - 127)) as f32,
	};
	if negative { -magnitude } else { magnitude }
}

/// Decode a little-endian IEEE-754 double-precision float field by field.
///
/// Follows the same rules as [`manual_f32`] with an 11-bit exponent,
/// a 52-bit mantissa and a subnormal scale of 2^-1022.
#[must_use]
pub fn manual_f64(bytes: [u8; 8]) -> f64 {
	let bits = manual_u64(bytes);
	let mantissa = bits & 0x000F_FFFF_FFFF_FFFF;
	let exponent = ((bits >> 52) & 0x7FF) as i32;
	let negative = bits >> 63 != 0;

	// Mantissa fits in 52 bits, so the conversion is lossless.
	let fraction = mantissa as f64 * pow2(-52);
	let magnitude = match exponent {
		0x7FF if mantissa == 0 => f64::INFINITY,
		0x7FF => return f64::NAN,
		0 => fraction * pow2(-1022),
		_ => (1.0 + fraction) * pow2(exponent - 1023),
	};
	if negative { -magnitude } else { magnitude }
}

/// Exact power of two for a normal binary64 exponent.
fn pow2(exp: i32) -> f64 {
	debug_assert!((-1022..=1023).contains(&exp));
	f64::from_bits(((exp + 1023) as u64) << 52)
}
