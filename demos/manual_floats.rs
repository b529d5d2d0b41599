/* demos/manual_floats.rs */
#![allow(missing_docs)]

use memstream::decode::manual_f32;
use memstream::{Decode, MemStream};

fn main() {
	let samples = [
		0.0f32,
		-0.0,
		1.0,
		f32::from_bits(1),
		f32::INFINITY,
		f32::NEG_INFINITY,
		f32::NAN,
	];

	let mut data = Vec::new();
	for v in samples {
		data.extend_from_slice(&v.to_le_bytes());
	}

	let mut native = MemStream::new(&data);
	let mut manual = MemStream::with_decode(&data, Decode::Manual);
	while !native.is_at_end() {
		let Some(&raw) = native.rest().first_chunk::<4>() else {
			break;
		};
		let (Ok(a), Ok(b)) = (native.read_f32(), manual.read_f32()) else {
			break;
		};
		let agree = a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan());
		println!(
			"{raw:02x?}: native {a:e}, manual {b:e}, free fn {:e}, agree: {agree}",
			manual_f32(raw)
		);
	}
}
