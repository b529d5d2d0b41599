/* demos/decode_mesh.rs */
#![allow(missing_docs)]

use memstream::{Error, MemStream};

fn main() {
	let record = build_sample_record();

	if let Err(e) = decode(&record) {
		eprintln!("Decode error: {e}");
	}

	// One byte short of the index list.
	if let Err(e) = decode(&record[..record.len() - 1]) {
		println!("Truncated record: {e}");
	}
}

fn decode(record: &[u8]) -> Result<(), Error> {
	let mut s = MemStream::new(record);
	println!("Host byte order: {}", s.host_endian());

	let name = s.read_string()?;
	let scale = s.read_f64()?;
	let vertex_count = s.read_u32()? as usize;
	let positions = s.read_f32_array(vertex_count * 3)?;
	let index_count = s.read_u32()? as usize;
	let indices = s.read_u16_array(index_count)?;

	println!("Mesh: {name} (scale {scale})");
	let coords = positions.to_vec();
	for (i, xyz) in coords.chunks_exact(3).enumerate() {
		let scaled: Vec<f32> = xyz.iter().map(|c| c * scale as f32).collect();
		println!("  v{i}: ({}, {}, {})", scaled[0], scaled[1], scaled[2]);
	}
	println!("Triangle indices: {:?}", indices.to_vec());
	println!("Consumed {} of {} bytes", s.position(), s.len());
	Ok(())
}

fn build_sample_record() -> Vec<u8> {
	let mut buf = Vec::new();
	let name = b"quad";
	buf.extend_from_slice(&(name.len() as u32).to_le_bytes());
	buf.extend_from_slice(name);
	buf.extend_from_slice(&2.0f64.to_le_bytes());

	let positions: [f32; 12] = [
		0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
	];
	buf.extend_from_slice(&4u32.to_le_bytes());
	for p in positions {
		buf.extend_from_slice(&p.to_le_bytes());
	}

	let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
	buf.extend_from_slice(&(indices.len() as u32).to_le_bytes());
	for i in indices {
		buf.extend_from_slice(&i.to_le_bytes());
	}
	buf
}
