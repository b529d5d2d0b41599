/* tests/helpers/mod.rs */
#![allow(dead_code)]

pub(crate) const MESH_NAME: &str = "tile_07";
pub(crate) const MESH_ID: i32 = -42;
pub(crate) const MESH_FLAGS: i16 = -3;
pub(crate) const MESH_SCALE: f64 = 0.125;
pub(crate) const MESH_POSITIONS: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.5, 2.25];
pub(crate) const MESH_INDICES: [u16; 3] = [0, 1, 2];

/// Build a mesh-like record exercising every read kind.
///
/// Layout: id (i32), flags (i16), version (u16), name (string), scale
/// (f64), vertex count (u32) + positions (f32 x 3n), index count (u32) +
/// indices (u16 x n), checksum (u32), trailing marker byte.
pub(crate) fn mesh_record() -> Vec<u8> {
	let mut buf = Vec::new();
	buf.extend_from_slice(&MESH_ID.to_le_bytes());
	buf.extend_from_slice(&MESH_FLAGS.to_le_bytes());
	push_u16(&mut buf, 3); // version
	push_string(&mut buf, MESH_NAME.as_bytes());
	buf.extend_from_slice(&MESH_SCALE.to_le_bytes());

	push_u32(&mut buf, (MESH_POSITIONS.len() / 3) as u32);
	for p in MESH_POSITIONS {
		buf.extend_from_slice(&p.to_le_bytes());
	}

	push_u32(&mut buf, MESH_INDICES.len() as u32);
	for i in MESH_INDICES {
		push_u16(&mut buf, i);
	}

	push_u32(&mut buf, 0xC0FF_EE00); // checksum
	buf.push(0x7F); // end marker
	buf
}

/// Prefix `body` with its little-endian `u32` length.
pub(crate) fn push_string(buf: &mut Vec<u8>, body: &[u8]) {
	push_u32(buf, body.len() as u32);
	buf.extend_from_slice(body);
}

pub(crate) fn push_u16(buf: &mut Vec<u8>, val: u16) {
	buf.push(val as u8);
	buf.push((val >> 8) as u8);
}

pub(crate) fn push_u32(buf: &mut Vec<u8>, val: u32) {
	buf.push(val as u8);
	buf.push((val >> 8) as u8);
	buf.push((val >> 16) as u8);
	buf.push((val >> 24) as u8);
}
