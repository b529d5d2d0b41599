/* tests/view.rs */
#![allow(missing_docs)]

mod helpers;

use memstream::{ArrayView, Decode, Error, MemStream};

#[test]
fn u16_array_aliases_source() {
	let data: Vec<u8> = (0u8..16).collect();
	let mut s = MemStream::new(&data);
	s.read_u8().unwrap();

	let view = s.read_u16_array(5).unwrap();
	assert_eq!(s.position(), 11);
	assert_eq!(view.len(), 5);
	assert_eq!(view.byte_len(), 10);
	assert_eq!(view.as_bytes(), &data[1..11]);
	assert!(core::ptr::eq(view.as_bytes().as_ptr(), data[1..].as_ptr()));
	assert_eq!(view.get(0), Some(u16::from_le_bytes([1, 2])));
	assert_eq!(view.get(4), Some(u16::from_le_bytes([9, 10])));
}

#[test]
fn every_bulk_kind_advances_by_count_times_width() {
	let data = [0u8; 128];
	let mut s = MemStream::new(&data);
	s.read_u8_array(3).unwrap();
	assert_eq!(s.position(), 3);
	s.read_u16_array(3).unwrap();
	assert_eq!(s.position(), 9);
	s.read_u32_array(3).unwrap();
	assert_eq!(s.position(), 21);
	s.read_f32_array(3).unwrap();
	assert_eq!(s.position(), 33);
	s.read_f64_array(3).unwrap();
	assert_eq!(s.position(), 57);
	s.read_array::<i16>(2).unwrap();
	assert_eq!(s.position(), 61);
}

#[test]
fn zero_count_is_empty_and_free() {
	let data = [0xAA];
	let mut s = MemStream::new(&data);
	let view = s.read_f64_array(0).unwrap();
	assert!(view.is_empty());
	assert_eq!(s.position(), 0);
}

#[test]
fn short_buffer_reports_array_kind() {
	let data = [0u8; 7];
	let mut s = MemStream::new(&data);
	let err = s.read_f32_array(2).unwrap_err();
	assert_eq!(
		err,
		Error::OutOfRange {
			what: "f32 array",
			offset: 0,
			need: 8,
			have: 7,
		}
	);
	assert_eq!(s.position(), 0);
}

#[test]
fn overflowing_count_is_rejected() {
	let data = [0u8; 4];
	let mut s = MemStream::new(&data);
	let err = s.read_f64_array(usize::MAX).unwrap_err();
	assert_eq!(
		err,
		Error::LengthOverflow {
			count: usize::MAX,
			width: 8,
		}
	);
	assert_eq!(s.position(), 0);
}

#[test]
fn views_outlive_the_reader() {
	let data = helpers::mesh_record();
	let positions: ArrayView<'_, f32> = {
		let mut s = MemStream::new(&data);
		s.read_i32().unwrap();
		s.read_i16().unwrap();
		s.read_u16().unwrap();
		s.read_string().unwrap();
		s.read_f64().unwrap();
		let n = s.read_u32().unwrap() as usize;
		s.read_f32_array(n * 3).unwrap()
	};
	let collected: Vec<f32> = positions.iter().collect();
	assert_eq!(collected, helpers::MESH_POSITIONS);
	assert_eq!(positions.last(), Some(2.25));
}

#[test]
fn iterate_by_reference_and_value() {
	let data = [1u8, 0, 2, 0, 3, 0, 4, 0];
	let mut s = MemStream::new(&data);
	let view = s.read_u16_array(4).unwrap();
	let mut sum = 0u16;
	for v in &view {
		sum += v;
	}
	assert_eq!(sum, 10);
	let reversed: Vec<u16> = view.into_iter().rev().collect();
	assert_eq!(reversed, vec![4, 3, 2, 1]);
}

#[test]
fn raw_bytes_alias_source() {
	let data = [9u8, 8, 7, 6];
	let mut s = MemStream::new(&data);
	let head = s.read_bytes(3).unwrap();
	assert_eq!(head, &[9, 8, 7]);
	assert!(core::ptr::eq(head.as_ptr(), data.as_ptr()));
	assert_eq!(s.remaining(), 1);
}

#[test]
fn manual_reader_views_match_manual_scalars() {
	let mut data = Vec::new();
	data.extend_from_slice(&0x7FC0_0001u32.to_le_bytes()); // NaN with payload
	data.extend_from_slice(&0x0000_0005u32.to_le_bytes()); // subnormal
	data.extend_from_slice(&(-1.25f32).to_le_bytes());

	let mut scalars = MemStream::with_decode(&data, Decode::Manual);
	let expected: Vec<u32> = (0..3).map(|_| scalars.read_f32().unwrap().to_bits()).collect();

	let mut bulk = MemStream::with_decode(&data, Decode::Manual);
	let view = bulk.read_f32_array(3).unwrap();
	assert_eq!(view.decode(), Decode::Manual);
	let got: Vec<u32> = view.iter().map(f32::to_bits).collect();
	assert_eq!(got, expected);
	assert_eq!(view.get(0).map(f32::to_bits), Some(expected[0]));
	assert_eq!(got[1], 5);
}

#[test]
fn native_reader_views_keep_nan_payload() {
	let data = 0x7FC0_0001u32.to_le_bytes();
	let mut s = MemStream::new(&data);
	let view = s.read_f32_array(1).unwrap();
	assert_eq!(view.decode(), Decode::Native);
	assert_eq!(view.first().map(f32::to_bits), Some(0x7FC0_0001));
}

#[test]
fn manual_reader_integer_views() {
	let data = [0xFF, 0xFF, 0x01, 0x80, 0x78, 0x56, 0x34, 0x12];
	for decode in [Decode::Native, Decode::Manual] {
		let mut s = MemStream::with_decode(&data, decode);
		assert_eq!(s.read_array::<i16>(2).unwrap().to_vec(), vec![-1, -32767]);
		assert_eq!(s.read_u32_array(1).unwrap().to_vec(), vec![0x1234_5678]);
	}
}
