use bmpshop::{
  bmp::{decode, encode, validate},
  BitmapImage, EngineError, FormatError,
};

#[test]
fn test_random_bytes_do_not_panic_decoder() {
  // even totally random data should never panic the decoder!
  for len in [0, 1, 14, 53, 54, 137, 138, 1024] {
    for _ in 0..10 {
      let v = super::rand_bytes(len);
      let _ = decode(&v);
      let _ = validate(&v);
      let _ = BitmapImage::from_bytes(v);
    }
  }
  // same with a correct magic, so that the header fields are looked at.
  for _ in 0..50 {
    let mut v = super::rand_bytes(256);
    v[0..2].copy_from_slice(b"BM");
    let _ = validate(&v);
    let _ = BitmapImage::from_bytes(v);
  }
}

#[test]
fn test_hostile_header_bytes_do_not_panic() {
  let good = encode(5, 3).unwrap();
  for i in 0..54 {
    for value in [0x00, 0x01, 0x7F, 0x80, 0xFF] {
      let mut v = good.clone();
      v[i] = value;
      match BitmapImage::from_bytes(v) {
        Ok(img) => assert_eq!(img.dimensions(), (5, 3), "byte {i} set to {value}"),
        Err(EngineError::Format(_)) | Err(EngineError::DegenerateGeometry(_)) => (),
        Err(other) => panic!("byte {i} set to {value}: unexpected {other:?}"),
      }
    }
  }
}

#[test]
fn test_from_bytes_round_trip() {
  for (width, height) in [(1, 1), (2, 5), (3, 3), (4, 2), (7, 1), (640, 480)] {
    let bytes = encode(width, height).unwrap();
    let img = BitmapImage::from_bytes(bytes.clone()).unwrap();
    assert_eq!(img.dimensions(), (width, height));
    assert_eq!(img.into_bytes(), bytes);
  }
}

#[test]
fn test_truncated_and_padded_buffers_are_rejected() {
  let bytes = encode(3, 2).unwrap();
  let declared = bytes.len() as u32;

  let mut short = bytes.clone();
  short.pop();
  assert_eq!(
    BitmapImage::from_bytes(short),
    Err(EngineError::Format(FormatError::BufferLength { declared, actual: bytes.len() - 1 }))
  );

  let mut long = bytes.clone();
  long.push(0);
  assert_eq!(
    validate(&long),
    Err(FormatError::BufferLength { declared, actual: bytes.len() + 1 })
  );
}

#[test]
fn test_other_bit_depths_are_not_editable() {
  let mut bytes = encode(8, 1).unwrap();
  // 32bpp: the same 24 bytes of pixel data hold 6 pixels
  bytes[18..22].copy_from_slice(&6_i32.to_le_bytes());
  bytes[28..30].copy_from_slice(&32_u16.to_le_bytes());
  assert!(validate(&bytes).is_ok());
  assert_eq!(BitmapImage::from_bytes(bytes), Err(EngineError::Format(FormatError::NotBgr24(32))));
}
