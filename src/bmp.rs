#![forbid(unsafe_code)]

//! Module for Windows Bitmap files (BMP).
//!
//! ## The Parts Of The Format We Use
//!
//! Note: All multi-byte values in BMP are always little-endian encoded.
//!
//! * A bitmap file always starts with a "file header". This is always 14 bytes.
//!   * The tag `BM`.
//!   * The total size of the file, so that truncation can be detected.
//!   * The position of the pixel data within the file.
//! * Next is an "info header". The first 4 bytes are always the size of the
//!   full info header. There's several versions, but every version from
//!   `BITMAPINFOHEADER` (40 bytes) onward begins with the same fields: width,
//!   height, color planes, bits per pixel, compression, and the byte size of
//!   the pixel data. This module reads those fields and ignores the rest.
//! * There might be a gap after the headers. The pixel data offset from the
//!   file header skips past it.
//! * Next there is the pixel array. Each row is padded to a multiple of 4
//!   bytes, and when the height is positive the rows are stored bottom to top.
//!   At 24 bits per pixel each pixel is `[b, g, r]`.
//!
//! [decode] checks a header, [encode] makes a blank 24bpp image, and
//! [validate] checks a whole buffer.

use alloc::vec::Vec;

use crate::{util::try_pull_pod, FormatError};

mod raw_headers;
use raw_headers::*;

mod validate;
pub use validate::validate;


/// Bytes in the file header plus a `BITMAPINFOHEADER`.
pub const MIN_HEADERS_LEN: usize = 14 + INFO_HEADER_SIZE as usize;

/// Pixel data offset used by [encode]: file header plus a v5 info header.
pub const ENCODED_PIXEL_DATA_OFFSET: u32 = 14 + V5_HEADER_SIZE;

/// Bit depths that a bitmap header is allowed to declare.
pub const LEGAL_BITS_PER_PIXEL: &[u16] = &[1, 4, 8, 16, 24, 32];

/// The layout of a bitmap, as declared by its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpGeometry {
  /// Image width in pixels.
  pub width: u32,
  /// Image height in pixels.
  pub height: u32,
  /// Bits per pixel, one of [LEGAL_BITS_PER_PIXEL].
  pub bits_per_pixel: u16,
  /// Byte index where the first (bottom) row of pixels starts.
  pub pixel_data_offset: u32,
  /// Bytes per row, including padding. Always a multiple of 4.
  pub row_stride: u32,
  /// Total file size declared by the header (and checked against the rest).
  pub file_size: u32,
}
impl BmpGeometry {
  /// Padding bytes at the end of each row.
  #[inline]
  #[must_use]
  pub const fn row_padding(&self) -> u32 {
    let bits = self.width as u64 * self.bits_per_pixel as u64;
    let used = ((bits + 7) / 8) as u32;
    self.row_stride - used
  }

  /// Bytes of pixel data, `row_stride * height`.
  #[inline]
  #[must_use]
  pub const fn pixel_data_len(&self) -> u32 {
    self.row_stride * self.height
  }
}

/// Bytes per row of pixels, rounded up to a multiple of 4.
///
/// This is `ceil(ceil(width * bits_per_pixel / 8) / 4) * 4`.
#[inline]
pub fn padded_bytes_per_line(width: u32, bits_per_pixel: u16) -> Result<u32, FormatError> {
  let bits_per_line = width.checked_mul(u32::from(bits_per_pixel)).ok_or(FormatError::CheckedMath)?;
  let bytes_per_line = bits_per_line / 8 + u32::from(bits_per_line % 8 != 0);
  let dwords_per_line = bytes_per_line / 4 + u32::from(bytes_per_line % 4 != 0);
  dwords_per_line.checked_mul(4).ok_or(FormatError::CheckedMath)
}

/// Reads and checks the header of a bitmap file.
///
/// Only the header is examined: the pixel data might still be missing, see
/// [validate] for a check of the whole buffer.
///
/// ## Failure
/// * The tag isn't `BM`.
/// * The info header is smaller than 40 bytes, or the pixel data offset
///   points into the headers.
/// * Negative width, or negative height (top-down images aren't supported).
/// * Color planes isn't 1, bits per pixel isn't legal, or there's compression.
/// * The declared pixel data size is neither 0 nor the computed size.
/// * The declared file size isn't `pixel_data_offset + row_stride * height`.
pub fn decode(bytes: &[u8]) -> Result<BmpGeometry, FormatError> {
  let (file_header, rest) = try_pull_pod::<BitmapFileHeader>(bytes)?;
  if file_header.ty != *b"BM" {
    return Err(FormatError::BadMagic(file_header.ty));
  }
  let (info, _rest) = try_pull_pod::<BitmapInfoHeader>(rest)
    .map_err(|_| FormatError::InsufficientBytes { needed: MIN_HEADERS_LEN, actual: bytes.len() })?;

  let info_size = info.size.get();
  if info_size < INFO_HEADER_SIZE {
    return Err(FormatError::InfoHeaderSize(info_size));
  }
  let pixel_data_offset = file_header.bitmap_offset.get();
  let headers_end = info_size.checked_add(14).ok_or(FormatError::CheckedMath)?;
  if pixel_data_offset < headers_end {
    return Err(FormatError::PixelDataOffset { offset: pixel_data_offset, headers_end });
  }

  let width = info.width.get();
  if width < 0 {
    return Err(FormatError::NegativeWidth(width));
  }
  let height = info.height.get();
  if height < 0 {
    return Err(FormatError::TopDown(height));
  }
  let (width, height) = (width.unsigned_abs(), height.unsigned_abs());

  let planes = info.planes.get();
  if planes != 1 {
    return Err(FormatError::ColorPlanes(planes));
  }
  let bits_per_pixel = info.bits_per_pixel.get();
  if !LEGAL_BITS_PER_PIXEL.contains(&bits_per_pixel) {
    return Err(FormatError::BitsPerPixel(bits_per_pixel));
  }
  let compression = info.compression.get();
  if compression != BI_RGB {
    return Err(FormatError::Compression(compression));
  }

  let row_stride = padded_bytes_per_line(width, bits_per_pixel)?;
  let pixel_data_len = row_stride.checked_mul(height).ok_or(FormatError::CheckedMath)?;
  let declared_image_size = info.image_size.get();
  if declared_image_size != 0 && declared_image_size != pixel_data_len {
    return Err(FormatError::PixelDataSize {
      declared: declared_image_size,
      expected: pixel_data_len,
    });
  }
  let expected_file_size =
    pixel_data_offset.checked_add(pixel_data_len).ok_or(FormatError::CheckedMath)?;
  let file_size = file_header.file_size.get();
  if file_size != expected_file_size {
    return Err(FormatError::FileSize { declared: file_size, expected: expected_file_size });
  }

  Ok(BmpGeometry { width, height, bits_per_pixel, pixel_data_offset, row_stride, file_size })
}

/// Makes a complete 24bpp bitmap file with every pixel black.
///
/// The header is a v5 info header (124 bytes) with everything past the
/// `BITMAPINFOHEADER` fields left as zero, so the pixels start at byte 138.
pub fn encode(width: u32, height: u32) -> Result<Vec<u8>, FormatError> {
  let row_stride = padded_bytes_per_line(width, 24)?;
  let pixel_data_len = row_stride.checked_mul(height).ok_or(FormatError::CheckedMath)?;
  let file_size =
    ENCODED_PIXEL_DATA_OFFSET.checked_add(pixel_data_len).ok_or(FormatError::CheckedMath)?;
  let width_i32 = i32::try_from(width).map_err(|_| FormatError::CheckedMath)?;
  let height_i32 = i32::try_from(height).map_err(|_| FormatError::CheckedMath)?;

  let file_header = BitmapFileHeader {
    ty: *b"BM",
    file_size: file_size.into(),
    reserved1: 0_u16.into(),
    reserved2: 0_u16.into(),
    bitmap_offset: ENCODED_PIXEL_DATA_OFFSET.into(),
  };
  let info = BitmapInfoHeader {
    size: V5_HEADER_SIZE.into(),
    width: width_i32.into(),
    height: height_i32.into(),
    planes: 1_u16.into(),
    bits_per_pixel: 24_u16.into(),
    compression: BI_RGB.into(),
    image_size: pixel_data_len.into(),
    pixels_per_meter_x: 0_i32.into(),
    pixels_per_meter_y: 0_i32.into(),
    colors_used: 0_u32.into(),
    important_colors: 0_u32.into(),
  };

  let mut out: Vec<u8> = Vec::new();
  out.resize(file_size as usize, 0);
  out[..14].copy_from_slice(bytemuck::bytes_of(&file_header));
  out[14..MIN_HEADERS_LEN].copy_from_slice(bytemuck::bytes_of(&info));
  Ok(out)
}
