//! The on-disk header structs.
//!
//! These are read and written with `bytemuck`, so every field is a `pack1`
//! type (alignment 1) and the struct layout matches the file layout exactly.

use pack1::*;

pub(super) const BI_RGB: u32 = 0;

/// Size of a `BITMAPV5HEADER`, which is what we write for new images.
pub(super) const V5_HEADER_SIZE: u32 = 124;

/// Size of a `BITMAPINFOHEADER`, the smallest header we accept.
pub(super) const INFO_HEADER_SIZE: u32 = 40;

/// The 14 bytes at the start of every bitmap file.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapFileHeader {
  pub ty: [u8; 2],
  pub file_size: U32LE,
  pub reserved1: U16LE,
  pub reserved2: U16LE,
  pub bitmap_offset: U32LE,
}

/// The fields every info header from `BITMAPINFOHEADER` onward starts with.
///
/// Bigger headers (v4, v5) just keep going after this, and none of the extra
/// fields matter for uncompressed 24bpp data.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapInfoHeader {
  /// size of the full info header, not just this part.
  pub size: U32LE,

  /// width in pixels.
  pub width: I32LE,

  /// height in pixels. Positive means the rows are stored bottom up.
  pub height: I32LE,

  /// must be 1
  pub planes: U16LE,

  /// 1, 4, 8, 16, 24, or 32
  pub bits_per_pixel: U16LE,

  /// must be `BI_RGB`
  pub compression: U32LE,

  /// If non-zero, the byte size of the pixel data.
  pub image_size: U32LE,

  pub pixels_per_meter_x: I32LE,
  pub pixels_per_meter_y: I32LE,
  pub colors_used: U32LE,
  pub important_colors: U32LE,
}

#[test]
fn test_header_struct_sizes() {
  use core::mem::size_of;
  assert_eq!(size_of::<BitmapFileHeader>(), 14);
  assert_eq!(size_of::<BitmapInfoHeader>(), INFO_HEADER_SIZE as usize);
}
