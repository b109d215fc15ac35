#![forbid(unsafe_code)]

//! The editable bitmap type.

use alloc::vec::Vec;

use crate::{
  bmp::{self, BmpGeometry},
  Bgr8, Coordinate, DegenerateGeometry, EngineError, FormatError,
};

/// A 24bpp bitmap file held in memory.
///
/// The bytes are the complete file, headers included, so they can be handed
/// straight back to whoever wants to display or save them. The geometry is
/// read from the header once, when the image is made, and the header bytes are
/// never exposed mutably after that.
///
/// * Rows are stored bottom to top: storage row 0 is the bottom of the picture.
/// * Each pixel is 3 bytes, [Bgr8].
/// * Each row is padded to a multiple of 4 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitmapImage {
  bytes: Vec<u8>,
  geometry: BmpGeometry,
}
impl BitmapImage {
  /// Takes ownership of a complete bitmap file.
  ///
  /// ## Failure
  /// * Anything that fails [bmp::validate].
  /// * The image isn't 24 bits per pixel.
  /// * The image is 0 pixels wide or tall.
  pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, EngineError> {
    let geometry = bmp::validate(&bytes)?;
    if geometry.bits_per_pixel != 24 {
      return Err(FormatError::NotBgr24(geometry.bits_per_pixel).into());
    }
    check_dimensions(geometry.width, geometry.height)?;
    Ok(Self { bytes, geometry })
  }

  /// Allocates a new all-black image.
  ///
  /// This is how every operation that produces a new image gets its output
  /// buffer.
  pub fn new_blank(width: u32, height: u32) -> Result<Self, EngineError> {
    check_dimensions(width, height)?;
    let bytes = bmp::encode(width, height)?;
    let geometry = bmp::decode(&bytes)?;
    Ok(Self { bytes, geometry })
  }

  /// Image width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.geometry.width
  }

  /// Image height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.geometry.height
  }

  /// `(width, height)`
  #[inline]
  #[must_use]
  pub const fn dimensions(&self) -> (u32, u32) {
    (self.geometry.width, self.geometry.height)
  }

  /// The header's view of the image layout.
  #[inline]
  #[must_use]
  pub const fn geometry(&self) -> &BmpGeometry {
    &self.geometry
  }

  /// The complete file bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes
  }

  /// Gives back the complete file bytes.
  #[inline]
  #[must_use]
  pub fn into_bytes(self) -> Vec<u8> {
    self.bytes
  }

  /// If the coordinate is within the image.
  #[inline]
  #[must_use]
  pub const fn contains(&self, at: Coordinate) -> bool {
    at.x < self.geometry.width && at.y < self.geometry.height
  }

  /// Byte index of the pixel at `(x, y)`, with `y` counted in storage rows
  /// (from the bottom).
  ///
  /// There's no bounds check here, callers keep `x` and `y` in range.
  #[inline]
  #[must_use]
  pub const fn offset_of(&self, x: u32, y: u32) -> usize {
    self.geometry.pixel_data_offset as usize
      + self.geometry.row_stride as usize * y as usize
      + 3 * x as usize
  }

  /// Reads the pixel at `(x, y)`.
  ///
  /// ## Panics
  /// * If the position is past the end of the buffer.
  #[inline]
  #[must_use]
  pub fn pixel(&self, x: u32, y: u32) -> Bgr8 {
    let i = self.offset_of(x, y);
    *bytemuck::from_bytes(&self.bytes[i..i + 3])
  }

  /// Writes the pixel at `(x, y)`.
  ///
  /// ## Panics
  /// * If the position is past the end of the buffer.
  #[inline]
  pub fn set_pixel(&mut self, x: u32, y: u32, px: Bgr8) {
    let i = self.offset_of(x, y);
    self.bytes[i..i + 3].copy_from_slice(bytemuck::bytes_of(&px));
  }

  /// Iterates the rows of pixels, bottom row first. Padding isn't included.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[Bgr8]> + '_ {
    let (start, stride, used) = self.row_span();
    self.bytes[start..].chunks_exact(stride).map(move |line| bytemuck::cast_slice(&line[..used]))
  }

  /// Iterates the rows of pixels mutably, bottom row first. Padding isn't
  /// included.
  #[inline]
  pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Bgr8]> + '_ {
    let (start, stride, used) = self.row_span();
    self.bytes[start..]
      .chunks_exact_mut(stride)
      .map(move |line| bytemuck::cast_slice_mut(&mut line[..used]))
  }

  /// Applies `op` to every pixel.
  #[inline]
  pub fn for_each_pixel_mut(&mut self, mut op: impl FnMut(&mut Bgr8)) {
    self.rows_mut().flatten().for_each(|px| op(px));
  }

  /// Raw access to the buffer, header included.
  #[cfg(test)]
  pub(crate) fn bytes_mut(&mut self) -> &mut Vec<u8> {
    &mut self.bytes
  }

  /// Start of the pixel data, stride, and used bytes per row.
  #[inline]
  fn row_span(&self) -> (usize, usize, usize) {
    let g = &self.geometry;
    (g.pixel_data_offset as usize, g.row_stride as usize, g.width as usize * 3)
  }
}

#[inline]
fn check_dimensions(width: u32, height: u32) -> Result<(), DegenerateGeometry> {
  if width == 0 {
    Err(DegenerateGeometry::ZeroWidth)
  } else if height == 0 {
    Err(DegenerateGeometry::ZeroHeight)
  } else {
    Ok(())
  }
}
