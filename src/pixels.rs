#![forbid(unsafe_code)]

//! Pixel, color, and coordinate types.

/// A color chosen by the user, used as an operation parameter.
pub use pixel_formats::r8g8b8_Srgb as Color;

/// One 24bpp pixel exactly as it's stored in a bitmap: blue, green, red.
///
/// This is `Pod`, so a row of pixel bytes can be viewed as `[Bgr8]` directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Bgr8 {
  pub b: u8,
  pub g: u8,
  pub r: u8,
}
impl Bgr8 {
  /// Black.
  pub const BLACK: Self = Self::splat(0);
  /// White.
  pub const WHITE: Self = Self::splat(255);

  /// Makes a pixel from its channels in storage order.
  #[inline]
  #[must_use]
  pub const fn new(b: u8, g: u8, r: u8) -> Self {
    Self { b, g, r }
  }

  /// All three channels set to `v`.
  #[inline]
  #[must_use]
  pub const fn splat(v: u8) -> Self {
    Self { b: v, g: v, r: v }
  }

  /// Sum of the three channels, `0..=765`.
  #[inline]
  #[must_use]
  pub const fn brightness(self) -> u32 {
    self.b as u32 + self.g as u32 + self.r as u32
  }

  /// The channel average, rounded to nearest.
  ///
  /// A third of an integer never lands on `.5`, so there's no tie to break.
  #[inline]
  #[must_use]
  pub const fn gray_level(self) -> u8 {
    ((self.brightness() + 1) / 3) as u8
  }

  /// The channel average, truncated.
  #[inline]
  #[must_use]
  pub const fn gray_truncated(self) -> u8 {
    (self.brightness() / 3) as u8
  }

  /// Applies `op` to each channel.
  #[inline]
  #[must_use]
  pub fn map(self, mut op: impl FnMut(u8) -> u8) -> Self {
    Self { b: op(self.b), g: op(self.g), r: op(self.r) }
  }
}
impl From<Color> for Bgr8 {
  #[inline]
  fn from(c: Color) -> Self {
    Self { b: c.b, g: c.g, r: c.r }
  }
}
impl From<Bgr8> for Color {
  #[inline]
  fn from(p: Bgr8) -> Self {
    Color { r: p.r, g: p.g, b: p.b }
  }
}
impl From<[u8; 3]> for Bgr8 {
  #[inline]
  fn from([b, g, r]: [u8; 3]) -> Self {
    Self { b, g, r }
  }
}

/// A position in the image, in pixels.
///
/// `y` counts *storage* rows, so `y == 0` is the bottom row of the picture.
/// This is what a UI gets when it measures a click from the lower left corner
/// of the displayed image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct Coordinate {
  pub x: u32,
  pub y: u32,
}
impl Coordinate {
  /// A coordinate in storage rows.
  #[inline]
  #[must_use]
  pub const fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }

  /// Converts a coordinate measured from the top left (display order) of an
  /// image `height` pixels tall.
  ///
  /// Returns `None` if `y` isn't within the image.
  #[inline]
  #[must_use]
  pub const fn from_top_left(x: u32, y: u32, height: u32) -> Option<Self> {
    if y < height {
      Some(Self { x, y: height - 1 - y })
    } else {
      None
    }
  }
}
