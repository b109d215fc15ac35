use alloc::string::String;

/// Problems with the bytes of a bitmap file.
///
/// These are always detected before any pixel is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum FormatError {
  /// Fewer bytes than the fixed headers need.
  #[error("insufficient bytes: need at least {needed}, got {actual}")]
  InsufficientBytes { needed: usize, actual: usize },

  /// The file doesn't start with `BM`.
  #[error("header field was invalid: expected \"BM\", found {0:?}")]
  BadMagic([u8; 2]),

  /// The info header is smaller than the 40 byte `BITMAPINFOHEADER`.
  #[error("info header size {0} is smaller than 40")]
  InfoHeaderSize(u32),

  /// The pixel data would start inside of the headers.
  #[error("pixel data offset {offset} overlaps the headers (which end at {headers_end})")]
  PixelDataOffset { offset: u32, headers_end: u32 },

  /// The width field is negative.
  #[error("width {0} is negative")]
  NegativeWidth(i32),

  /// Top-down row order (a negative height) isn't supported.
  #[error("height {0} is negative (top-down bitmaps are not supported)")]
  TopDown(i32),

  /// Color planes must be 1.
  #[error("color planes should be 1, found {0}")]
  ColorPlanes(u16),

  /// Bits per pixel must be one of 1, 4, 8, 16, 24, or 32.
  #[error("bits per pixel is {0}, allowed options are 1, 4, 8, 16, 24, 32")]
  BitsPerPixel(u16),

  /// Only uncompressed bitmaps are supported.
  #[error("compression {0} is not supported, only uncompressed images are")]
  Compression(u32),

  /// The declared pixel data size must be 0 or the actual size.
  #[error("pixel data size can either be 0 or the actual size ({expected}), found {declared}")]
  PixelDataSize { declared: u32, expected: u32 },

  /// The declared file size doesn't match the header geometry.
  #[error("file size is incorrect: declared {declared}, geometry needs {expected}")]
  FileSize { declared: u32, expected: u32 },

  /// The buffer isn't as long as the declared file size.
  #[error("buffer holds {actual} bytes but the header declares {declared}")]
  BufferLength { declared: u32, actual: usize },

  /// The image can be parsed, but it isn't 24 bits per pixel so it can't be
  /// edited.
  #[error("only 24 bits per pixel images can be edited, found {0}")]
  NotBgr24(u16),

  /// A size computation overflowed.
  #[error("image dimensions overflow the file size computation")]
  CheckedMath,
}

/// Geometry that an operation can't work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DegenerateGeometry {
  /// The image is 0 pixels wide.
  #[error("width is 0")]
  ZeroWidth,
  /// The image is 0 pixels tall.
  #[error("height is 0")]
  ZeroHeight,
  /// A vertical gradient divides by `height - 1`.
  #[error("a vertical gradient needs an image at least 2 pixels tall")]
  SingleRowGradient,
}

/// A parameter that an operation can't run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Parameter {
  Color,
  Coordinate,
  OtherImage,
}
impl core::fmt::Display for Parameter {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Parameter::Color => "a color",
      Parameter::Coordinate => "a clicked coordinate",
      Parameter::OtherImage => "a second image",
    })
  }
}

/// An error from running an operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum EngineError {
  /// An input buffer is malformed or unsupported.
  #[error(transparent)]
  Format(#[from] FormatError),

  /// A two-image operation got images of different sizes.
  #[error("images differ in size: {primary:?} vs {secondary:?}")]
  DimensionMismatch { primary: (u32, u32), secondary: (u32, u32) },

  /// The image shape doesn't allow the operation.
  #[error("degenerate geometry: {0}")]
  DegenerateGeometry(#[from] DegenerateGeometry),

  /// The operation needs a parameter that wasn't given.
  #[error("`{operation}` needs {parameter}")]
  MissingParameter { operation: &'static str, parameter: Parameter },

  /// A tool was clicked outside of the image.
  #[error("coordinate ({x}, {y}) is outside of the {width}x{height} image")]
  CoordinateOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

  /// No operation has this name.
  #[error("no operation is named `{0}`")]
  UnknownOperation(String),

  /// An operation's output failed the integrity check.
  #[error("the image returned by `{operation}` was corrupt and cannot be displayed: {reason}")]
  CorruptResult { operation: &'static str, reason: FormatError },

  /// The system random source failed.
  #[cfg(feature = "noise")]
  #[error("the random source failed: {0}")]
  RandomSource(getrandom::Error),
}
