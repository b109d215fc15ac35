#![forbid(unsafe_code)]

//! Operations that combine two images into a new one.
//!
//! Both images must be the same size, which is checked before the output is
//! allocated. The inputs are only read.

use crate::{Bgr8, BitmapImage, EngineError};

/// Minimum amount that green has to beat both blue and red by for
/// [chroma_overlay] to treat a pixel as green screen.
pub const CHROMA_KEY_MARGIN: i16 = 100;

fn check_same_size(primary: &BitmapImage, secondary: &BitmapImage) -> Result<(), EngineError> {
  if primary.dimensions() == secondary.dimensions() {
    Ok(())
  } else {
    Err(EngineError::DimensionMismatch {
      primary: primary.dimensions(),
      secondary: secondary.dimensions(),
    })
  }
}

/// Builds a new image by combining each pair of pixels with `op`.
fn zip_pixels(
  a: &BitmapImage, b: &BitmapImage, mut op: impl FnMut(Bgr8, Bgr8) -> Bgr8,
) -> Result<BitmapImage, EngineError> {
  check_same_size(a, b)?;
  let mut out = BitmapImage::new_blank(a.width(), a.height())?;
  for ((line_out, line_a), line_b) in out.rows_mut().zip(a.rows()).zip(b.rows()) {
    for ((px_out, px_a), px_b) in line_out.iter_mut().zip(line_a).zip(line_b) {
      *px_out = op(*px_a, *px_b);
    }
  }
  Ok(out)
}

/// Averages two images, each channel on its own (truncated).
pub fn blend_other(image: &BitmapImage, other: &BitmapImage) -> Result<BitmapImage, EngineError> {
  zip_pixels(image, other, |a, b| Bgr8 {
    b: ((u16::from(a.b) + u16::from(b.b)) / 2) as u8,
    g: ((u16::from(a.g) + u16::from(b.g)) / 2) as u8,
    r: ((u16::from(a.r) + u16::from(b.r)) / 2) as u8,
  })
}

/// If a pixel is "green screen": green beats blue and red each by at least
/// [CHROMA_KEY_MARGIN].
#[inline]
#[must_use]
pub fn is_chroma_key(px: Bgr8) -> bool {
  let (b, g, r) = (i16::from(px.b), i16::from(px.g), i16::from(px.r));
  g - b >= CHROMA_KEY_MARGIN && g - r >= CHROMA_KEY_MARGIN
}

/// Green screen compositing.
///
/// `foreground` pixels that are [chroma keyed](is_chroma_key) are replaced by
/// the `background` pixel at the same position, all others are kept.
pub fn chroma_overlay(
  foreground: &BitmapImage, background: &BitmapImage,
) -> Result<BitmapImage, EngineError> {
  zip_pixels(foreground, background, |fg, bg| if is_chroma_key(fg) { bg } else { fg })
}
