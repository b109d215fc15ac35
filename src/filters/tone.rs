//! Brightness, grayscale, and threshold filters.

use crate::{Bgr8, BitmapImage, DegenerateGeometry, EngineError};

/// Multiplies every channel by 1.5, capped at 255.
pub fn lighten(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = px.map(|v| (u16::from(v) * 3 / 2).min(255) as u8));
}

/// Multiplies every channel by 0.5.
pub fn darken(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = px.map(|v| v / 2));
}

/// Sets every channel to the rounded average of the pixel's channels.
pub fn make_gray(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = Bgr8::splat(px.gray_level()));
}

/// Moves every channel half of the way to the pixel's gray level.
///
/// The distance moved is `|value - gray| / 2`, truncated.
pub fn grayify(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| {
    let gray = px.gray_level();
    *px = px.map(|v| if v > gray { v - (v - gray) / 2 } else { v + (gray - v) / 2 });
  });
}

/// Each channel on its own becomes 255 if above 127.5, otherwise 0.
pub fn intensify(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = px.map(|v| if v > 127 { 255 } else { 0 }));
}

/// Whole pixels become white if brighter than `3 * 127.5`, otherwise black.
///
/// The comparison is strict: a brightness of exactly 382.5 can't happen, and
/// 382 (for example `(127, 127, 128)`) goes black while 383 goes white.
pub fn make_two_tone(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| {
    *px = if 2 * px.brightness() > 765 { Bgr8::WHITE } else { Bgr8::BLACK };
  });
}

/// Four gray levels: `{0, 85, 170, 255}` split at brightness 191.25, 382.5,
/// and 573.75 (strictly greater goes up a level).
pub fn make_four_tone(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| {
    let quad = 4 * px.brightness();
    let level = if quad > 2295 {
      255
    } else if quad > 1530 {
      170
    } else if quad > 765 {
      85
    } else {
      0
    };
    *px = Bgr8::splat(level);
  });
}

/// Two tone, split at the image's own mean brightness.
///
/// The first pass only reads: it sums the brightness of every pixel, and the
/// mean is that sum divided by the pixel count, truncated. The second pass
/// makes pixels brighter than the mean white and the rest black.
pub fn make_better_two_tone(image: &mut BitmapImage) {
  let total: u64 = image.rows().flatten().map(|px| u64::from(px.brightness())).sum();
  let count = u64::from(image.width()) * u64::from(image.height());
  let mean = total / count.max(1);
  log::trace!("make_better_two_tone: mean brightness {mean}");
  image.for_each_pixel_mut(|px| {
    *px = if u64::from(px.brightness()) > mean { Bgr8::WHITE } else { Bgr8::BLACK };
  });
}

/// Fades the image in from black, bottom to top.
///
/// Storage row `r` is scaled by `r / (height - 1)`, so the bottom row goes
/// black and the top row is unchanged.
///
/// ## Failure
/// * The image is only 1 pixel tall, so there's no gradient to make.
pub fn fade_in_vertical(image: &mut BitmapImage) -> Result<(), EngineError> {
  let last_row = image.height().saturating_sub(1);
  if last_row == 0 {
    return Err(DegenerateGeometry::SingleRowGradient.into());
  }
  for (row, line) in (0_u32..).zip(image.rows_mut()) {
    for px in line {
      *px = px.map(|v| (u32::from(v) * row / last_row) as u8);
    }
  }
  Ok(())
}
