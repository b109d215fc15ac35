//! TV static.

use alloc::vec::Vec;

use crate::{parse_int_or_default, Bgr8, BitmapImage, Color, EngineError};

/// Used by [make_static] when the extra text isn't a number.
pub const DEFAULT_NOISE_DISTANCE: i32 = 255;

/// Replaces every pixel with random noise around `color`.
///
/// The extra text is the max distance `d` (default
/// [DEFAULT_NOISE_DISTANCE], negative counts as 0). Each channel becomes a
/// uniformly random value in `max(c - d, 0) ..= min(c + d, 255)`, where `c`
/// is that channel of `color`. The old pixels don't matter.
///
/// ## Failure
/// * The system random source fails. All of the random data is gathered
///   before the first pixel is written, so the image is unchanged.
pub fn make_static(
  image: &mut BitmapImage, color: Color, extra: Option<&str>,
) -> Result<(), EngineError> {
  let distance = parse_int_or_default(extra, DEFAULT_NOISE_DISTANCE).clamp(0, 255) as u8;
  let center = Bgr8::from(color);
  let channels = image.width() as usize * image.height() as usize * 3;
  let mut entropy: Vec<u8> = Vec::new();
  entropy.resize(channels * 4, 0);
  getrandom::getrandom(&mut entropy).map_err(EngineError::RandomSource)?;

  let mut draws = entropy.chunks_exact(4).map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]));
  image.for_each_pixel_mut(|px| {
    *px = center.map(|c| {
      let low = c.saturating_sub(distance);
      let high = c.saturating_add(distance);
      let span = u32::from(high - low) + 1;
      low + (draws.next().unwrap_or_default() % span) as u8
    });
  });
  Ok(())
}
