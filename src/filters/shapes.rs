//! Filters that draw, fill, or move pixels around.

use crate::{
  tools::{change_pixel, draw_hline, draw_vline},
  Bgr8, BitmapImage, Color, Coordinate, EngineError,
};

/// Sets every pixel to `color`.
pub fn fill(image: &mut BitmapImage, color: Color) {
  let px = Bgr8::from(color);
  image.rows_mut().for_each(|line| line.fill(px));
}

/// Copies the left half of every row, mirrored, over the right half.
///
/// Only `width / 2` columns are copied, so with an odd width the middle
/// column stays as it was.
pub fn mirror_right_horizontal(image: &mut BitmapImage) {
  for line in image.rows_mut() {
    let half = line.len() / 2;
    let (left, right) = line.split_at_mut(line.len() - half);
    for (src, dst) in left.iter().zip(right.iter_mut().rev()) {
      *dst = *src;
    }
  }
}

/// Draws a 1 pixel frame of `color` around the edge of the image.
pub fn borders(
  image: &mut BitmapImage, color: Color, extra: Option<&str>,
) -> Result<(), EngineError> {
  let (right, top) = (image.width() - 1, image.height() - 1);
  draw_vline(image, Coordinate::new(0, 0), color, extra)?;
  draw_hline(image, Coordinate::new(0, 0), color, extra)?;
  draw_hline(image, Coordinate::new(0, top), color, extra)?;
  draw_vline(image, Coordinate::new(right, 0), color, extra)
}

/// Draws a horizontal line across storage row `height / 2`.
pub fn draw_centered_hline(
  image: &mut BitmapImage, color: Color, extra: Option<&str>,
) -> Result<(), EngineError> {
  let middle = image.height() / 2;
  draw_hline(image, Coordinate::new(0, middle), color, extra)
}

/// Draws a vertical line down column `width / 2`.
pub fn draw_centered_vline(
  image: &mut BitmapImage, color: Color, extra: Option<&str>,
) -> Result<(), EngineError> {
  let middle = image.width() / 2;
  draw_vline(image, Coordinate::new(middle, 0), color, extra)
}

/// Colors the pixel at `(width / 2, height / 2)`.
pub fn mark_middle(image: &mut BitmapImage, color: Color) -> Result<(), EngineError> {
  let at = Coordinate::new(image.width() / 2, image.height() / 2);
  change_pixel(image, at, color)
}
