#![forbid(unsafe_code)]

//! Operations applied where the user clicks.
//!
//! Every tool takes the clicked [Coordinate] (in storage rows, see
//! [Coordinate]) and changes the image in place. A coordinate outside of the
//! image is an error and nothing is written.

use crate::{parse_int_or_default, Bgr8, BitmapImage, Color, Coordinate, EngineError};

/// Used by [draw_gray] when the extra text isn't a number.
pub const DEFAULT_RADIUS: i32 = 1;

/// Used by the line tools when the extra text isn't a number.
pub const DEFAULT_LINE_EXTRA: i32 = 1;

#[inline]
fn check_bounds(image: &BitmapImage, at: Coordinate) -> Result<(), EngineError> {
  if image.contains(at) {
    Ok(())
  } else {
    Err(EngineError::CoordinateOutOfBounds {
      x: at.x,
      y: at.y,
      width: image.width(),
      height: image.height(),
    })
  }
}

/// Sets the clicked pixel to `color`.
pub fn change_pixel(
  image: &mut BitmapImage, at: Coordinate, color: Color,
) -> Result<(), EngineError> {
  check_bounds(image, at)?;
  image.set_pixel(at.x, at.y, Bgr8::from(color));
  Ok(())
}

/// Colors the whole row that was clicked.
///
/// The extra text is reserved for a line thickness (default
/// [DEFAULT_LINE_EXTRA]); lines are currently always 1 pixel thick.
pub fn draw_hline(
  image: &mut BitmapImage, at: Coordinate, color: Color, extra: Option<&str>,
) -> Result<(), EngineError> {
  check_bounds(image, at)?;
  let _thickness = parse_int_or_default(extra, DEFAULT_LINE_EXTRA);
  let px = Bgr8::from(color);
  if let Some(line) = image.rows_mut().nth(at.y as usize) {
    line.fill(px);
  }
  Ok(())
}

/// Colors the whole column that was clicked.
///
/// The extra text is handled the same as with [draw_hline].
pub fn draw_vline(
  image: &mut BitmapImage, at: Coordinate, color: Color, extra: Option<&str>,
) -> Result<(), EngineError> {
  check_bounds(image, at)?;
  let _thickness = parse_int_or_default(extra, DEFAULT_LINE_EXTRA);
  let px = Bgr8::from(color);
  let x = at.x as usize;
  image.rows_mut().for_each(|line| line[x] = px);
  Ok(())
}

/// Turns a disc around the clicked pixel gray.
///
/// Every pixel within Euclidean distance `radius` (the extra text, default
/// [DEFAULT_RADIUS]) of the click is set to its own channel average, truncated
/// (unlike [make_gray](crate::filters::make_gray), which rounds). Distances
/// are in plain pixel units. A radius of 0 only changes the clicked pixel, and a
/// negative radius changes nothing.
pub fn draw_gray(
  image: &mut BitmapImage, at: Coordinate, extra: Option<&str>,
) -> Result<(), EngineError> {
  check_bounds(image, at)?;
  let radius = parse_int_or_default(extra, DEFAULT_RADIUS);
  if radius < 0 {
    return Ok(());
  }
  let radius_sq = i64::from(radius) * i64::from(radius);
  let (cx, cy) = (i64::from(at.x), i64::from(at.y));
  for (y, line) in (0_i64..).zip(image.rows_mut()) {
    let dy = y - cy;
    for (x, px) in (0_i64..).zip(line.iter_mut()) {
      let dx = x - cx;
      if dx * dx + dy * dy <= radius_sq {
        *px = Bgr8::splat(px.gray_truncated());
      }
    }
  }
  Ok(())
}
