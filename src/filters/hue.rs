//! Recolor an image towards one hue, keeping its light and dark areas.

use crate::{Bgr8, BitmapImage};

/// Which channels a hue filter ramps first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Targets {
  b: bool,
  g: bool,
  r: bool,
}

/// The shared rule behind [redify], [greenify], [blueify], and [magentify].
///
/// With `s = b + g + r`:
/// * `s <= 382.5`: target channels are `s * 255 / 382.5`, the others are 0.
/// * `s > 382.5`: target channels are 255, the others are
///   `(s - 382.5) * 255 / 382.5`.
///
/// Since `255 / 382.5` is exactly `2 / 3`, that's `2s / 3` and `(2s - 765) / 3`.
#[inline]
fn ramp(px: Bgr8, targets: Targets) -> Bgr8 {
  let s = px.brightness();
  let (on, off) =
    if 2 * s <= 765 { ((2 * s / 3) as u8, 0) } else { (255, ((2 * s - 765) / 3) as u8) };
  let pick = |is_target: bool| if is_target { on } else { off };
  Bgr8 { b: pick(targets.b), g: pick(targets.g), r: pick(targets.r) }
}

#[inline]
fn recolor(image: &mut BitmapImage, targets: Targets) {
  image.for_each_pixel_mut(|px| *px = ramp(*px, targets));
}

/// Dark areas go from black to red, light areas from red to white.
pub fn redify(image: &mut BitmapImage) {
  recolor(image, Targets { b: false, g: false, r: true })
}

/// Dark areas go from black to green, light areas from green to white.
pub fn greenify(image: &mut BitmapImage) {
  recolor(image, Targets { b: false, g: true, r: false })
}

/// Dark areas go from black to blue, light areas from blue to white.
pub fn blueify(image: &mut BitmapImage) {
  recolor(image, Targets { b: true, g: false, r: false })
}

/// Dark areas go from black to magenta, light areas from magenta to white.
pub fn magentify(image: &mut BitmapImage) {
  recolor(image, Targets { b: true, g: false, r: true })
}
