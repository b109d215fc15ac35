//! Filters that treat each color channel on its own.

use crate::{Bgr8, BitmapImage};

/// One of the three color channels of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Channel {
  Blue,
  Green,
  Red,
}
impl Bgr8 {
  /// Mutable access to one channel.
  #[inline]
  #[must_use]
  pub fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
    match channel {
      Channel::Blue => &mut self.b,
      Channel::Green => &mut self.g,
      Channel::Red => &mut self.r,
    }
  }
}

/// Sets one channel of every pixel to `value`, leaving the others alone.
#[inline]
pub fn set_channel(image: &mut BitmapImage, channel: Channel, value: u8) {
  image.for_each_pixel_mut(|px| *px.channel_mut(channel) = value);
}

/// Replaces one channel of every pixel with `255 - value`.
#[inline]
pub fn negate_channel(image: &mut BitmapImage, channel: Channel) {
  image.for_each_pixel_mut(|px| {
    let c = px.channel_mut(channel);
    *c = 255 - *c;
  });
}

/// Zeroes the red channel.
pub fn remove_red(image: &mut BitmapImage) {
  set_channel(image, Channel::Red, 0)
}
/// Zeroes the green channel.
pub fn remove_green(image: &mut BitmapImage) {
  set_channel(image, Channel::Green, 0)
}
/// Zeroes the blue channel.
pub fn remove_blue(image: &mut BitmapImage) {
  set_channel(image, Channel::Blue, 0)
}

/// Maxes out the red channel.
pub fn max_red(image: &mut BitmapImage) {
  set_channel(image, Channel::Red, 255)
}
/// Maxes out the green channel.
pub fn max_green(image: &mut BitmapImage) {
  set_channel(image, Channel::Green, 255)
}
/// Maxes out the blue channel.
pub fn max_blue(image: &mut BitmapImage) {
  set_channel(image, Channel::Blue, 255)
}

/// Photo negative: every channel becomes `255 - value`.
///
/// Doing this twice gives back the original image.
pub fn negate(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = px.map(|v| 255 - v));
}
/// Negates only the red channel.
pub fn negate_red(image: &mut BitmapImage) {
  negate_channel(image, Channel::Red)
}
/// Negates only the green channel.
pub fn negate_green(image: &mut BitmapImage) {
  negate_channel(image, Channel::Green)
}
/// Negates only the blue channel.
pub fn negate_blue(image: &mut BitmapImage) {
  negate_channel(image, Channel::Blue)
}

/// Exchanges red and blue.
pub fn swap_rgb(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = Bgr8 { b: px.r, g: px.g, r: px.b });
}

/// Exchanges green and red.
pub fn swap_brg(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = Bgr8 { b: px.b, g: px.r, r: px.g });
}

/// Rotates the channels: blue takes red, green takes blue, red takes green.
pub fn swap_rbg(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = Bgr8 { b: px.r, g: px.b, r: px.g });
}

/// Rotates the channels: blue takes green, green takes red, red takes blue.
pub fn swap_grb(image: &mut BitmapImage) {
  image.for_each_pixel_mut(|px| *px = Bgr8 { b: px.g, g: px.r, r: px.b });
}
