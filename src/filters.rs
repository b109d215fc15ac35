#![forbid(unsafe_code)]

//! Whole-image operations.
//!
//! Every filter here visits every pixel of every row and never touches the
//! row padding. All the channel math is integer math: thresholds that are
//! "half way" values such as 127.5 are written as exact integer comparisons
//! (`v > 127.5` is `v > 127`, `s > 382.5` is `2 * s > 765`), and results are
//! truncated unless a filter says otherwise.
//!
//! Filters that build a new image out of two images live in
//! [compositing](crate::compositing).

mod channels;
pub use channels::*;

mod tone;
pub use tone::*;

mod hue;
pub use hue::*;

mod shapes;
pub use shapes::*;

#[cfg(feature = "noise")]
mod noise;
#[cfg(feature = "noise")]
#[cfg_attr(docs_rs, doc(cfg(feature = "noise")))]
pub use noise::*;
