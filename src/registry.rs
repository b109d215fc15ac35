#![forbid(unsafe_code)]

//! The catalog of every operation, by name.
//!
//! A UI lists the catalog with [operations], asks the user for whatever each
//! entry [needs](OperationInfo::needs), and then calls [run]. Every result
//! that [run] hands back (a mutated image or a new one) has already passed
//! [validate](crate::bmp::validate).

use alloc::string::String;
use log::{debug, error};

use crate::{
  bmp, compositing, filters::*, tools, BitmapImage, Color, Coordinate, EngineError, Parameter,
};

/// How a filter delivers its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOutput {
  /// The primary image is changed.
  InPlace,
  /// A new image is built, and the inputs are left alone.
  ReturnsNew,
}

/// Whole-image filter or click tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
  /// Applied to the whole image.
  Filter(FilterOutput),
  /// Applied at a [Coordinate].
  Tool,
}

/// The optional parameters that an operation uses.
///
/// Tools always need a coordinate, so that isn't listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParamNeeds {
  /// Needs a [Color].
  pub color: bool,
  /// Reads the free form extra text. The text is always optional, a default
  /// is used when it's missing or not a number.
  pub extra: bool,
  /// Needs a second image of the same size.
  pub other_image: bool,
}
impl ParamNeeds {
  const NONE: Self = Self { color: false, extra: false, other_image: false };
  const COLOR: Self = Self { color: true, extra: false, other_image: false };
  const EXTRA: Self = Self { color: false, extra: true, other_image: false };
  const COLOR_EXTRA: Self = Self { color: true, extra: true, other_image: false };
  const OTHER: Self = Self { color: false, extra: false, other_image: true };
}

/// Everything the user supplied for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invocation<'a> {
  /// The secondary image, for two-image filters.
  pub other: Option<&'a BitmapImage>,
  /// The picked color.
  pub color: Option<Color>,
  /// The extra text box.
  pub extra: Option<&'a str>,
  /// The clicked position, for tools.
  pub coordinate: Option<Coordinate>,
}

/// The checked arguments that an operation body gets.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
  /// The picked color, or black if the operation doesn't use a color.
  pub color: Color,
  /// The extra text.
  pub extra: Option<&'a str>,
}

/// The function behind an operation.
#[derive(Clone, Copy)]
#[allow(missing_docs)]
pub enum OperationFn {
  InPlace(fn(&mut BitmapImage, &Args<'_>) -> Result<(), EngineError>),
  ReturnsNew(fn(&BitmapImage, &BitmapImage) -> Result<BitmapImage, EngineError>),
  Tool(fn(&mut BitmapImage, Coordinate, &Args<'_>) -> Result<(), EngineError>),
}
impl core::fmt::Debug for OperationFn {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Self::InPlace(_) => "InPlace(..)",
      Self::ReturnsNew(_) => "ReturnsNew(..)",
      Self::Tool(_) => "Tool(..)",
    })
  }
}

/// What a successful [run] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The primary image was changed.
  Mutated,
  /// A new image was built.
  Produced(BitmapImage),
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct OperationInfo {
  /// The name a UI shows and passes to [run].
  pub name: &'static str,
  /// The parameters to ask the user for.
  pub needs: ParamNeeds,
  /// The body.
  pub op: OperationFn,
}
impl OperationInfo {
  /// Filter or tool, and how a filter delivers its result.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> OperationKind {
    match self.op {
      OperationFn::InPlace(_) => OperationKind::Filter(FilterOutput::InPlace),
      OperationFn::ReturnsNew(_) => OperationKind::Filter(FilterOutput::ReturnsNew),
      OperationFn::Tool(_) => OperationKind::Tool,
    }
  }

  /// Runs this operation on `image`.
  ///
  /// Missing parameters are reported before anything is touched. After the
  /// body runs, the image it changed (or built) is validated, and an image
  /// that fails becomes [EngineError::CorruptResult].
  pub fn run(
    &self, image: &mut BitmapImage, invocation: &Invocation<'_>,
  ) -> Result<Outcome, EngineError> {
    debug!("running `{}` on a {}x{} image", self.name, image.width(), image.height());
    let missing = |parameter| EngineError::MissingParameter { operation: self.name, parameter };
    let color = match invocation.color {
      Some(color) => color,
      None if self.needs.color => return Err(missing(Parameter::Color)),
      None => Color { r: 0, g: 0, b: 0 },
    };
    let args = Args { color, extra: invocation.extra };
    let outcome = match self.op {
      OperationFn::InPlace(f) => {
        f(image, &args)?;
        Outcome::Mutated
      }
      OperationFn::ReturnsNew(f) => {
        let other = invocation.other.ok_or_else(|| missing(Parameter::OtherImage))?;
        Outcome::Produced(f(image, other)?)
      }
      OperationFn::Tool(f) => {
        let at = invocation.coordinate.ok_or_else(|| missing(Parameter::Coordinate))?;
        f(image, at, &args)?;
        Outcome::Mutated
      }
    };
    let result = match &outcome {
      Outcome::Mutated => &*image,
      Outcome::Produced(new_image) => new_image,
    };
    if let Err(reason) = bmp::validate(result.as_bytes()) {
      error!("`{}` produced a corrupt image: {reason}", self.name);
      return Err(EngineError::CorruptResult { operation: self.name, reason });
    }
    Ok(outcome)
  }
}

/// Wraps a plain `fn(&mut BitmapImage)` filter.
macro_rules! in_place {
  ($f:path) => {
    OperationFn::InPlace(|image, _| {
      $f(image);
      Ok(())
    })
  };
}

macro_rules! entry {
  ($name:literal, $needs:expr, $op:expr) => {
    OperationInfo { name: $name, needs: $needs, op: $op }
  };
}

static OPERATIONS: &[OperationInfo] = &[
  // channels
  entry!("remove_red", ParamNeeds::NONE, in_place!(remove_red)),
  entry!("remove_green", ParamNeeds::NONE, in_place!(remove_green)),
  entry!("remove_blue", ParamNeeds::NONE, in_place!(remove_blue)),
  entry!("max_red", ParamNeeds::NONE, in_place!(max_red)),
  entry!("max_green", ParamNeeds::NONE, in_place!(max_green)),
  entry!("max_blue", ParamNeeds::NONE, in_place!(max_blue)),
  entry!("negate", ParamNeeds::NONE, in_place!(negate)),
  entry!("negate_red", ParamNeeds::NONE, in_place!(negate_red)),
  entry!("negate_green", ParamNeeds::NONE, in_place!(negate_green)),
  entry!("negate_blue", ParamNeeds::NONE, in_place!(negate_blue)),
  entry!("swap_rgb", ParamNeeds::NONE, in_place!(swap_rgb)),
  entry!("swap_brg", ParamNeeds::NONE, in_place!(swap_brg)),
  entry!("swap_rbg", ParamNeeds::NONE, in_place!(swap_rbg)),
  entry!("swap_grb", ParamNeeds::NONE, in_place!(swap_grb)),
  // tone
  entry!("lighten", ParamNeeds::NONE, in_place!(lighten)),
  entry!("darken", ParamNeeds::NONE, in_place!(darken)),
  entry!("make_gray", ParamNeeds::NONE, in_place!(make_gray)),
  entry!("grayify", ParamNeeds::NONE, in_place!(grayify)),
  entry!("intensify", ParamNeeds::NONE, in_place!(intensify)),
  entry!("make_two_tone", ParamNeeds::NONE, in_place!(make_two_tone)),
  entry!("make_four_tone", ParamNeeds::NONE, in_place!(make_four_tone)),
  entry!("make_better_two_tone", ParamNeeds::NONE, in_place!(make_better_two_tone)),
  entry!(
    "fade_in_vertical",
    ParamNeeds::NONE,
    OperationFn::InPlace(|image, _| fade_in_vertical(image))
  ),
  // hue
  entry!("redify", ParamNeeds::NONE, in_place!(redify)),
  entry!("greenify", ParamNeeds::NONE, in_place!(greenify)),
  entry!("blueify", ParamNeeds::NONE, in_place!(blueify)),
  entry!("magentify", ParamNeeds::NONE, in_place!(magentify)),
  // shapes
  entry!("mirror_right_horizontal", ParamNeeds::NONE, in_place!(mirror_right_horizontal)),
  entry!(
    "fill",
    ParamNeeds::COLOR,
    OperationFn::InPlace(|image, args| {
      fill(image, args.color);
      Ok(())
    })
  ),
  entry!(
    "borders",
    ParamNeeds::COLOR_EXTRA,
    OperationFn::InPlace(|image, args| borders(image, args.color, args.extra))
  ),
  entry!(
    "draw_centered_hline",
    ParamNeeds::COLOR_EXTRA,
    OperationFn::InPlace(|image, args| draw_centered_hline(image, args.color, args.extra))
  ),
  entry!(
    "draw_centered_vline",
    ParamNeeds::COLOR_EXTRA,
    OperationFn::InPlace(|image, args| draw_centered_vline(image, args.color, args.extra))
  ),
  entry!(
    "mark_middle",
    ParamNeeds::COLOR,
    OperationFn::InPlace(|image, args| mark_middle(image, args.color))
  ),
  #[cfg(feature = "noise")]
  OperationInfo {
    name: "make_static",
    needs: ParamNeeds::COLOR_EXTRA,
    op: OperationFn::InPlace(|image, args| make_static(image, args.color, args.extra)),
  },
  // two images
  entry!("blend_other", ParamNeeds::OTHER, OperationFn::ReturnsNew(compositing::blend_other)),
  entry!("chroma_overlay", ParamNeeds::OTHER, OperationFn::ReturnsNew(compositing::chroma_overlay)),
  // tools
  entry!(
    "change_pixel",
    ParamNeeds::COLOR,
    OperationFn::Tool(|image, at, args| tools::change_pixel(image, at, args.color))
  ),
  entry!(
    "draw_hline",
    ParamNeeds::COLOR_EXTRA,
    OperationFn::Tool(|image, at, args| tools::draw_hline(image, at, args.color, args.extra))
  ),
  entry!(
    "draw_vline",
    ParamNeeds::COLOR_EXTRA,
    OperationFn::Tool(|image, at, args| tools::draw_vline(image, at, args.color, args.extra))
  ),
  entry!(
    "draw_gray",
    ParamNeeds::EXTRA,
    OperationFn::Tool(|image, at, args| tools::draw_gray(image, at, args.extra))
  ),
];

/// Every operation, in a stable order.
#[inline]
#[must_use]
pub fn operations() -> &'static [OperationInfo] {
  OPERATIONS
}

/// Looks up an operation by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static OperationInfo> {
  OPERATIONS.iter().find(|info| info.name == name)
}

/// Looks up `name` and [runs](OperationInfo::run) it.
pub fn run(
  name: &str, image: &mut BitmapImage, invocation: &Invocation<'_>,
) -> Result<Outcome, EngineError> {
  let info = find(name).ok_or_else(|| {
    debug!("no operation named `{name}`");
    EngineError::UnknownOperation(String::from(name))
  })?;
  info.run(image, invocation)
}
