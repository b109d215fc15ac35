#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! An editing engine for uncompressed 24-bit Windows Bitmap images.
//!
//! The engine works directly on the bytes of a BMP file:
//! * [bmp] decodes and encodes the header, and validates whole buffers.
//! * [BitmapImage] owns a validated buffer and addresses its pixels.
//! * [filters], [tools], and [compositing] hold the actual edits.
//! * [registry] is the catalog a UI uses to list and run the edits.
//!
//! Every edit either changes the image it's given in place or builds a brand
//! new image. Either way, the result is checked with [bmp::validate] before
//! it's handed back by [registry::run].

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod util;
pub use util::parse_int_or_default;

mod pixels;
pub use pixels::*;

pub mod bmp;

mod image;
pub use image::*;

pub mod compositing;
pub mod filters;
pub mod registry;
pub mod tools;
