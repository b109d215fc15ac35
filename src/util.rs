use bytemuck::{pod_read_unaligned, Pod};
use core::mem::size_of;

use crate::FormatError;

/// Reads a `T` from the start of the bytes, returning it and the rest.
#[inline]
pub(crate) fn try_pull_pod<T: Pod>(bytes: &[u8]) -> Result<(T, &[u8]), FormatError> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    let a: T = pod_read_unaligned(head);
    Ok((a, tail))
  } else {
    Err(FormatError::InsufficientBytes { needed: position, actual: bytes.len() })
  }
}

/// Parses an operation's "extra" text as an integer.
///
/// Surrounding whitespace is ignored. If the text is missing or isn't an
/// integer then `default` is used instead, this is never an error.
#[inline]
#[must_use]
pub fn parse_int_or_default(text: Option<&str>, default: i32) -> i32 {
  match text.map(str::trim) {
    Some(t) => match t.parse::<i32>() {
      Ok(i) => i,
      Err(_) => {
        if !t.is_empty() {
          log::warn!("extra parameter {t:?} is not an integer, using {default}");
        }
        default
      }
    },
    None => default,
  }
}
