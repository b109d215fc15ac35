use super::*;

/// Checks that a buffer is a complete, well formed bitmap.
///
/// This is [decode] plus a check that the buffer really is as long as the
/// header says. An operation's output must pass this before anyone displays or
/// saves it.
#[inline]
pub fn validate(bytes: &[u8]) -> Result<BmpGeometry, FormatError> {
  let geometry = decode(bytes)?;
  if bytes.len() != geometry.file_size as usize {
    return Err(FormatError::BufferLength { declared: geometry.file_size, actual: bytes.len() });
  }
  Ok(geometry)
}
