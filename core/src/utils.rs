use crate::constants::PREVIEW_ELLIPSIS;

/// Lowercase hex of `bytes`, cut to `chars` characters and suffixed with `...`.
///
/// Previews are diagnostics only; callers pick lengths that keep most of the
/// value hidden.
pub fn hex_preview(bytes: &[u8], chars: usize) -> String {
    // Encode only the bytes needed for the requested width.
    let needed = (chars + 1) / 2;
    let mut hex = hex::encode(&bytes[..needed.min(bytes.len())]);
    hex.truncate(chars);
    hex.push_str(PREVIEW_ELLIPSIS);
    hex
}
