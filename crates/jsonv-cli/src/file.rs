//! File reading helper: whole-file text reads with UTF-8 BOM stripping.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];

/// Read the full decoded text content of a file, dropping a UTF-8 BOM
/// preamble if one is present.
pub fn read_all_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("can't open '{}'", path.display()))?;
    let bytes = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(&bytes);
    let text = std::str::from_utf8(bytes)
        .with_context(|| format!("'{}' is not valid UTF-8", path.display()))?;
    Ok(text.to_string())
}
