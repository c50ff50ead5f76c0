//! JSON file output shared by the batch and pipeline drivers.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Render `value` as four-space indented JSON.
pub fn render_pretty<T: Serialize>(value: &T) -> eyre::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> eyre::Result<()> {
    write_atomic(path, &render_pretty(value)?)
}

// Write to a temp file next to the target then rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> eyre::Result<()> {
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    std::fs::write(&tmp_path, bytes)
        .map_err(|e| eyre::eyre!("failed to write {}: {e}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .map_err(|e| eyre::eyre!("failed to rename {} to {}: {e}", tmp_path.display(), path.display()))?;
    Ok(())
}
