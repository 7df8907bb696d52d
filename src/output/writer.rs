use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Render a document as pretty-printed JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Write a rendered document to `path` atomically, or to stdout when `path`
/// is None or "-".
///
/// The file is never left half-written: content goes to a temporary file that
/// replaces the target on commit. Parent directories are created as needed.
pub fn write_document(path: Option<&Path>, content: &str) -> Result<()> {
    let path = match path {
        Some(p) if p != Path::new("-") => p,
        _ => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", content).context("Failed to write to stdout")?;
            return Ok(());
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    writeln!(file, "{}", content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    log::debug!("Wrote {}", path.display());
    Ok(())
}
