use std::path::Path;

use crate::Result;

/// Write the final summary to `path`, replacing any previous content.
pub fn write_summary(path: &Path, summary: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, summary)?;
    tracing::info!("Summary written to {}", path.display());
    Ok(())
}
