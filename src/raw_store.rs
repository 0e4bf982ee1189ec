use std::path::Path;

use anyhow::Context as _;

pub fn ensure_snapshot_does_not_exist(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("snapshot output already exists: {}", path.display());
    }
    Ok(())
}

/// Saves a fetched page so the extractors can run on it offline.
pub fn write_snapshot(path: &Path, html: &str) -> anyhow::Result<()> {
    ensure_snapshot_does_not_exist(path)?;

    if let Some(parent_dir) = path.parent()
        && !parent_dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent_dir)
            .with_context(|| format!("create snapshot parent dir: {}", parent_dir.display()))?;
    }

    std::fs::write(path, html).with_context(|| format!("write snapshot: {}", path.display()))?;

    Ok(())
}
