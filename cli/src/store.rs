//! JSON snapshot persistence for the CLI.
//!
//! Writes go through a temp file in the destination directory followed by a
//! rename, so a crash mid-write never leaves a torn state file behind. The
//! registry core stays IO-free; this module is the host's persistence
//! choice, not the core's.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;
use tracing::debug;

use registrar_core::{Registry, RegistrySnapshot};
use registrar_types::Address;

/// Load a registry from the snapshot at `path`.
pub fn load(path: &Path) -> Result<Registry> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            bail!(
                "no registry at {} (run `registrar init <owner>` first?)",
                path.display()
            );
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read registry at {}", path.display()));
        }
    };
    let snapshot: RegistrySnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("malformed registry snapshot at {}", path.display()))?;
    Ok(snapshot.into_registry())
}

/// Persist `registry` to `path` atomically, creating parent directories as
/// needed.
pub fn save(path: &Path, registry: &Registry) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| Path::new(".").to_path_buf(), Path::to_path_buf);
    fs::create_dir_all(&parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;

    let snapshot = RegistrySnapshot::from(registry);
    let json = serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?;

    let mut tmp = NamedTempFile::new_in(&parent)
        .with_context(|| format!("failed to create temp file in {}", parent.display()))?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .context("failed to write snapshot")?;
    tmp.persist(path)
        .with_context(|| format!("failed to persist snapshot to {}", path.display()))?;

    debug!(path = %path.display(), entries = registry.len(), "snapshot saved");
    Ok(())
}

/// Bootstrap a fresh registry owned by `owner` at `path`.
///
/// Refuses to clobber an existing store: bootstrapping is a one-shot
/// operation, like the original deployment.
pub fn init(path: &Path, owner: Address) -> Result<Registry> {
    if path.exists() {
        bail!("registry already exists at {}", path.display());
    }
    let registry = Registry::new(owner);
    save(path, &registry)?;
    Ok(registry)
}
