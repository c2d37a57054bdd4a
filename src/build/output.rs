// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the generated file goes, and whether it needs rewriting at all.
//!
//! `go generate` runs on every build in many repos. Rewriting an identical
//! file bumps its mtime and invalidates every downstream cache, so the write
//! is skipped when the CRC32 of the existing file matches the new content.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Suffix of the default output file name.
pub const OUTPUT_SUFFIX: &str = "_enumslice.go";

/// What happened to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Written,
    Unchanged,
}

/// `<dir>/<first type, lowercased>_enumslice.go`.
pub fn default_output_path(dir: &Path, first_type: &str) -> PathBuf {
    dir.join(format!("{}{}", first_type.to_lowercase(), OUTPUT_SUFFIX))
}

/// CRC32 of some bytes.
pub fn checksum(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Write `content` to `path` unless the file already holds exactly that.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteStatus, String> {
    if let Ok(existing) = fs::read(path) {
        if existing.len() == content.len() && checksum(&existing) == checksum(content.as_bytes()) {
            return Ok(WriteStatus::Unchanged);
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    fs::write(path, content).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(WriteStatus::Written)
}
