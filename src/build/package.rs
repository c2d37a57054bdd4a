// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning command-line paths into one parsed Go package.
//!
//! Accepts either a single directory (every `.go` file in it) or a list of
//! `.go` files. `_test.go` files never count: they can declare a different
//! package (`foo_test`) and their constants aren't part of the API.

use std::fs;
use std::path::{Path, PathBuf};

use crate::source::SourceFile;

use super::parallel::parse_files;

/// The files of one package, parsed, in a deterministic order.
#[derive(Debug)]
pub struct LoadedPackage {
    /// Directory the generated file goes to by default.
    pub dir: PathBuf,
    /// Package clause shared by every file.
    pub name: String,
    pub files: Vec<SourceFile>,
}

/// Whether `path` is a Go source file that belongs to the package proper.
pub fn is_package_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go") && !name.ends_with("_test.go")
}

/// Resolve CLI paths to `(output dir, source files)`.
///
/// An empty list means the current directory.
pub fn resolve_paths(paths: &[PathBuf]) -> Result<(PathBuf, Vec<PathBuf>), String> {
    let paths: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    if paths.len() == 1 && paths[0].is_dir() {
        let dir = paths[0].clone();
        let entries = fs::read_dir(&dir)
            .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;
            let path = entry.path();
            if path.is_file() && is_package_source(&path) {
                files.push(path);
            }
        }
        // read_dir order is platform dependent; declaration order must not be.
        files.sort();

        if files.is_empty() {
            return Err(format!("No Go source files in {}", dir.display()));
        }
        return Ok((dir, files));
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_dir() {
            return Err(format!(
                "{} is a directory; pass either one directory or a list of files",
                path.display()
            ));
        }
        if !path.exists() {
            return Err(format!("No such file: {}", path.display()));
        }
        if is_package_source(&path) {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err("No Go source files among the given paths".to_string());
    }

    let dir = match files[0].parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, files))
}

/// Resolve, read and parse a package. Fails if files disagree on the package.
pub fn load_package(paths: &[PathBuf]) -> Result<LoadedPackage, String> {
    let (dir, paths) = resolve_paths(paths)?;
    let files = parse_files(&paths)?;
    let name = package_name(&files)?;
    Ok(LoadedPackage { dir, name, files })
}

/// The single package name all files declare.
pub fn package_name(files: &[SourceFile]) -> Result<String, String> {
    let first = files
        .first()
        .ok_or_else(|| "No Go source files to load".to_string())?;

    if let Some(other) = files.iter().find(|f| f.package != first.package) {
        return Err(format!(
            "Files belong to different packages: {} ({}) and {} ({})",
            first.path, first.package, other.path, other.package
        ));
    }
    Ok(first.package.clone())
}
