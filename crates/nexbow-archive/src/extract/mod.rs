//! Tarball extraction and package-root resolution
//!
//! This module provides safe tarball extraction with path validation
//! to prevent directory traversal, plus the listing diff that unwraps a
//! single superfluous top-level directory.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use nexbow_core::error::NexbowError;

use crate::ArchiveResult;

/// Extract a gzipped tarball into a fresh temporary directory.
///
/// Resolves to the single path the host should treat as the package
/// root: the extraction directory itself, or its one new subdirectory
/// when the archive wrapped everything in a single top-level folder.
///
/// The temporary directory is not deleted on drop. The extracted tree is
/// handed to the host, and cleanup follows the surrounding environment's
/// ephemeral-storage convention.
pub fn extract_tar_gz(archive_path: &Path) -> ArchiveResult<PathBuf> {
    let temp_dir = tempfile::Builder::new()
        .prefix("nexbow-")
        .tempdir()
        .map_err(|e| NexbowError::io("Failed to create extraction directory".to_string(), e))?
        .into_path();

    let before = list_entries(&temp_dir)?;

    let archive = fs::File::open(archive_path).map_err(|e| {
        NexbowError::io(
            format!("Failed to open archive {}", archive_path.display()),
            e,
        )
    })?;
    unpack_archive(archive, &temp_dir)?;

    let after = list_entries(&temp_dir)?;
    let resolved = resolve_extracted_path(&temp_dir, &before, &after);
    debug!(
        "Extracted {} to {}",
        archive_path.display(),
        resolved.display()
    );
    Ok(resolved)
}

/// Snapshot the entry names of a directory (non-recursive)
pub fn list_entries(dir: &Path) -> ArchiveResult<HashSet<OsString>> {
    let read_dir = fs::read_dir(dir)
        .map_err(|e| NexbowError::io(format!("Failed to read directory {}", dir.display()), e))?;

    let mut entries = HashSet::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| {
            NexbowError::io(format!("Failed to read directory {}", dir.display()), e)
        })?;
        entries.insert(entry.file_name());
    }
    Ok(entries)
}

/// Decide the package root from listings taken before and after extraction.
///
/// Rules, in priority order:
/// 1. No new entries: the extraction directory itself.
/// 2. Exactly one new entry and it is a directory: that subdirectory
///    (archives that wrap their content in a single top-level folder are
///    unwrapped so the host sees the package root directly).
/// 3. Anything else (new file, or several new entries): the extraction
///    directory, left unflattened.
pub fn resolve_extracted_path(
    temp_dir: &Path,
    before: &HashSet<OsString>,
    after: &HashSet<OsString>,
) -> PathBuf {
    let new_entries: Vec<&OsString> = after.difference(before).collect();
    match new_entries.as_slice() {
        [single] => {
            let candidate = temp_dir.join(single);
            if candidate.is_dir() {
                candidate
            } else {
                temp_dir.to_path_buf()
            }
        }
        _ => temp_dir.to_path_buf(),
    }
}

/// Decompress and unpack a gzip+tar stream into the destination directory
fn unpack_archive<R: Read>(reader: R, dest_dir: &Path) -> ArchiveResult<()> {
    let gz_decoder = GzDecoder::new(reader);
    let mut archive = Archive::new(gz_decoder);

    let entries = archive
        .entries()
        .map_err(|e| NexbowError::io("Failed to read archive entries".to_string(), e))?;

    for entry_result in entries {
        let mut entry = entry_result
            .map_err(|e| NexbowError::io("Failed to read archive entry".to_string(), e))?;

        let entry_path = entry
            .path()
            .map_err(|e| NexbowError::io("Failed to read archive entry path".to_string(), e))?
            .into_owned();
        let safe_path = validate_extract_path(&entry_path, dest_dir)?;

        let entry_type = entry.header().entry_type();
        let mode = entry.header().mode().ok();

        match entry_type {
            tar::EntryType::Regular => {
                if let Some(parent) = safe_path.parent() {
                    fs::create_dir_all(parent).map_err(|e| {
                        NexbowError::io(
                            format!("Failed to create directory {}", parent.display()),
                            e,
                        )
                    })?;
                }
                let mut file = fs::File::create(&safe_path).map_err(|e| {
                    NexbowError::io(format!("Failed to create file {}", safe_path.display()), e)
                })?;
                std::io::copy(&mut entry, &mut file).map_err(|e| {
                    NexbowError::io(format!("Failed to extract file {}", safe_path.display()), e)
                })?;
            }
            tar::EntryType::Directory => {
                fs::create_dir_all(&safe_path).map_err(|e| {
                    NexbowError::io(
                        format!("Failed to create directory {}", safe_path.display()),
                        e,
                    )
                })?;
            }
            other => {
                // Char devices, fifos and the like have no place in a package
                debug!(
                    "Skipping archive entry {} of type {:?}",
                    entry_path.display(),
                    other
                );
                continue;
            }
        }

        if let Some(mode) = mode {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if safe_path.exists() {
                    let permissions = fs::Permissions::from_mode(mode);
                    let _ = fs::set_permissions(&safe_path, permissions);
                }
            }
        }
    }

    Ok(())
}

/// Validate an extraction path to prevent directory traversal
fn validate_extract_path(entry_path: &Path, dest_dir: &Path) -> ArchiveResult<PathBuf> {
    let mut safe_path = dest_dir.to_path_buf();

    for component in entry_path.components() {
        match component {
            std::path::Component::Normal(name) => safe_path.push(name),
            std::path::Component::ParentDir | std::path::Component::RootDir => {
                return Err(NexbowError::UnsafeArchivePath {
                    entry: entry_path.display().to_string(),
                });
            }
            // Current dir and prefix components carry no path information
            _ => continue,
        }
    }

    if !safe_path.starts_with(dest_dir) {
        return Err(NexbowError::UnsafeArchivePath {
            entry: entry_path.display().to_string(),
        });
    }

    Ok(safe_path)
}
