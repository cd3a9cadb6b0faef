// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::manifest::load_manifest;
use crate::helpers::*;
use anyhow::{Context, Result};
use forge_core::writer::WriteOptions;
use forge_io::pack::{PackBuilder, PackCompression, PackSummary};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file discovered in one of the manifest's source directories.
struct SourceFile {
    /// Location on disk.
    path: PathBuf,
    /// Path relative to its source directory; this names the entry in the pack.
    relative: PathBuf,
}

pub fn pack(manifest_path: &Path, out: Option<PathBuf>, compress: bool) -> Result<()> {
    print_task_start("Packing Assets", ROCKET, MAGENTA);

    let manifest = load_manifest(manifest_path)?;
    let dest_dir = out.unwrap_or_else(|| manifest.output_directory.clone());
    let compression = if compress {
        PackCompression::Lz4
    } else {
        manifest.compression
    };

    let valid_source_dirs: Vec<PathBuf> = manifest
        .source_directories
        .into_iter()
        .filter(|dir| dir.exists())
        .collect();

    if valid_source_dirs.is_empty() {
        print_error("No valid source directories found. Nothing to pack.");
        return Ok(());
    }

    let asset_files = find_asset_files(&valid_source_dirs);
    if asset_files.is_empty() {
        print_success("No asset files found to pack.");
        return Ok(());
    }

    println!(
        "{}🔎 Found:{} {} potential asset files to process.",
        BOLD,
        RESET,
        asset_files.len()
    );

    fs::create_dir_all(&dest_dir)
        .with_context(|| format!("Failed to create '{}'", dest_dir.display()))?;
    let summary = build_pack(&asset_files, &dest_dir, compression, manifest.write)?;

    println!(
        "{}{} {} Wrote {} entries to '{}' ({})",
        BOLD,
        GREEN,
        CHECK,
        summary.entry_count,
        summary.data_path.display(),
        human_size(summary.data_bytes)
    );
    println!(
        "{}{} {} Wrote index to '{}' ({})",
        BOLD,
        GREEN,
        CHECK,
        summary.index_path.display(),
        human_size(summary.index_bytes)
    );
    if compression == PackCompression::Lz4 {
        print_info(&format!(
            "LZ4 stored {} of asset data in {}.",
            human_size(summary.uncompressed_bytes),
            human_size(summary.data_bytes)
        ));
    }

    print_success("Asset pipeline finished successfully.");
    Ok(())
}

/// Builds the `data.pack` and `index.bin` files from the list of source assets.
///
/// Entries are typed by their file extension.
fn build_pack(
    asset_files: &[SourceFile],
    dest_dir: &Path,
    compression: PackCompression,
    options: WriteOptions,
) -> Result<PackSummary> {
    let mut builder = PackBuilder::new(compression).with_write_options(options);

    for file in asset_files {
        let bytes = fs::read(&file.path)
            .with_context(|| format!("Failed to read asset file '{}'", file.path.display()))?;
        let asset_type_name = file
            .path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        builder
            .add_bytes(&file.relative, &asset_type_name, &bytes)
            .with_context(|| format!("Failed to pack '{}'", file.path.display()))?;
    }

    builder
        .finish(dest_dir)
        .with_context(|| format!("Failed to write pack into '{}'", dest_dir.display()))
}

/// Recursively finds all files in the given source directories, in a stable order.
fn find_asset_files(source_dirs: &[PathBuf]) -> Vec<SourceFile> {
    let mut files = Vec::new();
    for dir in source_dirs {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under '{}': {}", dir.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(SourceFile {
                path: entry.into_path(),
                relative,
            });
        }
    }
    files
}
