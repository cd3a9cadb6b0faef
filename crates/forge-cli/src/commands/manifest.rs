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

use crate::helpers::*;
use anyhow::{Context, Result};
use forge_core::writer::{write_file, WriteOptions};
use forge_io::{assets::TextAsset, pack::PackCompression, writers::TextWriter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the structure of the `Assets.toml` manifest file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssetManifest {
    /// A list of directories to scan for source assets.
    pub source_directories: Vec<PathBuf>,
    /// Where `data.pack` and `index.bin` are written.
    pub output_directory: PathBuf,
    /// How pack entries are stored.
    pub compression: PackCompression,
    /// How the pack files are written.
    pub write: WriteOptions,
}

impl Default for AssetManifest {
    /// Provides a default configuration if `Assets.toml` is not found.
    ///
    /// The default configuration points to a single source directory,
    /// `resources/assets`, and packs uncompressed into `.dist/assets`.
    fn default() -> Self {
        Self {
            source_directories: vec![PathBuf::from("resources/assets")],
            output_directory: PathBuf::from(".dist/assets"),
            compression: PackCompression::None,
            write: WriteOptions::default(),
        }
    }
}

/// Loads the manifest at `manifest_path`.
/// If the file does not exist, it returns the default configuration.
pub fn load_manifest(manifest_path: &Path) -> Result<AssetManifest> {
    if !manifest_path.exists() {
        print_info(&format!(
            "No '{}' found. Using default configuration.",
            manifest_path.display()
        ));
        return Ok(AssetManifest::default());
    }

    print_info(&format!(
        "Found '{}'. Loading configuration.",
        manifest_path.display()
    ));
    let manifest_str = fs::read_to_string(manifest_path).with_context(|| {
        format!(
            "Failed to read manifest file at '{}'",
            manifest_path.display()
        )
    })?;
    toml::from_str(&manifest_str)
        .with_context(|| format!("Failed to parse TOML from '{}'", manifest_path.display()))
}

/// Writes the default manifest to `manifest_path`, refusing to replace an
/// existing one.
pub fn init(manifest_path: &Path) -> Result<()> {
    print_task_start("Writing Manifest", GEAR, CYAN);

    let content = toml::to_string_pretty(&AssetManifest::default())
        .context("Failed to serialize the default manifest")?;
    let options = WriteOptions {
        overwrite: false,
        ..Default::default()
    };
    write_file(
        &TextWriter::with_trailing_newline(),
        &TextAsset::new(content),
        manifest_path,
        &options,
    )
    .with_context(|| format!("Failed to write '{}'", manifest_path.display()))?;

    print_success(&format!("Wrote '{}'", manifest_path.display()));
    Ok(())
}
