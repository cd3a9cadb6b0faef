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

// Asset packing and verification tool.
// Run with: forge <command>

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forge", version, about = "Pack, list, and verify asset packs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `Assets.toml` manifest.
    Init {
        /// Where to write the manifest.
        #[arg(long, default_value = "Assets.toml")]
        manifest: PathBuf,
    },
    /// Pack every file found in the manifest's source directories.
    Pack {
        /// The manifest to read. Defaults apply when it does not exist.
        #[arg(long, default_value = "Assets.toml")]
        manifest: PathBuf,
        /// Override the manifest's output directory.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Store entries LZ4-compressed regardless of the manifest.
        #[arg(long)]
        compress: bool,
    },
    /// Print the index of a pack.
    List {
        /// The directory holding `data.pack` and `index.bin`.
        dir: PathBuf,
    },
    /// Check every entry of a pack against its recorded hash.
    Verify {
        /// The directory holding `data.pack` and `index.bin`.
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Init { manifest } => commands::init(&manifest),
        Command::Pack {
            manifest,
            out,
            compress,
        } => commands::pack(&manifest, out, compress),
        Command::List { dir } => commands::list(&dir),
        Command::Verify { dir } => commands::verify(&dir),
    }
}
