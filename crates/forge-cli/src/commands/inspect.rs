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
use anyhow::{bail, Context, Result};
use forge_io::pack::{PackCompression, PackReader};
use std::path::Path;

fn open(dir: &Path) -> Result<PackReader> {
    PackReader::open(dir).with_context(|| format!("Failed to open pack in '{}'", dir.display()))
}

pub fn list(dir: &Path) -> Result<()> {
    print_task_start("Pack Index", MAGNIFIER, CYAN);

    let reader = open(dir)?;
    for entry in reader.entries() {
        let stored = entry.location().map(|(_, size)| size).unwrap_or(0);
        let compression = match entry.compression {
            PackCompression::None => "raw",
            PackCompression::Lz4 => "lz4",
        };
        println!(
            "{}  {:<10} {:>10} {:>4}  {}",
            entry.metadata.uuid,
            entry.metadata.asset_type_name,
            human_size(stored),
            compression,
            entry.metadata.source_path.display()
        );
    }

    print_success(&format!("{} entries", reader.entries().len()));
    Ok(())
}

pub fn verify(dir: &Path) -> Result<()> {
    print_task_start("Verifying Pack", MAGNIFIER, CYAN);

    let mut reader = open(dir)?;
    let failures = reader.verify_all();
    if failures.is_empty() {
        print_success(&format!(
            "All {} entries are intact.",
            reader.entries().len()
        ));
        return Ok(());
    }

    for failure in &failures {
        print_error(&failure.to_string());
    }
    bail!(
        "{} of {} entries failed verification",
        failures.len(),
        reader.entries().len()
    );
}
