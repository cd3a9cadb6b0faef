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

//! Destination handling shared by every writer.

use super::{AssetWriter, ErrorKind, WriteError, WriteResult};
use crate::asset::Asset;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Controls how a destination file is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Replace an existing destination. When `false`, an existing file makes
    /// the write fail with [`ErrorKind::DestinationExists`].
    pub overwrite: bool,
    /// Encode into a temporary file next to the destination and rename it
    /// into place on success. A failed write then never touches the
    /// destination. When `false`, the destination is written in place and
    /// removed again if encoding fails.
    pub atomic: bool,
    /// Flush file contents to the storage device before returning.
    pub sync: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            atomic: true,
            sync: false,
        }
    }
}

/// Describes a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// The file that now holds the asset.
    pub destination: PathBuf,
    /// The number of bytes written.
    pub bytes_written: u64,
}

/// Writes `asset` to `destination` using `writer` and the given options.
///
/// Parent directories are never created; a missing directory is reported as
/// [`WriteError::Io`].
pub fn write_file<A, W>(
    writer: &W,
    asset: &A,
    destination: &Path,
    options: &WriteOptions,
) -> WriteResult<WriteReport>
where
    A: Asset,
    W: AssetWriter<A> + ?Sized,
{
    if !options.overwrite && destination.exists() {
        return Err(destination_exists(destination));
    }

    let bytes_written = if options.atomic {
        write_atomic(writer, asset, destination, options)?
    } else {
        write_in_place(writer, asset, destination, options)?
    };

    log::debug!("Wrote {} bytes to '{}'", bytes_written, destination.display());

    Ok(WriteReport {
        destination: destination.to_path_buf(),
        bytes_written,
    })
}

fn write_atomic<A, W>(
    writer: &W,
    asset: &A,
    destination: &Path,
    options: &WriteOptions,
) -> WriteResult<u64>
where
    A: Asset,
    W: AssetWriter<A> + ?Sized,
{
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // The temporary file is deleted on drop, so any early return below leaves
    // the destination as it was.
    let mut temp = new_temp_file(dir)?;
    let bytes_written = encode_into(writer, asset, temp.as_file_mut())?;

    // A replaced file keeps its mode.
    if options.overwrite {
        if let Ok(existing) = fs::metadata(destination) {
            temp.as_file().set_permissions(existing.permissions())?;
        }
    }

    if options.sync {
        temp.as_file().sync_all()?;
    }

    if options.overwrite {
        temp.persist(destination).map_err(|e| WriteError::Io(e.error))?;
    } else {
        temp.persist_noclobber(destination).map_err(|e| {
            if e.error.kind() == io::ErrorKind::AlreadyExists {
                destination_exists(destination)
            } else {
                WriteError::Io(e.error)
            }
        })?;
    }

    Ok(bytes_written)
}

/// Creates the temporary file with the mode a plain `File::create` would get
/// (`0o666` minus the umask) instead of tempfile's owner-only default.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

fn write_in_place<A, W>(
    writer: &W,
    asset: &A,
    destination: &Path,
    options: &WriteOptions,
) -> WriteResult<u64>
where
    A: Asset,
    W: AssetWriter<A> + ?Sized,
{
    let mut file = if options.overwrite {
        File::create(destination)?
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(destination)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    destination_exists(destination)
                } else {
                    WriteError::Io(e)
                }
            })?
    };

    let result = encode_into(writer, asset, &mut file).and_then(|bytes_written| {
        if options.sync {
            file.sync_all()?;
        }
        Ok(bytes_written)
    });

    if result.is_err() {
        drop(file);
        if let Err(e) = fs::remove_file(destination) {
            log::warn!(
                "Failed to remove partially written '{}': {}",
                destination.display(),
                e
            );
        }
    }

    result
}

fn encode_into<A, W>(writer: &W, asset: &A, file: &mut File) -> WriteResult<u64>
where
    A: Asset,
    W: AssetWriter<A> + ?Sized,
{
    let mut out = CountingWriter::new(BufWriter::new(file));
    writer.write_to(asset, &mut out)?;
    out.flush()?;
    Ok(out.count)
}

fn destination_exists(destination: &Path) -> WriteError {
    WriteError::domain(
        ErrorKind::DestinationExists,
        format!("'{}' already exists", destination.display()),
    )
}

/// Counts the bytes that pass through to the wrapped writer.
struct CountingWriter<W: Write> {
    inner: W,
    count: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.count += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
