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

use anyhow::Result;
use forge_core::writer::{AssetWriter, ErrorKind, WriteOptions, WriteStatus};
use forge_io::{
    assets::{MeshData, SoundData, TextAsset, Texture},
    writers::{ObjMeshWriter, PngTextureWriter, TextWriter, WavSoundWriter},
    WriterRegistry,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_plain_text_hello() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("out.txt");

    let report = TextWriter::new().write(&TextAsset::new("hello"), &path)?;

    assert_eq!(fs::read(&path)?, b"hello");
    assert_eq!(report.bytes_written, 5);
    Ok(())
}

#[test]
fn test_missing_directory_raises_io_fault() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("does-not-exist").join("out.txt");

    let result = TextWriter::new().write(&TextAsset::new("hello"), &path);

    // The fault travels on the I/O channel, not as a status value.
    let fault = WriteStatus::from_result(result).unwrap_err();
    assert_eq!(fault.kind(), std::io::ErrorKind::NotFound);
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_domain_failure_is_a_status() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.png");

    let result = PngTextureWriter::new().write(&Texture::rgba8(4, 4, vec![0; 3]), &path);

    let status = WriteStatus::from_result(result)?;
    assert_eq!(status, WriteStatus::Failed(ErrorKind::InvalidAsset));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_success_sentinel() -> Result<()> {
    let dir = tempdir()?;
    let mesh = MeshData {
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        ..Default::default()
    };

    let result = ObjMeshWriter.write(&mesh, &dir.path().join("tri.obj"));

    assert!(WriteStatus::from_result(result)?.is_ok());
    Ok(())
}

#[test]
fn test_repeated_writes_are_byte_identical() -> Result<()> {
    let dir = tempdir()?;
    let sound = SoundData {
        samples: (0..64).map(|i| (i as f32 / 64.0).sin()).collect(),
        channels: 1,
        sample_rate: 8000,
    };
    let first = dir.path().join("a.wav");
    let second = dir.path().join("b.wav");

    WavSoundWriter::new().write(&sound, &first)?;
    WavSoundWriter::new().write(&sound, &second)?;

    assert_eq!(fs::read(first)?, fs::read(second)?);
    Ok(())
}

#[test]
fn test_concurrent_writes_to_distinct_destinations() -> Result<()> {
    let dir = tempdir()?;
    let registry = WriterRegistry::with_builtin_writers();

    std::thread::scope(|scope| {
        for i in 0..8 {
            let registry = &registry;
            let path = dir.path().join(format!("note_{i}.txt"));
            scope.spawn(move || {
                registry
                    .write("text", &TextAsset::new(format!("note {i}")), &path)
                    .unwrap();
            });
        }
    });

    for i in 0..8 {
        let content = fs::read_to_string(dir.path().join(format!("note_{i}.txt")))?;
        assert_eq!(content, format!("note {i}"));
    }
    let stats = registry.stats();
    assert_eq!(stats.writes_succeeded, 8);
    assert_eq!(stats.writes_failed, 0);
    Ok(())
}

#[test]
fn test_registry_respects_overwrite_option() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("readme.txt");
    fs::write(&path, "original")?;
    let registry = WriterRegistry::with_builtin_writers();
    let options = WriteOptions {
        overwrite: false,
        ..Default::default()
    };

    let err = registry
        .write_with("text", &TextAsset::new("replacement"), &path, &options)
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::DestinationExists));
    assert_eq!(fs::read_to_string(&path)?, "original");
    assert_eq!(registry.stats().writes_failed, 1);
    Ok(())
}
