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
use forge_core::{
    asset::AssetUUID,
    serialization::SerializationGoal,
    writer::{AssetWriter, ErrorKind, WriteOptions},
};
use forge_io::{
    assets::{Document, TextAsset, Texture},
    pack::{
        PackBuilder, PackCompression, PackReadError, PackReader, PACK_DATA_FILE, PACK_INDEX_FILE,
    },
    writers::{PngTextureWriter, SerdeWriter, TextWriter},
};
use std::fs;
use tempfile::tempdir;

fn build_pack(compression: PackCompression) -> Result<(tempfile::TempDir, AssetUUID, Vec<u8>)> {
    let dir = tempdir()?;
    let mut builder = PackBuilder::new(compression);

    let texture = Texture::rgba8(1, 1, vec![10, 20, 30, 255]);
    let texture_bytes = PngTextureWriter::new().encode_to_vec(&texture)?;
    let texture_uuid =
        builder.add_asset("textures/dot.png", "texture", &PngTextureWriter::new(), &texture)?;

    builder.add_asset(
        "shaders/unlit.wgsl",
        "text",
        &TextWriter::new(),
        &TextAsset::new("@vertex fn main() {}".repeat(16)),
    )?;

    let settings: SerdeWriter<Vec<u32>> = SerdeWriter::for_goal(SerializationGoal::FastestLoad);
    let levels = Document::new(vec![1u32, 2, 3]);
    builder.add_asset("config/levels.bin", "document", &settings, &levels)?;

    let summary = builder.finish(dir.path())?;
    assert_eq!(summary.entry_count, 3);
    assert_eq!(summary.data_bytes, fs::metadata(&summary.data_path)?.len());

    Ok((dir, texture_uuid, texture_bytes))
}

#[test]
fn test_pack_round_trip() -> Result<()> {
    for compression in [PackCompression::None, PackCompression::Lz4] {
        let (dir, texture_uuid, texture_bytes) = build_pack(compression)?;

        let mut reader = PackReader::open(dir.path())?;
        assert_eq!(reader.entries().len(), 3);
        assert_eq!(texture_uuid, AssetUUID::new_v5("textures/dot.png"));

        let entry = reader.entry(&texture_uuid).expect("texture entry");
        assert_eq!(entry.metadata.asset_type_name, "texture");
        assert_eq!(entry.compression, compression);

        assert_eq!(reader.read(&texture_uuid)?, texture_bytes);
        assert!(reader.verify_all().is_empty());
    }
    Ok(())
}

#[test]
fn test_lz4_shrinks_repetitive_entries() -> Result<()> {
    let (plain, _, _) = build_pack(PackCompression::None)?;
    let (compressed, _, _) = build_pack(PackCompression::Lz4)?;

    let plain_size = fs::metadata(plain.path().join(PACK_DATA_FILE))?.len();
    let compressed_size = fs::metadata(compressed.path().join(PACK_DATA_FILE))?.len();
    assert!(compressed_size < plain_size);
    Ok(())
}

#[test]
fn test_duplicate_source_path_is_rejected() -> Result<()> {
    let mut builder = PackBuilder::default();
    builder.add_bytes("a/b.txt", "text", b"one")?;

    let err = builder.add_bytes("a/b.txt", "text", b"two").unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));
    assert_eq!(builder.len(), 1);
    Ok(())
}

#[test]
fn test_corruption_is_detected() -> Result<()> {
    let (dir, texture_uuid, _) = build_pack(PackCompression::None)?;

    let data_path = dir.path().join(PACK_DATA_FILE);
    let mut data = fs::read(&data_path)?;
    // The texture is the first entry; flip a byte inside its PNG signature.
    data[1] ^= 0xFF;
    fs::write(&data_path, data)?;

    let mut reader = PackReader::open(dir.path())?;
    let failures = reader.verify_all();
    assert_eq!(failures.len(), 1);
    assert!(matches!(
        reader.read(&texture_uuid),
        Err(PackReadError::Corrupted { uuid, .. }) if uuid == texture_uuid
    ));
    Ok(())
}

#[test]
fn test_truncated_data_file_is_corruption() -> Result<()> {
    let (dir, texture_uuid, texture_bytes) = build_pack(PackCompression::None)?;

    let data_path = dir.path().join(PACK_DATA_FILE);
    let data = fs::read(&data_path)?;
    fs::write(&data_path, &data[..data.len() / 2])?;

    let mut reader = PackReader::open(dir.path())?;
    // The texture sits at the start of the data file and is still whole.
    assert_eq!(reader.read(&texture_uuid)?, texture_bytes);

    let last = AssetUUID::new_v5("config/levels.bin");
    assert!(matches!(
        reader.read(&last),
        Err(PackReadError::Corrupted { uuid, .. }) if uuid == last
    ));

    let failures = reader.verify_all();
    assert!(!failures.is_empty());
    assert!(failures
        .iter()
        .all(|failure| matches!(failure, PackReadError::Corrupted { .. })));
    Ok(())
}

#[test]
fn test_unknown_asset_and_missing_pack() -> Result<()> {
    let (dir, _, _) = build_pack(PackCompression::None)?;
    let mut reader = PackReader::open(dir.path())?;

    let missing = AssetUUID::new_v5("nope");
    assert!(matches!(
        reader.read(&missing),
        Err(PackReadError::UnknownAsset(uuid)) if uuid == missing
    ));

    let empty = tempdir()?;
    assert!(matches!(
        PackReader::open(empty.path()),
        Err(PackReadError::Io(_))
    ));
    Ok(())
}

#[test]
fn test_failed_repack_leaves_no_stale_index() -> Result<()> {
    let (dir, _, _) = build_pack(PackCompression::None)?;
    let data_path = dir.path().join(PACK_DATA_FILE);
    let index_path = dir.path().join(PACK_INDEX_FILE);
    let old_data = fs::read(&data_path)?;

    // An index path that cannot be removed makes the repack fail up front.
    fs::remove_file(&index_path)?;
    fs::create_dir(&index_path)?;
    fs::write(index_path.join("keep"), b"x")?;

    let mut builder = PackBuilder::default();
    builder.add_bytes("other.bin", "blob", &[9; 32])?;
    let err = builder.finish(dir.path()).unwrap_err();

    assert!(err.is_io_fault());
    assert_eq!(fs::read(&data_path)?, old_data);
    Ok(())
}

#[test]
fn test_repack_replaces_previous_pack() -> Result<()> {
    let (dir, texture_uuid, _) = build_pack(PackCompression::Lz4)?;

    let mut builder = PackBuilder::default();
    let uuid = builder.add_bytes("other.bin", "blob", &[9; 32])?;
    builder.finish(dir.path())?;

    let mut reader = PackReader::open(dir.path())?;
    assert_eq!(reader.entries().len(), 1);
    assert!(reader.entry(&texture_uuid).is_none());
    assert_eq!(reader.read(&uuid)?, vec![9; 32]);
    Ok(())
}

#[test]
fn test_no_overwrite_refuses_existing_index() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join(PACK_INDEX_FILE), b"old index")?;

    let mut builder = PackBuilder::default().with_write_options(WriteOptions {
        overwrite: false,
        ..Default::default()
    });
    builder.add_bytes("x.bin", "blob", &[1, 2, 3])?;
    let err = builder.finish(dir.path()).unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::DestinationExists));
    assert!(!dir.path().join(PACK_DATA_FILE).exists());
    assert_eq!(fs::read(dir.path().join(PACK_INDEX_FILE))?, b"old index");
    Ok(())
}

#[test]
fn test_finish_into_missing_directory_is_io_fault() -> Result<()> {
    let dir = tempdir()?;
    let mut builder = PackBuilder::default();
    builder.add_bytes("x.bin", "blob", &[1, 2, 3])?;

    let err = builder.finish(&dir.path().join("missing")).unwrap_err();

    assert!(err.is_io_fault());
    Ok(())
}
