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

//! Implements an asset writer for `.wav` audio files.

use crate::assets::SoundData;
use forge_core::writer::{AssetWriter, WriteError, WriteResult};
use std::io::{Cursor, Write};

/// The sample encoding used inside the WAV container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavSampleFormat {
    /// 16-bit signed PCM. Samples are clamped to `[-1.0, 1.0]` and scaled by
    /// `i16::MAX`.
    #[default]
    Int16,
    /// 32-bit IEEE float, stored as-is.
    Float32,
}

/// An `AssetWriter` that encodes [`SoundData`] in the WAV format.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavSoundWriter {
    sample_format: WavSampleFormat,
}

impl WavSoundWriter {
    /// Creates a writer producing 16-bit PCM.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer producing the given sample encoding.
    pub fn with_sample_format(sample_format: WavSampleFormat) -> Self {
        Self { sample_format }
    }

    fn validate(asset: &SoundData) -> WriteResult<()> {
        if asset.channels == 0 {
            return Err(WriteError::invalid_asset("sound has zero channels"));
        }
        if asset.sample_rate == 0 {
            return Err(WriteError::invalid_asset("sound has a zero sample rate"));
        }
        if asset.samples.len() % asset.channels as usize != 0 {
            return Err(WriteError::invalid_asset(format!(
                "{} samples cannot be split evenly across {} channels",
                asset.samples.len(),
                asset.channels
            )));
        }
        if let Some(index) = asset.samples.iter().position(|s| !s.is_finite()) {
            return Err(WriteError::invalid_asset(format!(
                "sample {index} is not a finite number"
            )));
        }
        Ok(())
    }
}

fn map_hound_error(error: hound::Error) -> WriteError {
    match error {
        hound::Error::IoError(io) => WriteError::Io(io),
        other => WriteError::encoding(format!("WAV encoding failed: {other}")),
    }
}

impl AssetWriter<SoundData> for WavSoundWriter {
    fn extension(&self) -> &'static str {
        "wav"
    }

    fn write_to(&self, asset: &SoundData, out: &mut dyn Write) -> WriteResult<()> {
        Self::validate(asset)?;

        let (bits_per_sample, sample_format) = match self.sample_format {
            WavSampleFormat::Int16 => (16, hound::SampleFormat::Int),
            WavSampleFormat::Float32 => (32, hound::SampleFormat::Float),
        };
        let spec = hound::WavSpec {
            channels: asset.channels,
            sample_rate: asset.sample_rate,
            bits_per_sample,
            sample_format,
        };

        // hound patches the chunk sizes on finalize, which needs a seekable sink.
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).map_err(map_hound_error)?;
        for &sample in &asset.samples {
            let written = match self.sample_format {
                WavSampleFormat::Int16 => {
                    let scaled = (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
                    writer.write_sample(scaled)
                }
                WavSampleFormat::Float32 => writer.write_sample(sample),
            };
            written.map_err(map_hound_error)?;
        }
        writer.finalize().map_err(map_hound_error)?;

        out.write_all(cursor.get_ref())?;
        Ok(())
    }
}
