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

//! Defines the two-channel error model of the asset writers.

use serde::{Deserialize, Serialize};
use std::{fmt, io};

/// A classification of domain-level write failures.
///
/// These are the failures a writer detects itself (an asset it cannot
/// represent, a format it cannot produce, a destination policy violation).
/// Low-level I/O problems never appear here; they travel through
/// [`WriteError::Io`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The asset is in a state the writer cannot serialize
    /// (e.g. a pixel buffer that does not match the texture dimensions).
    InvalidAsset,
    /// The asset is valid, but the requested output format cannot encode it.
    UnsupportedFormat,
    /// The encoder backing the writer rejected the data.
    Encoding,
    /// The destination already exists and overwriting was disabled.
    DestinationExists,
    /// No writer is registered under the requested asset type name.
    NoWriterRegistered,
    /// A writer was found, but it is bound to a different asset type.
    AssetTypeMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidAsset => "invalid asset",
            ErrorKind::UnsupportedFormat => "unsupported format",
            ErrorKind::Encoding => "encoding failure",
            ErrorKind::DestinationExists => "destination exists",
            ErrorKind::NoWriterRegistered => "no writer registered",
            ErrorKind::AssetTypeMismatch => "asset type mismatch",
        };
        f.write_str(name)
    }
}

/// The error returned by every write operation.
///
/// Both failure channels live in one exhaustively-matched type:
/// - [`WriteError::Domain`] carries a recoverable, classified failure.
/// - [`WriteError::Io`] carries a raw I/O fault from the device or filesystem.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// A domain-level failure detected by the writer.
    #[error("{kind}: {message}")]
    Domain {
        /// The failure classification.
        kind: ErrorKind,
        /// A human-readable description of what went wrong.
        message: String,
    },
    /// A lower-level I/O fault.
    #[error("I/O fault while writing asset: {0}")]
    Io(#[from] io::Error),
}

impl WriteError {
    /// Creates a domain failure of the given kind.
    pub fn domain(kind: ErrorKind, message: impl Into<String>) -> Self {
        WriteError::Domain {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidAsset`] failure.
    pub fn invalid_asset(message: impl Into<String>) -> Self {
        Self::domain(ErrorKind::InvalidAsset, message)
    }

    /// Shorthand for an [`ErrorKind::Encoding`] failure.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::domain(ErrorKind::Encoding, message)
    }

    /// Returns the domain classification, or `None` for an I/O fault.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            WriteError::Domain { kind, .. } => Some(*kind),
            WriteError::Io(_) => None,
        }
    }

    /// Returns `true` if this error is a raw I/O fault.
    pub fn is_io_fault(&self) -> bool {
        matches!(self, WriteError::Io(_))
    }
}

/// A convenience alias for results of write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// The status value of a completed write.
///
/// `NoError` is the success sentinel. Use [`WriteStatus::from_result`] to turn a
/// [`WriteResult`] into "status or raised I/O fault" for callers that work with
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WriteStatus {
    /// The write completed without failure.
    NoError,
    /// The write failed with a domain-level classification.
    Failed(ErrorKind),
}

impl WriteStatus {
    /// Splits a write result into its two channels.
    ///
    /// Successes and domain failures become a status value; I/O faults are
    /// returned as `Err` so they propagate with `?`.
    pub fn from_result<T>(result: WriteResult<T>) -> io::Result<WriteStatus> {
        match result {
            Ok(_) => Ok(WriteStatus::NoError),
            Err(WriteError::Domain { kind, .. }) => Ok(WriteStatus::Failed(kind)),
            Err(WriteError::Io(err)) => Err(err),
        }
    }

    /// Returns `true` for the success sentinel.
    pub fn is_ok(&self) -> bool {
        matches!(self, WriteStatus::NoError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_splits_channels() {
        let ok: WriteResult<()> = Ok(());
        assert_eq!(WriteStatus::from_result(ok).unwrap(), WriteStatus::NoError);

        let domain: WriteResult<()> = Err(WriteError::invalid_asset("empty buffer"));
        assert_eq!(
            WriteStatus::from_result(domain).unwrap(),
            WriteStatus::Failed(ErrorKind::InvalidAsset)
        );

        let io: WriteResult<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone").into());
        let fault = WriteStatus::from_result(io).unwrap_err();
        assert_eq!(fault.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_kind_is_none_for_io_faults() {
        let err = WriteError::from(io::Error::other("device error"));
        assert!(err.is_io_fault());
        assert_eq!(err.kind(), None);

        let err = WriteError::encoding("bad sample");
        assert!(!err.is_io_fault());
        assert_eq!(err.kind(), Some(ErrorKind::Encoding));
        assert_eq!(err.to_string(), "encoding failure: bad sample");
    }
}
