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

//! # Forge IO
//!
//! Concrete, format-specific implementations of the
//! [`AssetWriter`](forge_core::writer::AssetWriter) contract, a registry that
//! dispatches to them by asset type name, and the pack builder that bundles
//! written assets into a `data.pack`/`index.bin` pair.

#![warn(missing_docs)]

pub mod assets;
pub mod pack;
pub mod registry;
pub mod writers;

pub use registry::{WriterRegistry, WriterStats};
