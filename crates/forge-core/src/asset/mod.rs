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

//! Provides the foundational traits and primitive types for the asset pipeline.
//!
//! This module defines the vocabulary shared by every writer: what counts as
//! an asset, how assets are identified, and how their metadata is described.
//! It has no knowledge of any file format.

mod metadata;
mod uuid;

pub use metadata::*;
pub use uuid::*;

/// A marker trait for types that can be handled by the asset pipeline.
///
/// The supertraits enforce the guarantees writers rely on:
/// - `Send` + `Sync`: an asset can be written from any thread, and several
///   threads may hold a shared reference to the same asset.
/// - `'static`: an asset owns its data, which allows type-name dispatch
///   through `std::any::Any`.
///
/// # Examples
///
/// ```
/// use forge_core::asset::Asset;
///
/// struct Heightmap {
///     samples: Vec<f32>,
/// }
///
/// impl Asset for Heightmap {}
/// ```
pub trait Asset: Send + Sync + 'static {}
