//! Data-driven character content.
//!
//! Loads character records (RON) and rules configuration (TOML) from a data
//! directory. Everything loaded here is handed to `sheet-core` unchanged; the
//! loaders never derive or validate beyond building the item set.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CharacterFile, CharacterLoader, ConfigLoader, ContentFactory, LoadResult};
