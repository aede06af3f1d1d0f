//! Asset types and the useful-life lookup contract.

pub mod types;

pub use types::{AssetCatalog, AssetType, InMemoryCatalog};
