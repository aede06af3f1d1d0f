//! Asset catalog types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DepreciationError;

/// An asset category with its DS 24051 useful life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetType {
    /// Category name (unique key).
    pub name: String,
    /// Useful life in years, always positive.
    pub useful_life_years: u32,
}

impl AssetType {
    /// Creates an asset type.
    ///
    /// # Errors
    ///
    /// Returns `DepreciationError::InvalidUsefulLife` if `useful_life_years` is zero.
    pub fn new(name: impl Into<String>, useful_life_years: u32) -> Result<Self, DepreciationError> {
        if useful_life_years == 0 {
            return Err(DepreciationError::InvalidUsefulLife(0));
        }
        Ok(Self {
            name: name.into(),
            useful_life_years,
        })
    }
}

/// Lookup of useful life by asset type name.
///
/// The backing store is the implementor's concern; the engine only needs
/// this single capability.
pub trait AssetCatalog {
    /// Returns the useful life in years for `name`.
    ///
    /// # Errors
    ///
    /// Returns `DepreciationError::UnknownAssetType` if the name is absent.
    fn useful_life(&self, name: &str) -> Result<u32, DepreciationError>;
}

/// Catalog held in memory, loaded once before any computation.
///
/// On duplicate names the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: Vec<AssetType>,
    by_name: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Builds a catalog from asset types.
    #[must_use]
    pub fn new(types: impl IntoIterator<Item = AssetType>) -> Self {
        let mut catalog = Self::default();
        for asset_type in types {
            if catalog.by_name.contains_key(&asset_type.name) {
                continue;
            }
            catalog
                .by_name
                .insert(asset_type.name.clone(), catalog.entries.len());
            catalog.entries.push(asset_type);
        }
        catalog
    }

    /// Asset type names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|t| t.name.as_str())
    }

    /// All asset types in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[AssetType] {
        &self.entries
    }

    /// Returns the asset type with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AssetType> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Number of distinct asset types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetCatalog for InMemoryCatalog {
    fn useful_life(&self, name: &str) -> Result<u32, DepreciationError> {
        self.get(name)
            .map(|t| t.useful_life_years)
            .ok_or_else(|| DepreciationError::UnknownAssetType(name.to_string()))
    }
}

impl<C: AssetCatalog + ?Sized> AssetCatalog for &C {
    fn useful_life(&self, name: &str) -> Result<u32, DepreciationError> {
        (**self).useful_life(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            AssetType::new("Edificaciones", 40).unwrap(),
            AssetType::new("Muebles y enseres de oficina", 10).unwrap(),
            AssetType::new("Vehiculos automotores", 5).unwrap(),
            AssetType::new("Equipos de computacion", 4).unwrap(),
        ])
    }

    #[test]
    fn test_zero_useful_life_rejected() {
        assert_eq!(
            AssetType::new("Terrenos", 0),
            Err(DepreciationError::InvalidUsefulLife(0))
        );
    }

    #[test]
    fn test_lookup_known_asset() {
        let catalog = sample_catalog();
        assert_eq!(catalog.useful_life("Vehiculos automotores"), Ok(5));
        assert_eq!(catalog.useful_life("Edificaciones"), Ok(40));
    }

    #[test]
    fn test_lookup_unknown_asset() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.useful_life("Aviones"),
            Err(DepreciationError::UnknownAssetType("Aviones".to_string()))
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let catalog = sample_catalog();
        assert!(catalog.useful_life("edificaciones").is_err());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let catalog = InMemoryCatalog::new(vec![
            AssetType::new("Herramientas en general", 4).unwrap(),
            AssetType::new("Barcos y lanchas", 10).unwrap(),
            AssetType::new("Herramientas en general", 8).unwrap(),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.useful_life("Herramientas en general"), Ok(4));
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["Herramientas en general", "Barcos y lanchas"]
        );
    }

    #[test]
    fn test_catalog_through_reference() {
        fn life_of(catalog: impl AssetCatalog, name: &str) -> Result<u32, DepreciationError> {
            catalog.useful_life(name)
        }

        let catalog = sample_catalog();
        assert_eq!(life_of(&catalog, "Equipos de computacion"), Ok(4));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = InMemoryCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.useful_life("Edificaciones").is_err());
    }
}
