//! Catalog loading module.
//!
//! The catalog is a single static JSON document of the form
//! `{"towers": [...]}`, loaded once at startup and read-only afterwards.
//! Records are parsed individually: one malformed tower is skipped with
//! a warning rather than failing the whole load, because the catalog is
//! externally authored and routinely incomplete. Order is preserved as
//! authored.

use crate::error::CatalogError;
use crate::tower::Tower;
use log::{debug, info, warn};
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    towers: Vec<serde_json::Value>,
}

/// A loaded, read-only tower catalog.
///
/// # Examples
///
/// ```rust
/// use towergauge::Catalog;
///
/// let catalog = Catalog::from_json_str(r#"{
///     "towers": [
///         {"name": "Archer", "type": "Swift", "damage": 40},
///         {"name": "Mortar", "type": "Vanguard", "damage": {"value": 80, "type": "area"}}
///     ]
/// }"#).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.towers()[0].name, "Archer");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    towers: Vec<Tower>,
}

impl Catalog {
    /// Parse a catalog from a JSON string.
    ///
    /// Fails only if the document itself is malformed or no record in it
    /// is usable; individually broken records are skipped with a
    /// warning.
    pub fn from_json_str(json: &str) -> Result<Catalog, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Catalog::from_records(document.towers)
    }

    /// Parse a catalog from any reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use towergauge::Catalog;
    ///
    /// let json = br#"{"towers": [{"name": "Archer", "type": "Swift"}]}"#;
    /// let catalog = Catalog::from_reader(&json[..]).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Catalog, CatalogError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Catalog::from_json_str(&json)
    }

    fn from_records(records: Vec<serde_json::Value>) -> Result<Catalog, CatalogError> {
        let total = records.len();
        let mut towers = Vec::with_capacity(total);

        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Tower>(record) {
                Ok(tower) => towers.push(tower),
                Err(err) => {
                    warn!("skipping malformed tower record #{index}: {err}");
                }
            }
        }

        if towers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let skipped = total - towers.len();
        if skipped > 0 {
            info!("loaded {} towers ({skipped} records skipped)", towers.len());
        } else {
            debug!("loaded {} towers", towers.len());
        }

        Ok(Catalog { towers })
    }

    /// All towers, in catalog order.
    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    /// The tower at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Tower> {
        self.towers.get(index)
    }

    /// Number of loaded towers.
    pub fn len(&self) -> usize {
        self.towers.len()
    }

    /// Whether the catalog holds no towers. Loading guarantees this is
    /// false; it exists for the usual container contract.
    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    /// Iterate over towers in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tower> {
        self.towers.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Tower;
    type IntoIter = std::slice::Iter<'a, Tower>;

    fn into_iter(self) -> Self::IntoIter {
        self.towers.iter()
    }
}
