//! The creature catalog: immutable definitions keyed by normalized name.
//!
//! A catalog is built once at process start and passed by reference into
//! every battle. Nothing in it changes after construction, so hosts can share
//! a single instance across concurrent battles.

use crate::errors::{CatalogError, CatalogResult};
use schema::CreatureDefinition;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../data/pokemon_data.json");

/// Anything that can resolve a creature identifier to its definition.
pub trait CreatureLookup {
    fn lookup(&self, name: &str) -> Option<&CreatureDefinition>;
}

/// Normalizes a user-supplied creature name into a catalog key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(['"', '\''], "")
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    creatures: BTreeMap<String, CreatureDefinition>,
}

impl Catalog {
    /// Builds a catalog keyed by each definition's normalized name.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CreatureDefinition>,
    ) -> CatalogResult<Self> {
        Self::from_entries(
            definitions
                .into_iter()
                .map(|definition| (definition.name.clone(), definition)),
        )
    }

    /// Parses a JSON object mapping creature keys to definitions.
    pub fn from_json_str(contents: &str) -> CatalogResult<Self> {
        let raw: CatalogEntries = serde_json::from_str(contents)?;
        Self::from_entries(raw.0)
    }

    /// Parses the same key-to-definition map written in RON.
    pub fn from_ron_str(contents: &str) -> CatalogResult<Self> {
        let raw: CatalogEntries = ron::from_str(contents)?;
        Self::from_entries(raw.0)
    }

    /// Loads a catalog file, picking the parser from its extension.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let read = || {
            std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_str(&read()?)?,
            Some("ron") => Self::from_ron_str(&read()?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(
            path = %path.display(),
            creatures = catalog.len(),
            "Loaded Pokémon catalog"
        );
        Ok(catalog)
    }

    /// The catalog bundled into the binary.
    pub fn builtin() -> CatalogResult<Self> {
        let catalog = Self::from_json_str(BUILTIN_CATALOG)?;
        tracing::debug!(creatures = catalog.len(), "Loaded built-in Pokémon catalog");
        Ok(catalog)
    }

    fn from_entries(
        entries: impl IntoIterator<Item = (String, CreatureDefinition)>,
    ) -> CatalogResult<Self> {
        let mut creatures = BTreeMap::new();
        for (key, definition) in entries {
            let normalized = normalize_name(&key);
            if creatures.insert(normalized.clone(), definition).is_some() {
                return Err(CatalogError::DuplicateName(normalized));
            }
        }
        Ok(Self { creatures })
    }

    /// Normalized keys in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creatures.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CreatureDefinition)> {
        self.creatures
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// Keys containing the normalized query, for "did you mean" messages.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        let needle = normalize_name(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.names().filter(|name| name.contains(&needle)).collect()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

/// Catalog file entries in file order, repeated keys included.
struct CatalogEntries(Vec<(String, CreatureDefinition)>);

impl<'de> Deserialize<'de> for CatalogEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = CatalogEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of Pokémon names to definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, CreatureDefinition>()? {
                    entries.push(entry);
                }
                Ok(CatalogEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl CreatureLookup for Catalog {
    fn lookup(&self, name: &str) -> Option<&CreatureDefinition> {
        self.creatures.get(&normalize_name(name))
    }
}
