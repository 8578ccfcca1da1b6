use crate::core::{CatalogEntry, PriceCalculator, SelectionMode};
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::Validate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { products: Box<CatalogDocument> },
    Keyed(BTreeMap<String, CatalogEntry>),
    Listed(Vec<CatalogEntry>),
}

/// Loaded products, shared read-only with every configurator that prices them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<String, Arc<CatalogEntry>>,
}

impl Catalog {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded catalog file {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    /// Accepts `{id: entry}`, `[entry]` (entries carry `id`), or either
    /// wrapped as `{"products": ...}`.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        let mut catalog = Catalog::default();
        catalog.absorb(document)?;
        tracing::info!("Catalog ready with {} product(s)", catalog.len());
        Ok(catalog)
    }

    fn absorb(&mut self, document: CatalogDocument) -> Result<()> {
        match document {
            CatalogDocument::Wrapped { products } => self.absorb(*products),
            CatalogDocument::Keyed(map) => {
                for (id, mut entry) in map {
                    if entry.id.is_empty() {
                        entry.id = id.clone();
                    } else if entry.id != id {
                        return Err(PricingError::InvalidCatalog {
                            product: id,
                            reason: format!("entry id '{}' differs from its key", entry.id),
                        });
                    }
                    self.products.insert(id, Arc::new(entry));
                }
                Ok(())
            }
            CatalogDocument::Listed(entries) => {
                for entry in entries {
                    if entry.id.trim().is_empty() {
                        return Err(PricingError::InvalidCatalog {
                            product: entry.name.clone(),
                            reason: "listed entries need an id".to_string(),
                        });
                    }
                    self.products.insert(entry.id.clone(), Arc::new(entry));
                }
                Ok(())
            }
        }
    }

    pub fn get(&self, id: &str) -> Result<Arc<CatalogEntry>> {
        self.products
            .get(id)
            .cloned()
            .ok_or_else(|| PricingError::UnknownProduct { id: id.to_string() })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Authoring checks. The calculator never relies on these having run.
pub fn validate_entry(entry: &CatalogEntry) -> Result<()> {
    let invalid = |reason: String| PricingError::InvalidCatalog {
        product: entry.id.clone(),
        reason,
    };

    if entry.name.trim().is_empty() {
        return Err(invalid("name is empty".to_string()));
    }
    if entry.base_price < Decimal::ZERO {
        return Err(invalid(format!("base price {} is negative", entry.base_price)));
    }

    for (group_id, group) in &entry.groups {
        let defaults = group.options.values().filter(|o| o.is_default).count();
        if group.selection_mode == SelectionMode::Single && defaults > 1 {
            return Err(invalid(format!(
                "single-choice group '{}' has {} default options",
                group_id, defaults
            )));
        }
    }

    // Lowest reachable unit price: every default dropped, every negative extra picked.
    let floor = entry
        .groups
        .values()
        .flat_map(|group| group.options.values())
        .fold(entry.base_price, |price, option| {
            match (option.is_default, option.price_delta.is_sign_negative()) {
                (true, false) => price.saturating_sub(option.price_delta),
                (false, true) => price.saturating_add(option.price_delta),
                _ => price,
            }
        });
    if floor < Decimal::ZERO {
        tracing::warn!(
            "Product '{}' can be configured down to a negative unit price ({})",
            entry.id,
            floor
        );
    }

    let neutral = PriceCalculator::new().default_unit_price(entry);
    if neutral != entry.base_price {
        tracing::warn!(
            "Product '{}' prices at {} with defaults, base price is {}",
            entry.id,
            neutral,
            entry.base_price
        );
    }

    Ok(())
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        for entry in self.entries() {
            validate_entry(entry)?;
        }
        Ok(())
    }
}
