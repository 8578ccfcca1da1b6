pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{catalog::Catalog, sink::JsonLinesSink, toml_config::TomlConfig};
pub use crate::core::{
    CartItem, CartItemBuilder, CatalogEntry, PriceCalculator, PricedSelection,
    ProductConfigurator, QuantityControl, RawSelection, Recompute, SelectionResolver,
    SelectionSet,
};
pub use utils::error::{PricingError, Result};
