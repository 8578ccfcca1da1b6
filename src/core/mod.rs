pub mod calculator;
pub mod cart;
pub mod product;
pub mod quantity;
pub mod resolver;

pub use crate::domain::model::{
    CartItem, CartItemGroup, CatalogEntry, OptionDefinition, OptionGroupDefinition, OptionStates,
    PricedSelection, RawSelection, SelectionMode, SelectionSet,
};
pub use crate::domain::ports::{CartSink, PricingSettings, QuantitySource};
pub use crate::utils::error::Result;

pub use calculator::PriceCalculator;
pub use cart::CartItemBuilder;
pub use product::{ProductConfigurator, Recompute};
pub use quantity::QuantityControl;
pub use resolver::SelectionResolver;
