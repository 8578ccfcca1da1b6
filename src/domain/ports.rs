use crate::domain::model::CartItem;
use crate::utils::error::Result;

/// Receiver of the add-to-cart signal. Takes ownership of the item.
pub trait CartSink {
    fn add_to_cart(&mut self, item: CartItem) -> Result<()>;
}

impl<F> CartSink for F
where
    F: FnMut(CartItem) -> Result<()>,
{
    fn add_to_cart(&mut self, item: CartItem) -> Result<()> {
        self(item)
    }
}

/// Read side of a quantity control.
pub trait QuantitySource {
    fn current_quantity(&self) -> u32;
}

pub trait PricingSettings {
    fn catalog_path(&self) -> &str;
    fn default_quantity(&self) -> u32;
    fn min_quantity(&self) -> u32;
    fn max_quantity(&self) -> u32;
}
