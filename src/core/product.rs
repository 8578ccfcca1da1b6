use crate::core::{
    CartItemBuilder, CartSink, CatalogEntry, OptionStates, PriceCalculator, PricedSelection,
    QuantityControl, QuantitySource, RawSelection, SelectionResolver, SelectionSet,
};
use crate::utils::error::Result;
use std::sync::Arc;

/// Everything the view needs after one recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Recompute {
    pub selection: SelectionSet,
    pub priced: PricedSelection,
    pub option_states: OptionStates,
}

/// Owning context for one product on screen: keeps the latest input and
/// quantity, and recomputes synchronously on every change.
pub struct ProductConfigurator {
    entry: Arc<CatalogEntry>,
    raw: Option<RawSelection>,
    quantity: QuantityControl,
    resolver: SelectionResolver,
    calculator: PriceCalculator,
    builder: CartItemBuilder,
}

impl ProductConfigurator {
    pub fn new(entry: Arc<CatalogEntry>) -> Self {
        Self::with_quantity(entry, QuantityControl::default())
    }

    pub fn with_quantity(entry: Arc<CatalogEntry>, quantity: QuantityControl) -> Self {
        Self {
            entry,
            raw: None,
            quantity,
            resolver: SelectionResolver::new(),
            calculator: PriceCalculator::new(),
            builder: CartItemBuilder::new(),
        }
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.current_quantity()
    }

    /// Until input arrives the form shows the catalog defaults.
    fn current_selection(&self) -> SelectionSet {
        match &self.raw {
            Some(raw) => self.resolver.resolve(raw, &self.entry),
            None => SelectionSet::defaults(&self.entry),
        }
    }

    pub fn recompute(&self) -> Recompute {
        let selection = self.current_selection();
        let priced = self
            .calculator
            .calculate(&self.entry, &selection, self.quantity());
        let option_states = self.calculator.option_states(&self.entry, &selection);
        Recompute {
            selection,
            priced,
            option_states,
        }
    }

    pub fn select(&mut self, raw: RawSelection) -> Recompute {
        self.raw = Some(raw);
        self.recompute()
    }

    /// Recomputes only when the value actually changed.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<Option<Recompute>> {
        let changed = self.quantity.set_value(quantity)?;
        Ok(changed.then(|| self.recompute()))
    }

    pub fn set_quantity_input(&mut self, input: &str) -> Result<Option<Recompute>> {
        let changed = self.quantity.set_from_input(input)?;
        Ok(changed.then(|| self.recompute()))
    }

    pub fn increase_quantity(&mut self) -> Option<Recompute> {
        self.quantity.increase().then(|| self.recompute())
    }

    pub fn decrease_quantity(&mut self) -> Option<Recompute> {
        self.quantity.decrease().then(|| self.recompute())
    }

    /// Recomputes, builds the cart item and hands it to `sink`.
    pub fn add_to_cart<S: CartSink + ?Sized>(&self, sink: &mut S) -> Result<Recompute> {
        let state = self.recompute();
        let item = self
            .builder
            .build(&self.entry, &state.selection, self.quantity(), state.priced);
        tracing::info!(
            "Adding {} x '{}' to cart ({})",
            item.quantity,
            item.name,
            item.extended_price()
        );
        sink.add_to_cart(item)?;
        Ok(state)
    }
}
