use crate::core::{CatalogEntry, OptionStates, PricedSelection, SelectionSet};
use rust_decimal::Decimal;

/// Prices a configured product.
///
/// A default option's delta is assumed to be included in the base price:
/// dropping a default subtracts its delta, picking a non-default adds it.
/// Quantity is taken as given; bounds are the quantity control's job.
#[derive(Debug, Default, Clone, Copy)]
pub struct PriceCalculator;

impl PriceCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(
        &self,
        entry: &CatalogEntry,
        selection: &SelectionSet,
        quantity: u32,
    ) -> PricedSelection {
        let mut price = entry.base_price;

        for (group_id, group) in &entry.groups {
            for (option_id, option) in &group.options {
                let selected = selection.is_selected(group_id, option_id);
                let delta = match (selected, option.is_default) {
                    (true, false) => option.price_delta,
                    (false, true) => -option.price_delta,
                    _ => continue,
                };
                tracing::trace!("{}.{}: {:+}", group_id, option_id, delta);
                price = price.saturating_add(delta);
            }
        }

        // No floor: negative prices are a catalog authoring problem.
        let priced = PricedSelection::new(price, quantity);
        tracing::debug!(
            "Priced '{}': unit {} x {} = {}",
            entry.id,
            priced.unit_price(),
            quantity,
            priced.extended_price()
        );
        priced
    }

    /// Selected flag for every option of every group, for visual indicators.
    pub fn option_states(&self, entry: &CatalogEntry, selection: &SelectionSet) -> OptionStates {
        let mut states = OptionStates::default();
        for (group_id, group) in &entry.groups {
            for option_id in group.options.keys() {
                states.set(group_id, option_id, selection.is_selected(group_id, option_id));
            }
        }
        states
    }

    /// The price of the entry with every option left at its default.
    pub fn default_unit_price(&self, entry: &CatalogEntry) -> Decimal {
        self.calculate(entry, &SelectionSet::defaults(entry), 1)
            .unit_price()
    }
}
