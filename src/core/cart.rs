use crate::core::{CartItem, CartItemGroup, CatalogEntry, PricedSelection, SelectionSet};
use std::collections::BTreeMap;

/// Builds the cart summary with labels in place of ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct CartItemBuilder;

impl CartItemBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Every group of the entry appears in the result, with an empty option
    /// map when nothing in it is selected. Only the unit price is taken from
    /// `priced`; the extended price is recomputed for `quantity`.
    pub fn build(
        &self,
        entry: &CatalogEntry,
        selection: &SelectionSet,
        quantity: u32,
        priced: PricedSelection,
    ) -> CartItem {
        let selected_options = entry
            .groups
            .iter()
            .map(|(group_id, group)| {
                let options: BTreeMap<String, String> = group
                    .options
                    .iter()
                    .filter(|(option_id, _)| selection.is_selected(group_id, option_id))
                    .map(|(option_id, option)| (option_id.clone(), option.label.clone()))
                    .collect();
                let summary = CartItemGroup {
                    label: group.label.clone(),
                    options,
                };
                (group_id.clone(), summary)
            })
            .collect();

        CartItem {
            product_id: entry.id.clone(),
            name: entry.name.clone(),
            quantity,
            price: PricedSelection::new(priced.unit_price(), quantity),
            selected_options,
        }
    }
}
