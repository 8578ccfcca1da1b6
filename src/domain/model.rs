use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How many options of a group the input surface lets the user pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[serde(alias = "radios", alias = "select")]
    Single,
    #[serde(alias = "checkboxes")]
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub label: String,
    /// Signed adjustment applied when the selection state differs from `is_default`.
    #[serde(rename = "price", alias = "priceDelta")]
    pub price_delta: Decimal,
    #[serde(rename = "default", alias = "isDefault", default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroupDefinition {
    pub label: String,
    #[serde(rename = "type", alias = "selectionMode")]
    pub selection_mode: SelectionMode,
    pub options: BTreeMap<String, OptionDefinition>,
}

/// One product as described by the catalog. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "basePrice", alias = "price")]
    pub base_price: Decimal,
    #[serde(rename = "params", alias = "groups", default)]
    pub groups: BTreeMap<String, OptionGroupDefinition>,
}

/// One submitted field: a single value or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    One(String),
    Many(Vec<String>),
}

impl From<RawValue> for Vec<String> {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::One(v) => vec![v],
            RawValue::Many(vs) => vs,
        }
    }
}

/// Submitted form values keyed by group id, as the input surface produced them.
///
/// Single values are normalized to one-element lists on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, RawValue>")]
pub struct RawSelection {
    fields: BTreeMap<String, Vec<String>>,
}

impl From<BTreeMap<String, RawValue>> for RawSelection {
    fn from(map: BTreeMap<String, RawValue>) -> Self {
        Self {
            fields: map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl RawSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(field, value);
        self
    }

    pub fn push(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(value.into());
    }

    pub fn values(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawSelection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = RawSelection::new();
        for (field, value) in iter {
            raw.push(field, value);
        }
        raw
    }
}

/// Resolved option ids per group. Every group of the entry has a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSet {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selection a freshly rendered form shows: every default option checked.
    pub fn defaults(entry: &CatalogEntry) -> Self {
        let groups = entry
            .groups
            .iter()
            .map(|(group_id, group)| {
                let chosen = group
                    .options
                    .iter()
                    .filter(|(_, option)| option.is_default)
                    .map(|(option_id, _)| option_id.clone())
                    .collect();
                (group_id.clone(), chosen)
            })
            .collect();
        Self { groups }
    }

    pub fn insert_group(&mut self, group_id: impl Into<String>, options: BTreeSet<String>) {
        self.groups.insert(group_id.into(), options);
    }

    pub fn is_selected(&self, group_id: &str, option_id: &str) -> bool {
        self.groups
            .get(group_id)
            .is_some_and(|chosen| chosen.contains(option_id))
    }

    pub fn group(&self, group_id: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(group_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.groups.iter()
    }
}

/// Unit and extended price of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedSelection {
    unit_price: Decimal,
    extended_price: Decimal,
}

impl PricedSelection {
    /// Extended price saturates at the `Decimal` range instead of overflowing.
    pub fn new(unit_price: Decimal, quantity: u32) -> Self {
        Self {
            unit_price,
            extended_price: unit_price.saturating_mul(Decimal::from(quantity)),
        }
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn extended_price(&self) -> Decimal {
        self.extended_price
    }
}

/// Per-option "currently selected" flags, reported for visual indicators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionStates {
    groups: BTreeMap<String, BTreeMap<String, bool>>,
}

impl OptionStates {
    pub fn set(&mut self, group_id: &str, option_id: &str, selected: bool) {
        self.groups
            .entry(group_id.to_string())
            .or_default()
            .insert(option_id.to_string(), selected);
    }

    pub fn get(&self, group_id: &str, option_id: &str) -> Option<bool> {
        self.groups.get(group_id)?.get(option_id).copied()
    }

    /// Indicator key in the `group-option` form used by product images.
    pub fn visible_keys(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|(group_id, options)| {
                options
                    .iter()
                    .filter(|(_, selected)| **selected)
                    .map(move |(option_id, _)| format!("{}-{}", group_id, option_id))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemGroup {
    pub label: String,
    /// Option id to option label, selected options only.
    pub options: BTreeMap<String, String>,
}

/// Summary handed to the cart aggregator on add-to-cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(flatten)]
    pub price: PricedSelection,
    pub selected_options: BTreeMap<String, CartItemGroup>,
}

impl CartItem {
    pub fn unit_price(&self) -> Decimal {
        self.price.unit_price()
    }

    pub fn extended_price(&self) -> Decimal {
        self.price.extended_price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_selection_normalizes_single_values() {
        let raw: RawSelection =
            serde_json::from_str(r#"{"sauce": "tomato", "toppings": ["olives", "feta"]}"#)
                .unwrap();
        assert_eq!(raw.values("sauce"), Some(&["tomato".to_string()][..]));
        assert_eq!(raw.values("toppings").map(|v| v.len()), Some(2));
        assert_eq!(raw.values("crust"), None);
    }

    #[test]
    fn test_priced_selection_keeps_extended_in_step() {
        let priced = PricedSelection::new(dec!(27), 3);
        assert_eq!(priced.extended_price(), dec!(81));
        assert_eq!(PricedSelection::new(dec!(9.5), 0).extended_price(), dec!(0));
    }

    #[test]
    fn test_priced_selection_saturates_huge_totals() {
        let huge = dec!(40000000000000000000000000000);
        assert_eq!(PricedSelection::new(huge, 2).extended_price(), Decimal::MAX);
        assert_eq!(PricedSelection::new(-huge, 2).extended_price(), Decimal::MIN);
    }

    #[test]
    fn test_catalog_entry_reads_catalog_field_names() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{
                "name": "Pizza",
                "price": 20,
                "params": {
                    "sauce": {
                        "label": "Sauce",
                        "type": "radios",
                        "options": {
                            "tomato": {"label": "Tomato", "price": 0, "default": true},
                            "cream": {"label": "Sour cream", "price": 2}
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let sauce = &entry.groups["sauce"];
        assert_eq!(entry.base_price, dec!(20));
        assert_eq!(sauce.selection_mode, SelectionMode::Single);
        assert!(sauce.options["tomato"].is_default);
        assert!(!sauce.options["cream"].is_default);
    }

    #[test]
    fn test_visible_keys() {
        let mut states = OptionStates::default();
        states.set("toppings", "olives", true);
        states.set("toppings", "salami", false);
        assert_eq!(states.visible_keys(), vec!["toppings-olives".to_string()]);
    }
}
