use anyhow::Result;
use menu_pricing::{Catalog, PriceCalculator, RawSelection, SelectionResolver, SelectionSet};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_catalog() -> Result<Catalog> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
    Ok(Catalog::from_file(path)?)
}

/// Every option of every group submitted, then every subset made of one option per group.
fn interesting_selections(catalog: &Catalog) -> Vec<(String, RawSelection)> {
    let mut selections = Vec::new();
    for entry in catalog.entries() {
        selections.push((entry.id.clone(), RawSelection::new()));

        let everything: RawSelection = entry
            .groups
            .iter()
            .flat_map(|(group_id, group)| {
                group
                    .options
                    .keys()
                    .map(move |option_id| (group_id.clone(), option_id.clone()))
            })
            .collect();
        selections.push((entry.id.clone(), everything));

        for (group_id, group) in &entry.groups {
            for option_id in group.options.keys() {
                let single = RawSelection::new().with(group_id.as_str(), option_id.as_str());
                selections.push((entry.id.clone(), single));
            }
        }
    }
    selections
}

#[test]
fn test_extended_price_is_unit_times_quantity() -> Result<()> {
    let catalog = sample_catalog()?;
    let resolver = SelectionResolver::new();
    let calculator = PriceCalculator::new();

    for (product_id, raw) in interesting_selections(&catalog) {
        let entry = catalog.get(&product_id)?;
        let selection = resolver.resolve(&raw, &entry);
        for quantity in [1u32, 2, 3, 9, 25] {
            let priced = calculator.calculate(&entry, &selection, quantity);
            assert_eq!(
                priced.extended_price(),
                priced.unit_price() * Decimal::from(quantity),
                "{} with {:?} x {}",
                product_id,
                raw,
                quantity
            );
        }
    }
    Ok(())
}

#[test]
fn test_calculate_is_idempotent() -> Result<()> {
    let catalog = sample_catalog()?;
    let resolver = SelectionResolver::new();
    let calculator = PriceCalculator::new();

    for (product_id, raw) in interesting_selections(&catalog) {
        let entry = catalog.get(&product_id)?;
        let first = calculator.calculate(&entry, &resolver.resolve(&raw, &entry), 4);
        let second = calculator.calculate(&entry, &resolver.resolve(&raw, &entry), 4);
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn test_defaults_price_at_base() -> Result<()> {
    let catalog = sample_catalog()?;
    let calculator = PriceCalculator::new();

    for entry in catalog.entries() {
        let priced = calculator.calculate(entry, &SelectionSet::defaults(entry), 1);
        assert_eq!(priced.unit_price(), entry.base_price, "{}", entry.id);
    }
    Ok(())
}

#[test]
fn test_group_order_does_not_matter() -> Result<()> {
    let catalog = sample_catalog()?;
    let pizza = catalog.get("pizza")?;
    let resolver = SelectionResolver::new();
    let calculator = PriceCalculator::new();

    let forward = RawSelection::new()
        .with("crust", "thick")
        .with("toppings", "salami")
        .with("sauce", "cream");
    let backward = RawSelection::new()
        .with("sauce", "cream")
        .with("toppings", "salami")
        .with("crust", "thick");

    assert_eq!(
        calculator.calculate(&pizza, &resolver.resolve(&forward, &pizza), 1),
        calculator.calculate(&pizza, &resolver.resolve(&backward, &pizza), 1)
    );
    Ok(())
}

#[test]
fn test_pizza_configuration_prices() -> Result<()> {
    let catalog = sample_catalog()?;
    let pizza = catalog.get("pizza")?;
    let resolver = SelectionResolver::new();
    let calculator = PriceCalculator::new();

    // Swap the default sauce for another of the same price.
    let swapped = RawSelection::new()
        .with("sauce", "cream")
        .with("toppings", "olives")
        .with("toppings", "redPeppers")
        .with("toppings", "greenPeppers")
        .with("toppings", "mushrooms")
        .with("toppings", "basil")
        .with("crust", "standard");
    let priced = calculator.calculate(&pizza, &resolver.resolve(&swapped, &pizza), 1);
    assert_eq!(priced.unit_price(), dec!(20));

    // All default toppings dropped, salami and a thick crust added.
    let lean = RawSelection::new()
        .with("sauce", "tomato")
        .with("toppings", "salami")
        .with("crust", "thick");
    let priced = calculator.calculate(&pizza, &resolver.resolve(&lean, &pizza), 2);
    assert_eq!(priced.unit_price(), dec!(14.5));
    assert_eq!(priced.extended_price(), dec!(29));
    Ok(())
}
