use clap::Parser;
use menu_pricing::core::PricingSettings;
use menu_pricing::utils::error::ErrorSeverity;
use menu_pricing::utils::{logger, validation::Validate};
use menu_pricing::{
    Catalog, CliConfig, JsonLinesSink, PriceCalculator, PricingError, ProductConfigurator,
    QuantityControl, Recompute, TomlConfig,
};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let level = logger::effective_level(config.verbose, settings.log_level());
    if settings.json_logs() {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config, &settings) {
        tracing::error!(
            "❌ Pricing failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 3,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 4,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig, settings: &TomlConfig) -> Result<(), PricingError> {
    config.validate()?;

    tracing::info!("📁 Loading catalog from: {}", settings.catalog_path());
    let catalog = Catalog::from_file(settings.catalog_path())?;
    if settings.validate_catalog() {
        catalog.validate()?;
    }

    if config.list {
        list_products(&catalog);
        return Ok(());
    }

    let product_id = config
        .product
        .as_deref()
        .ok_or_else(|| PricingError::MissingConfigError {
            field: "product".to_string(),
        })?;
    let entry = catalog.get(product_id)?;
    let quantity = QuantityControl::from_settings(settings)?;
    let mut product = ProductConfigurator::with_quantity(entry, quantity);

    if let Some(raw) = config.raw_selection()? {
        product.select(raw);
    }
    if let Some(quantity) = &config.quantity {
        product.set_quantity_input(quantity)?;
    }

    let state = product.recompute();
    display_price(&product, &state);

    if config.add_to_cart {
        let mut sink = JsonLinesSink::new(std::io::stdout().lock());
        product.add_to_cart(&mut sink)?;
    }

    Ok(())
}

fn list_products(catalog: &Catalog) {
    let calculator = PriceCalculator::new();
    println!("📋 Products:");
    for entry in catalog.entries() {
        println!(
            "  {:<12} {:<32} {}",
            entry.id,
            entry.name,
            calculator.default_unit_price(entry)
        );
        for (group_id, group) in &entry.groups {
            let options: Vec<&str> = group.options.keys().map(String::as_str).collect();
            println!("    {} ({}): {}", group_id, group.label, options.join(", "));
        }
    }
}

fn display_price(product: &ProductConfigurator, state: &Recompute) {
    let entry = product.entry();
    eprintln!("🍕 {} ({})", entry.name, entry.id);
    for (group_id, chosen) in state.selection.iter() {
        let picked: Vec<&str> = chosen.iter().map(String::as_str).collect();
        eprintln!("  {}: {}", group_id, picked.join(", "));
    }
    eprintln!(
        "  Unit price: {}  x {}  = {}",
        state.priced.unit_price(),
        product.quantity(),
        state.priced.extended_price()
    );
    let visible = state.option_states.visible_keys();
    if !visible.is_empty() {
        tracing::debug!("Visible indicators: {}", visible.join(" "));
    }
}
