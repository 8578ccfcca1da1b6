pub mod catalog;
pub mod sink;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::RawSelection;
#[cfg(feature = "cli")]
use crate::utils::error::{PricingError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use self::toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "menu-pricing")]
#[command(about = "Price a configured menu product and build its cart item")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Catalog JSON file (overrides the settings file)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Product id to configure
    #[arg(short, long)]
    pub product: Option<String>,

    /// Option selection as group=option[,option...]; repeatable
    #[arg(short, long = "select")]
    pub selections: Vec<String>,

    /// Quantity to price
    #[arg(short, long)]
    pub quantity: Option<String>,

    /// Emit the cart item as a JSON line on stdout
    #[arg(long)]
    pub add_to_cart: bool,

    /// List catalog products and their default prices
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Settings file (or defaults) with command line overrides applied.
    pub fn settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        if let Some(catalog) = &self.catalog {
            settings.catalog.path = catalog.clone();
        }
        if self.json_logs {
            settings.logging.json = Some(true);
        }
        settings.validate()?;
        Ok(settings)
    }

    /// `--select` flags as form input. An empty option list submits nothing
    /// for the group.
    pub fn raw_selection(&self) -> Result<Option<RawSelection>> {
        if self.selections.is_empty() {
            return Ok(None);
        }
        let mut raw = RawSelection::new();
        for flag in &self.selections {
            let (group, options) = flag.split_once('=').ok_or_else(|| {
                PricingError::InvalidConfigValueError {
                    field: "select".to_string(),
                    value: flag.clone(),
                    reason: "Expected group=option[,option...]".to_string(),
                }
            })?;
            for option in options.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                raw.push(group.trim(), option);
            }
        }
        Ok(Some(raw))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.list && self.product.is_none() {
            return Err(PricingError::MissingConfigError {
                field: "product".to_string(),
            });
        }
        if let Some(product) = &self.product {
            crate::utils::validation::validate_non_empty_string("product", product)?;
        }
        self.raw_selection().map(|_| ())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parses_selection_flags() {
        let config = CliConfig::parse_from([
            "menu-pricing",
            "--product",
            "pizza",
            "-s",
            "sauce=tomato",
            "--select",
            "toppings=olives, salami",
        ]);

        let raw = config.raw_selection().unwrap().unwrap();
        assert_eq!(raw.values("sauce"), Some(&["tomato".to_string()][..]));
        assert_eq!(raw.values("toppings").map(|v| v.len()), Some(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_selection() {
        let config = CliConfig::parse_from(["menu-pricing", "-p", "pizza", "-s", "sauce"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_product_required_unless_listing() {
        assert!(CliConfig::parse_from(["menu-pricing"]).validate().is_err());
        assert!(CliConfig::parse_from(["menu-pricing", "--list"])
            .validate()
            .is_ok());
    }

    #[test]
    fn test_catalog_flag_overrides_settings() {
        let config = CliConfig::parse_from(["menu-pricing", "--list", "--catalog", "menu.json"]);
        assert_eq!(config.settings().unwrap().catalog.path, "menu.json");
    }
}
