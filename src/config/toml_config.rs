use crate::core::quantity::{DEFAULT_MAX_QUANTITY, DEFAULT_MIN_QUANTITY, DEFAULT_QUANTITY};
use crate::core::PricingSettings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub quantity: QuantityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
    pub validate: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuantityConfig {
    pub default: Option<u32>,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("catalog.path", &self.catalog.path)?;

        let (min, max) = (self.min_quantity(), self.max_quantity());
        validation::validate_quantity_bounds("quantity", min, max)?;
        validation::validate_range("quantity.default", self.default_quantity(), min, max)?;

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn validate_catalog(&self) -> bool {
        self.catalog.validate.unwrap_or(true)
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                path: "data/catalog.json".to_string(),
                validate: None,
            },
            quantity: QuantityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PricingSettings for TomlConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog.path
    }

    fn default_quantity(&self) -> u32 {
        self.quantity.default.unwrap_or(DEFAULT_QUANTITY)
    }

    fn min_quantity(&self) -> u32 {
        self.quantity.min.unwrap_or(DEFAULT_MIN_QUANTITY)
    }

    fn max_quantity(&self) -> u32 {
        self.quantity.max.unwrap_or(DEFAULT_MAX_QUANTITY)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
