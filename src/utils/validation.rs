use crate::utils::error::{PricingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// `1 <= min <= max`, reported against `field_name.min` / `field_name.max`.
pub fn validate_quantity_bounds(field_name: &str, min: u32, max: u32) -> Result<()> {
    if min == 0 {
        return Err(PricingError::InvalidConfigValueError {
            field: format!("{}.min", field_name),
            value: min.to_string(),
            reason: "Value must be at least 1".to_string(),
        });
    }
    if max < min {
        return Err(PricingError::InvalidConfigValueError {
            field: format!("{}.max", field_name),
            value: max.to_string(),
            reason: format!("Must not be below {}.min ({})", field_name, min),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog.path", "data/catalog.json").is_ok());
        assert!(validate_path("catalog.path", "").is_err());
        assert!(validate_path("catalog.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_quantity_bounds() {
        assert!(validate_quantity_bounds("quantity", 1, 9).is_ok());
        assert!(validate_quantity_bounds("quantity", 3, 3).is_ok());
        assert!(matches!(
            validate_quantity_bounds("quantity", 0, 9),
            Err(PricingError::InvalidConfigValueError { field, .. }) if field == "quantity.min"
        ));
        assert!(matches!(
            validate_quantity_bounds("quantity", 5, 2),
            Err(PricingError::InvalidConfigValueError { field, .. }) if field == "quantity.max"
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("quantity.default", 3, 1, 9).is_ok());
        assert!(validate_range("quantity.default", 10, 1, 9).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "debug", &["info", "debug"]).is_ok());
        assert!(validate_one_of("logging.level", "loud", &["info", "debug"]).is_err());
    }
}
