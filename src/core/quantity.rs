use crate::core::{PricingSettings, QuantitySource};
use crate::utils::error::{PricingError, Result};
use crate::utils::validation;

pub const DEFAULT_QUANTITY: u32 = 1;
pub const DEFAULT_MIN_QUANTITY: u32 = 1;
pub const DEFAULT_MAX_QUANTITY: u32 = 9;

/// Bounded quantity input. The only place a quantity gets validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityControl {
    value: u32,
    min: u32,
    max: u32,
}

impl Default for QuantityControl {
    fn default() -> Self {
        Self {
            value: DEFAULT_QUANTITY,
            min: DEFAULT_MIN_QUANTITY,
            max: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl QuantityControl {
    pub fn new(value: u32, min: u32, max: u32) -> Result<Self> {
        validation::validate_quantity_bounds("quantity", min, max)?;
        let mut control = Self {
            value: min,
            min,
            max,
        };
        control.set_value(value)?;
        Ok(control)
    }

    pub fn from_settings<S: PricingSettings>(settings: &S) -> Result<Self> {
        Self::new(
            settings.default_quantity(),
            settings.min_quantity(),
            settings.max_quantity(),
        )
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    /// Returns whether the stored value changed. Rejected input leaves it as is.
    pub fn set_value(&mut self, value: u32) -> Result<bool> {
        if value < self.min || value > self.max {
            return Err(self.rejected(value.to_string()));
        }
        let changed = value != self.value;
        self.value = value;
        Ok(changed)
    }

    /// Form input variant of [`set_value`](Self::set_value).
    pub fn set_from_input(&mut self, input: &str) -> Result<bool> {
        let parsed = input
            .trim()
            .parse::<u32>()
            .map_err(|_| self.rejected(input.to_string()))?;
        self.set_value(parsed)
    }

    pub fn increase(&mut self) -> bool {
        self.set_value(self.value.saturating_add(1)).unwrap_or(false)
    }

    pub fn decrease(&mut self) -> bool {
        self.set_value(self.value.saturating_sub(1)).unwrap_or(false)
    }

    fn rejected(&self, value: String) -> PricingError {
        PricingError::InvalidQuantity {
            value,
            min: self.min,
            max: self.max,
        }
    }
}

impl QuantitySource for QuantityControl {
    fn current_quantity(&self) -> u32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let control = QuantityControl::default();
        assert_eq!(control.value(), 1);
        assert_eq!(control.bounds(), (1, 9));
    }

    #[test]
    fn test_rejects_out_of_range_and_keeps_value() {
        let mut control = QuantityControl::default();
        assert!(control.set_value(4).unwrap());
        assert!(control.set_value(0).is_err());
        assert!(control.set_value(10).is_err());
        assert_eq!(control.value(), 4);
    }

    #[test]
    fn test_parses_form_input() {
        let mut control = QuantityControl::default();
        assert!(control.set_from_input(" 3 ").unwrap());
        assert!(!control.set_from_input("3").unwrap());
        assert!(matches!(
            control.set_from_input("2.5"),
            Err(PricingError::InvalidQuantity { .. })
        ));
        assert!(control.set_from_input("-1").is_err());
        assert_eq!(control.value(), 3);
    }

    #[test]
    fn test_steps_stop_at_bounds() {
        let mut control = QuantityControl::new(2, 1, 3).unwrap();
        assert!(control.increase());
        assert!(!control.increase());
        assert_eq!(control.value(), 3);
        assert!(control.decrease());
        assert!(control.decrease());
        assert!(!control.decrease());
        assert_eq!(control.current_quantity(), 1);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(QuantityControl::new(1, 0, 9).is_err());
        assert!(QuantityControl::new(5, 6, 4).is_err());
        assert!(QuantityControl::new(12, 1, 9).is_err());
    }
}
