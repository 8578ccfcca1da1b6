use crate::core::{CartItem, CartSink};
use crate::utils::error::{PricingError, Result};
use std::io::Write;

/// Writes every added item as one JSON line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CartSink for JsonLinesSink<W> {
    fn add_to_cart(&mut self, item: CartItem) -> Result<()> {
        let line = serde_json::to_string(&item)?;
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(|e| PricingError::CartDispatch {
                message: format!("writing item '{}': {}", item.product_id, e),
            })?;
        self.written += 1;
        Ok(())
    }
}
