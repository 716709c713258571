use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::QuoteError;

/// A customer order: product code mapped to requested quantity. Quantities
/// may be fractional; zero means the line contributes nothing.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Order(FxHashMap<String, f64>);

impl Order {
    pub fn items(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(product, &quantity)| (product.as_str(), quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shape checks that do not need the catalog. An empty order or a
    /// negative quantity is rejected here, before any lookup runs.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.0.is_empty() {
            return Err(QuoteError::EmptyOrder);
        }

        for (product, &quantity) in &self.0 {
            if quantity < 0.0 {
                return Err(QuoteError::NegativeQuantity {
                    product: product.clone(),
                    quantity,
                });
            }
        }

        Ok(())
    }
}

impl FromIterator<(String, f64)> for Order {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Order(iter.into_iter().collect())
    }
}
