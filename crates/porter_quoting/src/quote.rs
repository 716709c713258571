use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    catalog::ProductCatalog,
    error::QuoteError,
    order::Order,
    rate::RateSchedule,
    route::{CenterSet, DistanceTable},
    weight::Kilograms,
};

/// The cost quote returned for a valid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DeliveryQuote {
    pub minimum_cost: u64,
}

/// The quoting pipeline over the fixed catalog, distance, and rate tables.
/// Pure and read-only after construction, so a single instance is shared
/// across all request handlers.
pub struct QuoteCalculator {
    catalog: ProductCatalog,
    distances: DistanceTable,
    rates: RateSchedule,
}

impl QuoteCalculator {
    pub fn new(catalog: ProductCatalog, distances: DistanceTable, rates: RateSchedule) -> Self {
        QuoteCalculator {
            catalog,
            distances,
            rates,
        }
    }

    pub fn standard() -> Self {
        QuoteCalculator::new(
            ProductCatalog::standard(),
            DistanceTable::standard(),
            RateSchedule::standard(),
        )
    }

    #[instrument(skip(self, order))]
    pub fn quote(&self, order: &Order) -> Result<DeliveryQuote, QuoteError> {
        order.validate()?;

        let centers = self.required_centers(order)?;
        let weight = self.total_weight(order)?;

        let distance = self.distances.round_trip(centers);
        let rate = self.rates.rate_for(weight);

        debug!(
            ?centers,
            weight = weight.value(),
            distance,
            rate,
            "order resolved"
        );

        // Fractional remainders are discarded, not rounded.
        let minimum_cost = (distance * f64::from(rate)) as u64;

        Ok(DeliveryQuote { minimum_cost })
    }

    /// Centers holding at least one ordered product with strictly positive
    /// quantity. Every product code in the order must resolve against the
    /// catalog, including zero-quantity lines.
    pub fn required_centers(&self, order: &Order) -> Result<CenterSet, QuoteError> {
        let mut centers = CenterSet::EMPTY;

        for (product, quantity) in order.items() {
            let listing = self
                .catalog
                .listing(product)
                .ok_or_else(|| QuoteError::UnknownProduct(product.to_owned()))?;

            if quantity > 0.0 {
                centers.insert(listing.center());
            }
        }

        Ok(centers)
    }

    pub fn total_weight(&self, order: &Order) -> Result<Kilograms, QuoteError> {
        let mut total = Kilograms::ZERO;

        for (product, quantity) in order.items() {
            let listing = self
                .catalog
                .listing(product)
                .ok_or_else(|| QuoteError::UnknownProduct(product.to_owned()))?;

            if quantity > 0.0 {
                total += listing.unit_weight() * quantity;
            }
        }

        Ok(total)
    }
}
