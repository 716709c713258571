use std::fmt::Display;

use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::weight::Kilograms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum FulfillmentCenter {
    C1,
    C2,
    C3,
}

impl FulfillmentCenter {
    pub const ALL: [FulfillmentCenter; 3] = [
        FulfillmentCenter::C1,
        FulfillmentCenter::C2,
        FulfillmentCenter::C3,
    ];
}

impl Display for FulfillmentCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FulfillmentCenter::C1 => "C1",
                FulfillmentCenter::C2 => "C2",
                FulfillmentCenter::C3 => "C3",
            }
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProductListing {
    center: FulfillmentCenter,
    unit_weight: Kilograms,
}

impl ProductListing {
    pub fn new(center: FulfillmentCenter, unit_weight: Kilograms) -> Self {
        ProductListing {
            center,
            unit_weight,
        }
    }

    pub fn center(&self) -> FulfillmentCenter {
        self.center
    }

    pub fn unit_weight(&self) -> Kilograms {
        self.unit_weight
    }
}

/// Fixed product catalog. Every product belongs to exactly one fulfillment
/// center and carries one unit weight; the centers partition the catalog.
pub struct ProductCatalog {
    listings: FxHashMap<String, ProductListing>,
}

impl ProductCatalog {
    pub fn new(listings: impl IntoIterator<Item = (String, ProductListing)>) -> Self {
        ProductCatalog {
            listings: listings.into_iter().collect(),
        }
    }

    /// The catalog the business runs on.
    pub fn standard() -> Self {
        use FulfillmentCenter::*;

        let listings = [
            ("A", C1, 3.0),
            ("B", C1, 2.0),
            ("C", C1, 8.0),
            ("D", C2, 12.0),
            ("E", C2, 25.0),
            ("F", C2, 15.0),
            ("G", C3, 0.5),
            ("H", C3, 1.0),
            ("I", C3, 2.0),
        ];

        ProductCatalog::new(listings.into_iter().map(|(code, center, weight)| {
            (
                code.to_owned(),
                ProductListing::new(center, Kilograms::new(weight)),
            )
        }))
    }

    pub fn listing(&self, product: &str) -> Option<&ProductListing> {
        self.listings.get(product)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
