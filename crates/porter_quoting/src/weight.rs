use std::{
    iter::Sum,
    ops::{Add, AddAssign, Mul},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Kilograms(f64);

impl Kilograms {
    pub const ZERO: Kilograms = Kilograms(0.0);

    pub fn new(value: f64) -> Self {
        Kilograms(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Eq for Kilograms {}

impl PartialOrd for Kilograms {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilograms {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl From<f64> for Kilograms {
    fn from(value: f64) -> Self {
        Kilograms::new(value)
    }
}

impl Add for Kilograms {
    type Output = Kilograms;

    fn add(self, other: Kilograms) -> Kilograms {
        Kilograms(self.0 + other.0)
    }
}

impl AddAssign for Kilograms {
    fn add_assign(&mut self, other: Kilograms) {
        self.0 += other.0;
    }
}

impl Mul<f64> for Kilograms {
    type Output = Kilograms;

    fn mul(self, quantity: f64) -> Kilograms {
        Kilograms(self.0 * quantity)
    }
}

impl Sum for Kilograms {
    fn sum<I: Iterator<Item = Kilograms>>(iter: I) -> Kilograms {
        iter.fold(Kilograms::ZERO, |acc, x| acc + x)
    }
}
