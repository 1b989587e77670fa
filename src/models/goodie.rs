//! Goodie (priced item) model.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// A named item with a price. Names need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GoodieFields")]
pub struct Goodie {
    name: String,
    price: f64,
}

#[derive(Deserialize)]
struct GoodieFields {
    name: String,
    price: f64,
}

impl TryFrom<GoodieFields> for Goodie {
    type Error = RecordError;

    fn try_from(fields: GoodieFields) -> Result<Self, Self::Error> {
        Goodie::new(fields.name, fields.price)
    }
}

impl Goodie {
    /// Creates a validated goodie. Rejects negative or non-finite prices.
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, RecordError> {
        if !price.is_finite() || price < 0.0 {
            return Err(RecordError::InvalidPrice(price));
        }
        Ok(Self {
            name: name.into(),
            price,
        })
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }
}
