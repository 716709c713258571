use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    #[error("negative quantity for product {product}: {quantity}")]
    NegativeQuantity { product: String, quantity: f64 },

    #[error("order contains no products")]
    EmptyOrder,
}
