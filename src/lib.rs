//! OpenSASE Storefront
//!
//! Order totals for multi-vendor storefront orders and the admin catalog's
//! product grid control.
//!
//! ## Features
//! - Subtotal, shipping, taxes, discounts and totals from order documents
//! - Per-shop breakdowns and payment method summaries
//! - Product grid control rendering
//! - HTTP surface over the above

use thiserror::Error;

pub mod config;
pub mod domain;
pub mod http;
pub mod ui;

pub use domain::aggregates::{Order, ProductSummary};
pub use domain::shops::{InMemoryShopDirectory, Shop, ShopDirectory};
pub use domain::summary::{OrderTotals, PaymentMethodSummary, ShopSummary};
pub use domain::value_objects::{Money, ProductId, Quantity, ShopId};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Shop not found: {0}")]
    ShopNotFound(ShopId),

    #[error("Invalid shop record: {0}")]
    InvalidShop(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
