//! Aggregates module
pub mod product;
pub mod order;

pub use product::ProductSummary;
pub use order::{BillingEntry, Invoice, LineItem, Order, PaymentMethod, ShipmentMethod, ShippingEntry, VariantSnapshot};
