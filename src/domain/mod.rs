//! Storefront domain: order documents, their derived totals, and shop lookup
pub mod aggregates;
pub mod shops;
pub mod summary;
pub mod summation;
pub mod value_objects;
