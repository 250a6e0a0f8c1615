//! Product Aggregate
//!
//! The catalog owns products; the grid only ever reads this projection.

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::ProductId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default)]
    pub is_deleted: bool,
}

impl ProductSummary {
    pub fn new(id: impl Into<String>) -> Self { Self { id: ProductId::new(id), is_deleted: false } }
    pub fn is_archived(&self) -> bool { self.is_deleted }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let p: ProductSummary = serde_json::from_str(r#"{"_id":"p1","title":"Mug","isDeleted":true}"#).unwrap();
        assert_eq!(p.id.as_str(), "p1");
        assert!(p.is_archived());
    }

    #[test]
    fn test_is_deleted_defaults_false() {
        let p: ProductSummary = serde_json::from_str(r#"{"_id":"p2"}"#).unwrap();
        assert!(!p.is_archived());
        assert_eq!(p, ProductSummary::new("p2"));
    }
}
