//! Shop lookup capability

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use validator::Validate;

use crate::domain::value_objects::ShopId;
use crate::Result;

/// Shop record as exposed by the shops collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Shop {
    #[serde(rename = "_id")]
    pub id: ShopId,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Point lookup of shops by id.
pub trait ShopDirectory {
    fn find_shop(&self, id: &ShopId) -> Option<Shop>;
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryShopDirectory {
    shops: HashMap<ShopId, Shop>,
}

impl InMemoryShopDirectory {
    pub fn new(shops: Vec<Shop>) -> Result<Self> {
        let mut directory = Self::default();
        for shop in shops {
            shop.validate()?;
            directory.shops.insert(shop.id.clone(), shop);
        }
        Ok(directory)
    }

    /// Loads a JSON array of shops.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let shops: Vec<Shop> = serde_json::from_str(&raw)?;
        tracing::info!(count = shops.len(), path = %path.display(), "loaded shops");
        Self::new(shops)
    }

    pub fn len(&self) -> usize { self.shops.len() }
    pub fn is_empty(&self) -> bool { self.shops.is_empty() }
}

impl ShopDirectory for InMemoryShopDirectory {
    fn find_shop(&self, id: &ShopId) -> Option<Shop> {
        tracing::debug!(shop_id = %id, "shop lookup");
        self.shops.get(id).cloned()
    }
}
