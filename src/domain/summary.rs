//! Read models derived from an order document

use serde::Serialize;
use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::aggregates::order::{LineItem, PaymentMethod};
use crate::domain::value_objects::{Money, Quantity, ShopId};

/// Snapshot of every order-level total.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub order_id: Option<String>,
    pub count: Quantity,
    pub shipping: Money,
    pub sub_total: Money,
    pub taxes: Money,
    pub discounts: Money,
    pub total: Money,
    pub shipping_by_shop: BTreeMap<ShopId, Decimal>,
    pub sub_total_by_shop: BTreeMap<ShopId, Money>,
    pub taxes_by_shop: BTreeMap<ShopId, Money>,
}

/// One shop's slice of a multi-vendor order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSummary {
    pub shop_id: ShopId,
    pub name: String,
    pub sub_total: Money,
    pub taxes: Money,
    pub items: Vec<LineItem>,
    pub quantity_total: Quantity,
    pub shipping: Money,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodSummary {
    pub stored_card: Option<String>,
    pub processor: Option<String>,
    pub mode: Option<String>,
    pub transaction_id: Option<String>,
    pub amount: Money,
    pub method: Option<String>,
}

impl From<&PaymentMethod> for PaymentMethodSummary {
    fn from(p: &PaymentMethod) -> Self {
        Self {
            stored_card: p.stored_card.clone(),
            processor: p.processor.clone(),
            mode: p.mode.clone(),
            transaction_id: p.transaction_id.clone(),
            amount: Money::new(p.amount.unwrap_or_default()),
            method: p.method.clone(),
        }
    }
}
