//! Order Aggregate
//!
//! A denormalized multi-shop order document as persisted by checkout, and the
//! derived totals computed from it. Every accessor is a pure read; values that
//! checkout has not filled in yet degrade to zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::shops::ShopDirectory;
use crate::domain::summary::{OrderTotals, PaymentMethodSummary, ShopSummary};
use crate::domain::summation::{sum_field, sum_product, ShopScoped, Summation};
use crate::domain::value_objects::{Money, Quantity, ShopId};
use crate::{Result, StorefrontError};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub shipping: Vec<ShippingEntry>,
    #[serde(default)]
    pub billing: Vec<BillingEntry>,
    /// Effective tax rate as a fraction.
    #[serde(default, deserialize_with = "lenient")]
    pub tax: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub discount: Option<Decimal>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub product_id: Option<String>,
    pub shop_id: Option<ShopId>,
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub quantity: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub variants: Option<VariantSnapshot>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantSnapshot {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub price: Option<Decimal>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingEntry {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub shop_id: Option<ShopId>,
    #[serde(deserialize_with = "lenient")]
    pub shipment_method: Option<ShipmentMethod>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentMethod {
    pub name: Option<String>,
    pub carrier: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub rate: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub handling: Option<Decimal>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingEntry {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub shop_id: Option<ShopId>,
    #[serde(deserialize_with = "lenient")]
    pub invoice: Option<Invoice>,
    #[serde(deserialize_with = "lenient")]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    #[serde(deserialize_with = "lenient")]
    pub subtotal: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub shipping: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub taxes: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub discounts: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub total: Option<Decimal>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethod {
    pub stored_card: Option<String>,
    pub processor: Option<String>,
    pub mode: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub amount: Option<Decimal>,
    pub method: Option<String>,
}

/// Reads a leaf that checkout may have left malformed. A value of the wrong
/// shape becomes `None`, which the totals treat like a missing value.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ShopScoped for LineItem {
    fn shop_id(&self) -> Option<&ShopId> { self.shop_id.as_ref() }
}

impl ShopScoped for ShippingEntry {
    fn shop_id(&self) -> Option<&ShopId> { self.shop_id.as_ref() }
}

impl ShopScoped for BillingEntry {
    fn shop_id(&self) -> Option<&ShopId> { self.shop_id.as_ref() }
}

impl LineItem {
    fn quantity_value(&self) -> Option<Decimal> { self.quantity.map(Decimal::from) }
    fn price_value(&self) -> Option<Decimal> { self.variants.as_ref()?.price }
}

impl ShippingEntry {
    fn rate_value(&self) -> Option<Decimal> { self.shipment_method.as_ref().map(|m| m.rate.unwrap_or_default()) }
    fn handling_value(&self) -> Option<Decimal> { self.shipment_method.as_ref().map(|m| m.handling.unwrap_or_default()) }
}

impl BillingEntry {
    fn invoice_shipping(&self) -> Decimal { self.invoice.as_ref().and_then(|i| i.shipping).unwrap_or_default() }
    fn invoice_taxes(&self) -> Decimal { self.invoice.as_ref().and_then(|i| i.taxes).unwrap_or_default() }
}

impl Order {
    fn settle(&self, field: &'static str, summation: Summation) -> Decimal {
        if !summation.is_complete() {
            tracing::warn!(order_id = self.id.as_deref().unwrap_or("-"), field, "incomplete order data, defaulting to zero");
        }
        summation.or_zero()
    }

    /// Distinct item shop ids, in the order they first appear.
    pub fn shop_ids(&self) -> Vec<&ShopId> {
        let mut seen = HashSet::new();
        self.items.iter().filter_map(|i| i.shop_id.as_ref()).filter(|id| seen.insert(*id)).collect()
    }

    pub fn items_for_shop(&self, shop: &ShopId) -> Vec<&LineItem> {
        self.items.iter().filter(|i| i.shop_id.as_ref() == Some(shop)).collect()
    }

    fn count_for(&self, shop: Option<&ShopId>) -> Quantity {
        let total = self.settle("quantity", sum_field(&self.items, shop, LineItem::quantity_value));
        Quantity::new(total.to_u64().unwrap_or_default())
    }

    fn sub_total_for(&self, shop: Option<&ShopId>) -> Money {
        let total = self.settle("subtotal", sum_product(&self.items, shop, LineItem::quantity_value, LineItem::price_value));
        Money::new(total)
    }

    pub fn order_count(&self) -> Quantity { self.count_for(None) }

    pub fn order_shipping(&self) -> Money {
        let rate = self.settle("shipping.rate", sum_field(&self.shipping, None, ShippingEntry::rate_value));
        let handling = self.settle("shipping.handling", sum_field(&self.shipping, None, ShippingEntry::handling_value));
        Money::new(self.settle("shipping", rate.checked_add(handling).into()))
    }

    /// Shipping charged by each shop's invoice, unrounded.
    pub fn order_shipping_by_shop(&self) -> BTreeMap<ShopId, Decimal> {
        self.billing
            .iter()
            .filter_map(|b| Some((b.shop_id.clone()?, b.invoice_shipping())))
            .collect()
    }

    pub fn order_sub_total(&self) -> Money { self.sub_total_for(None) }

    /// One subtotal per distinct item shop id. Each entry filters the full item
    /// list, so items of a shop are merged wherever they sit in the order.
    pub fn order_sub_total_by_shop(&self) -> BTreeMap<ShopId, Money> {
        let mut totals = BTreeMap::new();
        for shop in self.shop_ids() {
            totals.entry(shop.clone()).or_insert_with(|| self.sub_total_for(Some(shop)));
        }
        totals
    }

    pub fn order_taxes(&self) -> Money {
        let taxes = self.order_sub_total().amount().checked_mul(self.tax.unwrap_or_default());
        Money::new(self.settle("taxes", taxes.into()))
    }

    pub fn order_taxes_by_shop(&self) -> BTreeMap<ShopId, Money> {
        self.billing
            .iter()
            .filter_map(|b| Some((b.shop_id.clone()?, Money::new(b.invoice_taxes()))))
            .collect()
    }

    pub fn order_discounts(&self) -> Money { Money::new(self.discount.unwrap_or_default()) }

    /// `max(0, subtotal - discount) + shipping + taxes`
    pub fn order_total(&self) -> Money {
        let total = self
            .order_sub_total()
            .amount()
            .checked_sub(self.order_discounts().amount())
            .map(|discounted| discounted.max(Decimal::ZERO))
            .and_then(|t| t.checked_add(self.order_shipping().amount()))
            .and_then(|t| t.checked_add(self.order_taxes().amount()));
        Money::new(self.settle("total", total.into()))
    }

    /// Per-shop breakdown sorted by shop name. Every referenced shop must exist
    /// in `shops`; one lookup is made per distinct shop id.
    pub fn shop_summary(&self, shops: &dyn ShopDirectory) -> Result<Vec<ShopSummary>> {
        let shipping = self.order_shipping_by_shop();
        let taxes = self.order_taxes_by_shop();
        let mut summaries = self
            .shop_ids()
            .into_iter()
            .map(|shop_id| -> Result<ShopSummary> {
                let shop = shops.find_shop(shop_id).ok_or_else(|| StorefrontError::ShopNotFound(shop_id.clone()))?;
                Ok(ShopSummary {
                    shop_id: shop_id.clone(),
                    name: shop.name,
                    sub_total: self.sub_total_for(Some(shop_id)),
                    taxes: taxes.get(shop_id).copied().unwrap_or_default(),
                    items: self.items_for_shop(shop_id).into_iter().cloned().collect(),
                    quantity_total: self.count_for(Some(shop_id)),
                    shipping: Money::new(shipping.get(shop_id).copied().unwrap_or_default()),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        summaries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.shop_id.cmp(&b.shop_id)));
        Ok(summaries)
    }

    pub fn payment_methods(&self) -> Vec<PaymentMethodSummary> {
        self.billing
            .iter()
            .filter_map(|b| b.payment_method.as_ref())
            .map(PaymentMethodSummary::from)
            .collect()
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals {
            order_id: self.id.clone(),
            count: self.order_count(),
            shipping: self.order_shipping(),
            sub_total: self.order_sub_total(),
            taxes: self.order_taxes(),
            discounts: self.order_discounts(),
            total: self.order_total(),
            shipping_by_shop: self.order_shipping_by_shop(),
            sub_total_by_shop: self.order_sub_total_by_shop(),
            taxes_by_shop: self.order_taxes_by_shop(),
        }
    }
}
