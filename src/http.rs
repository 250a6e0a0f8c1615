//! HTTP surface: order totals and grid control rendering over JSON.

use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, routing::{get, post}, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::domain::aggregates::{Order, ProductSummary};
use crate::domain::shops::ShopDirectory;
use crate::domain::summary::{OrderTotals, PaymentMethodSummary, ShopSummary};
use crate::ui::grid_control;

#[derive(Clone)]
pub struct AppState { pub shops: Arc<dyn ShopDirectory + Send + Sync> }

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "opensase-storefront"})) }))
        .route("/api/v1/orders/totals", post(order_totals))
        .route("/api/v1/orders/shop-summary", post(shop_summary))
        .route("/api/v1/orders/payment-methods", post(payment_methods))
        .route("/api/v1/catalog/grid-control", post(render_grid_control))
        .layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()).with_state(state)
}

async fn order_totals(Json(order): Json<Order>) -> Json<OrderTotals> { Json(order.totals()) }

async fn shop_summary(State(s): State<AppState>, Json(order): Json<Order>) -> Result<Json<Vec<ShopSummary>>, (StatusCode, String)> {
    order.shop_summary(s.shops.as_ref()).map(Json).map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
}

async fn payment_methods(Json(order): Json<Order>) -> Json<Vec<PaymentMethodSummary>> { Json(order.payment_methods()) }

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridControlRequest {
    pub product: ProductSummary,
    #[serde(default)] pub checked: bool,
    #[serde(default)] pub has_changes: bool,
    #[serde(default)] pub has_create_product_permission: bool,
}

async fn render_grid_control(Json(r): Json<GridControlRequest>) -> Response {
    match grid_control::render(&r.product, || r.checked, || r.has_changes, || r.has_create_product_permission) {
        Some(fragment) => Json(fragment).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
