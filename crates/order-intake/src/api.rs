//! API endpoints and wire types

use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiJson;

// ============================================================================
// Process - Echo endpoint
// ============================================================================

/// Body of `POST /process`, echoed back verbatim.
///
/// `message` is optional; an absent field round-trips as
/// `{"message": null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub message: Option<String>,
}

/// Echo a process request back to the caller.
///
/// The log line is diagnostic output only, not part of the contract.
pub async fn process(ApiJson(request): ApiJson<ProcessRequest>) -> Json<ProcessRequest> {
    tracing::info!(
        request_id = %Uuid::new_v4(),
        message = ?request.message,
        "Received process request"
    );

    Json(request)
}

// ============================================================================
// Order - Intake payload (wire format keys are mixed camelCase/snake_case)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: Address,
    pub billing_address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: String,
    pub name: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub method: String,
    pub token: String,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub customer: Customer,
    pub items: Vec<Item>,
    pub shipping_method: ShippingMethod,
    pub payment: Payment,
    pub order_total: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub notes: Option<String>,
}

/// Figures derived from an order for logging and inspection
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub customer_name: String,
    pub item_count: usize,
    pub items_subtotal: f64,
}

impl Order {
    /// Summarize the order: customer display name, item count, and the
    /// subtotal of all line items (price x quantity, before shipping,
    /// tax, and discounts).
    pub fn summary(&self) -> OrderSummary {
        let items_subtotal = self
            .items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();

        OrderSummary {
            customer_name: format!(
                "{} {}",
                self.customer.first_name, self.customer.last_name
            ),
            item_count: self.items.len(),
            items_subtotal,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
    pub order: Order,
}

/// Accept an order and acknowledge it.
///
/// The order is not persisted; downstream processing picks it up from
/// the log stream.
pub async fn ingest(ApiJson(order): ApiJson<Order>) -> Json<IngestResponse> {
    let summary = order.summary();
    tracing::info!(
        request_id = %Uuid::new_v4(),
        customer = %summary.customer_name,
        items = summary.item_count,
        order_total = %format!("{:.2}", order.order_total),
        "Received order"
    );

    Json(IngestResponse {
        status: "success",
        order,
    })
}

// ============================================================================
// System
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
