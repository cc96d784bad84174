use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::ApiError,
    state::AppState,
    store::{ChargeDocument, StoreError},
    surcharge::{self, PaymentType},
};

#[derive(Debug, Deserialize)]
pub struct CreateChargeRequest {
    payment_id: String,
    /// Decimal as text, before surcharge.
    amount: String,
}

#[derive(Debug, Serialize)]
pub struct ChargeResponse {
    pub id: String,
    pub payment_id: String,
    pub amount: String,
}

impl From<ChargeDocument> for ChargeResponse {
    fn from(doc: ChargeDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            payment_id: doc.payment_id.to_hex(),
            amount: doc.amount,
        }
    }
}

/// What `GET /charge/{id}` exposes of a charge.
#[derive(Debug, Serialize)]
pub struct ChargeSummary {
    pub payment_id: String,
    pub amount: String,
}

impl From<ChargeDocument> for ChargeSummary {
    fn from(doc: ChargeDocument) -> Self {
        Self {
            payment_id: doc.payment_id.to_hex(),
            amount: doc.amount,
        }
    }
}

pub async fn list_charges(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChargeResponse>>, ApiError> {
    let charges = state
        .db
        .list_charges()
        .await
        .map_err(|e| ApiError::database("list charges", e.to_string()))?;

    Ok(Json(charges.into_iter().map(ChargeResponse::from).collect()))
}

pub async fn get_charge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChargeSummary>, ApiError> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId)?;

    let charge = state
        .db
        .find_charge(id)
        .await
        .map_err(|e| ApiError::database("find charge", e.to_string()))?
        .ok_or(ApiError::ChargeNotFound)?;

    Ok(Json(charge.into()))
}

pub async fn create_charge(
    State(state): State<AppState>,
    payload: Result<Json<CreateChargeRequest>, JsonRejection>,
) -> Result<Json<ChargeResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "rejected charge body");
        ApiError::InvalidParameters
    })?;

    let payment_id = ObjectId::parse_str(&req.payment_id).map_err(|_| {
        warn!(payment_id = %req.payment_id, "charge references a malformed payment id");
        ApiError::InvalidParameters
    })?;
    let amount: Decimal = req.amount.parse().map_err(|_| {
        warn!(amount = %req.amount, "charge amount is not a decimal");
        ApiError::InvalidParameters
    })?;

    let payment = state
        .db
        .find_payment(payment_id)
        .await
        .map_err(|e| ApiError::database("find payment", e.to_string()))?
        .ok_or(ApiError::PaymentNotFound)?;

    let Some(payment_type) = PaymentType::parse(&payment.kind) else {
        warn!(%payment_id, kind = %payment.kind, "payment type cannot be charged");
        return Err(ApiError::UnsupportedPaymentType);
    };

    let total = surcharge::apply(amount, payment_type).ok_or_else(|| {
        warn!(amount = %req.amount, kind = %payment.kind, "surcharged amount overflows");
        ApiError::InvalidParameters
    })?;

    let charge = ChargeDocument {
        id: ObjectId::new(),
        payment_id,
        amount: surcharge::format_amount(total),
    };

    let stored = state
        .db
        .create_charge(charge)
        .await
        .map_err(|e| match e {
            StoreError::Duplicate => ApiError::DuplicateCharge,
            StoreError::Database(detail) => ApiError::database("insert charge", detail),
        })?;

    info!(charge_id = %stored.id, %payment_id, amount = %stored.amount, "charge created");

    Ok(Json(stored.into()))
}
