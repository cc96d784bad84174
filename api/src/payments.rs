use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::ApiError,
    state::AppState,
    store::{PaymentDocument, StoreError},
};

/// Missing fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePaymentRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub iban: String,
    pub expiry: String,
    pub cc: String,
    pub ccv: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub iban: String,
    pub expiry: String,
    pub cc: String,
    pub ccv: String,
}

impl From<PaymentDocument> for PaymentResponse {
    fn from(doc: PaymentDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            kind: doc.kind,
            iban: doc.iban,
            expiry: doc.expiry,
            cc: doc.cc,
            ccv: doc.ccv,
        }
    }
}

pub async fn create_payment(
    State(state): State<AppState>,
    payload: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "rejected payment body");
        ApiError::InvalidParameters
    })?;

    let payment = PaymentDocument {
        id: ObjectId::new(),
        name: req.name,
        kind: req.kind,
        iban: req.iban,
        expiry: req.expiry,
        cc: req.cc,
        ccv: req.ccv,
    };

    let stored = state
        .db
        .create_payment(payment)
        .await
        .map_err(|e| match e {
            StoreError::Duplicate => ApiError::DuplicatePayment,
            StoreError::Database(detail) => ApiError::database("insert payment", detail),
        })?;

    info!(payment_id = %stored.id, kind = %stored.kind, "payment created");

    Ok(Json(stored.into()))
}
