#![allow(dead_code)]

use std::sync::Arc;

use api::{
    app::build_app,
    state::AppState,
    store::{ChargeDocument, MemoryStore, PaymentDocument, Store, StoreError},
};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn app() -> Router {
    build_app(AppState {
        db: Arc::new(MemoryStore::new()),
    })
}

pub fn app_with(store: Arc<FailingStore>) -> Router {
    build_app(AppState { db: store })
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Database,
    Duplicate,
}

impl Failure {
    fn error(self) -> StoreError {
        match self {
            Failure::Database => StoreError::Database("connection reset by peer".into()),
            Failure::Duplicate => StoreError::Duplicate,
        }
    }
}

/// A `MemoryStore` whose reads or inserts can be made to fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    pub reads: Option<Failure>,
    pub payment_inserts: Option<Failure>,
    pub charge_inserts: Option<Failure>,
}

#[async_trait]
impl Store for FailingStore {
    async fn create_payment(
        &self,
        payment: PaymentDocument,
    ) -> Result<PaymentDocument, StoreError> {
        match self.payment_inserts {
            Some(failure) => Err(failure.error()),
            None => self.inner.create_payment(payment).await,
        }
    }

    async fn find_payment(&self, id: ObjectId) -> Result<Option<PaymentDocument>, StoreError> {
        match self.reads {
            Some(failure) => Err(failure.error()),
            None => self.inner.find_payment(id).await,
        }
    }

    async fn create_charge(&self, charge: ChargeDocument) -> Result<ChargeDocument, StoreError> {
        match self.charge_inserts {
            Some(failure) => Err(failure.error()),
            None => self.inner.create_charge(charge).await,
        }
    }

    async fn find_charge(&self, id: ObjectId) -> Result<Option<ChargeDocument>, StoreError> {
        match self.reads {
            Some(failure) => Err(failure.error()),
            None => self.inner.find_charge(id).await,
        }
    }

    async fn list_charges(&self) -> Result<Vec<ChargeDocument>, StoreError> {
        match self.reads {
            Some(failure) => Err(failure.error()),
            None => self.inner.list_charges().await,
        }
    }
}

/// Sends a request and decodes the JSON response body (`Null` when empty).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

pub async fn create_payment(app: &Router, kind: &str) -> Value {
    let (status, payment) = send(
        app,
        "POST",
        "/payment",
        Some(json!({
            "name": "Jane Doe",
            "type": kind,
            "iban": "GB82WEST12345698765432",
            "expiry": "12/30",
            "cc": "4111111111111111",
            "ccv": "123",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    payment
}

pub async fn create_charge(app: &Router, payment_id: &str, amount: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/charge",
        Some(json!({ "payment_id": payment_id, "amount": amount })),
    )
    .await
}
