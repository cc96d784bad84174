//! Persistence for payments and charges.
//!
//! Handlers only see the [`Store`] trait; `main` decides whether it is backed
//! by MongoDB or by the in-process [`MemoryStore`].

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A payment method as stored in the `payments` collection.
///
/// Fields missing from an older document read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    /// Payment type as submitted; `cc` and `dd` are the ones charges accept.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub iban: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cc: String,
    #[serde(default)]
    pub ccv: String,
}

/// A charge as stored in the `charges` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub payment_id: ObjectId,
    /// Surcharged amount, always two decimals.
    pub amount: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key")]
    Duplicate,

    #[error("database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a payment and returns it as read back from storage.
    async fn create_payment(&self, payment: PaymentDocument)
    -> Result<PaymentDocument, StoreError>;

    async fn find_payment(&self, id: ObjectId) -> Result<Option<PaymentDocument>, StoreError>;

    /// Inserts a charge and returns it as read back from storage.
    async fn create_charge(&self, charge: ChargeDocument) -> Result<ChargeDocument, StoreError>;

    async fn find_charge(&self, id: ObjectId) -> Result<Option<ChargeDocument>, StoreError>;

    /// All charges in storage order.
    async fn list_charges(&self) -> Result<Vec<ChargeDocument>, StoreError>;
}
