//! MongoDB-backed store, one collection per entity.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::{Client, Collection, Database};

use super::{ChargeDocument, PaymentDocument, Store, StoreError};

const PAYMENTS: &str = "payments";
const CHARGES: &str = "charges";

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Builds a client for `uri` and selects database `name`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first request rather than here.
    pub async fn connect(uri: &str, name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client.database(name)))
    }

    fn payments(&self) -> Collection<PaymentDocument> {
        self.database.collection(PAYMENTS)
    }

    fn charges(&self) -> Collection<ChargeDocument> {
        self.database.collection(CHARGES)
    }
}

impl From<MongoError> for StoreError {
    fn from(e: MongoError) -> Self {
        match e.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(w)) if w.code == DUPLICATE_KEY => {
                StoreError::Duplicate
            }
            _ => StoreError::Database(e.to_string()),
        }
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn create_payment(
        &self,
        payment: PaymentDocument,
    ) -> Result<PaymentDocument, StoreError> {
        let id = payment.id;
        self.payments().insert_one(&payment).await?;

        self.payments()
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| StoreError::Database(format!("payment {id} missing after insert")))
    }

    async fn find_payment(&self, id: ObjectId) -> Result<Option<PaymentDocument>, StoreError> {
        Ok(self.payments().find_one(doc! { "_id": id }).await?)
    }

    async fn create_charge(&self, charge: ChargeDocument) -> Result<ChargeDocument, StoreError> {
        let id = charge.id;
        self.charges().insert_one(&charge).await?;

        self.charges()
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| StoreError::Database(format!("charge {id} missing after insert")))
    }

    async fn find_charge(&self, id: ObjectId) -> Result<Option<ChargeDocument>, StoreError> {
        Ok(self.charges().find_one(doc! { "_id": id }).await?)
    }

    async fn list_charges(&self) -> Result<Vec<ChargeDocument>, StoreError> {
        let cursor = self.charges().find(doc! {}).await?;
        let charges: Vec<ChargeDocument> = cursor.try_collect().await?;
        Ok(charges)
    }
}
