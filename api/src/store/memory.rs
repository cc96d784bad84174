//! In-process store.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{ChargeDocument, PaymentDocument, Store, StoreError};

/// Keeps documents in insertion order; ids stay unique like `_id` would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payments: RwLock<Vec<PaymentDocument>>,
    charges: RwLock<Vec<ChargeDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_payment(
        &self,
        payment: PaymentDocument,
    ) -> Result<PaymentDocument, StoreError> {
        let mut payments = self.payments.write().await;
        if payments.iter().any(|p| p.id == payment.id) {
            return Err(StoreError::Duplicate);
        }
        payments.push(payment.clone());
        Ok(payment)
    }

    async fn find_payment(&self, id: ObjectId) -> Result<Option<PaymentDocument>, StoreError> {
        let payments = self.payments.read().await;
        Ok(payments.iter().find(|p| p.id == id).cloned())
    }

    async fn create_charge(&self, charge: ChargeDocument) -> Result<ChargeDocument, StoreError> {
        let mut charges = self.charges.write().await;
        if charges.iter().any(|c| c.id == charge.id) {
            return Err(StoreError::Duplicate);
        }
        charges.push(charge.clone());
        Ok(charge)
    }

    async fn find_charge(&self, id: ObjectId) -> Result<Option<ChargeDocument>, StoreError> {
        let charges = self.charges.read().await;
        Ok(charges.iter().find(|c| c.id == id).cloned())
    }

    async fn list_charges(&self) -> Result<Vec<ChargeDocument>, StoreError> {
        Ok(self.charges.read().await.clone())
    }
}
