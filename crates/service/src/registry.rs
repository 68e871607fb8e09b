use std::collections::HashMap;

use async_trait::async_trait;
use models::customer::Customer;

use crate::errors::ServiceError;

/// Storage contract for the customer registry.
///
/// The shipped implementation is in-memory; a durable backend only has to
/// provide the same get/list/mutate operations. Mutating operations return a
/// snapshot of the full mapping because the API responds with it.
#[async_trait]
pub trait CustomerRegistry: Send + Sync {
    async fn get(&self, id: u8) -> Option<Customer>;
    async fn list(&self) -> HashMap<u8, Customer>;
    async fn create(&self, customer: Customer) -> Result<HashMap<u8, Customer>, ServiceError>;
    async fn replace(
        &self,
        path_id: u8,
        customer: Customer,
    ) -> Result<HashMap<u8, Customer>, ServiceError>;
    async fn apply_batch(
        &self,
        customers: Vec<Customer>,
    ) -> Result<HashMap<u8, Customer>, ServiceError>;
    async fn remove(&self, id: u8) -> Result<HashMap<u8, Customer>, ServiceError>;
}
