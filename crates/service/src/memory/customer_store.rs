use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::info;

use models::customer::{self, Customer};

use crate::errors::ServiceError;
use crate::registry::CustomerRegistry;

/// In-memory customer registry guarded by a tokio `RwLock`.
///
/// Reads clone snapshots out; every mutation happens under the write lock so
/// concurrent requests serialize instead of racing. The lock is never held
/// across an await outside this type. Nothing is persisted.
#[derive(Clone)]
pub struct CustomerStore {
    inner: Arc<RwLock<HashMap<u8, Customer>>>,
}

impl CustomerStore {
    /// Empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(HashMap::new())) })
    }

    /// Registry pre-populated with the three canonical seed records.
    pub fn with_seed_records() -> Arc<Self> {
        let map = customer::seed_customers()
            .into_iter()
            .map(|c| (c.id, c))
            .collect::<HashMap<_, _>>();
        Arc::new(Self { inner: Arc::new(RwLock::new(map)) })
    }

    /// Get one record by id.
    pub async fn get(&self, id: u8) -> Option<Customer> {
        let map = self.inner.read().await;
        map.get(&id).cloned()
    }

    /// Snapshot of the whole mapping.
    pub async fn list(&self) -> HashMap<u8, Customer> {
        let map = self.inner.read().await;
        map.clone()
    }

    /// Insert a new record; refuses to overwrite an existing id.
    pub async fn create(&self, new_customer: Customer) -> Result<HashMap<u8, Customer>, ServiceError> {
        let mut map = self.inner.write().await;
        if map.contains_key(&new_customer.id) {
            return Err(ServiceError::Conflict(format!(
                "customer with id {} already exists",
                new_customer.id
            )));
        }
        let id = new_customer.id;
        map.insert(id, new_customer);
        info!(id, total = map.len(), "customer created");
        Ok(map.clone())
    }

    /// Replace a record. The path id only has to exist; the record is stored
    /// under the id carried in the body, which may differ from the path id
    /// (the original entry under the path id is left alone in that case).
    pub async fn replace(
        &self,
        path_id: u8,
        updated: Customer,
    ) -> Result<HashMap<u8, Customer>, ServiceError> {
        customer::validate_required(&updated)?;
        let mut map = self.inner.write().await;
        if !map.contains_key(&path_id) {
            return Err(ServiceError::not_found("customer"));
        }
        let id = updated.id;
        map.insert(id, updated);
        info!(path_id, id, "customer replaced");
        Ok(map.clone())
    }

    /// Apply updates in array order. Each record whose id exists overwrites it
    /// in place; the first missing id aborts the walk. Records applied before
    /// the failing entry stay applied; there is no rollback.
    pub async fn apply_batch(
        &self,
        updates: Vec<Customer>,
    ) -> Result<HashMap<u8, Customer>, ServiceError> {
        let mut map = self.inner.write().await;
        for updated in updates {
            if !map.contains_key(&updated.id) {
                return Err(ServiceError::not_found("customer"));
            }
            map.insert(updated.id, updated);
        }
        info!(total = map.len(), "customer batch applied");
        Ok(map.clone())
    }

    /// Remove a record; errors when the id is absent.
    pub async fn remove(&self, id: u8) -> Result<HashMap<u8, Customer>, ServiceError> {
        let mut map = self.inner.write().await;
        if map.remove(&id).is_none() {
            return Err(ServiceError::not_found("customer"));
        }
        info!(id, total = map.len(), "customer deleted");
        Ok(map.clone())
    }
}

#[async_trait::async_trait]
impl CustomerRegistry for CustomerStore {
    async fn get(&self, id: u8) -> Option<Customer> {
        CustomerStore::get(self, id).await
    }
    async fn list(&self) -> HashMap<u8, Customer> {
        CustomerStore::list(self).await
    }
    async fn create(&self, new_customer: Customer) -> Result<HashMap<u8, Customer>, ServiceError> {
        CustomerStore::create(self, new_customer).await
    }
    async fn replace(
        &self,
        path_id: u8,
        updated: Customer,
    ) -> Result<HashMap<u8, Customer>, ServiceError> {
        CustomerStore::replace(self, path_id, updated).await
    }
    async fn apply_batch(
        &self,
        updates: Vec<Customer>,
    ) -> Result<HashMap<u8, Customer>, ServiceError> {
        CustomerStore::apply_batch(self, updates).await
    }
    async fn remove(&self, id: u8) -> Result<HashMap<u8, Customer>, ServiceError> {
        CustomerStore::remove(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record(id: u8, name: &str) -> Customer {
        Customer {
            id,
            name: name.into(),
            role: "Prospect".into(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0000".into(),
            contacted: false,
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = CustomerStore::new();
        assert!(store.list().await.is_empty());
        assert!(store.get(1).await.is_none());
    }

    #[tokio::test]
    async fn seeded_store_reads_back_every_record() {
        let store = CustomerStore::with_seed_records();
        let all = store.list().await;
        assert_eq!(all.len(), 3);
        for id in 1u8..=3 {
            let found = store.get(id).await.expect("seed record present");
            assert_eq!(found, all[&id]);
        }
        assert!(store.get(4).await.is_none());
    }

    #[tokio::test]
    async fn create_adds_exactly_one_record() {
        let store = CustomerStore::with_seed_records();
        let map = store.create(full_record(4, "Ada")).await.expect("create");
        assert_eq!(map.len(), 4);
        assert_eq!(store.get(4).await.expect("stored").name, "Ada");
    }

    #[tokio::test]
    async fn create_conflict_leaves_registry_unchanged() {
        let store = CustomerStore::with_seed_records();
        let err = store
            .create(full_record(2, "Impostor"))
            .await
            .expect_err("id 2 is taken");
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(store.get(2).await.expect("still there").name, "Peter Pan");
        assert_eq!(store.list().await.len(), 3);
    }

    #[tokio::test]
    async fn replace_rejects_empty_required_fields() {
        let store = CustomerStore::with_seed_records();
        let mut incomplete = full_record(1, "Renamed");
        incomplete.email = String::new();
        let err = store.replace(1, incomplete).await.expect_err("email empty");
        assert!(matches!(err, ServiceError::Model(_)));
        assert_eq!(store.get(1).await.expect("unchanged").name, "John Doe");
    }

    #[tokio::test]
    async fn replace_requires_the_path_id_to_exist() {
        let store = CustomerStore::with_seed_records();
        let err = store
            .replace(77, full_record(77, "Nobody"))
            .await
            .expect_err("path id absent");
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(store.get(77).await.is_none());
    }

    #[tokio::test]
    async fn replace_stores_under_the_body_id() {
        let store = CustomerStore::with_seed_records();
        // path id 1 exists, but the body carries id 9
        let map = store.replace(1, full_record(9, "Niner")).await.expect("replace");
        assert_eq!(map.len(), 4);
        assert_eq!(store.get(9).await.expect("new id").name, "Niner");
        assert_eq!(store.get(1).await.expect("untouched").name, "John Doe");
    }

    #[tokio::test]
    async fn batch_applies_in_order_and_stops_at_first_missing_id() {
        let store = CustomerStore::with_seed_records();
        let updates = vec![
            full_record(1, "First"),
            full_record(2, "Second"),
            full_record(42, "Ghost"),
            full_record(3, "Never"),
        ];
        let err = store.apply_batch(updates).await.expect_err("42 is absent");
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(store.get(1).await.expect("applied").name, "First");
        assert_eq!(store.get(2).await.expect("applied").name, "Second");
        assert_eq!(store.get(3).await.expect("untouched").name, "Mary Jane");
        assert!(store.get(42).await.is_none());
    }

    #[tokio::test]
    async fn batch_success_returns_the_full_mapping() {
        let store = CustomerStore::with_seed_records();
        let map = store
            .apply_batch(vec![full_record(3, "Followed Up")])
            .await
            .expect("batch");
        assert_eq!(map.len(), 3);
        assert_eq!(map[&3].name, "Followed Up");

        let unchanged = store.apply_batch(Vec::new()).await.expect("empty batch");
        assert_eq!(unchanged.len(), 3);
    }

    #[tokio::test]
    async fn remove_then_get_returns_none() {
        let store = CustomerStore::with_seed_records();
        let map = store.remove(3).await.expect("remove");
        assert_eq!(map.len(), 2);
        assert!(store.get(3).await.is_none());

        let err = store.remove(3).await.expect_err("already gone");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
