//! Shared customer collection and the actions that keep it in sync with the API.
//!
//! Views only read `customers`; every mutation goes through the actions below,
//! which run the request and apply the result when it resolves.

use super::api;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerId};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CustomerStore {
    pub customers: RwSignal<Vec<Customer>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Bumped by every local change; a list fetched under an older value is stale
    generation: RwSignal<u64>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self {
            customers: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    fn bump_generation(&self) -> u64 {
        let next = self.generation.get_untracked() + 1;
        self.generation.set(next);
        next
    }

    /// Mark a list refresh as started; the result must carry the returned tag
    pub fn begin_refresh(&self) -> u64 {
        self.loading.set(true);
        self.bump_generation()
    }

    /// Apply a fetched list unless a newer refresh or a local change superseded it
    pub fn apply_list(&self, issued: u64, list: Vec<Customer>) -> bool {
        self.loading.set(false);
        if self.generation.get_untracked() != issued {
            log::debug!("dropping stale customer list ({} rows)", list.len());
            return false;
        }
        self.customers.set(list);
        self.error.set(None);
        true
    }

    pub fn apply_deleted(&self, id: CustomerId) {
        self.customers.update(|list| {
            remove_customer(list, id);
        });
        self.bump_generation();
    }

    pub fn apply_saved(&self, customer: Customer) {
        self.customers.update(|list| upsert_customer(list, customer));
        self.bump_generation();
    }
}

pub fn use_customer_store() -> CustomerStore {
    use_context::<CustomerStore>().expect("CustomerStore not found in context")
}

/// Drop the record with `id`; returns whether anything was removed
pub fn remove_customer(list: &mut Vec<Customer>, id: CustomerId) -> bool {
    let before = list.len();
    list.retain(|c| c.id != id);
    list.len() != before
}

/// Replace the record with the same id, or append it
pub fn upsert_customer(list: &mut Vec<Customer>, customer: Customer) {
    match list.iter_mut().find(|c| c.id == customer.id) {
        Some(existing) => *existing = customer,
        None => list.push(customer),
    }
}

/// Refresh the whole collection from the server
pub fn view_customers(store: CustomerStore) {
    let issued = store.begin_refresh();
    spawn_local(async move {
        match api::list_customers().await {
            Ok(list) => {
                log::debug!("loaded {} customers", list.len());
                store.apply_list(issued, list);
            }
            Err(e) => {
                log::error!("failed to load customers: {e}");
                store.error.set(Some(e));
                store.loading.set(false);
            }
        }
    });
}

/// Delete on the server, then drop the record locally
pub fn delete_customer(store: CustomerStore, id: CustomerId) {
    spawn_local(async move {
        match api::delete_customer(id).await {
            Ok(()) => store.apply_deleted(id),
            Err(e) => {
                log::error!("failed to delete customer {id}: {e}");
                store.error.set(Some(e));
            }
        }
    });
}

/// Create or update, then pull the saved record back into the store
pub async fn save_customer(store: CustomerStore, dto: CustomerDto) -> Result<CustomerId, String> {
    let id = api::save_customer(&dto).await.inspect_err(|e| {
        log::error!("failed to save customer: {e}");
    })?;

    match api::get_customer(id).await {
        Ok(saved) => store.apply_saved(saved),
        Err(e) => {
            log::warn!("saved customer {id} but could not reload it: {e}");
            view_customers(store);
        }
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn customer(id: i64, first: &str) -> Customer {
        Customer {
            id: CustomerId(id),
            first_name: first.into(),
            last_name: "Test".into(),
            phone: "1".into(),
            email: String::new(),
            address: String::new(),
            gender: String::new(),
        }
    }

    #[test]
    fn test_remove_customer_drops_only_that_id() {
        let mut list = vec![customer(1, "A"), customer(2, "B"), customer(3, "C")];
        assert!(remove_customer(&mut list, CustomerId(2)));
        assert_eq!(
            list.iter().map(|c| c.id.value()).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(!remove_customer(&mut list, CustomerId(2)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_customer_handles_id_zero() {
        let mut list = vec![customer(0, "Zero"), customer(1, "One")];
        assert!(remove_customer(&mut list, CustomerId(0)));
        assert_eq!(list, vec![customer(1, "One")]);
    }

    #[test]
    fn test_upsert_replaces_in_place_or_appends() {
        let mut list = vec![customer(1, "A"), customer(2, "B")];
        upsert_customer(&mut list, customer(1, "Ann"));
        assert_eq!(list[0].first_name, "Ann");
        assert_eq!(list.len(), 2);

        upsert_customer(&mut list, customer(5, "E"));
        assert_eq!(list.len(), 3);
        assert_eq!(list[2].id, CustomerId(5));
    }

    #[test]
    fn test_refresh_issued_before_delete_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CustomerStore::new();
            store.customers.set(vec![customer(1, "A"), customer(2, "B")]);

            let issued = store.begin_refresh();
            store.apply_deleted(CustomerId(2));

            let stale = vec![customer(1, "A"), customer(2, "B")];
            assert!(!store.apply_list(issued, stale));
            assert_eq!(store.customers.get_untracked(), vec![customer(1, "A")]);
            assert!(!store.loading.get_untracked());
        });
    }

    #[test]
    fn test_refresh_issued_before_save_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CustomerStore::new();
            let issued = store.begin_refresh();
            store.apply_saved(customer(7, "New"));

            assert!(!store.apply_list(issued, Vec::new()));
            assert_eq!(store.customers.get_untracked(), vec![customer(7, "New")]);
        });
    }

    #[test]
    fn test_only_the_latest_refresh_applies() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CustomerStore::new();
            let first = store.begin_refresh();
            let second = store.begin_refresh();

            assert!(store.apply_list(second, vec![customer(1, "Fresh")]));
            assert!(!store.apply_list(first, vec![customer(1, "Old")]));
            assert_eq!(store.customers.get_untracked()[0].first_name, "Fresh");
        });
    }
}
