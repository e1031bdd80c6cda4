//! In-memory entity repository.
//!
//! Collections keep insertion order; `save` is an upsert that replaces in
//! place so list order survives edits. A real backend can later be swapped
//! in behind the same list/get/save contract.

use crate::models::branch::Branch;
use crate::models::discount::Discount;
use crate::models::profile::MerchantProfile;

/// Anything stored in a [`Collection`] — identified by a string id.
pub trait Entity: Clone {
    fn id(&self) -> &str;
}

impl Entity for Discount {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Branch {
    fn id(&self) -> &str {
        &self.id
    }
}

/// An ordered in-memory collection of one entity kind.
pub struct Collection<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Snapshot of the collection in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    /// Upsert: replace the entity with the same id in place, otherwise
    /// append. One atomic write from any reader's perspective.
    pub fn save(&mut self, entity: T) -> T {
        match self.items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => *slot = entity.clone(),
            None => self.items.push(entity.clone()),
        }
        entity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Canonical application data: discounts, branches and the merchant profile.
pub struct Repository {
    pub discounts: Collection<Discount>,
    pub branches: Collection<Branch>,
    profile: MerchantProfile,
}

impl Repository {
    pub fn new(
        discounts: Vec<Discount>,
        branches: Vec<Branch>,
        profile: MerchantProfile,
    ) -> Self {
        Self {
            discounts: Collection::new(discounts),
            branches: Collection::new(branches),
            profile,
        }
    }

    pub fn profile(&self) -> MerchantProfile {
        self.profile.clone()
    }

    pub fn save_profile(&mut self, profile: MerchantProfile) -> MerchantProfile {
        self.profile = profile;
        self.profile.clone()
    }

    /// Resolve branch ids to branches. Ids with no matching branch are
    /// silently excluded rather than treated as an error.
    pub fn resolve_branches(&self, ids: &[String]) -> Vec<Branch> {
        ids.iter()
            .filter_map(|id| self.branches.get(id))
            .collect()
    }
}

/// Fresh id for a newly created entity.
pub fn next_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn save_appends_new_and_replaces_existing_in_place() {
        let data = seed::seed_data();
        let mut repo = Repository::new(data.discounts, data.branches, data.profile);

        let order_before: Vec<String> =
            repo.branches.list().iter().map(|b| b.id.clone()).collect();

        let mut first = repo.branches.get(&order_before[0]).unwrap();
        first.name = "Yenilənmiş Filial".to_string();
        repo.branches.save(first);

        let order_after: Vec<String> =
            repo.branches.list().iter().map(|b| b.id.clone()).collect();
        assert_eq!(order_before, order_after);
        assert_eq!(
            repo.branches.get(&order_before[0]).unwrap().name,
            "Yenilənmiş Filial"
        );
    }

    #[test]
    fn get_miss_is_none_not_an_error() {
        let data = seed::seed_data();
        let repo = Repository::new(data.discounts, data.branches, data.profile);
        assert!(repo.discounts.get("no-such-id").is_none());
    }

    #[test]
    fn dangling_branch_ids_are_silently_excluded() {
        let data = seed::seed_data();
        let repo = Repository::new(data.discounts, data.branches, data.profile);

        let known = repo.branches.list().first().unwrap().id.clone();
        let ids = vec![known.clone(), "deleted-branch".to_string()];
        let resolved = repo.resolve_branches(&ids);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, known);
    }
}
