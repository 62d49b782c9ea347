//! Property-based tests for merging fetched batches
//!
//! Uses proptest to generate batches with overlapping identifiers and checks
//! the collection invariants.

use proptest::prelude::*;
use std::collections::HashSet;

use userdesk::egui_app::store::MergedCollection;
use userdesk::shared::{UserFields, UserId, UserRecord};

fn user_id() -> impl Strategy<Value = UserId> {
    prop_oneof![
        (0i64..20).prop_map(UserId::Int),
        "[a-c]{1,2}".prop_map(UserId::Text),
    ]
}

fn batch() -> impl Strategy<Value = Vec<UserRecord>> {
    prop::collection::vec((user_id(), "[A-Za-z ]{3,12}"), 0..15).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, name)| {
                UserRecord::writable(id, UserFields::new(name, "x@example.com", "5551234567"))
            })
            .collect()
    })
}

fn ids(collection: &MergedCollection) -> Vec<UserId> {
    collection.iter().map(|user| user.id.clone()).collect()
}

proptest! {
    #[test]
    fn test_identifiers_stay_unique(first in batch(), second in batch()) {
        let mut collection = MergedCollection::new();
        collection.merge(first);
        collection.merge(second);

        let ids = ids(&collection);
        let unique: HashSet<_> = ids.iter().cloned().collect();
        prop_assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_merge_is_idempotent(first in batch(), second in batch()) {
        let mut collection = MergedCollection::new();
        collection.merge(first);
        collection.merge(second.clone());
        let snapshot = collection.clone();

        prop_assert_eq!(collection.merge(second), 0);
        prop_assert_eq!(collection, snapshot);
    }

    #[test]
    fn test_membership_ignores_arrival_order(first in batch(), second in batch()) {
        let mut forward = MergedCollection::new();
        forward.merge(first.clone());
        forward.merge(second.clone());

        let mut backward = MergedCollection::new();
        backward.merge(second);
        backward.merge(first);

        let forward_ids: HashSet<_> = ids(&forward).into_iter().collect();
        let backward_ids: HashSet<_> = ids(&backward).into_iter().collect();
        prop_assert_eq!(forward_ids, backward_ids);
    }

    #[test]
    fn test_existing_records_are_never_overwritten(first in batch(), second in batch()) {
        let mut collection = MergedCollection::new();
        collection.merge(first);
        let before = collection.clone();

        collection.merge(second);

        for (index, user) in before.iter().enumerate() {
            prop_assert_eq!(&collection.as_slice()[index], user);
        }
    }

    #[test]
    fn test_search_is_case_insensitive(first in batch(), query in "[a-z]{0,3}") {
        let mut collection = MergedCollection::new();
        collection.merge(first);

        let lower = collection.search(&query).len();
        let upper = collection.search(&query.to_uppercase()).len();
        prop_assert_eq!(lower, upper);
    }
}
