use proptest::prelude::*;

use crate::domain::roster::{CastRole, RosterItem, RosterPartition};

fn arb_roster() -> impl Strategy<Value = Vec<RosterItem>> {
    prop::collection::vec((0i64..10_000, any::<bool>(), any::<bool>()), 0..60).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(idx, (id, was_guessed, main))| RosterItem {
                // Ids need not be unique on the wire; disambiguate per index.
                id: id * 100 + idx as i64,
                name: format!("item-{idx}"),
                image: None,
                role: if main {
                    CastRole::Main
                } else {
                    CastRole::Supporting
                },
                was_guessed,
            })
            .collect()
    })
}

proptest! {
    /// The partition is a permutation split: every item lands in exactly one
    /// side, with the flag deciding which.
    #[test]
    fn partition_is_exhaustive_and_exclusive(roster in arb_roster()) {
        let expected_found = roster.iter().filter(|i| i.was_guessed).count();
        let total = roster.len();

        let partition = RosterPartition::split(roster);

        prop_assert_eq!(partition.found.len(), expected_found);
        prop_assert_eq!(partition.total(), total);
        prop_assert!(partition.found.iter().all(|i| i.was_guessed));
        prop_assert!(partition.missed.iter().all(|i| !i.was_guessed));
    }

    /// Relative order within each side follows the roster order.
    #[test]
    fn partition_preserves_relative_order(roster in arb_roster()) {
        let found_ids: Vec<i64> = roster
            .iter()
            .filter(|i| i.was_guessed)
            .map(|i| i.id)
            .collect();

        let partition = RosterPartition::split(roster);
        let split_ids: Vec<i64> = partition.found.iter().map(|i| i.id).collect();

        prop_assert_eq!(found_ids, split_ids);
    }
}
