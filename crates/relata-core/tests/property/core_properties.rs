//! Property tests for relata-core.

use std::collections::HashSet;

use proptest::prelude::*;

use relata_core::{VariableStore, Window};

proptest! {
    #[test]
    fn store_is_a_bijection(names in prop::collection::hash_set("[a-z]{1,8}", 0..30)) {
        let mut store = VariableStore::new();
        for name in &names {
            store.add(name).unwrap();
        }
        prop_assert_eq!(store.len(), names.len());
        let mut seen = HashSet::new();
        for name in &names {
            let index = store.lookup_by_name(name).unwrap();
            prop_assert!(seen.insert(index), "index {} assigned twice", index);
            prop_assert_eq!(store.lookup_by_index(index).unwrap(), name.as_str());
        }
    }

    #[test]
    fn clipped_window_never_passes_the_last_step(
        start in 0_usize..50,
        len in 0_usize..10,
        last in 0_usize..50,
    ) {
        let window = Window::new(start, start + len);
        match window.clip(last) {
            Some(clipped) => {
                prop_assert!(clipped.end <= last);
                prop_assert_eq!(clipped.start, window.start);
                prop_assert!(clipped.start <= clipped.end);
            }
            None => prop_assert!(window.start > last),
        }
    }
}
