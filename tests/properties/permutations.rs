//! Property tests for applying renames that permute existing names.

use std::path::Path;

use proptest::prelude::*;

use cliptree::{apply_plan, validate_plan, MemoryFs, Operation, OperationPlan};

fn permutation() -> impl Strategy<Value = Vec<usize>> {
    (1usize..=6).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any permutation of file names (swaps, chains, cycles) applies
    /// without errors, moves every content to its target and leaves no temp names.
    #[test]
    fn property_permutation_applies_cleanly(perm in permutation()) {
        let root = Path::new("/r");
        let fs = MemoryFs::new();
        for i in 0..perm.len() {
            fs.add_file(root.join(format!("f{i}.txt")), &format!("content {i}"));
        }

        let operations = perm
            .iter()
            .enumerate()
            .map(|(from, &to)| {
                Operation::move_entry(
                    root.join(format!("f{from}.txt")),
                    root.join(format!("f{to}.txt")),
                    false,
                )
            })
            .collect();
        let plan = OperationPlan::from_operations(root, operations);
        prop_assert!(validate_plan(&fs, &plan).is_empty());

        let report = apply_plan(&fs, &plan);

        prop_assert!(!report.has_errors(), "{:?}", report.results);
        prop_assert_eq!(report.results.len(), perm.len());
        for (from, &to) in perm.iter().enumerate() {
            prop_assert_eq!(
                fs.read(root.join(format!("f{to}.txt"))),
                Some(format!("content {from}"))
            );
        }
        let leftovers: Vec<_> = fs
            .paths()
            .into_iter()
            .filter(|p| p.to_string_lossy().contains("cliptree_tmp"))
            .collect();
        prop_assert!(leftovers.is_empty(), "temp names left: {:?}", leftovers);
    }
}
