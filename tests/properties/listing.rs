//! Property tests for rendering and re-parsing a listing.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use cliptree::domain::services::{parse_line, render_listing};
use cliptree::{compute_plan, MemoryFs, PathEntry};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_][a-z0-9_ -]{0,10}(\\.txt)?")
        .unwrap()
        .prop_map(|s| s.trim_end().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Submitting the listing unchanged never produces operations.
    #[test]
    fn property_unedited_listing_plans_nothing(
        dirs in proptest::collection::btree_set(name(), 0..=5),
        files in proptest::collection::btree_set(name(), 0..=8),
    ) {
        let root = Path::new("/r");
        let fs = MemoryFs::new();
        fs.add_dir(root);

        // Compare case-folded so a dir and a file never share a key.
        let dir_keys: BTreeSet<String> = dirs.iter().map(|d| d.to_lowercase()).collect();
        let mut entries = Vec::new();
        for dir in &dirs {
            fs.add_dir(root.join(dir));
            entries.push(PathEntry::dir(root.join(dir)));
        }
        let mut seen = BTreeSet::new();
        for file in files.iter().filter(|f| !dir_keys.contains(&f.to_lowercase())) {
            if !seen.insert(file.to_lowercase()) {
                continue;
            }
            fs.add_file(root.join(file), "");
            entries.push(PathEntry::file(root.join(file)));
        }

        let lines = render_listing(root, &entries);
        let plan = compute_plan(&fs, root, &entries, &lines);

        prop_assert!(plan.is_empty(), "lines {:?} planned {:?}", lines, plan.operations);
    }

    /// PROPERTY: Parsing never panics, whatever the user typed.
    #[test]
    fn property_parse_line_never_panics(raw in any::<String>()) {
        let fs = MemoryFs::new();
        fs.add_dir("/r");
        let _ = parse_line(&fs, Path::new("/r"), &raw);
    }
}
