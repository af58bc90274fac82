//! Property tests for name validation and path building.

use proptest::prelude::*;

use ssm_starter::core::fetch::ParameterFetcher;
use ssm_starter::core::path;
use ssm_starter::core::store::MemoryStore;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

fn qualified() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|s| format!("/{}", s.join("/")))
}

fn relative() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|s| s.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn qualified_names_without_scope_pass(names in prop::collection::vec(qualified(), 1..5)) {
        prop_assert!(path::validate_all(&names, None).is_ok());
    }

    #[test]
    fn qualified_name_with_scope_fails_batch(
        mut names in prop::collection::vec(relative(), 0..4),
        bad in qualified(),
        at in 0usize..5,
        scope in segment(),
    ) {
        let at = at.min(names.len());
        names.insert(at, bad.clone());
        prop_assert!(!path::is_valid(&bad, Some(scope.as_str())));
        prop_assert!(path::validate_all(&names, Some(scope.as_str())).is_err());
    }

    #[test]
    fn built_paths_are_wrapped(name in relative(), scope in prop::option::of(segment())) {
        let built = path::build(&name, scope.as_deref());
        prop_assert!(built.starts_with('/'));
        prop_assert!(built.ends_with('/'));
        prop_assert!(!built.contains("//"));
    }

    #[test]
    fn pagination_preserves_order(count in 0usize..40, page_size in 1i32..10) {
        let mut store = MemoryStore::new();
        for i in 0..count {
            store = store.with(&format!("/p/K{:03}", i), &i.to_string(), "String");
        }
        let fetcher = ParameterFetcher::new(&store).with_page_size(page_size);

        let keys: Vec<String> = fetcher
            .fetch("/p/")
            .unwrap()
            .iter()
            .map(|p| p.key().to_string())
            .collect();
        let expected: Vec<String> = (0..count).map(|i| format!("K{:03}", i)).collect();
        prop_assert_eq!(keys, expected);

        let size = page_size as usize;
        let pages = ((count + size - 1) / size).max(1);
        prop_assert_eq!(store.requests().len(), pages);
    }
}
