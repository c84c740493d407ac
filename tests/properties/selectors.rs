//! Property tests for content selectors.

use proptest::prelude::*;

use layertool::{ContentFilter, ContentSelector, Layer, Library, LibraryCoordinates};

fn coordinate_part() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9.]{0,10}").unwrap()
}

fn library() -> impl Strategy<Value = Library> {
    (coordinate_part(), coordinate_part(), coordinate_part(), any::<bool>()).prop_map(
        |(group, artifact, version, local)| {
            Library::from_coordinates(LibraryCoordinates::new(group, artifact, version)).local(local)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A selector without includes claims everything it does not exclude.
    #[test]
    fn property_empty_includes_match_all(
        path in proptest::string::string_regex("[a-z]{1,6}(/[a-z]{1,6}){0,4}\\.class").unwrap(),
    ) {
        let selector = ContentSelector::<str>::new(Layer::new("all"), Vec::new(), Vec::new());
        prop_assert!(selector.contains(path.as_str()));
    }

    /// PROPERTY: includeModuleDependencies claims every local module, whatever its coordinates.
    #[test]
    fn property_module_include_matches_local(library in library()) {
        let selector = ContentSelector::new(
            Layer::new("modules"),
            vec![
                ContentFilter::<Library>::pattern("never.matches:*").unwrap(),
                ContentFilter::LocalModule,
            ],
            Vec::new(),
        );
        prop_assert_eq!(selector.contains(&library), library.is_local());
    }

    /// PROPERTY: An exclude that matches always wins over any include.
    #[test]
    fn property_exclude_wins(library in library()) {
        let selector = ContentSelector::new(
            Layer::new("none"),
            vec![ContentFilter::<Library>::pattern("*").unwrap()],
            vec![ContentFilter::<Library>::pattern("*:*:*").unwrap()],
        );
        prop_assert!(!selector.contains(&library));
    }
}
