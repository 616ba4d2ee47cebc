use proptest::prelude::*;

use roboline::content::{Phase, Resource};
use roboline::search::{IndexOptions, SearchController, TagCatalog};
use roboline::test_utils::fixtures::{phase, resource};

const TAGS: [&str; 6] = ["sensors", "arduino", "pid", "motors", "vision", "course"];
const WORDS: [&str; 8] = [
    "line", "sensor", "robot", "pid", "motor", "arduino", "obstacle", "",
];

fn tag_set() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(TAGS.to_vec(), 0..=3)
}

fn collections() -> impl Strategy<Value = (Vec<Phase>, Vec<Resource>)> {
    (
        prop::collection::vec(tag_set(), 0..5),
        prop::collection::vec(tag_set(), 0..7),
    )
        .prop_map(|(phase_tags, resource_tags)| {
            let phases = phase_tags
                .iter()
                .enumerate()
                .map(|(i, tags)| phase(&format!("p{i}"), tags))
                .collect();
            let resources = resource_tags
                .iter()
                .enumerate()
                .map(|(i, tags)| resource(&format!("r{i}"), tags))
                .collect();
            (phases, resources)
        })
}

#[derive(Debug, Clone)]
enum Op {
    Query(&'static str),
    Toggle(&'static str),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(WORDS.to_vec()).prop_map(Op::Query),
        prop::sample::select(TAGS.to_vec()).prop_map(Op::Toggle),
        Just(Op::Clear),
    ]
}

fn apply(controller: &mut SearchController<'_>, op: &Op) {
    match op {
        Op::Query(q) => controller.set_query(*q),
        Op::Toggle(t) => controller.toggle_tag(t),
        Op::Clear => controller.clear(),
    }
}

proptest! {
    #[test]
    fn results_carry_a_selected_tag(
        (phases, resources) in collections(),
        ops in prop::collection::vec(op(), 0..12),
    ) {
        let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
        for op in &ops {
            apply(&mut controller, op);
        }
        let selected = controller.selected_tags().to_vec();
        if !selected.is_empty() {
            for result in controller.results() {
                prop_assert!(result.item.tags().iter().any(|t| selected.contains(t)));
            }
        }
    }

    #[test]
    fn scores_are_non_decreasing(
        (phases, resources) in collections(),
        query in prop::sample::select(WORDS.to_vec()),
    ) {
        let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
        controller.set_query(query);
        for pair in controller.results().windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn clear_restores_initial_listing(
        (phases, resources) in collections(),
        ops in prop::collection::vec(op(), 0..12),
    ) {
        let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
        let initial = controller.results().to_vec();
        for op in &ops {
            apply(&mut controller, op);
        }
        controller.clear();
        prop_assert_eq!(controller.results(), initial.as_slice());
        prop_assert_eq!(initial.len(), phases.len() + resources.len());
        controller.clear();
        prop_assert_eq!(controller.results(), initial.as_slice());
    }

    #[test]
    fn toggling_twice_is_a_no_op(
        (phases, resources) in collections(),
        ops in prop::collection::vec(op(), 0..8),
        tag in prop::sample::select(TAGS.to_vec()),
    ) {
        let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
        for op in &ops {
            apply(&mut controller, op);
        }
        let before = controller.results().to_vec();
        let state = controller.state().clone();
        controller.toggle_tag(tag);
        controller.toggle_tag(tag);
        prop_assert_eq!(controller.results(), before.as_slice());

        let mut after: Vec<_> = controller.selected_tags().to_vec();
        let mut expected = state.selected_tags;
        after.sort();
        expected.sort();
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn catalog_is_the_exact_tag_union((phases, resources) in collections()) {
        let catalog = TagCatalog::build(&phases, &resources);
        let mut expected: Vec<&str> = phases
            .iter()
            .flat_map(|p| p.tags.iter())
            .chain(resources.iter().flat_map(|r| r.tags.iter()))
            .map(String::as_str)
            .collect();
        expected.sort_unstable();
        expected.dedup();

        let mut actual: Vec<&str> = catalog.tags().iter().map(String::as_str).collect();
        let listed = actual.len();
        actual.sort_unstable();
        actual.dedup();
        prop_assert_eq!(listed, actual.len(), "catalog lists a tag twice");
        prop_assert_eq!(actual, expected);
    }
}
