use roboline::content::{ContentStore, LinkPolicy};
use roboline::search::{IndexOptions, SearchController};
use roboline::test_utils::{TestCase, run_table_tests};

fn store() -> ContentStore {
    ContentStore::embedded(LinkPolicy::Strict).expect("embedded content loads")
}

#[test]
fn tag_selection_over_embedded_content() -> Result<(), String> {
    let store = store();
    let cases = vec![
        TestCase {
            name: "sensors",
            input: vec!["sensors"],
            expected: vec!["phase-1", "sensor-calibration"],
        },
        TestCase {
            name: "arduino",
            input: vec!["arduino"],
            expected: vec!["phase-1", "arduino-line-following"],
        },
        TestCase {
            name: "either pid tag",
            input: vec!["pid", "pid-control"],
            expected: vec!["phase-2", "pid-control-explained"],
        },
        TestCase {
            name: "union across kinds",
            input: vec!["motors", "course"],
            expected: vec!["phase-1", "motor-control-library", "robotics-fundamentals"],
        },
        TestCase {
            name: "unknown tag",
            input: vec!["hydraulics"],
            expected: vec![],
        },
    ];

    run_table_tests(cases, |tags| {
        let mut controller = SearchController::new(&store, IndexOptions::default());
        for tag in tags {
            controller.toggle_tag(tag);
        }
        controller
            .results()
            .iter()
            .map(|r| r.item.id())
            .collect::<Vec<_>>()
    })
}

#[test]
fn best_match_for_query() -> Result<(), String> {
    let store = store();
    let cases = vec![
        TestCase {
            name: "exact tag outranks title hits",
            input: "PID",
            expected: Some("pid-control-explained"),
        },
        TestCase {
            name: "no match",
            input: "xyzxyz-no-match",
            expected: None,
        },
        TestCase {
            name: "blank lists phases first",
            input: "  ",
            expected: Some("phase-1"),
        },
    ];

    run_table_tests(cases, |query| {
        let mut controller = SearchController::new(&store, IndexOptions::default());
        controller.set_query(query);
        controller.results().first().map(|r| r.item.id())
    })
}

#[test]
fn catalog_counts_match_collections() {
    let store = store();
    let controller = SearchController::new(&store, IndexOptions::default());
    let counts = controller.catalog().counts();
    let arduino = counts.iter().find(|c| c.tag == "arduino").expect("arduino tag");
    assert_eq!((arduino.phases, arduino.resources), (1, 1));
    assert_eq!(counts.first().map(|c| c.tag.as_str()), Some("sensors"));
}
