use roboline::content::{Phase, Resource};
use roboline::search::{IndexOptions, SearchController, SearchItem};
use roboline::test_utils::fixtures::{phase, resource};

fn ids(controller: &SearchController<'_>) -> Vec<String> {
    controller
        .results()
        .iter()
        .map(|r| r.item.id().to_string())
        .collect()
}

fn shared_tag_data() -> (Vec<Phase>, Vec<Resource>) {
    (
        vec![phase("p1", &["sensors", "arduino"])],
        vec![resource("r1", &["arduino", "tutorial"])],
    )
}

#[test]
fn tag_without_query_lists_both_kinds_unranked() {
    let (phases, resources) = shared_tag_data();
    let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
    controller.set_query("");
    controller.toggle_tag("arduino");

    assert_eq!(ids(&controller), vec!["p1", "r1"]);
    assert!(controller.results().iter().all(|r| r.score == 0.0));
}

#[test]
fn phase_only_tag_keeps_the_phase() {
    let (phases, resources) = shared_tag_data();
    let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
    controller.toggle_tag("sensors");

    assert_eq!(ids(&controller), vec!["p1"]);
    assert!(matches!(controller.results()[0].item, SearchItem::Phase(_)));
}

#[test]
fn query_matches_phase_title_only() {
    let mut pid = phase("p1", &[]);
    pid.title = "PID Control".to_string();
    let phases = vec![pid, phase("p2", &[])];
    let resources = vec![resource("r1", &[]), resource("r2", &[])];
    let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());

    controller.set_query("PID");

    assert_eq!(ids(&controller), vec!["p1"]);
    // Title hit at offset 0: 0.001 ^ (weight 1/5 * norm 0.707).
    let score = controller.results()[0].score;
    let expected = 0.001_f64.powf(0.2 * 0.707);
    assert!((score - expected).abs() < 1e-9, "got {score}");
}

#[test]
fn unmatched_query_gives_empty_results() {
    let (phases, resources) = shared_tag_data();
    let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
    controller.set_query("xyzxyz-no-match");
    assert!(controller.results().is_empty());
}

#[test]
fn clear_restores_full_listing() {
    let (phases, resources) = shared_tag_data();
    let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
    let initial: Vec<_> = controller.results().to_vec();

    controller.set_query("arduino");
    controller.toggle_tag("tutorial");
    controller.toggle_tag("sensors");
    controller.clear();

    assert_eq!(controller.results(), initial.as_slice());
    assert_eq!(ids(&controller), vec!["p1", "r1"]);
    assert!(controller.query().is_empty());
    assert!(controller.selected_tags().is_empty());
}

#[test]
fn whitespace_query_is_treated_as_blank() {
    let (phases, resources) = shared_tag_data();
    let mut controller = SearchController::from_parts(&phases, &resources, IndexOptions::default());
    controller.set_query("   ");
    assert_eq!(ids(&controller), vec!["p1", "r1"]);
    assert_eq!(controller.query(), "   ");
}
