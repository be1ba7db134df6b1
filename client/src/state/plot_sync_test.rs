use serde_json::json;

use super::*;

fn payload(plot_no: &str) -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10]]] },
            "properties": { "plotNo": plot_no, "status": "available" }
        }]
    })
}

fn changed_plot_nos(outcome: SyncOutcome) -> Vec<String> {
    match outcome {
        SyncOutcome::Changed { features, .. } => features.into_iter().map(|f| f.properties.plot_no).collect(),
        other => panic!("expected Changed, got {other:?}"),
    }
}

// =============================================================
// Stale guard
// =============================================================

#[test]
fn response_for_previous_venture_is_stale() {
    let mut sync = PlotSync::default();
    let old = sync.begin("v1");
    let _new = sync.begin("v2");
    assert!(matches!(sync.accept(&old, payload("A")), SyncOutcome::Stale));
}

#[test]
fn reselecting_same_venture_still_invalidates() {
    let mut sync = PlotSync::default();
    let first = sync.begin("v1");
    let second = sync.begin("v1");
    assert_ne!(first, second);
    assert!(matches!(sync.accept(&first, payload("A")), SyncOutcome::Stale));
    assert_eq!(changed_plot_nos(sync.accept(&second, payload("A"))), vec!["A"]);
}

#[test]
fn reset_drops_everything() {
    let mut sync = PlotSync::default();
    let tag = sync.begin("v1");
    sync.reset();
    assert!(sync.current_tag().is_none());
    assert!(matches!(sync.accept(&tag, payload("A")), SyncOutcome::Stale));
}

// =============================================================
// Change detection
// =============================================================

#[test]
fn identical_payload_is_unchanged() {
    let mut sync = PlotSync::default();
    let tag = sync.begin("v1");
    assert_eq!(changed_plot_nos(sync.accept(&tag, payload("A"))), vec!["A"]);
    assert!(matches!(sync.accept(&tag, payload("A")), SyncOutcome::Unchanged));
}

#[test]
fn different_payload_is_changed() {
    let mut sync = PlotSync::default();
    let tag = sync.begin("v1");
    sync.accept(&tag, payload("A"));
    assert_eq!(changed_plot_nos(sync.accept(&tag, payload("B"))), vec!["B"]);
}

#[test]
fn switching_venture_forgets_snapshot() {
    let mut sync = PlotSync::default();
    let tag = sync.begin("v1");
    sync.accept(&tag, payload("A"));
    let tag = sync.begin("v1");
    assert_eq!(changed_plot_nos(sync.accept(&tag, payload("A"))), vec!["A"]);
}

#[test]
fn malformed_features_are_reported() {
    let mut sync = PlotSync::default();
    let tag = sync.begin("v1");
    let good = payload("A")["features"][0].clone();
    let outcome = sync.accept(&tag, json!({ "features": [{ "geometry": 5 }, good] }));
    match outcome {
        SyncOutcome::Changed { features, malformed } => {
            assert_eq!(features.len(), 1);
            assert_eq!(malformed.len(), 1);
        }
        other => panic!("expected Changed, got {other:?}"),
    }
}

#[test]
fn bare_array_and_garbage_payloads() {
    let mut sync = PlotSync::default();
    let tag = sync.begin("v1");
    let bare = payload("A")["features"].clone();
    assert_eq!(changed_plot_nos(sync.accept(&tag, bare)), vec!["A"]);
    assert!(changed_plot_nos(sync.accept(&tag, json!("oops"))).is_empty());
}
