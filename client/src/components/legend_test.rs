use super::*;

fn state_with_counts(counts: &[(PlotStatus, usize)]) -> ViewerState {
    ViewerState { status_counts: counts.to_vec(), ..ViewerState::default() }
}

// =============================================================
// legend_entries
// =============================================================

#[test]
fn legend_entries_skip_empty_statuses() {
    let state = state_with_counts(&[(PlotStatus::Sold, 3), (PlotStatus::Available, 5), (PlotStatus::Hold, 0)]);
    let entries = legend_entries(&state);
    let statuses: Vec<_> = entries.iter().map(|e| e.status).collect();
    assert_eq!(statuses, vec![PlotStatus::Available, PlotStatus::Sold]);
    assert_eq!(entries[0].count, 5);
}

#[test]
fn legend_entries_follow_filter() {
    let mut state = state_with_counts(&[(PlotStatus::Sold, 1), (PlotStatus::Available, 2)]);
    state.toggle_status(PlotStatus::Sold);
    let entries = legend_entries(&state);
    assert!(!entries.iter().find(|e| e.status == PlotStatus::Available).is_some_and(|e| e.shown));
    assert!(entries.iter().find(|e| e.status == PlotStatus::Sold).is_some_and(|e| e.shown));
}

#[test]
fn legend_entries_empty_without_plots() {
    assert!(legend_entries(&ViewerState::default()).is_empty());
}
