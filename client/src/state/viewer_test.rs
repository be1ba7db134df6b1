use super::*;

fn venture(id: &str, is_default: bool) -> Venture {
    Venture { id: id.to_owned(), name: format!("Venture {id}"), is_default, ..Venture::default() }
}

// =============================================================
// Venture selection
// =============================================================

#[test]
fn route_param_wins() {
    let ventures = vec![venture("1", false), venture("2", true), venture("3", false)];
    assert_eq!(select_venture(&ventures, Some("3")).as_deref(), Some("3"));
}

#[test]
fn unknown_route_param_falls_back_to_default() {
    let ventures = vec![venture("1", false), venture("2", true)];
    assert_eq!(select_venture(&ventures, Some("99")).as_deref(), Some("2"));
    assert_eq!(select_venture(&ventures, None).as_deref(), Some("2"));
}

#[test]
fn first_when_no_default() {
    let ventures = vec![venture("1", false), venture("2", false)];
    assert_eq!(select_venture(&ventures, None).as_deref(), Some("1"));
    assert_eq!(select_venture(&[], Some("1")), None);
}

#[test]
fn set_ventures_picks_active() {
    let mut state = ViewerState { ventures_loading: true, ..ViewerState::default() };
    state.set_ventures(vec![venture("1", false), venture("2", true)], None);
    assert!(!state.ventures_loading);
    assert_eq!(state.active_venture().map(|v| v.id.as_str()), Some("2"));
}

#[test]
fn activate_clears_plot_state() {
    let mut state = ViewerState::default();
    state.set_ventures(vec![venture("1", true), venture("2", false)], None);
    state.selected_plot = Some(PlotProperties::default());
    state.image_phase = ImagePhase::Ready;
    state.activate("2");
    assert!(state.selected_plot.is_none());
    assert_eq!(state.image_phase, ImagePhase::Idle);
    state.image_phase = ImagePhase::Ready;
    state.activate("2");
    assert_eq!(state.image_phase, ImagePhase::Ready);
}

// =============================================================
// Commands and filter
// =============================================================

#[test]
fn issue_bumps_sequence() {
    let mut state = ViewerState::default();
    state.issue(ViewCommand::ZoomIn);
    state.issue(ViewCommand::ZoomIn);
    assert_eq!(state.view_command_seq, 2);
    assert_eq!(state.view_command, Some(ViewCommand::ZoomIn));
}

#[test]
fn toggle_status_from_all_isolates() {
    let mut state = ViewerState::default();
    assert!(state.status_shown(PlotStatus::Sold));
    state.toggle_status(PlotStatus::Available);
    assert!(state.status_shown(PlotStatus::Available));
    assert!(!state.status_shown(PlotStatus::Sold));
    state.toggle_status(PlotStatus::Sold);
    assert!(state.status_shown(PlotStatus::Sold));
}

#[test]
fn toggle_last_status_off_returns_to_all() {
    let mut state = ViewerState::default();
    state.toggle_status(PlotStatus::Available);
    state.toggle_status(PlotStatus::Available);
    assert!(state.status_filter.is_none());
}

// =============================================================
// Zoom readout
// =============================================================

#[test]
fn zoom_readout_throttles() {
    let mut readout = ZoomReadout::default();
    assert_eq!(readout.sample(0.0, 100), Some(100));
    assert_eq!(readout.sample(50.0, 120), None);
    assert_eq!(readout.sample(100.0, 120), Some(120));
}

#[test]
fn zoom_readout_skips_unchanged() {
    let mut readout = ZoomReadout::default();
    readout.sample(0.0, 100);
    assert_eq!(readout.sample(500.0, 100), None);
    assert_eq!(readout.sample(600.0, 90), Some(90));
}
