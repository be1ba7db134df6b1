use super::*;
use crate::net::types::Calibration;

fn venture(is_calibrated: bool) -> Venture {
    Venture {
        id: "v1".to_owned(),
        name: "Green Acres".to_owned(),
        image_url: None,
        is_default: false,
        calibration: Calibration { is_calibrated },
    }
}

// =============================================================
// format_zoom
// =============================================================

#[test]
fn format_zoom_placeholder_before_first_readout() {
    assert_eq!(format_zoom(0), "--%");
}

#[test]
fn format_zoom_shows_percent() {
    assert_eq!(format_zoom(250), "250%");
}

// =============================================================
// calibration_badge
// =============================================================

#[test]
fn calibration_badge_hidden_without_venture() {
    assert_eq!(calibration_badge(None), None);
}

#[test]
fn calibration_badge_reflects_flag() {
    assert_eq!(calibration_badge(Some(&venture(true))).map(|(label, _)| label), Some("Calibrated"));
    assert_eq!(calibration_badge(Some(&venture(false))).map(|(label, _)| label), Some("Not calibrated"));
}
