use super::*;

#[test]
fn number_grouping() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1_000.0), "1,000");
    assert_eq!(format_number(1_250_000.0), "1,250,000");
    assert_eq!(format_number(-12_345.5), "-12,345.5");
}

#[test]
fn number_decimals_trimmed() {
    assert_eq!(format_number(1_200.50), "1,200.5");
    assert_eq!(format_number(3.14159), "3.14");
    assert_eq!(format_number(f64::NAN), "—");
}

#[test]
fn price_and_area_cells() {
    assert_eq!(format_price(None), "On request");
    assert_eq!(format_price(Some(2_500_000.0)), "2,500,000");
    assert_eq!(format_area(Some(1_800.0)), "1,800 sq ft");
    assert_eq!(format_area(None), "—");
}

#[test]
fn zoom_percent_rounds() {
    assert_eq!(zoom_percent(1.0), 100);
    assert_eq!(zoom_percent(1.234), 123);
    assert_eq!(zoom_percent(0.4), 40);
    assert_eq!(zoom_percent(f64::NAN), 0);
}
