use jiff::SignedDuration;
use tzcountdown::{clamp, format_elapsed, format_hms, format_offset};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(0.5, 0.1, 1.0), 0.5);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn format_hms_pads_fields() {
    assert_eq!(format_hms(SignedDuration::from_secs(0)), "00:00:00");
    assert_eq!(format_hms(SignedDuration::from_secs(9)), "00:00:09");
    assert_eq!(format_hms(SignedDuration::from_secs(3 * 3600 + 4 * 60 + 5)), "03:04:05");
}

#[test]
fn format_hms_uses_magnitude() {
    assert_eq!(format_hms(SignedDuration::from_secs(-61)), "00:01:01");
}

#[test]
fn format_hms_truncates_subseconds() {
    assert_eq!(format_hms(SignedDuration::from_millis(9_900)), "00:00:09");
}

#[test]
fn format_elapsed_under_a_day() {
    assert_eq!(format_elapsed(SignedDuration::from_secs(300)), "0:05:00");
}

#[test]
fn format_elapsed_with_days() {
    assert_eq!(
        format_elapsed(SignedDuration::from_secs(86_400 + 2 * 3600 + 3 * 60 + 4)),
        "1 day, 2:03:04"
    );
    assert_eq!(
        format_elapsed(SignedDuration::from_secs(-(3 * 86_400 + 10))),
        "3 days, 0:00:10"
    );
}

#[test]
fn format_offset_signs_and_minutes() {
    assert_eq!(format_offset(0), "+00:00");
    assert_eq!(format_offset(19_800), "+05:30");
    assert_eq!(format_offset(-7 * 3600), "-07:00");
    assert_eq!(format_offset(-(9 * 3600 + 30 * 60)), "-09:30");
}
