//! Tests for the conversion engine.

use jiff::civil::date;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Zoned};

use tzcountdown::{
    ConversionRequest, ConvertError, CustomOffset, TimeConversionEngine, ZoneSelector,
};

const PACIFIC: ZoneSelector = ZoneSelector::Catalog(0);
const EASTERN: ZoneSelector = ZoneSelector::Catalog(3);
const UTC: ZoneSelector = ZoneSelector::Catalog(11);
const TOKYO: ZoneSelector = ZoneSelector::Catalog(12);
const KOLKATA: ZoneSelector = ZoneSelector::Catalog(14);
const SYDNEY: ZoneSelector = ZoneSelector::Catalog(15);

fn utc_now(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> Zoned {
    date(year, month, day)
        .at(hour, minute, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap()
}

fn custom(hours: i32) -> ZoneSelector {
    ZoneSelector::Custom(CustomOffset::new(hours).unwrap())
}

// === Worked Example ===

#[test]
fn pacific_afternoon_on_july_fourth_is_evening_utc() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 3, 1, 12, 0);
    let request = ConversionRequest::new(PACIFIC, UTC, "15:00").on("07/04");

    let result = engine.convert_at(&request, &now).unwrap();

    assert_eq!(result.destination.datetime(), date(2024, 7, 4).at(22, 0, 0, 0));
    assert_eq!(result.destination_label(), "07/04 22:00 UTC");
    assert_eq!(result.source_label(), "07/04 15:00 PDT");
    assert_eq!(result.source.offset().seconds(), -7 * 3600);
    assert!(result.daylight_saving);
    assert!(result.is_future());
}

#[test]
fn duration_sign_follows_now() {
    let engine = TimeConversionEngine::default();
    let request = ConversionRequest::new(PACIFIC, UTC, "15:00").on("07/04");

    let before = engine.convert_at(&request, &utc_now(2024, 7, 4, 21, 0)).unwrap();
    assert_eq!(before.remaining, SignedDuration::from_hours(1));

    let after = engine.convert_at(&request, &utc_now(2024, 7, 4, 23, 30)).unwrap();
    assert_eq!(after.remaining, SignedDuration::from_mins(-90));
    assert!(!after.is_future());
}

// === Round Trip ===

#[test]
fn round_trip_returns_original_wall_clock() {
    let engine = TimeConversionEngine::default();
    let catalog = engine.catalog();
    let now = utc_now(2024, 2, 1, 0, 0);

    for (day, time) in [("01/15", "12:00"), ("06/15", "08:45"), ("08/20", "19:10")] {
        for a in 0..catalog.len() {
            for b in 0..catalog.len() {
                let there = ConversionRequest::new(
                    ZoneSelector::Catalog(a),
                    ZoneSelector::Catalog(b),
                    time,
                )
                .on(day);
                let forward = engine.convert_at(&there, &now).unwrap();

                let back = ConversionRequest::new(
                    ZoneSelector::Catalog(b),
                    ZoneSelector::Catalog(a),
                    forward.destination.strftime("%H:%M").to_string(),
                )
                .on(forward.destination.strftime("%m/%d").to_string());
                let backward = engine.convert_at(&back, &now).unwrap();

                assert_eq!(
                    backward.destination.datetime(),
                    forward.source.datetime(),
                    "{day} {time} via {a} -> {b}"
                );
            }
        }
    }
}

// === Fixed Offsets ===

#[test]
fn custom_offset_shifts_wall_clock_by_exactly_k_hours() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);

    for k in -18..=18 {
        let request = ConversionRequest::new(custom(0), custom(k), "12:00").on("06/15");
        let result = engine.convert_at(&request, &now).unwrap();

        let expected = date(2024, 6, 15)
            .at(12, 0, 0, 0)
            .checked_add(SignedDuration::from_hours(k as i64))
            .unwrap();
        assert_eq!(result.destination.datetime(), expected, "k = {k}");
        assert_eq!(result.offset_difference(), k * 3600);
        assert!(!result.daylight_saving);
    }
}

#[test]
fn zero_custom_offset_is_labelled_as_offset_on_either_side() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);

    let from_custom = ConversionRequest::new(custom(0), PACIFIC, "09:00").on("05/10");
    let result = engine.convert_at(&from_custom, &now).unwrap();
    assert_eq!(result.source_label(), "05/10 09:00 UTC+0");
    assert_eq!(result.destination_label(), "05/10 02:00 PDT");

    let to_custom = ConversionRequest::new(PACIFIC, custom(0), "09:00").on("05/10");
    let result = engine.convert_at(&to_custom, &now).unwrap();
    assert_eq!(result.destination_label(), "05/10 16:00 UTC+0");
}

#[test]
fn custom_offsets_are_labelled_with_sign() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);
    let request = ConversionRequest::new(custom(-5), custom(9), "12:00").on("05/10");

    let result = engine.convert_at(&request, &now).unwrap();
    assert_eq!(result.source_label(), "05/10 12:00 UTC-5");
    assert_eq!(result.destination_label(), "05/11 02:00 UTC+9");
}

#[test]
fn custom_source_with_catalog_destination() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);
    let request = ConversionRequest::new(custom(9), UTC, "09:00").on("05/10");

    let result = engine.convert_at(&request, &now).unwrap();
    assert_eq!(result.destination.datetime(), date(2024, 5, 10).at(0, 0, 0, 0));
    assert_eq!(result.source_label(), "05/10 09:00 UTC+9");
}

#[test]
fn catalog_source_with_custom_destination() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);
    let request = ConversionRequest::new(TOKYO, custom(-3), "09:00").on("05/10");

    let result = engine.convert_at(&request, &now).unwrap();
    assert_eq!(result.destination.datetime(), date(2024, 5, 9).at(21, 0, 0, 0));
    assert_eq!(result.destination_label(), "05/09 21:00 UTC-3");
}

#[test]
fn custom_offset_out_of_range_is_zone_error() {
    assert!(matches!(
        CustomOffset::new(19),
        Err(ConvertError::ZoneResolution(_))
    ));
    assert!(matches!(
        CustomOffset::new(-25),
        Err(ConvertError::ZoneResolution(_))
    ));
}

// === Daylight Saving Flag ===

#[test]
fn no_daylight_saving_in_northern_winter() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);
    let request = ConversionRequest::new(PACIFIC, TOKYO, "10:00").on("01/15");
    assert!(!engine.convert_at(&request, &now).unwrap().daylight_saving);
}

#[test]
fn daylight_saving_on_destination_side_only() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);
    // January is summer in Sydney.
    let request = ConversionRequest::new(TOKYO, SYDNEY, "10:00").on("01/15");
    assert!(engine.convert_at(&request, &now).unwrap().daylight_saving);
}

#[test]
fn half_hour_offset_difference() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);
    let request = ConversionRequest::new(UTC, KOLKATA, "10:00").on("03/03");
    let result = engine.convert_at(&request, &now).unwrap();
    assert_eq!(result.offset_difference(), 19_800);
    assert_eq!(result.destination_label(), "03/03 15:30 IST");
}

// === Dates ===

#[test]
fn missing_or_blank_date_means_today() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 3, 1, 12, 0);

    let missing = ConversionRequest::new(UTC, UTC, "15:00");
    let blank = ConversionRequest::new(UTC, UTC, "15:00").on("   ");
    for request in [missing, blank] {
        let result = engine.convert_at(&request, &now).unwrap();
        assert_eq!(result.source.date(), date(2024, 3, 1));
        assert_eq!(result.remaining, SignedDuration::from_hours(3));
    }
}

#[test]
fn year_is_fixed_at_parse_time() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 12, 31, 23, 0);
    let request = ConversionRequest::new(UTC, UTC, "00:30").on("01/01");

    let result = engine.convert_at(&request, &now).unwrap();
    assert_eq!(result.source.year(), 2024);
    assert!(result.overdue_by().is_some());
}

#[test]
fn conversion_can_roll_into_next_day() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 1, 1, 0, 0);
    let request = ConversionRequest::new(EASTERN, TOKYO, "20:00").on("12/31");

    let result = engine.convert_at(&request, &now).unwrap();
    assert_eq!(result.destination.datetime(), date(2025, 1, 1).at(10, 0, 0, 0));
}

// === Overdue ===

#[test]
fn past_target_reports_positive_elapsed_magnitude() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 7, 5, 0, 0);
    let request = ConversionRequest::new(PACIFIC, UTC, "15:00").on("07/04");

    let result = engine.convert_at(&request, &now).unwrap();
    assert!(result.remaining < SignedDuration::ZERO);
    assert_eq!(result.overdue_by(), Some(SignedDuration::from_hours(2)));
    assert_eq!(result.overdue_by(), Some(result.remaining.abs()));
}

// === Failures ===

#[test]
fn malformed_time_is_parse_error_and_leaves_previous_result() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 3, 1, 12, 0);
    let good = ConversionRequest::new(PACIFIC, UTC, "15:00").on("07/04");
    let shown = engine.convert_at(&good, &now).unwrap();
    let snapshot = shown.clone();

    let bad = ConversionRequest::new(PACIFIC, UTC, "99:99").on("07/04");
    let err = engine.convert_at(&bad, &now).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
    assert_eq!(shown, snapshot);
}

#[test]
fn time_is_checked_before_zone_resolution() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 3, 1, 12, 0);
    let request = ConversionRequest::new(ZoneSelector::Catalog(500), UTC, "1:x0");
    assert!(engine.convert_at(&request, &now).unwrap_err().is_parse());
}

#[test]
fn short_or_non_numeric_time_is_rejected() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 3, 1, 12, 0);
    for time in ["", "9", "9:0", "ab:cd", "9h30"] {
        let request = ConversionRequest::new(UTC, UTC, time);
        assert!(
            engine.convert_at(&request, &now).unwrap_err().is_parse(),
            "{time:?}"
        );
    }
}

#[test]
fn invalid_calendar_date_is_parse_error() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2023, 3, 1, 12, 0);
    let request = ConversionRequest::new(UTC, UTC, "10:00").on("02/29");
    assert!(engine.convert_at(&request, &now).unwrap_err().is_parse());
}

#[test]
fn unknown_catalog_index_is_zone_error() {
    let engine = TimeConversionEngine::default();
    let now = utc_now(2024, 3, 1, 12, 0);
    let request = ConversionRequest::new(UTC, ZoneSelector::Catalog(42), "10:00");
    assert!(matches!(
        engine.convert_at(&request, &now),
        Err(ConvertError::ZoneResolution(_))
    ));
}
