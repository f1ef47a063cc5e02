//! Time zone conversion engine.
//!
//! Combines a typed month/day and hour:minute with the current year,
//! attaches the source zone, converts to the destination zone, and measures
//! how far the resulting instant is from "now".
//!
//! # Ambiguous local times
//!
//! Wall-clock times that fall in a daylight-saving gap or fold are resolved
//! with [`EngineConfig::disambiguation`]. The default is
//! [`Disambiguation::Later`], which prefers the standard-time reading on
//! both kinds of transition:
//!
//! - in a fold (clocks go back) the later instant carries the standard offset;
//! - in a gap (clocks go forward) the time is read with the offset in force
//!   before the gap, i.e. the standard offset, and lands after the gap.

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::{Disambiguation, TimeZone};
use jiff::{SignedDuration, Timestamp, Zoned};
use log::debug;

use crate::catalog::{ZoneCatalog, ZoneSelector};
use crate::error::ConvertError;

/// Engine configuration. Fixed once the engine is built.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub catalog: ZoneCatalog,
    pub disambiguation: Disambiguation,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog: ZoneCatalog::builtin(),
            disambiguation: Disambiguation::Later,
        }
    }
}

/// One conversion to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source: ZoneSelector,
    pub destination: ZoneSelector,
    /// `MM/DD` or `M/D`. `None` or blank means today.
    pub date: Option<String>,
    /// `H:MM` or `HH:MM`, 24-hour.
    pub time: String,
}

impl ConversionRequest {
    pub fn new(source: ZoneSelector, destination: ZoneSelector, time: impl Into<String>) -> Self {
        Self {
            source,
            destination,
            date: None,
            time: time.into(),
        }
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// The typed wall-clock time in the source zone.
    pub source: Zoned,
    /// The same instant in the destination zone.
    pub destination: Zoned,
    /// Target minus now. Not positive once the target has passed.
    pub remaining: SignedDuration,
    /// Either side observes daylight saving at the target instant.
    pub daylight_saving: bool,
    /// Selectors the request named, kept for labelling.
    pub source_selector: ZoneSelector,
    pub destination_selector: ZoneSelector,
}

impl ConversionResult {
    /// The target instant.
    pub fn target(&self) -> Timestamp {
        self.destination.timestamp()
    }

    pub fn is_future(&self) -> bool {
        self.remaining > SignedDuration::ZERO
    }

    /// How long ago the target passed, if it did.
    pub fn overdue_by(&self) -> Option<SignedDuration> {
        (self.remaining < SignedDuration::ZERO).then(|| self.remaining.abs())
    }

    /// Destination offset minus source offset, in seconds.
    pub fn offset_difference(&self) -> i32 {
        self.destination.offset().seconds() - self.source.offset().seconds()
    }

    /// `07/04 15:00 PDT`
    pub fn source_label(&self) -> String {
        wall_clock_label(&self.source, self.source_selector)
    }

    /// `07/04 22:00 UTC`
    pub fn destination_label(&self) -> String {
        wall_clock_label(&self.destination, self.destination_selector)
    }
}

/// `MM/DD HH:MM` followed by the zone abbreviation, or `UTC±k` for a
/// custom offset.
pub fn wall_clock_label(zoned: &Zoned, selector: ZoneSelector) -> String {
    let stamp = zoned.strftime("%m/%d %H:%M");
    match selector {
        ZoneSelector::Custom(offset) => format!("{stamp} {offset}"),
        ZoneSelector::Catalog(_) => format!("{stamp} {}", zoned.strftime("%Z")),
    }
}

/// Stateless conversion service over an immutable [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct TimeConversionEngine {
    config: EngineConfig,
}

impl TimeConversionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.config.catalog
    }

    /// Converts relative to the current instant in the system zone.
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        self.convert_at(request, &Zoned::now())
    }

    /// Converts relative to `now`, whose year and (for a missing date)
    /// calendar day complete the request.
    pub fn convert_at(
        &self,
        request: &ConversionRequest,
        now: &Zoned,
    ) -> Result<ConversionResult, ConvertError> {
        let time = parse_time(&request.time)?;
        let date = match request.date.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => parse_month_day(text, now.year())?,
            _ => now.date(),
        };
        let wall_clock = DateTime::from_parts(date, time);

        let source_tz = self.config.catalog.resolve(request.source)?;
        let destination_tz = self.config.catalog.resolve(request.destination)?;

        let source = self.attach(wall_clock, source_tz)?;
        let destination = source.with_time_zone(destination_tz);
        let remaining = destination.timestamp().duration_since(now.timestamp());
        let daylight_saving = observes_dst(&source) || observes_dst(&destination);

        debug!(
            "converted {wall_clock} from {:?} to {:?}: {destination} (remaining {remaining}, dst {daylight_saving})",
            request.source, request.destination
        );

        Ok(ConversionResult {
            source,
            destination,
            remaining,
            daylight_saving,
            source_selector: request.source,
            destination_selector: request.destination,
        })
    }

    fn attach(&self, wall_clock: DateTime, tz: TimeZone) -> Result<Zoned, ConvertError> {
        tz.into_ambiguous_zoned(wall_clock)
            .disambiguate(self.config.disambiguation)
            .map_err(|e| ConvertError::zone(format!("cannot place {wall_clock} in zone: {e}")))
    }
}

fn observes_dst(zoned: &Zoned) -> bool {
    zoned
        .time_zone()
        .to_offset_info(zoned.timestamp())
        .dst()
        .is_dst()
}

/// Parses `H:MM` / `HH:MM` (24-hour).
pub fn parse_time(text: &str) -> Result<Time, ConvertError> {
    let text = text.trim();
    let (hour, minute) = text
        .split_once(':')
        .filter(|&(h, m)| {
            (1..=2).contains(&h.len())
                && m.len() == 2
                && h.bytes().all(|b| b.is_ascii_digit())
                && m.bytes().all(|b| b.is_ascii_digit())
        })
        .ok_or_else(|| ConvertError::parse(format!("time \"{text}\" is not in H:MM form")))?;

    // Both parts are one or two ASCII digits, so they fit in i8.
    let hour: i8 = hour.parse().map_err(|_| ConvertError::parse("bad hour"))?;
    let minute: i8 = minute.parse().map_err(|_| ConvertError::parse("bad minute"))?;
    Time::new(hour, minute, 0, 0)
        .map_err(|_| ConvertError::parse(format!("time \"{text}\" is out of range")))
}

/// Parses `MM/DD` / `M/D` in `year`.
pub fn parse_month_day(text: &str, year: i16) -> Result<Date, ConvertError> {
    let text = text.trim();
    let numeric = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    let (month, day) = text
        .split_once('/')
        .filter(|&(m, d)| numeric(m) && numeric(d))
        .ok_or_else(|| ConvertError::parse(format!("date \"{text}\" is not in MM/DD form")))?;

    let month: i8 = month.parse().map_err(|_| ConvertError::parse("bad month"))?;
    let day: i8 = day.parse().map_err(|_| ConvertError::parse("bad day"))?;
    Date::new(year, month, day)
        .map_err(|_| ConvertError::parse(format!("{year}/{text} is not a calendar date")))
}
