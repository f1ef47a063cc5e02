//! Time zone catalog and zone selectors.
//!
//! The catalog is an ordered, read-only list of [`TimeZoneDescriptor`]s.
//! A side of a conversion is picked either by catalog position or by a
//! user-defined whole-hour [`CustomOffset`] with no daylight-saving rule.

use std::fmt;

use jiff::tz::{Offset, TimeZone};
use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::model::constants::MAX_CUSTOM_OFFSET_HOURS;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneDescriptor {
    /// Abbreviation outside daylight saving, e.g. `PST`.
    pub standard_abbr: String,
    /// Abbreviation during daylight saving, e.g. `PDT`.
    pub daylight_abbr: String,
    /// Display form of the standard offset, e.g. `UTC-8`.
    pub standard_offset: String,
    /// Display form of the daylight offset, e.g. `UTC-7`.
    pub daylight_offset: String,
    /// Human-readable region, e.g. `America Pacific`.
    pub region: String,
    /// IANA zone identifier used for all arithmetic.
    pub iana_name: String,
}

impl TimeZoneDescriptor {
    pub fn new(
        standard_abbr: &str,
        daylight_abbr: &str,
        standard_offset: &str,
        daylight_offset: &str,
        region: &str,
        iana_name: &str,
    ) -> Self {
        Self {
            standard_abbr: standard_abbr.to_string(),
            daylight_abbr: daylight_abbr.to_string(),
            standard_offset: standard_offset.to_string(),
            daylight_offset: daylight_offset.to_string(),
            region: region.to_string(),
            iana_name: iana_name.to_string(),
        }
    }

    /// Label shown in zone pickers: `PST / PDT (America Pacific)`.
    pub fn label(&self) -> String {
        format!(
            "{} / {} ({})",
            self.standard_abbr, self.daylight_abbr, self.region
        )
    }

    /// Looks the zone up in the time zone database.
    pub fn time_zone(&self) -> Result<TimeZone, ConvertError> {
        TimeZone::get(&self.iana_name)
            .map_err(|e| ConvertError::zone(format!("unknown zone \"{}\": {e}", self.iana_name)))
    }
}

/// Built-in entries: (std abbr, dst abbr, std offset, dst offset, region, IANA name).
const BUILTIN_ZONES: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("PST", "PDT", "UTC-8", "UTC-7", "America Pacific", "US/Pacific"),
    ("MST", "MDT", "UTC-7", "UTC-6", "America Mountain", "US/Mountain"),
    ("CST", "CDT", "UTC-6", "UTC-5", "America Central", "US/Central"),
    ("EST", "EDT", "UTC-5", "UTC-4", "America Eastern", "US/Eastern"),
    ("AST", "ADT", "UTC-4", "UTC-3", "America Atlantic", "Canada/Atlantic"),
    ("GMT", "BST", "UTC+0", "UTC+1", "UK", "Europe/London"),
    ("CET", "CEST", "UTC+1", "UTC+2", "Europe Central", "Europe/Paris"),
    ("EET", "EEST", "UTC+2", "UTC+3", "Europe Eastern", "Europe/Athens"),
    ("SAST", "SAST", "UTC+2", "UTC+2", "South Africa", "Africa/Johannesburg"),
    ("MSK", "MSD", "UTC+3", "UTC+4", "Moscow", "Europe/Moscow"),
    ("IST", "IDT", "UTC+2", "UTC+3", "Israel", "Asia/Jerusalem"),
    ("UTC", "UTC", "UTC+0", "UTC+0", "Universal", "UTC"),
    ("JST", "JST", "UTC+9", "UTC+9", "Japan", "Asia/Tokyo"),
    ("CST", "CST", "UTC+8", "UTC+8", "China", "Asia/Shanghai"),
    ("IST", "IST", "UTC+5:30", "UTC+5:30", "India", "Asia/Kolkata"),
    ("AEST", "AEDT", "UTC+10", "UTC+11", "Australia East", "Australia/Sydney"),
    ("NZST", "NZDT", "UTC+12", "UTC+13", "New Zealand", "Pacific/Auckland"),
    ("BRT", "BRST", "UTC-3", "UTC-2", "Brazil", "America/Sao_Paulo"),
    ("GST", "GST", "UTC+4", "UTC+4", "Dubai", "Asia/Dubai"),
    ("SGT", "SGT", "UTC+8", "UTC+8", "Singapore", "Asia/Singapore"),
];

/// A user-defined fixed UTC offset in whole hours, magnitude at most 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomOffset(i8);

impl CustomOffset {
    /// Fails with [`ConvertError::ZoneResolution`] outside `-18..=18`.
    pub fn new(hours: i32) -> Result<Self, ConvertError> {
        if hours.unsigned_abs() > MAX_CUSTOM_OFFSET_HOURS as u32 {
            return Err(ConvertError::zone(format!(
                "custom offset {hours:+} is outside ±{MAX_CUSTOM_OFFSET_HOURS} hours"
            )));
        }
        Ok(Self(hours as i8))
    }

    pub fn hours(self) -> i8 {
        self.0
    }

    pub fn offset(self) -> Result<Offset, ConvertError> {
        Offset::from_hours(self.0).map_err(|e| ConvertError::zone(e.to_string()))
    }

    /// Fixed zone for this offset. Never observes daylight saving.
    pub fn time_zone(self) -> Result<TimeZone, ConvertError> {
        Ok(TimeZone::fixed(self.offset()?))
    }
}

impl fmt::Display for CustomOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC{:+}", self.0)
    }
}

/// Picks one side of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSelector {
    /// Position in the [`ZoneCatalog`].
    Catalog(usize),
    /// Fixed offset, independent of the catalog.
    Custom(CustomOffset),
}

impl From<CustomOffset> for ZoneSelector {
    fn from(offset: CustomOffset) -> Self {
        ZoneSelector::Custom(offset)
    }
}

/// Ordered, immutable list of selectable zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneCatalog {
    entries: Vec<TimeZoneDescriptor>,
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ZoneCatalog {
    pub fn new(entries: Vec<TimeZoneDescriptor>) -> Self {
        Self { entries }
    }

    /// The twenty zones shipped with the application.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ZONES
            .iter()
            .map(|&(std, dst, std_off, dst_off, region, iana)| {
                TimeZoneDescriptor::new(std, dst, std_off, dst_off, region, iana)
            })
            .collect();
        Self { entries }
    }

    /// Loads a catalog from a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimeZoneDescriptor> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeZoneDescriptor> {
        self.entries.iter()
    }

    /// Position of the entry with this IANA name (case-insensitive).
    pub fn position_of(&self, iana_name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|d| d.iana_name.eq_ignore_ascii_case(iana_name))
    }

    /// Resolves a selector to a concrete zone.
    pub fn resolve(&self, selector: ZoneSelector) -> Result<TimeZone, ConvertError> {
        match selector {
            ZoneSelector::Catalog(index) => self
                .get(index)
                .ok_or_else(|| {
                    ConvertError::zone(format!(
                        "catalog index {index} is out of range (0..{})",
                        self.len()
                    ))
                })?
                .time_zone(),
            ZoneSelector::Custom(offset) => offset.time_zone(),
        }
    }

    /// Parses user text into a selector.
    ///
    /// Accepts a catalog index, an IANA name, an abbreviation (first match
    /// wins), or `UTC+k` / `UTC-k` for a custom offset.
    pub fn parse_selector(&self, text: &str) -> Result<ZoneSelector, ConvertError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConvertError::zone("no zone given"));
        }

        if let Ok(index) = text.parse::<usize>() {
            return match self.get(index) {
                Some(_) => Ok(ZoneSelector::Catalog(index)),
                None => Err(ConvertError::zone(format!(
                    "catalog index {index} is out of range (0..{})",
                    self.len()
                ))),
            };
        }

        if let Some(rest) = strip_prefix_ignore_case(text, "UTC") {
            if rest.starts_with('+') || rest.starts_with('-') {
                let hours = rest.parse::<i32>().map_err(|_| {
                    ConvertError::zone(format!("\"{text}\" is not a whole-hour UTC offset"))
                })?;
                return Ok(ZoneSelector::Custom(CustomOffset::new(hours)?));
            }
        }

        if let Some(index) = self.position_of(text) {
            return Ok(ZoneSelector::Catalog(index));
        }

        self.entries
            .iter()
            .position(|d| {
                d.standard_abbr.eq_ignore_ascii_case(text)
                    || d.daylight_abbr.eq_ignore_ascii_case(text)
            })
            .map(ZoneSelector::Catalog)
            .ok_or_else(|| ConvertError::zone(format!("unknown zone \"{text}\"")))
    }

    /// Display text for a selector.
    pub fn selector_label(&self, selector: ZoneSelector) -> String {
        match selector {
            ZoneSelector::Catalog(index) => self
                .get(index)
                .map(TimeZoneDescriptor::label)
                .unwrap_or_else(|| format!("#{index}")),
            ZoneSelector::Custom(offset) => offset.to_string(),
        }
    }

    /// Best catalog entry for the machine's own zone, if any.
    pub fn default_for_system(&self) -> Option<usize> {
        self.default_for(&TimeZone::system(), Timestamp::now(), locale_region().as_deref())
    }

    /// Best catalog entry for `tz` at `now`.
    ///
    /// Tries the zone's IANA name first. Otherwise collects catalog zones
    /// whose offset at `now` equals `tz`'s and ranks them by `region`
    /// (a locale region code such as `ZA`).
    pub fn default_for(&self, tz: &TimeZone, now: Timestamp, region: Option<&str>) -> Option<usize> {
        if let Some(name) = tz.iana_name() {
            if let Some(index) = self.position_of(name) {
                debug!("system zone {name} found in catalog");
                return Some(index);
            }
        }

        let offset = tz.to_offset(now);
        let mut candidates: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, d)| {
                d.time_zone()
                    .map(|z| z.to_offset(now) == offset)
                    .unwrap_or(false)
            })
            .map(|(i, _)| i)
            .collect();

        if let Some(region) = region {
            candidates.sort_by_key(|&i| region_score(&self.entries[i], region));
        }
        debug!("system offset {offset} matched catalog entries {candidates:?}");
        candidates.first().copied()
    }
}

/// 0 = region in the IANA name, 1 = region in the label, 2 = no match.
fn region_score(desc: &TimeZoneDescriptor, region: &str) -> u8 {
    let region = region.to_ascii_lowercase();
    if desc.iana_name.to_ascii_lowercase().contains(&region) {
        0
    } else if desc.region.to_ascii_lowercase().contains(&region) {
        1
    } else {
        2
    }
}

/// Region part of the locale environment, e.g. `ZA` from `en_ZA.UTF-8`.
pub fn locale_region() -> Option<String> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| region_of_locale(&value))
}

fn region_of_locale(locale: &str) -> Option<String> {
    let (_, tail) = locale.split_once('_')?;
    let region = tail.split(['.', '@']).next()?;
    (!region.is_empty()).then(|| region.to_string())
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
