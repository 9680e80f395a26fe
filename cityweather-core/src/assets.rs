//! Mapping from an OpenWeather condition code and local hour to the pair of
//! images shown on screen.
//!
//! The mapping is a static rule table scanned in order. Codes outside every
//! listed range fall back to the clear-night pair, so [`select_assets`] is
//! total over `i32`.

use std::{fmt, ops::RangeInclusive};

use serde::Serialize;

/// Hours (local, inclusive) that count as daytime for clear skies.
pub const DAYTIME_HOURS: RangeInclusive<u32> = 6..=18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForegroundAsset {
    Storm,
    Drizzle,
    Rainy,
    Snow,
    FogMist,
    Clear,
    Cloudy,
}

impl ForegroundAsset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForegroundAsset::Storm => "storm",
            ForegroundAsset::Drizzle => "drizzle",
            ForegroundAsset::Rainy => "rainy",
            ForegroundAsset::Snow => "snow",
            ForegroundAsset::FogMist => "fog_mist",
            ForegroundAsset::Clear => "clear",
            ForegroundAsset::Cloudy => "cloudy",
        }
    }
}

impl fmt::Display for ForegroundAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundAsset {
    Storm,
    Drizzle,
    Rainy,
    Snow,
    Fog,
    ClearDay,
    ClearNight,
    Cloudy,
}

impl BackgroundAsset {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundAsset::Storm => "storm",
            BackgroundAsset::Drizzle => "drizzle",
            BackgroundAsset::Rainy => "rainy",
            BackgroundAsset::Snow => "snow",
            BackgroundAsset::Fog => "fog",
            BackgroundAsset::ClearDay => "clear_day",
            BackgroundAsset::ClearNight => "clear_night",
            BackgroundAsset::Cloudy => "cloudy",
        }
    }
}

impl fmt::Display for BackgroundAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AssetSelection {
    pub category: Category,
    pub foreground: ForegroundAsset,
    pub background: BackgroundAsset,
}

impl AssetSelection {
    const fn new(
        category: Category,
        foreground: ForegroundAsset,
        background: BackgroundAsset,
    ) -> Self {
        Self {
            category,
            foreground,
            background,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeOfDay {
    Any,
    Day,
    Night,
}

impl TimeOfDay {
    fn matches(self, hour: u32) -> bool {
        match self {
            TimeOfDay::Any => true,
            TimeOfDay::Day => DAYTIME_HOURS.contains(&hour),
            TimeOfDay::Night => !DAYTIME_HOURS.contains(&hour),
        }
    }
}

struct Rule {
    codes: RangeInclusive<i32>,
    time_of_day: TimeOfDay,
    selection: AssetSelection,
}

const fn rule(
    codes: RangeInclusive<i32>,
    time_of_day: TimeOfDay,
    category: Category,
    foreground: ForegroundAsset,
    background: BackgroundAsset,
) -> Rule {
    Rule {
        codes,
        time_of_day,
        selection: AssetSelection::new(category, foreground, background),
    }
}

use BackgroundAsset as Bg;
use ForegroundAsset as Fg;

static RULES: [Rule; 8] = [
    rule(200..=232, TimeOfDay::Any, Category::Thunderstorm, Fg::Storm, Bg::Storm),
    rule(300..=321, TimeOfDay::Any, Category::Drizzle, Fg::Drizzle, Bg::Drizzle),
    rule(500..=531, TimeOfDay::Any, Category::Rain, Fg::Rainy, Bg::Rainy),
    rule(600..=622, TimeOfDay::Any, Category::Snow, Fg::Snow, Bg::Snow),
    rule(701..=781, TimeOfDay::Any, Category::Atmosphere, Fg::FogMist, Bg::Fog),
    rule(800..=800, TimeOfDay::Day, Category::Clear, Fg::Clear, Bg::ClearDay),
    rule(800..=800, TimeOfDay::Night, Category::Clear, Fg::Clear, Bg::ClearNight),
    rule(801..=804, TimeOfDay::Any, Category::Clouds, Fg::Cloudy, Bg::Cloudy),
];

pub const FALLBACK: AssetSelection =
    AssetSelection::new(Category::Unknown, Fg::Clear, Bg::ClearNight);

/// Pick the foreground/background pair for `code` at local `hour` (0-23).
pub fn select_assets(code: i32, hour: u32) -> AssetSelection {
    RULES
        .iter()
        .find(|r| r.codes.contains(&code) && r.time_of_day.matches(hour))
        .map(|r| r.selection)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(code: i32, hour: u32) -> (ForegroundAsset, BackgroundAsset) {
        let s = select_assets(code, hour);
        (s.foreground, s.background)
    }

    #[test]
    fn rules_never_overlap_and_gaps_fall_back() {
        for code in -100..=1000 {
            for hour in 0..24 {
                let matching = RULES
                    .iter()
                    .filter(|r| r.codes.contains(&code) && r.time_of_day.matches(hour))
                    .count();
                assert!(matching <= 1, "code {code} hour {hour} matched {matching} rules");

                let selection = select_assets(code, hour);
                if matching == 0 {
                    assert_eq!(selection, FALLBACK, "code {code} hour {hour}");
                }
            }
        }
    }

    #[test]
    fn range_boundaries() {
        assert_eq!(pair(200, 12), (Fg::Storm, Bg::Storm));
        assert_eq!(pair(232, 0), (Fg::Storm, Bg::Storm));
        assert_eq!(pair(300, 3), (Fg::Drizzle, Bg::Drizzle));
        assert_eq!(pair(321, 3), (Fg::Drizzle, Bg::Drizzle));
        assert_eq!(pair(500, 9), (Fg::Rainy, Bg::Rainy));
        assert_eq!(pair(531, 9), (Fg::Rainy, Bg::Rainy));
        assert_eq!(pair(600, 21), (Fg::Snow, Bg::Snow));
        assert_eq!(pair(622, 21), (Fg::Snow, Bg::Snow));
        assert_eq!(pair(701, 7), (Fg::FogMist, Bg::Fog));
        assert_eq!(pair(781, 7), (Fg::FogMist, Bg::Fog));
        assert_eq!(pair(801, 23), (Fg::Cloudy, Bg::Cloudy));
        assert_eq!(pair(804, 23), (Fg::Cloudy, Bg::Cloudy));
    }

    #[test]
    fn gaps_between_ranges_fall_back() {
        for code in [199, 233, 322, 499, 532, 599, 623, 700, 782, 805] {
            assert_eq!(select_assets(code, 12), FALLBACK, "code {code}");
        }
    }

    #[test]
    fn clear_sky_depends_on_hour() {
        for hour in 0..24 {
            let expected = if (6..=18).contains(&hour) {
                Bg::ClearDay
            } else {
                Bg::ClearNight
            };
            let selection = select_assets(800, hour);
            assert_eq!(selection.category, Category::Clear);
            assert_eq!(selection.foreground, Fg::Clear);
            assert_eq!(selection.background, expected, "hour {hour}");
        }

        assert_eq!(select_assets(800, 6).background, Bg::ClearDay);
        assert_eq!(select_assets(800, 18).background, Bg::ClearDay);
        assert_eq!(select_assets(800, 5).background, Bg::ClearNight);
        assert_eq!(select_assets(800, 19).background, Bg::ClearNight);
    }

    #[test]
    fn unknown_codes_use_fallback_regardless_of_hour() {
        for code in [-1, 150, 999, i32::MIN, i32::MAX] {
            for hour in 0..24 {
                assert_eq!(pair(code, hour), (Fg::Clear, Bg::ClearNight));
            }
        }
    }

    #[test]
    fn broken_clouds_are_cloudy_all_day() {
        for hour in 0..24 {
            assert_eq!(pair(803, hour), (Fg::Cloudy, Bg::Cloudy));
        }
    }

    #[test]
    fn identifiers_are_stable() {
        assert_eq!(Fg::FogMist.to_string(), "fog_mist");
        assert_eq!(Bg::ClearDay.as_str(), "clear_day");
        assert_eq!(
            serde_json::to_string(&Bg::ClearNight).unwrap(),
            "\"clear_night\""
        );
    }
}
