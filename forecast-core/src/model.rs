use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A candidate location returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: i64,
    pub name: String,
    pub country: String,
}

impl Suggestion {
    /// Display form used by the suggestion list, e.g. "London, UK".
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// The location whose forecast is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub country: String,
}

impl Location {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self { name: name.into(), country: country.into() }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

/// One calendar day's summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub condition: Condition,
    pub maxwind_kph: f64,
    pub wind_dir: String,
    pub avghumidity: f64,
}

/// One hourly reading within a forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourReading {
    /// Location-local timestamp, e.g. "2023-07-09 14:00".
    #[serde(with = "wa_datetime")]
    pub time: NaiveDateTime,
    pub temp_c: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub humidity: f64,
}

impl HourReading {
    /// 12-hour clock label for the chart axis, e.g. "02:00 PM".
    pub fn clock_label(&self) -> String {
        self.time.format("%I:%M %p").to_string()
    }
}

/// One calendar day's weather summary plus its hourly readings, ordered by
/// time (24 entries expected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: DaySummary,
    pub hour: Vec<HourReading>,
}

impl ForecastDay {
    /// Card title, e.g. "Sunday, July 9".
    pub fn card_title(&self) -> String {
        self.date.format("%A, %B %-d").to_string()
    }
}

/// WeatherAPI.com serializes hour timestamps as local time without a zone
/// marker ("%Y-%m-%d %H:%M"), which chrono's default format rejects.
mod wa_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(de)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour_at(raw: &str) -> HourReading {
        HourReading {
            time: NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").expect("valid timestamp"),
            temp_c: 20.0,
            condition: Condition { text: "Sunny".into(), icon: String::new() },
            wind_kph: 5.0,
            wind_dir: "N".into(),
            humidity: 50.0,
        }
    }

    #[test]
    fn suggestion_label_joins_name_and_country() {
        let s = Suggestion { id: 1, name: "London".into(), country: "UK".into() };
        assert_eq!(s.label(), "London, UK");
    }

    #[test]
    fn hour_parses_weatherapi_local_timestamps() {
        let parsed: HourReading = serde_json::from_value(serde_json::json!({
            "time": "2023-07-09 14:00",
            "temp_c": 24.5,
            "condition": { "text": "Partly Cloudy", "icon": "//cdn/icon.png" },
            "wind_kph": 11.2,
            "wind_dir": "SW",
            "humidity": 61.0,
        }))
        .expect("hour entry must parse");

        assert_eq!(parsed.clock_label(), "02:00 PM");
        assert_eq!(parsed.condition.text, "Partly Cloudy");
    }

    #[test]
    fn clock_label_is_twelve_hour_with_meridiem() {
        assert_eq!(hour_at("2023-07-09 00:00").clock_label(), "12:00 AM");
        assert_eq!(hour_at("2023-07-09 09:00").clock_label(), "09:00 AM");
        assert_eq!(hour_at("2023-07-09 23:00").clock_label(), "11:00 PM");
    }

    #[test]
    fn card_title_spells_out_weekday_and_month() {
        let day = ForecastDay {
            date: NaiveDate::from_ymd_opt(2023, 7, 9).expect("valid date"),
            day: DaySummary {
                maxtemp_c: 28.0,
                mintemp_c: 17.0,
                condition: Condition { text: "Sunny".into(), icon: String::new() },
                maxwind_kph: 14.0,
                wind_dir: "W".into(),
                avghumidity: 55.0,
            },
            hour: vec![],
        };

        assert_eq!(day.card_title(), "Sunday, July 9");
    }
}
