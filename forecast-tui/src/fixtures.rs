//! Shared test fixtures: a six-day forecast with full hourly breakdowns.

use chrono::NaiveDate;
use forecast_core::{Condition, DaySummary, ForecastDay, HourReading, Suggestion};

pub fn suggestion(id: i64, name: &str, country: &str) -> Suggestion {
    Suggestion { id, name: name.into(), country: country.into() }
}

pub fn london() -> Suggestion {
    suggestion(1, "London", "UK")
}

pub fn day(date: NaiveDate, condition: &str) -> ForecastDay {
    let cond = Condition { text: condition.into(), icon: "//cdn/day.png".into() };

    let hour = (0..24)
        .map(|h| HourReading {
            time: date.and_hms_opt(h, 0, 0).expect("valid hour"),
            temp_c: 15.0 + f64::from(h) * 0.5,
            condition: cond.clone(),
            wind_kph: 10.0,
            wind_dir: "SW".into(),
            humidity: 60.0,
        })
        .collect();

    ForecastDay {
        date,
        day: DaySummary {
            maxtemp_c: 27.4,
            mintemp_c: 15.0,
            condition: cond,
            maxwind_kph: 19.1,
            wind_dir: "SW".into(),
            avghumidity: 64.0,
        },
        hour,
    }
}

/// Six consecutive days starting 2023-07-09 (a Sunday), all with the given
/// condition text.
pub fn forecast(condition: &str) -> Vec<ForecastDay> {
    (9..15)
        .map(|d| day(NaiveDate::from_ymd_opt(2023, 7, d).expect("valid date"), condition))
        .collect()
}
