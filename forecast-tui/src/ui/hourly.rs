//! Hourly detail overlay: three series charted over one day's hours.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType},
};

use super::theme::Theme;
use crate::app::App;

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect, th: Theme) {
    // Visibility is a pure function of the selection.
    let Some(day) = app.open_day() else {
        return;
    };

    let rect = centered_rect(area, 84, 72);
    frame.render_widget(Clear, rect);

    let temperature: Vec<(f64, f64)> = series(day, |h| h.temp_c);
    let humidity: Vec<(f64, f64)> = series(day, |h| h.humidity);
    let wind: Vec<(f64, f64)> = series(day, |h| h.wind_kph);

    let datasets = vec![
        Dataset::default()
            .name("Temperature (°C)")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&temperature),
        Dataset::default()
            .name("Humidity (%)")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&humidity),
        Dataset::default()
            .name("Wind Speed (kph)")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&wind),
    ];

    let x_max = day.hour.len().saturating_sub(1).max(1) as f64;

    // Y always starts at zero; the top rounds up to the next ten.
    let peak = day
        .hour
        .iter()
        .map(|h| h.temp_c.max(h.humidity).max(h.wind_kph))
        .fold(0.0_f64, f64::max);
    let y_max = ((peak / 10.0).ceil() * 10.0).max(10.0);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(th.base).fg(Color::White))
        .border_style(Style::default().fg(th.accent))
        .title(format!(" Hourly Weather for {} ", day.date))
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(" Esc to close ").right_aligned());

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(hour_labels(day)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    "0".to_string(),
                    format!("{}", y_max / 2.0),
                    format!("{y_max}"),
                ]),
        );

    frame.render_widget(chart, rect);
}

fn series(
    day: &forecast_core::ForecastDay,
    pick: impl Fn(&forecast_core::HourReading) -> f64,
) -> Vec<(f64, f64)> {
    day.hour.iter().enumerate().map(|(idx, h)| (idx as f64, pick(h))).collect()
}

/// Clock labels at the quarter points of the day.
fn hour_labels(day: &forecast_core::ForecastDay) -> Vec<String> {
    let len = day.hour.len();
    if len == 0 {
        return Vec::new();
    }

    let mut indices = vec![0, len / 4, len / 2, 3 * len / 4, len - 1];
    indices.dedup();

    indices.into_iter().map(|idx| day.hour[idx].clock_label()).collect()
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::NaiveDate;

    #[test]
    fn hour_labels_cover_the_day_at_quarter_points() {
        let day = fixtures::day(
            NaiveDate::from_ymd_opt(2023, 7, 9).expect("valid date"),
            "Sunny",
        );

        let labels = hour_labels(&day);
        assert_eq!(
            labels,
            vec!["12:00 AM", "06:00 AM", "12:00 PM", "06:00 PM", "11:00 PM"]
        );
    }

    #[test]
    fn hour_labels_handle_sparse_days() {
        let mut day = fixtures::day(
            NaiveDate::from_ymd_opt(2023, 7, 9).expect("valid date"),
            "Sunny",
        );
        day.hour.truncate(1);
        assert_eq!(hour_labels(&day), vec!["12:00 AM"]);

        day.hour.clear();
        assert!(hour_labels(&day).is_empty());
    }

    #[test]
    fn centered_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 84, 72);

        assert!(rect.x > area.x);
        assert!(rect.y > area.y);
        assert!(rect.right() < area.right());
        assert!(rect.bottom() < area.bottom());
    }
}
