//! The 6-day card grid.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use forecast_core::{Backdrop, ForecastDay};

use super::theme::Theme;
use crate::app::{App, GRID_COLUMNS};

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect, th: Theme) {
    if app.forecast.is_empty() {
        return;
    }

    let rows = app.forecast.len().div_ceil(GRID_COLUMNS);
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    constraints.extend(std::iter::repeat_n(
        Constraint::Ratio(1, u32::try_from(rows).unwrap_or(1)),
        rows,
    ));

    let chunks =
        Layout::default().direction(Direction::Vertical).constraints(constraints).split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " 6 Day Weather Forecast ",
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    if let Some(city) = &app.selected_city {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" \u{1F4CD} "), // 📍
                Span::styled(city.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            ])),
            chunks[1],
        );
    }

    for (row, days) in app.forecast.chunks(GRID_COLUMNS).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, u32::try_from(GRID_COLUMNS).unwrap_or(1));
                GRID_COLUMNS
            ])
            .split(chunks[2 + row]);

        for (col, day) in days.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            render_card(frame, day, app.card_cursor == index, columns[col], th);
        }
    }
}

fn render_card(frame: &mut Frame, day: &ForecastDay, focused: bool, area: Rect, th: Theme) {
    let border_style = if focused {
        Style::default().fg(th.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", day.card_title()),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let glyph = Backdrop::for_condition(&day.day.condition.text).glyph();

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{glyph}  ")),
            Span::styled(
                format!("{}°C", day.day.maxtemp_c.round()),
                Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(day.day.condition.text.clone()),
        Line::from(format!("Wind: {} kph {}", day.day.maxwind_kph, day.day.wind_dir)),
        Line::from(format!("Humidity: {}%", day.day.avghumidity)),
        Line::from(format!(
            "Max: {}°C  Min: {}°C",
            day.day.maxtemp_c.round(),
            day.day.mintemp_c.round()
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
