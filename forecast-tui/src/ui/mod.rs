//! Rendering for the forecast screen.
//!
//! Pure functions of the [`App`] state: search box, suggestion list,
//! status line, the 3×2 card grid, and the hourly overlay on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

mod cards;
mod hourly;
mod theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let th = theme::for_backdrop(app.backdrop);

    let outer = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(th.base).fg(Color::White))
        .title(Span::styled(
            " WEATHER FORECAST ",
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let suggestion_rows = u16::try_from(app.suggestions.len()).unwrap_or(u16::MAX).min(6);
    let suggestions_height = if suggestion_rows == 0 { 0 } else { suggestion_rows + 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // search input
            Constraint::Length(suggestions_height), // suggestion list
            Constraint::Length(1),                  // status line
            Constraint::Min(0),                     // card grid
            Constraint::Length(1),                  // help bar
        ])
        .split(inner);

    render_search(frame, app, chunks[0], th);
    if suggestions_height > 0 {
        render_suggestions(frame, app, chunks[1], th);
    }
    render_status(frame, app, chunks[2], th);
    cards::render(frame, app, chunks[3], th);
    render_help(frame, chunks[4]);

    hourly::render(frame, app, area, th);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect, th: theme::Theme) {
    let input = Paragraph::new(app.query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(th.accent))
            .title(" City "),
    );
    frame.render_widget(input, area);

    // Park the terminal cursor at the end of the query unless the overlay
    // has taken over the screen.
    if app.selected_day.is_none() && area.width > 2 {
        let offset = u16::try_from(app.query.chars().count()).unwrap_or(u16::MAX);
        let x = (area.x + 1 + offset).min(area.x + area.width - 2);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_suggestions(frame: &mut Frame, app: &App, area: Rect, th: theme::Theme) {
    let lines: Vec<Line> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(idx, suggestion)| {
            let label = format!(" {} ", suggestion.label());
            if app.suggestion_cursor == Some(idx) {
                Line::from(Span::styled(
                    label,
                    Style::default().fg(Color::Black).bg(th.accent).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(label)
            }
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(th.accent))
            .title(" Suggestions "),
    );
    frame.render_widget(list, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect, th: theme::Theme) {
    let line = if app.loading {
        Line::from(Span::styled(
            " Fetching forecast... ",
            Style::default().fg(th.accent).add_modifier(Modifier::ITALIC),
        ))
    } else if let Some(error) = &app.error {
        Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(
        " Type to search | Up/Down highlight | Enter select/open | Esc quit ",
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(help), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, Msg};
    use crate::fixtures;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(110, 40);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn loaded_app(condition: &str) -> App {
        let mut app = App::new();
        app.selected_city = Some(forecast_core::Location::new("London", "UK"));
        app.apply(Msg::ForecastLoaded { result: Ok(fixtures::forecast(condition)) });
        app
    }

    #[test]
    fn empty_screen_shows_heading_and_search_box() {
        let text = render_to_text(&App::new());
        assert!(text.contains("WEATHER FORECAST"));
        assert!(text.contains("City"));
        assert!(!text.contains("Suggestions"));
        assert!(!text.contains("6 Day Weather Forecast"));
    }

    #[test]
    fn suggestions_render_as_name_country_rows() {
        let mut app = App::new();
        app.query = "Lon".into();
        app.suggestions = vec![fixtures::london(), fixtures::suggestion(2, "Londrina", "Brazil")];

        let text = render_to_text(&app);
        assert!(text.contains("Suggestions"));
        assert!(text.contains("London, UK"));
        assert!(text.contains("Londrina, Brazil"));
    }

    #[test]
    fn loading_state_shows_the_indicator() {
        let mut app = App::new();
        app.loading = true;

        let text = render_to_text(&app);
        assert!(text.contains("Fetching forecast..."));
    }

    #[test]
    fn error_state_shows_the_message() {
        let mut app = App::new();
        app.error = Some("The weather service returned 401 Unauthorized".into());

        let text = render_to_text(&app);
        assert!(text.contains("401 Unauthorized"));
    }

    #[test]
    fn forecast_renders_six_cards_with_details() {
        let text = render_to_text(&loaded_app("Sunny"));

        assert!(text.contains("6 Day Weather Forecast"));
        assert!(text.contains("London, UK"));
        assert!(text.contains("Sunday, July 9"));
        assert!(text.contains("Friday, July 14"));
        assert!(text.contains("Wind: 19.1 kph SW"));
        assert!(text.contains("Humidity: 64%"));
        assert!(text.contains("Max: 27"));
    }

    #[test]
    fn overlay_renders_only_while_a_day_is_selected() {
        let mut app = loaded_app("Sunny");
        assert!(!render_to_text(&app).contains("Hourly Weather"));

        app.selected_day = Some(3);
        let text = render_to_text(&app);
        assert!(text.contains("Hourly Weather for 2023-07-12"));
        assert!(text.contains("Temperature"));
        assert!(text.contains("Humidity"));
        assert!(text.contains("Wind"));
        assert!(text.contains("Esc to close"));

        app.close_day();
        assert!(!render_to_text(&app).contains("Hourly Weather"));
    }

    #[test]
    fn chart_axis_uses_twelve_hour_clock_labels() {
        let mut app = loaded_app("Sunny");
        app.selected_day = Some(0);

        let text = render_to_text(&app);
        assert!(text.contains("12:00 AM"));
        assert!(text.contains("11:00 PM"));
    }
}
