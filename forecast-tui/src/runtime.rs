//! Terminal lifecycle and the event loop.
//!
//! One cooperative loop owns all state: it drains fetch completions from
//! the channel, draws a frame, and polls for input with a short timeout.
//! Effects returned by the state machine are spawned as tokio tasks that
//! report back over the same channel.

use std::{
    io::{self, Stdout},
    sync::Arc,
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;

use crate::app::{App, Effect, Msg};
use crate::ui;
use forecast_core::WeatherService;

pub async fn run(service: Arc<dyn WeatherService>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, service).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    service: Arc<dyn WeatherService>,
) -> Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();

    info!("forecast screen started");

    loop {
        // Fold in whatever the fetch tasks finished since the last frame.
        while let Ok(msg) = rx.try_recv() {
            app.apply(msg);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(effect) = app.on_key(key) {
                        dispatch(effect, Arc::clone(&service), tx.clone());
                    }
                }
            }
        }

        if app.should_quit {
            info!("forecast screen closed");
            return Ok(());
        }
    }
}

/// Run one effect to completion on its own task.
fn dispatch(effect: Effect, service: Arc<dyn WeatherService>, tx: mpsc::UnboundedSender<Msg>) {
    tokio::spawn(async move {
        let msg = match effect {
            Effect::FetchSuggestions { seq, query } => {
                Msg::SuggestionsLoaded { seq, result: service.search(&query).await }
            }
            Effect::FetchForecast { location } => {
                Msg::ForecastLoaded { result: service.forecast(&location).await }
            }
        };
        // The receiver only goes away on shutdown; nothing to do then.
        let _ = tx.send(msg);
    });
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
