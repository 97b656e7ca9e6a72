//! The forecast screen's state machine.
//!
//! Keystrokes and fetch completions come in, state transitions and
//! [`Effect`]s come out. The methods here never touch the network or the
//! terminal, which keeps every transition testable; the runtime spawns a
//! task per effect and feeds the answers back as [`Msg`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use forecast_core::client::MIN_QUERY_CHARS;
use forecast_core::{Backdrop, ClientError, ForecastDay, Location, Suggestion};

/// Day cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Completion of an asynchronous fetch, delivered over the runtime channel.
#[derive(Debug)]
pub enum Msg {
    SuggestionsLoaded { seq: u64, result: Result<Vec<Suggestion>, ClientError> },
    ForecastLoaded { result: Result<Vec<ForecastDay>, ClientError> },
}

/// A fetch the runtime should spawn on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchSuggestions { seq: u64, query: String },
    FetchForecast { location: Location },
}

/// All state owned by the forecast screen.
#[derive(Debug, Default)]
pub struct App {
    /// Raw text in the search field.
    pub query: String,
    /// Current suggestion list, replaced wholesale per search response.
    pub suggestions: Vec<Suggestion>,
    /// Highlighted suggestion row, if any.
    pub suggestion_cursor: Option<usize>,
    /// The 6-day collection, replaced wholesale per forecast response.
    pub forecast: Vec<ForecastDay>,
    /// Focused card in the grid.
    pub card_cursor: usize,
    /// Day opened in the hourly overlay. Held as an index into `forecast`
    /// so the selection can never reference outside the collection.
    pub selected_day: Option<usize>,
    /// Location of the displayed (or in-flight) forecast.
    pub selected_city: Option<Location>,
    pub loading: bool,
    pub error: Option<String>,
    pub backdrop: Backdrop,
    pub should_quit: bool,
    /// Generation stamp for suggestion fetches; bumped on every edit so
    /// responses to superseded keystrokes can be recognized and dropped.
    search_seq: u64,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// The day shown in the hourly overlay, when one is open.
    pub fn open_day(&self) -> Option<&ForecastDay> {
        self.selected_day.and_then(|idx| self.forecast.get(idx))
    }

    /// Translate a key press into state transitions and at most one effect.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        // The overlay captures input while open; Esc is its close control.
        if self.selected_day.is_some() {
            if key.code == KeyCode::Esc {
                self.close_day();
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Up => {
                self.on_vertical(-1);
                None
            }
            KeyCode::Down => {
                self.on_vertical(1);
                None
            }
            KeyCode::Left => {
                self.on_horizontal(-1);
                None
            }
            KeyCode::Right => {
                self.on_horizontal(1);
                None
            }
            KeyCode::Enter => self.on_enter(),
            _ => None,
        }
    }

    /// Fold a fetch completion into the state.
    pub fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::SuggestionsLoaded { seq, result } => {
                // Not the answer to the latest keystroke: drop it.
                if seq != self.search_seq {
                    return;
                }
                self.suggestion_cursor = None;
                match result {
                    Ok(list) => self.suggestions = list,
                    Err(err) => {
                        self.suggestions.clear();
                        self.error = Some(err.to_string());
                    }
                }
            }
            Msg::ForecastLoaded { result } => {
                // Loading resets on every completion, success or failure.
                self.loading = false;
                match result {
                    Ok(days) => {
                        self.backdrop = days
                            .first()
                            .map(|d| Backdrop::for_condition(&d.day.condition.text))
                            .unwrap_or_default();
                        self.forecast = days;
                        self.query.clear();
                        self.card_cursor = 0;
                    }
                    Err(err) => self.error = Some(err.to_string()),
                }
            }
        }
    }

    fn push_char(&mut self, c: char) -> Option<Effect> {
        self.query.push(c);
        self.query_edited()
    }

    fn pop_char(&mut self) -> Option<Effect> {
        self.query.pop()?;
        self.query_edited()
    }

    /// Every edit re-evaluates the length gate and invalidates any
    /// in-flight search, whichever side of the gate it lands on.
    fn query_edited(&mut self) -> Option<Effect> {
        self.suggestion_cursor = None;
        self.search_seq += 1;

        if self.query.chars().count() < MIN_QUERY_CHARS {
            self.suggestions.clear();
            return None;
        }

        Some(Effect::FetchSuggestions { seq: self.search_seq, query: self.query.clone() })
    }

    fn on_vertical(&mut self, delta: isize) {
        if !self.suggestions.is_empty() {
            let len = self.suggestions.len() as isize;
            let next = match self.suggestion_cursor {
                None if delta > 0 => 0,
                None => len - 1,
                Some(idx) => (idx as isize + delta).rem_euclid(len),
            };
            self.suggestion_cursor = Some(next as usize);
        } else {
            self.move_card(delta * GRID_COLUMNS as isize);
        }
    }

    fn on_horizontal(&mut self, delta: isize) {
        if self.suggestions.is_empty() {
            self.move_card(delta);
        }
    }

    fn move_card(&mut self, delta: isize) {
        let len = self.forecast.len() as isize;
        if len == 0 {
            return;
        }
        self.card_cursor = (self.card_cursor as isize + delta).rem_euclid(len) as usize;
    }

    fn on_enter(&mut self) -> Option<Effect> {
        if let Some(idx) = self.suggestion_cursor {
            return self.choose_suggestion(idx);
        }
        if !self.query.is_empty() {
            return self.submit();
        }
        if !self.forecast.is_empty() {
            self.selected_day = Some(self.card_cursor.min(self.forecast.len() - 1));
        }
        None
    }

    /// Select a suggestion row outright (the click analogue).
    pub fn choose_suggestion(&mut self, index: usize) -> Option<Effect> {
        let suggestion = self.suggestions.get(index)?;
        let location = Location::new(suggestion.name.clone(), suggestion.country.clone());
        Some(self.start_forecast(location))
    }

    /// Submit the typed text: fetch the first suggestion whose name equals
    /// it case-insensitively, or surface a validation message.
    pub fn submit(&mut self) -> Option<Effect> {
        // The submit control is inert while a forecast is loading.
        if self.loading {
            return None;
        }

        let typed = self.query.to_lowercase();
        let matched = self
            .suggestions
            .iter()
            .find(|s| s.name.to_lowercase() == typed)
            .map(|s| Location::new(s.name.clone(), s.country.clone()));

        match matched {
            Some(location) => Some(self.start_forecast(location)),
            None => {
                self.error =
                    Some(format!("No suggestion matches \"{}\" - pick one from the list", self.query));
                None
            }
        }
    }

    /// All transitions observable before the forecast response arrives.
    fn start_forecast(&mut self, location: Location) -> Effect {
        self.loading = true;
        self.error = None;
        self.forecast.clear();
        self.selected_day = None;
        self.card_cursor = 0;
        self.selected_city = Some(location.clone());
        self.suggestions.clear();
        self.suggestion_cursor = None;
        Effect::FetchForecast { location }
    }

    pub fn close_day(&mut self) {
        self.selected_day = None;
    }
}
