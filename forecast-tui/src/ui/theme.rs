use forecast_core::Backdrop;
use ratatui::style::Color;

/// Frame-wide color pair derived from the current backdrop.
///
/// The terminal stand-in for the original's full-page background image:
/// repainted every frame, last write wins.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Fill behind everything.
    pub base: Color,
    /// Borders, highlights, the focused card.
    pub accent: Color,
}

pub fn for_backdrop(backdrop: Backdrop) -> Theme {
    match backdrop {
        Backdrop::Beach => Theme { base: Color::Rgb(18, 70, 110), accent: Color::Yellow },
        Backdrop::Clouds => Theme { base: Color::Rgb(58, 63, 74), accent: Color::White },
        Backdrop::Rain => Theme { base: Color::Rgb(22, 38, 64), accent: Color::LightBlue },
        Backdrop::Snow => Theme { base: Color::Rgb(72, 78, 98), accent: Color::White },
        Backdrop::Mist => Theme { base: Color::Rgb(52, 58, 58), accent: Color::Gray },
        Backdrop::Scenic => Theme { base: Color::Rgb(20, 52, 42), accent: Color::LightGreen },
    }
}
