//! Theme-specific styling helpers shared by the shell and the chart.

use crate::domain::Theme;

/// Classes for the window root; the palette itself lives in `main.css`.
pub fn window_class(theme: Theme) -> String {
    format!("window {}", theme.class_name())
}

pub fn chart_text(theme: Theme) -> &'static str {
    match theme {
        Theme::Cogitator => "#d1d1d1",
        Theme::Forge => "#f1d9c4",
        Theme::Daylight => "#1c1c22",
    }
}

pub fn chart_grid(theme: Theme) -> &'static str {
    match theme {
        Theme::Cogitator => "#444444",
        Theme::Forge => "#4a2614",
        Theme::Daylight => "#d0d0d8",
    }
}

pub fn bar_border(theme: Theme) -> &'static str {
    match theme {
        Theme::Cogitator | Theme::Forge => "#1a1a1a",
        Theme::Daylight => "#ffffff",
    }
}
