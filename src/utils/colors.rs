//! Terminal colours for calendar bars.

use crate::models::EventKind;
use ansi_term::{Colour, Style};

const DEMO_PALETTE: [Colour; 4] = [Colour::Purple, Colour::Cyan, Colour::Blue, Colour::Yellow];

/// Bar style: orders are always blue, demos rotate by lane so
/// neighbouring lanes stay distinguishable.
pub fn bar_style(kind: EventKind, lane: usize) -> Style {
    match kind {
        EventKind::Order => Colour::White.on(Colour::Blue),
        EventKind::Demo => Colour::Black.on(DEMO_PALETTE[lane % DEMO_PALETTE.len()]),
    }
}

/// Padding days outside the displayed month.
pub fn dim() -> Style {
    Colour::Fixed(244).normal()
}

pub fn weekend() -> Style {
    Colour::Red.normal()
}

pub fn today() -> Style {
    Style::new().bold().underline()
}

pub fn paint(enabled: bool, style: Style, text: &str) -> String {
    if enabled {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}
