use crate::components::common::Painter;
use crate::pages::Page;
use crate::theme::{ThemeOption, ThemeState};

pub const BRAND: &str = "ThemeStore";

/// Top bar: brand, navigation and the theme selector.
///
/// The active page and theme are bracketed. While a theme change is in
/// flight the selector shows a switching marker.
pub fn render_header(
    painter: &Painter,
    active: Page,
    state: ThemeState,
    options: &[ThemeOption],
) -> Vec<String> {
    let palette = painter.style().palette;

    let nav = Page::ALL
        .iter()
        .map(|page| {
            if *page == active {
                painter.accent(&format!("[{}]", page.label()))
            } else {
                painter.muted(page.label())
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    let selector = options
        .iter()
        .map(|(id, label)| {
            if *id == state.current {
                painter.accent(&format!("[{label}]"))
            } else {
                painter.muted(label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut theme_line = format!("Theme: {selector}");
    if state.transitioning {
        theme_line.push_str(&painter.muted("  (switching…)"));
    }

    let width = painter.style().layout.card_width * painter.style().layout.grid_columns;
    vec![
        painter.strong(BRAND, palette.header_accent),
        nav,
        theme_line,
        painter.rule(width),
    ]
}
