use crate::components::common::{Painter, pad};
use crate::theme::ThemeId;

/// Sidebar of the Dark Pro layout
pub const SIDEBAR_CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Jewelry", "Books"];

const SIDEBAR_WIDTH: usize = 16;

/// Lay `cards` out in rows of the theme's grid column count
pub fn grid(painter: &Painter, cards: Vec<Vec<String>>) -> Vec<String> {
    let layout = painter.style().layout;
    let columns = layout.grid_columns.max(1);
    let mut out = Vec::new();

    for row in cards.chunks(columns) {
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..height {
            let line = row
                .iter()
                .map(|card| {
                    let cell = card.get(i).map(String::as_str).unwrap_or("");
                    pad(cell, layout.card_width)
                })
                .collect::<Vec<_>>()
                .join(" ");
            out.push(line.trim_end().to_string());
        }
    }
    out
}

/// Compose the full page: header on top, then the body. The Dark Pro theme
/// puts a category sidebar next to the body.
pub fn render_layout(painter: &Painter, header: Vec<String>, body: Vec<String>) -> String {
    let mut lines = header;
    lines.extend(painter.gap());

    if painter.theme() == ThemeId::Theme2 {
        let mut sidebar = vec![painter.title("Categories"), String::new()];
        sidebar.extend(
            SIDEBAR_CATEGORIES
                .iter()
                .map(|category| painter.muted(category)),
        );

        let height = sidebar.len().max(body.len());
        for i in 0..height {
            let left = sidebar.get(i).map(String::as_str).unwrap_or("");
            let right = body.get(i).map(String::as_str).unwrap_or("");
            lines.push(
                format!("{}│ {right}", pad(left, SIDEBAR_WIDTH))
                    .trim_end()
                    .to_string(),
            );
        }
    } else {
        lines.extend(body);
    }

    let mut page = lines.join("\n");
    page.push('\n');
    page
}
