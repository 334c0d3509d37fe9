use crate::components::common::{Painter, wrap};
use crate::components::{grid, render_product_card};
use crate::services::FetchState;

const HERO_TEXT: &str = "Discover amazing products with our revolutionary multi-theme shopping \
experience. Switch between themes to see how design can transform your browsing experience.";

const STATS: [(&str, &str); 3] = [
    ("10K+", "Happy Customers"),
    ("50K+", "Products Sold"),
    ("99%", "Satisfaction Rate"),
];

/// Body of the Home page for the current feed state
pub fn render_home(painter: &Painter, state: &FetchState) -> Vec<String> {
    let layout = painter.style().layout;
    let width = layout.card_width * layout.grid_columns;

    if state.loading {
        return vec![painter.fg("⠋ Loading products…", painter.style().palette.status_loading)];
    }

    if let Some(error) = &state.error {
        return vec![
            painter.title("Oops! Something went wrong"),
            String::new(),
            painter.error(error),
            String::new(),
            painter.muted("Run `storefront home` again to retry."),
        ];
    }

    let mut lines = vec![painter.title("Welcome to ThemeStore")];
    lines.extend(wrap(HERO_TEXT, width).iter().map(|line| painter.muted(line)));
    lines.extend(painter.gap());

    lines.push(painter.title("Featured Products"));
    lines.push(painter.rule(width));
    if state.products.is_empty() {
        lines.push(painter.muted("No products available right now."));
    } else {
        let cards = state
            .products
            .iter()
            .map(|product| render_product_card(painter, product))
            .collect();
        lines.extend(grid(painter, cards));
    }
    lines.extend(painter.gap());

    let stats = STATS
        .iter()
        .map(|(value, label)| format!("{} {}", painter.bold(value), painter.muted(label)))
        .collect::<Vec<_>>()
        .join("   ");
    lines.push(stats);
    lines
}
