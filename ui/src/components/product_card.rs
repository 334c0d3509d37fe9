use crate::components::common::{Painter, clamp_lines, wrap};
use console::measure_text_width;
use server::catalog::Product;
use server::catalog::model::MAX_RATING;

const TITLE_LINES: usize = 2;

/// Five stars, filled up to the whole part of the rating
pub fn stars(rate: f64) -> String {
    let filled = rate.clamp(0.0, MAX_RATING).floor() as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

pub fn render_product_card(painter: &Painter, product: &Product) -> Vec<String> {
    let style = painter.style();
    let inner = style.layout.card_width.saturating_sub(4);
    let palette = style.palette;
    // Room for the ellipsis of a clamped line
    let wrap_width = inner.saturating_sub(1);

    let mut lines: Vec<String> = clamp_lines(wrap(&product.title, wrap_width), TITLE_LINES)
        .iter()
        .map(|line| painter.title(line))
        .collect();

    lines.push(format!(
        "{} {}",
        painter.fg(&stars(product.rating.rate), palette.rating),
        painter.muted(&format!("({})", product.rating.count))
    ));

    let price = format!("${:.2}", product.price);
    let category = product.category.clone();
    let spacing = inner.saturating_sub(measure_text_width(&price) + measure_text_width(&category));
    if spacing > 0 {
        lines.push(format!(
            "{}{}{}",
            painter.strong(&price, palette.price),
            " ".repeat(spacing),
            painter.fg(&category, palette.category)
        ));
    } else {
        lines.push(painter.strong(&price, palette.price));
        lines.extend(
            clamp_lines(wrap(&category, wrap_width), 1)
                .iter()
                .map(|line| painter.fg(line, palette.category)),
        );
    }

    lines.push(painter.accent("[ Add to Cart ]"));

    painter.frame(&lines, style.layout.card_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeId;
    use server::catalog::Rating;

    fn product() -> Product {
        Product {
            title: "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops and then some more words"
                .to_string(),
            category: "men's clothing".to_string(),
            price: 109.95,
            rating: Rating {
                rate: 3.9,
                count: 120.0,
            },
            ..Product::default()
        }
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3.9), "★★★☆☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(5.0), "★★★★★");
    }

    #[test]
    fn test_card_fits_its_grid_cell() {
        for theme in ThemeId::ALL {
            let painter = Painter::plain(theme);
            let card = render_product_card(&painter, &product());
            let width = theme.style().layout.card_width;

            assert!(card.iter().all(|line| measure_text_width(line) <= width));
            assert!(card.iter().any(|line| line.contains("$109.95")));
            assert!(card.iter().any(|line| line.contains("(120)")));
        }
    }

    #[test]
    fn test_wide_titles_stay_inside_the_card() {
        let wide = Product {
            title: "ワイヤレスイヤホン 高音質 ノイズキャンセリング 長時間再生".to_string(),
            category: "電子機器".to_string(),
            ..product()
        };

        for theme in ThemeId::ALL {
            let card = render_product_card(&Painter::plain(theme), &wide);
            let width = theme.style().layout.card_width;

            assert!(
                card.iter().all(|line| measure_text_width(line) <= width),
                "{theme}: {card:#?}"
            );
        }
    }
}
