use crate::components::common::{Painter, wrap};

const INTRO: &str = "We're pioneering the future of e-commerce with dynamic, theme-based \
shopping experiences. Our platform demonstrates how design can fundamentally transform user \
interaction and engagement, creating personalized journeys that adapt to individual \
preferences and contexts.";

const FEATURES: [(&str, &str); 4] = [
    (
        "Our Mission",
        "To revolutionize online shopping with innovative theme-based experiences that adapt \
         to user preferences and enhance engagement.",
    ),
    (
        "Our Team",
        "A diverse group of designers, developers, and product experts passionate about \
         creating exceptional user experiences.",
    ),
    (
        "Our Values",
        "Innovation, quality, user-centricity, and continuous improvement drive everything we \
         do at ThemeStore.",
    ),
    (
        "Our Commitment",
        "Dedicated to providing secure, accessible, and delightful shopping experiences for \
         customers worldwide.",
    ),
];

const STORY: [&str; 3] = [
    "Founded in 2024, ThemeStore emerged from a simple yet powerful idea: what if online \
     shopping could adapt its entire interface to match user preferences and contexts?",
    "We envisioned a shopping experience that could transform itself - from minimalist and \
     professional for focused buyers, to vibrant and playful for exploratory shoppers, to \
     sophisticated and elegant for luxury seekers.",
    "Today, ThemeStore represents the cutting edge of adaptive user interface design.",
];

const NUMBERS: [(&str, &str); 4] = [
    ("3", "Unique Themes"),
    ("100%", "Responsive Design"),
    ("24/7", "Support Available"),
    ("∞", "Possibilities"),
];

pub fn render_about(painter: &Painter) -> Vec<String> {
    let layout = painter.style().layout;
    let width = layout.card_width * layout.grid_columns;
    let inner = layout.card_width.saturating_sub(4);

    let mut lines = vec![painter.title("About ThemeStore")];
    lines.extend(wrap(INTRO, width).iter().map(|line| painter.muted(line)));
    lines.extend(painter.gap());

    for (title, description) in FEATURES {
        let mut card = vec![painter.title(title)];
        card.extend(wrap(description, inner));
        lines.extend(painter.frame(&card, layout.card_width));
    }
    lines.extend(painter.gap());

    lines.push(painter.title("Our Story"));
    for paragraph in STORY {
        lines.extend(wrap(paragraph, width));
        lines.push(String::new());
    }

    lines.push(painter.title("By the Numbers"));
    lines.push(
        NUMBERS
            .iter()
            .map(|(value, label)| format!("{} {}", painter.accent(value), painter.muted(label)))
            .collect::<Vec<_>>()
            .join("   "),
    );
    lines
}
