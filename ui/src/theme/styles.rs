//! Per-theme style tables. Pure view data: nothing in here changes state.

use crate::theme::types::ThemeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // === Core Text Colors ===
    pub text_primary: &'static str,
    pub text_muted: &'static str,

    // === Layout Colors ===
    pub surface: &'static str,
    pub card_border: &'static str,

    // === Accent Colors ===
    pub primary_accent: &'static str,
    pub title_accent: &'static str,
    pub header_accent: &'static str,

    // === Catalog Colors ===
    pub price: &'static str,
    pub rating: &'static str,
    pub category: &'static str,

    // === Status Colors ===
    pub status_success: &'static str,
    pub status_error: &'static str,
    pub status_loading: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FontWeight {
    Medium,
    Semibold,
    Bold,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub family: FontFamily,
    pub title_weight: FontWeight,
    pub uppercase_titles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFrame {
    /// Plain shadowed card
    Shadow,
    /// Thin outline
    Outline,
    /// Heavy rounded frame
    Rounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Products per row in the catalog grid
    pub grid_columns: usize,
    /// Blank lines between sections
    pub section_gap: usize,
    pub card_frame: CardFrame,
    /// Character width of one product card
    pub card_width: usize,
}

/// The complete visual bundle selected as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    pub id: ThemeId,
    pub palette: Palette,
    pub typography: Typography,
    pub layout: Layout,
}

const MINIMALIST: ThemeStyle = ThemeStyle {
    id: ThemeId::Theme1,
    palette: Palette {
        text_primary: "#1f2937",
        text_muted: "#4b5563",
        surface: "#ffffff",
        card_border: "#e5e7eb",
        primary_accent: "#2563eb",
        title_accent: "#1f2937",
        header_accent: "#2563eb",
        price: "#2563eb",
        rating: "#f59e0b",
        category: "#6b7280",
        status_success: "#16a34a",
        status_error: "#dc2626",
        status_loading: "#2563eb",
    },
    typography: Typography {
        family: FontFamily::Sans,
        title_weight: FontWeight::Semibold,
        uppercase_titles: false,
    },
    layout: Layout {
        grid_columns: 4,
        section_gap: 1,
        card_frame: CardFrame::Shadow,
        card_width: 30,
    },
};

const DARK_PRO: ThemeStyle = ThemeStyle {
    id: ThemeId::Theme2,
    palette: Palette {
        text_primary: "#ffffff",
        text_muted: "#d1d5db",
        surface: "#111827",
        card_border: "#374151",
        primary_accent: "#4f46e5",
        title_accent: "#ffffff",
        header_accent: "#818cf8",
        price: "#818cf8",
        rating: "#fbbf24",
        category: "#9ca3af",
        status_success: "#22c55e",
        status_error: "#f87171",
        status_loading: "#818cf8",
    },
    typography: Typography {
        family: FontFamily::Serif,
        title_weight: FontWeight::Bold,
        uppercase_titles: false,
    },
    layout: Layout {
        grid_columns: 3,
        section_gap: 2,
        card_frame: CardFrame::Outline,
        card_width: 36,
    },
};

const COLORFUL: ThemeStyle = ThemeStyle {
    id: ThemeId::Theme3,
    palette: Palette {
        text_primary: "#ffffff",
        text_muted: "#f3e8ff",
        surface: "#7c3aed",
        card_border: "#f9a8d4",
        primary_accent: "#ec4899",
        title_accent: "#ffffff",
        header_accent: "#f472b6",
        price: "#db2777",
        rating: "#facc15",
        category: "#a855f7",
        status_success: "#4ade80",
        status_error: "#fecaca",
        status_loading: "#f9a8d4",
    },
    typography: Typography {
        family: FontFamily::Mono,
        title_weight: FontWeight::Black,
        uppercase_titles: true,
    },
    layout: Layout {
        grid_columns: 4,
        section_gap: 2,
        card_frame: CardFrame::Rounded,
        card_width: 30,
    },
};

impl ThemeId {
    pub fn style(&self) -> &'static ThemeStyle {
        match self {
            ThemeId::Theme1 => &MINIMALIST,
            ThemeId::Theme2 => &DARK_PRO,
            ThemeId::Theme3 => &COLORFUL,
        }
    }
}

/// Parse a `#rrggbb` color
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Nearest entry of the 6x6x6 color cube in the 256-color palette
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    let level = |v: u8| ((u16::from(v) * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_color_parses() {
        for id in ThemeId::ALL {
            let p = id.style().palette;
            for color in [
                p.text_primary,
                p.text_muted,
                p.surface,
                p.card_border,
                p.primary_accent,
                p.title_accent,
                p.header_accent,
                p.price,
                p.rating,
                p.category,
                p.status_success,
                p.status_error,
                p.status_loading,
            ] {
                assert!(hex_to_rgb(color).is_some(), "{id}: bad color {color}");
            }
        }
    }

    #[test]
    fn test_styles_are_keyed_by_their_id() {
        for id in ThemeId::ALL {
            assert_eq!(id.style().id, id);
        }
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_rgb("#ff8000"), Some((255, 128, 0)));
        assert_eq!(hex_to_rgb("ff8000"), Some((255, 128, 0)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#gg0000"), None);
    }

    #[test]
    fn test_ansi256_cube_corners() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
