use crate::theme::styles::{hex_to_rgb, rgb_to_ansi256};
use crate::theme::{CardFrame, FontWeight, ThemeId, ThemeStyle};
use console::{Alignment, Style, measure_text_width, pad_str, truncate_str};

/// Renders text in the colors and typography of one theme.
///
/// With `color` off every helper returns plain text, which keeps output
/// readable in pipes and easy to assert on in tests.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    style: &'static ThemeStyle,
    color: bool,
}

impl Painter {
    pub fn new(theme: ThemeId, color: bool) -> Self {
        Self {
            style: theme.style(),
            color,
        }
    }

    pub fn plain(theme: ThemeId) -> Self {
        Self::new(theme, false)
    }

    pub fn style(&self) -> &'static ThemeStyle {
        self.style
    }

    pub fn theme(&self) -> ThemeId {
        self.style.id
    }

    // The caller decided on color already, so the tty check is skipped
    fn paint(&self, text: &str, style: Style) -> String {
        if !self.color {
            return text.to_string();
        }
        style.force_styling(true).apply_to(text).to_string()
    }

    fn palette_style(hex: &str) -> Style {
        match hex_to_rgb(hex) {
            Some(rgb) => Style::new().color256(rgb_to_ansi256(rgb)),
            None => Style::new(),
        }
    }

    /// Foreground color from a `#rrggbb` palette entry
    pub fn fg(&self, text: &str, hex: &str) -> String {
        self.paint(text, Self::palette_style(hex))
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    /// Colored and bold in one sequence
    pub fn strong(&self, text: &str, hex: &str) -> String {
        self.paint(text, Self::palette_style(hex).bold())
    }

    /// Page or card title in the theme's typography
    pub fn title(&self, text: &str) -> String {
        let typography = self.style.typography;
        let text = if typography.uppercase_titles {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        let mut style = Self::palette_style(self.style.palette.title_accent);
        if typography.title_weight >= FontWeight::Bold {
            style = style.bold();
        }
        self.paint(&text, style)
    }

    pub fn muted(&self, text: &str) -> String {
        self.fg(text, self.style.palette.text_muted)
    }

    pub fn accent(&self, text: &str) -> String {
        self.fg(text, self.style.palette.primary_accent)
    }

    pub fn error(&self, text: &str) -> String {
        self.fg(text, self.style.palette.status_error)
    }

    pub fn success(&self, text: &str) -> String {
        self.fg(text, self.style.palette.status_success)
    }

    /// Section divider as wide as `width`
    pub fn rule(&self, width: usize) -> String {
        let glyph = match self.style.layout.card_frame {
            CardFrame::Shadow => "─",
            CardFrame::Outline => "-",
            CardFrame::Rounded => "═",
        };
        self.fg(&glyph.repeat(width), self.style.palette.card_border)
    }

    /// Blank lines between sections
    pub fn gap(&self) -> Vec<String> {
        vec![String::new(); self.style.layout.section_gap]
    }

    /// Draw a frame of the theme's card style around `lines`.
    ///
    /// `width` is the outer width. Lines are padded, not cut, so wrap them
    /// to `width - 4` first.
    pub fn frame(&self, lines: &[String], width: usize) -> Vec<String> {
        let inner = width.saturating_sub(4);
        let (tl, tr, bl, br, h, v) = match self.style.layout.card_frame {
            CardFrame::Shadow => ("┌", "┐", "└", "┘", "─", "│"),
            CardFrame::Outline => ("+", "+", "+", "+", "-", "|"),
            CardFrame::Rounded => ("╭", "╮", "╰", "╯", "─", "│"),
        };
        let border = self.style.palette.card_border;

        let mut out = Vec::with_capacity(lines.len() + 3);
        out.push(self.fg(&format!("{tl}{}{tr}", h.repeat(inner + 2)), border));
        for line in lines {
            out.push(format!(
                "{} {} {}",
                self.fg(v, border),
                pad(line, inner),
                self.fg(v, border)
            ));
        }
        out.push(self.fg(&format!("{bl}{}{br}", h.repeat(inner + 2)), border));
        if self.style.layout.card_frame == CardFrame::Shadow {
            out.push(format!(" {}", self.muted(&"░".repeat(inner + 3))));
        }
        out
    }
}

/// Left-align `text` in `width` terminal columns. Never cuts.
pub fn pad(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Left, None).into_owned()
}

/// Word-wrap `text` to lines of at most `width` terminal columns.
///
/// Words wider than `width` are split. Wide characters count as two
/// columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while measure_text_width(&word) > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let mut head = truncate_str(&word, width, "").into_owned();
            if head.is_empty() {
                // A double-width char in a single column
                head = word.chars().take(1).collect();
            }
            word = word[head.len()..].to_string();
            lines.push(head);
        }
        let needed = if line.is_empty() {
            measure_text_width(&word)
        } else {
            measure_text_width(&line) + 1 + measure_text_width(&word)
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Keep the first `max` lines, marking the cut with an ellipsis
pub fn clamp_lines(mut lines: Vec<String>, max: usize) -> Vec<String> {
    if lines.len() > max {
        lines.truncate(max);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}
