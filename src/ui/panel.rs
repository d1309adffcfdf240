use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthChar;

/// Total panel width in terminal columns, borders included
pub const PANEL_WIDTH: usize = 80;

/// Columns between `│ ` and ` │`
const INNER_WIDTH: usize = PANEL_WIDTH - 4;

/// Number of leading detail lines considered (blank ones are then skipped)
pub const MAX_DETAIL_LINES: usize = 3;

const TITLE: &str = "Claude Code - CTIR Integration Demo";
const STATUS_LINE: &str = "Status: CTIR Active | Claude Code Pro | Integration Demo";

/// Bordered footer panel
#[derive(Debug, Clone)]
pub struct FooterPanel<'a> {
    /// Indicator text, shown after the mask glyph
    pub indicator: &'a str,
    /// Multi-line details (None hides the section)
    pub details: Option<&'a str>,
    /// Time of this frame
    pub updated_at: NaiveDateTime,
}

impl FooterPanel<'_> {
    /// Render the panel, one string per terminal row
    ///
    /// Every row is exactly [`PANEL_WIDTH`] columns wide.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            border('╭', '╮'),
            row(TITLE),
            border('├', '┤'),
            row(&format!("🎭 {}", self.indicator)),
        ];

        if let Some(details) = self.details {
            lines.extend(
                details
                    .lines()
                    .take(MAX_DETAIL_LINES)
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| row(&format!("  {}", line))),
            );
        }

        lines.push(row(&format!(
            "Last update: {}",
            self.updated_at.format("%Y-%m-%d %H:%M:%S")
        )));
        lines.push(row(STATUS_LINE));
        lines.push(border('╰', '╯'));
        lines
    }
}

fn border(left: char, right: char) -> String {
    format!("{}{}{}", left, "─".repeat(PANEL_WIDTH - 2), right)
}

fn row(content: &str) -> String {
    format!("│ {} │", fit_to_width(content, INNER_WIDTH))
}

/// Truncate and pad `s` to exactly `width` display columns
///
/// Control characters become spaces so a stray newline or tab cannot break
/// the border.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut result = String::with_capacity(width);
    let mut current_width = 0;

    for c in s.chars() {
        let c = if c.is_control() { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.extend(std::iter::repeat_n(' ', width - current_width));
    result
}

/// Display width as used for padding (sum of per-char widths)
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}
