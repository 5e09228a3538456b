//! Small layout and text helpers shared by the renderers.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// What: Compute a rectangle centred in `area`.
///
/// Inputs:
/// - `pct_x`, `pct_y`: Size as a percentage of `area`.
/// - `area`: Enclosing rectangle.
///
/// Output:
/// - Centred rectangle, never larger than `area`.
#[must_use]
pub fn centered_rect(pct_x: u16, pct_y: u16, area: Rect) -> Rect {
    let w = area.width.saturating_mul(pct_x.min(100)) / 100;
    let h = area.height.saturating_mul(pct_y.min(100)) / 100;
    fixed_centered_rect(w, h, area)
}

/// Centre a `w` x `h` rectangle in `area`, shrinking it to fit.
#[must_use]
pub fn fixed_centered_rect(w: u16, h: u16, area: Rect) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// What: Cut `text` to at most `max` terminal columns.
///
/// Inputs:
/// - `text`: Text to shorten (only its first line is used).
/// - `max`: Column budget.
///
/// Output:
/// - The text, or a prefix ending in `…` when it did not fit.
///
/// Details:
/// - Widths are measured in display columns, so wide characters count twice.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            // Make room for the ellipsis.
            while used + 1 > max {
                match out.pop() {
                    Some(c) => used -= c.width().unwrap_or(0),
                    None => return out,
                }
            }
            out.push('…');
            return out;
        }
        used += w;
        out.push(ch);
    }
    out
}
