use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, adding an ellipsis when cut
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Proficiency bar such as "███████░░░" for a 0-100 level
pub fn level_bar(level: u8, cells: usize) -> String {
    let filled = (usize::from(level.min(100)) * cells + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
}
