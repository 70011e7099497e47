//! Greedy word wrapping with pixel-measured widths.

use super::font::FontHandle;

const ELLIPSIS: &str = "...";

/// Wrap `text` into at most `max_lines` lines no wider than `max_width`
/// pixels. Words are packed greedily; when text is dropped, either because
/// the line budget ran out or a single word is wider than the column, the
/// affected line is trimmed and given a trailing ellipsis.
pub fn wrap(text: &str, font: &FontHandle, max_width: f32, max_lines: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut consumed = 0;
    for &word in &words {
        if let Some(line) = lines.last_mut() {
            let candidate = format!("{line} {word}");
            if font.measure(&candidate) <= max_width {
                *line = candidate;
                consumed += 1;
                continue;
            }
        }
        if lines.len() == max_lines {
            break;
        }
        lines.push(word.to_string());
        consumed += 1;
    }

    let dropped = consumed < words.len();
    if dropped {
        if let Some(last) = lines.last_mut() {
            *last = truncate_to_width(last, font, max_width);
        }
    }
    for line in &mut lines {
        if font.measure(line) > max_width {
            *line = truncate_to_width(line, font, max_width);
        }
    }
    lines
}

/// Shorten `line` until it fits `max_width` with a trailing ellipsis. When
/// even a single character plus the ellipsis is too wide, the ellipsis
/// itself is shortened rather than overflowing the column.
fn truncate_to_width(line: &str, font: &FontHandle, max_width: f32) -> String {
    let mut kept: Vec<char> = line.chars().collect();
    loop {
        let stem: String = kept.iter().collect();
        let candidate = format!("{}{ELLIPSIS}", stem.trim_end());
        if font.measure(&candidate) <= max_width {
            return candidate;
        }
        if kept.pop().is_none() {
            break;
        }
    }
    // Nothing fits with a full ellipsis; fall back to the widest marker that does.
    for dots in ["..", ".", ""] {
        if font.measure(dots) <= max_width {
            return dots.to_string();
        }
    }
    String::new()
}
