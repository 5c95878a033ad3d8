// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for `litsplit inspect` and the generate summary.
//!
//! OneDark on dark terminals, One Light on light ones. Theme detection tries
//! `LITSPLIT_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely for `NO_COLOR` and when stdout is not a TTY, so piped output
//! stays plain text.

use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LITSPLIT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

type Rgb = (u8, u8, u8);

/// The handful of colors the CLI uses.
struct Palette {
    red: Rgb,
    green: Rgb,
    yellow: Rgb,
    blue: Rgb,
    cyan: Rgb,
    gray: Rgb,
}

// OneDark: https://github.com/joshdick/onedark.vim
const ONE_DARK: Palette = Palette {
    red: (224, 108, 117),
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
};

// One Light: https://github.com/sonph/onehalf
const ONE_LIGHT: Palette = Palette {
    red: (228, 86, 73),
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
};

fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &ONE_DARK,
        Theme::Light => &ONE_LIGHT,
    }
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Named colors, resolved against the current theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
}

impl Color {
    fn escape(self) -> String {
        let p = palette();
        let (r, g, b) = match self {
            Color::Red => p.red,
            Color::Green => p.green,
            Color::Yellow => p.yellow,
            Color::Blue => p.blue,
            Color::Cyan => p.cyan,
            Color::Gray => p.gray,
        };
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color and modifiers if colors are on.
pub fn paint(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(color: Color) -> (String, &'static str) {
    if use_colors() {
        (color.escape(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (on, off) = border(Color::Gray);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{on}│{off}{}{}{on}│{off}", content, " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (on, off) = border(Color::Gray);
    let label_part = format!("─ {} ", paint(Color::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{on}┌{off}{}{on}{}┐{off}", label_part, "─".repeat(remaining));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (on, off) = border(Color::Gray);
    println!("{on}└{}┘{off}", "─".repeat(BOX_WIDTH));
}

/// Print a double-line title block: ╔═══╗ ║ TEXT ║ ╚═══╝
pub fn title(text: &str) {
    let (on, off) = border(Color::Blue);
    let label = paint(Color::Cyan, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&label));
    let left = total_pad / 2;
    println!("{on}╔{}╗{off}", "═".repeat(BOX_WIDTH));
    println!(
        "{on}║{off}{}{}{}{on}║{off}",
        " ".repeat(left),
        label,
        " ".repeat(total_pad - left)
    );
    println!("{on}╚{}╝{off}", "═".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `[DIRECT]` or `[CHUNKED]`
pub fn accessor_badge(chunked: bool) -> String {
    if chunked {
        paint(Color::Yellow, &[BOLD], "[CHUNKED]")
    } else {
        paint(Color::Green, &[], "[DIRECT]")
    }
}

/// `✓` / `✗` marker
pub fn status_mark(ok: bool) -> String {
    if ok {
        paint(Color::Green, &[BOLD], "✓")
    } else {
        paint(Color::Red, &[BOLD], "✗")
    }
}

/// Fixed-width bar showing how full a fragment is, e.g. `████████░░ 80%`.
pub fn fill_bar(used: usize, capacity: usize, width: usize) -> String {
    let ratio = if capacity == 0 {
        0.0
    } else {
        (used as f64 / capacity as f64).min(1.0)
    };
    let filled = (ratio * width as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    let pct = format!("{:>3.0}%", ratio * 100.0);
    let color = if ratio > 0.95 {
        Color::Yellow
    } else {
        Color::Blue
    };
    format!("{} {}", paint(color, &[], &bar), paint(Color::Gray, &[], &pct))
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Keep the last `max_len` characters of a path, with a `...` prefix.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        return path.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let tail: String = path.chars().skip(count - keep).collect();
    format!("...{}", tail)
}
