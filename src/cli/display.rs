// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the fieldtune CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. `FIELDTUNE_THEME`
//! forces a theme, otherwise `COLORFGBG` is consulted and dark is the fallback.
//! `NO_COLOR` and non-TTY output get plain text.

use std::sync::OnceLock;

/// Inner width of a box, border characters excluded.
pub const BOX_WIDTH: usize = 64;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn from_env() -> Self {
        let forced = std::env::var("FIELDTUNE_THEME").ok().and_then(|name| {
            match name.to_ascii_lowercase().as_str() {
                "dark" | "d" => Some(Theme::Dark),
                "light" | "l" => Some(Theme::Light),
                _ => None,
            }
        });
        forced
            .or_else(|| std::env::var("COLORFGBG").ok().and_then(|v| Self::from_colorfgbg(&v)))
            .unwrap_or(Theme::Dark)
    }

    /// `COLORFGBG` is "fg;bg". Background 7 and 9..=15 are light.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
        Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
    }

    pub fn current() -> Self {
        static THEME: OnceLock<Theme> = OnceLock::new();
        *THEME.get_or_init(Theme::from_env)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

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
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Color::Red) => (224, 108, 117),
            (Theme::Dark, Color::Green) => (152, 195, 121),
            (Theme::Dark, Color::Yellow) => (229, 192, 123),
            (Theme::Dark, Color::Blue) => (97, 175, 239),
            (Theme::Dark, Color::Cyan) => (86, 182, 194),
            (Theme::Dark, Color::Gray) => (92, 99, 112),
            (Theme::Light, Color::Red) => (228, 86, 73),
            (Theme::Light, Color::Green) => (80, 161, 79),
            (Theme::Light, Color::Yellow) => (193, 132, 1),
            (Theme::Light, Color::Blue) => (64, 120, 242),
            (Theme::Light, Color::Cyan) => (1, 132, 188),
            (Theme::Light, Color::Gray) => (160, 161, 167),
        }
    }

    /// 24-bit foreground escape for this color.
    fn escape(self, theme: Theme) -> String {
        let (r, g, b) = self.rgb(theme);
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub fn paint(color: Color, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, color.escape(Theme::current()), text, RESET)
}

/// Printed width of `s` once ANSI escapes are stripped.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Escapes here are all SGR sequences ending in 'm'
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let edge = paint(Color::Gray, false, "│");
    println!("{}{}{}", edge, pad_right(content, BOX_WIDTH), edge);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let title = format!("─ {} ", paint(Color::Cyan, true, label));
    let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&title)));
    println!(
        "{}{}{}",
        paint(Color::Gray, false, "┌"),
        title,
        paint(Color::Gray, false, &format!("{}┐", rule))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    let rule = "─".repeat(BOX_WIDTH);
    println!("{}", paint(Color::Gray, false, &format!("└{}┘", rule)));
}

// ═══════════════════════════════════════════════════════════════════════════
// VALUES
// ═══════════════════════════════════════════════════════════════════════════

/// Metric value colored by how close it is to a perfect 1.0.
pub fn metric_value(score: f64) -> String {
    let color = match score {
        s if s >= 0.8 => Color::Green,
        s if s >= 0.5 => Color::Yellow,
        _ => Color::Red,
    };
    paint(color, true, &format!("{:.6}", score))
}

/// Signed change between two parameter values, gray when unchanged.
pub fn delta(from: f64, to: f64) -> String {
    let change = to - from;
    if change.abs() < 1e-12 {
        return paint(Color::Gray, false, "      =");
    }
    let color = if change > 0.0 { Color::Green } else { Color::Red };
    paint(color, false, &format!("{:>+7.3}", change))
}

/// Bar of `#` proportional to `value` in `[0, 1]`.
pub fn bar(value: f64, width: usize) -> String {
    let filled = (value.clamp(0.0, 1.0) * width as f64).round() as usize;
    let text = format!("{}{}", "#".repeat(filled), ".".repeat(width - filled));
    paint(Color::Blue, false, &text)
}
