// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

use crate::env;

pub mod codes {
    /// Section headers and phase names: steel blue
    pub const HEADER: u8 = 74;
    /// Log names and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders: medium grey
    pub const CONTEXT: u8 = 245;
    /// Log links and secondary text: darker grey
    pub const MUTED: u8 = 240;
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Build clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::HEADER)))))
        .literal(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::LITERAL)))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::CONTEXT)))))
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn muted(text: &str) -> String {
    paint(codes::MUTED, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
