// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn force_color() {
    std::env::set_var("COLOR", "1");
    std::env::remove_var("NO_COLOR");
}

fn disable_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn no_color_wins_over_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::set_var("COLOR", "1");
    assert!(!should_colorize());
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn styles_returns_plain_when_no_color() {
    disable_color();
    assert_eq!(
        format!("{:?}", styles()),
        format!("{:?}", clap::builder::styling::Styles::plain())
    );
}

#[test]
#[serial]
fn styles_returns_styled_when_color_forced() {
    force_color();
    assert_ne!(
        format!("{:?}", styles()),
        format!("{:?}", clap::builder::styling::Styles::plain())
    );
}

const PAINTERS: [(fn(&str) -> String, u8); 4] = [
    (header, codes::HEADER),
    (literal, codes::LITERAL),
    (context, codes::CONTEXT),
    (muted, codes::MUTED),
];

#[test]
#[serial]
fn paints_with_palette_code_when_forced() {
    force_color();
    for (paint_fn, code) in PAINTERS {
        assert_eq!(paint_fn("running"), format!("\x1b[38;5;{code}mrunning\x1b[0m"));
    }
}

#[test]
#[serial]
fn plain_text_when_disabled() {
    disable_color();
    for (paint_fn, _) in PAINTERS {
        assert_eq!(paint_fn("running"), "running");
    }
}
