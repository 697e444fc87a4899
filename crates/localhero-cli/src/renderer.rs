//! Terminal rendering of markdown output
//!
//! Post cards, listings and wizard messages are produced as markdown by the
//! core display types. This module prints them through termimad, or as plain
//! text when colors are disabled.

use termimad::{crossterm::style::Color, MadSkin};

/// Prints markdown either styled or verbatim
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints `markdown` to stdout.
    ///
    /// Header lines keep their hash marks in rich mode so cards stay
    /// recognizable when copied out of the terminal.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else if let Some(rest) = line.strip_prefix('✓') {
                println!("\x1b[32m✓\x1b[0m{rest}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }

    /// Prints a wizard refusal or other problem to stderr.
    pub fn render_problem(&self, markdown: &str) {
        if self.rich_enabled {
            eprint!("\x1b[33m{markdown}\x1b[0m");
        } else {
            eprint!("{markdown}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
