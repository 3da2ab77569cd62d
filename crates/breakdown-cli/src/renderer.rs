//! Terminal rendering for checklists and banners
//!
//! Markdown produced by the core views is printed through termimad, or as
//! plain text when colors are disabled.

use std::io::{self, Write};

use anyhow::Result;
use breakdown_core::{Banner, BannerKind};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    error_skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Green);
        skin.strikeout.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        let mut error_skin = skin.clone();
        error_skin.bold.set_fg(Color::Red);

        Self {
            rich_enabled,
            skin,
            error_skin,
        }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_with(&self.skin, markdown)
    }

    pub fn banner(&self, banner: &Banner) -> Result<()> {
        let skin = match banner.kind {
            BannerKind::Error => &self.error_skin,
            BannerKind::Info | BannerKind::Success => &self.skin,
        };
        self.render_with(skin, &banner.to_string())
    }

    /// Print the session prompt without a trailing newline.
    pub fn prompt(&self) -> Result<()> {
        let mut stdout = io::stdout();
        if self.rich_enabled {
            write!(stdout, "\x1b[1m>\x1b[0m ")?;
        } else {
            write!(stdout, "> ")?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn render_with(&self, skin: &MadSkin, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their leading hash
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
