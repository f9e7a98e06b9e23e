use std::io::{self, IsTerminal, Stdout, Write};
use unicode_width::UnicodeWidthStr;
use crate::config::TerminalConfig;
use crate::sink::TextSink;

/// Rewrites a single terminal line in place. Without ANSI support the old
/// line is blanked by padding with spaces up to its display width.
pub struct LineSink<W: Write> {
    out: W,
    ansi: bool,
    prefix: String,
    cursor: String,
    last_width: usize,
}

impl LineSink<Stdout> {
    pub fn stdout(cfg: &TerminalConfig) -> Self {
        let ansi = supports_ansi();
        log::debug!("LineSink on stdout (ansi: {})", ansi);
        Self::new(io::stdout(), ansi, cfg)
    }
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W, ansi: bool, cfg: &TerminalConfig) -> Self {
        Self {
            out,
            ansi,
            prefix: cfg.prefix.clone(),
            cursor: cfg.cursor.clone(),
            last_width: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TextSink for LineSink<W> {
    fn show(&mut self, text: &str) -> anyhow::Result<()> {
        if self.ansi {
            write!(self.out, "\r\x1b[2K{}{}{}", self.prefix, text, self.cursor)?;
        } else {
            let line = format!("{}{}{}", self.prefix, text, self.cursor);
            // columns, so wide glyphs are fully overwritten
            let width = line.width();
            let pad = self.last_width.saturating_sub(width);
            write!(self.out, "\r{}{}", line, " ".repeat(pad))?;
            self.last_width = width;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// `TERM` unset or `dumb`, or stdout redirected, means no escape codes.
pub fn supports_ansi() -> bool {
    if !io::stdout().is_terminal() {
        return false;
    }
    match std::env::var("TERM") {
        Ok(term) => !term.is_empty() && term != "dumb",
        Err(_) => false,
    }
}
