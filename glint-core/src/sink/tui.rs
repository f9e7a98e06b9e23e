use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::animator::Animator;
use crate::clock::Clock;
use crate::config::TerminalConfig;
use crate::sink::TextSink;

/// Full-screen sink: the text sits in a bordered box in the middle of the
/// alternate screen. The terminal is restored when the sink is dropped.
pub struct TuiSink {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    title: String,
    prefix: String,
    cursor: String,
    blink: Duration,
    born: Instant,
    last: String,
}

impl TuiSink {
    pub fn new(cfg: &TerminalConfig) -> anyhow::Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            title: format!(" {} ", cfg.title),
            prefix: cfg.prefix.clone(),
            cursor: cfg.cursor.clone(),
            blink: Duration::from_millis(cfg.blink_ms.max(1)),
            born: Instant::now(),
            last: String::new(),
        })
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        let on = cursor_visible(self.born.elapsed(), self.blink);
        let cursor = if on { self.cursor.clone() } else { " ".repeat(self.cursor.chars().count()) };
        let line = Line::from(vec![
            Span::styled(self.prefix.clone(), Style::default().fg(Color::DarkGray)),
            Span::styled(self.last.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]);
        let title = self.title.clone();

        self.terminal.draw(|frame| {
            let area = centered(frame.area(), 3);
            let block = Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(" q: quit ");
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center).block(block), area);
        })?;
        Ok(())
    }
}

impl TextSink for TuiSink {
    fn show(&mut self, text: &str) -> anyhow::Result<()> {
        self.last.clear();
        self.last.push_str(text);
        self.draw()
    }

    fn refresh(&mut self) -> anyhow::Result<()> {
        self.draw()
    }
}

/// Cursor shows for the first `blink` of every `2 * blink` window.
fn cursor_visible(elapsed: Duration, blink: Duration) -> bool {
    let period = blink.as_millis().max(1);
    (elapsed.as_millis() / period) % 2 == 0
}

impl Drop for TuiSink {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

fn centered(area: Rect, height: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    mid
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Runs the animator while listening for quit keys between ticks.
pub fn run_interactive<C: Clock>(anim: &mut Animator<C>) -> anyhow::Result<()> {
    let poll_cap = Duration::from_millis(100);

    anim.start();
    while let Some(due) = anim.next_deadline() {
        let wait = due.saturating_sub(anim.clock().now()).min(poll_cap);

        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && is_quit(&key) => {
                    log::info!("Quit requested from keyboard");
                    anim.stop();
                    break;
                }
                Event::Resize(w, h) => log::debug!("Terminal resized to {}x{}", w, h),
                _ => {}
            }
        }
        // a fired tick has just drawn; otherwise keep the cursor blinking
        if anim.poll() == 0 {
            anim.refresh();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn centered_box_sits_in_the_middle() {
        let area = Rect::new(0, 0, 80, 24);
        let mid = centered(area, 3);
        assert_eq!(mid.height, 3);
        assert_eq!(mid.width, 80);
        // 21 spare rows split between the two fillers
        assert!(mid.y == 10 || mid.y == 11);

        let tiny = centered(Rect::new(0, 0, 10, 2), 3);
        assert!(tiny.height <= 2);
    }

    #[test]
    fn cursor_blinks_during_a_hold() {
        let blink = Duration::from_millis(500);
        assert!(cursor_visible(Duration::ZERO, blink));
        assert!(cursor_visible(Duration::from_millis(499), blink));
        assert!(!cursor_visible(Duration::from_millis(500), blink));
        assert!(!cursor_visible(Duration::from_millis(999), blink));
        assert!(cursor_visible(Duration::from_millis(1000), blink));
    }
}
