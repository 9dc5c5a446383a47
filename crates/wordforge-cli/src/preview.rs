use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use crossterm::{cursor, execute};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Terminal;

use wordforge_core::Wordlist;

use crate::CliError;

const FOOTER_HEIGHT: u16 = 1;

/// Scroll position over a read-only list of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub offset: usize,
    pub total: usize,
}

impl Pager {
    pub fn new(total: usize) -> Self {
        Self { offset: 0, total }
    }

    fn max_offset(&self, height: usize) -> usize {
        self.total.saturating_sub(height.max(1))
    }

    pub fn scroll_down(&mut self, lines: usize, height: usize) {
        self.offset = self
            .offset
            .saturating_add(lines)
            .min(self.max_offset(height));
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn home(&mut self) {
        self.offset = 0;
    }

    pub fn end(&mut self, height: usize) {
        self.offset = self.max_offset(height);
    }

    /// Index range of lines visible in a viewport of `height` rows.
    pub fn visible(&self, height: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(self.total);
        let end = start.saturating_add(height).min(self.total);
        start..end
    }
}

enum PagerAction {
    Continue,
    Quit,
}

/// Restores the terminal when dropped, including on setup failures.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, event::EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = write_restore(&mut io::stdout());
    }
}

fn write_restore<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        LeaveAlternateScreen,
        event::DisableMouseCapture,
        cursor::Show
    )
}

/// Show the wordlist in a scrollable read-only view until the user quits.
pub fn run_preview(wordlist: &Wordlist) -> Result<(), CliError> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_loop(&mut terminal, wordlist)
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, wordlist: &Wordlist) -> Result<(), CliError> {
    let words = wordlist.as_slice();
    let mut pager = Pager::new(words.len());

    loop {
        let mut height = 0_usize;
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(FOOTER_HEIGHT)])
                .split(frame.size());

            // Two rows go to the block borders.
            height = chunks[0].height.saturating_sub(2) as usize;
            let lines: Vec<Line> = words[pager.visible(height)]
                .iter()
                .map(|word| Line::from(word.as_str()))
                .collect();

            let title = format!(" Preview: {} words ", words.len());
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(
                    title,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

            let range = pager.visible(height);
            let footer = format!(
                " {}-{} of {}  [j/k] scroll  [PgUp/PgDn] page  [g/G] top/bottom  [q] close",
                if range.is_empty() { 0 } else { range.start + 1 },
                range.end,
                words.len()
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    footer,
                    Style::default().fg(Color::DarkGray),
                ))),
                chunks[1],
            );
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let PagerAction::Quit = handle_key(&mut pager, key, height) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => pager.scroll_down(3, height),
                MouseEventKind::ScrollUp => pager.scroll_up(3),
                _ => {}
            },
            _ => {}
        }
    }
}

fn handle_key(pager: &mut Pager, key: KeyEvent, height: usize) -> PagerAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return PagerAction::Quit;
        }
        KeyCode::Char('q') | KeyCode::Esc => return PagerAction::Quit,
        KeyCode::Down | KeyCode::Char('j') => pager.scroll_down(1, height),
        KeyCode::Up | KeyCode::Char('k') => pager.scroll_up(1),
        KeyCode::PageDown | KeyCode::Char(' ') => pager.scroll_down(height.max(1), height),
        KeyCode::PageUp => pager.scroll_up(height.max(1)),
        KeyCode::Home | KeyCode::Char('g') => pager.home(),
        KeyCode::End | KeyCode::Char('G') => pager.end(height),
        _ => {}
    }
    PagerAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_stops_at_last_page() {
        let mut pager = Pager::new(10);
        pager.scroll_down(100, 4);
        assert_eq!(pager.offset, 6);
        assert_eq!(pager.visible(4), 6..10);
    }

    #[test]
    fn short_lists_do_not_scroll() {
        let mut pager = Pager::new(3);
        pager.scroll_down(1, 10);
        assert_eq!(pager.offset, 0);
        assert_eq!(pager.visible(10), 0..3);
    }

    #[test]
    fn empty_list_has_empty_view() {
        let mut pager = Pager::new(0);
        pager.end(5);
        assert!(pager.visible(5).is_empty());
    }

    #[test]
    fn restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        write_restore(&mut out).expect("write restore sequence");
        let out = String::from_utf8(out).expect("ansi output");
        assert!(out.contains("\x1b[?1049l"), "{out:?}");
        assert!(out.contains("\x1b[?25h"), "{out:?}");
    }

    #[test]
    fn quit_keys_close_the_pager() {
        let mut pager = Pager::new(5);
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(handle_key(&mut pager, key, 3), PagerAction::Quit));
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(handle_key(&mut pager, key, 3), PagerAction::Continue));
        assert_eq!(pager.offset, 1);
    }
}
