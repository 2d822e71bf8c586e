//! TUI application state and event loop

use super::animation::{Signal, Timeline};
use super::rendering::{KeyCap, ScreenLayout, key_at};
use crate::game::{Game, WordValidator};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Redraw interval while waiting for input
const TICK_RATE: Duration = Duration::from_millis(16);

/// Application state
pub struct App<V: WordValidator> {
    pub game: Game<V>,
    pub timeline: Timeline,
    pub should_quit: bool,
    started: Instant,
}

impl<V: WordValidator> App<V> {
    #[must_use]
    pub fn new(game: Game<V>) -> Self {
        let timeline = Timeline::new(game.config().flip_duration, game.config().dance_duration);
        Self {
            game,
            timeline,
            should_quit: false,
            started: Instant::now(),
        }
    }

    /// Time since the app started
    #[must_use]
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Duration) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.game.on_letter_input(c);
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.game.on_delete();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
        self.flush_effects(now);
    }

    /// A left click at a screen position
    pub fn handle_click(&mut self, column: u16, row: u16, screen: Rect, now: Duration) {
        let layout = ScreenLayout::new(screen, self.game.grid().rows().len());
        if let Some(cap) = key_at(layout.keyboard, column, row) {
            self.press(cap, now);
        }
    }

    /// Press an on-screen key
    pub fn press(&mut self, cap: KeyCap, now: Duration) {
        match cap {
            KeyCap::Letter(letter) => {
                self.game.on_letter_input(char::from(letter));
            }
            KeyCap::Enter => self.submit(),
            KeyCap::Delete => {
                self.game.on_delete();
            }
        }
        self.flush_effects(now);
    }

    fn submit(&mut self) {
        // Rejections surface as alert and shake effects
        if let Err(err) = self.game.on_submit() {
            debug!(%err, "submission rejected");
        }
    }

    /// Advance animations and feed finished ones back into the game
    pub fn tick(&mut self, now: Duration) {
        for signal in self.timeline.tick(now) {
            match signal {
                Signal::FlipComplete(position) => {
                    self.game.on_flip_complete(position);
                }
                Signal::RevealSettled => {
                    self.game.on_reveal_settled();
                }
            }
        }
        self.flush_effects(now);
    }

    fn flush_effects(&mut self, now: Duration) {
        let effects = self.game.drain_effects();
        if !effects.is_empty() {
            self.timeline.schedule(effects, now);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<V: WordValidator>(app: App<V>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, V>(terminal: &mut Terminal<B>, mut app: App<V>) -> Result<()>
where
    B: ratatui::backend::Backend,
    V: WordValidator,
{
    loop {
        let now = app.now();
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, app.now());
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    app.handle_click(mouse.column, mouse.row, screen, app.now());
                }
                _ => {}
            }
        }

        app.tick(app.now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
