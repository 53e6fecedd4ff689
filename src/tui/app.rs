use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::controller::{Controller, Feedback, PendingDelete, TodoError};
use crate::io::store::FileStore;
use crate::model::{Config, Surfaces};
use crate::util::line_input::LineInput;

use super::confetti::Confetti;
use super::input;
use super::render;
use super::theme::Theme;

/// Wall time between confetti steps (~30fps)
pub const FRAME: Duration = Duration::from_millis(33);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the task input field
    Input,
    /// Typing a new list name
    ListName,
    /// Waiting for a yes/no on a delete
    Confirm,
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tasks,
    Sidebar,
}

/// A transient error message shown under the input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub expires_at: Instant,
}

/// Main application state
pub struct App {
    pub controller: Controller,
    pub surfaces: Surfaces,
    pub theme: Theme,
    pub mode: Mode,
    pub focus: Focus,
    /// Row under the cursor in the task pane
    pub cursor: usize,
    /// Index into the list names in the sidebar
    pub sidebar_cursor: usize,
    pub list_name_input: LineInput,
    pub pending_delete: Option<PendingDelete>,
    pub banner: Option<Banner>,
    pub banner_duration: Duration,
    pub confetti: Option<Confetti>,
    /// When the confetti last advanced
    confetti_clock: Option<Instant>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: Controller, config: &Config) -> Self {
        let mut app = App {
            controller,
            surfaces: config.ui.surfaces(),
            theme: Theme::from_config(&config.ui),
            mode: Mode::Navigate,
            focus: Focus::Tasks,
            cursor: 0,
            sidebar_cursor: 0,
            list_name_input: LineInput::default(),
            pending_delete: None,
            banner: None,
            banner_duration: Duration::from_millis(config.ui.banner_ms),
            confetti: None,
            confetti_clock: None,
            show_help: false,
            should_quit: false,
        };
        app.sync_sidebar_cursor();
        // Opening onto a finished list already celebrates
        app.absorb_feedback(Instant::now());
        app
    }

    /// Show an error in the banner, replacing whatever was there
    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.banner = Some(Banner {
            message: message.into(),
            expires_at: now + self.banner_duration,
        });
    }

    pub fn banner_active(&self) -> bool {
        self.banner.is_some()
    }

    /// Start a fresh confetti burst, timed from `now`
    pub fn launch_confetti(&mut self, now: Instant) {
        self.confetti = Some(Confetti::launch());
        self.confetti_clock = Some(now);
    }

    /// Advance timers: expire the banner and step the confetti.
    ///
    /// Confetti moves one step per elapsed `FRAME`, however often this is
    /// called, so keypresses don't speed the animation up.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| now >= b.expires_at) {
            self.banner = None;
        }
        let Some(confetti) = &mut self.confetti else {
            return;
        };
        let last = self.confetti_clock.get_or_insert(now);
        while !confetti.is_done() && now.saturating_duration_since(*last) >= FRAME {
            confetti.step();
            *last += FRAME;
        }
        if confetti.is_done() {
            self.confetti = None;
            self.confetti_clock = None;
        }
    }

    /// Route controller feedback to the banner or the confetti
    pub fn absorb_feedback(&mut self, now: Instant) {
        for feedback in self.controller.take_feedback() {
            match feedback {
                Feedback::Error(message) => self.show_error(message, now),
                Feedback::Celebrate => {
                    if self.surfaces.celebration {
                        self.launch_confetti(now);
                    }
                }
            }
        }
    }

    /// Show a failed operation's message; pass a success through
    pub fn report<T>(&mut self, result: Result<T, TodoError>, now: Instant) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.show_error(e.to_string(), now);
                None
            }
        }
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.controller.rows().len();
        self.cursor = if count == 0 {
            0
        } else {
            self.cursor.min(count - 1)
        };
    }

    pub fn list_names(&self) -> Vec<String> {
        self.controller
            .document()
            .list_names()
            .map(str::to_string)
            .collect()
    }

    /// Point the sidebar cursor at the selected list
    pub fn sync_sidebar_cursor(&mut self) {
        let selected = self.controller.selected_list();
        self.sidebar_cursor = self
            .controller
            .document()
            .list_names()
            .position(|name| name == selected)
            .unwrap_or(0);
    }
}

/// Run the TUI against the store in `storage_dir`
pub fn run(config: &Config, storage_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::new(storage_dir);
    tracing::info!(dir = %storage_dir.display(), "starting tui");
    let controller = Controller::open(Box::new(store));
    let mut app = App::new(controller, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    app.controller.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Wake up every frame while confetti is flying
        let timeout = if app.confetti.is_some() {
            FRAME
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key, Instant::now());
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
