//! TUI application state and logic

use crate::client::{QueryClient, QueryError};
use crate::config::ThemeMode;
use crate::core::Field;
use crate::route::History;
use crate::session::{FormSession, SearchRequest, SearchTicket};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// How long to wait for a key before checking for settled searches
const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Settled = (SearchTicket, Result<Vec<String>, QueryError>);

/// Application state
pub struct App {
    pub session: FormSession<History>,
    pub focus: Field,
    pub theme: ThemeMode,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(history: History, theme: ThemeMode) -> Self {
        Self {
            session: FormSession::new(history),
            focus: Field::Pattern,
            theme,
            should_quit: false,
        }
    }

    /// Apply a key press; returns a search to start when the form was submitted
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SearchRequest> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('l') if ctrl => self.session.clear(),
            KeyCode::Char('t') if ctrl => self.theme = self.theme.cycle(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Enter => return self.session.begin_search(),
            KeyCode::Backspace => self.session.pop_char(self.focus),
            KeyCode::Char(c) if !ctrl => self.session.push_char(self.focus, c),
            _ => {}
        }
        None
    }

    pub fn apply_result(&mut self, ticket: SearchTicket, result: Result<Vec<String>, QueryError>) {
        self.session.settle(ticket, result);
    }
}

/// Run the TUI application
///
/// Searches run on `runtime`; the draw loop stays on the calling thread.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App, client: QueryClient, runtime: &Handle) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, &client, runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "interactive session failed");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: &QueryClient,
    runtime: &Handle,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Settled>();

    loop {
        drain_settled(&mut app, &mut rx);
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(request) = app.handle_key(key) {
                spawn_search(runtime, client.clone(), request, tx.clone());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn drain_settled(app: &mut App, rx: &mut UnboundedReceiver<Settled>) {
    while let Ok((ticket, result)) = rx.try_recv() {
        app.apply_result(ticket, result);
    }
}

fn spawn_search(
    runtime: &Handle,
    client: QueryClient,
    request: SearchRequest,
    tx: UnboundedSender<Settled>,
) {
    runtime.spawn(async move {
        let fields = &request.constraints;
        let result = client
            .find_matching_words(fields.pattern(), fields.include(), fields.exclude())
            .await;
        // The receiver is gone once the UI has quit
        let _ = tx.send((request.ticket, result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Constraints;
    use crate::session::RequestOutcome;

    fn press(app: &mut App, code: KeyCode) -> Option<SearchRequest> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_focused_field_and_route() {
        let mut app = App::new(History::default(), ThemeMode::System);
        type_text(&mut app, "_o___");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "a d");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "b__r_");

        assert_eq!(
            app.session.fields(),
            &Constraints::new("_O___", "B__R_", "AD")
        );
        assert_eq!(app.session.route(), "/_O___/B__R_/AD");
    }

    #[test]
    fn exclude_field_drops_underscores() {
        let mut app = App::new(History::default(), ThemeMode::System);
        app.focus = Field::Exclude;
        type_text(&mut app, "a_d");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.fields().exclude(), "A");
    }

    #[test]
    fn enter_submits_once() {
        let mut app = App::new(History::new("/_O___"), ThemeMode::System);
        let request = press(&mut app, KeyCode::Enter).unwrap();
        assert!(press(&mut app, KeyCode::Enter).is_none());

        app.apply_result(
            request.ticket,
            Ok(vec!["BOARD".to_string(), "SOLAR".to_string()]),
        );
        assert_eq!(app.session.outcome().words(), ["BOARD", "SOLAR"]);
    }

    #[test]
    fn enter_without_pattern_does_nothing() {
        let mut app = App::new(History::default(), ThemeMode::System);
        assert!(press(&mut app, KeyCode::Enter).is_none());
        assert_eq!(app.session.outcome(), &RequestOutcome::Idle);
    }

    #[test]
    fn ctrl_l_clears_while_pending() {
        let mut app = App::new(History::new("/_O___/B__R_"), ThemeMode::System);
        let request = press(&mut app, KeyCode::Enter).unwrap();
        ctrl(&mut app, 'l');

        app.apply_result(request.ticket, Ok(vec!["BOARD".to_string()]));
        assert_eq!(app.session.outcome(), &RequestOutcome::Idle);
        assert_eq!(app.session.route(), "/");
        assert!(app.session.fields().is_empty());
    }

    #[test]
    fn control_keys() {
        let mut app = App::new(History::default(), ThemeMode::Dark);
        ctrl(&mut app, 't');
        assert_eq!(app.theme, ThemeMode::System);
        assert!(app.session.fields().is_empty());

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Field::Include);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
