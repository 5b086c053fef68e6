//! Interactive instance table view
//!
//! Terminal-native rendition of the instance viewer: an editable
//! compartment-id line above a scrollable table, with a manual refresh that
//! replaces the table contents wholesale. The refresh runs on the UI task
//! and blocks it for the duration of the call.

mod app;
mod draw;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::execute;
use log::{error, info};
use ratatui::prelude::*;

use crate::api::ApiClient;
use crate::error::Result;

pub use app::{parse_bg_color, App, InstanceRow};

/// Poll interval for terminal events
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Fetch the rows for one compartment; errors are logged and rendered as an
/// empty table rather than tearing the view down.
async fn fetch_rows(compute: &ApiClient, compartment_id: &str) -> Vec<InstanceRow> {
    match compute.list_instances(compartment_id).await {
        Ok(instances) => {
            info!(
                "Displayed {} instances for compartment {}",
                instances.len(),
                compartment_id
            );
            instances.iter().map(InstanceRow::from).collect()
        }
        Err(err) => {
            error!(
                "Error listing instances in compartment {}: {}",
                compartment_id, err
            );
            Vec::new()
        }
    }
}

/// Refresh the table from the current input line
async fn refresh(app: &mut App, compute: &ApiClient) {
    let compartment_id = app.input.clone();
    if compartment_id.is_empty() {
        error!("Invalid compartment ID provided");
        app.set_invalid_input();
        return;
    }
    let rows = fetch_rows(compute, &compartment_id).await;
    app.set_rows(rows);
}

/// Run the table view until the user quits.
///
/// The initial fetch uses the compartment id supplied on the command line;
/// later refreshes use whatever is typed into the input line.
pub async fn run(compute: &ApiClient, compartment_id: &str, bg_color: &str) -> Result<()> {
    let bg = parse_bg_color(bg_color)?;
    let mut app = App::new(compartment_id, bg);
    app.set_rows(fetch_rows(compute, compartment_id).await);

    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            // Never leave the shell in raw mode on a half-finished setup
            let _ = disable_raw_mode();
            return Err(err);
        }
    };

    let result = event_loop(&mut terminal, &mut app, compute).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

async fn event_loop<B: Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    compute: &ApiClient,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.editing {
                match key.code {
                    KeyCode::Enter | KeyCode::Esc => app.editing = false,
                    KeyCode::Backspace => app.pop_input(),
                    KeyCode::Char(c) => app.push_input(c),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Char('e') => app.editing = true,
                    KeyCode::Char('r') => refresh(app, compute).await,
                    KeyCode::Up => app.select_previous(),
                    KeyCode::Down => app.select_next(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}
