//! Terminal UI for pocket tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{AI_DELAY_MS, App};

/// Events delivered back to the UI loop.
#[derive(Debug, Clone, Copy)]
enum GameEvent {
    /// A scheduled AI reply is due. Stamped with the game generation so
    /// replies canceled by a restart are dropped.
    AiMoveDue(u64),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting pocket tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new();
    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Check for scheduled AI replies
        if let Ok(GameEvent::AiMoveDue(generation)) = event_rx.try_recv() {
            app.ai_move_due(generation);
        }

        // Check for keyboard input
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => app.restart(),
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = c as usize - '1' as usize;
                        app.human_move(index);
                    }
                    _ => {}
                }
            }
        }

        // Schedule the AI reply after the pacing delay
        if app.wants_ai_move() {
            let generation = app.arm_ai();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(AI_DELAY_MS)).await;
                let _ = tx.send(GameEvent::AiMoveDue(generation));
            });
        }
    }
}
