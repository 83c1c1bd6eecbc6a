pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::config::Config;

use self::app::{Effect, TuiApp};
use self::event::{AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: &AppContext, config: &Config) -> Result<()> {
    // Load before taking over the terminal so a slow fetch leaves the shell usable.
    let controller = ctx.open_controller().await;

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, TuiApp::new(controller), config);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Tui, mut tui_app: TuiApp, config: &Config) -> Result<()> {
    let event_handler = EventHandler::new(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        if let AppEvent::Key(key) = event_handler.next()? {
            match tui_app.handle_key(&key, &config.keybindings) {
                Effect::OpenLink(href) => {
                    if let Err(e) = open::that(&href) {
                        tui_app.set_status(format!("Failed to open browser: {}", e));
                    }
                }
                Effect::None => {}
            }
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}
