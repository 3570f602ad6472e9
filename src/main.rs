use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, warn, Level};

use tashkeel::app::{App, AppConfig};

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();
    init_logging(&config.log_path);
    info!("tashkeel v{} starting", env!("CARGO_PKG_VERSION"));

    install_panic_hook();
    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;
    info!("tashkeel exiting");
    result
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(log_path: &Path) {
    if let Some(dir) = log_path.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(log_path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn setup_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        default_hook(panic_info);
    }));
}

fn run(terminal: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        if !event::poll(app.config.tick_rate)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => app.handle_key_event(key),
            Event::Paste(text) => app.handle_paste_event(&text),
            Event::Resize(width, height) => debug!("terminal resized to {}x{}", width, height),
            _ => {}
        }
    }

    if app.save_dialog.is_some() {
        warn!("quit with save dialog open; nothing written");
    }
    Ok(())
}
