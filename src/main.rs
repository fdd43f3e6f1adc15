//! folio - a terminal portfolio
//!
//! Three tabbed panels (About, Projects, Contact), a dark/light theme
//! toggle, and a contact form that opens a prefilled mail draft in the
//! system mail client.
//!
//! Usage: folio [--profile <path>] [--light]

mod app;
mod config;
mod content;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use ui::theme::{self, ThemeMode};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("folio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let light = args.iter().any(|a| a == "--light");
    let profile_override = args
        .iter()
        .position(|a| a == "--profile" || a == "-p")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let result = run_app(profile_override, light);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"folio - a terminal portfolio

USAGE:
    folio [OPTIONS]

OPTIONS:
    -p, --profile <path>    Load portfolio content from this TOML file
        --light             Start in light mode (default is dark)
    -h, --help              Print help information
    -v, --version           Print version information

KEYBINDINGS:
    1-3              Switch tabs
    t                Toggle dark/light theme
    j/k              Scroll / navigate
    Enter            Open project link / send the contact form
    Tab              Next form field (Contact)
    Esc              Leave form editing (Contact)
    q                Quit

TABS:
    [1] About & Resume   Intro, skills, career, credentials
    [2] Projects         Project cards with links
    [3] Contact          Inquiry form (opens your mail client)

PROFILE:
    ~/.config/folio/profile.toml
"#
    );
}

fn run_app(profile_override: Option<PathBuf>, light: bool) -> Result<()> {
    let profile = config::load_profile(profile_override.as_deref())
        .context("Failed to load profile")?;

    let initial_mode = if light {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    };

    // Initialize the process-wide presentation flag before the first frame;
    // after this, only the theme toggle writes it.
    theme::sync_dark_mode(initial_mode);

    let mut app = App::new(profile, initial_mode);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Expire the tab transition and any flash message
        app.tick();

        // Short poll timeout so the tab fade animates between events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }
}
