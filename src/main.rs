use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::info;

use menu_button::app::App;
use menu_button::{config, logging};

/// Menu Button - an action menu behind a single button, in the terminal
#[derive(Debug, Parser)]
#[command(name = "menu-button", version, about)]
struct Cli {
    /// Config file (default: <config dir>/menu-button/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Write debug logs to the log file
    #[arg(long)]
    debug: bool,

    /// Debug log location
    #[arg(long, default_value = logging::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", config::default_config_toml()?);
        return Ok(());
    }

    // Runs BEFORE the TUI starts so nothing is ever written to the terminal
    logging::init(cli.debug, &cli.log_file)?;
    info!("session started");

    let config = config::load_config(cli.config.as_deref())?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Some(output) = app.output() {
        println!("Last action: {}", output);
    }

    result
}
