//! calctui - Main entry point
//!
//! Parses the command line, sets up logging and either runs the interactive
//! calculator or one of the headless commands.

use calctui::cli::{Cli, Commands};
use calctui::config_file::AppConfig;
use calctui::error::{CalcTuiError, Result};
use calctui::logging::{self, LogTarget};
use calctui::{App, CalculatorState, InputHandler};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

/// Main application entry point
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    let interactive = matches!(cli.command, None | Some(Commands::Run));
    logging::init_logger(&LogTarget::select(cli.log_file.as_deref(), interactive))?;
    info!("calctui starting up");
    debug!(?cli, "CLI arguments parsed");

    match cli.command {
        None | Some(Commands::Run) => {
            let config = load_config(cli.config.as_deref())?;
            run_tui(config)?;
        }
        Some(Commands::Eval { keys, trace, json }) => {
            let config = load_config(cli.config.as_deref())?;
            run_eval(&config, &keys, trace, json)?;
        }
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match load_config(Some(&config)) {
                Ok(_) => println!("✓ Configuration file is valid: {}", config.display()),
                Err(e) => {
                    error!("Configuration validation failed: {}", e);
                    eprintln!("✗ {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::InitConfig { path, force }) => {
            if path.exists() && !force {
                eprintln!(
                    "✗ {} already exists (use --force to overwrite)",
                    path.display()
                );
                std::process::exit(1);
            }
            AppConfig::default()
                .save_to_file(&path)
                .map_err(|e| CalcTuiError::config(format!("{:#}", e)))?;
            info!("Wrote default configuration to {:?}", path);
            println!("✓ Default configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Load and validate the settings file, or fall back to defaults
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        debug!("No configuration file given, using defaults");
        return Ok(AppConfig::default());
    };

    info!("Loading configuration from: {:?}", path);
    let config = AppConfig::load_from_file(path)
        .and_then(|config| config.validate().map(|_| config))
        .map_err(|e| CalcTuiError::config(format!("{:#}", e)))?;
    Ok(config)
}

/// Run the interactive calculator
fn run_tui(config: AppConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");
    let mouse = config.mouse_support && config.show_keypad;

    enable_raw_mode()
        .map_err(|e| CalcTuiError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(CalcTuiError::terminal(format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }
    if mouse {
        if let Err(e) = crossterm::execute!(stdout(), EnableMouseCapture) {
            // Keyboard input still works
            tracing::warn!("Failed to enable mouse capture: {}", e);
        }
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| CalcTuiError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| App::new(config).run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    if mouse {
        let _ = crossterm::execute!(stdout(), DisableMouseCapture);
    }
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result
}

/// Feed a key script to a fresh calculator and print the result
fn run_eval(config: &AppConfig, keys: &str, trace: bool, json: bool) -> Result<()> {
    let events = InputHandler::new(config).parse_script(keys)?;
    info!("Evaluating {} key events", events.len());

    let mut calculator = CalculatorState::new();
    for event in events {
        let display = calculator.apply(event);
        if trace {
            println!("{:>4}  {}", event.label(), display);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&calculator)?);
    } else if !trace {
        println!("{}", calculator.display());
    }

    Ok(())
}
