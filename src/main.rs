use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::copy_to_clipboard;
use zcalc::config::{Config, OutputFormat};
use zcalc::items::{ButtonItem, KEYPAD_COLUMNS};
use zcalc::keymap::parse_keys;
use zcalc::Session;

/// Width of one keypad cell when printed.
const CELL_WIDTH: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "A four-function calculator")]
struct Cli {
    /// Key script, e.g. "3+4*2<Enter>". Reads scripts from stdin when omitted.
    keys: Option<String>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Print the keypad after the readout
    #[arg(long)]
    keypad: bool,

    /// Copy the final readout to the clipboard
    #[arg(long)]
    copy: bool,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let output = if cli.json {
        OutputFormat::Json
    } else {
        cli.output.unwrap_or(config.output)
    };

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.keys {
        Some(script) => {
            let actions = parse_keys(script).context("Invalid key script")?;
            session.dispatch_all(actions);
            print_session(&mut out, &session, output, cli.keypad)?;
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                match parse_keys(&line) {
                    Ok(actions) => {
                        session.dispatch_all(actions);
                        print_session(&mut out, &session, output, cli.keypad)?;
                    }
                    Err(e) => tracing::warn!("{}", e),
                }
            }
        }
    }

    if cli.copy || config.copy_result {
        copy_to_clipboard(&session.readout().text)?;
    }

    Ok(())
}

fn print_session(
    out: &mut impl Write,
    session: &Session,
    output: OutputFormat,
    with_keypad: bool,
) -> Result<()> {
    let readout = session.readout();

    match output {
        OutputFormat::Text => writeln!(out, "{}", readout.text)?,
        OutputFormat::Json => {
            let mut value = json!({
                "state": session.state().snapshot(),
                "readout": readout,
            });
            if with_keypad {
                value["keypad"] = serde_json::to_value(session.keypad())?;
            }
            writeln!(out, "{}", value)?;
            return Ok(());
        }
    }

    if with_keypad {
        for row in session.keypad() {
            writeln!(out, "{}", render_row(&row))?;
        }
    }

    Ok(())
}

/// Render one keypad row, marking the active operator with brackets.
fn render_row(row: &[ButtonItem]) -> String {
    let mut line = String::with_capacity(KEYPAD_COLUMNS * CELL_WIDTH);
    for button in row {
        let label = if button.active {
            format!("[{}]", button.label)
        } else {
            button.label.clone()
        };
        let width = CELL_WIDTH * button.span();
        line.push_str(&format!("{:^width$}", label, width = width));
    }

    line.trim_end().to_string()
}
