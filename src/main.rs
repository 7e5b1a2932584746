use clap::Parser;
use flatsql::{Args, LineOutcome, Shell, ShellConfig};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

const HISTORY_FILE: &str = ".flatsql_history";

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ShellConfig::load(&args)?;
    init_logging(&config.log_level);

    if let Some(path) = &config.source {
        tracing::info!(path = %path.display(), "loaded config");
    }

    let mut shell = Shell::open(config.storage_layout(), io::stdout())?;

    // Initialize rustyline editor for history and line editing
    let mut rl = DefaultEditor::new()?;
    let history_file = config
        .history
        .then(dirs::home_dir)
        .flatten()
        .map(|home| home.join(HISTORY_FILE));

    if let Some(ref path) = history_file {
        let _ = rl.load_history(path); // Ignore error if file doesn't exist
    }

    println!("Welcome.\nUse .help meta command for help.");

    loop {
        let outcome = match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                shell.handle_line(&line)?
            }
            // Ctrl+C / Ctrl+D behave like .exit
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => shell.save_and_exit()?,
            Err(err) => {
                eprintln!("Error: {err:?}");
                return Err(err.into());
            }
        };
        shell.output_mut().flush()?;

        if outcome == LineOutcome::Exit {
            break;
        }
    }

    if let Some(ref path) = history_file {
        let _ = rl.save_history(path);
    }

    Ok(())
}
