use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sci_calc::calculator::{AngleMode, CalculatorState, copy_to_clipboard};
use sci_calc::config::{Config, resolve_config_path};
use sci_calc::ui::{render_display, render_json, render_keypad};
use sci_calc::{Event, KeyError, resolve};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sci-calc", version, about = "A button-driven scientific calculator")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start in degrees mode
    #[arg(long, global = true, conflicts_with = "rad")]
    deg: bool,

    /// Start in radians mode
    #[arg(long, global = true)]
    rad: bool,

    /// Print the display as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Press keys in order on a fresh calculator and print the result
    Press {
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Read key presses from stdin, one line at a time
    Repl,
    /// List every key and its aliases
    Keys,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the resolved config file path
    Path,
}

/// A calculator session plus the output preferences of this front end.
struct Session {
    state: CalculatorState,
    json: bool,
}

impl Session {
    fn new(config: &Config) -> Self {
        Self {
            state: CalculatorState::new(config.angle_mode),
            json: config.json,
        }
    }

    /// Resolve every word first so an unknown key leaves the state untouched.
    fn press_all<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) -> Result<(), KeyError> {
        let events = words
            .into_iter()
            .map(resolve)
            .collect::<Result<Vec<Event>, _>>()?;

        for event in &events {
            self.state.apply(event);
        }
        Ok(())
    }

    fn render(&self) -> Result<String> {
        let snapshot = self.state.snapshot();
        if self.json {
            render_json(&snapshot).context("Failed to serialize display")
        } else {
            Ok(render_display(&snapshot))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;
    if cli.deg {
        config.angle_mode = AngleMode::Deg;
    } else if cli.rad {
        config.angle_mode = AngleMode::Rad;
    }
    config.json |= cli.json;

    match cli.command {
        Command::Press { keys } => {
            let mut session = Session::new(&config);
            session.press_all(keys.iter().map(String::as_str))?;
            println!("{}", session.render()?);
        }
        Command::Repl => run_repl(&config)?,
        Command::Keys => println!("{}", render_keypad()),
        Command::Config { action } => match action {
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    anyhow::bail!(
                        "{} already exists (use --force to overwrite)",
                        config_path.display()
                    );
                }
                Config::default().save_to(&config_path)?;
                println!("Wrote {}", config_path.display());
            }
            ConfigAction::Path => println!("{}", config_path.display()),
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_repl(config: &Config) -> Result<()> {
    let mut session = Session::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    if config.show_keypad {
        println!("{}\n", render_keypad());
    }
    println!("{}", session.render()?);

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "keys" => println!("{}", render_keypad()),
            "copy" => match copy_to_clipboard(session.state.display()) {
                Ok(()) => println!("Copied {}", session.state.display()),
                Err(e) => eprintln!("{:#}", anyhow::Error::new(e)),
            },
            words => match session.press_all(words.split_whitespace()) {
                Ok(()) => println!("{}", session.render()?),
                Err(e) => eprintln!("{e}"),
            },
        }

        stdout.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}
