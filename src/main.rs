use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
#[cfg(not(feature = "gui"))]
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use tracing::info;

use storybook::reader::{self, ReaderOutcome};
use storybook::{Config, GeminiClient, Session, StoryNavigator, logging};

#[derive(Parser)]
#[command(name = "storybook")]
#[command(about = "Turn a story outline into an illustrated, paginated storybook")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop storybook (default)
    #[cfg(feature = "gui")]
    Gui,

    /// Generate a story from an outline and print it
    Generate {
        /// The story outline
        #[arg(value_name = "OUTLINE")]
        outline: String,

        /// Page through the story interactively instead of printing it all
        #[arg(long)]
        read: bool,

        /// Skip the per-page pacing delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init_logging(args.verbose)?;

    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Some(Command::Generate {
            outline,
            read,
            no_delay,
        }) => run_generate(&config, outline, read, no_delay),
        Some(Command::Config) => print_config(&config),
        #[cfg(feature = "gui")]
        Some(Command::Gui) | None => storybook::gui::run(config),
        #[cfg(not(feature = "gui"))]
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn run_generate(config: &Config, outline: String, read: bool, no_delay: bool) -> anyhow::Result<()> {
    let client = GeminiClient::from_config(config)?;
    let mut options = config.generation_options();
    if no_delay {
        options.page_delay = Duration::ZERO;
    }

    // Built by hand so the GUI path can own its own runtime.
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let mut session = Session::new();
    let mut outline = outline;

    loop {
        info!(model = client.model(), "Generating story");
        runtime.block_on(session.submit_outline_with(&client, &outline, &options, |progress| {
            eprintln!("Loading {} of {}", progress.current, progress.total);
        }));

        if let Some(message) = session.error() {
            anyhow::bail!("{message}");
        }
        let story = session
            .story()
            .cloned()
            .context("Generation finished without a story")?;
        let mut navigator = StoryNavigator::new(story);

        if !read {
            let mut out = io::stdout().lock();
            loop {
                reader::print_page(&navigator, &mut out)?;
                if !navigator.next() {
                    return Ok(());
                }
            }
        }

        match reader::read_story(&mut navigator, io::stdin().lock(), io::stdout())? {
            ReaderOutcome::Quit => return Ok(()),
            ReaderOutcome::NewStory => {
                session.reset();
                match prompt_outline()? {
                    Some(next) => outline = next,
                    None => return Ok(()),
                }
            }
        }
    }
}

/// Ask for another outline on stdin; `None` on an empty line or EOF.
fn prompt_outline() -> anyhow::Result<Option<String>> {
    print!("\nNew story outline (empty to quit): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim();
    Ok((!line.is_empty()).then(|| line.to_string()))
}

fn print_config(config: &Config) -> anyhow::Result<()> {
    let mut shown = config.clone();
    shown.api_key = config.resolve_api_key().map(|_| "[REDACTED]".to_string());
    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}
