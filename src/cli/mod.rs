pub mod note;
pub mod output;
pub mod pomodoro;
pub mod shell;
pub mod task;

use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use note::{process_note_command, NoteCommand};
use output::quote::render_quote;
use pomodoro::process_pomodoro_command;
use shell::{Section, Shell};
use task::{process_task_command, TaskCommand};
use tracing::{level_filters::LevelFilter, warn};

use crate::{
    dashboard::Dashboard,
    quote::{HttpQuoteSource, QuoteWidget, DEFAULT_QUOTE_URL},
    storage::key_value::{FileStore, KeyValueStore},
    utils::{
        clock::DefaultClock,
        dir::{create_application_default_path, ensure_dir},
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Parser, Debug)]
#[command(name = "Focusboard", version, long_about = None)]
#[command(about = "Daily tasks, pomodoro timer and notes in your terminal", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(
        long,
        global = true,
        help = "Application directory. By default uses $XDG_DATA_HOME or $HOME/.local/share"
    )]
    dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Enable logging")]
    log: bool,
    #[arg(long, global = true, default_value = DEFAULT_QUOTE_URL, help = "Endpoint returning a random quote")]
    quote_url: String,
    #[arg(long, global = true, help = "Don't request a quote")]
    no_quote: bool,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Show a section of the dashboard")]
    Show {
        #[arg(value_enum, default_value_t = Section::Tasks)]
        section: Section,
    },
    #[command(about = "Manage today's tasks")]
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
    #[command(about = "Show tasks from previous days")]
    Archive,
    #[command(about = "Run the pomodoro countdown. Stop it with Ctrl-C")]
    Pomodoro {
        #[arg(
            long,
            default_value_t = 2,
            help = "Number of phases to run. 2 runs one work phase followed by a break"
        )]
        phases: u32,
    },
    #[command(about = "Manage notes")]
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },
    #[command(about = "Show the current month")]
    Calendar,
    #[command(about = "Print a motivational quote")]
    Quote,
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let app_dir = args
        .dir
        .map_or_else(create_application_default_path, ensure_dir)?;

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    let store = Arc::new(FileStore::new(app_dir.join("store"))?);
    let dashboard = Dashboard::new(store, Arc::new(DefaultClock));
    let quote = (!args.no_quote)
        .then(|| HttpQuoteSource::new(args.quote_url))
        .transpose()?
        .map(|source| QuoteWidget::new(Arc::new(source)));

    let mut stdout = io::stdout();

    match args.commands {
        Commands::Show { section } => {
            show(Shell::new(section), &dashboard, quote, &mut stdout).await
        }
        Commands::Archive => {
            show(Shell::new(Section::Archive), &dashboard, quote, &mut stdout).await
        }
        Commands::Calendar => {
            show(Shell::new(Section::Calendar), &dashboard, quote, &mut stdout).await
        }
        Commands::Task { command } => process_task_command(command, &dashboard, &mut stdout),
        Commands::Note { command } => process_note_command(command, &dashboard, &mut stdout),
        Commands::Pomodoro { phases } => {
            process_pomodoro_command(phases, dashboard.clock()).await
        }
        Commands::Quote => print_quote(quote, &mut stdout).await,
    }
}

async fn print_quote(quote: Option<QuoteWidget>, out: &mut impl Write) -> Result<()> {
    match quote {
        Some(quote) => {
            quote.refresh().await;
            render_quote(&quote.state(), out)?;
        }
        None => {
            warn!("Quote requested with --no-quote");
            writeln!(out, "Quotes are disabled by --no-quote.")?;
        }
    }
    Ok(())
}

/// Renders the quote banner followed by the selected section.
async fn show<S: KeyValueStore + Clone>(
    shell: Shell,
    dashboard: &Dashboard<S>,
    quote: Option<QuoteWidget>,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(quote) = quote {
        quote.refresh().await;
        render_quote(&quote.state(), out)?;
    }
    shell.render(dashboard, out)
}
