//! # MealExplorer CLI Entry Point
//!
//! Search TheMealDB from the terminal and read recipes without leaving it.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive search
//! meal-explorer
//!
//! # Start with a search already running
//! meal-explorer --query arrabiata
//!
//! # One-shot: print matching recipes and exit
//! meal-explorer --query arrabiata --print
//!
//! # Point at another deployment of the API
//! meal-explorer --base-url http://localhost:8080/api/json/v1/1
//! ```
//!
//! ## Key Bindings
//!
//! ### Search input
//! - Type to edit the query, `Enter` to search
//! - `Ctrl+u` - Clear the query
//! - `Tab` / `Down` / `Esc` - Move to the results
//!
//! ### Results
//! - Arrows / `hjkl` - Move between cards
//! - `Enter` - Open the selected recipe
//! - `/` / `Tab` - Back to the search input
//! - `t` - Cycle color theme (saved to config)
//! - `q` - Quit
//!
//! ### Recipe overlay
//! - `j` / `k` / `PageUp` / `PageDown` - Scroll
//! - `Esc` / `x` / `q`, or a click outside the overlay - Close
//!
//! ## Logging
//!
//! Diagnostics go to a log file (`--log-file`, default in the user cache
//! directory) so they never draw over the TUI. `RUST_LOG` sets the level.

use meal_explorer::meal::Meal;
use meal_explorer::search::{self, MealDbClient, RecipeService, SearchOutcome, SearchRequest};
use meal_explorer::ui::app::GENERIC_ERROR;
use meal_explorer::ui::config::Config;
use meal_explorer::ui::terminal::MouseCapture;
use meal_explorer::ui::theme::Theme;
use meal_explorer::ui::{self, Action, App};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// MealExplorer - search recipes on TheMealDB from your terminal
#[derive(Parser, Debug)]
#[command(name = "meal-explorer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search recipes on TheMealDB from your terminal", long_about = None)]
struct Args {
    /// Search for this immediately on startup
    #[arg(short, long, value_name = "TEXT")]
    query: Option<String>,

    /// Base URL of the recipe API (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Color theme name (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Run the search once, print the recipes to stdout and exit
    #[arg(long, requires = "query")]
    print: bool,

    /// Write diagnostics to this file instead of the default log location
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.clone()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let path = match log_file {
        Some(path) => path,
        None => directories::ProjectDirs::from("", "", "meal-explorer")
            .context("Could not determine cache directory")?
            .cache_dir()
            .join("meal-explorer.log"),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}

/// Merge CLI overrides into the loaded config without touching the file.
fn effective_config(saved: &Config, args: &Args) -> Config {
    let mut config = saved.clone();
    if let Some(url) = &args.base_url {
        config.api_base_url = url.clone();
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    config
}

fn resolve_theme(name: &str) -> Theme {
    match Theme::by_name(name) {
        Some(theme) => theme.clone(),
        None => {
            log::warn!("Unknown theme {:?}, using the default", name);
            Theme::default_theme().clone()
        }
    }
}

async fn run_application(args: Args) -> Result<()> {
    let saved = Config::load();
    let config = effective_config(&saved, &args);

    let client = MealDbClient::new(&config.api_base_url, Some(config.request_timeout()))
        .context("Failed to create HTTP client")?;
    log::info!("Using recipe service at {}", client.base_url());
    let service: Arc<dyn RecipeService> = Arc::new(client);

    if args.print {
        let query = args.query.unwrap_or_default();
        let stdout = io::stdout();
        return print_search(service.as_ref(), &query, &mut stdout.lock()).await;
    }

    let mut app = App::new(resolve_theme(&config.theme));
    let (tx, rx) = mpsc::unbounded_channel();

    if let Some(query) = args.query {
        app.query = query;
        if let Some(request) = app.submit_search() {
            search::spawn_search(Arc::clone(&service), request, tx.clone());
        }
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let mouse = MouseCapture::attach(io::stdout()).context("Failed to enable mouse capture")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut event_reader,
        &service,
        &tx,
        rx,
    )
    .await;

    let mouse_result = mouse.detach().context("Failed to disable mouse capture");
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if all succeeded
    run_result?;
    mouse_result?;
    cleanup_result?;

    Ok(())
}

/// Non-interactive mode: one search, results as plain text.
async fn print_search(
    service: &dyn RecipeService,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    if query.is_empty() {
        bail!("--print needs a non-empty --query");
    }

    let request = SearchRequest {
        generation: 0,
        query: query.to_string(),
    };
    let outcome = search::run_search(service, &request).await;
    let meals = outcome.result.map_err(|_| anyhow!(GENERIC_ERROR))?;

    write_listing(out, &meals).context("Failed to write results")
}

fn write_listing(out: &mut impl Write, meals: &[Meal]) -> io::Result<()> {
    if meals.is_empty() {
        writeln!(out, "{}", ui::render::NO_RESULTS)?;
        return Ok(());
    }

    for (i, meal) in meals.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", meal.name())?;
        if let Some(thumb) = meal.thumbnail() {
            writeln!(out, "  {}", thumb)?;
        }
        for ingredient in meal.ingredients() {
            writeln!(out, "  - {}", ingredient)?;
        }
    }
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    service: &Arc<dyn RecipeService>,
    tx: &UnboundedSender<SearchOutcome>,
    mut outcomes: UnboundedReceiver<SearchOutcome>,
) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        // Apply any searches that finished since the last frame
        while let Ok(outcome) = outcomes.try_recv() {
            app.complete_search(outcome);
        }

        app.advance_tick();
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Faster frames while loading so the placeholders shimmer
        let poll_timeout = if app.state.is_loading() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        let Some(event) = event_reader.read_event(poll_timeout)? else {
            continue;
        };

        let size = terminal.size().context("Failed to read terminal size")?;
        let area = Rect::new(0, 0, size.width, size.height);

        match ui::handle_event(app, &event, area) {
            Action::Search(request) => {
                search::spawn_search(Arc::clone(service), request, tx.clone());
            }
            Action::ThemeChanged => {
                if let Err(e) = Config::save_theme(app.theme.name) {
                    log::warn!("Failed to save theme: {:#}", e);
                }
            }
            Action::Quit | Action::None => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
