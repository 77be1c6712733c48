use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use stocktui::api::StockClient;
use stocktui::config::{self, Config};
use stocktui::location::QueryParams;
use stocktui::logic::render;
use stocktui::logic::sorting::SortColumn;
use stocktui::model::{NavigationModel, UiModel};
use stocktui::notify::Notifier;
use stocktui::{utils, ListController};

/// Stock admin TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/stocktui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Initial location query, e.g. "categoryId=3&keyword=pen&page=2&sort=name:asc"
    #[arg(short, long, default_value = "")]
    query: String,

    /// Fetch the page once, print it and exit (no terminal UI)
    #[arg(long)]
    print: bool,
}

mod app;
mod handlers;
mod ui;

pub struct App {
    pub controller: ListController<StockClient>,
    pub ui: UiModel,
    pub nav: NavigationModel,
}

impl App {
    fn new(config: &Config, location: QueryParams) -> Self {
        let client = StockClient::new(config.base_url.clone(), config.endpoint_paths());
        Self {
            controller: ListController::new(client, location, Notifier::with_container()),
            ui: UiModel::new(config.vim_mode, config.create_button),
            nav: NavigationModel::new(),
        }
    }
}

fn init_logging(args: &Args) -> Result<()> {
    if args.debug {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(utils::get_debug_log_path())
            .context("Failed to open debug log")?;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if args.print {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None if args.base_url.is_some() => Config::default(),
        None => return Err(config::missing_config_error()),
    };

    // Override config with CLI flags
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if args.vim {
        config.vim_mode = true;
    }

    if config.base_url.trim().is_empty() {
        anyhow::bail!("base_url is empty; set it in the config file or pass --base-url");
    }
    Ok(config)
}

/// Headless run: one fetch, printed as plain text
async fn print_page(config: &Config, location: QueryParams) -> Result<()> {
    let client = StockClient::new(config.base_url.clone(), config.endpoint_paths());
    let mut controller = ListController::new(client, location, Notifier::headless());
    controller.init().await.context("Failed to load stocks")?;

    let headers = SortColumn::ALL.map(|c| c.header());
    println!("{}", render::render_plain(&controller.render_plan(), &headers));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    init_logging(&args)?;

    let config = load_config(&args)?;
    let location = QueryParams::parse(&args.query);
    info!(base_url = %config.base_url, location = %location, "starting");

    if args.print {
        return print_page(&config, location).await;
    }

    // Initialize app
    let mut app = App::new(&config, location);
    app.load_initial().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Leave the last location behind so the same view can be reopened with --query
    let last = app.controller.location().to_string();
    if !last.is_empty() {
        println!("Last location: {}", last);
    }

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss expired toasts
        if let Some(container) = app.controller.notifier_mut().container_mut() {
            container.expire(Instant::now());
        }

        if app.ui.should_quit {
            break;
        }

        // Short poll so expiring toasts disappear on time
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::keyboard::handle_key(app, key).await?;
                }
            }
        }
    }

    Ok(())
}
