use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, sync::Arc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use quotetui::api::QuoteClient;
use quotetui::cache::KvDb;
use quotetui::config::Config;
use quotetui::logic::selector::{resume_or_pick, ThreadRandom};
use quotetui::model::Model;
use quotetui::persistence::Persistence;
use quotetui::services::{spawn_sync_service, SyncCommand, SyncEngine, SyncEvent};
use quotetui::store::QuoteStore;

mod app;
mod handlers;
mod ui;
mod utils;

/// Random quote viewer with server sync
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp>/quotetui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (h/l to change category)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: <config_dir>/quotetui/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Run without contacting the quote server
    #[arg(long)]
    offline: bool,
}

pub struct App {
    pub model: Model,
    store: QuoteStore,
    rng: ThreadRandom,
    /// Default path offered by the import/export prompt
    export_path: String,
    /// None when running offline
    sync_tx: Option<mpsc::UnboundedSender<SyncCommand>>,
    sync_rx: Option<mpsc::UnboundedReceiver<SyncEvent>>,
}

impl App {
    fn new(config: Config, offline: bool) -> Result<Self> {
        let durable_path = KvDb::default_durable_path(config.data_dir.as_deref());
        debug!("Opening quote store at {:?}", durable_path);
        let durable = KvDb::open(&durable_path)
            .with_context(|| format!("Failed to open quote store at {}", durable_path.display()))?;

        let session = match KvDb::open(&KvDb::default_session_path()) {
            Ok(db) => db,
            Err(e) => {
                warn!("Session store unavailable, using memory: {}", e);
                KvDb::new_in_memory()?
            }
        };

        let persistence = Persistence::new(Arc::new(durable), Arc::new(session));
        let store = QuoteStore::load(persistence.clone())?;
        let categories = store.categories();

        let mut model = Model::new(config.vim_mode, offline);
        model.ui.filter = persistence
            .load_filter()
            .unwrap_or_else(|e| {
                warn!("Failed to load category filter: {}", e);
                Default::default()
            })
            .validated(&categories);
        model.set_store_view(categories, store.len());

        let last_viewed = persistence.load_last_viewed().unwrap_or_else(|e| {
            warn!("Failed to load last viewed quote: {}", e);
            None
        });
        let mut rng = ThreadRandom;
        model.ui.current_quote =
            resume_or_pick(&store.snapshot(), &model.ui.filter, last_viewed, &mut rng);
        if let Some(quote) = &model.ui.current_quote {
            if let Err(e) = persistence.save_last_viewed(quote) {
                warn!("Failed to save last viewed quote: {}", e);
            }
        }

        let (sync_tx, sync_rx) = if offline {
            info!("Offline mode, sync disabled");
            (None, None)
        } else {
            let client = QuoteClient::new(config.endpoint.clone(), config.request_timeout())?;
            let engine = SyncEngine::new(client, store.clone())
                .with_fetch_limit(config.fetch_limit)
                .with_server_category(config.server_category.clone());
            info!(
                "Syncing with {} every {:?}",
                config.endpoint,
                config.sync_interval()
            );
            let (tx, rx) = spawn_sync_service(engine, config.sync_interval());
            (Some(tx), Some(rx))
        };

        Ok(Self {
            model,
            store,
            rng,
            export_path: config.export_path,
            sync_tx,
            sync_rx,
        })
    }
}

/// File logging for `--debug`; nothing is installed otherwise
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())?;

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry().with(file_layer).init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;
    debug!("Debug mode enabled");

    let (mut config, config_path) = Config::load(args.config.as_deref())?;
    match &config_path {
        Some(path) => debug!("Loaded config from {:?}", path),
        None => debug!("No config file found, using defaults"),
    }

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(config, args.offline)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

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

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Drain sync events (non-blocking)
        let mut events = Vec::new();
        if let Some(rx) = app.sync_rx.as_mut() {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }
        for event in events {
            handlers::handle_sync_event(app, event);
        }

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    info!("Shutting down");
    Ok(())
}
