use clap::Parser;
use colored::*;
use devkit::catalog::{Catalog, Tool};
use devkit::cli::{Cli, Commands};
use devkit::config::Config;
use devkit::opener::{SystemOpener, UrlOpener};
use devkit::tags;
use devkit::tui::{self, App, EventHandler, TuiRunner};
use devkit::view_state::{ViewState, describe};
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::env;
use std::fs;
use std::path::PathBuf;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devkit")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("devkit.log");

    // Setup env_logger with file output; the TUI owns the terminal
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    // Until the config is read; RUST_LOG wins when set
    if env::var_os("RUST_LOG").is_none() {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn apply_log_level(config: &Config) {
    if env::var_os("RUST_LOG").is_some() {
        return;
    }
    if let Some(level) = config.log_level.as_deref() {
        match level.parse::<LevelFilter>() {
            Ok(filter) => log::set_max_level(filter),
            Err(_) => log::warn!("Ignoring unknown log_level: {}", level),
        }
    }
}

fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let path = cli.catalog.as_ref().or(config.catalog_path.as_ref());
    Catalog::load(path.map(PathBuf::as_path)).context("Failed to load catalog")
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let catalog = load_catalog(cli, config)?;
    let opener = SystemOpener::new(config.open_command.clone());

    match &cli.command {
        None => run_tui(catalog, opener, config),
        Some(Commands::List { tags }) => handle_list_command(&catalog, tags, config),
        Some(Commands::Tags) => handle_tags_command(&catalog),
        Some(Commands::Show { id }) => handle_show_command(&catalog, id),
        Some(Commands::Open { id }) => handle_open_command(&catalog, id, &opener),
    }
}

fn run_tui(catalog: Catalog, opener: SystemOpener, config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let app = App::new(catalog, config.display.description_limit);
    let events = EventHandler::new(config.tui.tick_rate_ms);

    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, app, events, Box::new(opener));
    let result = runner.run();

    // Restore even when the loop failed
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

fn print_tool(tool: &Tool, description: &str) {
    println!("{} {}", tool.title.bold(), format!("({})", tool.id).dimmed());
    if !tool.tags.is_empty() {
        let tags: Vec<String> = tool.tags.iter().map(|t| format!("[{}]", t)).collect();
        println!("  {}", tags.join(" ").cyan());
    }
    println!("  {}", description);
    println!("  {}", tool.url.blue());
}

fn handle_list_command(catalog: &Catalog, tags: &[String], config: &Config) -> Result<()> {
    info!("Listing tools - tags: {:?}", tags);
    let mut state = ViewState::new();
    for tag in tags {
        state.toggle_tag(catalog, tag);
    }

    let visible = state.filtered(catalog);
    if visible.is_empty() {
        println!("{}", "No tools match the selected tags".yellow());
        return Ok(());
    }

    for tool in visible {
        let description = describe(&tool.description, config.display.description_limit, false);
        print_tool(tool, &description.text);
    }
    Ok(())
}

fn handle_tags_command(catalog: &Catalog) -> Result<()> {
    info!("Listing tag vocabulary");
    for tag in tags::vocabulary(catalog) {
        println!("{}", tag);
    }
    Ok(())
}

fn handle_show_command(catalog: &Catalog, id: &str) -> Result<()> {
    info!("Showing tool: {}", id);
    let tool = catalog.require(id)?;
    print_tool(tool, &tool.description);
    println!("  {}", tool.image.dimmed());
    Ok(())
}

fn handle_open_command(catalog: &Catalog, id: &str, opener: &dyn UrlOpener) -> Result<()> {
    info!("Opening tool: {}", id);
    let tool = catalog.require(id)?;
    opener.open(&tool.url)?;
    println!("{} {}", "Opened:".green(), tool.url);
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
