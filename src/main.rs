pub mod config;
pub mod data;
pub mod pager;
pub mod ui;

use crate::config::AppConfig;
use crate::pager::{PagerHandle, PagerSettings};
use crate::ui::WealthdeckUI;
use color_eyre::{eyre::eyre, Result};
use eframe::egui;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    let app_config = load_config();

    info!("Building mock portfolio dataset");
    let movers = data::mock_movers();
    let insights = data::mock_insights();
    let bonds = data::mock_bonds();

    // One engine per carousel; item counts derive from the sequences and
    // are fixed for the engines' lifetimes.
    info!("Spawning pager engines");
    let movers_pager = PagerHandle::spawn(
        PagerSettings::new("movers", movers.len()).with_transition(app_config.transition()),
    )
    .map_err(|e| eyre!("Failed to spawn movers pager: {}", e))?;

    let insights_pager = PagerHandle::spawn(
        PagerSettings::new("insights", insights.len())
            .with_transition(app_config.transition())
            .with_auto_advance(app_config.auto_advance()),
    )
    .map_err(|e| eyre!("Failed to spawn insights pager: {}", e))?;

    let bonds_pager = PagerHandle::spawn(
        PagerSettings::new("bond-views", data::BondView::ALL.len())
            .with_transition(app_config.transition()),
    )
    .map_err(|e| eyre!("Failed to spawn bond view pager: {}", e))?;

    info!("Starting UI");
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default().with_inner_size([430.0, 900.0]);

    eframe::run_native(
        "Wealthdeck",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(WealthdeckUI::new(
                cc,
                &app_config,
                movers_pager,
                insights_pager,
                bonds_pager,
                movers,
                insights,
                bonds,
            )))
        }),
    )
    .map_err(|e| eyre!("UI terminated: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}

fn load_config() -> AppConfig {
    if let Err(e) = AppConfig::ensure_default_config() {
        warn!("Could not write default config: {}", e);
    }
    AppConfig::load()
}
