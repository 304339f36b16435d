/**
 * egui Native Desktop App - Main Entry Point
 *
 * Builds the tokio runtime, local storage, HTTP client and change feed, then
 * hands them to `AppState` and runs the eframe event loop.
 */
use std::sync::Arc;
use std::time::Duration;

use dataqueue::egui_app::theme::styles;
use dataqueue::egui_app::{views, AppState, Config, HttpApiClient, LocalDatabase, LocalStorage, SseChangeFeed};
use eframe::egui;

/// How often to repaint while waiting on background work
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env()?;
    let runtime = Arc::new(tokio::runtime::Runtime::new()?);
    let storage = runtime.block_on(open_storage(&config))?;

    let api = Arc::new(HttpApiClient::new(config.clone()));
    let feed = SseChangeFeed::new(config.clone(), runtime.handle().clone());

    let mut state = AppState::new(config, runtime, api, storage, &feed);
    state.restore_persisted();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "dataqueue",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(DataQueueApp { state }))
        }),
    )?;

    Ok(())
}

/// Open the configured database, falling back to memory so the UI still runs
async fn open_storage(config: &Config) -> Result<Arc<dyn LocalStorage>, dataqueue::egui_app::StorageError> {
    match LocalDatabase::open(config.storage_path()).await {
        Ok(db) => Ok(Arc::new(db)),
        Err(e) => {
            tracing::warn!("Failed to open local storage ({}); state will not survive restarts", e);
            Ok(Arc::new(LocalDatabase::in_memory().await?))
        }
    }
}

struct DataQueueApp {
    state: AppState,
}

impl eframe::App for DataQueueApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_toasts(ctx, &mut self.state);

        ctx.request_repaint_after(POLL_INTERVAL);
    }
}

impl Drop for DataQueueApp {
    fn drop(&mut self) {
        self.state.flush_pending();
    }
}
