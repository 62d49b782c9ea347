/**
 * User Desk - Main Entry Point
 *
 * Loads `.env`, installs logging, resolves configuration and runs the
 * eframe application.
 */
use std::time::Duration;

use eframe::egui;
use tracing_subscriber::EnvFilter;
use userdesk::egui_app::{theme, views, AppState, Config};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::load()?;
    tracing::info!(
        demo = config.demo_api_url(),
        records = config.record_store_url(),
        "starting user desk"
    );
    let mut state = AppState::new(config)?;
    state.start_load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "User Desk",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(UserDeskApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct UserDeskApp {
    state: AppState,
}

impl eframe::App for UserDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_delete_confirm(ctx, &mut self.state);
        views::render_toasts(ctx, &mut self.state);

        // Keep polling while calls are in flight or toasts need expiring
        if self.state.in_flight > 0 || !self.state.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
