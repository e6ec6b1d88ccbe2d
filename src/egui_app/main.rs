/**
 * Articles Desk - Main Entry Point
 *
 * Native desktop client for the articles API. Installs logging, loads the
 * configuration and hands the application state to eframe.
 */
use eframe::egui;
use articles_desk::egui_app::{views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::load();
    tracing::info!("Starting articles desk against {}", config.server_url());
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([600.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Articles Desk",
        options,
        Box::new(move |_cc| Ok(Box::new(ArticlesApp { state }))),
    )?;
    Ok(())
}

/// Main application state
struct ArticlesApp {
    state: AppState,
}

impl eframe::App for ArticlesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_footer(ctx);
        views::render_main_panel(ctx, &mut self.state);

        if self.state.controller.is_busy() {
            ctx.request_repaint();
        }
    }
}
