use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::AppView;

pub mod articles_view;
pub mod login_view;

/// Text shown next to the spinner while a request is in flight
pub const SPINNER_TEXT: &str = "Please wait...";

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Advanced Web Applications").size(18.0).strong(),
                );
                ui.add_space(24.0);

                for view in [AppView::Login, AppView::Articles] {
                    let mut text = egui::RichText::new(view.label());
                    if state.current_view == view {
                        text = text.color(colors::ACCENT).strong();
                    } else {
                        text = text.color(colors::TEXT_SECONDARY);
                    }
                    if ui.link(text).clicked() {
                        state.navigate(view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout from app").clicked() {
                        state.logout();
                    }
                    if let Some(username) = state.session.current_username() {
                        ui.colored_label(colors::TEXT_SECONDARY, format!("@{}", username));
                    }
                });
            });

            ui.horizontal(|ui| {
                if state.controller.is_busy() {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_LIGHT, SPINNER_TEXT);
                }
                let message = state.controller.message();
                if !message.is_empty() {
                    ui.colored_label(colors::MESSAGE, message);
                }
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let busy = state.controller.is_busy();
        if busy {
            ui.set_opacity(0.25);
        }
        ui.add_enabled_ui(!busy, |ui| match state.current_view {
            AppView::Login => login_view::render(ui, state),
            AppView::Articles => articles_view::render(ui, state),
        });
    });
}

pub fn render_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer")
        .frame(egui::Frame::default().fill(colors::TOP_BAR_BG).inner_margin(egui::Margin::same(6)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "Bloom Institute of Technology 2024");
            });
        });
}
