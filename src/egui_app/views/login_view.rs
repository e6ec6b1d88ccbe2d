use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(
            egui::RichText::new("Login")
                .size(24.0)
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(20.0);

        let input_width = 280.0;

        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(&mut state.username_input)
                .hint_text("Enter username"),
        );
        ui.add_space(8.0);

        let password = ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(&mut state.password_input)
                .hint_text("Enter password")
                .password(true),
        );
        ui.add_space(16.0);

        let can_submit =
            !state.username_input.trim().is_empty() && !state.password_input.is_empty();
        let submit = ui.add_enabled(
            can_submit,
            egui::Button::new(egui::RichText::new("Submit credentials").color(colors::TEXT_LIGHT))
                .fill(colors::ACCENT)
                .min_size(egui::vec2(160.0, 32.0)),
        );

        let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submit.clicked() || (enter && can_submit) {
            state.handle_login();
        }
    });
}
