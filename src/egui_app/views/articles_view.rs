use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::article::{ArticleId, Topic, TEXT_MAX_CHARS, TITLE_MAX_CHARS};

/// Button presses on the article list, applied after the list is drawn
enum ListAction {
    Edit(ArticleId),
    Delete(ArticleId),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    render_form(ui, state);
    ui.add_space(16.0);
    render_list(ui, state);
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    let controller = &mut state.controller;
    let heading = if controller.edit_target().is_some() {
        "Edit Article"
    } else {
        "Create Article"
    };

    egui::Frame::default()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(heading).size(20.0).color(colors::TEXT_LIGHT));
            ui.add_space(8.0);

            ui.add(
                egui::TextEdit::singleline(&mut controller.form.title)
                    .hint_text("Enter title")
                    .char_limit(TITLE_MAX_CHARS)
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                egui::TextEdit::multiline(&mut controller.form.text)
                    .hint_text("Enter text")
                    .char_limit(TEXT_MAX_CHARS)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );

            let selected = if controller.form.topic.is_empty() {
                "-- Select topic --"
            } else {
                controller.form.topic.as_str()
            }
            .to_string();
            egui::ComboBox::from_id_salt("topic")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut controller.form.topic, String::new(), "-- Select topic --");
                    for topic in Topic::ALL {
                        ui.selectable_value(
                            &mut controller.form.topic,
                            topic.as_str().to_string(),
                            topic.as_str(),
                        );
                    }
                });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let submit = ui.add_enabled(
                    controller.form.is_submittable(),
                    egui::Button::new(egui::RichText::new("Submit").color(colors::TEXT_LIGHT))
                        .fill(colors::ACCENT),
                );
                if submit.clicked() {
                    if let Err(e) = controller.submit() {
                        tracing::debug!("Submit blocked: {}", e);
                    }
                }
                if ui.button("Cancel edit").clicked() {
                    controller.cancel_edit();
                }
            });
        });
}

fn render_list(ui: &mut egui::Ui, state: &mut AppState) {
    let controller = &mut state.controller;
    ui.label(egui::RichText::new("Articles").size(20.0).color(colors::TEXT_LIGHT));
    ui.add_space(8.0);

    if controller.articles().is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No articles yet");
        return;
    }

    let mut action = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for article in controller.articles() {
            egui::Frame::default()
                .fill(colors::CARD_BG)
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(article.title.as_str()).size(16.0).strong().color(colors::TEXT_LIGHT));
                    ui.colored_label(colors::TEXT_LIGHT, article.text.as_str());
                    ui.colored_label(colors::TOPIC, format!("Topic: {}", article.topic));
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            action = Some(ListAction::Edit(article.article_id));
                        }
                        let delete = ui.add(
                            egui::Button::new(egui::RichText::new("Delete").color(colors::TEXT_LIGHT))
                                .fill(colors::DANGER),
                        );
                        if delete.clicked() {
                            action = Some(ListAction::Delete(article.article_id));
                        }
                    });
                });
            ui.add_space(6.0);
        }
    });

    match action {
        Some(ListAction::Edit(id)) => {
            controller.begin_edit(id);
        }
        Some(ListAction::Delete(id)) => controller.remove(id),
        None => {}
    }
}
