use chrono::{Local, TimeZone};
use eframe::egui;

use crate::common::{ChatMessage, Sender};

const BUBBLE_WIDTH_RATIO: f32 = 0.75;

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                bubble(ui, message);
                ui.add_space(4.0);
            }
        });
}

fn bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, fill) = match message.sender {
        Sender::Me => (
            egui::Layout::right_to_left(egui::Align::TOP),
            ui.visuals().selection.bg_fill,
        ),
        Sender::Bot => (
            egui::Layout::left_to_right(egui::Align::TOP),
            ui.visuals().faint_bg_color,
        ),
    };
    let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;

    // Bubbles with identical text still need distinct widget ids.
    ui.push_id(&message.id, |ui| {
        ui.with_layout(layout, |ui| {
            egui::Frame::new()
                .fill(fill)
                .corner_radius(8)
                .inner_margin(egui::Margin::symmetric(10, 6))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    ui.vertical(|ui| {
                        ui.add(egui::Label::new(&message.content).wrap());
                        ui.label(
                            egui::RichText::new(format_time(message.timestamp))
                                .small()
                                .weak(),
                        );
                    });
                });
        });
    });
}

fn format_time(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(time) => time.format("%H:%M").to_string(),
        None => String::new(),
    }
}
