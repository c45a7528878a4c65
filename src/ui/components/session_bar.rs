use eframe::egui;

/// Title row with the End session button. Returns `true` when it was clicked.
pub fn render(ui: &mut egui::Ui, title: &str) -> bool {
    let mut end_session = false;
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("End session").clicked() {
                end_session = true;
            }
        });
    });
    end_session
}
