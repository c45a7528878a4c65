use eframe::egui;

/// Text field plus Send button. Returns `true` when the user asked to send.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let button_width = 64.0;
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Type a message")
                .desired_width(ui.available_width() - button_width),
        );
        if ui
            .add_sized([button_width - 8.0, 20.0], egui::Button::new("Send"))
            .clicked()
        {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            // Enter drops focus from a single-line edit; keep typing in place.
            response.request_focus();
        }
    });

    send
}
