//! Header with class/counter labels and the numbered folder shortcuts.

use super::{Action, UiApp};
use cleaner_core::Disposer;
use eframe::egui;

impl<D: Disposer> UiApp<D> {
    /// Renders the class label on the left and the `n / total` counter on the right.
    pub(super) fn render_header(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let heading = match self.session.class_label() {
                Some(class) => format!("Class: {class}"),
                None => "Waiting...".to_string(),
            };
            ui.heading(heading);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let counter = self
                    .session
                    .position()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "0 / 0".to_string());
                ui.label(egui::RichText::new(counter).size(18.0).weak());
            });
        });
    }

    /// One button per configured slot; each jumps to `<base>/<slot>`.
    pub(super) fn render_quick_access(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for slot in 0..self.config.quick_access_slots {
                let button = ui.add_sized([56.0, 32.0], egui::Button::new(format!("⚡ {slot}")));
                let button = match self.config.quick_path(slot) {
                    Some(path) => button.on_hover_text(path.display().to_string()),
                    None => button,
                };
                if button.clicked() {
                    action = Some(Action::QuickAccess(slot));
                }
            }
        });
        ui.add_space(6.0);
        action
    }
}
