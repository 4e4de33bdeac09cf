use super::UiApp;
use cleaner_core::{Disposer, Viewable, Viewport, decode_for_display};
use eframe::egui;

impl<D: Disposer> UiApp<D> {
    /// Decode the current image for an area of `available` points.
    pub(super) fn reload(&mut self, ctx: &egui::Context, available: egui::Vec2) {
        self.needs_reload = false;
        // leave room for the file name under the picture
        let viewport = Viewport::new(
            available.x.max(0.0) as u32,
            (available.y - 24.0).max(0.0) as u32,
        )
        .effective(self.config.fallback_viewport);

        match self
            .session
            .seek_viewable(|path| decode_for_display(path, viewport))
        {
            Viewable::Empty => {
                self.texture = None;
                self.nothing_viewable = false;
            }
            Viewable::Shown { image, skipped } => {
                let (w, h) = image.dimensions();
                let color = egui::ColorImage::from_rgba_unmultiplied(
                    [w as usize, h as usize],
                    image.as_raw(),
                );
                let name = self
                    .session
                    .current()
                    .map(|p| format!("review:{}", p.display()))
                    .unwrap_or_else(|| "review".to_string());
                self.texture = Some(ctx.load_texture(name, color, egui::TextureOptions::LINEAR));
                self.nothing_viewable = false;
                if !skipped.is_empty() {
                    self.status = format!(
                        "Skipped {} unreadable image(s), last: {}",
                        skipped.len(),
                        skipped[skipped.len() - 1].reason
                    );
                }
            }
            Viewable::NoneViewable { skipped } => {
                self.texture = None;
                self.nothing_viewable = true;
                self.status = format!("No viewable images ({} unreadable)", skipped.len());
            }
        }
    }

    pub(super) fn render_image(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            match &self.texture {
                Some(tex) if self.session.current().is_some() => {
                    ui.image((tex.id(), tex.size_vec2()));
                    if let Some(name) = self.session.file_name() {
                        ui.label(egui::RichText::new(name).monospace().weak());
                    }
                }
                _ => {
                    let text = if self.is_done() {
                        "Done!"
                    } else if self.nothing_viewable {
                        "No viewable images"
                    } else {
                        "Open folder to start"
                    };
                    ui.add_space((ui.available_height() / 2.0 - 12.0).max(0.0));
                    ui.label(egui::RichText::new(text).size(16.0).weak());
                }
            }
        });
    }
}
