//! Window state and the actions bound to buttons and keys.

mod quick_access;
mod viewer;

use cleaner_core::{
    CleanerConfig, Disposer, DisposeError, LoadOutcome, ReviewSession, ReviewState, SystemTrash,
};
use eframe::{App, Frame, egui};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::path::PathBuf;

/// Something the user asked for, from a button or a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenFolder(PathBuf),
    QuickAccess(usize),
    Keep,
    Back,
    Delete,
}

/// A message that has to interrupt the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error { title: String, body: String },
    Info { title: String, body: String },
}

impl Notice {
    fn show(&self) {
        let (level, title, body) = match self {
            Notice::Error { title, body } => (MessageLevel::Error, title, body),
            Notice::Info { title, body } => (MessageLevel::Info, title, body),
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(title.as_str())
            .set_description(body.as_str())
            .show();
    }
}

pub struct UiApp<D: Disposer = SystemTrash> {
    config: CleanerConfig,
    session: ReviewSession,
    disposer: D,
    texture: Option<egui::TextureHandle>,
    /// Set when the cursor moved and the picture must be decoded again.
    needs_reload: bool,
    /// Last full pass found nothing decodable.
    nothing_viewable: bool,
    status: String,
}

impl UiApp {
    pub fn new(config: CleanerConfig) -> Self {
        Self::with_disposer(config, SystemTrash)
    }
}

impl<D: Disposer> UiApp<D> {
    pub fn with_disposer(config: CleanerConfig, disposer: D) -> Self {
        Self {
            config,
            session: ReviewSession::new(),
            disposer,
            texture: None,
            needs_reload: false,
            nothing_viewable: false,
            status: String::new(),
        }
    }

    /// Applies `action` to the session. Returns a notice when the user must be told.
    pub fn handle(&mut self, action: Action) -> Option<Notice> {
        match action {
            Action::OpenFolder(dir) => self.open_folder(dir),
            Action::QuickAccess(slot) => match self.config.resolve_quick_access(slot) {
                Ok(dir) => self.open_folder(dir),
                Err(e) => {
                    tracing::warn!("quick access {slot}: {e}");
                    Some(Notice::Error {
                        title: "Path not found".to_string(),
                        body: e.to_string(),
                    })
                }
            },
            Action::Keep => {
                if !self.session.is_empty() {
                    self.session.advance();
                    self.needs_reload = true;
                }
                None
            }
            Action::Back => {
                if !self.session.is_empty() {
                    self.session.retreat();
                    self.needs_reload = true;
                }
                None
            }
            Action::Delete => {
                match self.session.dispose(&self.disposer) {
                    Ok(path) => {
                        self.status = format!("Moved to trash: {}", path.display());
                        self.needs_reload = true;
                    }
                    Err(DisposeError::NothingSelected) => {}
                    Err(e) => {
                        tracing::error!("{e}");
                        self.status = e.to_string();
                    }
                }
                None
            }
        }
    }

    fn open_folder(&mut self, dir: PathBuf) -> Option<Notice> {
        match self.session.load_folder(&dir) {
            Ok(LoadOutcome::Loaded(n)) => {
                self.status = format!("{n} images in {}", dir.display());
                self.needs_reload = true;
                None
            }
            Ok(LoadOutcome::NoImages) => {
                self.texture = None;
                self.nothing_viewable = false;
                self.status.clear();
                Some(Notice::Info {
                    title: "Info".to_string(),
                    body: "No images found.".to_string(),
                })
            }
            Err(e) => {
                tracing::warn!("{e}");
                Some(Notice::Error {
                    title: "Cannot open folder".to_string(),
                    body: e.to_string(),
                })
            }
        }
    }

    fn keyboard_action(ctx: &egui::Context) -> Option<Action> {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) {
                Some(Action::Keep)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(Action::Back)
            } else if i.key_pressed(egui::Key::ArrowDown) {
                Some(Action::Delete)
            } else {
                None
            }
        })
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        ui.horizontal(|ui| {
            if ui.button("📂 Open Folder").clicked()
                && let Some(dir) = FileDialog::new().pick_folder()
            {
                action = Some(Action::OpenFolder(dir));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let has_image = self.session.current().is_some();
                if ui.add_enabled(has_image, egui::Button::new("⬅ Back")).clicked() {
                    action = Some(Action::Back);
                }
                if ui.add_enabled(has_image, egui::Button::new("✔ Keep")).clicked() {
                    action = Some(Action::Keep);
                }
                if ui.add_enabled(has_image, egui::Button::new("🗑 Delete")).clicked() {
                    action = Some(Action::Delete);
                }
            });
        });
        action
    }
}

impl<D: Disposer> App for UiApp<D> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut action = Self::keyboard_action(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
            if let Some(a) = self.render_quick_access(ui) {
                action = Some(a);
            }
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            if let Some(a) = self.render_controls(ui) {
                action = Some(a);
            }
            if !self.status.is_empty() {
                ui.label(&self.status);
            }
            ui.add_space(6.0);
        });

        if let Some(action) = action
            && let Some(notice) = self.handle(action)
        {
            notice.show();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.needs_reload {
                self.reload(ctx, ui.available_size());
            }
            self.render_image(ui);
        });
    }
}

impl<D: Disposer> UiApp<D> {
    fn is_done(&self) -> bool {
        self.session.state() == ReviewState::Empty
    }
}
