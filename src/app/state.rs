use std::path::PathBuf;

use fltk::{app::Sender, button::Button, dialog, prelude::*};

use super::controllers::dragdrop::{DragDropIngester, DropAccepted, DroppedFile, FileRead};
use super::controllers::layout::LayoutController;
use super::domain::document::DocumentStore;
use super::domain::messages::Message;
use super::domain::settings::AppSettings;
use super::infrastructure::buffer::{buffer_text, sync_buffer};
use super::infrastructure::error::IngestError;
use super::infrastructure::events::WindowGrab;
use super::services::render::MarkdownRenderer;
use crate::ui::main_window::{APP_NAME, DIVIDER_WIDTH, MainWidgets, restore_button_origins};

/// Owns the document, both controllers and the widgets, and applies each
/// dispatched message: mutate state first, then bring the widgets in line.
pub struct AppState {
    pub store: DocumentStore,
    pub layout: LayoutController<WindowGrab>,
    pub ingester: DragDropIngester<Sender<Message>>,
    pub renderer: MarkdownRenderer,
    pub settings: AppSettings,
    pub widgets: MainWidgets,
    /// Store revision currently shown in the preview.
    rendered_revision: Option<u64>,
    /// Whether the editor last drew its placeholder.
    editor_was_empty: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        settings: AppSettings,
        sender: Sender<Message>,
        initial_text: &str,
    ) -> Self {
        let renderer = MarkdownRenderer::new(settings.syntax_theme);
        let layout = LayoutController::new(settings.initial_split());

        Self {
            store: DocumentStore::new(initial_text),
            layout,
            ingester: DragDropIngester::new(sender),
            renderer,
            settings,
            widgets,
            rendered_revision: None,
            editor_was_empty: false,
        }
    }

    /// Show the window with everything in sync.
    pub fn start(&mut self) {
        self.widgets.wind.show();
        self.apply_layout();
        self.refresh_document_views();
    }

    // --- Status bar actions ---

    pub fn toggle_editor(&mut self) {
        self.layout.toggle_editor_visible();
        self.apply_layout();
        self.refresh_document_views();
    }

    pub fn toggle_preview(&mut self) {
        self.layout.toggle_preview_visible();
        self.apply_layout();
        self.refresh_document_views();
    }

    pub fn clear_document(&mut self) {
        self.store.clear();
        tracing::info!("Document cleared");
        self.refresh_document_views();
    }

    // --- Editor ---

    pub fn editor_changed(&mut self) {
        let text = buffer_text(&self.widgets.buffer);
        if text == self.store.content() {
            return;
        }
        self.store.set_content(text);
        self.refresh_document_views();
    }

    // --- Divider ---

    pub fn resize_begin(&mut self) {
        let grab = WindowGrab::new(&self.widgets.wind);
        if !self.layout.begin_resize(grab) {
            tracing::debug!("Resize ignored: divider hidden or drag active");
        }
    }

    pub fn resize_move(&mut self, pointer_x: i32) {
        if !self.layout.resizing() {
            return;
        }
        let body = &self.widgets.body;
        self.layout
            .update_resize(pointer_x as f64, body.x() as f64, body.w() as f64);
        self.apply_layout();
    }

    pub fn resize_end(&mut self) {
        self.layout.end_resize();
    }

    // --- Drop surface ---

    pub fn drag_enter(&mut self) {
        self.ingester.on_drag_enter();
        self.sync_drop_overlay();
    }

    pub fn drag_over(&mut self) {
        self.ingester.on_drag_over();
        self.sync_drop_overlay();
    }

    pub fn drag_leave(&mut self) {
        self.ingester.on_drag_leave();
        self.sync_drop_overlay();
    }

    pub fn drop_files(&mut self, files: Vec<DroppedFile>) {
        let outcome = self.ingester.on_drop(&files);
        self.sync_drop_overlay();
        match outcome {
            Ok(DropAccepted::Reading { ticket, file_name }) => {
                tracing::debug!(ticket, file = %file_name, "Reading dropped file");
            }
            Ok(DropAccepted::Queued { ticket, file_name }) => {
                tracing::debug!(ticket, file = %file_name, "Dropped file queued");
            }
            Err(e) => self.show_notice(&e),
        }
    }

    pub fn file_read(&mut self, read: FileRead) {
        if let Err(e) = self.ingester.complete(read, &mut self.store) {
            self.show_notice(&e);
        }
        self.refresh_document_views();
    }

    /// Load a file named on the command line through the drop pipeline.
    pub fn open_path(&mut self, path: PathBuf) {
        self.drop_files(vec![DroppedFile::from_path(path)]);
    }

    // --- Window ---

    pub fn window_resized(&mut self) {
        let (w, h) = (self.widgets.wind.w(), self.widgets.wind.h());
        self.widgets.drop_overlay.resize(0, 0, w, h);
        self.apply_layout();
    }

    pub fn shutdown(&mut self) {
        self.layout.end_resize();
        self.widgets.wind.hide();
    }

    // --- View sync ---

    fn apply_layout(&mut self) {
        let widths = self.layout.panel_widths();
        let w = &mut self.widgets;
        let (editor_px, _) = widths.to_pixels(w.body.w(), DIVIDER_WIDTH);

        match widths.editor {
            // Preview takes whatever is left
            Some(_) => {
                w.editor.show();
                w.body.fixed(&w.editor, editor_px);
            }
            None => w.editor.hide(),
        }

        if self.layout.divider_visible() {
            w.divider.show();
        } else {
            w.divider.hide();
        }

        if widths.preview.is_some() {
            w.preview.show();
        } else {
            w.preview.hide();
        }

        w.body.recalc();

        let (editor_at, preview_at) = restore_button_origins(w.body.x(), w.body.y(), w.body.w());
        place_restore_button(&mut w.editor_restore, editor_at, widths.editor.is_none());
        place_restore_button(&mut w.preview_restore, preview_at, widths.preview.is_none());

        w.wind.redraw();
    }

    fn refresh_document_views(&mut self) {
        sync_buffer(&mut self.widgets.buffer, self.store.content());

        // The placeholder spans more than the changed text, so repaint the
        // whole editor when it appears or goes away
        let empty = self.store.content().is_empty();
        if empty != self.editor_was_empty {
            self.editor_was_empty = empty;
            self.widgets.editor.redraw();
        }

        let revision = self.store.revision();
        if !self.layout.preview_minimized() && self.rendered_revision != Some(revision) {
            let page = self
                .renderer
                .render_page(self.store.content(), self.settings.preview_font_size);
            self.widgets.preview.set_value(&page);
            self.rendered_revision = Some(revision);
        }

        let file_name = self.store.file_name().to_string();
        self.widgets
            .wind
            .set_label(&format!("{} - {}", file_name, APP_NAME));
        self.widgets.status_bar.update(
            !self.layout.editor_minimized(),
            !self.layout.preview_minimized(),
            &file_name,
        );
    }

    fn sync_drop_overlay(&mut self) {
        let overlay = &mut self.widgets.drop_overlay;
        match (self.ingester.is_dragging(), overlay.visible()) {
            (true, false) => overlay.show(),
            (false, true) => overlay.hide(),
            _ => return,
        }
        self.widgets.wind.redraw();
    }

    fn show_notice(&self, err: &IngestError) {
        if err.is_validation() {
            tracing::info!("{}", err);
        }
        dialog::alert_default(&err.to_string());
    }
}

fn place_restore_button(button: &mut Button, (x, y): (i32, i32), minimized: bool) {
    if minimized {
        button.resize(x, y, button.w(), button.h());
        button.show();
    } else {
        button.hide();
    }
}
