use std::path::PathBuf;

use fltk::app;

use livemark::app::domain::sample::WELCOME_DOCUMENT;
use livemark::app::domain::{AppSettings, Message};
use livemark::app::infrastructure::logging;
use livemark::app::state::AppState;
use livemark::ui::main_window::build_main_window;

fn main() {
    logging::init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&settings, &sender);
    let mut state = AppState::new(widgets, settings, sender, WELCOME_DOCUMENT);
    state.start();

    if let Some(path) = std::env::args_os().nth(1) {
        state.open_path(PathBuf::from(path));
    }

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::ToggleEditor => state.toggle_editor(),
            Message::TogglePreview => state.toggle_preview(),
            Message::ClearDocument => state.clear_document(),
            Message::EditorChanged => state.editor_changed(),
            Message::ResizeBegin => state.resize_begin(),
            Message::ResizeMove(x) => state.resize_move(x),
            Message::ResizeEnd => state.resize_end(),
            Message::DragEnter => state.drag_enter(),
            Message::DragOver => state.drag_over(),
            Message::DragLeave => state.drag_leave(),
            Message::Drop(files) => state.drop_files(files),
            Message::FileRead(read) => state.file_read(read),
            Message::WindowResized => state.window_resized(),
            Message::WindowClose => {
                state.shutdown();
                app.quit();
            }
        }
    }
}
