use fltk::{
    app::{self, Sender},
    button::Button,
    draw,
    enums::{Align, Cursor, Event, Font},
    frame::Frame,
    group::{Flex, FlexType},
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::drop_surface::install_drop_handler;
use super::status_bar::{STATUS_BAR_HEIGHT, StatusBar};
use super::theme::{
    TEXT_DIM, apply_divider_theme, apply_editor_theme, apply_overlay_theme, apply_preview_theme,
    apply_restore_theme, apply_window_theme,
};
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;

pub const DIVIDER_WIDTH: i32 = 4;
pub const APP_NAME: &str = "Livemark";
pub const EDITOR_PLACEHOLDER: &str = "Type your markdown here or drag and drop a .md file...";

const RESTORE_BUTTON_WIDTH: i32 = 64;
const RESTORE_BUTTON_HEIGHT: i32 = 22;
const RESTORE_MARGIN: i32 = 8;

pub struct MainWidgets {
    pub wind: Window,
    /// Row holding editor, divider and preview; the split is measured against it.
    pub body: Flex,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub divider: Frame,
    pub preview: HelpView,
    pub status_bar: StatusBar,
    /// Floating buttons shown over the body while their panel is minimized.
    pub editor_restore: Button,
    pub preview_restore: Button,
    pub drop_overlay: Frame,
}

/// Where the restore buttons sit: editor at the top-left of the body,
/// preview at the top-right.
pub fn restore_button_origins(body_x: i32, body_y: i32, body_w: i32) -> ((i32, i32), (i32, i32)) {
    let y = body_y + RESTORE_MARGIN;
    let editor = (body_x + RESTORE_MARGIN, y);
    let preview = (body_x + body_w - RESTORE_BUTTON_WIDTH - RESTORE_MARGIN, y);
    (editor, preview)
}

fn restore_button(
    label: &'static str,
    tooltip: &str,
    sender: &Sender<Message>,
    msg: fn() -> Message,
) -> Button {
    let mut button = Button::new(0, 0, RESTORE_BUTTON_WIDTH, RESTORE_BUTTON_HEIGHT, label);
    button.set_tooltip(tooltip);
    apply_restore_theme(&mut button);
    let s = *sender;
    button.set_callback(move |_| s.send(msg()));
    button.hide();
    button
}

/// Dim hint drawn over the editor while its buffer is empty.
fn install_placeholder(editor: &mut TextEditor) {
    editor.draw(|e| {
        let empty = e.buffer().map(|b| b.length() == 0).unwrap_or(true);
        if !empty {
            return;
        }
        let size = e.text_size();
        draw::set_font(Font::Helvetica, size);
        draw::set_draw_color(TEXT_DIM);
        draw::draw_text2(
            EDITOR_PLACEHOLDER,
            e.x() + 6,
            e.y() + 4,
            e.w() - 12,
            size + 6,
            Align::Left | Align::Top | Align::Inside | Align::Clip,
        );
    });
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, None);
    wind.set_label(&format!("untitled.md - {}", APP_NAME));
    wind.set_xclass(APP_NAME);
    apply_window_theme(&mut wind);

    let mut root = Flex::new(0, 0, w, h, None);
    root.set_type(FlexType::Column);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);

    let mut buffer = TextBuffer::default();
    let mut editor = TextEditor::default();
    editor.set_buffer(buffer.clone());
    editor.wrap_mode(WrapMode::AtBounds, 0);
    apply_editor_theme(&mut editor, settings.font_size as i32);
    install_placeholder(&mut editor);

    let mut divider = Frame::default();
    apply_divider_theme(&mut divider);
    body.fixed(&divider, DIVIDER_WIDTH);

    let mut preview = HelpView::default();
    apply_preview_theme(&mut preview);

    body.end();

    let status_bar = StatusBar::new(sender);
    root.fixed(&status_bar.flex, STATUS_BAR_HEIGHT);
    root.end();

    let editor_restore = restore_button("Editor", "Show Editor", sender, || Message::ToggleEditor);
    let preview_restore =
        restore_button("Preview", "Show Preview", sender, || Message::TogglePreview);

    let mut drop_overlay = Frame::new(
        0,
        0,
        w,
        h,
        "\u{2193}\n\nDrop markdown file\n.md or .markdown",
    );
    drop_overlay.set_align(Align::Center | Align::Inside);
    apply_overlay_theme(&mut drop_overlay);
    drop_overlay.hide();

    wind.end();
    wind.resizable(&root);

    buffer.add_modify_callback({
        let s = *sender;
        move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::EditorChanged);
            }
        }
    });

    divider.handle({
        let s = *sender;
        move |f, event| match event {
            Event::Enter => {
                if let Some(mut win) = f.window() {
                    win.set_cursor(Cursor::WE);
                }
                true
            }
            Event::Leave => {
                if let Some(mut win) = f.window() {
                    win.set_cursor(Cursor::Default);
                }
                true
            }
            Event::Push => {
                s.send(Message::ResizeBegin);
                true
            }
            Event::Drag => {
                s.send(Message::ResizeMove(app::event_x()));
                true
            }
            Event::Released => {
                s.send(Message::ResizeEnd);
                true
            }
            _ => false,
        }
    });

    install_drop_handler(&mut wind, sender);

    wind.resize_callback({
        let s = *sender;
        move |_, _, _, _, _| s.send(Message::WindowResized)
    });

    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        body,
        editor,
        buffer,
        divider,
        preview,
        status_bar,
        editor_restore,
        preview_restore,
        drop_overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_buttons_sit_in_opposite_corners() {
        let (editor, preview) = restore_button_origins(0, 0, 1000);
        assert_eq!(editor, (RESTORE_MARGIN, RESTORE_MARGIN));
        assert_eq!(preview.0 + RESTORE_BUTTON_WIDTH + RESTORE_MARGIN, 1000);
        assert_eq!(preview.1, editor.1);

        let (editor, _) = restore_button_origins(10, 30, 400);
        assert_eq!(editor, (18, 38));
    }
}
