use fltk::{
    button::Button,
    enums::{Color, FrameType},
    frame::Frame,
    group::Flex,
    misc::HelpView,
    prelude::*,
    text::TextEditor,
    window::Window,
};

pub const BACKGROUND: Color = Color::from_rgb(13, 13, 13);
pub const PANEL: Color = Color::from_rgb(20, 20, 20);
pub const BORDER: Color = Color::from_rgb(51, 51, 51);
pub const TEXT: Color = Color::from_rgb(230, 230, 230);
pub const TEXT_DIM: Color = Color::from_rgb(150, 150, 150);
pub const SELECTION: Color = Color::from_rgb(60, 70, 100);

pub fn apply_editor_theme(editor: &mut TextEditor, font_size: i32) {
    editor.set_color(PANEL);
    editor.set_text_color(TEXT);
    editor.set_cursor_color(Color::White);
    editor.set_selection_color(SELECTION);
    editor.set_text_size(font_size);
    editor.set_frame(FrameType::FlatBox);
}

pub fn apply_preview_theme(preview: &mut HelpView) {
    preview.set_color(BACKGROUND);
    preview.set_frame(FrameType::FlatBox);
}

pub fn apply_divider_theme(divider: &mut Frame) {
    divider.set_frame(FrameType::FlatBox);
    divider.set_color(BORDER);
    divider.set_tooltip("Drag to resize");
}

pub fn apply_status_theme(bar: &mut Flex, buttons: &mut [&mut Button], label: &mut Frame) {
    bar.set_frame(FrameType::FlatBox);
    bar.set_color(Color::Black);
    for button in buttons.iter_mut() {
        button.set_frame(FrameType::FlatBox);
        button.set_down_frame(FrameType::FlatBox);
        button.set_color(Color::Black);
        button.set_selection_color(BORDER);
        button.set_label_color(Color::White);
        button.set_label_size(11);
        button.clear_visible_focus();
    }
    label.set_label_color(TEXT_DIM);
    label.set_label_size(11);
}

pub fn apply_restore_theme(button: &mut Button) {
    button.set_frame(FrameType::RFlatBox);
    button.set_down_frame(FrameType::RFlatBox);
    button.set_color(BORDER);
    button.set_selection_color(SELECTION);
    button.set_label_color(TEXT);
    button.set_label_size(11);
    button.clear_visible_focus();
}

pub fn apply_overlay_theme(overlay: &mut Frame) {
    overlay.set_frame(FrameType::FlatBox);
    overlay.set_color(Color::from_rgb(0, 0, 0));
    overlay.set_label_color(TEXT);
    overlay.set_label_size(20);
}

pub fn apply_window_theme(window: &mut Window) {
    window.set_color(BACKGROUND);
    window.set_label_color(TEXT);
}
