use fltk::{
    app::Sender,
    button::Button,
    enums::Align,
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use super::theme::apply_status_theme;
use crate::app::domain::messages::Message;

pub const STATUS_BAR_HEIGHT: i32 = 24;

/// Bottom bar: panel toggles on the left, file name and Clear on the right.
pub struct StatusBar {
    pub flex: Flex,
    editor_toggle: Button,
    preview_toggle: Button,
    file_label: Frame,
}

impl StatusBar {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut flex = Flex::default();
        flex.set_type(FlexType::Row);
        flex.set_margins(8, 0, 8, 0);
        flex.set_spacing(16);

        let mut editor_toggle = Button::default().with_label("Editor \u{2713}");
        editor_toggle.set_tooltip("Toggle Editor");
        editor_toggle.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleEditor)
        });

        let mut preview_toggle = Button::default().with_label("Preview \u{2713}");
        preview_toggle.set_tooltip("Toggle Preview");
        preview_toggle.set_callback({
            let s = *sender;
            move |_| s.send(Message::TogglePreview)
        });

        let mut file_label = Frame::default();
        file_label.set_align(Align::Right | Align::Inside);

        let mut clear = Button::default().with_label("Clear");
        clear.set_tooltip("Clear");
        clear.set_callback({
            let s = *sender;
            move |_| s.send(Message::ClearDocument)
        });

        flex.fixed(&editor_toggle, 64);
        flex.fixed(&preview_toggle, 72);
        flex.fixed(&clear, 48);
        flex.end();

        apply_status_theme(
            &mut flex,
            &mut [&mut editor_toggle, &mut preview_toggle, &mut clear],
            &mut file_label,
        );

        Self {
            flex,
            editor_toggle,
            preview_toggle,
            file_label,
        }
    }

    pub fn update(&mut self, editor_visible: bool, preview_visible: bool, file_name: &str) {
        self.editor_toggle.set_label(&toggle_label("Editor", editor_visible));
        self.preview_toggle.set_label(&toggle_label("Preview", preview_visible));
        // '@' starts an FLTK symbol in labels
        self.file_label.set_label(&file_name.replace('@', "@@"));
        self.flex.redraw();
    }
}

fn toggle_label(name: &str, visible: bool) -> String {
    let mark = if visible { '\u{2713}' } else { '\u{25cb}' };
    format!("{} {}", name, mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label("Editor", true), "Editor \u{2713}");
        assert_eq!(toggle_label("Preview", false), "Preview \u{25cb}");
    }
}
