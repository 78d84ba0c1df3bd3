//! The window as a drop target.
//!
//! FLTK announces a drop as `DndEnter`/`DndDrag`/`DndLeave`, then
//! `DndRelease` followed by a `Paste` whose text is the payload: one path
//! or `file://` URI per line. The handler runs before the window passes
//! events to its children, so the editor never inserts the payload as
//! text.

use fltk::{
    app::{self, Sender},
    enums::Event,
    prelude::*,
    window::Window,
};

use crate::app::controllers::dragdrop::DroppedFile;
use crate::app::domain::messages::Message;
use crate::app::services::text_ops::path_from_drop_line;

pub fn parse_dropped_paths(payload: &str) -> Vec<DroppedFile> {
    payload
        .lines()
        .filter_map(path_from_drop_line)
        .map(DroppedFile::from_path)
        .collect()
}

/// Decides whether a `Paste` carries a drop payload: only the first paste
/// after a release, and never after a new `DndEnter` or a `DndLeave`.
#[derive(Debug, Default)]
struct PayloadGate {
    armed: bool,
}

impl PayloadGate {
    fn arm(&mut self) {
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

pub fn install_drop_handler(window: &mut Window, sender: &Sender<Message>) {
    let s = *sender;
    let mut gate = PayloadGate::default();

    window.handle(move |_, event| match event {
        Event::DndEnter => {
            gate.disarm();
            s.send(Message::DragEnter);
            true
        }
        Event::DndDrag => {
            s.send(Message::DragOver);
            true
        }
        Event::DndLeave => {
            gate.disarm();
            s.send(Message::DragLeave);
            true
        }
        Event::DndRelease => {
            gate.arm();
            true
        }
        Event::Paste => {
            if !gate.take() {
                return false;
            }
            s.send(Message::Drop(parse_dropped_paths(&app::event_text())));
            true
        }
        // A resize grab routes releases outside the divider here
        Event::Released => {
            s.send(Message::ResizeEnd);
            false
        }
        _ => false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn test_parse_uri_list() {
        let files = parse_dropped_paths("file:///tmp/a%20b.md\r\nfile:///tmp/pic.png\r\n");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "a b.md");
        assert_eq!(files[0].path, PathBuf::from("/tmp/a b.md"));
        assert_eq!(files[1].name, "pic.png");
    }

    #[test]
    fn test_parse_plain_paths() {
        let files = parse_dropped_paths("notes.md\nREADME.markdown\n");
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["notes.md", "README.markdown"]);
    }

    #[test]
    fn test_paste_after_release_is_a_drop() {
        let mut gate = PayloadGate::default();
        assert!(!gate.take());

        gate.arm();
        assert!(gate.take());
        // Only once
        assert!(!gate.take());
    }

    #[test]
    fn test_cancelled_release_does_not_capture_later_paste() {
        let mut gate = PayloadGate::default();

        // Release with no payload, then the next gesture starts or leaves
        gate.arm();
        gate.disarm();
        assert!(!gate.take());

        gate.arm();
        gate.disarm();
        gate.arm();
        assert!(gate.take());
    }

    #[test]
    fn test_parse_empty_payload() {
        assert!(parse_dropped_paths("").is_empty());
        assert!(parse_dropped_paths("\n\r\n").is_empty());
    }
}
