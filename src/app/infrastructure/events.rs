//! FLTK implementations of the controller seams.

use fltk::{app, window::Window};

use crate::app::controllers::dragdrop::{FileRead, ReadSink};
use crate::app::controllers::layout::PointerGrab;
use crate::app::domain::messages::Message;

/// Finished reads go back to the event loop as `Message::FileRead`.
/// Sending also wakes the loop.
impl ReadSink for app::Sender<Message> {
    fn deliver(&self, read: FileRead) {
        self.send(Message::FileRead(read));
    }
}

/// Routes every pointer event to the main window while held, so a drag
/// keeps tracking (and sees the release) outside the divider.
pub struct WindowGrab {
    window: Window,
}

impl WindowGrab {
    pub fn new(window: &Window) -> Self {
        Self { window: window.clone() }
    }
}

impl PointerGrab for WindowGrab {
    fn grab(&mut self) {
        app::set_grab(Some(self.window.clone()));
    }

    fn release(&mut self) {
        app::set_grab(None::<Window>);
    }
}
