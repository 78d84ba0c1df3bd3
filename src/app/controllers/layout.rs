//! Split-panel layout: panel visibility and the divider drag.
//!
//! A resize gesture holds a [`PointerCapture`] for exactly as long as it
//! lasts. The capture is released when the gesture ends, when a panel is
//! hidden mid-drag, or when the controller itself goes away.

/// Smallest editor share the divider can produce, in percent.
pub const MIN_SPLIT: f64 = 20.0;
/// Largest editor share the divider can produce, in percent.
pub const MAX_SPLIT: f64 = 80.0;
pub const DEFAULT_SPLIT: f64 = 50.0;

pub fn clamp_split(raw: f64) -> f64 {
    raw.clamp(MIN_SPLIT, MAX_SPLIT)
}

/// Source of global pointer events for the duration of a resize.
pub trait PointerGrab {
    /// Start routing pointer motion and release to the resize handler.
    fn grab(&mut self);
    /// Stop routing pointer events. Called exactly once per `grab`.
    fn release(&mut self);
}

/// An acquired grab. Dropping it releases the grab.
pub struct PointerCapture<G: PointerGrab> {
    grab: G,
}

impl<G: PointerGrab> PointerCapture<G> {
    fn acquire(mut grab: G) -> Self {
        grab.grab();
        Self { grab }
    }
}

impl<G: PointerGrab> Drop for PointerCapture<G> {
    fn drop(&mut self) {
        self.grab.release();
    }
}

/// Which panels get space, as percentages of the container width.
/// `None` means the panel renders nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelWidths {
    pub editor: Option<f64>,
    pub preview: Option<f64>,
}

impl PanelWidths {
    /// Convert to pixel widths for a container `total` pixels wide, with
    /// `divider` pixels reserved when both panels show.
    pub fn to_pixels(&self, total: i32, divider: i32) -> (i32, i32) {
        let total = total.max(0);
        match (self.editor, self.preview) {
            (Some(editor), Some(_)) => {
                let usable = (total - divider).max(0);
                let editor_px = (usable as f64 * editor / 100.0).round() as i32;
                (editor_px, usable - editor_px)
            }
            (Some(_), None) => (total, 0),
            (None, Some(_)) => (0, total),
            (None, None) => (0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    pub split_position: f64,
    pub editor_minimized: bool,
    pub preview_minimized: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            split_position: DEFAULT_SPLIT,
            editor_minimized: false,
            preview_minimized: false,
        }
    }
}

pub struct LayoutController<G: PointerGrab> {
    state: LayoutState,
    capture: Option<PointerCapture<G>>,
}

impl<G: PointerGrab> LayoutController<G> {
    pub fn new(split_position: f64) -> Self {
        Self {
            state: LayoutState {
                split_position,
                ..LayoutState::default()
            },
            capture: None,
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn split_position(&self) -> f64 {
        self.state.split_position
    }

    pub fn editor_minimized(&self) -> bool {
        self.state.editor_minimized
    }

    pub fn preview_minimized(&self) -> bool {
        self.state.preview_minimized
    }

    pub fn resizing(&self) -> bool {
        self.capture.is_some()
    }

    /// The divider only exists while both panels are shown.
    pub fn divider_visible(&self) -> bool {
        !self.state.editor_minimized && !self.state.preview_minimized
    }

    pub fn toggle_editor_visible(&mut self) {
        self.state.editor_minimized = !self.state.editor_minimized;
        self.cancel_resize_if_hidden();
        tracing::debug!(minimized = self.state.editor_minimized, "Editor panel toggled");
    }

    pub fn toggle_preview_visible(&mut self) {
        self.state.preview_minimized = !self.state.preview_minimized;
        self.cancel_resize_if_hidden();
        tracing::debug!(minimized = self.state.preview_minimized, "Preview panel toggled");
    }

    /// Start a divider drag. Returns false (and leaves `grab` unused) when
    /// the divider is hidden or a drag is already active.
    pub fn begin_resize(&mut self, grab: G) -> bool {
        if !self.divider_visible() || self.resizing() {
            return false;
        }
        self.capture = Some(PointerCapture::acquire(grab));
        tracing::debug!(split = self.state.split_position, "Resize started");
        true
    }

    /// Move the divider to `pointer_x`. Ignored unless a drag is active.
    pub fn update_resize(&mut self, pointer_x: f64, container_left: f64, container_width: f64) {
        if !self.resizing() {
            return;
        }
        let raw = (pointer_x - container_left) / container_width * 100.0;
        // Zero-width container with the pointer on its edge
        if raw.is_nan() {
            return;
        }
        self.state.split_position = clamp_split(raw);
    }

    pub fn end_resize(&mut self) {
        if self.capture.take().is_some() {
            tracing::debug!(split = self.state.split_position, "Resize finished");
        }
    }

    pub fn panel_widths(&self) -> PanelWidths {
        let LayoutState {
            split_position,
            editor_minimized,
            preview_minimized,
        } = self.state;

        let editor = match (editor_minimized, preview_minimized) {
            (true, _) => None,
            (false, true) => Some(100.0),
            (false, false) => Some(split_position),
        };
        let preview = match (preview_minimized, editor_minimized) {
            (true, _) => None,
            (false, true) => Some(100.0),
            (false, false) => Some(100.0 - split_position),
        };
        PanelWidths { editor, preview }
    }

    fn cancel_resize_if_hidden(&mut self) {
        if !self.divider_visible() {
            self.end_resize();
        }
    }
}
