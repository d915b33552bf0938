//! Transient state for an in-progress link-creation drag.
//!
//! The link tool is presentation-only: it exists from the drag-start on an
//! output connector until the drag ends, never enters the store, and is torn
//! down at session end whether or not a link was created.

use crate::board::BoardId;
use kurbo::{CubicBez, Point, Vec2};

/// Live state of an out-connector drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkToolState {
    /// Board the drag started from.
    pub source: BoardId,
    /// Out-connector anchor the provisional curve starts at.
    pub anchor: Point,
    /// Current pointer displacement since the press.
    pub offset: Vec2,
}

/// Overlay tracking the provisional link curve while the user drags.
#[derive(Debug, Clone, Default)]
pub struct LinkTool {
    state: Option<LinkToolState>,
}

impl LinkTool {
    /// Create a closed link tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay for a drag starting at `anchor` on `source`'s out
    /// connector.
    pub fn open(&mut self, source: BoardId, anchor: Point) {
        log::debug!("link tool opened from board {source}");
        self.state = Some(LinkToolState {
            source,
            anchor,
            offset: Vec2::ZERO,
        });
    }

    /// Update the pointer displacement; no-op while closed.
    pub fn update(&mut self, total: Vec2) {
        if let Some(state) = &mut self.state {
            state.offset = total;
        }
    }

    /// Tear the overlay down.
    pub fn close(&mut self) {
        if self.state.take().is_some() {
            log::debug!("link tool closed");
        }
    }

    /// Whether a link drag is in progress.
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// The current drag state, if open.
    pub fn state(&self) -> Option<&LinkToolState> {
        self.state.as_ref()
    }

    /// The board the drag started from, if open.
    pub fn source(&self) -> Option<BoardId> {
        self.state.map(|s| s.source)
    }

    /// Position of the draggable handle at the free end of the curve.
    pub fn handle_position(&self) -> Option<Point> {
        self.state.map(|s| s.anchor + s.offset)
    }

    /// The provisional curve from the anchor to the handle: a cubic with
    /// horizontal tangents at both ends, matching the rendered link curves.
    pub fn curve(&self) -> Option<CubicBez> {
        let state = self.state?;
        let start = state.anchor;
        let end = start + state.offset;
        let reach = (end.x - start.x) * 0.5;
        Some(CubicBez::new(
            start,
            Point::new(start.x + reach, start.y),
            Point::new(end.x - reach, end.y),
            end,
        ))
    }
}
