//! Semantic dispatch of gesture events onto the store.
//!
//! The dispatcher is the only writer of the store during interaction. Its
//! observable outputs are exactly: selection changes, board moves, link
//! creation, and the link tool overlay opening and closing. It retains no
//! state beyond that transient overlay.

use crate::connector;
use crate::gesture::GestureEvent;
use crate::hit::{ConnectorKind, HitTarget};
use crate::link_tool::LinkTool;
use crate::store::BoardStore;

/// Turns gesture-session events into store operations.
#[derive(Debug, Clone, Default)]
pub struct GestureDispatcher {
    link_tool: LinkTool,
}

impl GestureDispatcher {
    /// Create a dispatcher with a closed link tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// The link tool overlay, for the renderer to draw.
    pub fn link_tool(&self) -> &LinkTool {
        &self.link_tool
    }

    /// Apply one gesture event to the store.
    pub fn dispatch(&mut self, store: &mut BoardStore, event: &GestureEvent) {
        match *event {
            GestureEvent::Down { target, .. } => match target {
                HitTarget::Board(id) | HitTarget::Connector { board: id, .. } => {
                    store.select_board(id);
                }
                HitTarget::Link(id) => {
                    store.select_link(id);
                }
            },

            GestureEvent::DragStart {
                target: HitTarget::Connector { board, kind },
                ..
            } => match kind {
                ConnectorKind::Output => {
                    if let Some(source) = store.board(board) {
                        let anchor = connector::layout_for(store, source).output.anchor;
                        self.link_tool.open(board, anchor);
                    }
                }
                // Recognized but reserved: dragging from the input connector.
                ConnectorKind::Input => {}
                // Recognized but reserved: dragging from the bookmark handle.
                ConnectorKind::Bookmark => {}
            },
            GestureEvent::DragStart { .. } => {}

            GestureEvent::Drag {
                target,
                origin,
                total,
                ..
            } => match target {
                HitTarget::Board(id) => {
                    store.move_board(id, origin + total);
                }
                HitTarget::Connector { .. } => {
                    self.link_tool.update(total);
                }
                HitTarget::Link(_) => {}
            },

            GestureEvent::DragEnd {
                target:
                    HitTarget::Connector {
                        board,
                        kind: ConnectorKind::Output,
                    },
                release,
                ..
            } => {
                match release {
                    Some(HitTarget::Board(end)) if end != board => {
                        if let Err(err) = store.create_link(board, end) {
                            log::debug!("link creation rejected: {err}");
                        }
                    }
                    Some(HitTarget::Board(_)) => {
                        log::debug!("ignoring link drop on its own source board");
                    }
                    _ => {}
                }
                self.link_tool.close();
            }
            GestureEvent::DragEnd {
                target: HitTarget::Connector { .. },
                ..
            } => {
                self.link_tool.close();
            }
            GestureEvent::DragEnd { .. } => {}

            GestureEvent::CanvasDown { .. } => {
                store.clear_selection();
            }
            GestureEvent::CanvasDragEnd { .. } => {}
        }
    }
}
