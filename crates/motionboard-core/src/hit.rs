//! Pointer-target classification from hit-test metadata.
//!
//! The renderer attaches a [`HitAttributes`] record to every interactive shape
//! it draws. Classification is a pure function of that record: it never
//! consults the store, so it stays bit-exact with whatever the renderer put on
//! screen.

use crate::board::{BoardId, LinkId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of interactive control a rendered shape represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    Board,
    Connector,
    Link,
    /// Decorative shape that must not react to the pointer.
    None,
}

/// Which connector glyph on a board was struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorKind {
    Input,
    Output,
    Bookmark,
}

/// Hit-test metadata carried by a rendered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitAttributes {
    pub kind: ControlKind,
    /// The domain item the shape belongs to: a board id for boards and
    /// connectors, a link id for links.
    pub id: Uuid,
    /// Present only on connector shapes.
    pub connector: Option<ConnectorKind>,
}

impl HitAttributes {
    /// Metadata for a board body shape.
    pub fn board(id: BoardId) -> Self {
        Self {
            kind: ControlKind::Board,
            id,
            connector: None,
        }
    }

    /// Metadata for a connector glyph on a board.
    pub fn connector(board: BoardId, kind: ConnectorKind) -> Self {
        Self {
            kind: ControlKind::Connector,
            id: board,
            connector: Some(kind),
        }
    }

    /// Metadata for a link curve shape.
    pub fn link(id: LinkId) -> Self {
        Self {
            kind: ControlKind::Link,
            id,
            connector: None,
        }
    }
}

/// A classified pointer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Board(BoardId),
    Connector { board: BoardId, kind: ConnectorKind },
    Link(LinkId),
}

impl HitTarget {
    /// The board this target belongs to, if it is a board or one of its
    /// connectors.
    pub fn board_id(&self) -> Option<BoardId> {
        match self {
            Self::Board(id) | Self::Connector { board: id, .. } => Some(*id),
            Self::Link(_) => None,
        }
    }
}

/// Classify a struck shape's metadata into a pointer target.
///
/// Returns `None` for background: no metadata, [`ControlKind::None`], or a
/// connector record missing its connector kind (malformed metadata is treated
/// as inert rather than guessed at).
pub fn classify(attributes: Option<&HitAttributes>) -> Option<HitTarget> {
    let attrs = attributes?;
    match attrs.kind {
        ControlKind::Board => Some(HitTarget::Board(attrs.id)),
        ControlKind::Connector => attrs
            .connector
            .map(|kind| HitTarget::Connector { board: attrs.id, kind }),
        ControlKind::Link => Some(HitTarget::Link(attrs.id)),
        ControlKind::None => None,
    }
}
