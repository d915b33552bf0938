//! Board and link data model for the storyboard canvas.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a board.
pub type BoardId = Uuid;

/// Unique identifier for a link.
pub type LinkId = Uuid;

/// Default size given to boards created by the loading pipeline.
pub const DEFAULT_BOARD_SIZE: Size = Size::new(240.0, 192.0);

/// One of the four sides of a board where a connector can sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// The links attached to a board, one slot per direction.
///
/// Each board carries at most one incoming and one outgoing link. The slots
/// are owned by the store: `incoming`, if present, names a link whose
/// `end_board` is this board, and `outgoing` one whose `start_board` is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEnds {
    pub incoming: Option<LinkId>,
    pub outgoing: Option<LinkId>,
}

/// A storyboard node representing one visualization state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Unique, stable identifier.
    pub id: BoardId,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// Width and height in canvas units.
    pub size: Size,
    /// Whether this board is the selected one (at most one across the canvas).
    pub selected: bool,
    /// Attached transition links.
    pub links: LinkEnds,
}

impl Board {
    /// Create a new board at the given position.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            selected: false,
            links: LinkEnds::default(),
        }
    }

    /// The board's rectangle in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// The board's center point.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// A directed transition edge from one board's output to another's input.
///
/// The animation descriptor carried by a transition lives outside this crate;
/// here a link is only its endpoints and selection state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Unique, stable identifier.
    pub id: LinkId,
    /// Board whose output connector the link leaves from.
    pub start_board: BoardId,
    /// Board whose input connector the link arrives at.
    pub end_board: BoardId,
    /// Whether this link is the selected one (at most one across the canvas).
    pub selected: bool,
}

impl Link {
    /// Create a new link between two boards.
    pub fn new(start_board: BoardId, end_board: BoardId) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_board,
            end_board,
            selected: false,
        }
    }
}
