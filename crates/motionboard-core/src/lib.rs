//! Motionboard Core Library
//!
//! Platform-agnostic interaction engine for the Motionboard storyboard
//! canvas: raw pointer events are classified against hit-test metadata,
//! shaped into gesture sessions, and dispatched as semantic operations
//! (select, move, link creation) on the board/link store. Rendering,
//! animation generation, and persistence live in other layers.

pub mod board;
pub mod connector;
pub mod dispatch;
pub mod gesture;
pub mod hit;
pub mod input;
pub mod layout;
pub mod link_tool;
pub mod store;

pub use board::{Board, BoardId, Link, LinkEnds, LinkId, Side, DEFAULT_BOARD_SIZE};
pub use connector::{ConnectorLayout, ConnectorPlacement, ANCHOR_OFFSET, SAME_SIDE_SPREAD};
pub use dispatch::GestureDispatcher;
pub use gesture::{GestureComposer, GestureEvent};
pub use hit::{classify, ConnectorKind, ControlKind, HitAttributes, HitTarget};
pub use input::{Modifiers, MouseButton, PointerEvent};
pub use layout::{intersects, place, PLACEMENT_GUTTER, PLACEMENT_MARGIN};
pub use link_tool::{LinkTool, LinkToolState};
pub use store::{BoardStore, EndpointOccupancy, LinkError};
