//! In-memory board/link store and its atomic operations.
//!
//! The gesture layer mutates the canvas only through the discrete operations
//! defined here; each call leaves the store consistent. The store owns the
//! cross-item invariants: link endpoint symmetry, one link per endpoint, and
//! per-collection selection exclusivity.

use crate::board::{Board, BoardId, Link, LinkId};
use crate::layout;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Why a link-creation request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link endpoints must be distinct boards")]
    SelfLink,
    #[error("board not found: {0}")]
    UnknownBoard(BoardId),
    #[error("output connector of board {0} already carries a link")]
    OutputOccupied(BoardId),
    #[error("input connector of board {0} already carries a link")]
    InputOccupied(BoardId),
}

/// Occupancy queries over a board's link endpoints.
///
/// Link creation consults this capability rather than poking at the `LinkEnds`
/// fields directly, so the one-link-per-endpoint rule stays an explicit
/// invariant check even if a multi-link representation replaces the singular
/// slots someday.
pub trait EndpointOccupancy {
    /// Whether the board's output connector already carries a link.
    fn output_occupied(&self, id: BoardId) -> bool;

    /// Whether the board's input connector already carries a link.
    fn input_occupied(&self, id: BoardId) -> bool;
}

/// The board/link collection backing the canvas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardStore {
    boards: HashMap<BoardId, Board>,
    links: HashMap<LinkId, Link>,
    /// Creation order, for deterministic listing.
    board_order: Vec<BoardId>,
    link_order: Vec<LinkId>,
}

impl BoardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Boards in creation order.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.board_order.iter().filter_map(|id| self.boards.get(id))
    }

    /// Links in creation order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.link_order.iter().filter_map(|id| self.links.get(id))
    }

    /// Get a board by id.
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.get(&id)
    }

    /// Get a link by id.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }

    /// Number of boards.
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Check if the store holds no boards.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The rectangles of all boards, in creation order.
    pub fn board_rects(&self) -> Vec<Rect> {
        self.boards().map(Board::bounds).collect()
    }

    /// Create a board, auto-placed so it does not overlap existing boards
    /// within `viewport`. This is the loading pipeline's entry point.
    pub fn create_board(&mut self, size: Size, viewport: Size) -> BoardId {
        let position = layout::place(&self.board_rects(), size, viewport);
        let board = Board::new(position, size);
        let id = board.id;
        self.board_order.push(id);
        self.boards.insert(id, board);
        id
    }

    /// Remove a board, cascade-removing any attached links.
    pub fn remove_board(&mut self, id: BoardId) -> Option<Board> {
        let ends = self.boards.get(&id)?.links;
        if let Some(link_id) = ends.incoming {
            self.remove_link(link_id);
        }
        if let Some(link_id) = ends.outgoing {
            self.remove_link(link_id);
        }
        self.board_order.retain(|&b| b != id);
        self.boards.remove(&id)
    }

    /// Move a board to an absolute position. Returns false if the board is
    /// gone.
    pub fn move_board(&mut self, id: BoardId, position: Point) -> bool {
        match self.boards.get_mut(&id) {
            Some(board) => {
                board.position = position;
                true
            }
            None => false,
        }
    }

    /// Select a board, deselecting every other board. Link selection is left
    /// untouched. Returns false if the board is gone.
    pub fn select_board(&mut self, id: BoardId) -> bool {
        if !self.boards.contains_key(&id) {
            return false;
        }
        for board in self.boards.values_mut() {
            board.selected = board.id == id;
        }
        true
    }

    /// Select a link, deselecting every other link. Board selection is left
    /// untouched. Returns false if the link is gone.
    pub fn select_link(&mut self, id: LinkId) -> bool {
        if !self.links.contains_key(&id) {
            return false;
        }
        for link in self.links.values_mut() {
            link.selected = link.id == id;
        }
        true
    }

    /// Clear selection on both boards and links.
    pub fn clear_selection(&mut self) {
        for board in self.boards.values_mut() {
            board.selected = false;
        }
        for link in self.links.values_mut() {
            link.selected = false;
        }
    }

    /// The selected board, if any.
    pub fn selected_board(&self) -> Option<&Board> {
        self.boards.values().find(|b| b.selected)
    }

    /// The selected link, if any.
    pub fn selected_link(&self) -> Option<&Link> {
        self.links.values().find(|l| l.selected)
    }

    /// Create a link from `start`'s output connector to `end`'s input
    /// connector, enforcing the endpoint invariants.
    pub fn create_link(&mut self, start: BoardId, end: BoardId) -> Result<LinkId, LinkError> {
        if start == end {
            return Err(LinkError::SelfLink);
        }
        if !self.boards.contains_key(&start) {
            return Err(LinkError::UnknownBoard(start));
        }
        if !self.boards.contains_key(&end) {
            return Err(LinkError::UnknownBoard(end));
        }
        if self.output_occupied(start) {
            return Err(LinkError::OutputOccupied(start));
        }
        if self.input_occupied(end) {
            return Err(LinkError::InputOccupied(end));
        }

        let link = Link::new(start, end);
        let id = link.id;
        self.link_order.push(id);
        self.links.insert(id, link);
        if let Some(board) = self.boards.get_mut(&start) {
            board.links.outgoing = Some(id);
        }
        if let Some(board) = self.boards.get_mut(&end) {
            board.links.incoming = Some(id);
        }
        log::debug!("created link {start} -> {end}");
        Ok(id)
    }

    /// Remove a link, detaching it from both endpoint boards.
    pub fn remove_link(&mut self, id: LinkId) -> Option<Link> {
        let link = self.links.remove(&id)?;
        self.link_order.retain(|&l| l != id);
        if let Some(board) = self.boards.get_mut(&link.start_board) {
            if board.links.outgoing == Some(id) {
                board.links.outgoing = None;
            }
        }
        if let Some(board) = self.boards.get_mut(&link.end_board) {
            if board.links.incoming == Some(id) {
                board.links.incoming = None;
            }
        }
        Some(link)
    }

    /// Serialize the store to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a store from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl EndpointOccupancy for BoardStore {
    fn output_occupied(&self, id: BoardId) -> bool {
        self.boards
            .get(&id)
            .is_some_and(|b| b.links.outgoing.is_some())
    }

    fn input_occupied(&self, id: BoardId) -> bool {
        self.boards
            .get(&id)
            .is_some_and(|b| b.links.incoming.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DEFAULT_BOARD_SIZE;

    const VIEWPORT: Size = Size::new(1080.0, 670.0);

    fn store_with_boards(n: usize) -> (BoardStore, Vec<BoardId>) {
        let mut store = BoardStore::new();
        let ids = (0..n)
            .map(|_| store.create_board(DEFAULT_BOARD_SIZE, VIEWPORT))
            .collect();
        (store, ids)
    }

    #[test]
    fn test_create_board_auto_places() {
        let (store, ids) = store_with_boards(2);
        assert_eq!(store.board(ids[0]).unwrap().position, Point::new(20.0, 20.0));
        assert_eq!(store.board(ids[1]).unwrap().position, Point::new(320.0, 20.0));
    }

    #[test]
    fn test_boards_listed_in_creation_order() {
        let (store, ids) = store_with_boards(3);
        let listed: Vec<BoardId> = store.boards().map(|b| b.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_move_board() {
        let (mut store, ids) = store_with_boards(1);
        assert!(store.move_board(ids[0], Point::new(400.0, 300.0)));
        assert_eq!(store.board(ids[0]).unwrap().position, Point::new(400.0, 300.0));
        assert!(!store.move_board(BoardId::new_v4(), Point::ZERO));
    }

    #[test]
    fn test_board_selection_is_exclusive() {
        let (mut store, ids) = store_with_boards(2);
        store.select_board(ids[0]);
        store.select_board(ids[1]);

        assert!(!store.board(ids[0]).unwrap().selected);
        assert!(store.board(ids[1]).unwrap().selected);
        assert_eq!(store.selected_board().unwrap().id, ids[1]);
    }

    #[test]
    fn test_selection_is_independent_per_collection() {
        let (mut store, ids) = store_with_boards(2);
        let link = store.create_link(ids[0], ids[1]).unwrap();

        store.select_board(ids[0]);
        store.select_link(link);
        // Selecting the link did not deselect the board.
        assert!(store.selected_board().is_some());
        assert!(store.selected_link().is_some());

        store.clear_selection();
        assert!(store.selected_board().is_none());
        assert!(store.selected_link().is_none());
    }

    #[test]
    fn test_create_link_sets_endpoints() {
        let (mut store, ids) = store_with_boards(2);
        let link_id = store.create_link(ids[0], ids[1]).unwrap();

        let link = store.link(link_id).unwrap();
        assert_eq!(link.start_board, ids[0]);
        assert_eq!(link.end_board, ids[1]);
        assert_eq!(store.board(ids[0]).unwrap().links.outgoing, Some(link_id));
        assert_eq!(store.board(ids[1]).unwrap().links.incoming, Some(link_id));
    }

    #[test]
    fn test_create_link_rejects_self_link() {
        let (mut store, ids) = store_with_boards(1);
        assert_eq!(store.create_link(ids[0], ids[0]), Err(LinkError::SelfLink));
        assert_eq!(store.link_count(), 0);
    }

    #[test]
    fn test_create_link_rejects_unknown_board() {
        let (mut store, ids) = store_with_boards(1);
        let ghost = BoardId::new_v4();
        assert_eq!(
            store.create_link(ids[0], ghost),
            Err(LinkError::UnknownBoard(ghost))
        );
        assert_eq!(
            store.create_link(ghost, ids[0]),
            Err(LinkError::UnknownBoard(ghost))
        );
    }

    #[test]
    fn test_create_link_rejects_occupied_endpoints() {
        let (mut store, ids) = store_with_boards(3);
        store.create_link(ids[0], ids[1]).unwrap();

        // ids[0]'s output already carries a link.
        assert_eq!(
            store.create_link(ids[0], ids[2]),
            Err(LinkError::OutputOccupied(ids[0]))
        );
        // ids[1]'s input already carries a link.
        assert_eq!(
            store.create_link(ids[2], ids[1]),
            Err(LinkError::InputOccupied(ids[1]))
        );
        assert_eq!(store.link_count(), 1);
    }

    #[test]
    fn test_remove_link_detaches_boards() {
        let (mut store, ids) = store_with_boards(2);
        let link_id = store.create_link(ids[0], ids[1]).unwrap();

        let removed = store.remove_link(link_id).unwrap();
        assert_eq!(removed.id, link_id);
        assert!(store.board(ids[0]).unwrap().links.outgoing.is_none());
        assert!(store.board(ids[1]).unwrap().links.incoming.is_none());

        // The endpoints are free again.
        assert!(store.create_link(ids[0], ids[1]).is_ok());
    }

    #[test]
    fn test_remove_board_cascades_links() {
        let (mut store, ids) = store_with_boards(3);
        store.create_link(ids[0], ids[1]).unwrap();
        store.create_link(ids[1], ids[2]).unwrap();

        store.remove_board(ids[1]);

        assert_eq!(store.link_count(), 0);
        assert!(store.board(ids[0]).unwrap().links.outgoing.is_none());
        assert!(store.board(ids[2]).unwrap().links.incoming.is_none());
    }

    #[test]
    fn test_endpoint_occupancy() {
        let (mut store, ids) = store_with_boards(2);
        assert!(!store.output_occupied(ids[0]));
        assert!(!store.input_occupied(ids[1]));

        store.create_link(ids[0], ids[1]).unwrap();
        assert!(store.output_occupied(ids[0]));
        assert!(store.input_occupied(ids[1]));
        // A board that is gone occupies nothing.
        assert!(!store.output_occupied(BoardId::new_v4()));
    }

    #[test]
    fn test_store_json_round_trip() {
        let (mut store, ids) = store_with_boards(2);
        store.create_link(ids[0], ids[1]).unwrap();
        store.select_board(ids[0]);

        let json = store.to_json().unwrap();
        let restored = BoardStore::from_json(&json).unwrap();

        assert_eq!(restored.board_count(), 2);
        assert_eq!(restored.link_count(), 1);
        let listed: Vec<BoardId> = restored.boards().map(|b| b.id).collect();
        assert_eq!(listed, ids);
        assert_eq!(restored.selected_board().unwrap().id, ids[0]);
    }
}
