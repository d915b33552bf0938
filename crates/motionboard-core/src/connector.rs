//! Connector side assignment and anchor geometry.
//!
//! Each board carries an `in` and an `out` connector glyph. A connector with a
//! linked neighbor is placed on the side of the board facing that neighbor;
//! one without a neighbor falls back to a fixed default side.

use crate::board::{Board, Side};
use crate::store::BoardStore;
use kurbo::Point;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Distance a connector anchor sits outward from the board edge.
pub const ANCHOR_OFFSET: f64 = 9.0;

/// Offset along the shared side when both connectors land on it, so the two
/// glyphs do not overlap (`out` positive, `in` negative).
pub const SAME_SIDE_SPREAD: f64 = 20.0;

/// Placement of a single connector glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPlacement {
    /// Side of the board the glyph renders on.
    pub side: Side,
    /// Anchor point for the glyph and the attached link's curve endpoint.
    pub anchor: Point,
}

/// Sides and anchors for both of a board's connectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorLayout {
    pub input: ConnectorPlacement,
    pub output: ConnectorPlacement,
}

/// Classify the bearing from `from` to `to` into the board side facing `to`.
///
/// The bearing is rotated by 45 deg so sector boundaries fall on the diagonals
/// rather than the axes; the rotated bearing, wrapped to (-pi, pi], then maps
/// over sector bounds {-pi, -pi/2, 0, pi/2, pi} to left/top/right/bottom/left.
/// Both ends of the -pi/pi seam resolve to left.
pub fn side_towards(from: Point, to: Point) -> Side {
    let bearing = (to.y - from.y).atan2(to.x - from.x);
    let mut rotated = bearing + FRAC_PI_4;
    if rotated > PI {
        rotated -= 2.0 * PI;
    }
    if rotated < -FRAC_PI_2 {
        Side::Left
    } else if rotated < 0.0 {
        Side::Top
    } else if rotated < FRAC_PI_2 {
        Side::Right
    } else if rotated < PI {
        Side::Bottom
    } else {
        Side::Left
    }
}

/// Anchor point [`ANCHOR_OFFSET`] units outward from the board edge, `shift`
/// units along the side from the edge midpoint.
pub fn anchor_point(board: &Board, side: Side, shift: f64) -> Point {
    let bounds = board.bounds();
    let center = bounds.center();
    match side {
        Side::Top => Point::new(center.x + shift, bounds.y0 - ANCHOR_OFFSET),
        Side::Bottom => Point::new(center.x + shift, bounds.y1 + ANCHOR_OFFSET),
        Side::Left => Point::new(bounds.x0 - ANCHOR_OFFSET, center.y + shift),
        Side::Right => Point::new(bounds.x1 + ANCHOR_OFFSET, center.y + shift),
    }
}

/// Compute both connector placements for a board from its neighbors' centers.
///
/// A connector with no neighbor defaults to `in` -> left, `out` -> right. If
/// both connectors resolve to the same side they are spread apart by
/// [`SAME_SIDE_SPREAD`] along it.
pub fn connector_layout(
    board: &Board,
    in_neighbor: Option<Point>,
    out_neighbor: Option<Point>,
) -> ConnectorLayout {
    let center = board.center();
    let in_side = in_neighbor.map_or(Side::Left, |n| side_towards(center, n));
    let out_side = out_neighbor.map_or(Side::Right, |n| side_towards(center, n));

    let (in_shift, out_shift) = if in_side == out_side {
        (-SAME_SIDE_SPREAD, SAME_SIDE_SPREAD)
    } else {
        (0.0, 0.0)
    };

    ConnectorLayout {
        input: ConnectorPlacement {
            side: in_side,
            anchor: anchor_point(board, in_side, in_shift),
        },
        output: ConnectorPlacement {
            side: out_side,
            anchor: anchor_point(board, out_side, out_shift),
        },
    }
}

/// Compute a board's connector layout, resolving neighbors through its links
/// in the store.
pub fn layout_for(store: &BoardStore, board: &Board) -> ConnectorLayout {
    let in_neighbor = board
        .links
        .incoming
        .and_then(|id| store.link(id))
        .and_then(|link| store.board(link.start_board))
        .map(Board::center);
    let out_neighbor = board
        .links
        .outgoing
        .and_then(|id| store.link(id))
        .and_then(|link| store.board(link.end_board))
        .map(Board::center);
    connector_layout(board, in_neighbor, out_neighbor)
}
