//! Auto-placement of newly created boards.
//!
//! The loading pipeline asks for a position for each new board; placement
//! scans the existing boards once, in deterministic order, and nudges the
//! candidate rectangle until it stops overlapping.

use kurbo::{Point, Rect, Size};

/// Margin from the viewport origin for the first candidate position.
pub const PLACEMENT_MARGIN: f64 = 20.0;

/// Gap kept between an auto-placed board and the board it was pushed off of.
pub const PLACEMENT_GUTTER: f64 = 60.0;

/// Strict rectangle overlap: rectangles sharing only an edge do not intersect.
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Choose a position for a new board of `size` that does not overlap any of
/// `existing`, within `viewport`.
///
/// Existing boards are scanned sorted by (y, x) so identical inputs always
/// produce identical output. On overlap the candidate shifts to the right of
/// the obstructing board plus a gutter; past the viewport's right edge it
/// wraps to the next row, and past the bottom it pulls back up one row. A
/// viewport smaller than the candidate still yields a position, possibly
/// off-screen.
pub fn place(existing: &[Rect], size: Size, viewport: Size) -> Point {
    let mut sorted: Vec<Rect> = existing.to_vec();
    sorted.sort_by(|a, b| a.y0.total_cmp(&b.y0).then(a.x0.total_cmp(&b.x0)));

    let mut x = PLACEMENT_MARGIN;
    let mut y = PLACEMENT_MARGIN;
    for other in &sorted {
        let candidate = Rect::from_origin_size(Point::new(x, y), size);
        if !intersects(candidate, *other) {
            continue;
        }
        x = other.x1 + PLACEMENT_GUTTER;
        if x < 0.0 {
            x = PLACEMENT_MARGIN;
        }
        if x + size.width > viewport.width {
            x = PLACEMENT_MARGIN;
            y += size.height + PLACEMENT_GUTTER;
            if y + size.height > viewport.height {
                y -= size.height + PLACEMENT_GUTTER;
            }
        }
    }
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DEFAULT_BOARD_SIZE;

    const VIEWPORT: Size = Size::new(1080.0, 670.0);

    fn rect(x: f64, y: f64, size: Size) -> Rect {
        Rect::from_origin_size(Point::new(x, y), size)
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let cases = [
            (rect(0.0, 0.0, Size::new(100.0, 100.0)), rect(50.0, 50.0, Size::new(100.0, 100.0))),
            (rect(0.0, 0.0, Size::new(100.0, 100.0)), rect(200.0, 0.0, Size::new(100.0, 100.0))),
            (rect(0.0, 0.0, Size::new(100.0, 100.0)), rect(0.0, 150.0, Size::new(100.0, 100.0))),
            (rect(-50.0, -50.0, Size::new(60.0, 60.0)), rect(0.0, 0.0, Size::new(10.0, 10.0))),
        ];
        for (a, b) in cases {
            assert_eq!(intersects(a, b), intersects(b, a));
        }
    }

    #[test]
    fn test_disjoint_ranges_do_not_intersect() {
        let a = rect(0.0, 0.0, Size::new(100.0, 100.0));
        // Disjoint in x only, y only, and both.
        assert!(!intersects(a, rect(150.0, 0.0, Size::new(100.0, 100.0))));
        assert!(!intersects(a, rect(0.0, 150.0, Size::new(100.0, 100.0))));
        assert!(!intersects(a, rect(150.0, 150.0, Size::new(100.0, 100.0))));
        // Sharing an edge is not an overlap.
        assert!(!intersects(a, rect(100.0, 0.0, Size::new(100.0, 100.0))));
        assert!(!intersects(a, rect(0.0, 100.0, Size::new(100.0, 100.0))));
    }

    #[test]
    fn test_empty_canvas_places_at_margin() {
        let pos = place(&[], DEFAULT_BOARD_SIZE, VIEWPORT);
        assert_eq!(pos, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_second_board_placed_right_of_first() {
        let existing = [rect(20.0, 20.0, DEFAULT_BOARD_SIZE)];
        let pos = place(&existing, DEFAULT_BOARD_SIZE, VIEWPORT);
        // 20 + 240 + 60
        assert_eq!(pos, Point::new(320.0, 20.0));
    }

    #[test]
    fn test_wraps_to_next_row_at_right_edge() {
        // Three boards fill the first row: 20, 320, 620. The next slot at
        // x = 920 would overflow 920 + 240 > 1080, so the candidate wraps.
        let existing = [
            rect(20.0, 20.0, DEFAULT_BOARD_SIZE),
            rect(320.0, 20.0, DEFAULT_BOARD_SIZE),
            rect(620.0, 20.0, DEFAULT_BOARD_SIZE),
        ];
        let pos = place(&existing, DEFAULT_BOARD_SIZE, VIEWPORT);
        // y = 20 + 192 + 60
        assert_eq!(pos, Point::new(20.0, 272.0));
    }

    #[test]
    fn test_bottom_overflow_pulls_back_up() {
        let tall = Size::new(240.0, 600.0);
        let existing = [
            rect(20.0, 20.0, tall),
            rect(320.0, 20.0, tall),
            rect(620.0, 20.0, tall),
        ];
        // Wrapping would put y at 20 + 600 + 60 = 680, past the 670 viewport
        // bottom, so y is pulled back to 20.
        let pos = place(&existing, tall, VIEWPORT);
        assert_eq!(pos, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_deterministic_regardless_of_input_order() {
        let a = rect(320.0, 20.0, DEFAULT_BOARD_SIZE);
        let b = rect(20.0, 20.0, DEFAULT_BOARD_SIZE);
        let forward = place(&[b, a], DEFAULT_BOARD_SIZE, VIEWPORT);
        let reversed = place(&[a, b], DEFAULT_BOARD_SIZE, VIEWPORT);
        assert_eq!(forward, reversed);
        assert_eq!(forward, Point::new(620.0, 20.0));
    }

    #[test]
    fn test_viewport_smaller_than_board_still_places() {
        let tiny = Size::new(100.0, 100.0);
        let pos = place(&[rect(20.0, 20.0, DEFAULT_BOARD_SIZE)], DEFAULT_BOARD_SIZE, tiny);
        // Off-screen is acceptable; failure is not.
        assert!(pos.x.is_finite() && pos.y.is_finite());
    }

    #[test]
    fn test_overlap_with_offscreen_board_shifts_right() {
        // A board reaching in from the left edge still pushes the candidate
        // to its right side plus the gutter.
        let off_left = rect(-100.0, 10.0, Size::new(200.0, 300.0));
        let pos = place(&[off_left], Size::new(100.0, 100.0), VIEWPORT);
        assert_eq!(pos, Point::new(160.0, 20.0));
    }
}
