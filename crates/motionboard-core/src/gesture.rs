//! Gesture session shaping: press/move/release into semantic drag events.
//!
//! A session begins at a left-button press on the canvas and is scoped until
//! the next release (single active pointer). Within one session the composer
//! emits, in input order: one `Down`, at most one `DragStart` (on the first
//! move), one `Drag` per move, and exactly one `DragEnd` at release. Presses
//! that strike nothing interactive run a parallel background session made of
//! `CanvasDown` and `CanvasDragEnd`.

use crate::hit::HitTarget;
use crate::input::{Modifiers, MouseButton, PointerEvent};
use crate::store::BoardStore;
use kurbo::{Point, Vec2};

/// A shaped gesture event delivered to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed on an interactive item.
    Down {
        target: HitTarget,
        /// The struck item's position snapshot at press time.
        origin: Point,
        modifiers: Modifiers,
    },
    /// First movement after a press on an item; distinguishes a drag from a
    /// click with no movement.
    DragStart {
        target: HitTarget,
        origin: Point,
        /// Displacement from the press position.
        total: Vec2,
        modifiers: Modifiers,
    },
    /// Movement while the pointer is held on an item. `origin + total` is the
    /// item's absolute new position, free of compounded rounding error.
    Drag {
        target: HitTarget,
        origin: Point,
        /// Cumulative displacement since the press.
        total: Vec2,
        /// Incremental displacement since the previous move.
        delta: Vec2,
        modifiers: Modifiers,
    },
    /// Pointer released, ending an item session.
    DragEnd {
        target: HitTarget,
        origin: Point,
        total: Vec2,
        delta: Vec2,
        /// The classified element under the pointer at release, for
        /// drop-target resolution.
        release: Option<HitTarget>,
        modifiers: Modifiers,
    },
    /// Pointer pressed on empty canvas.
    CanvasDown { position: Point, modifiers: Modifiers },
    /// Pointer released, ending a background session.
    CanvasDragEnd {
        position: Point,
        total: Vec2,
        modifiers: Modifiers,
    },
}

/// A live gesture session, from press to release.
#[derive(Debug, Clone, Copy)]
enum Session {
    Item {
        target: HitTarget,
        origin: Point,
        press: Point,
        last: Point,
        dragging: bool,
        modifiers: Modifiers,
    },
    Background {
        press: Point,
        modifiers: Modifiers,
    },
}

/// Shapes the raw pointer stream into gesture sessions.
///
/// The composer holds a read handle on the store only for the duration of
/// each call: at press time to snapshot the struck item's position, and on
/// every later event to notice that the session's board has been removed
/// externally, which cancels the session.
#[derive(Debug, Clone, Default)]
pub struct GestureComposer {
    session: Option<Session>,
}

impl GestureComposer {
    /// Create a composer with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one pointer event. `hit` is the classified element under the
    /// pointer, consulted at press (session target) and at release (drop
    /// resolution). Returns the gesture events it shaped, in order.
    pub fn handle(
        &mut self,
        store: &BoardStore,
        event: PointerEvent,
        hit: Option<HitTarget>,
    ) -> Vec<GestureEvent> {
        match event {
            PointerEvent::Down {
                position,
                button,
                modifiers,
            } => self.on_down(store, position, button, modifiers, hit),
            PointerEvent::Move { position } => self.on_move(store, position),
            PointerEvent::Up { position, button } => self.on_up(store, position, button, hit),
        }
    }

    fn on_down(
        &mut self,
        store: &BoardStore,
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
        hit: Option<HitTarget>,
    ) -> Vec<GestureEvent> {
        if button != MouseButton::Left {
            return Vec::new();
        }
        if self.session.is_some() {
            // Single active pointer: a second press before release is spurious.
            log::debug!("ignoring press during an active gesture session");
            return Vec::new();
        }

        // A target whose board is already gone is stale metadata; the press
        // falls through to the background.
        let target = hit.filter(|t| {
            t.board_id()
                .is_none_or(|id| store.board(id).is_some())
        });

        match target {
            Some(target) => {
                let origin = target
                    .board_id()
                    .and_then(|id| store.board(id))
                    .map_or(position, |b| b.position);
                self.session = Some(Session::Item {
                    target,
                    origin,
                    press: position,
                    last: position,
                    dragging: false,
                    modifiers,
                });
                vec![GestureEvent::Down {
                    target,
                    origin,
                    modifiers,
                }]
            }
            None => {
                self.session = Some(Session::Background {
                    press: position,
                    modifiers,
                });
                vec![GestureEvent::CanvasDown {
                    position,
                    modifiers,
                }]
            }
        }
    }

    fn on_move(&mut self, store: &BoardStore, position: Point) -> Vec<GestureEvent> {
        if let Some(Session::Item { target, .. }) = self.session {
            if session_board_gone(store, target) {
                self.cancel("board removed during drag");
                return Vec::new();
            }
        }

        match &mut self.session {
            None => Vec::new(),
            Some(Session::Background { .. }) => Vec::new(),
            Some(Session::Item {
                target,
                origin,
                press,
                last,
                dragging,
                modifiers,
            }) => {
                let total = position - *press;
                let delta = position - *last;
                *last = position;

                let mut events = Vec::with_capacity(2);
                if !*dragging {
                    *dragging = true;
                    events.push(GestureEvent::DragStart {
                        target: *target,
                        origin: *origin,
                        total,
                        modifiers: *modifiers,
                    });
                }
                events.push(GestureEvent::Drag {
                    target: *target,
                    origin: *origin,
                    total,
                    delta,
                    modifiers: *modifiers,
                });
                events
            }
        }
    }

    fn on_up(
        &mut self,
        store: &BoardStore,
        position: Point,
        button: MouseButton,
        hit: Option<HitTarget>,
    ) -> Vec<GestureEvent> {
        if button != MouseButton::Left {
            return Vec::new();
        }
        let Some(session) = self.session.take() else {
            return Vec::new();
        };

        match session {
            Session::Item {
                target,
                origin,
                press,
                last,
                modifiers,
                ..
            } => {
                if session_board_gone(store, target) {
                    log::debug!("session ended: board removed before release");
                    return Vec::new();
                }
                vec![GestureEvent::DragEnd {
                    target,
                    origin,
                    total: position - press,
                    delta: position - last,
                    release: hit,
                    modifiers,
                }]
            }
            Session::Background { press, modifiers } => {
                vec![GestureEvent::CanvasDragEnd {
                    position,
                    total: position - press,
                    modifiers,
                }]
            }
        }
    }

    fn cancel(&mut self, reason: &str) {
        log::debug!("gesture session cancelled: {reason}");
        self.session = None;
    }
}

/// Whether the session's board has been removed from the store mid-session.
fn session_board_gone(store: &BoardStore, target: HitTarget) -> bool {
    target
        .board_id()
        .is_some_and(|id| store.board(id).is_none())
}
