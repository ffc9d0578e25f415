use smallvec::SmallVec;

use crate::Vec2;

/// Action code of one platform touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    /// Primary pointer placed on the surface.
    Down,
    /// A secondary pointer placed while the primary is held.
    PointerDown,
    Move,
    /// A secondary pointer lifted while the primary is still held.
    PointerUp,
    /// Last pointer lifted.
    Up,
    Cancel,
}

/// Immutable snapshot of one touch event: an action code plus the position
/// of every pointer currently on the surface, in platform index order.
///
/// Produced by the host platform, consumed during the call, never stored.
/// Two pointers fit inline; no allocation on the pinch path.
#[derive(Clone, Debug)]
pub struct TouchSample {
    pub action: TouchAction,
    positions: SmallVec<[Vec2; 2]>,
}

impl TouchSample {
    pub fn new(action: TouchAction, positions: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            action,
            positions: positions.into_iter().collect(),
        }
    }

    /// Single-pointer sample.
    pub fn single(action: TouchAction, p: Vec2) -> Self {
        Self::new(action, [p])
    }

    /// Two-pointer sample.
    pub fn pair(action: TouchAction, p0: Vec2, p1: Vec2) -> Self {
        Self::new(action, [p0, p1])
    }

    pub fn pointer_count(&self) -> usize {
        self.positions.len()
    }

    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.positions.get(index).copied()
    }
}
