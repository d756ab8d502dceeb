//! Shortest-path seek planning.

use crate::drive::Direction;

/// A planned seek: how many scheduler counts to run and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekPlan {
    /// Scheduler counts to consume, one per timer tick.
    pub steps: u16,
    /// Travel direction.
    pub direction: Direction,
}

impl SeekPlan {
    /// Plan the shortest angular path from `position` to `mark`.
    ///
    /// Both values must already be reduced modulo `position_modulus`. The
    /// raw difference is complemented (and the direction flipped) when it
    /// exceeds half a revolution, then halved into the stored count: the
    /// scheduler budgets one count per two position units of planned travel.
    /// Seeking from `position == mark` yields an empty plan.
    pub fn shortest_path(position: u16, mark: u16, position_modulus: u16) -> Self {
        let (mut diff, mut direction) = if position >= mark {
            (position - mark, Direction::Forward)
        } else {
            (mark - position, Direction::Backward)
        };
        if diff > position_modulus / 2 {
            diff = position_modulus - diff;
            direction = direction.opposite();
        }
        SeekPlan {
            steps: diff / 2,
            direction,
        }
    }

    /// Whether the plan has nothing to do.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.steps == 0
    }
}
