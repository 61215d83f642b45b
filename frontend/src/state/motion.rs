//! Open/close transition of a collapsible content region.
//!
//! Progress runs linearly in time from 0 (collapsed) to 1 (expanded). The
//! visible extent and opacity are the same eased curve of that progress in
//! both directions, so a collapse retraces the expansion frame for frame and
//! a mid-flight reversal continues from exactly where the region is.

use std::rc::Rc;
use yew::Reducible;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

/// Visual state for one rendered frame. Both fields are in `[0, 1]`;
/// `extent` scales the content's natural height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub extent: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    phase: Phase,
    progress: f64,
    duration_ms: f64,
}

impl Motion {
    pub fn new(open: bool) -> Self {
        Self::with_duration(open, config::DISCLOSURE_DURATION_MS)
    }

    /// Starts settled at `open`; the first state is never animated into.
    pub fn with_duration(open: bool, duration_ms: f64) -> Self {
        let (phase, progress) = if open {
            (Phase::Expanded, 1.0)
        } else {
            (Phase::Collapsed, 0.0)
        };
        Self { phase, progress, duration_ms }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Expanding | Phase::Collapsing)
    }

    /// Content stays mounted until a collapse has fully played out.
    pub fn is_rendered(&self) -> bool {
        self.phase != Phase::Collapsed
    }

    /// Point the transition at `open`, continuing from the current progress.
    pub fn retarget(&mut self, open: bool) {
        self.phase = match (self.phase, open) {
            (Phase::Collapsed | Phase::Collapsing, true) => Phase::Expanding,
            (Phase::Expanded | Phase::Expanding, false) => Phase::Collapsing,
            (phase, _) => phase,
        };
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        let step = if self.duration_ms > 0.0 {
            elapsed_ms.max(0.0) / self.duration_ms
        } else {
            1.0
        };
        match self.phase {
            Phase::Expanding => {
                self.progress = (self.progress + step).min(1.0);
                if self.progress >= 1.0 {
                    self.phase = Phase::Expanded;
                }
            }
            Phase::Collapsing => {
                self.progress = (self.progress - step).max(0.0);
                if self.progress <= 0.0 {
                    self.phase = Phase::Collapsed;
                }
            }
            Phase::Collapsed | Phase::Expanded => {}
        }
    }

    pub fn frame(&self) -> Frame {
        let eased = ease_in_out(self.progress);
        Frame { extent: eased, opacity: eased }
    }
}

/// Cubic ease-in-out. Symmetric: `ease(1 - t) == 1 - ease(t)`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub enum MotionAction {
    Retarget(bool),
    Advance(f64),
}

impl Reducible for Motion {
    type Action = MotionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            MotionAction::Retarget(open) => next.retarget(open),
            MotionAction::Advance(elapsed_ms) => next.advance(elapsed_ms),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn initial_open_state_is_not_animated() {
        let motion = Motion::with_duration(true, 250.0);
        assert_eq!(motion.phase(), Phase::Expanded);
        assert!(!motion.is_animating());
        assert_eq!(motion.frame(), Frame { extent: 1.0, opacity: 1.0 });

        let motion = Motion::with_duration(false, 250.0);
        assert_eq!(motion.phase(), Phase::Collapsed);
        assert!(!motion.is_rendered());
    }

    #[test]
    fn opening_settles_after_duration() {
        let mut motion = Motion::with_duration(false, 250.0);
        motion.retarget(true);
        assert_eq!(motion.phase(), Phase::Expanding);
        assert!(motion.is_rendered());
        assert_eq!(motion.frame().opacity, 0.0);

        motion.advance(125.0);
        assert_eq!(motion.phase(), Phase::Expanding);
        assert!((motion.frame().extent - 0.5).abs() < EPSILON);

        motion.advance(125.0);
        assert_eq!(motion.phase(), Phase::Expanded);
        assert_eq!(motion.progress, 1.0);
    }

    #[test]
    fn content_unmounts_only_after_collapse_finishes() {
        let mut motion = Motion::with_duration(true, 250.0);
        motion.retarget(false);
        for _ in 0..15 {
            motion.advance(16.0);
            assert!(motion.is_rendered());
        }
        motion.advance(16.0);
        assert_eq!(motion.phase(), Phase::Collapsed);
        assert!(!motion.is_rendered());
    }

    #[test]
    fn collapse_retraces_expansion() {
        let mut opening = Motion::with_duration(false, 250.0);
        opening.retarget(true);
        let mut closing = Motion::with_duration(true, 250.0);
        closing.retarget(false);

        let mut forward = vec![opening.frame()];
        let mut backward = vec![closing.frame()];
        for _ in 0..10 {
            opening.advance(25.0);
            closing.advance(25.0);
            forward.push(opening.frame());
            backward.push(closing.frame());
        }
        backward.reverse();
        for (a, b) in forward.iter().zip(&backward) {
            assert!((a.extent - b.extent).abs() < EPSILON);
            assert!((a.opacity - b.opacity).abs() < EPSILON);
        }
    }

    #[test]
    fn reversal_continues_from_current_progress() {
        let mut motion = Motion::with_duration(false, 250.0);
        motion.retarget(true);
        motion.advance(100.0);
        let before = motion.frame();

        motion.retarget(false);
        assert_eq!(motion.phase(), Phase::Collapsing);
        assert_eq!(motion.frame(), before);

        // Only the 100ms already travelled has to be undone.
        motion.advance(100.0);
        assert_eq!(motion.phase(), Phase::Collapsed);
    }

    #[test]
    fn retarget_to_current_state_is_a_no_op() {
        let mut motion = Motion::with_duration(true, 250.0);
        motion.retarget(true);
        assert_eq!(motion.phase(), Phase::Expanded);

        let mut motion = Motion::with_duration(false, 250.0);
        motion.retarget(false);
        assert_eq!(motion.phase(), Phase::Collapsed);
    }

    #[test]
    fn ease_is_symmetric_and_bounded() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
        for step in 0..=20 {
            let t = step as f64 / 20.0;
            assert!((ease_in_out(1.0 - t) - (1.0 - ease_in_out(t))).abs() < EPSILON);
        }
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let motion = Rc::new(Motion::with_duration(true, 250.0));
        let next = motion.clone().reduce(MotionAction::Advance(16.0));
        assert!(Rc::ptr_eq(&motion, &next));

        let next = motion.reduce(MotionAction::Retarget(false));
        assert_eq!(next.phase(), Phase::Collapsing);
    }
}
