//! Press/drag/release handling for the timeline, kept apart from rendering so
//! it can run without a canvas or a controller.

use crate::mapper::Axis;

/// Raw pointer input in surface-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Press(f64),
    Move(f64),
    Release(f64),
    Leave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { preview: usize },
}

/// What the surface should do after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEffect {
    None,
    /// Repaint the marker at this index without touching the session.
    Preview(usize),
    /// Seek the session to this index; the gesture is over.
    Commit(usize),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragMachine {
    state: DragState,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Advance on one pointer input. Pointer-leave while dragging commits the
    /// last preview rather than cancelling.
    pub fn handle(&mut self, input: PointerInput, axis: &Axis) -> DragEffect {
        let (next, effect) = match (self.state, input) {
            (_, PointerInput::Press(x)) => {
                let i = axis.index_at(x);
                (DragState::Dragging { preview: i }, DragEffect::Preview(i))
            }
            (DragState::Dragging { .. }, PointerInput::Move(x)) => {
                let i = axis.index_at(x);
                (DragState::Dragging { preview: i }, DragEffect::Preview(i))
            }
            (DragState::Dragging { .. }, PointerInput::Release(x)) => {
                (DragState::Idle, DragEffect::Commit(axis.index_at(x)))
            }
            (DragState::Dragging { preview }, PointerInput::Leave) => {
                (DragState::Idle, DragEffect::Commit(preview))
            }
            (DragState::Idle, _) => (DragState::Idle, DragEffect::None),
        };
        self.state = next;
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXIS: Axis = Axis { samples: 5, width: 500.0 };

    fn run(inputs: &[PointerInput]) -> (Vec<DragEffect>, DragState) {
        let mut m = DragMachine::new();
        let effects = inputs.iter().map(|&inp| m.handle(inp, &AXIS)).collect();
        (effects, m.state())
    }

    fn commits(effects: &[DragEffect]) -> Vec<usize> {
        effects
            .iter()
            .filter_map(|e| match e {
                DragEffect::Commit(i) => Some(*i),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn press_previews_and_release_commits() {
        let (effects, state) = run(&[PointerInput::Press(100.0), PointerInput::Release(480.0)]);
        assert_eq!(effects, vec![DragEffect::Preview(1), DragEffect::Commit(4)]);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn click_commits_like_press_release() {
        let (click, _) = run(&[PointerInput::Press(250.0), PointerInput::Release(250.0)]);
        assert_eq!(commits(&click), vec![2]);
    }

    #[test]
    fn leave_commits_last_preview() {
        let (left, _) = run(&[PointerInput::Press(0.0), PointerInput::Move(380.0), PointerInput::Leave]);
        let (released, _) = run(&[
            PointerInput::Press(0.0),
            PointerInput::Move(380.0),
            PointerInput::Release(380.0),
        ]);
        assert_eq!(commits(&left), vec![3]);
        assert_eq!(commits(&left), commits(&released));
    }

    #[test]
    fn moves_preview_every_step() {
        let (effects, state) = run(&[
            PointerInput::Press(0.0),
            PointerInput::Move(120.0),
            PointerInput::Move(260.0),
            PointerInput::Move(9_999.0),
        ]);
        assert_eq!(
            effects,
            vec![
                DragEffect::Preview(0),
                DragEffect::Preview(1),
                DragEffect::Preview(2),
                DragEffect::Preview(4),
            ]
        );
        assert_eq!(state, DragState::Dragging { preview: 4 });
    }

    #[test]
    fn idle_ignores_move_release_and_leave() {
        let (effects, state) = run(&[
            PointerInput::Move(100.0),
            PointerInput::Release(100.0),
            PointerInput::Leave,
        ]);
        assert_eq!(effects, vec![DragEffect::None; 3]);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn only_one_commit_per_gesture() {
        let (effects, _) = run(&[
            PointerInput::Press(0.0),
            PointerInput::Release(0.0),
            PointerInput::Leave,
            PointerInput::Release(500.0),
        ]);
        assert_eq!(commits(&effects), vec![0]);
    }
}
