use crate::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

const ACTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
        }
    }
}

/// Per-tick view of the input layer: held movement flags, the cursor
/// projected into world space, and the one-shot activate edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    actions: ActionStates,
    cursor_world: Option<Vec2>,
    activate_pressed: bool,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_cursor_world(mut self, cursor_world: Option<Vec2>) -> Self {
        self.cursor_world = cursor_world;
        self
    }

    pub fn with_activate_pressed(mut self, activate_pressed: bool) -> Self {
        self.activate_pressed = activate_pressed;
        self
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn cursor_world(&self) -> Option<Vec2> {
        self.cursor_world
    }

    pub fn activate_pressed(&self) -> bool {
        self.activate_pressed
    }

    /// Consumes the activate edge so no later handler in the same tick can
    /// interpret the same press again.
    pub fn take_activate_pressed(&mut self) -> bool {
        std::mem::take(&mut self.activate_pressed)
    }
}
