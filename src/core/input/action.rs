//=========================================================================
// Semantic Actions
//=========================================================================
//
// Controller-style actions that the scene handlers interpret.
//
// Keys never reach the handlers directly: the key map resolves them to one
// of these first, so rebinding never touches scene policy.
//
//=========================================================================

/// A semantic control, named after the pad button it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Confirm.
    Circle,
    /// Back.
    Cross,
    Triangle,
    Square,
    L1,
    L2,
    R1,
    R2,
    Start,
    Select,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 14] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Circle,
        Action::Cross,
        Action::Triangle,
        Action::Square,
        Action::L1,
        Action::L2,
        Action::R1,
        Action::R2,
        Action::Start,
        Action::Select,
    ];

    pub fn is_direction(self) -> bool {
        matches!(self, Action::Up | Action::Down | Action::Left | Action::Right)
    }
}
