//! Per-frame input snapshot handed to the simulation by whatever owns the window.
//!
//! Held actions are continuous states; spawn press/release and nudges are
//! edges collected since the previous frame.

/// Continuously held actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
    PauseHold,
    Quit,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Forward,
        Action::Back,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::Up,
        Action::Down,
        Action::PauseHold,
        Action::Quit,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of held actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldActions(u8);

impl HeldActions {
    pub fn press(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn with(mut self, action: Action) -> Self {
        self.press(action);
        self
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }
}

/// Arrow-key position nudge for the sculpting body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

/// One nudge press or key-repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NudgeEvent {
    pub direction: Nudge,
    pub shift: bool, // shift held: Up/Down skip the vertical component
}

impl NudgeEvent {
    pub fn new(direction: Nudge) -> Self {
        Self { direction, shift: false }
    }

    pub fn shifted(direction: Nudge) -> Self {
        Self { direction, shift: true }
    }
}

/// Spawner-facing part of a frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnInput {
    pub pressed: bool, // spawn button went down this frame
    pub released: bool, // spawn button went up this frame
    pub grow_held: bool, // grow button currently held
    pub nudges: Vec<NudgeEvent>,
    pub dt: f64, // frame time, seconds
}

/// Everything the simulation reads from the input source in one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pub held: HeldActions,
    pub pointer_delta: (f32, f32), // pixels, screen y grows downward
    pub scroll: f32, // wheel lines, positive = away from the user
    pub spawn: SpawnInput,
}

impl InputFrame {
    /// Empty frame of length `dt`
    pub fn idle(dt: f64) -> Self {
        Self {
            spawn: SpawnInput {
                dt,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Frame length in seconds
    pub fn dt(&self) -> f64 {
        self.spawn.dt
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.is_held(action)
    }
}
