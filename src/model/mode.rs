use std::fmt;

/// Presentation mode of a session. Decided once at load time, afterwards
/// changed only by an explicit toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Edit,
    Preview,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Edit => Mode::Preview,
            Mode::Preview => Mode::Edit,
        }
    }

    pub fn is_editing(self) -> bool {
        self == Mode::Edit
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Edit => write!(f, "edit"),
            Mode::Preview => write!(f, "preview"),
        }
    }
}
