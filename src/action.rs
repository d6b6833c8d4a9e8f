use crate::{Direction, Step};

/// Keys the popup reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    PageUp,
    PageDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Other,
}

/// Semantic actions a picker performs in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Action {
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
    PrevMonth,
    NextMonth,
    PrevYear,
    NextYear,
    /// Commit the cursor as the selection
    Commit,
    /// Hide the popup
    Close,
}

impl Action {
    /// Keyboard mapping of the popup. Shift turns the page keys into year steps.
    pub fn from_key(key: Key, shift: bool) -> Option<Self> {
        match key {
            Key::PageUp if shift => Some(Self::PrevYear),
            Key::PageUp => Some(Self::PrevMonth),
            Key::PageDown if shift => Some(Self::NextYear),
            Key::PageDown => Some(Self::NextMonth),
            Key::ArrowRight => Some(Self::NextDay),
            Key::ArrowDown => Some(Self::NextWeek),
            Key::ArrowLeft => Some(Self::PrevDay),
            Key::ArrowUp => Some(Self::PrevWeek),
            Key::Enter => Some(Self::Commit),
            Key::Escape => Some(Self::Close),
            Key::Other => None,
        }
    }

    /// The cursor movement this action performs, if any.
    pub const fn movement(self) -> Option<(Step, Direction)> {
        match self {
            Self::PrevDay => Some((Step::Day, Direction::Backward)),
            Self::NextDay => Some((Step::Day, Direction::Forward)),
            Self::PrevWeek => Some((Step::Week, Direction::Backward)),
            Self::NextWeek => Some((Step::Week, Direction::Forward)),
            Self::PrevMonth => Some((Step::Month, Direction::Backward)),
            Self::NextMonth => Some((Step::Month, Direction::Forward)),
            Self::PrevYear => Some((Step::Year, Direction::Backward)),
            Self::NextYear => Some((Step::Year, Direction::Forward)),
            Self::Commit | Self::Close => None,
        }
    }
}
