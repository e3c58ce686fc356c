//! Input event abstraction

/// Input events a widget can receive on one of its elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary pointer activation (mouse click, tap)
    Click,
    /// Pointer entered the element's box
    PointerEnter,
    /// Pointer left the element's box
    PointerLeave,
    /// Key pressed while the element had focus
    KeyDown(Key),
}

/// Keys the interaction core reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Space bar
    Space,
    /// Arrow up
    ArrowUp,
    /// Arrow down
    ArrowDown,
    /// Escape
    Escape,
}

impl Key {
    /// Parse a `KeyboardEvent.key`-style name (`"Enter"`, `" "`, `"ArrowDown"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Enter),
            " " | "Space" => Some(Self::Space),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Keys that open a submenu from its trigger.
    pub const fn opens_submenu(self) -> bool {
        matches!(self, Self::Enter | Self::Space | Self::ArrowDown)
    }
}
