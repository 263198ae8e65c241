/// Keyboard key identifier delivered to observers.
///
/// Escape has no variant: the platform layer reserves it for quitting and
/// never forwards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    P,
    R,
    Space,
    Shift,
    Enter,
    Up,
    Down,
    Left,
    Right,
}

/// Mouse button identifier delivered to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
