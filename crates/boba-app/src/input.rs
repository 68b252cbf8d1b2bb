//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples session logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic testing of the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (open when closed, send when open).
    Enter,
    /// Backspace key (delete character before caret).
    Backspace,
    /// Delete key (delete character at caret).
    Delete,
    /// Escape key (close when open, quit when closed).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key (scroll towards older messages).
    Up,
    /// Down arrow key (scroll towards newer messages).
    Down,
    /// Home key (caret to start).
    Home,
    /// End key (caret to end).
    End,
    /// Function key `F<n>` (quick suggestion `n`, 1-based).
    Function(u8),
    /// Interrupt (Ctrl-C). Always quits.
    Interrupt,
}
