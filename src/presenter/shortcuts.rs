// Shortcut handler
//
// Maps raw key events to presenter actions. Layered like the rest of the
// input handling: global keys first, then keys that depend on focus.
//
// Submit is Ctrl+Enter or Cmd+Enter while the input has focus. Without the
// kitty keyboard protocol most terminals send Ctrl+Enter as a bare Enter or as
// Ctrl+J, so Ctrl+J submits too and F5 works as the "Analyze" button.
// Alt+S loads a sample sentence (debug convenience).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Sentence loaded by Alt+S
pub const SAMPLE_TEXT: &str = "I'm feeling really happy and excited about this new project! It's been a challenging journey, but I'm proud of what we've accomplished so far.";

/// Which region receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Result,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::Result,
            Focus::Result => Focus::Input,
        }
    }
}

/// Text editing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// What a key press asks the presenter to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Sample,
    Clear,
    Quit,
    CopyResult,
    ToggleFocus,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
    Edit(Edit),
    Ignore,
}

/// Translate a key event given the current focus
pub fn map_key(key: &KeyEvent, focus: Focus) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }

    let ctrl_or_cmd = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Global keys
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl_or_cmd => return Action::Quit,
        KeyCode::Char('l') if ctrl_or_cmd => return Action::Clear,
        KeyCode::Char('y') if ctrl_or_cmd => return Action::CopyResult,
        KeyCode::Char('s') | KeyCode::Char('S') if alt => return Action::Sample,
        KeyCode::Esc => return Action::Clear,
        KeyCode::F(5) => return Action::Submit,
        KeyCode::F(2) => return Action::ToggleLogs,
        KeyCode::Tab | KeyCode::BackTab => return Action::ToggleFocus,
        _ => {}
    }

    match focus {
        Focus::Input => match key.code {
            // Modified Enter submits instead of inserting a newline
            KeyCode::Enter if ctrl_or_cmd => Action::Submit,
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Submit,
            KeyCode::Enter => Action::Edit(Edit::Newline),
            KeyCode::Char(c) if !ctrl_or_cmd && !alt => Action::Edit(Edit::Insert(c)),
            KeyCode::Backspace => Action::Edit(Edit::Backspace),
            KeyCode::Delete => Action::Edit(Edit::Delete),
            KeyCode::Left => Action::Edit(Edit::Left),
            KeyCode::Right => Action::Edit(Edit::Right),
            KeyCode::Home => Action::Edit(Edit::Home),
            KeyCode::End => Action::Edit(Edit::End),
            _ => Action::Ignore,
        },
        Focus::Result => match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => Action::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => Action::ScrollDown,
            _ => Action::Ignore,
        },
    }
}
