use std::io::{stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};

use aqi_core::error::Result;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Result of feeding one key to a hidden prompt.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum HiddenKey {
    Continue,
    Submit,
    Cancel,
}

/// Applies a key press to the hidden value being typed.
pub(crate) fn apply_hidden_key(value: &mut String, key_event: KeyEvent) -> HiddenKey {
    if key_event.kind == KeyEventKind::Release {
        return HiddenKey::Continue;
    }

    match key_event.code {
        KeyCode::Enter => HiddenKey::Submit,
        KeyCode::Esc => HiddenKey::Cancel,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            HiddenKey::Cancel
        }
        KeyCode::Backspace => {
            value.pop();
            HiddenKey::Continue
        }
        KeyCode::Char(c) => {
            value.push(c);
            HiddenKey::Continue
        }
        _ => HiddenKey::Continue,
    }
}

/// Prompts for a value without echoing it, returning `None` if the user cancels.
pub fn prompt_hidden(message: &str) -> Result<Option<String>> {
    let mut stdout = stdout();
    execute!(stdout, Print(format!("{message} (hidden): ")))?;

    enable_raw_mode()?;
    let raw_mode_guard = RawModeGuard;

    let mut value = String::new();
    let outcome = loop {
        if let Event::Key(key_event) = event::read()? {
            match apply_hidden_key(&mut value, key_event) {
                HiddenKey::Continue => {}
                HiddenKey::Submit => break Some(value),
                HiddenKey::Cancel => break None,
            }
        }
    };

    drop(raw_mode_guard);
    queue!(stdout, Print("\n"))?;
    stdout.flush()?;

    Ok(outcome)
}
