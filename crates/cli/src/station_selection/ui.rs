use std::fmt::Display;
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    DisableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, event, execute, queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, SelectionChoice, UiState, ViewportState};
use aqi_core::error::Result;

/// Rows taken by the header and the filter line
const CHROME_ROWS: u16 = 2;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// What a single terminal event does to the menu.
#[derive(Debug, PartialEq)]
pub(crate) enum MenuEvent {
    Finish(SelectionChoice),
    Update(UiState),
    Move(CycleDirection),
    Bell,
    Ignore,
}

fn redraw_ui(
    ui_state: &UiState,
    message: &str,
    options: &[String],
    indexes_to_display: &[usize],
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(ui_state, message, indexes_to_display.len())?;

    if indexes_to_display.is_empty() {
        queue!(
            stdout,
            MoveTo(0, 1),
            SetForegroundColor(Color::Red),
            Print("No matching stations!".to_string()),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    } else {
        print_options_with_selection(ui_state, options, indexes_to_display)?;
    }

    if ui_state.is_filtering {
        queue!(
            stdout,
            MoveTo(0, ui_state.viewport.height + 1),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Shows a full-screen multi-select menu over `options`.
///
/// Space or Tab marks an option, Enter confirms the marked options (or the
/// highlighted one when none are marked), `/` filters, `q`, Esc or Ctrl+C quit.
pub fn prompt_for_selection(options: &[String], message: &str) -> Result<SelectionChoice> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    // Dropping the guard disables raw mode and mouse capture
    let _raw_mode_guard = RawModeGuard;
    stdout.execute(event::EnableMouseCapture)?;

    let (width, height) = terminal::size()?;

    let mut ui_state = UiState::new(ViewportState {
        offset: 0,
        height: height.saturating_sub(CHROME_ROWS),
        width,
    });

    let mut indexes_to_display = filter_displayed_indexes(options, &ui_state.filter_text);
    let mut should_redraw = true;

    loop {
        if should_redraw {
            indexes_to_display = filter_displayed_indexes(options, &ui_state.filter_text);
            redraw_ui(&ui_state, message, options, &indexes_to_display)?;
            should_redraw = false;
        }

        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let menu_event = match event::read()? {
            Event::Key(key_event) => handle_key_event(key_event, &ui_state, &indexes_to_display),
            Event::Mouse(mouse_event) => {
                handle_mouse_event(mouse_event, &ui_state, &indexes_to_display)
            }
            Event::Resize(width, height) => MenuEvent::Update(handle_resize(
                width,
                height,
                &ui_state,
                indexes_to_display.len(),
            )),
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => MenuEvent::Ignore,
        };

        let new_state = match menu_event {
            MenuEvent::Finish(choice) => {
                debug!("Selection finished: {choice:?}");
                return Ok(choice);
            }
            MenuEvent::Update(state) => Some(state),
            MenuEvent::Move(direction) => Some(move_selected_index(
                &ui_state,
                indexes_to_display.len(),
                Some(&direction),
            )),
            MenuEvent::Bell => {
                execute!(stdout, Print("\x07"))?;
                None
            }
            MenuEvent::Ignore => None,
        };

        if let Some(state) = new_state {
            if state != ui_state {
                ui_state = state;
                should_redraw = true;
            }
        }
    }
}

/// Handle keyboard events in the selection UI
pub(crate) fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> MenuEvent {
    if key_event.kind == KeyEventKind::Release {
        return MenuEvent::Ignore;
    }

    match key_event.code {
        KeyCode::Up => MenuEvent::Move(Up),
        KeyCode::Down => MenuEvent::Move(Down),
        KeyCode::Enter => match ui_state.confirmed_selection(indexes_to_display) {
            Some(selected) => MenuEvent::Finish(SelectionChoice::Selected(selected)),
            None => MenuEvent::Bell,
        },
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            MenuEvent::Finish(SelectionChoice::Quit)
        }
        KeyCode::Tab => toggle_highlighted(ui_state, indexes_to_display),
        KeyCode::Char(' ') if !ui_state.is_filtering => {
            toggle_highlighted(ui_state, indexes_to_display)
        }
        KeyCode::Backspace if !ui_state.filter_text.is_empty() => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.pop();
            reset_cursor(&mut updated_state);
            MenuEvent::Update(updated_state)
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.push(c);
            reset_cursor(&mut updated_state);
            MenuEvent::Update(updated_state)
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = false;
            updated_state.filter_text.clear();
            reset_cursor(&mut updated_state);
            MenuEvent::Update(updated_state)
        }
        KeyCode::Char('/') => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = true;
            MenuEvent::Update(updated_state)
        }
        KeyCode::Char('q') | KeyCode::Esc => MenuEvent::Finish(SelectionChoice::Quit),
        _ => MenuEvent::Ignore,
    }
}

/// Handle mouse events: a left click marks the clicked row, the wheel moves the cursor
pub(crate) fn handle_mouse_event(
    mouse_event: MouseEvent,
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> MenuEvent {
    let MouseEvent {
        kind,
        row,
        modifiers,
        ..
    } = mouse_event;

    if modifiers != KeyModifiers::NONE {
        return MenuEvent::Ignore;
    }

    match kind {
        MouseEventKind::Up(MouseButton::Left) => {
            if row == 0 || row > ui_state.viewport.height {
                // Header or filter line
                return MenuEvent::Ignore;
            }

            let clicked_index = (row - 1) as usize + ui_state.viewport.offset;
            let Some(option_index) = indexes_to_display.get(clicked_index) else {
                return MenuEvent::Ignore;
            };

            let mut updated_state = ui_state.clone();
            updated_state.selected_index = clicked_index;
            updated_state.toggle(*option_index);
            MenuEvent::Update(updated_state)
        }
        MouseEventKind::ScrollDown => MenuEvent::Move(Down),
        MouseEventKind::ScrollUp => MenuEvent::Move(Up),
        _ => MenuEvent::Ignore,
    }
}

fn toggle_highlighted(ui_state: &UiState, indexes_to_display: &[usize]) -> MenuEvent {
    match indexes_to_display.get(ui_state.selected_index) {
        Some(option_index) => {
            let mut updated_state = ui_state.clone();
            updated_state.toggle(*option_index);
            MenuEvent::Update(updated_state)
        }
        None => MenuEvent::Bell,
    }
}

fn reset_cursor(ui_state: &mut UiState) {
    ui_state.selected_index = 0;
    ui_state.viewport.offset = 0;
}

/// Handle window resize events
pub(crate) fn handle_resize(
    width: u16,
    height: u16,
    ui_state: &UiState,
    displayed_count: usize,
) -> UiState {
    let new_height = height.saturating_sub(CHROME_ROWS);
    let mut ui_state = ui_state.clone();
    let mut new_viewport = ViewportState {
        width,
        height: new_height,
        offset: ui_state.viewport.offset,
    };

    // If growing taller, try to show more items above current selection
    match new_height.cmp(&ui_state.viewport.height) {
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = new_height - ui_state.viewport.height;
            new_viewport.offset = new_viewport.offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less
            if new_height > 0
                && ui_state.selected_index >= new_viewport.offset + new_height as usize =>
        {
            new_viewport.offset = ui_state.selected_index.saturating_sub(new_height as usize - 1);

            if new_viewport.offset + new_height as usize > displayed_count {
                new_viewport.offset = displayed_count.saturating_sub(new_height as usize);
            }
        }
        _ => {}
    }

    ui_state.viewport = new_viewport;
    ui_state
}

/// Print the header for the selection UI
fn print_header(ui_state: &UiState, message: &str, displayed_count: usize) -> Result<()> {
    let mut stdout = stdout();
    let (width, _) = terminal::size()?;

    let left_padding = "  ";

    let instructions = if ui_state.is_filtering {
        format!("{message}   |   <esc>: Stop Filtering")
    } else {
        format!(
            "{message}   |   <space>: Mark   /: Filter   |   {}/{}   {} marked   |   q: Quit",
            pad_to_width_of(ui_state.selected_index + 1, displayed_count),
            displayed_count,
            ui_state.toggled.len()
        )
    };

    let used = left_padding.len() + instructions.chars().count();
    let right_padding = " ".repeat((width as usize).saturating_sub(used));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// Text of one menu row, without styling
pub(crate) fn format_option_row(
    option_index: usize,
    label: &str,
    option_count: usize,
    is_marked: bool,
) -> String {
    let marker = if is_marked { "x" } else { " " };
    let number = pad_to_width_of(option_index + 1, option_count);
    format!("[{marker}] {number}. {label}")
}

/// Clear and write an option row in the selection UI
fn clear_and_write_option_row(
    row: u16,
    content: &str,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let content_width = content.chars().count();
    let padding = " ".repeat((terminal_width as usize).saturating_sub(content_width));

    if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    } else {
        queue!(stdout, SetBackgroundColor(Reset), SetForegroundColor(Reset))?;
    }

    queue!(
        stdout,
        Print(content),
        Print(padding),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print all visible options with the highlighted one styled
fn print_options_with_selection(
    ui_state: &UiState,
    options: &[String],
    indexes_to_display: &[usize],
) -> Result<()> {
    let viewport = &ui_state.viewport;

    let visible_options = indexes_to_display
        .iter()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (i, option_index) in visible_options.enumerate() {
        let is_selected = i + viewport.offset == ui_state.selected_index;
        let content = format_option_row(
            *option_index,
            &options[*option_index],
            options.len(),
            ui_state.toggled.contains(option_index),
        );

        clear_and_write_option_row(i as u16 + 1, &content, is_selected, viewport.width)?;
    }

    Ok(())
}

/// Move the selected index in the given direction
pub(crate) fn move_selected_index(
    ui_state: &UiState,
    displayed_count: usize,
    direction: Option<&CycleDirection>,
) -> UiState {
    if displayed_count == 0 {
        return ui_state.clone();
    }

    let mut new_index = ui_state.selected_index;
    let mut ui_state = ui_state.clone();
    let visible_rows = (ui_state.viewport.height as usize).max(1);

    match direction {
        Some(Up) => {
            if new_index == 0 {
                new_index = displayed_count - 1;
                ui_state.viewport.offset = new_index.saturating_sub(visible_rows - 1);
            } else {
                new_index -= 1;
                if new_index < ui_state.viewport.offset {
                    ui_state.viewport.offset = new_index;
                }
            }
        }
        Some(Down) => {
            new_index = (new_index + 1) % displayed_count;
            if new_index < ui_state.selected_index {
                ui_state.viewport.offset = 0;
            } else if new_index >= ui_state.viewport.offset + visible_rows {
                ui_state.viewport.offset = new_index - visible_rows + 1;
            }
        }
        None => {}
    }

    ui_state.selected_index = new_index;
    ui_state
}

/// Filter the displayed option indexes by fuzzy name match, or by option number
pub(crate) fn filter_displayed_indexes(options: &[String], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..options.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let predicate_index = predicate.parse::<usize>().ok();

    options
        .iter()
        .enumerate()
        .filter_map(|(i, label)| {
            if let Some(pred_idx) = predicate_index {
                // Number-based filtering, options are shown 1-based
                (i + 1)
                    .to_string()
                    .contains(&pred_idx.to_string())
                    .then_some(i)
            } else {
                matcher.fuzzy_match(label, predicate).map(|_| i)
            }
        })
        .collect()
}
