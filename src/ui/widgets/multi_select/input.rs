//! Keyboard input handling and interactive loop.
//!
//! The picker draws on stderr so stdout stays free for the result.

use std::io::{self, Stderr, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::navigation::NavKey;
use crate::popover::PopoverShell;

use super::picker::MultiSelect;
use super::render::{render_help_bar, RenderOptions};

/// What a key press asks the interactive loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Nav(NavKey),
    Cancel,
}

/// Convert a keyboard event to a PickerAction
pub fn key_to_action(key: KeyEvent) -> Option<PickerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(PickerAction::Cancel);
    }
    if NavKey::is_passthrough(&key) {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(PickerAction::Cancel),
        KeyCode::Char('k') => Some(PickerAction::Nav(NavKey::Up)),
        KeyCode::Char('j') => Some(PickerAction::Nav(NavKey::Down)),
        KeyCode::Char('h') => Some(PickerAction::Nav(NavKey::Left)),
        KeyCode::Char('l') => Some(PickerAction::Nav(NavKey::Right)),
        _ => NavKey::from_event(&key).map(PickerAction::Nav),
    }
}

/// Leaves raw mode and shows the cursor again, even on early return
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut Stderr) -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(out, crossterm::cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stderr();
        let _ = crossterm::execute!(
            out,
            crossterm::cursor::Show,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0)
        );
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

fn render_ui<P: PopoverShell>(
    out: &mut Stderr,
    select: &MultiSelect<P>,
    title: &str,
    opts: &RenderOptions,
) -> io::Result<()> {
    use crossterm::{cursor, execute, terminal};

    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    write!(out, "{}\r\n", title)?;
    write!(out, "{}\r\n", select.trigger_label(&opts.glyphs))?;
    write!(out, "{}\r\n", opts.glyphs.horizontal.repeat(40))?;
    for line in select.render(opts).lines() {
        write!(out, "{}\r\n", line)?;
    }
    write!(out, "\r\n{}\r\n", render_help_bar(&opts.glyphs))?;
    out.flush()
}

/// Run the picker interactively.
///
/// Returns `true` once a choice closed the popover, `false` if the user
/// cancelled.
pub fn run_interactive<P: PopoverShell>(
    select: &mut MultiSelect<P>,
    title: &str,
    opts: &RenderOptions,
) -> io::Result<bool> {
    use crossterm::event::{self, Event, KeyEventKind};

    let mut out = io::stderr();
    let _guard = TerminalGuard::enter(&mut out)?;

    select.open();
    render_ui(&mut out, select, title, opts)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_to_action(key) {
            Some(PickerAction::Cancel) => {
                tracing::debug!("picker cancelled");
                select.close_selector();
                return Ok(false);
            }
            Some(PickerAction::Nav(nav)) => {
                select.navigate(nav);
                if !select.is_open() {
                    return Ok(true);
                }
                render_ui(&mut out, select, title, opts)?;
            }
            None => {}
        }
    }
}
