pub mod option_editor_view;
pub mod util;

use std::io;

use ratatui::layout::Rect;
use ratatui::CompletedFrame;
use termion::event::Key;
use termion::input::TermRead;

use crate::error::errors::ErrorWrapper;
use crate::terminal::terminal_manager::TerminalManager;
use crate::ui::resolution::MIN_RESOLUTION;

pub const ENTER_KEY: Key = Key::Char('\n');

pub struct GenericInputResult {
    pub done: bool,
    pub requires_view_refresh: bool
}

pub struct InputResult<T> {
    pub generic_input_result: GenericInputResult,
    pub view_specific_result: Option<T>
}

/*
    A full-screen interactive view. begin() drives the draw/input loop
    until the view reports itself done.
 */
pub trait View<T> {
    fn begin(&mut self) -> Result<InputResult<T>, ErrorWrapper>;
    fn draw(&mut self, area: Option<Rect>) -> Result<CompletedFrame, ErrorWrapper>;
}

pub trait InputHandler<T> {
    fn handle_input(&mut self, input: Option<Key>) -> Result<InputResult<T>, ErrorWrapper>;
}

// Uses the provided key if given, otherwise blocks on the next key from stdin
pub fn resolve_input(input: Option<Key>) -> Result<Key, ErrorWrapper> {
    match input {
        Some(key) => Ok(key),
        None => {
            match io::stdin().keys().next() {
                Some(result) => Ok(result?),
                None => ErrorWrapper::internal_result(String::from("Failed to read an input key from stdin"))
            }
        }
    }
}

pub fn verify_display_size<B: ratatui::backend::Backend>(terminal_manager: &mut TerminalManager<B>) {
    if let Ok(size) = terminal_manager.terminal.size() {
        if size.width < MIN_RESOLUTION.width || size.height < MIN_RESOLUTION.height {
            log::warn!("Terminal size {}x{} is below the minimum supported resolution of {}x{}",
                size.width, size.height, MIN_RESOLUTION.width, MIN_RESOLUTION.height);
        }
    }
}
