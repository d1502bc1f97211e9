use ratatui::backend::Backend;

use crate::error::errors::ErrorWrapper;
use crate::form::build_airspace_form;
use crate::settings::save_options;
use crate::storage::{build_file_store, default_store_path};
use crate::terminal::terminal_manager::TerminalManager;
use crate::ui::ui::build_ui;
use crate::view::option_editor_view::build_option_editor;
use crate::view::View;

/*
    Owns the form, storage and UI chrome for the lifetime of a run.
    The option editor view borrows the form; the stored option values
    are written back once the view has finished.
 */
pub fn run<B: Backend>(terminal_manager: &mut TerminalManager<B>) -> Result<(), ErrorWrapper> {
    let store_path = default_store_path();
    log::info!("Using storage file at {:?}", store_path);
    let mut store = build_file_store(store_path)?;

    let mut form = build_airspace_form();
    let mut ui = build_ui();

    {
        let mut view = build_option_editor(&mut ui, terminal_manager, &store, &mut form);
        view.begin()?;
    }

    save_options(&mut store, &form)
}
