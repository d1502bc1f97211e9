use ratatui::layout::Rect;
use ratatui::CompletedFrame;
use termion::event::Key;

use crate::error::errors::ErrorWrapper;
use crate::form::AirspaceForm;
use crate::settings::{option_fields, restore_options, OPTIONS_GROUP};
use crate::storage::KeyValueStore;
use crate::terminal::terminal_manager::TerminalManager;
use crate::ui::ui::UI;
use crate::view::util::widget_menu::WidgetMenu;
use crate::view::{resolve_input, verify_display_size, GenericInputResult, InputHandler, InputResult, View, ENTER_KEY};
use crate::widget::stateful::dropdown_widget::DropdownInputState;
use crate::widget::widgets::{build_option_widgets, WidgetList};
use crate::widget::{Focusable, StatefulWidgetType};

/*
    This view is for choosing the airspace file export options i.e:
    1. Maximum altitude level
    2. Radio frequency annotation
    3. North / south latitude bounds
    4. Output format

    On first activation it hydrates the bound form from the persisted
    option values before any widget is built.
 */
pub struct OptionEditorView<'a, B: ratatui::backend::Backend> {
    pub ui: &'a mut UI,
    pub terminal_manager: &'a mut TerminalManager<B>,
    pub form: &'a mut AirspaceForm,
    pub store: &'a dyn KeyValueStore,
    pub menu: WidgetMenu,
    initialised: bool
}

pub fn build_option_editor<'a, B: ratatui::backend::Backend>(
    ui: &'a mut UI,
    terminal_manager: &'a mut TerminalManager<B>,
    store: &'a dyn KeyValueStore,
    form: &'a mut AirspaceForm
) -> OptionEditorView<'a, B> {
    OptionEditorView {
        ui,
        terminal_manager,
        form,
        store,
        menu: WidgetMenu::new(WidgetList { widget_index: Some(0), widgets: Vec::new() }),
        initialised: false
    }
}

impl<B: ratatui::backend::Backend> OptionEditorView<'_, B> {
    /*
        Hydrates the form from the persisted options (once only), then
        builds the dropdown widgets from the hydrated form and focuses
        the first of them.
     */
    pub fn activate(&mut self) -> Result<(), ErrorWrapper> {
        self.initialise()?;
        self.build_widgets()?;

        // Select the first widget
        if self.menu.widgets.widgets.len() > 0 {
            self.menu.widgets.widgets[0].state_type.focus();
        }
        Ok(())
    }

    // Runs once per activation, before the widgets are built
    fn initialise(&mut self) -> Result<(), ErrorWrapper> {
        if !self.initialised {
            restore_options(self.store, self.form)?;
            self.initialised = true;
        }
        Ok(())
    }

    fn build_widgets(&mut self) -> Result<(), ErrorWrapper> {
        let group = match self.form.get_group(OPTIONS_GROUP) {
            Some(group) => group,
            None => {
                return ErrorWrapper::internal_result(format!("The form is missing the '{}' group", OPTIONS_GROUP));
            }
        };
        let widgets = build_option_widgets(group);
        self.menu.widgets = WidgetList { widget_index: Some(0), widgets };
        Ok(())
    }

    fn focused_dropdown_mut(&mut self) -> Option<&mut DropdownInputState> {
        if let Some(idx) = self.menu.widgets.widget_index {
            if let Some(widget) = self.menu.widgets.widgets.get_mut(idx as usize) {
                match &mut widget.state_type {
                    StatefulWidgetType::Dropdown(state) => {
                        return Some(state);
                    }
                }
            }
        }
        None
    }

    fn focused_dropdown_showing(&self) -> bool {
        if let Some(idx) = self.menu.widgets.widget_index {
            if let Some(widget) = self.menu.widgets.widgets.get(idx as usize) {
                match &widget.state_type {
                    StatefulWidgetType::Dropdown(state) => {
                        return state.is_showing_options();
                    }
                }
            }
        }
        false
    }

    // Writes the focused dropdown's chosen id back into its form field
    fn sync_selection_to_form(&mut self) {
        if let Some(idx) = self.menu.widgets.widget_index {
            let fields = option_fields();
            let field = fields.get(idx as usize);
            let widget = self.menu.widgets.widgets.get(idx as usize);
            if let (Some(field), Some(widget)) = (field, widget) {
                match &widget.state_type {
                    StatefulWidgetType::Dropdown(state) => {
                        let chosen_id = state.get_selected_id();
                        if let Some(group) = self.form.get_group_mut(OPTIONS_GROUP) {
                            group.set_value(field, Some(chosen_id));
                        }
                    }
                }
            }
        }
    }
}

impl<B: ratatui::backend::Backend> View<bool> for OptionEditorView<'_, B> {
    fn begin(&mut self) -> Result<InputResult<bool>, ErrorWrapper> {
        self.activate()?;

        verify_display_size(self.terminal_manager);
        self.terminal_manager.terminal.clear()?;
        self.draw(None)?;

        while !self.handle_input(None)?.generic_input_result.done {
            self.draw(None)?;
        }
        return Ok(InputResult { generic_input_result: GenericInputResult { done: true, requires_view_refresh: true }, view_specific_result: None });
    }

    fn draw(&mut self, _area: Option<Rect>) -> Result<CompletedFrame, ErrorWrapper> {
        let ui = &mut self.ui;
        let menu = &self.menu;
        let terminal = &mut self.terminal_manager.terminal;
        return Ok(terminal.draw(|frame| {
            ui.render(frame);
            let frame_area = frame.area();

            let mut offset: u16 = 0;
            for widget in menu.widgets.widgets.iter() {
                let widget_area = Rect::new(4, 3 + offset, frame_area.width / 2, 1);
                match &widget.state_type {
                    StatefulWidgetType::Dropdown(state) => {
                        frame.render_stateful_widget(state.clone(), widget_area, &mut state.clone());
                        // An open dropdown takes a row per option
                        offset += if state.is_showing_options() { state.option_count() as u16 } else { 1 };
                    }
                }
            }
        })?);
    }
}

impl<B: ratatui::backend::Backend> InputHandler<bool> for OptionEditorView<'_, B> {
    fn handle_input(&mut self, input: Option<Key>) -> Result<InputResult<bool>, ErrorWrapper> {
        let key = resolve_input(input)?;
        match key {
            Key::Down => {
                // An open dropdown takes the selection keys until it closes
                if self.focused_dropdown_showing() {
                    if let Some(state) = self.focused_dropdown_mut() {
                        state.select_next();
                    }
                    self.sync_selection_to_form();
                    return Ok(InputResult { generic_input_result: GenericInputResult { done: false, requires_view_refresh: false }, view_specific_result: None });
                }
                self.menu.widgets.next_widget();
            },
            Key::Up => {
                if self.focused_dropdown_showing() {
                    if let Some(state) = self.focused_dropdown_mut() {
                        state.select_previous();
                    }
                    self.sync_selection_to_form();
                    return Ok(InputResult { generic_input_result: GenericInputResult { done: false, requires_view_refresh: false }, view_specific_result: None });
                }
                self.menu.widgets.previous_widget();
            },
            ENTER_KEY => {
                let mut closed = false;
                if let Some(state) = self.focused_dropdown_mut() {
                    if state.editable {
                        state.toggle_show();
                        closed = !state.is_showing_options();
                    }
                }
                if closed {
                    self.sync_selection_to_form();
                }
            },
            Key::Esc => {
                return Ok(InputResult { generic_input_result: GenericInputResult { done: true, requires_view_refresh: false }, view_specific_result: None });
            },
            _ => {
            }
        }
        return Ok(InputResult { generic_input_result: GenericInputResult { done: false, requires_view_refresh: false }, view_specific_result: None });
    }
}
