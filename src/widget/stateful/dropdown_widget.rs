use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::StatefulWidget;

use crate::widget::{StatefulWidgetState, StatefulWidgetType};

/*
    A selectable (id, name) pair. The name is what the dropdown shows;
    the id is the machine value bound back into the form.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub id: String,
    pub name: String
}

impl DropdownOption {
    pub fn new(id: &str, name: &str) -> DropdownOption {
        DropdownOption { id: id.to_string(), name: name.to_string() }
    }
}

#[derive(Clone)]
#[derive(Debug)]
pub struct DropdownInputState {
    pub selected: bool,
    pub editable: bool,
    show_options: bool,
    name: String,
    options: Vec<DropdownOption>,
    selected_index: i8,
    chosen_option: DropdownOption
}

impl DropdownInputState {
    pub fn select_by_id(&mut self, id: &str) {
        match self.options.iter().position(|o| o.id == id) {
            Some(idx) => {
                self.selected_index = idx as i8;
                self.chosen_option = self.options[idx].clone();
            }, _ => {}
        }
    }

    pub fn select_next(&mut self) {
        if self.selected_index < self.options.len() as i8 - 1 {
            self.selected_index += 1;
            self.chosen_option = self.options[self.selected_index as usize].clone();
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.chosen_option = self.options[self.selected_index as usize].clone();
        }
    }

    pub fn get_selection(&self) -> DropdownOption {
        return self.chosen_option.clone();
    }

    pub fn get_selected_id(&self) -> String {
        return self.chosen_option.id.clone();
    }

    pub fn option_count(&self) -> usize {
        return self.options.len();
    }

    pub fn is_showing_options(&self) -> bool {
        return self.show_options;
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn toggle_show(&mut self) {
        self.show_options = !self.show_options;
    }
}

pub fn build_dropdown_state(name: String, editable: bool, options: Vec<DropdownOption>) -> DropdownInputState {
    DropdownInputState { selected: false, editable, show_options: false, name, selected_index: 0, chosen_option: options[0].clone(), options }
}

pub fn build_dropdown(name: String, editable: bool, options: Vec<DropdownOption>) -> StatefulWidgetState {
    let state = StatefulWidgetType::Dropdown(build_dropdown_state(name, editable, options));
    StatefulWidgetState { state_type: state }
}

impl StatefulWidget for DropdownInputState {
    type State = DropdownInputState;

    fn render(self, area: Rect, buf: &mut Buffer, _state: &mut Self::State) {
        buf.set_string(area.left(), area.top(), self.name.clone(), Style::default());

        let mut index: u16 = 0;
        let input_offset = area.left() + self.name.len() as u16 + 1;
        let highlight_width = self.options.iter().map(|o| o.name.len()).max().unwrap_or(0) as u16;
        if self.selected {
            if self.show_options {
                let selected_option = self.chosen_option.clone();
                for opt in self.options {
                    if opt == selected_option {
                        let selected_input_row = Rect::new(input_offset, area.top() + index, highlight_width, 1);
                        log::info!("Selecting dropdown {} row {} : {}", self.name, index, self.chosen_option.name);
                        buf.set_style(selected_input_row, Style::default().add_modifier(Modifier::REVERSED | Modifier::UNDERLINED));
                    }
                    buf.set_string(input_offset, area.top() + index, opt.name.clone(), Style::default());
                    index += 1;
                }
            } else {
                buf.set_string(input_offset, area.top() + index, self.chosen_option.name.clone(), Style::default().add_modifier(Modifier::REVERSED | Modifier::UNDERLINED));
            }
        } else {
            buf.set_string(input_offset, area.top() + index, self.chosen_option.name.clone(), Style::default());
        }
    }
}
