use crate::form::FormGroup;
use crate::options::{build_max_levels, build_north_boundaries, build_output_formats, build_radio_freqs, build_south_boundaries};
use crate::settings::{FIELD_FORMAT, FIELD_MAX_LEVEL, FIELD_NORTH, FIELD_RADIO_FREQ, FIELD_SOUTH};
use crate::widget::{Focusable, StatefulWidgetState, StatefulWidgetType};
use crate::widget::stateful::dropdown_widget::{build_dropdown_state, DropdownOption};

pub struct WidgetList {
    pub widget_index: Option<i8>,
    pub widgets: Vec<StatefulWidgetState>
}

impl WidgetList {
    pub fn previous_widget(&mut self) {
        if let Some(selected_widget) = self.widget_index {
            if selected_widget > 0 && selected_widget < self.widgets.len() as i8 {
                self.select_widget(selected_widget - 1);
            }
        }
    }

    pub fn next_widget(&mut self) {
        if let Some(selected_widget) = self.widget_index {
            if selected_widget >= 0 && selected_widget < self.widgets.len() as i8 - 1 {
                self.select_widget(selected_widget + 1);
            }
        }
    }

    pub fn select_widget(&mut self, index: i8) {
        let mut offset = 0;
        for widget in self.widgets.iter_mut() {
            if offset == index {
                self.widget_index = Some(offset);
                widget.state_type.focus();
            } else {
                widget.state_type.unfocus();
            }
            offset += 1;
        }
    }
}

fn build_option_dropdown(group: &FormGroup, field: &str, label: &str, options: Vec<DropdownOption>) -> StatefulWidgetState {
    let mut state = build_dropdown_state(label.to_string(), true, options);
    if let Some(value) = group.get_value(field) {
        // An id missing from the list leaves the display on the first option
        state.select_by_id(value.as_str());
    }
    StatefulWidgetState { state_type: StatefulWidgetType::Dropdown(state) }
}

/*
    Builds one dropdown per option field, in field declaration order,
    pre-selecting each dropdown from the group's current value.
 */
pub fn build_option_widgets(group: &FormGroup) -> Vec<StatefulWidgetState> {
    vec![
        build_option_dropdown(group, FIELD_MAX_LEVEL, "Maximum Level", build_max_levels()),
        build_option_dropdown(group, FIELD_RADIO_FREQ, "Radio Frequency", build_radio_freqs()),
        build_option_dropdown(group, FIELD_NORTH, "North Boundary", build_north_boundaries()),
        build_option_dropdown(group, FIELD_SOUTH, "South Boundary", build_south_boundaries()),
        build_option_dropdown(group, FIELD_FORMAT, "Format", build_output_formats())
    ]
}
