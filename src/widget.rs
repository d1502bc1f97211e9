pub mod stateful;
pub mod widgets;

use crate::widget::stateful::dropdown_widget::DropdownInputState;

#[derive(Clone, Debug)]
pub enum StatefulWidgetType {
    Dropdown(DropdownInputState)
}

pub struct StatefulWidgetState {
    pub state_type: StatefulWidgetType
}

pub trait Focusable {
    fn focus(&mut self);
    fn unfocus(&mut self);
}

impl Focusable for StatefulWidgetType {
    fn focus(&mut self) {
        match self {
            StatefulWidgetType::Dropdown(state) => {
                state.selected = true;
            }
        }
    }

    fn unfocus(&mut self) {
        match self {
            StatefulWidgetType::Dropdown(state) => {
                state.selected = false;
            }
        }
    }
}
