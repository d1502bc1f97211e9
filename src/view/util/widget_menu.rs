use crate::widget::widgets::WidgetList;

pub struct WidgetMenu {
    pub widgets: WidgetList
}

impl WidgetMenu {
    pub fn new(widgets: WidgetList) -> WidgetMenu {
        WidgetMenu { widgets }
    }
}
