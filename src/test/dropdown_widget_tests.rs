#[cfg(test)]
mod dropdown_widget_tests {
    use crate::widget::stateful::dropdown_widget::{build_dropdown, DropdownInputState, DropdownOption};
    use crate::widget::StatefulWidgetType;

    fn build_test_options() -> Vec<DropdownOption> {
        vec![DropdownOption::new("a", "A"), DropdownOption::new("b", "B")]
    }

    fn assert_for_dropdown_widget<F>(widget_type: StatefulWidgetType, mut callback: F) where F: FnMut(DropdownInputState) {
        match widget_type {
            StatefulWidgetType::Dropdown(s) => {
                callback(s);
            }
        }
    }

    #[test]
    fn test_dropdown_get_selection() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());
        assert_for_dropdown_widget(dropdown.state_type, &|state: DropdownInputState| {
            // WHEN we call to get the initial selection
            // THEN we expect it to be the first option
            assert_eq!("Test".to_string(), state.get_name());
            assert_eq!("a".to_string(), state.get_selected_id());
            assert_eq!("A".to_string(), state.get_selection().name);
            // AND by default we don't show options until we've tried to access the dropdown
            assert_eq!(false, state.is_showing_options());
        });
    }

    #[test]
    fn test_dropdown_toggle_show() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());

        assert_for_dropdown_widget(dropdown.state_type, &|mut state: DropdownInputState| {
            // WHEN we call to toggle showing of options
            state.toggle_show();
            // THEN we expect it to be set to true (i.e the dropdown list should be shown)
            assert_eq!(true, state.is_showing_options());
        });
    }

    #[test]
    fn test_dropdown_toggle_show_multi() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());

        assert_for_dropdown_widget(dropdown.state_type, &|mut state: DropdownInputState| {
            // WHEN we call to toggle showing of options twice
            state.toggle_show();
            state.toggle_show();
            // THEN we expect it to be set to false again
            assert_eq!(false, state.is_showing_options());
        });
    }

    #[test]
    fn test_dropdown_select_next() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());
        assert_for_dropdown_widget(dropdown.state_type, &|mut state: DropdownInputState| {
            // WHEN we call to select the next item
            state.select_next();
            // THEN we expect the selection to be "B"
            assert_eq!("b".to_string(), state.get_selected_id());
        });
    }

    #[test]
    fn test_dropdown_select_next_end_of_range() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());

        assert_for_dropdown_widget(dropdown.state_type, &|mut state: DropdownInputState| {
            // WHEN we call to select the next item twice
            state.select_next();
            state.select_next();
            // THEN we expect the selection to be "B" (unchanged)
            assert_eq!("b".to_string(), state.get_selected_id());
        });
    }

    #[test]
    fn test_dropdown_select_previous() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());

        assert_for_dropdown_widget(dropdown.state_type, &|mut state: DropdownInputState| {
            // AND we've selected the 2nd option
            state.select_next();
            assert_eq!("b".to_string(), state.get_selected_id());
            // WHEN we call to select the previous item
            state.select_previous();
            // THEN we expect the selection to be "A"
            assert_eq!("a".to_string(), state.get_selected_id());
        });
    }

    #[test]
    fn test_dropdown_select_previous_end_of_range() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());

        assert_for_dropdown_widget(dropdown.state_type, &|mut state: DropdownInputState| {
            assert_eq!("a".to_string(), state.get_selected_id());
            // WHEN we call to select the previous item
            state.select_previous();
            // THEN we expect the selection to be "A" (unchanged)
            assert_eq!("a".to_string(), state.get_selected_id());
        });
    }

    #[test]
    fn test_dropdown_select_by_id() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());

        assert_for_dropdown_widget(dropdown.state_type, &|mut state: DropdownInputState| {
            // WHEN we call to select an option by its id
            state.select_by_id("b");
            // THEN we expect that option to be chosen
            assert_eq!("b".to_string(), state.get_selected_id());
            assert_eq!("B".to_string(), state.get_selection().name);
        });
    }

    #[test]
    fn test_dropdown_select_by_unknown_id() {
        // GIVEN a dropdown with 2 options
        let dropdown = build_dropdown("Test".to_string(), true, build_test_options());

        assert_for_dropdown_widget(dropdown.state_type, &|mut state: DropdownInputState| {
            // WHEN we call to select an id that appears in no option
            state.select_by_id("zz");
            // THEN we expect the selection to be unchanged
            assert_eq!("a".to_string(), state.get_selected_id());
        });
    }
}
