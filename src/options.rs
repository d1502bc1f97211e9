use crate::widget::stateful::dropdown_widget::DropdownOption;

/*
    The selectable values for each of the export option fields. These
    lists are fixed; the ids are the machine values written into the
    form and the names are the labels shown in the dropdowns.
 */

pub fn build_max_levels() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("66000", "Unlimited"),
        DropdownOption::new("19500", "FL195"),
        DropdownOption::new("12500", "FL125"),
        DropdownOption::new("10500", "FL105"),
        DropdownOption::new("6500", "FL65")
    ]
}

pub fn build_radio_freqs() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("no", "No"),
        DropdownOption::new("append", "Append")
    ]
}

pub fn build_north_boundaries() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("59", "None"),
        DropdownOption::new("54.9", "Carlisle"),
        DropdownOption::new("53.7", "Hull"),
        DropdownOption::new("52.9", "Nottingham")
    ]
}

pub fn build_south_boundaries() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("49", "None"),
        DropdownOption::new("51.8", "Oxford"),
        DropdownOption::new("52.9", "Nottingham"),
        DropdownOption::new("53.7", "Hull"),
        DropdownOption::new("54.9", "Carlisle")
    ]
}

pub fn build_output_formats() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("openair", "OpenAir"),
        DropdownOption::new("ratonly", "RA(T) only"),
        DropdownOption::new("competition", "Competition")
    ]
}
