use crate::settings::{FIELD_FORMAT, FIELD_MAX_LEVEL, FIELD_NORTH, FIELD_RADIO_FREQ, FIELD_SOUTH, OPTIONS_GROUP};

/*
    A single named form field. The value is optional so a field can hold
    the absent/undefined value as well as a chosen one.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: String,
    pub value: Option<String>
}

/*
    An ordered set of named fields. Views may read and overwrite field
    values but never add, remove, or restructure the fields themselves.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct FormGroup {
    name: String,
    fields: Vec<FormField>
}

impl FormGroup {
    pub fn new(name: String, fields: Vec<FormField>) -> FormGroup {
        FormGroup { name, fields }
    }

    // The currently declared field names, in declaration order
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    pub fn get_value(&self, name: &str) -> Option<String> {
        let field = self.fields.iter().find(|f| f.name == name);
        if let Some(f) = field {
            return f.value.clone();
        }
        None
    }

    pub fn set_value(&mut self, name: &str, value: Option<String>) {
        let field = self.fields.iter_mut().find(|f| f.name == name);
        if let Some(f) = field {
            f.value = value;
        }
    }
}

/*
    The form-state object shared with the option editor view. The form
    owns its groups; views receive a mutable reference only.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct AirspaceForm {
    groups: Vec<FormGroup>
}

impl AirspaceForm {
    pub fn new(groups: Vec<FormGroup>) -> AirspaceForm {
        AirspaceForm { groups }
    }

    pub fn get_group(&self, name: &str) -> Option<&FormGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn get_group_mut(&mut self, name: &str) -> Option<&mut FormGroup> {
        self.groups.iter_mut().find(|g| g.name == name)
    }
}

fn build_field(name: &str, value: &str) -> FormField {
    FormField { name: name.to_string(), value: Some(value.to_string()) }
}

pub fn build_airspace_form() -> AirspaceForm {
    // Defaults are the unrestricted / "none" entry of each option list
    let options = FormGroup::new(String::from(OPTIONS_GROUP), vec![
        build_field(FIELD_MAX_LEVEL, "66000"),
        build_field(FIELD_RADIO_FREQ, "no"),
        build_field(FIELD_NORTH, "59"),
        build_field(FIELD_SOUTH, "49"),
        build_field(FIELD_FORMAT, "openair")
    ]);
    AirspaceForm::new(vec![options])
}
