use serde::{Deserialize, Serialize};

use crate::error::errors::ErrorWrapper;
use crate::form::{AirspaceForm, FormGroup};
use crate::storage::KeyValueStore;

pub const OPTIONS_GROUP: &str = "options";
pub const STORAGE_KEY_OPTIONS: &str = "options";

pub const FIELD_MAX_LEVEL: &str = "maxLevel";
pub const FIELD_RADIO_FREQ: &str = "radioFreq";
pub const FIELD_NORTH: &str = "north";
pub const FIELD_SOUTH: &str = "south";
pub const FIELD_FORMAT: &str = "format";

// Option field names in form declaration order
pub fn option_fields() -> Vec<&'static str> {
    vec![FIELD_MAX_LEVEL, FIELD_RADIO_FREQ, FIELD_NORTH, FIELD_SOUTH, FIELD_FORMAT]
}

/*
    The persisted snapshot of the option fields, as stored under the
    "options" storage key. Every field is optional; anything missing
    from the stored JSON deserialises to None. Unknown keys are ignored.
 */
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PersistedOptions {
    #[serde(rename = "maxLevel", skip_serializing_if = "Option::is_none")]
    pub max_level: Option<String>,
    #[serde(rename = "radioFreq", skip_serializing_if = "Option::is_none")]
    pub radio_freq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub north: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub south: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>
}

impl PersistedOptions {
    pub fn value_of(&self, field_name: &str) -> Option<String> {
        match field_name {
            FIELD_MAX_LEVEL => self.max_level.clone(),
            FIELD_RADIO_FREQ => self.radio_freq.clone(),
            FIELD_NORTH => self.north.clone(),
            FIELD_SOUTH => self.south.clone(),
            FIELD_FORMAT => self.format.clone(),
            _ => None
        }
    }

    pub fn from_group(group: &FormGroup) -> PersistedOptions {
        PersistedOptions {
            max_level: group.get_value(FIELD_MAX_LEVEL),
            radio_freq: group.get_value(FIELD_RADIO_FREQ),
            north: group.get_value(FIELD_NORTH),
            south: group.get_value(FIELD_SOUTH),
            format: group.get_value(FIELD_FORMAT)
        }
    }
}

/*
    Hydrates the form's options group from the stored snapshot.

    With no stored value this leaves the form untouched. With a stored
    value, every field currently declared on the group is assigned the
    value looked up under the same name, including the absent value
    when the snapshot has no entry for it. Values are copied as-is;
    nothing checks them against the option lists.

    A snapshot that fails to parse aborts the restore before the field
    loop runs, so the form is never partially updated.
 */
pub fn restore_options(store: &dyn KeyValueStore, form: &mut AirspaceForm) -> Result<(), ErrorWrapper> {
    let stored = store.get(STORAGE_KEY_OPTIONS);
    if let Some(json) = stored {
        let saved: PersistedOptions = serde_json::from_str(json.as_str())?;

        let group = match form.get_group_mut(OPTIONS_GROUP) {
            Some(group) => group,
            None => {
                return ErrorWrapper::internal_result(format!("The form is missing the '{}' group", OPTIONS_GROUP));
            }
        };

        for name in group.field_names() {
            group.set_value(name.as_str(), saved.value_of(name.as_str()));
        }
        log::info!("Restored persisted option values into the '{}' group", OPTIONS_GROUP);
    } else {
        log::info!("No persisted options found under the '{}' key", STORAGE_KEY_OPTIONS);
    }
    Ok(())
}

// Stores the current option values for the next run to restore
pub fn save_options(store: &mut dyn KeyValueStore, form: &AirspaceForm) -> Result<(), ErrorWrapper> {
    let group = match form.get_group(OPTIONS_GROUP) {
        Some(group) => group,
        None => {
            return ErrorWrapper::internal_result(format!("The form is missing the '{}' group", OPTIONS_GROUP));
        }
    };

    let snapshot = PersistedOptions::from_group(group);
    let json = serde_json::to_string(&snapshot)?;
    store.put(STORAGE_KEY_OPTIONS, json)?;
    log::info!("Saved option values under the '{}' key", STORAGE_KEY_OPTIONS);
    Ok(())
}
