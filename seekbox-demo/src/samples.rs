//! Static sample data and the two demo selects.

use seekbox::{ConfigError, MatchMode, Options, SearchableSelect, SelectOption};
use serde_json::json;

use crate::app::{ChangeLog, Slot};

pub const CITIES: [&str; 6] = ["Minsk", "London", "Paris", "Mogilev", "Moscow", "Berlin"];

pub fn people() -> Options {
    Options::records([
        json!({"firstName": "Jack", "lastName": "Johnson"}),
        json!({"firstName": "John", "lastName": "Jackson"}),
        json!({"firstName": "Sarah", "lastName": "Williams"}),
    ])
}

/// People matched by first name prefix. Required.
pub fn people_select(changes: &ChangeLog) -> Result<SearchableSelect, ConfigError> {
    SearchableSelect::builder()
        .options(people())
        .search_key("firstName")
        .render(|option: &SelectOption| option.field_text("firstName").unwrap_or_default())
        .match_mode(MatchMode::Prefix)
        .label("Autocomplete with array of objects as options")
        .required()
        .on_change(changes.listener("people"))
        .build()
}

/// Cities matched by suffix, starting on "London".
pub fn cities_select(changes: &ChangeLog) -> Result<SearchableSelect, ConfigError> {
    SearchableSelect::builder()
        .options(Options::texts(CITIES))
        .match_mode(MatchMode::Suffix)
        .label("Autocomplete with array as options")
        .default_value("London")
        .on_change(changes.listener("cities"))
        .build()
}

pub fn slots(changes: &ChangeLog) -> Result<Vec<Slot>, ConfigError> {
    Ok(vec![
        Slot {
            name: "people",
            select: people_select(changes)?,
        },
        Slot {
            name: "cities",
            select: cities_select(changes)?,
        },
    ])
}
