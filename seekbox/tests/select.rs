use std::cell::RefCell;
use std::rc::Rc;

use seekbox::{
    Advisory, ConfigError, MatchMode, Options, SearchableSelect, SelectEvent, SelectOption,
    filter_indices, fold,
};
use serde::Serialize;
use serde_json::json;

const CITIES: [&str; 6] = ["Minsk", "London", "Paris", "Mogilev", "Moscow", "Berlin"];

fn people() -> Options {
    Options::records([
        json!({"firstName": "Jack", "lastName": "Johnson"}),
        json!({"firstName": "John", "lastName": "Jackson"}),
        json!({"firstName": "Sarah", "lastName": "Williams"}),
    ])
}

fn first_name(option: &SelectOption) -> String {
    option.field_text("firstName").unwrap_or_default()
}

type Changes = Rc<RefCell<Vec<String>>>;

fn city_select(mode: MatchMode) -> (SearchableSelect, Changes) {
    let changes: Changes = Rc::default();
    let sink = Rc::clone(&changes);
    let select = SearchableSelect::builder()
        .options(Options::texts(CITIES))
        .match_mode(mode)
        .on_change(move |value: &str| sink.borrow_mut().push(value.to_string()))
        .build()
        .unwrap();
    (select, changes)
}

fn texts(select: &SearchableSelect) -> Vec<String> {
    select
        .filtered()
        .into_iter()
        .filter_map(SelectOption::search_text)
        .collect()
}

// ============================================================================
// Matching Laws
// ============================================================================

fn expected(query: &str, mode: MatchMode) -> Vec<String> {
    let query = query.to_lowercase();
    CITIES
        .iter()
        .filter(|city| {
            let city = city.to_lowercase();
            match mode {
                MatchMode::Prefix => city.starts_with(&query),
                MatchMode::Suffix => city.ends_with(&query),
                MatchMode::Substring => city.contains(&query),
            }
        })
        .map(|city| city.to_string())
        .collect()
}

#[test]
fn test_filter_follows_mode_predicate() {
    let queries = ["", "m", "MO", "sk", "on", "in", "N", "zzz", "Berlin"];
    for mode in [MatchMode::Prefix, MatchMode::Suffix, MatchMode::Substring] {
        let (mut select, _) = city_select(mode);
        for query in queries {
            select.input(query);
            assert_eq!(texts(&select), expected(query, mode), "{mode} {query:?}");
        }
    }
}

#[test]
fn test_filter_is_idempotent_and_ordered() {
    let first = filter_indices(CITIES, "o", MatchMode::Substring);
    let second = filter_indices(CITIES, "o", MatchMode::Substring);
    assert_eq!(first, second);
    assert_eq!(first, vec![1, 3, 4]);
    assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_empty_query_matches_all() {
    for mode in [MatchMode::Prefix, MatchMode::Suffix, MatchMode::Substring] {
        assert_eq!(filter_indices(CITIES, "", mode).len(), CITIES.len());
    }
}

#[test]
fn test_empty_option_list() {
    let mut select = SearchableSelect::builder()
        .options(Options::texts(Vec::<String>::new()))
        .build()
        .unwrap();
    select.input("anything");
    assert_eq!(select.filtered_count(), 0);
    assert!(select.view().dropdown.is_empty());
    assert_eq!(select.advisory(), Advisory::NotFound);
}

#[test]
fn test_fold_handles_mixed_case() {
    assert_eq!(fold("MoScOw"), "moscow");
    assert_eq!(filter_indices(CITIES, "LONDON", MatchMode::Prefix), vec![1]);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_suffix_sk_finds_minsk() {
    let (mut select, _) = city_select(MatchMode::Suffix);
    select.focus();
    select.input("sk");
    assert_eq!(texts(&select), vec!["Minsk"]);
    assert_eq!(select.view().dropdown.len(), 1);
}

#[test]
fn test_prefix_on_records_uses_search_key() {
    let mut select = SearchableSelect::builder()
        .options(people())
        .search_key("firstName")
        .match_mode(MatchMode::Prefix)
        .render(first_name)
        .build()
        .unwrap();

    select.input("Ja");
    let filtered = select.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered[0],
        &SelectOption::keyed(json!({"firstName": "Jack", "lastName": "Johnson"}), "firstName")
    );
}

#[test]
fn test_focused_empty_input_asks_for_value() {
    let (mut select, _) = city_select(MatchMode::Substring);
    select.focus();
    select.input("");

    assert_eq!(select.advisory(), Advisory::EnterSearchValue);
    assert!(!select.dropdown_visible());
    assert_eq!(select.view().advisory, Some("Enter a search value"));
}

#[test]
fn test_no_match_reports_not_found() {
    let (mut select, _) = city_select(MatchMode::Substring);
    select.focus();
    select.input("zzz");

    assert!(select.is_open());
    assert_eq!(select.filtered_count(), 0);
    assert_eq!(select.advisory(), Advisory::NotFound);
    assert_eq!(select.view().advisory, Some("Not found"));
}

#[test]
fn test_controlled_sync_does_not_notify() {
    let changes: Changes = Rc::default();
    let sink = Rc::clone(&changes);
    let mut select = SearchableSelect::builder()
        .options(Options::texts(CITIES))
        .controlled()
        .value("Paris")
        .on_change(move |value: &str| sink.borrow_mut().push(value.to_string()))
        .build()
        .unwrap();

    assert_eq!(select.text(), "Paris");
    select.sync_value("Berlin");
    assert_eq!(select.text(), "Berlin");
    assert!(changes.borrow().is_empty());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_click_selects_and_closes() {
    let (mut select, changes) = city_select(MatchMode::Prefix);
    select.focus();
    select.input("mo");
    assert!(select.dropdown_visible());

    select.handle(SelectEvent::Click(1));
    assert_eq!(select.text(), "Moscow");
    assert!(!select.is_open());
    assert_eq!(select.filtered_count(), 0);
    assert!(!select.dropdown_visible());
    assert_eq!(select.advisory(), Advisory::None);
    assert_eq!(*changes.borrow(), vec!["mo", "Moscow"]);
}

#[test]
fn test_click_uses_rendered_text() {
    let changes: Changes = Rc::default();
    let sink = Rc::clone(&changes);
    let mut select = SearchableSelect::builder()
        .options(people())
        .search_key("firstName")
        .render(|option| {
            format!(
                "{} {}",
                option.field_text("firstName").unwrap_or_default(),
                option.field_text("lastName").unwrap_or_default()
            )
        })
        .on_change(move |value: &str| sink.borrow_mut().push(value.to_string()))
        .build()
        .unwrap();

    select.input("sa");
    assert_eq!(select.view().dropdown[0].text, "Sarah Williams");
    select.click_option(0);
    assert_eq!(select.text(), "Sarah Williams");
    assert_eq!(changes.borrow().last().map(String::as_str), Some("Sarah Williams"));
}

#[test]
fn test_typing_after_selection_reopens() {
    let (mut select, _) = city_select(MatchMode::Substring);
    select.input("par");
    select.click_option(0);
    assert!(!select.is_open());

    select.input("Pa");
    assert!(select.is_open());
    assert_eq!(texts(&select), vec!["Paris"]);
}

#[test]
fn test_blur_keeps_dropdown() {
    let (mut select, _) = city_select(MatchMode::Substring);
    select.focus();
    select.input("in");
    select.blur();

    assert!(!select.is_focused());
    assert!(select.dropdown_visible());
    assert_eq!(select.view().dropdown.len(), 2);
}

// ============================================================================
// Advisory Law
// ============================================================================

#[test]
fn test_advisory_law_over_event_sequences() {
    let events = [
        SelectEvent::Focus,
        SelectEvent::Input("m".into()),
        SelectEvent::Input("mx".into()),
        SelectEvent::Input("".into()),
        SelectEvent::Blur,
        SelectEvent::Input("ber".into()),
        SelectEvent::Click(0),
        SelectEvent::Focus,
        SelectEvent::Input("".into()),
    ];

    let (mut select, _) = city_select(MatchMode::Prefix);
    for event in events {
        select.handle(event);
        let text = select.text().to_string();
        let expected = if select.is_focused() && text.is_empty() {
            Advisory::EnterSearchValue
        } else if select.is_open() && !text.is_empty() && select.filtered_count() == 0 {
            Advisory::NotFound
        } else {
            Advisory::None
        };
        assert_eq!(select.advisory(), expected);
    }
}

// ============================================================================
// External Values
// ============================================================================

#[test]
fn test_uncontrolled_starts_from_default() {
    let select = SearchableSelect::builder()
        .options(Options::texts(CITIES))
        .default_value("London")
        .build()
        .unwrap();
    assert_eq!(select.text(), "London");
    assert!(!select.is_open());
}

#[test]
fn test_default_change_overwrites_text() {
    let (mut select, changes) = city_select(MatchMode::Substring);
    select.input("Par");
    select.sync_default_value("Berlin");
    assert_eq!(select.text(), "Berlin");
    assert_eq!(*changes.borrow(), vec!["Par"]);

    // Unchanged default is not re-applied
    select.input("Mo");
    select.sync_default_value("Berlin");
    assert_eq!(select.text(), "Mo");
}

#[test]
fn test_unchanged_value_is_not_reapplied() {
    let mut select = SearchableSelect::builder()
        .options(Options::texts(CITIES))
        .controlled()
        .value("Paris")
        .build()
        .unwrap();

    select.input("Lon");
    select.sync_value("Paris");
    assert_eq!(select.text(), "Lon");
}

#[test]
fn test_value_sync_refilters_dropdown() {
    let mut select = SearchableSelect::builder()
        .options(Options::texts(CITIES))
        .match_mode(MatchMode::Prefix)
        .controlled()
        .build()
        .unwrap();
    select.focus();
    select.input("Mo");
    assert_eq!(texts(&select), vec!["Mogilev", "Moscow"]);

    select.sync_value("Berlin");
    assert_eq!(select.text(), "Berlin");
    assert_eq!(texts(&select), vec!["Berlin"]);
    assert!(select.is_open());
    assert!(select.dropdown_visible());
    let rows: Vec<_> = select.view().dropdown.into_iter().map(|row| row.text).collect();
    assert_eq!(rows, vec!["Berlin"]);
    assert_eq!(select.advisory(), Advisory::None);

    select.sync_value("Rome");
    assert_eq!(select.filtered_count(), 0);
    assert!(!select.dropdown_visible());
    assert_eq!(select.advisory(), Advisory::NotFound);

    select.sync_value("");
    assert_eq!(select.filtered_count(), CITIES.len());
    assert!(!select.dropdown_visible());
    assert_eq!(select.advisory(), Advisory::EnterSearchValue);
}

#[test]
fn test_default_sync_refilters_dropdown() {
    let (mut select, changes) = city_select(MatchMode::Suffix);
    select.focus();
    select.input("zzz");
    assert_eq!(select.advisory(), Advisory::NotFound);

    select.sync_default_value("sk");
    assert_eq!(texts(&select), vec!["Minsk"]);
    assert!(select.dropdown_visible());
    assert_eq!(select.advisory(), Advisory::None);
    assert_eq!(*changes.borrow(), vec!["zzz"]);
}

#[test]
fn test_sync_before_typing_keeps_dropdown_closed() {
    let (mut select, _) = city_select(MatchMode::Substring);
    select.sync_default_value("o");
    assert_eq!(texts(&select), vec!["London", "Mogilev", "Moscow"]);
    assert!(!select.is_open());
    assert!(select.view().dropdown.is_empty());
}

#[test]
fn test_initial_value_is_filtered() {
    let select = SearchableSelect::builder()
        .options(Options::texts(CITIES))
        .match_mode(MatchMode::Prefix)
        .controlled()
        .value("Mo")
        .build()
        .unwrap();
    assert_eq!(texts(&select), vec!["Mogilev", "Moscow"]);
    assert!(!select.dropdown_visible());
}

#[test]
fn test_uncontrolled_ignores_value_sync() {
    let (mut select, _) = city_select(MatchMode::Substring);
    select.sync_value("Berlin");
    assert_eq!(select.text(), "");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_records_need_search_key() {
    let result = SearchableSelect::builder().options(people()).build();
    assert!(matches!(result, Err(ConfigError::MissingSearchKey)));
}

#[test]
fn test_value_needs_controlled() {
    let result = SearchableSelect::builder()
        .options(Options::texts(CITIES))
        .value("Paris")
        .build();
    assert!(matches!(result, Err(ConfigError::ValueWithoutControl)));
}

#[test]
fn test_missing_field_is_reported_with_index() {
    let result = SearchableSelect::builder()
        .options(Options::records([
            json!({"firstName": "Jack"}),
            json!({"lastName": "Jackson"}),
        ]))
        .search_key("firstName")
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingField { index: 1, .. })
    ));
}

#[test]
fn test_serialized_records() {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Person {
        first_name: &'static str,
        last_name: &'static str,
    }

    let options = Options::serialize([
        Person {
            first_name: "Jack",
            last_name: "Johnson",
        },
        Person {
            first_name: "Sarah",
            last_name: "Williams",
        },
    ])
    .unwrap();

    let mut select = SearchableSelect::builder()
        .options(options)
        .search_key("firstName")
        .match_mode(MatchMode::Suffix)
        .build()
        .unwrap();
    select.input("AH");
    assert_eq!(select.view().dropdown[0].text, "Sarah");
}

#[test]
fn test_numeric_search_key() {
    let mut select = SearchableSelect::builder()
        .options(Options::records([
            json!({"code": 375, "country": "Belarus"}),
            json!({"code": 44, "country": "United Kingdom"}),
        ]))
        .search_key("code")
        .match_mode(MatchMode::Prefix)
        .build()
        .unwrap();
    select.input("37");
    assert_eq!(select.filtered_count(), 1);
    assert_eq!(select.view().dropdown[0].text, "375");
}
