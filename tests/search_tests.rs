//! End-to-end search behavior through the public API

use pretty_assertions::assert_eq;

use fuzzywindow::{
    search, search_by_field, search_by_key, search_with_settings, ConfigError, FuzzyWindowError,
    Record, SearchOptions, SearchSettings, UsageError,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_helo_uses_exact_tier() {
    init_tracing();
    let items = ["hello", "world", "help"];
    assert_eq!(search("helo", &items), Vec::<&&str>::new());
}

#[test]
fn test_hellow_matches_with_one_mismatch() {
    init_tracing();
    let settings = SearchSettings::new(None, None, Some(25), None).unwrap();
    let items = ["hello world"];
    assert_eq!(search_with_settings("hellow", &items, &settings), vec![&"hello world"]);
}

#[test]
fn test_minimum_length_for_search() {
    let settings = SearchSettings::new(Some(4), None, None, None).unwrap();
    let items = ["abc", "abcd"];
    assert!(search_with_settings("abc", &items, &settings).is_empty());
    assert_eq!(search_with_settings("abcd", &items, &settings), vec![&"abcd"]);
}

#[test]
fn test_custom_fuzzy_threshold() {
    // A 3-char query enters the fuzzy tier, but 25% of 3 rounds down to 0
    let settings = SearchSettings::new(None, Some(3), None, None).unwrap();
    let items = ["cat", "cot", "dog"];
    assert_eq!(search_with_settings("cat", &items, &settings), vec![&"cat"]);

    // 50% of 4 allows 2 mismatches
    let settings = SearchSettings::new(None, Some(3), Some(50), None).unwrap();
    let items = ["cart", "curt", "dirt", "dog"];
    assert_eq!(
        search_with_settings("cart", &items, &settings),
        vec![&"cart", &"curt", &"dirt"]
    );
}

#[test]
fn test_case_sensitivity() {
    let items = ["Hello World", "hello world"];

    let insensitive = SearchSettings::default();
    assert_eq!(
        search_with_settings("HELLO", &items, &insensitive),
        vec![&"Hello World", &"hello world"]
    );

    let sensitive = SearchSettings::new(None, None, Some(20), Some(true)).unwrap();
    assert_eq!(
        search_with_settings("Hello", &items, &sensitive),
        vec![&"Hello World", &"hello world"]
    );
    assert_eq!(
        search_with_settings("HELLO", &items, &sensitive),
        Vec::<&&str>::new()
    );
}

#[test]
fn test_results_are_original_items() {
    let items = vec!["Fuzzy Window".to_string(), "unrelated".to_string()];
    let found = search("fuzzy", &items);
    assert_eq!(found.len(), 1);
    assert!(std::ptr::eq(found[0], &items[0]));
    assert_eq!(found[0], "Fuzzy Window");
}

#[test]
fn test_settings_zero_quirk() {
    let settings = SearchSettings::new(Some(0), Some(0), Some(0), None).unwrap();
    assert_eq!(settings.minimum_length_for_search(), 1);
    assert_eq!(settings.minimum_length_for_fuzzy_match(), 5);
    assert_eq!(settings.percentage_allowed_mismatch(), 25);
}

#[test]
fn test_settings_percentage_limit() {
    assert!(SearchSettings::new(None, None, Some(50), None).is_ok());
    let err = SearchSettings::new(None, None, Some(51), None).unwrap_err();
    assert_eq!(err, ConfigError::PercentageAllowedMismatch(51));
    assert_eq!(err.field(), "percentage_allowed_mismatch");
}

#[test]
fn test_settings_from_json_config() {
    let options: SearchOptions = serde_json::from_value(json!({
        "minimumLengthForSearch": 2,
        "minimumLengthForFuzzyMatch": 6,
        "percentageAllowedMismatch": 20,
        "caseSensitiveMatch": false
    }))
    .unwrap();
    let settings = options.build().unwrap();
    assert_eq!(settings.minimum_length_for_search(), 2);
    assert_eq!(settings.minimum_length_for_fuzzy_match(), 6);
    assert_eq!(settings.percentage_allowed_mismatch(), 20);
}

#[test]
fn test_search_json_objects_by_field() {
    init_tracing();
    let users = vec![
        json!({"name": "Grace Hopper", "born": 1906}),
        json!({"name": "Ada Lovelace", "born": 1815}),
        json!({"name": "Grace Kelly", "born": 1929}),
    ];
    let found =
        search_by_field("grase", &users, Some("name"), &SearchSettings::default()).unwrap();
    assert_eq!(found, vec![&users[0], &users[2]]);
}

#[test]
fn test_search_by_field_errors() {
    let users = vec![json!({"name": "Grace Hopper", "born": 1906})];
    let settings = SearchSettings::default();

    assert_eq!(
        search_by_field("1906", &users, Some("born"), &settings),
        Err(UsageError::FieldNotString {
            field: "born".to_string()
        })
    );
    assert_eq!(
        search_by_field("grace", &users, None, &settings),
        Err(UsageError::NotAString)
    );

    let err: FuzzyWindowError = search_by_field("grace", &users, Some("email"), &settings)
        .unwrap_err()
        .into();
    assert_eq!(
        err.to_string(),
        "usage error: field 'email' does not exist on the searched items"
    );
}

#[test]
fn test_search_records_by_field() {
    let products = vec![
        Record::with_data(1).with_field("name", "MacBook Pro"),
        Record::with_data(2).with_field("name", "ThinkPad"),
        Record::with_data(3).with_field("name", "Macbook Air"),
    ];
    let found =
        search_by_field("macbook", &products, Some("name"), &SearchSettings::default()).unwrap();
    let ids: Vec<Option<u64>> = found.iter().map(|r| r.data).collect();
    assert_eq!(ids, vec![Some(1), Some(3)]);
}

#[test]
fn test_search_by_key_struct() {
    #[derive(Debug, PartialEq)]
    struct City {
        name: &'static str,
    }
    let cities = [
        City { name: "Amsterdam" },
        City { name: "Rotterdam" },
        City { name: "Utrecht" },
    ];
    let found = search_by_key(
        "rotterdan",
        &cities,
        |city| city.name,
        &SearchSettings::default(),
    );
    assert_eq!(found, vec![&cities[1]]);
}

#[test]
fn test_large_collection_order() {
    let items: Vec<String> = (0..1000)
        .map(|i| {
            if i % 7 == 0 {
                format!("{:04} matching window", i)
            } else {
                format!("{:04} something else", i)
            }
        })
        .collect();
    let found = search("matchinq", &items);
    assert_eq!(found.len(), 143);
    let expected: Vec<&String> = items.iter().step_by(7).collect();
    assert_eq!(found, expected);
}
