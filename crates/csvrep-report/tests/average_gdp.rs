//! Tests for the average GDP aggregation.

use csvrep_model::{Row, Value};
use csvrep_report::{AverageGdpReport, Report};

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn economic_data() -> Vec<Row> {
    vec![
        row(&[("country", "United States"), ("year", "2021"), ("gdp", "22994")]),
        row(&[("country", "United States"), ("year", "2022"), ("gdp", "23315")]),
        row(&[("country", "United States"), ("year", "2023"), ("gdp", "25462")]),
        row(&[("country", "China"), ("year", "2021"), ("gdp", "17734")]),
        row(&[("country", "China"), ("year", "2022"), ("gdp", "17734")]),
        row(&[("country", "China"), ("year", "2023"), ("gdp", "17963")]),
        row(&[("country", "Germany"), ("year", "2021"), ("gdp", "4257")]),
    ]
}

fn country_of(report_row: &csvrep_model::ReportRow) -> &str {
    match &report_row["country"] {
        Value::Text(name) => name,
        other => panic!("country should be text, got {other:?}"),
    }
}

#[test]
fn averages_by_country_sorted_descending() {
    let result = AverageGdpReport.generate(&economic_data()).unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(country_of(&result[0]), "United States");
    assert_eq!(result[0]["average_gdp"], Value::Float(23923.67));
    assert_eq!(country_of(&result[1]), "China");
    assert_eq!(result[1]["average_gdp"], Value::Float(17810.33));
    assert_eq!(country_of(&result[2]), "Germany");
    assert_eq!(result[2]["average_gdp"], Value::Float(4257.0));
}

#[test]
fn simple_two_group_average() {
    let data = vec![
        row(&[("country", "A"), ("gdp", "10")]),
        row(&[("country", "A"), ("gdp", "20")]),
        row(&[("country", "B"), ("gdp", "5")]),
    ];

    let result = AverageGdpReport.generate(&data).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(country_of(&result[0]), "A");
    assert_eq!(result[0]["average_gdp"], Value::Float(15.0));
    assert_eq!(country_of(&result[1]), "B");
    assert_eq!(result[1]["average_gdp"], Value::Float(5.0));
}

#[test]
fn midpoint_average_is_exact() {
    let data = vec![
        row(&[("country", "A"), ("gdp", "10000")]),
        row(&[("country", "A"), ("gdp", "10001")]),
    ];

    let result = AverageGdpReport.generate(&data).unwrap();

    assert_eq!(result[0]["average_gdp"], Value::Float(10000.5));
}

#[test]
fn skips_rows_missing_columns_or_non_numeric() {
    let data = vec![
        row(&[("country", "X"), ("gdp", "bad")]),
        row(&[("country", "Y")]),
        row(&[("gdp", "100")]),
    ];

    let result = AverageGdpReport.generate(&data).unwrap();

    assert!(result.is_empty());
}

#[test]
fn trims_country_and_gdp_values() {
    let data = vec![
        row(&[("country", " Germany "), ("gdp", " 4257 ")]),
        row(&[("country", "Germany"), ("gdp", "4257")]),
    ];

    let result = AverageGdpReport.generate(&data).unwrap();

    // Both rows land in the same group after trimming.
    assert_eq!(result.len(), 1);
    assert_eq!(country_of(&result[0]), "Germany");
    assert_eq!(result[0]["average_gdp"], Value::Float(4257.0));
}

#[test]
fn float_gdp_values_are_averaged() {
    let data = vec![
        row(&[("country", "A"), ("gdp", "1.5")]),
        row(&[("country", "A"), ("gdp", "2.5")]),
    ];

    let result = AverageGdpReport.generate(&data).unwrap();

    assert_eq!(result[0]["average_gdp"], Value::Float(2.0));
}

#[test]
fn equal_averages_keep_alphabetical_order() {
    let data = vec![
        row(&[("country", "Zeta"), ("gdp", "100")]),
        row(&[("country", "Alpha"), ("gdp", "100")]),
        row(&[("country", "Mid"), ("gdp", "200")]),
    ];

    let result = AverageGdpReport.generate(&data).unwrap();

    assert_eq!(country_of(&result[0]), "Mid");
    assert_eq!(country_of(&result[1]), "Alpha");
    assert_eq!(country_of(&result[2]), "Zeta");
}

#[test]
fn integer_gdp_beyond_i64_still_aggregates() {
    let data = vec![row(&[("country", "A"), ("gdp", "10000000000000000000")])];

    let result = AverageGdpReport.generate(&data).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0]["average_gdp"], Value::Float(1e19));
}

#[test]
fn scientific_notation_is_the_defensive_conversion_error() {
    let data = vec![row(&[("country", "A"), ("gdp", "1e5")])];

    let err = AverageGdpReport.generate(&data).unwrap_err();

    assert!(err.to_string().contains("1e5"));
}

#[test]
fn empty_input_yields_empty_output() {
    let result = AverageGdpReport.generate(&[]).unwrap();

    assert!(result.is_empty());
}
