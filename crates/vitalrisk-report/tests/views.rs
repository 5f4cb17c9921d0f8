mod common;

use vitalrisk_core::models::account::AuthenticatedUser;
use vitalrisk_core::models::patient::Gender;
use vitalrisk_report::views::{EMPTY_ANALYTICS, EMPTY_HISTORY, Notice, Views};
use vitalrisk_scoring::fields::{default_record, validate_record};

use common::prediction;

fn user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: 1,
        username: "alice".to_string(),
        full_name: "Alice Example".to_string(),
        email: "alice@example.com".to_string(),
    }
}

#[test]
fn all_templates_parse() {
    Views::new().unwrap();
}

#[test]
fn login_shows_notices() {
    let views = Views::new().unwrap();
    let html = views.login(&[Notice::error("Invalid username or password!")]).unwrap();
    assert!(html.contains("Invalid username or password!"));
    assert!(html.contains("Demo Login"));
    assert!(!html.contains("Welcome,"));
}

#[test]
fn predict_form_uses_defaults() {
    let views = Views::new().unwrap();
    let html = views.predict(&user(), &default_record(), &[], &[]).unwrap();
    assert!(html.contains("Welcome, Alice Example!"));
    assert!(html.contains("name=\"age\""));
    assert!(html.contains("value=\"30\""));
    assert!(html.contains("value=\"22.0\""));
    assert!(html.contains("value=\"5.5\""));
    assert!(html.contains("Heavy smoker"));
}

#[test]
fn predict_form_lists_validation_errors() {
    let views = Views::new().unwrap();
    let record = default_record();
    let errors = validate_record(&record);
    let html = views.predict(&user(), &record, &errors, &[]).unwrap();
    assert!(html.contains("Please enter patient name!"));
}

#[test]
fn result_page_shows_tiers_and_numbered_recommendations() {
    let views = Views::new().unwrap();
    let p = prediction(1, "Zed", 30, Gender::Female, "2024-01-01T00:00:00Z");
    let html = views
        .result(&user(), &p.record, &p.assessment, &[Notice::success("Prediction saved to your history!")])
        .unwrap();
    assert!(html.contains("LOW RISK"));
    assert!(html.contains("<ol>"));
    assert!(html.contains("Maintain current healthy lifestyle"));
    assert!(html.contains("risk-chart-data"));
    assert!(html.contains("Prediction saved to your history!"));
}

#[test]
fn empty_history_and_analytics_show_empty_state() {
    let views = Views::new().unwrap();
    assert!(views.history(&user(), &[]).unwrap().contains(EMPTY_HISTORY));
    assert!(views.analytics(&user(), &[]).unwrap().contains(EMPTY_ANALYTICS));
}

#[test]
fn history_lists_entries_in_given_order() {
    let views = Views::new().unwrap();
    let history = vec![
        prediction(2, "Newer", 50, Gender::Male, "2024-03-02T00:00:00Z"),
        prediction(1, "Older", 30, Gender::Female, "2024-03-01T00:00:00Z"),
    ];
    let html = views.history(&user(), &history).unwrap();
    let newer = html.find("Newer - 2024-03-02").unwrap();
    let older = html.find("Older - 2024-03-01").unwrap();
    assert!(newer < older);
    assert!(html.contains("Cardiovascular Disease: 30%"));
    assert!(!html.contains(EMPTY_HISTORY));
}

#[test]
fn analytics_embeds_chart_data() {
    let views = Views::new().unwrap();
    let history = vec![prediction(1, "A", 30, Gender::Male, "2024-03-02T00:00:00Z")];
    let html = views.analytics(&user(), &history).unwrap();
    assert!(html.contains("charts-data"));
    assert!(html.contains("\"Predictions Over Time\""));
}

#[test]
fn info_page_is_public_and_lists_every_disease() {
    let views = Views::new().unwrap();
    let html = views.info(None).unwrap();
    for name in [
        "Cardiovascular Disease",
        "Type 2 Diabetes",
        "Hypertension",
        "Metabolic Syndrome",
        "Stroke",
    ] {
        assert!(html.contains(name), "missing {name}");
    }
}
