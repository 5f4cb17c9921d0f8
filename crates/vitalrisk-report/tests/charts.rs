mod common;

use vitalrisk_core::models::patient::Gender;
use vitalrisk_report::charts::{
    AnalyticsCharts, age_histogram, bmi_vs_age, gender_distribution, predictions_over_time,
    risk_bar_chart,
};
use vitalrisk_report::stats::HistoryStats;

use common::prediction;

#[test]
fn bar_chart_colors_follow_tiers() {
    let p = prediction(1, "A", 70, Gender::Male, "2024-03-01T10:00:00Z");
    let chart = risk_bar_chart(&p.assessment);
    assert_eq!(chart.categories.len(), 5);
    assert_eq!(chart.categories[0], "Cardiovascular Disease");
    for (value, color) in chart.values.iter().zip(&chart.colors) {
        let expected = if *value >= 70 {
            "red"
        } else if *value >= 40 {
            "orange"
        } else {
            "green"
        };
        assert_eq!(*color, expected);
    }
    assert_eq!(chart.labels[0], format!("{}%", chart.values[0]));
    assert_eq!(chart.y_range, [0, 100]);
}

#[test]
fn trend_groups_by_day_oldest_first() {
    let history = vec![
        prediction(3, "C", 40, Gender::Female, "2024-03-02T09:00:00Z"),
        prediction(2, "B", 40, Gender::Female, "2024-03-01T18:00:00Z"),
        prediction(1, "A", 40, Gender::Female, "2024-03-01T08:00:00Z"),
    ];
    let chart = predictions_over_time(&history);
    let points: Vec<(String, usize)> =
        chart.points.iter().map(|p| (p.date.to_string(), p.count)).collect();
    assert_eq!(
        points,
        vec![("2024-03-01".to_string(), 2), ("2024-03-02".to_string(), 1)]
    );
}

#[test]
fn histogram_covers_every_age() {
    let history: Vec<_> = [20, 25, 40, 60, 80]
        .iter()
        .enumerate()
        .map(|(i, &age)| prediction(i as i64, "P", age, Gender::Other, "2024-01-01T00:00:00Z"))
        .collect();
    let hist = age_histogram(&history, 10);
    assert_eq!(hist.bins.len(), 10);
    assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 5);
    assert_eq!(hist.bins[0].start, 20.0);
    assert_eq!(hist.bins[9].end, 80.0);
    assert_eq!(hist.bins[9].count, 1);
}

#[test]
fn histogram_of_identical_ages_is_one_bin() {
    let history = vec![
        prediction(1, "A", 33, Gender::Male, "2024-01-01T00:00:00Z"),
        prediction(2, "B", 33, Gender::Male, "2024-01-01T00:00:00Z"),
    ];
    let hist = age_histogram(&history, 10);
    assert_eq!(hist.bins.len(), 1);
    assert_eq!(hist.bins[0].count, 2);
    assert!(age_histogram(&[], 10).bins.is_empty());
}

#[test]
fn gender_pie_largest_first() {
    let history = vec![
        prediction(1, "A", 30, Gender::Male, "2024-01-01T00:00:00Z"),
        prediction(2, "B", 30, Gender::Female, "2024-01-01T00:00:00Z"),
        prediction(3, "C", 30, Gender::Female, "2024-01-01T00:00:00Z"),
    ];
    let pie = gender_distribution(&history);
    let slices: Vec<(&str, usize)> = pie.slices.iter().map(|s| (s.label.as_str(), s.value)).collect();
    assert_eq!(slices, vec![("Female", 2), ("Male", 1)]);
}

#[test]
fn scatter_series_per_gender() {
    let history = vec![
        prediction(1, "A", 30, Gender::Male, "2024-01-01T00:00:00Z"),
        prediction(2, "B", 50, Gender::Male, "2024-01-01T00:00:00Z"),
        prediction(3, "C", 40, Gender::Other, "2024-01-01T00:00:00Z"),
    ];
    let chart = bmi_vs_age(&history);
    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Male", "Other"]);
    assert_eq!(chart.series[0].points.len(), 2);
    assert_eq!(chart.series[0].points[1].age, 50);
}

#[test]
fn stats_summarize_history() {
    assert!(HistoryStats::from_predictions(&[]).is_none());

    let history = vec![
        prediction(3, "Ann", 50, Gender::Female, "2024-03-05T12:00:00Z"),
        prediction(2, "Bob", 30, Gender::Male, "2024-03-04T12:00:00Z"),
        prediction(1, "Ann", 40, Gender::Female, "2024-03-03T12:00:00Z"),
    ];
    let stats = HistoryStats::from_predictions(&history).unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.average_age, 40.0);
    assert_eq!(stats.unique_patients, 2);
    assert_eq!(stats.latest_date, jiff::civil::date(2024, 3, 5));
}

#[test]
fn analytics_bundle_serializes() {
    let history = vec![prediction(1, "A", 30, Gender::Male, "2024-01-01T00:00:00Z")];
    let value = serde_json::to_value(AnalyticsCharts::from_predictions(&history)).unwrap();
    assert_eq!(value["trend"]["points"][0]["count"], 1);
    assert_eq!(value["genders"]["slices"][0]["label"], "Male");
}
