use std::collections::BTreeMap;

use serde::Serialize;

use vitalrisk_core::models::disease::RiskAssessment;
use vitalrisk_core::models::patient::Gender;
use vitalrisk_core::models::prediction::Prediction;
use vitalrisk_scoring::level::RiskLevel;

use crate::stats::utc_date;

pub const AGE_HISTOGRAM_BINS: usize = 10;

/// Per-disease risk bars, colored by tier.
#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub categories: Vec<String>,
    pub values: Vec<u8>,
    pub colors: Vec<&'static str>,
    pub labels: Vec<String>,
    pub y_range: [u8; 2],
}

pub fn risk_bar_chart(assessment: &RiskAssessment) -> BarChart {
    let mut chart = BarChart {
        title: "Disease Risk Assessment".to_string(),
        x_title: "Diseases".to_string(),
        y_title: "Risk Percentage (%)".to_string(),
        categories: Vec::new(),
        values: Vec::new(),
        colors: Vec::new(),
        labels: Vec::new(),
        y_range: [0, 100],
    };
    for (disease, &score) in &assessment.risks {
        chart.categories.push(disease.to_string());
        chart.values.push(score);
        chart.colors.push(RiskLevel::from_score(score).color());
        chart.labels.push(format!("{score}%"));
    }
    chart
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub date: jiff::civil::Date,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineChart {
    pub title: String,
    pub points: Vec<LinePoint>,
}

/// Number of predictions per UTC day, oldest day first.
pub fn predictions_over_time(predictions: &[Prediction]) -> LineChart {
    let mut per_day: BTreeMap<jiff::civil::Date, usize> = BTreeMap::new();
    for p in predictions {
        *per_day.entry(utc_date(p.created_at)).or_default() += 1;
    }
    LineChart {
        title: "Predictions Over Time".to_string(),
        points: per_day
            .into_iter()
            .map(|(date, count)| LinePoint { date, count })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub title: String,
    pub bins: Vec<HistogramBin>,
}

/// Equal-width bins spanning the observed ages. The top edge is inclusive.
pub fn age_histogram(predictions: &[Prediction], bin_count: usize) -> Histogram {
    let title = "Patient Age Distribution".to_string();
    let ages: Vec<f64> = predictions.iter().map(|p| f64::from(p.record.age)).collect();
    let (Some(min), Some(max)) = (
        ages.iter().copied().reduce(f64::min),
        ages.iter().copied().reduce(f64::max),
    ) else {
        return Histogram {
            title,
            bins: Vec::new(),
        };
    };

    if bin_count == 0 || min == max {
        return Histogram {
            title,
            bins: vec![HistogramBin {
                start: min,
                end: min + 1.0,
                count: ages.len(),
            }],
        };
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();
    for age in ages {
        let index = (((age - min) / width) as usize).min(bin_count - 1);
        bins[index].count += 1;
    }
    Histogram { title, bins }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// Patient gender counts, largest slice first.
pub fn gender_distribution(predictions: &[Prediction]) -> PieChart {
    let mut slices: Vec<PieSlice> = Gender::ALL
        .iter()
        .map(|g| PieSlice {
            label: g.to_string(),
            value: predictions.iter().filter(|p| p.record.gender == *g).count(),
        })
        .filter(|s| s.value > 0)
        .collect();
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    PieChart {
        title: "Gender Distribution".to_string(),
        slices,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub age: u32,
    pub bmi: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: Vec<ScatterSeries>,
}

/// BMI against age, one series per gender present in the history.
pub fn bmi_vs_age(predictions: &[Prediction]) -> ScatterChart {
    let series = Gender::ALL
        .iter()
        .map(|g| ScatterSeries {
            name: g.to_string(),
            points: predictions
                .iter()
                .filter(|p| p.record.gender == *g)
                .map(|p| ScatterPoint {
                    age: p.record.age,
                    bmi: p.record.bmi,
                })
                .collect(),
        })
        .filter(|s| !s.points.is_empty())
        .collect();
    ScatterChart {
        title: "BMI vs Age by Gender".to_string(),
        x_title: "age".to_string(),
        y_title: "bmi".to_string(),
        series,
    }
}

/// The four analytics charts, serialized together for the page script.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsCharts {
    pub trend: LineChart,
    pub ages: Histogram,
    pub genders: PieChart,
    pub bmi: ScatterChart,
}

impl AnalyticsCharts {
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        Self {
            trend: predictions_over_time(predictions),
            ages: age_histogram(predictions, AGE_HISTOGRAM_BINS),
            genders: gender_distribution(predictions),
            bmi: bmi_vs_age(predictions),
        }
    }
}
