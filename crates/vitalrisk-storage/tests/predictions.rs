use tempfile::TempDir;

use vitalrisk_core::models::account::NewAccount;
use vitalrisk_core::models::disease::Disease;
use vitalrisk_core::models::patient::{PatientRecord, SmokingStatus};
use vitalrisk_scoring::calculate_disease_risk;
use vitalrisk_scoring::fields::default_record;
use vitalrisk_storage::{Database, accounts, predictions};

fn setup() -> (TempDir, Database, i64) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("vitalrisk.db"));
    db.init().unwrap();
    let account = accounts::register(
        &db,
        &NewAccount {
            username: "clinician".to_string(),
            email: "clinician@example.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Dr. Clinician".to_string(),
            date_of_birth: None,
            gender: None,
        },
    )
    .unwrap();
    (dir, db, account.id)
}

fn patient(name: &str) -> PatientRecord {
    PatientRecord {
        patient_name: name.to_string(),
        ..default_record()
    }
}

#[test]
fn new_account_has_no_history() {
    let (_dir, db, account_id) = setup();
    assert!(predictions::list_by_account(&db, account_id).unwrap().is_empty());
}

#[test]
fn history_is_newest_first() {
    let (_dir, db, account_id) = setup();
    for name in ["first", "second", "third"] {
        let record = patient(name);
        let assessment = calculate_disease_risk(&record);
        predictions::append(&db, account_id, &record, &assessment).unwrap();
    }

    let history = predictions::list_by_account(&db, account_id).unwrap();
    let names: Vec<&str> = history.iter().map(|p| p.record.patient_name.as_str()).collect();
    assert_eq!(names, vec!["third", "second", "first"]);
    assert!(history.iter().all(|p| p.account_id == account_id));
}

#[test]
fn stored_row_round_trips_structure() {
    let (_dir, db, account_id) = setup();
    let record = PatientRecord {
        age: 58,
        smoking_status: SmokingStatus::Heavy,
        hba1c: None,
        family_history: Some("Stroke (grandmother)".to_string()),
        ..patient("Ann")
    };
    let assessment = calculate_disease_risk(&record);
    let saved = predictions::append(&db, account_id, &record, &assessment).unwrap();

    let history = predictions::list_by_account(&db, account_id).unwrap();
    assert_eq!(history.len(), 1);
    let stored = &history[0];
    assert_eq!(stored.id, saved.id);
    assert_eq!(stored.record, record);
    assert_eq!(stored.assessment, assessment);
    assert_eq!(stored.assessment.score(Disease::Stroke), Some(75));
    assert_eq!(stored.created_at, saved.created_at);
}

#[test]
fn summary_column_matches_rendered_format() {
    let (_dir, db, account_id) = setup();
    let record = patient("Bo");
    let assessment = calculate_disease_risk(&record);
    predictions::append(&db, account_id, &record, &assessment).unwrap();

    let conn = db.connect().unwrap();
    let summary: String = conn
        .query_row("SELECT predicted_diseases FROM predictions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(summary, assessment.predicted_diseases());
    assert!(summary.starts_with("Cardiovascular Disease: 10%, Type 2 Diabetes: "));
}

#[test]
fn accounts_only_see_their_own_rows() {
    let (_dir, db, account_id) = setup();
    let other = accounts::register(
        &db,
        &NewAccount {
            username: "other".to_string(),
            email: "other@example.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Other".to_string(),
            date_of_birth: None,
            gender: None,
        },
    )
    .unwrap();

    let record = patient("Mine");
    predictions::append(&db, account_id, &record, &calculate_disease_risk(&record)).unwrap();

    assert_eq!(predictions::list_by_account(&db, account_id).unwrap().len(), 1);
    assert!(predictions::list_by_account(&db, other.id).unwrap().is_empty());
}
