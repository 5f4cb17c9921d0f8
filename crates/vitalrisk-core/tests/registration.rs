use vitalrisk_core::models::patient::Gender;
use vitalrisk_core::validation::{RegistrationForm, RegistrationIssue, is_valid_email};

fn form() -> RegistrationForm {
    RegistrationForm {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
        full_name: "Alice Example".to_string(),
        date_of_birth: Some("1990-01-01".to_string()),
        gender: Some("Female".to_string()),
    }
}

#[test]
fn valid_form_becomes_new_account() {
    let account = form().validate().unwrap();
    assert_eq!(account.username, "alice");
    assert_eq!(account.gender, Some(Gender::Female));
    assert_eq!(account.date_of_birth, Some(jiff::civil::date(1990, 1, 1)));
}

#[test]
fn missing_fields_rejected_first() {
    let mut f = form();
    f.full_name = "  ".to_string();
    f.email = "broken".to_string();
    assert_eq!(f.validate().unwrap_err(), RegistrationIssue::MissingFields);
}

#[test]
fn password_rules() {
    let mut f = form();
    f.confirm_password = "secret2".to_string();
    assert_eq!(f.validate().unwrap_err(), RegistrationIssue::PasswordMismatch);

    let mut f = form();
    f.password = "abc".to_string();
    f.confirm_password = "abc".to_string();
    assert_eq!(f.validate().unwrap_err(), RegistrationIssue::PasswordTooShort);
}

#[test]
fn malformed_email_rejected() {
    let mut f = form();
    f.email = "alice@example".to_string();
    let issue = f.validate().unwrap_err();
    assert_eq!(issue, RegistrationIssue::InvalidEmail);
    assert_eq!(issue.message(), "Please enter a valid email address!");
}

#[test]
fn email_pattern() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("ab.co"));
    assert!(!is_valid_email("a@bco"));
}

#[test]
fn optional_demographics_may_be_blank() {
    let mut f = form();
    f.date_of_birth = Some(String::new());
    f.gender = None;
    let account = f.validate().unwrap();
    assert_eq!(account.date_of_birth, None);
    assert_eq!(account.gender, None);
}
