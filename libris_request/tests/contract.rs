use libris_request::contract::author::AuthorFormContract;
use libris_request::contract::genre::GenreFormContract;
use libris_request::error::FieldViolation;
use libris_request::validate::Validate;
use time::macros::date;

#[test]
fn bind_and_validate_author_form() {
    let form: AuthorFormContract =
        serde_json::from_str(r#"{"name": "Stanisław Lem", "birthDate": "1921-09-12"}"#)
            .unwrap();
    assert_eq!(form.birth_date, Some(date!(1921 - 09 - 12)));
    assert!(form.validate().is_ok());
}

#[test]
fn missing_birth_date_reported_once() {
    let form: AuthorFormContract = serde_json::from_str(r#"{"name": ""}"#).unwrap();
    let err = form.validate().unwrap_err();
    assert_eq!(err.to_string(), "invalid `AuthorForm` request");
    assert_eq!(
        err.field_violations(),
        vec![FieldViolation {
            field: "birthDate".into(),
            description: "no value provided for required field".into(),
        }]
    );
}

#[test]
fn oversized_name_reported_once() {
    let form = AuthorFormContract {
        name: "a".repeat(201),
        birth_date: Some(date!(2000 - 01 - 01)),
    };
    let err = form.validate().unwrap_err();
    assert_eq!(
        err.field_violations(),
        vec![FieldViolation {
            field: "name".into(),
            description: "value of length 201 exceeds the maximum length of 200".into(),
        }]
    );
}

#[test]
fn genre_form_round_trip() {
    let form: GenreFormContract = serde_json::from_str(r#"{"name": "Poetry"}"#).unwrap();
    assert!(form.validate().is_ok());
    assert_eq!(
        serde_json::to_string(&form).unwrap(),
        r#"{"name":"Poetry"}"#
    );
}
