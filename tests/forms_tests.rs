use chrono::NaiveDate;
use hoteldesk::cli::commands::add;
use hoteldesk::db::SqlValue;
use hoteldesk::errors::AppError;
use hoteldesk::models::{Gender, Insertable, NewMaintenanceCompany, NewRoom};
use hoteldesk::utils::fields;
use rust_decimal::Decimal;
use std::str::FromStr;

mod common;
use common::{FakeExecutor, console, max_id};

fn placeholders(sql: &str) -> usize {
    (1..=20).filter(|n| sql.contains(&format!("${n}"))).count()
}

#[test]
fn test_customer_form_binds_typed_values() {
    let mut exec = FakeExecutor::new().respond(max_id(Some(9)));
    let mut con = console("Ada\nLovelace\n12 Main St\n951-555-0100\n1990-12-10\nfemale\n");

    add::add_customer(&mut exec, &mut con).unwrap();

    let stmt = &exec.executed[0];
    assert_eq!(placeholders(stmt.sql), stmt.params.len());
    assert_eq!(
        stmt.params,
        vec![
            SqlValue::Int(10),
            SqlValue::Text("Ada".into()),
            SqlValue::Text("Lovelace".into()),
            SqlValue::Text("12 Main St".into()),
            SqlValue::Numeric(Decimal::from_str("9515550100").unwrap()),
            SqlValue::Date(NaiveDate::from_ymd_opt(1990, 12, 10).unwrap()),
            SqlValue::Text("Female".into()),
        ]
    );

    let out = String::from_utf8(con.into_output()).unwrap();
    assert!(out.contains("CustomerID: 10"));
    assert!(out.contains("name: Ada Lovelace"));
    assert!(out.contains("DOB: 12/10/1990"));
}

#[test]
fn test_operator_text_never_reaches_sql() {
    let hostile = "x'); DROP TABLE customer; --";
    let mut exec = FakeExecutor::new();
    let mut con = console(&format!("5\n101\n{hostile}\n"));

    add::add_room(&mut exec, &mut con).unwrap();

    let stmt = &exec.executed[0];
    assert!(!stmt.sql.contains("DROP"));
    assert_eq!(stmt.params[2], SqlValue::Text(hostile.into()));
}

#[test]
fn test_company_certified_flag() {
    for (answer, expected) in [("Y", true), ("yes", true), ("n", false), ("N", false)] {
        let mut exec = FakeExecutor::new();
        let mut con = console(&format!("FixIt\n1 Road\n{answer}\n"));

        add::add_maintenance_company(&mut exec, &mut con).unwrap();

        assert_eq!(exec.executed[0].params[3], SqlValue::Bool(expected));
    }
}

#[test]
fn test_invalid_field_aborts_before_insert() {
    let mut exec = FakeExecutor::new();
    let mut con = console("1\n5\n101\n31/31/2024\n2\n100\n");

    let err = add::book_room(&mut exec, &mut con).unwrap_err();

    assert!(matches!(err, AppError::InvalidInput { field: "booking date", .. }));
    assert!(exec.executed.is_empty());
    let out = String::from_utf8(con.into_output()).unwrap();
    assert!(!out.contains("Booking ID:"));
}

#[test]
fn test_empty_field_is_rejected() {
    let mut exec = FakeExecutor::new();
    let mut con = console("7\n   \n101\n");

    let err = add::assign_house_cleaning(&mut exec, &mut con).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput { field: "hotel ID", .. }));
    assert!(exec.executed.is_empty());
}

#[test]
fn test_phone_longer_than_column_is_rejected() {
    let mut exec = FakeExecutor::new().respond(max_id(Some(9)));
    let mut con = console("Ada\nLovelace\n12 Main St\n+1 951-555-0100\n1990-12-10\nfemale\n");

    let err = add::add_customer(&mut exec, &mut con).unwrap_err();

    assert!(matches!(err, AppError::InvalidInput { field: "phone number", .. }));
    assert!(exec.executed.is_empty());
    let out = String::from_utf8(con.into_output()).unwrap();
    assert!(!out.contains("Your Information:"));
}

#[test]
fn test_unknown_gender_is_rejected() {
    let mut exec = FakeExecutor::new();
    let mut con = console("Ada\nLovelace\n12 Main St\n9515550100\n12/10/1990\nrobot\n");

    let err = add::add_customer(&mut exec, &mut con).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput { field: "gender", .. }));
}

#[test]
fn test_record_summaries() {
    let room = NewRoom {
        hotel_id: 5,
        room_no: 101,
        room_type: "Suite".into(),
    };
    assert_eq!(room.summary(), "Add Room:\nHotel ID: 5\nroomNo: 101\nRoom Type: Suite");

    let company = NewMaintenanceCompany {
        id: 3,
        name: "FixIt".into(),
        address: "1 Road".into(),
        certified: false,
    };
    assert!(company.summary().ends_with("Certified: FALSE"));
    assert_eq!(placeholders(company.insert_statement().sql), 4);
}

#[test]
fn test_gender_codes() {
    assert_eq!(Gender::from_input(" MALE "), Some(Gender::Male));
    assert_eq!(Gender::from_input("f"), Some(Gender::Female));
    assert_eq!(Gender::from_input("Other"), Some(Gender::Other));
    assert_eq!(Gender::from_input(""), None);
    assert_eq!(Gender::Other.to_db_str(), "Other");
}

#[test]
fn test_field_parsers() {
    assert_eq!(fields::integer("n", " 42 ").unwrap(), 42);
    assert!(fields::integer("n", "4x").is_err());
    assert!(fields::integer("n", "99999999999").is_err());

    assert_eq!(fields::positive("K", "3").unwrap(), 3);
    assert!(fields::positive("K", "0").is_err());
    assert!(fields::positive("K", "-2").is_err());

    assert_eq!(
        fields::decimal("price", "120.50").unwrap(),
        Decimal::from_str("120.50").unwrap()
    );
    assert!(fields::decimal("price", "12,5").is_err());
    assert!(fields::decimal("price", "-1").is_err());

    assert_eq!(
        fields::phone("phone", "(951) 555-0100").unwrap(),
        Decimal::from_str("9515550100").unwrap()
    );
    assert!(fields::phone("phone", "call me").is_err());
    assert!(fields::phone("phone", "+1 951-555-0100").is_err());

    let expected = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    assert_eq!(fields::date("d", "03/04/2024").unwrap(), expected);
    assert_eq!(fields::date("d", "2024-03-04").unwrap(), expected);
    assert!(fields::date("d", "4 March").is_err());

    assert!(fields::yes_no("c", "maybe").is_err());
    assert!(fields::required("x", "").is_err());
}
