/// Parse, validate and summarize tests for the employee import pipeline
///
/// Tests cover:
/// - Row count and order preservation
/// - Rule priority and messages
/// - Line numbering of reported errors
/// - Header-only and blank input
/// - Sample template round trip
mod utils;

use tekmeals_admin_lib::modules::employee_import::{
    summarize, EmployeeRowParser, ImportNotice, ImportService, ImportState, SampleTemplate,
};
use tekmeals_admin_lib::shared::CsvMode;
use tokio_test::{assert_err, assert_ok};
use utils::{factories::EmployeeCsvFactory, helpers};

fn parse(content: &str) -> Vec<tekmeals_admin_lib::modules::employee_import::ParsedRow> {
    EmployeeRowParser::new(CsvMode::Simple)
        .parse(content)
        .unwrap()
        .expect("file should have data rows")
}

#[test]
fn every_data_line_becomes_a_row_in_order() {
    let csv = EmployeeCsvFactory::new()
        .valid("Asha Rao")
        .short_name()
        .blank_line()
        .valid("Ravi Kumar")
        .bad_email("Meera")
        .build();

    let rows = parse(&csv);

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].name, "Asha Rao");
    assert_eq!(rows[1].name, "A");
    assert_eq!(rows[2].name, "Ravi Kumar");
    assert_eq!(rows[3].name, "Meera");
}

#[test]
fn invalid_rows_carry_exactly_one_message() {
    let csv = EmployeeCsvFactory::new()
        .valid("Asha Rao")
        .short_name()
        .bad_email("Meera")
        .no_city("Kiran")
        .no_meal_types("Dev")
        .build();

    let rows = parse(&csv);
    let messages: Vec<Option<&str>> = rows.iter().map(|r| r.error.as_deref()).collect();

    assert_eq!(
        messages,
        vec![
            None,
            Some("Name is required (min 2 chars)"),
            Some("Invalid email"),
            Some("City is required"),
            Some("Meal types required"),
        ]
    );
    assert!(rows.iter().all(|r| r.valid == r.error.is_none()));
}

#[test]
fn blank_status_defaults_to_active() {
    let rows = parse(&EmployeeCsvFactory::new().no_city("Kiran").build());
    assert_eq!(rows[0].status, "Active");

    let rows = parse(
        &EmployeeCsvFactory::new()
            .raw("Asha,asha@x.com,,Pune,,Lunch,Inactive")
            .build(),
    );
    assert_eq!(rows[0].status, "Inactive");
}

#[test]
fn short_rows_are_padded_and_extra_columns_ignored() {
    let rows = parse(
        &EmployeeCsvFactory::new()
            .raw("Asha,asha@x.com")
            .raw("Ravi,ravi@x.com,1,Goa,Ops,Dinner,Active,extra,columns")
            .build(),
    );

    assert_eq!(rows[0].city, "");
    assert_eq!(rows[0].error.as_deref(), Some("City is required"));
    assert!(rows[1].valid);
    assert_eq!(rows[1].status, "Active");
}

#[test]
fn errors_report_file_line_numbers() {
    let csv = EmployeeCsvFactory::new()
        .valid("Asha Rao")
        .short_name()
        .valid("Ravi Kumar")
        .bad_email("Meera")
        .build();

    let result = summarize(&parse(&csv));

    assert_eq!(result.success, 2);
    assert_eq!(result.failed, 2);
    assert_eq!(result.total(), 4);
    let lines: Vec<usize> = result.errors.iter().map(|e| e.row).collect();
    assert_eq!(lines, vec![3, 5]);
}

#[test]
fn header_only_file_has_no_rows() {
    let parser = EmployeeRowParser::new(CsvMode::Simple);

    assert!(parser.parse(&EmployeeCsvFactory::new().build()).unwrap().is_none());
    assert!(parser.parse("").unwrap().is_none());
    assert!(parser.parse("\n \n\t\n").unwrap().is_none());
}

#[test]
fn strict_mode_keeps_quoted_meal_types_together() {
    let csv = EmployeeCsvFactory::new()
        .raw("Asha,asha@x.com,,Pune,Ops,\"Lunch, Dinner\",Active")
        .build();

    let simple = parse(&csv);
    assert_eq!(simple[0].meal_types, "\"Lunch");
    assert_eq!(simple[0].status, "Dinner\"");

    let strict = EmployeeRowParser::new(CsvMode::Strict)
        .parse(&csv)
        .unwrap()
        .unwrap();
    assert_eq!(strict[0].meal_types, "Lunch, Dinner");
    assert_eq!(strict[0].meal_type_tags(), vec!["Lunch", "Dinner"]);
    assert_eq!(strict[0].status, "Active");
}

#[test]
fn sample_template_parses_cleanly() {
    let text = SampleTemplate::render().unwrap();

    assert_eq!(SampleTemplate::headers().len(), 7);
    let header = text.lines().next().unwrap();
    assert_eq!(
        header,
        "Employee Name,Email,Phone No,City,Department,Meal Types,Status"
    );

    let rows = parse(&text);
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r.valid));
}

#[tokio::test]
async fn header_only_file_keeps_session_idle() {
    let service = ImportService::simulated(helpers::fast_config());

    let notice = assert_ok!(
        service
            .select_file("staff.csv", &EmployeeCsvFactory::new().build())
            .await
    );

    assert_eq!(
        notice,
        ImportNotice::NoDataRows {
            file_name: "staff.csv".to_string()
        }
    );
    assert_eq!(service.state().await, ImportState::Idle);
}

#[tokio::test]
async fn preview_counts_match_parsed_rows() {
    let service = ImportService::simulated(helpers::fast_config());
    let csv = EmployeeCsvFactory::new()
        .valid("Asha Rao")
        .short_name()
        .valid("Ravi Kumar")
        .build();

    let notice = assert_ok!(service.select_file("staff.csv", &csv).await);

    assert_eq!(
        notice,
        ImportNotice::RowsParsed {
            total: 3,
            valid: 2,
            invalid: 1
        }
    );
    let snapshot = service.snapshot().await;
    assert_eq!(snapshot.state, ImportState::Preview);
    assert_eq!(snapshot.file_name.as_deref(), Some("staff.csv"));
    assert_eq!(snapshot.rows.len(), 3);
}

#[tokio::test]
async fn preview_with_only_invalid_rows_cannot_commit() {
    let service = ImportService::simulated(helpers::fast_config());
    let csv = EmployeeCsvFactory::new().short_name().bad_email("Meera").build();

    assert_ok!(service.select_file("staff.csv", &csv).await);
    assert_err!(service.commit(None).await);
    assert_eq!(service.state().await, ImportState::Preview);
}

#[tokio::test]
async fn wrong_extension_is_rejected_before_parsing() {
    let service = ImportService::simulated(helpers::fast_config());
    let csv = EmployeeCsvFactory::new().valid("Asha Rao").build();

    for name in ["staff.xlsx", "staff.txt", "staff"] {
        let notice = assert_ok!(service.select_file(name, &csv).await);
        assert!(
            matches!(&notice, ImportNotice::FileRejected { file_name, .. } if file_name == name),
            "{} should be rejected",
            name
        );
        assert_eq!(service.state().await, ImportState::Idle);
    }

    let notice = assert_ok!(service.select_file("STAFF.CSV", &csv).await);
    assert!(matches!(notice, ImportNotice::RowsParsed { total: 1, .. }));
}

#[tokio::test]
async fn back_discards_staged_rows() {
    let service = ImportService::simulated(helpers::fast_config());
    let csv = EmployeeCsvFactory::new().valid("Asha Rao").build();

    assert_ok!(service.select_file("staff.csv", &csv).await);
    assert_ok!(service.back().await);

    let snapshot = service.snapshot().await;
    assert_eq!(snapshot.state, ImportState::Idle);
    assert!(snapshot.rows.is_empty());
    assert!(snapshot.file_name.is_none());
}

#[test]
fn strict_mode_numbers_rows_like_simple_mode() {
    let csv = format!(
        "   \n{}",
        EmployeeCsvFactory::new()
            .raw(",,,,,,")
            .valid("Asha Rao")
            .short_name()
            .build()
    );

    let simple = parse(&csv);
    let strict = EmployeeRowParser::new(CsvMode::Strict)
        .parse(&csv)
        .unwrap()
        .unwrap();

    assert_eq!(strict.len(), 3);
    assert_eq!(strict, simple);
    assert_eq!(strict[1].name, "Asha Rao");

    let lines: Vec<usize> = summarize(&strict).errors.iter().map(|e| e.row).collect();
    assert_eq!(lines, vec![2, 4]);
}
