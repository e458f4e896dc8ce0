//! Public-API contract: drive the library the way an embedding caller would.

use cwab::domain::{Outcome, ScheduleHeader, SubmissionDocument};
use cwab::{GenerateOptions, generate};
use tempfile::TempDir;

#[test]
fn public_api_generate_lifecycle_contract() {
    let temp = TempDir::new().unwrap();
    let destination = temp.path().join("outcomes.xml");

    let summary = generate(GenerateOptions {
        config: None,
        output: Some(destination.clone()),
        count: Some(3),
    })
    .expect("generate failed");

    assert_eq!(summary.outcomes, 3);
    assert_eq!(summary.destination, destination);

    let output = std::fs::read_to_string(&destination).unwrap();
    assert_eq!(output.lines().filter(|l| l.starts_with("<outcome ")).count(), 3);
    assert_eq!(output.lines().next().unwrap(), r#"<?xml version="1.0"?>"#);
    assert_eq!(output.lines().last().unwrap(), "</submission>");
}

#[test]
fn builder_reproduces_the_documented_billing_scenario() {
    let mut document = SubmissionDocument::new();
    document
        .append_header(&ScheduleHeader::new("0W160B", "AUG-2018", "CRIME LOWER", "CRM/0W160B/19"))
        .unwrap();
    document
        .append_outcome(
            &Outcome::new("INVC")
                .with_item("OUTCOME_CODE", "CN04")
                .with_item("PROFIT_COST", "12.34"),
        )
        .unwrap();
    document.append_footer().unwrap();

    let lines = document.into_lines().unwrap();
    assert_eq!(lines[2], r#"<office account="0W160B">"#);
    assert_eq!(
        lines[3],
        r#"<schedule submissionPeriod="AUG-2018" areaOfLaw="CRIME LOWER" scheduleNum="CRM/0W160B/19">"#
    );
    assert_eq!(lines[4], r#"<outcome matterType="INVC">"#);
    assert_eq!(lines[5], r#"<outcomeItem name="OUTCOME_CODE">CN04</outcomeItem>"#);
    assert_eq!(lines[6], r#"<outcomeItem name="PROFIT_COST">12.34</outcomeItem>"#);
}

#[test]
fn surname_token_is_exposed_at_the_crate_root() {
    let token = cwab::surname_token();
    assert!(token.chars().all(|c| c.is_ascii_uppercase()));
}
