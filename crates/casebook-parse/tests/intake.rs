use casebook_core::models::intake::{Age, IntakeRecord};
use casebook_parse::structure_intake;

#[test]
fn structures_preamble_and_sections() {
    let text = "Name:\nBrooke Davis\nAge:\n41\n\
                2. Presenting Problem\nFeels anxious at work.\n\
                3. Reason\nWants coping tools.";

    let intake = structure_intake(text);

    assert_eq!(intake.client_info.name, "Brooke Davis");
    assert_eq!(intake.client_info.age, Age::Years(41));
    assert_eq!(intake.presenting_problem, ["Feels anxious at work."]);
    assert_eq!(intake.reason_for_seeking_counseling, "Wants coping tools.");
    assert!(intake.past_history.is_empty());
    assert_eq!(intake.social_support_system, "");
}

#[test]
fn routes_all_five_sections() {
    let text = "\
Name: Luis Ortega
Age: 35
Gender: Male
Occupation: Accountant
Education: Bachelor's degree
Marital Status: Married
Family Details: Two children
1. Client Information
Luis is a 35-year-old accountant.
2. Presenting Problem
Worries constantly about deadlines.
Has trouble concentrating.
3. Reason for Seeking Counseling
His wife suggested it
after a panic episode.
4. Past History (including medical history)
No prior counseling.
5. Academic/occupational functioning level
Performance has slipped.
Missed two deadlines.
6. Social Support System
Supportive wife and
one close friend.
";

    let intake = structure_intake(text);
    let info = &intake.client_info;

    assert_eq!(info.name, "Luis Ortega");
    assert_eq!(info.age, Age::Years(35));
    assert_eq!(info.gender, "Male");
    assert_eq!(info.occupation, "Accountant");
    assert_eq!(info.education, "Bachelor's degree");
    assert_eq!(info.marital_status, "Married");
    assert_eq!(info.family_details, "Two children");

    assert_eq!(
        intake.presenting_problem,
        ["Worries constantly about deadlines.", "Has trouble concentrating."]
    );
    assert_eq!(
        intake.reason_for_seeking_counseling,
        "His wife suggested it after a panic episode."
    );
    assert_eq!(intake.past_history, ["No prior counseling."]);
    assert_eq!(
        intake.academic_occupational_functioning_level,
        ["Performance has slipped.", "Missed two deadlines."]
    );
    assert_eq!(intake.social_support_system, "Supportive wife and one close friend.");
}

#[test]
fn lowercase_keys_are_accepted() {
    let intake = structure_intake("name: Ann\nage: 29\nmarital_status: single");

    assert_eq!(intake.client_info.name, "Ann");
    assert_eq!(intake.client_info.age, Age::Years(29));
    assert_eq!(intake.client_info.marital_status, "single");
}

#[test]
fn capitalized_key_wins_over_lowercase() {
    let intake = structure_intake("name: lower\nName: Upper");
    assert_eq!(intake.client_info.name, "Upper");
}

#[test]
fn non_numeric_age_is_kept_as_text() {
    let intake = structure_intake("Age: mid-forties");
    assert_eq!(intake.client_info.age, Age::Text("mid-forties".to_string()));
}

#[test]
fn missing_attributes_default_to_empty() {
    let intake = structure_intake("2. Presenting Problem\nLow mood.");

    assert_eq!(intake.client_info.name, "");
    assert_eq!(intake.client_info.age, Age::Text(String::new()));
    assert_eq!(intake.presenting_problem, ["Low mood."]);
}

#[test]
fn repeated_section_number_last_wins() {
    let intake = structure_intake("2. Presenting Problem\nfirst\n2. Presenting Problem\nsecond");
    assert_eq!(intake.presenting_problem, ["second"]);
}

#[test]
fn oversized_section_number_is_dropped() {
    let intake = structure_intake("2. Presenting Problem\nLow mood.\n99999999999. Appendix\nnot a problem");
    assert_eq!(intake.presenting_problem, ["Low mood."]);
}

#[test]
fn empty_text_gives_default_record() {
    assert_eq!(structure_intake(""), IntakeRecord::default());
}

#[test]
fn output_is_deterministic() {
    let text = "Name: A\n2. P\nx\n3. R\ny";
    let a = serde_json::to_string(&structure_intake(text)).unwrap();
    let b = serde_json::to_string(&structure_intake(text)).unwrap();
    assert_eq!(a, b);
}
