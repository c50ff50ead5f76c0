use casebook_parse::kv::parse_key_values;

fn pairs(lines: &[&str]) -> Vec<(String, String)> {
    parse_key_values(lines.iter().copied())
        .into_iter()
        .collect()
}

fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn heading_and_inline_forms() {
    assert_eq!(
        pairs(&["Name:", "Brooke Davis", "Age: 41"]),
        owned(&[("Name", "Brooke Davis"), ("Age", "41")])
    );
}

#[test]
fn heading_followed_by_heading_has_empty_value() {
    assert_eq!(
        pairs(&["Name:", "Age:", "41"]),
        owned(&[("Name", ""), ("Age", "41")])
    );
}

#[test]
fn trailing_heading_has_empty_value() {
    assert_eq!(pairs(&["Gender: Female", "Occupation:"]), owned(&[("Gender", "Female"), ("Occupation", "")]));
}

#[test]
fn heading_consumes_next_line_even_when_it_has_a_colon() {
    assert_eq!(
        pairs(&["Family Details:", "Lives with: partner", "Education: BA"]),
        owned(&[("Family Details", "Lives with: partner"), ("Education", "BA")])
    );
}

#[test]
fn inline_value_splits_on_first_colon() {
    assert_eq!(pairs(&["Note: arrives at 9:30"]), owned(&[("Note", "arrives at 9:30")]));
}

#[test]
fn lines_without_colon_are_ignored() {
    assert_eq!(
        pairs(&["CLIENT INFORMATION", "Name:", "Ann", "stray text", "Age: 30"]),
        owned(&[("Name", "Ann"), ("Age", "30")])
    );
}

#[test]
fn duplicate_key_last_value_wins() {
    assert_eq!(
        pairs(&["Name: First", "Age: 30", "Name: Second"]),
        owned(&[("Name", "Second"), ("Age", "30")])
    );
}

#[test]
fn keys_are_case_sensitive() {
    assert_eq!(pairs(&["name: a", "Name: b"]), owned(&[("name", "a"), ("Name", "b")]));
}
