use casebook_parse::normalize::{join_fragments, normalize_line, normalize_lines};

#[test]
fn collapses_spaces_and_tabs_and_drops_blank_lines() {
    let text = "  Name:\t\tBrooke   Davis  \n\n   \n\tAge: 41\r\n";
    assert_eq!(normalize_lines(text), ["Name: Brooke Davis", "Age: 41"]);
}

#[test]
fn empty_input_yields_no_lines() {
    assert!(normalize_lines("").is_empty());
    assert!(normalize_lines(" \n\t\n").is_empty());
}

#[test]
fn normalization_is_idempotent() {
    let once = normalize_lines("a  b\n\n  c\td \n e");
    let twice = normalize_lines(&once.join("\n"));
    assert_eq!(once, twice);

    for line in &once {
        assert_eq!(&normalize_line(line), line);
    }
}

#[test]
fn handles_carriage_return_only_line_breaks() {
    assert_eq!(normalize_lines("one\rtwo\r\rthree"), ["one", "two", "three"]);
}

#[test]
fn join_fragments_normalizes_the_result() {
    assert_eq!(join_fragments(["Practice  reframing", "and track", " outcomes"]), "Practice reframing and track outcomes");
    assert_eq!(join_fragments(std::iter::empty()), "");
}
