use casebook_parse::accumulate::{Block, LineGrammar, LineKind, scan};

/// `# title` opens a block, `//` lines are skipped.
struct Hashes {
    orphans: bool,
}

impl<'a> LineGrammar<'a> for Hashes {
    type Marker = &'a str;

    fn classify(&self, line: &'a str, _open: Option<&Block<'a, &'a str>>) -> LineKind<&'a str> {
        if let Some(title) = line.strip_prefix("# ") {
            LineKind::Marker(title)
        } else if line.starts_with("//") {
            LineKind::Skip
        } else {
            LineKind::Continuation
        }
    }

    fn orphan_marker(&self) -> Option<&'a str> {
        self.orphans.then_some("orphan")
    }
}

fn run(grammar: &Hashes, lines: &[&'static str]) -> (Vec<&'static str>, Vec<(&'static str, Vec<&'static str>)>) {
    let mut blocks = Vec::new();
    let preamble = scan(grammar, lines.iter().copied(), |block| {
        blocks.push((block.marker, block.body));
    });
    (preamble, blocks)
}

#[test]
fn flushes_each_block_in_order() {
    let (preamble, blocks) = run(&Hashes { orphans: false }, &["intro", "# a", "x", "// skip", "y", "# b"]);

    assert_eq!(preamble, ["intro"]);
    assert_eq!(blocks, [("a", vec!["x", "y"]), ("b", vec![])]);
}

#[test]
fn no_marker_means_everything_is_preamble() {
    let (preamble, blocks) = run(&Hashes { orphans: false }, &["one", "two"]);

    assert_eq!(preamble, ["one", "two"]);
    assert!(blocks.is_empty());
}

#[test]
fn orphan_marker_opens_a_block_for_leading_continuations() {
    let (preamble, blocks) = run(&Hashes { orphans: true }, &["one", "two", "# a", "x"]);

    assert!(preamble.is_empty());
    assert_eq!(blocks, [("orphan", vec!["one", "two"]), ("a", vec!["x"])]);
}

#[test]
fn empty_input_flushes_nothing() {
    let (preamble, blocks) = run(&Hashes { orphans: true }, &[]);
    assert!(preamble.is_empty());
    assert!(blocks.is_empty());
}
