//! Flush-on-marker line accumulator.
//!
//! Key-value preambles, numbered sections, plan items and dialogue turns are
//! all read the same way: scan forward, start a new block whenever a line
//! looks like a marker, and fold every other line into the block that is
//! currently open. [`scan`] implements that loop once; each structurer only
//! supplies a [`LineGrammar`] saying what a marker looks like and a flush
//! callback that turns a finished [`Block`] into output.
//!
//! The scanner has two states, no open block and one open block. A marker
//! always flushes the open block (if any) and opens a new one. A continuation
//! extends the open block; with nothing open it either lands in the preamble
//! or, if the grammar provides an orphan marker, opens a block of its own.

/// How a single line is treated by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<M> {
    /// Starts a new block.
    Marker(M),
    /// Extends the open block.
    Continuation,
    /// Dropped regardless of state.
    Skip,
}

/// A marker together with the continuation lines collected after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a, M> {
    pub marker: M,
    pub body: Vec<&'a str>,
}

impl<'a, M> Block<'a, M> {
    fn open(marker: M) -> Self {
        Self {
            marker,
            body: Vec::new(),
        }
    }
}

pub trait LineGrammar<'a> {
    type Marker;

    /// Classify `line`. `open` is the block currently being accumulated.
    fn classify(
        &self,
        line: &'a str,
        open: Option<&Block<'a, Self::Marker>>,
    ) -> LineKind<Self::Marker>;

    /// Marker for a block opened by a continuation that arrives while nothing
    /// is open. `None` sends such lines to the preamble.
    fn orphan_marker(&self) -> Option<Self::Marker> {
        None
    }
}

enum State<'a, M> {
    NoOpenRecord,
    OpenRecord(Block<'a, M>),
}

/// Run `grammar` over `lines`, handing each finished block to `flush` in
/// source order. Returns the preamble: continuation lines seen before the
/// first block opened.
pub fn scan<'a, G, I, F>(grammar: &G, lines: I, mut flush: F) -> Vec<&'a str>
where
    G: LineGrammar<'a>,
    I: IntoIterator<Item = &'a str>,
    F: FnMut(Block<'a, G::Marker>),
{
    let mut state = State::NoOpenRecord;
    let mut preamble = Vec::new();

    for line in lines {
        let open = match &state {
            State::OpenRecord(block) => Some(block),
            State::NoOpenRecord => None,
        };

        match grammar.classify(line, open) {
            LineKind::Marker(marker) => {
                let previous = std::mem::replace(&mut state, State::OpenRecord(Block::open(marker)));
                if let State::OpenRecord(block) = previous {
                    flush(block);
                }
            }
            LineKind::Continuation => match &mut state {
                State::OpenRecord(block) => block.body.push(line),
                State::NoOpenRecord => match grammar.orphan_marker() {
                    Some(marker) => {
                        let mut block = Block::open(marker);
                        block.body.push(line);
                        state = State::OpenRecord(block);
                    }
                    None => preamble.push(line),
                },
            },
            LineKind::Skip => {}
        }
    }

    if let State::OpenRecord(block) = state {
        flush(block);
    }

    preamble
}
