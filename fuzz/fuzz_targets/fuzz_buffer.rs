#![no_main]

use std::convert::Infallible;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scalarbuf::{Lookahead, ScalarBuffer};

#[derive(Arbitrary, Debug)]
enum Op {
    Next,
    Peek,
    PushBack(char),
    PushBackAll(Vec<char>),
    PushBackStr(String),
    Append(char),
    AppendAll(Vec<char>),
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
    source: String,
    reads: Vec<u8>,
}

/// Runs `ops` against the buffer and a `Vec<char>` kept in produce order and
/// panics on the first disagreement.
fn check_buffer(capacity: usize, ops: &[Op]) {
    let mut buffer = ScalarBuffer::with_capacity(capacity);
    let mut model: Vec<char> = Vec::new();

    for op in ops {
        match op {
            Op::Next => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(buffer.next(), expected, "next after {op:?}");
            }
            Op::Peek => assert_eq!(buffer.peek(), model.first().copied()),
            Op::PushBack(c) => {
                buffer.push_back(*c);
                model.insert(0, *c);
            }
            Op::PushBackAll(cs) => {
                buffer.push_back_all(cs.iter().copied());
                model.splice(0..0, cs.iter().copied());
            }
            Op::PushBackStr(s) => {
                buffer.push_back_str(s);
                model.splice(0..0, s.chars());
            }
            Op::Append(c) => {
                buffer.append(*c);
                model.push(*c);
            }
            Op::AppendAll(cs) => {
                buffer.append_all(cs.iter().copied());
                model.extend(cs);
            }
            Op::Clear => {
                buffer.clear();
                model.clear();
            }
        }
        assert_eq!(buffer.len(), model.len());
    }

    assert_eq!(buffer.collect::<Vec<_>>(), model);
}

/// Reads ahead by the requested amounts, unreading each chunk, and checks
/// that the text finally produced is the source text.
fn check_lookahead(source: &str, reads: &[u8]) {
    let mut reader = Lookahead::new(source.chars().map(Ok::<char, Infallible>));
    for &n in reads {
        let taken: Vec<char> = reader
            .by_ref()
            .take(usize::from(n))
            .map(|c| c.unwrap_or_else(|never| match never {}))
            .collect();
        reader.unread_all(taken);
    }

    let produced: String = reader
        .map(|c| c.unwrap_or_else(|never| match never {}))
        .collect();
    assert_eq!(produced, source);
}

fuzz_target!(|input: Input| {
    check_buffer(usize::from(input.capacity), &input.ops);
    check_lookahead(&input.source, &input.reads);
});
