use alloc::vec::Vec;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::Op;
use crate::ScalarBuffer;

/// Reference behavior: a `Vec` kept in produce order, front at index 0.
#[derive(Debug, Default)]
struct Model(Vec<char>);

impl Model {
    fn apply(&mut self, op: &Op) -> Option<char> {
        match op {
            Op::Next => (!self.0.is_empty()).then(|| self.0.remove(0)),
            Op::Peek => self.0.first().copied(),
            Op::PushBack(c) => {
                self.0.insert(0, *c);
                None
            }
            Op::PushBackAll(cs) => {
                self.0.splice(0..0, cs.iter().copied());
                None
            }
            Op::Append(c) => {
                self.0.push(*c);
                None
            }
            Op::AppendAll(cs) => {
                self.0.extend(cs);
                None
            }
            Op::Clear => {
                self.0.clear();
                None
            }
        }
    }
}

fn apply(buffer: &mut ScalarBuffer, op: &Op) -> Option<char> {
    match op {
        Op::Next => buffer.next(),
        Op::Peek => buffer.peek(),
        Op::PushBack(c) => {
            buffer.push_back(*c);
            None
        }
        Op::PushBackAll(cs) => {
            buffer.push_back_all(cs.iter().copied());
            None
        }
        Op::Append(c) => {
            buffer.append(*c);
            None
        }
        Op::AppendAll(cs) => {
            buffer.append_all(cs.iter().copied());
            None
        }
        Op::Clear => {
            buffer.clear();
            None
        }
    }
}

/// Property: any interleaving of operations observes the same scalars as the
/// naive front-insertion model, and leaves the same content behind.
#[test]
fn operations_match_vec_model_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacity: u8, ops: Vec<Op>) -> bool {
        let mut buffer = ScalarBuffer::with_capacity(usize::from(capacity));
        let mut model = Model::default();

        for op in &ops {
            if apply(&mut buffer, op) != model.apply(op) || buffer.len() != model.0.len() {
                return false;
            }
        }

        buffer.iter().eq(model.0.iter().copied()) && buffer.collect::<Vec<_>>() == model.0
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(u8, Vec<Op>) -> bool);
}

/// Property: appended scalars are produced in append order, then `None`.
#[quickcheck]
fn append_preserves_order(scalars: Vec<char>) -> bool {
    let mut buffer = ScalarBuffer::new();
    for &c in &scalars {
        buffer.append(c);
    }
    let produced: Vec<char> = buffer.by_ref().collect();
    produced == scalars && buffer.next().is_none()
}

/// Property: draining a prefix and pushing it back as one batch restores the
/// original produce order.
#[quickcheck]
fn push_back_of_consumed_prefix_is_identity(scalars: Vec<char>, split: usize) -> bool {
    let mut buffer: ScalarBuffer = scalars.iter().copied().collect();
    let taken = if scalars.is_empty() {
        0
    } else {
        split % (scalars.len() + 1)
    };

    let prefix: Vec<char> = buffer.by_ref().take(taken).collect();
    buffer.push_back_all(prefix);

    buffer.collect::<Vec<_>>() == scalars
}

/// Property: pushing back one scalar at a time in reverse is the same as
/// pushing the batch back in order.
#[quickcheck]
fn single_push_backs_in_reverse_match_batch(existing: Vec<char>, batch: Vec<char>) -> bool {
    let mut singles: ScalarBuffer = existing.iter().copied().collect();
    for &c in batch.iter().rev() {
        singles.push_back(c);
    }

    let mut batched: ScalarBuffer = existing.iter().copied().collect();
    batched.push_back_all(batch.iter().copied());

    singles == batched
}
