#![expect(clippy::inline_always)]

use alloc::collections::{VecDeque, vec_deque};
use core::iter::FusedIterator;

use crate::options::BufferOptions;

/// A pushback buffer of Unicode scalar values.
///
/// Scalars are produced front-to-back through [`Iterator::next`]. Content can
/// be returned to the front with [`push_back`](Self::push_back) and
/// [`push_back_all`](Self::push_back_all), or queued behind everything
/// already buffered with [`append`](Self::append) and
/// [`append_all`](Self::append_all).
///
/// Pushing back a sequence keeps that sequence's own order, so a prefix that
/// was read speculatively can be handed back exactly as it was read:
///
/// ```rust
/// use scalarbuf::ScalarBuffer;
///
/// let mut buffer = ScalarBuffer::new();
/// buffer.append_str("a,b");
///
/// let read: Vec<char> = buffer.by_ref().take(2).collect();
/// assert_eq!(read, ['a', ',']);
///
/// buffer.push_back_all(read);
/// assert_eq!(buffer.collect::<String>(), "a,b");
/// ```
///
/// An exhausted buffer returns `None`. That is not an error: more content
/// may be appended or pushed back at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarBuffer {
    data: VecDeque<char>,
}

impl ScalarBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    /// Creates an empty buffer with room for at least `capacity` scalars.
    ///
    /// The capacity is an allocation hint only; a buffer created with a
    /// capacity of zero behaves identically.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
        }
    }

    /// Creates an empty buffer configured by `options`.
    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        Self::with_capacity(options.capacity)
    }

    /// Number of scalars waiting to be produced.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the next call to `next` would return `None`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The scalar the next call to `next` would return, without consuming it.
    #[inline(always)]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.data.front().copied()
    }

    /// The scalar at position `index` in produce order.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.data.get(index).copied()
    }

    /// Iterates the buffered scalars in produce order without consuming them.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Inserts `scalar` at the front; it is the next scalar produced.
    #[inline(always)]
    pub fn push_back(&mut self, scalar: char) {
        self.data.push_front(scalar);
    }

    /// Inserts `scalars` at the front, ahead of everything already buffered.
    ///
    /// The inserted scalars are produced in the order `scalars` yields them.
    /// An empty sequence leaves the buffer untouched.
    pub fn push_back_all<I>(&mut self, scalars: I)
    where
        I: IntoIterator<Item = char>,
    {
        let before = self.data.len();
        self.data.extend(scalars);
        // The new scalars sit at the back in their original order; rotating
        // them to the front costs O(inserted).
        let inserted = self.data.len() - before;
        self.data.rotate_right(inserted);
    }

    /// Inserts the scalars of `text` at the front, in text order.
    pub fn push_back_str(&mut self, text: &str) {
        // Byte length is an upper bound on the number of chars.
        self.data.reserve(text.len());
        self.push_back_all(text.chars());
    }

    /// Queues `scalar` behind everything currently buffered.
    #[inline(always)]
    pub fn append(&mut self, scalar: char) {
        self.data.push_back(scalar);
    }

    /// Queues `scalars` behind everything currently buffered, in order.
    pub fn append_all<I>(&mut self, scalars: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.data.extend(scalars);
    }

    /// Queues the scalars of `text` behind everything currently buffered.
    pub fn append_str(&mut self, text: &str) {
        self.data.reserve(text.len());
        self.data.extend(text.chars());
    }

    /// Discards every buffered scalar.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Iterator for ScalarBuffer {
    type Item = char;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.data.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl ExactSizeIterator for ScalarBuffer {}

impl FusedIterator for ScalarBuffer {}

impl Extend<char> for ScalarBuffer {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl FromIterator<char> for ScalarBuffer {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for ScalarBuffer {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<'a> IntoIterator for &'a ScalarBuffer {
    type Item = char;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`ScalarBuffer`] in produce order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, char>,
}

impl Iterator for Iter<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
