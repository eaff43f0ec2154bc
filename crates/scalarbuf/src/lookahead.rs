//! Reading ahead of a scalar source and handing scalars back.
//!
//! [`Lookahead`] sits between a decoder that yields scalars one at a time and
//! the parser that consumes them. Buffered scalars always win: a scalar is
//! only requested from the source once the [`ScalarBuffer`] is empty. This is
//! what lets a reader sniff the first line of a file for its delimiter, give
//! everything back, and then parse the same scalars from the start.
//!
//! The source reports failures through its own error type `E`. Those errors
//! are passed through untouched; the buffer itself has no failure modes.

use crate::{buffer::ScalarBuffer, options::BufferOptions};

/// A scalar source with a pushback buffer in front of it.
///
/// ```rust
/// use core::convert::Infallible;
///
/// use scalarbuf::Lookahead;
///
/// let mut reader = Lookahead::new("a;b;c\n1;2;3\n".chars().map(Ok::<_, Infallible>));
///
/// // Read the header line ahead of time to decide on a delimiter.
/// reader.fill(6).unwrap();
/// let semicolons = reader.buffered().iter().filter(|&c| c == ';').count();
/// assert_eq!(semicolons, 2);
///
/// // Nothing was consumed from the parser's point of view.
/// assert_eq!(reader.next(), Some(Ok('a')));
/// ```
#[derive(Debug, Clone)]
pub struct Lookahead<S> {
    buffer: ScalarBuffer,
    source: S,
}

impl<S> Lookahead<S> {
    /// Wraps `source` with an empty pushback buffer.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            buffer: ScalarBuffer::new(),
            source,
        }
    }

    /// Wraps `source` with an empty pushback buffer configured by `options`.
    #[must_use]
    pub fn with_options(source: S, options: BufferOptions) -> Self {
        Self {
            buffer: ScalarBuffer::with_options(options),
            source,
        }
    }

    /// Hands `scalar` back; it is the next scalar produced.
    pub fn unread(&mut self, scalar: char) {
        self.buffer.push_back(scalar);
    }

    /// Hands `scalars` back, to be produced again in the order given and
    /// ahead of anything already buffered.
    pub fn unread_all<I>(&mut self, scalars: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.buffer.push_back_all(scalars);
    }

    /// Hands the scalars of `text` back, in text order.
    pub fn unread_str(&mut self, text: &str) {
        self.buffer.push_back_str(text);
    }

    /// Scalars read ahead of the consumer, in produce order.
    #[must_use]
    pub fn buffered(&self) -> &ScalarBuffer {
        &self.buffer
    }

    /// Mutable access to the read-ahead buffer.
    pub fn buffered_mut(&mut self) -> &mut ScalarBuffer {
        &mut self.buffer
    }

    /// Drops every buffered scalar. The source is left where it is.
    pub fn discard_buffered(&mut self) {
        self.buffer.clear();
    }

    /// The underlying source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Splits the reader into its buffer and its source.
    #[must_use]
    pub fn into_parts(self) -> (ScalarBuffer, S) {
        (self.buffer, self.source)
    }
}

impl<S, E> Lookahead<S>
where
    S: Iterator<Item = Result<char, E>>,
{
    /// Returns what `next` would return without consuming a scalar.
    ///
    /// A scalar taken from the source is buffered so the following `next`
    /// produces it. A source error is returned as-is and nothing is buffered.
    pub fn peek(&mut self) -> Option<Result<char, E>> {
        if let Some(scalar) = self.buffer.peek() {
            return Some(Ok(scalar));
        }

        let scalar = match self.source.next()? {
            Ok(scalar) => scalar,
            Err(err) => return Some(Err(err)),
        };
        self.buffer.append(scalar);
        Some(Ok(scalar))
    }

    /// Pulls up to `count` scalars from the source onto the back of the
    /// buffer and returns how many were pulled.
    ///
    /// Fewer than `count` are pulled only when the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the source's error. Scalars pulled before the error stay
    /// buffered.
    pub fn fill(&mut self, count: usize) -> Result<usize, E> {
        let mut pulled = 0;
        while pulled < count {
            let Some(scalar) = self.source.next().transpose()? else {
                break;
            };
            self.buffer.append(scalar);
            pulled += 1;
        }

        trace!(
            "lookahead fill: requested = {}, pulled = {}, buffered = {}",
            count,
            pulled,
            self.buffer.len()
        );

        Ok(pulled)
    }

    /// Tops the buffer up to `count` scalars if the source allows and
    /// returns the number now buffered.
    ///
    /// # Errors
    ///
    /// Returns the source's error, see [`fill`](Self::fill).
    pub fn ensure(&mut self, count: usize) -> Result<usize, E> {
        let missing = count.saturating_sub(self.buffer.len());
        if missing > 0 {
            self.fill(missing)?;
        }
        Ok(self.buffer.len())
    }
}

impl<S, E> Iterator for Lookahead<S>
where
    S: Iterator<Item = Result<char, E>>,
{
    type Item = Result<char, E>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.buffer.next() {
            Some(scalar) => Some(Ok(scalar)),
            None => self.source.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.source.size_hint();
        let buffered = self.buffer.len();
        (
            low.saturating_add(buffered),
            high.and_then(|high| high.checked_add(buffered)),
        )
    }
}
