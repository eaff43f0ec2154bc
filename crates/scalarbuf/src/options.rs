/// Configuration for a [`ScalarBuffer`](crate::ScalarBuffer) or a
/// [`Lookahead`](crate::Lookahead).
///
/// # Examples
///
/// ```rust
/// use scalarbuf::{BufferOptions, ScalarBuffer};
///
/// let options = BufferOptions { capacity: 64 };
/// let buffer = ScalarBuffer::with_options(options);
/// assert!(buffer.is_empty());
/// ```
///
/// # Default
///
/// No capacity is reserved up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(default))]
pub struct BufferOptions {
    /// Number of scalars to reserve room for when the buffer is created.
    ///
    /// This is an allocation hint. It never changes which scalars are
    /// produced or in what order; a reader that knows how far it will look
    /// ahead (for example, the length of a delimiter probe) can size the
    /// buffer once and avoid regrowth.
    ///
    /// # Default
    ///
    /// `0`
    pub capacity: usize,
}
