//! Pushback and lookahead buffering of Unicode scalars for streaming text
//! readers.
//!
//! A streaming CSV reader cannot always decide how to interpret input the
//! moment it reads it: the delimiter, the quoting style or the line ending
//! may only be known after looking a few scalars ahead. [`ScalarBuffer`]
//! is the staging area that makes this cheap. Scalars are produced from the
//! front, and anything read speculatively can be pushed back onto the front,
//! one at a time or as a batch, to be produced again in its original order.
//!
//! [`Lookahead`] puts a `ScalarBuffer` in front of a fallible scalar source
//! so a parser can read ahead, inspect, and un-read without the source
//! knowing.
//!
//! ```rust
//! use scalarbuf::ScalarBuffer;
//!
//! let mut buffer = ScalarBuffer::new();
//! buffer.append_all(['1', '2']);
//! buffer.push_back_all(['9', '8']);
//! assert_eq!(buffer.collect::<String>(), "9812");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, trace_lookahead))]
extern crate std;

/// Writes a diagnostic line to stderr when built with `--cfg trace_lookahead`.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(trace_lookahead)]
        std::eprintln!($($arg)*);
    };
}

mod buffer;
mod lookahead;
mod options;

#[cfg(test)]
mod tests;

pub use buffer::{Iter, ScalarBuffer};
pub use lookahead::Lookahead;
pub use options::BufferOptions;
