//! Demonstrates how a CSV reader can decide on a delimiter **before** parsing
//! by reading ahead, and then parse the very same scalars from the start.
//!
//! The input arrives as a stream of decoded scalars. The reader does not know
//! whether fields are separated by `,`, `;`, a tab or `|`, so it:
//!
//! 1. reads the first line ahead into the pushback buffer,
//! 2. counts each candidate outside of double quotes,
//! 3. hands the whole line back and parses records with the winner.
//!
//! Run with `cargo run --example sniff_delimiter`.
#![allow(missing_docs)]

use core::convert::Infallible;

use scalarbuf::{BufferOptions, Lookahead};

const INPUT: &str = "id|\"name, with comma\"|score\n1|\"Ada\"|36\n2|\"Alan\"|41\n";
const CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

fn main() {
    let source = INPUT.chars().map(Ok::<char, Infallible>);
    let mut reader = Lookahead::with_options(source, BufferOptions { capacity: 128 });

    let mut line = Vec::new();
    let mut counts = [0usize; CANDIDATES.len()];
    let mut quoted = false;
    while let Some(Ok(c)) = reader.next() {
        line.push(c);
        match c {
            '"' => quoted = !quoted,
            '\n' => break,
            _ if !quoted => {
                if let Some(i) = CANDIDATES.iter().position(|&d| d == c) {
                    counts[i] += 1;
                }
            }
            _ => {}
        }
    }

    let winner = (0..CANDIDATES.len())
        .max_by_key(|&i| counts[i])
        .map_or(',', |i| CANDIDATES[i]);
    println!("read ahead {} scalars, delimiter = {winner:?}", line.len());

    reader.unread_all(line);

    let mut field = String::new();
    let mut record = Vec::new();
    let mut quoted = false;
    for c in reader.map(|c| c.unwrap_or_else(|never| match never {})) {
        match c {
            '"' => quoted = !quoted,
            _ if quoted => field.push(c),
            '\n' => {
                record.push(core::mem::take(&mut field));
                println!("{record:?}");
                record.clear();
            }
            _ if c == winner => record.push(core::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
}
