//! Interactive 3-character decoder.
//!
//! Reads three byte values per line (most significant first) and prints the
//! decoded 18-bit value. Ends on EOF.
//!
//! Run with:
//!   cargo run --example decode_stdin
//!
//! Example session:
//!   Input 3 bytes of data :
//!   49 50 51
//!   Decoded Value = 4227

use byte_fifo::decode_triple;
use std::io::{self, BufRead, Write};

fn parse_triple(line: &str) -> Option<[u8; 3]> {
    let mut fields = line.split_whitespace().map(str::parse::<u8>);
    let triple = [
        fields.next()?.ok()?,
        fields.next()?.ok()?,
        fields.next()?.ok()?,
    ];
    fields.next().is_none().then_some(triple)
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        writeln!(stdout, "Input 3 bytes of data : ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_triple(&line) {
            Some([high, mid, low]) => {
                writeln!(stdout, "Decoded Value = {}", decode_triple(high, mid, low))?;
            }
            None => eprintln!("expected three values in 0..=255, got {:?}", line.trim()),
        }
    }
}
