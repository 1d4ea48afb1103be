/// # runes: Listing the Runes of Standard Input
///
/// This example reads standard input in small chunks and prints one line per
/// rune, showing its code point and encoded length. Malformed bytes show up as
/// errors. Incomplete runes at the end of a chunk are carried over to the next
/// one, so that chunk boundaries never split a rune.
use std::io::{Read, Write};

use prettyrune::try_decode_rune;

fn run() -> std::io::Result<()> {
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();

    let mut chunk = [0_u8; 7];
    let mut pending = Vec::new();

    loop {
        let count = input.read(&mut chunk)?;
        pending.extend_from_slice(&chunk[..count]);

        let mut bytes = pending.as_slice();
        while !bytes.is_empty() {
            match try_decode_rune(bytes) {
                Ok((c, size)) => {
                    writeln!(output, "U+{:04X} {:?} ({} bytes)", c as u32, c, size)?;
                    bytes = &bytes[size..];
                }
                Err(error) if error.is_incomplete() && 0 < count => break,
                Err(error) => {
                    writeln!(output, "‹{:02x}› {}", bytes[0], error)?;
                    bytes = &bytes[1..];
                }
            }
        }
        pending = bytes.to_vec();

        if count == 0 {
            return Ok(());
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("ERROR: {}", error);
    }
}
