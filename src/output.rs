use crate::types::{Result, Tally};
use std::io::Write;

/// Write one `key: count` line per tally
pub fn write_tallies<W: Write>(writer: &mut W, tallies: &[Tally]) -> Result<()> {
    for tally in tallies {
        writeln!(writer, "{}: {}", tally.key, tally.count)?;
    }
    Ok(())
}

/// Write tallies to stdout
pub fn write_stdout(tallies: &[Tally]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = std::io::BufWriter::new(stdout.lock());
    write_tallies(&mut handle, tallies)?;
    handle.flush()?;
    Ok(())
}
