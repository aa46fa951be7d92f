//! Output formatting utilities

use crate::error::Result;
use std::io::Write;

/// Write each timeline line followed by a newline, then flush
pub fn write_lines<W: Write>(lines: &[String], writer: &mut W) -> Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}
