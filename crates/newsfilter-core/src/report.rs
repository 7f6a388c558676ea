use std::io::Write;

use crate::models::HeadlineRecord;

const SEPARATOR_WIDTH: usize = 80;

/// Print headlines as `[source] headline` lines between separator rules.
pub fn display<W: Write>(out: &mut W, headlines: &[HeadlineRecord]) -> std::io::Result<()> {
    let rule = "-".repeat(SEPARATOR_WIDTH);

    writeln!(out, "\nFiltered Headlines:\n")?;
    writeln!(out, "{rule}")?;
    for h in headlines {
        writeln!(out, "[{}] {}", h.source, h.headline)?;
    }
    writeln!(out, "{rule}")?;
    out.flush()
}
