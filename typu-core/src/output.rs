//! Streaming output helpers (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

use crate::catalog::FontRecord;

/// Write records as a prettified JSON array.
pub fn write_json_pretty(records: &[FontRecord], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write records as newline-delimited JSON (NDJSON).
pub fn write_ndjson(records: &[FontRecord], mut w: impl Write) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(record)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
