//! Bundled webfonts snapshot (made by FontLab https://www.fontlab.com/)
//!
//! Embeds a point-in-time copy of the webfonts catalog via `include_str!`
//! and parses it once per process. The snapshot is regenerated by packaging
//! tooling; this module only reads it.

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

use crate::catalog::{FontRecord, WebfontsSnapshot};

static RAW_SNAPSHOT: &str = include_str!("../data/webfonts.json");

// serde_json::Error is not Clone, so the Lazy keeps a rendered message.
static SNAPSHOT: Lazy<Result<Vec<FontRecord>, String>> = Lazy::new(|| {
    serde_json::from_str::<WebfontsSnapshot>(RAW_SNAPSHOT)
        .map(|snapshot| snapshot.items)
        .map_err(|err| err.to_string())
});

/// The embedded catalog, shared read-only across the whole process.
pub fn catalog() -> Result<&'static [FontRecord]> {
    match &*SNAPSHOT {
        Ok(items) => Ok(items.as_slice()),
        Err(err) => Err(anyhow!("bundled webfonts snapshot is malformed: {err}")),
    }
}
