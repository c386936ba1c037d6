use chrono::FixedOffset;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: Server,
    pub history: History,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    /// The interface to bind, e.g. "0.0.0.0".
    pub host: String,
    pub port: u16,
}

/// Presentation settings for the history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct History {
    /// Offset from UTC, in hours, used both to interpret `fecha` filters as
    /// calendar days and to render record timestamps in responses.
    pub utc_offset_hours: i32,
}

impl History {
    /// The configured display zone. Load-time validation guarantees the
    /// offset is representable, so the fallback is UTC.
    pub fn display_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }
}
