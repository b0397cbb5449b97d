// Error Handling

/// Errors raised while loading or parsing calendar configuration.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    #[error("No cycle start date configured (set LUNAR_CYCLE_START or pass a date argument)")]
    MissingStartDate,
}
