//! Presentation helpers for detection scores and states.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a nullable metric with four decimal places, `-` when absent or
/// not a finite number.
pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value:.4}"),
        _ => "-".to_owned(),
    }
}

/// Visual bucket for a server-defined detection state string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateTone {
    /// The image looks authentic.
    Authentic,
    /// Clear failure/tampering indicators.
    Failure,
    /// Anything in between — needs a human read of the report.
    Review,
}

/// Bucket a state string by substring, mirroring how the server labels its
/// risk tiers in display text.
pub fn state_tone(state: &str) -> StateTone {
    let normalized = state.to_ascii_lowercase();
    if normalized.contains("real") {
        StateTone::Authentic
    } else if normalized.contains("fail") {
        StateTone::Failure
    } else {
        StateTone::Review
    }
}

/// CSS modifier class for a tone, used by the state badges.
pub fn tone_class(tone: StateTone) -> &'static str {
    match tone {
        StateTone::Authentic => "state-badge--authentic",
        StateTone::Failure => "state-badge--failure",
        StateTone::Review => "state-badge--review",
    }
}
