//! Library error type shared by all calculators

/// A caller-correctable input problem.
///
/// Every calculator returns this instead of partially computing a result;
/// the presentation layer is expected to surface `reason` directly and block
/// the calculation until corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid input `{field}`: {reason}")]
pub struct InvalidInput {
    /// Input field the problem was detected on.
    pub field: &'static str,
    /// Human-readable reason, e.g. "down payment must be less than home price".
    pub reason: String,
}

impl InvalidInput {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_includes_field_and_reason() {
        let err = InvalidInput::new("term_years", "term must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid input `term_years`: term must be greater than zero"
        );
    }
}
