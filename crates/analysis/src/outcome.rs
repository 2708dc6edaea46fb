use serde::{Deserialize, Serialize};

/// Result of a stage that recovers from internal faults.
///
/// `Degraded` carries the safe default the stage fell back to, so callers can
/// tell a computed neutral sentiment from one produced after a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analysis<T> {
    Computed(T),
    Degraded { value: T, reason: String },
}

impl<T> Analysis<T> {
    pub fn degraded(value: T, reason: impl Into<String>) -> Self {
        Analysis::Degraded {
            value,
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Analysis::Computed(value) | Analysis::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Analysis::Computed(value) | Analysis::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Analysis::Degraded { .. })
    }

    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            Analysis::Computed(_) => None,
            Analysis::Degraded { reason, .. } => Some(reason.as_str()),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Analysis<U> {
        match self {
            Analysis::Computed(value) => Analysis::Computed(f(value)),
            Analysis::Degraded { value, reason } => Analysis::Degraded {
                value: f(value),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computed_has_no_reason() {
        let outcome = Analysis::Computed(3);
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.degraded_reason(), None);
        assert_eq!(*outcome.value(), 3);
    }

    #[test]
    fn degraded_keeps_reason_through_map() {
        let outcome = Analysis::degraded(2, "fallback").map(|v| v * 10);
        assert!(outcome.is_degraded());
        assert_eq!(outcome.degraded_reason(), Some("fallback"));
        assert_eq!(outcome.into_value(), 20);
    }

    #[test]
    fn serializes_with_variant_tag() {
        let json = serde_json::to_string(&Analysis::degraded(1u8, "x")).unwrap();
        assert_eq!(json, r#"{"degraded":{"value":1,"reason":"x"}}"#);
    }
}
