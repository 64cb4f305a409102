//! JSON rendering for targets and extractions.

use crate::error::{Error, Result};
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a target, an extraction or a list of them.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Target;

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&Target::NotFound, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"value":""}"#);
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&[Target::NotFound, Target::NotFound][..], JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n')); // Pretty has newlines
        assert!(json.starts_with('['));
    }
}
