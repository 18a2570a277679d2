//! The Document resource.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resources::Resource;

/// A document record as returned by the backend.
///
/// Documents may be scoped to an employee via `employeeId`; list fetches
/// pass that scope as a query constraint rather than a nested path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Backend record identifier.
    pub id: String,
    /// Document number.
    #[serde(default)]
    pub number: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Identifier of the employee this document belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Date the document was issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Resource for Document {
    const NAME: &'static str = "document";
    const COLLECTION: &'static str = "documents";
    const PAGE_PARAM: &'static str = "_page";
    const LIMIT_PARAM: &'static str = "_limit";
    const DEFAULT_LIMIT: u32 = 10;
    // Free-text search matches any field via `q`, plus the two fields the
    // views search on explicitly.
    const SEARCH_PARAMS: &'static [&'static str] = &["q", "number", "description"];
    const SCOPE_PARAM: Option<&'static str> = Some("employeeId");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "id": "10",
            "number": "DOC-42",
            "description": "Employment contract",
            "employeeId": "3",
            "date": "2023-09-01"
        }))
        .unwrap();

        assert_eq!(document.number, "DOC-42");
        assert_eq!(document.employee_id.as_deref(), Some("3"));
        assert_eq!(document.date, NaiveDate::from_ymd_opt(2023, 9, 1));
    }

    #[test]
    fn test_optional_fields_default() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "id": "10"
        }))
        .unwrap();

        assert_eq!(document.number, "");
        assert_eq!(document.description, "");
        assert!(document.employee_id.is_none());
        assert!(document.date.is_none());
    }
}
