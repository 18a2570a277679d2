//! The Employee resource and its presentation projections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resources::Resource;
use crate::store::ResourceStore;

/// An employee record as returned by the backend.
///
/// The wire format is camelCase. Name parts default to empty strings when
/// the backend omits them, which the projections below treat as "no initial
/// available".
///
/// # Example
///
/// ```rust
/// use staffdir::resources::Employee;
///
/// let employee: Employee = serde_json::from_value(serde_json::json!({
///     "id": "1",
///     "firstName": "Ann",
///     "lastName": "Lee",
///     "active": true
/// }))
/// .unwrap();
///
/// assert_eq!(employee.full_name(), "Ann Lee");
/// assert_eq!(employee.initials(), "AL");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Backend record identifier.
    pub id: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Organizational unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of hire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    /// Whether the employee is currently active.
    #[serde(default)]
    pub active: bool,
}

impl Employee {
    /// Returns the full display name, `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the upper-cased initials of the name parts.
    ///
    /// Falls back to a single initial when only one name part is present,
    /// and to `"??"` when neither is.
    #[must_use]
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();

        match (first, last) {
            (Some(f), Some(l)) => format!("{f}{l}").to_uppercase(),
            (Some(initial), None) | (None, Some(initial)) => {
                initial.to_uppercase().to_string()
            }
            (None, None) => "??".to_string(),
        }
    }
}

/// Returns the initials for an optional employee record.
///
/// Useful for list-row rendering where a record may be missing; absent
/// records yield the `"??"` sentinel.
///
/// # Example
///
/// ```rust
/// use staffdir::resources::initials_of;
///
/// assert_eq!(initials_of(None), "??");
/// ```
#[must_use]
pub fn initials_of(employee: Option<&Employee>) -> String {
    employee.map_or_else(|| "??".to_string(), Employee::initials)
}

impl Resource for Employee {
    const NAME: &'static str = "employee";
    const COLLECTION: &'static str = "employees";
    const PAGE_PARAM: &'static str = "_page";
    const LIMIT_PARAM: &'static str = "_per_page";
    const DEFAULT_LIMIT: u32 = 12;
    const SEARCH_PARAMS: &'static [&'static str] = &["firstName"];
    const SCOPE_PARAM: Option<&'static str> = None;
}

/// Projections over the currently fetched employee.
///
/// These read `current` and degrade gracefully when no detail record has
/// been fetched yet.
impl ResourceStore<Employee> {
    /// Returns the full display name of the current employee, or an empty
    /// string when none is loaded.
    #[must_use]
    pub fn current_full_name(&self) -> String {
        self.current().map_or_else(String::new, |e| e.full_name())
    }

    /// Returns the initials of the current employee, or `"??"` when none
    /// is loaded.
    #[must_use]
    pub fn current_initials(&self) -> String {
        initials_of(self.current().as_ref())
    }

    /// Returns whether the current employee is active; `false` when no
    /// employee is loaded or the flag is unset.
    #[must_use]
    pub fn current_is_active(&self) -> bool {
        self.current().is_some_and(|e| e.active)
    }
}
