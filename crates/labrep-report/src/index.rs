use std::collections::HashMap;
use std::fmt;

use labrep_core::models::result::LabResult;

/// Key segment used when a result or row has no subtest identity.
pub const CUSTOM_SUBTEST: &str = "custom";

/// Composite `testId_subtestId` key joining a parameter row to its result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultKey(String);

impl ResultKey {
    /// Missing or empty ids become `""` (test) and `custom` (subtest).
    pub fn new(test_id: Option<&str>, subtest_id: Option<&str>) -> Self {
        let test_id = test_id.unwrap_or_default();
        let subtest_id = subtest_id
            .filter(|s| !s.is_empty())
            .unwrap_or(CUSTOM_SUBTEST);
        Self(format!("{test_id}_{subtest_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Results of one report, indexed by [`ResultKey`].
///
/// At most one result is kept per key. A later record replaces an earlier
/// one, unless both carry `updated_at` and the later record is older.
#[derive(Debug, Default)]
pub struct ResultIndex<'a> {
    entries: HashMap<ResultKey, &'a LabResult>,
}

impl<'a> ResultIndex<'a> {
    pub fn build(results: &'a [LabResult]) -> Self {
        let mut entries: HashMap<ResultKey, &'a LabResult> =
            HashMap::with_capacity(results.len());

        for result in results {
            let key = ResultKey::new(result.test_id.as_deref(), result.subtest_id.as_deref());
            let Some(stored) = entries.get(&key) else {
                entries.insert(key, result);
                continue;
            };

            if supersedes(result, stored) {
                tracing::debug!(key = %key, "duplicate result replaced");
                entries.insert(key, result);
            } else {
                tracing::debug!(key = %key, "kept newer result over stale duplicate");
            }
        }

        Self { entries }
    }

    pub fn get(&self, key: &ResultKey) -> Option<&'a LabResult> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn supersedes(incoming: &LabResult, stored: &LabResult) -> bool {
    match (incoming.updated_at, stored.updated_at) {
        (Some(incoming), Some(stored)) => incoming >= stored,
        _ => true,
    }
}
