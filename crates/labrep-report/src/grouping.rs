use std::collections::HashMap;

use labrep_core::models::test_order::{EnrichedTest, Subtest};

/// Category for tests without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A test block before its rows are resolved against results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTestBlock<'a> {
    pub test_id: &'a str,
    pub title: &'a str,
    pub notes: &'a str,
    pub status: &'a str,
    pub subtests: &'a [Subtest],
}

impl<'a> RawTestBlock<'a> {
    fn from_test(test: &'a EnrichedTest) -> Self {
        Self {
            test_id: test.test_id.as_deref().unwrap_or_default(),
            title: test.test_name.as_deref().unwrap_or_default(),
            notes: test.notes.as_deref().unwrap_or_default(),
            status: test.status.as_deref().unwrap_or_default(),
            subtests: &test.selected_subtests,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawCategory<'a> {
    pub name: &'a str,
    pub tests: Vec<RawTestBlock<'a>>,
}

/// The category a test is filed under.
pub fn category_name(test: &EnrichedTest) -> &str {
    test.category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Group tests by category, in order of each category's first appearance.
/// Tests keep their input order within a category.
pub fn group(tests: &[EnrichedTest]) -> Vec<RawCategory<'_>> {
    let mut categories: Vec<RawCategory<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for test in tests {
        let name = category_name(test);
        let position = *positions.entry(name).or_insert_with(|| {
            categories.push(RawCategory {
                name,
                tests: Vec::new(),
            });
            categories.len() - 1
        });
        categories[position].tests.push(RawTestBlock::from_test(test));
    }

    categories
}
