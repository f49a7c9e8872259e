use labrep_core::models::patient::Demographics;
use labrep_core::models::report::{ResultRow, TestBlock};
use labrep_core::models::test_order::Subtest;

use crate::classify::classify;
use crate::grouping::RawTestBlock;
use crate::index::{ResultIndex, ResultKey};
use crate::range::resolve;

/// Resolve one row per subtest. A subtest without a result still gets a row
/// with blank clinical fields.
pub fn compose_rows(
    block: &RawTestBlock<'_>,
    index: &ResultIndex<'_>,
    demographics: Demographics<'_>,
) -> Vec<ResultRow> {
    block
        .subtests
        .iter()
        .map(|subtest| compose_row(block.test_id, subtest, index, demographics))
        .collect()
}

pub fn compose_block(
    block: &RawTestBlock<'_>,
    index: &ResultIndex<'_>,
    demographics: Demographics<'_>,
) -> TestBlock {
    TestBlock {
        test_id: block.test_id.to_string(),
        title: block.title.to_string(),
        notes: block.notes.to_string(),
        status: block.status.to_string(),
        rows: compose_rows(block, index, demographics),
    }
}

fn compose_row(
    test_id: &str,
    subtest: &Subtest,
    index: &ResultIndex<'_>,
    demographics: Demographics<'_>,
) -> ResultRow {
    let key = ResultKey::new(Some(test_id), subtest.lookup_id());
    let result = index.get(&key);
    let parameter = subtest.parameter.as_ref();

    let unit = result
        .and_then(|r| r.unit.as_deref())
        .or_else(|| parameter.and_then(|p| p.unit.as_deref()))
        .unwrap_or_default();

    // A range recorded with the result overrides the parameter definition.
    let range = result
        .and_then(|r| r.reference_range.as_ref())
        .or_else(|| parameter.and_then(|p| p.reference_range.as_ref()))
        .or_else(|| result.and_then(|r| r.normal_range.as_ref()))
        .or_else(|| parameter.and_then(|p| p.normal_range.as_ref()));

    let classification = classify(
        result.and_then(|r| r.flag.as_ref()),
        result.is_some_and(|r| r.is_abnormal),
    );

    ResultRow {
        display_name: subtest.display_name().to_string(),
        value: result
            .and_then(|r| r.value.clone())
            .unwrap_or_default(),
        unit: unit.to_string(),
        reference_range_text: resolve(range, demographics),
        remarks: result
            .and_then(|r| r.notes.clone())
            .unwrap_or_default(),
        highlight_class: classification.highlight_class().to_string(),
        bold_class: classification.bold_class().to_string(),
    }
}
