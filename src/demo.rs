// src/demo.rs
//! Worked examples for each problem, checked against their known answers.

use range_sums_shared_kernel::DomainResult;
use serde::Serialize;

use crate::query::{Answer, Query};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoCase {
    pub problem: &'static str,
    pub test: usize,
    pub actual: Answer,
    pub expected: Answer,
}

impl DemoCase {
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

fn count(value: usize) -> Answer {
    Answer::Count(value.into())
}

fn examples() -> Vec<(Query, Answer)> {
    vec![
        (Query::PivotIndex { values: vec![1, 7, 3, 6, 5, 6] }, Answer::Pivot(Some(3))),
        (Query::PivotIndex { values: vec![1, 2, 3] }, Answer::Pivot(None)),
        (Query::PivotIndex { values: vec![2, 1, -1] }, Answer::Pivot(Some(0))),
        (Query::SubarraySum { values: vec![1, 1, 1], k: 2 }, count(2)),
        (Query::SubarraySum { values: vec![1, 2, 3], k: 3 }, count(2)),
        (Query::SubarraySum { values: vec![1, -1, 0], k: 0 }, count(3)),
        (Query::SubarraySum { values: vec![3], k: 3 }, count(1)),
        (Query::RangeSum { values: vec![-2, 5, -1], lower: -2, upper: 2 }, count(3)),
        (Query::RangeSum { values: vec![0], lower: 0, upper: 0 }, count(1)),
        (Query::RangeSum { values: vec![0, -1, 1], lower: 0, upper: 0 }, count(3)),
        (Query::RangeSum { values: vec![1, 2, 3], lower: 3, upper: 6 }, count(4)),
        (
            Query::RangeSum {
                values: vec![1_000_000_000, 1_000_000_000, 1_000_000_000],
                lower: 0,
                upper: 3_000_000_000,
            },
            count(6),
        ),
    ]
}

/// Runs every example. Test numbers restart at 1 for each problem.
///
/// # Errors
/// Propagates evaluation errors; with `strict` unset there are none.
pub fn run_demo(strict: bool) -> DomainResult<Vec<DemoCase>> {
    let mut cases: Vec<DemoCase> = Vec::new();
    for (query, expected) in examples() {
        let problem = query.kind();
        let test = cases.iter().filter(|c| c.problem == problem).count() + 1;
        let actual = query.evaluate(strict)?;
        cases.push(DemoCase { problem, test, actual, expected });
    }
    Ok(cases)
}
