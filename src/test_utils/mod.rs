//! Helpers shared by unit and integration tests.

use std::fmt::Debug;

pub mod fixtures;

/// One row of a table-driven test.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

/// Evaluate every case and report all mismatches together.
///
/// # Errors
///
/// Names each failing case with its input, expected and actual values.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F) -> Result<(), String>
where
    I: Debug,
    E: Debug + PartialEq,
    F: Fn(I) -> E,
{
    let total = cases.len();
    let failures: Vec<String> = cases
        .into_iter()
        .filter_map(|case| {
            let input = format!("{:?}", case.input);
            let actual = test_fn(case.input);
            (actual != case.expected).then(|| {
                format!(
                    "  {}: input {input}, expected {:?}, got {actual:?}",
                    case.name, case.expected
                )
            })
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "{} of {total} cases failed:\n{}",
            failures.len(),
            failures.join("\n")
        ))
    }
}
