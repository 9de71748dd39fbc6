//! Self-test suites runnable on target.
//!
//! Firmware usually cannot run `cargo test`, so the scanner ships its own
//! vectors as a [`SelfTest`] suite that the embedding environment runs at
//! boot or from a debug shell. A suite is a plain slice of named test
//! functions; each test receives a fresh [`Checker`] and builds its own
//! fixtures. Results are reported through the `log` facade and summarised
//! in a [`SuiteReport`].
//!
//! # Examples
//! ```
//! use bitscan::selftest::{run_suite, BITOPS_SUITE};
//!
//! let report = run_suite("bitops", BITOPS_SUITE).unwrap();
//! assert_eq!(report.tests, BITOPS_SUITE.len());
//! ```

use crate::{
    BITS_PER_WORD, Word, find_first_bit, find_first_zero_bit, find_last_bit, find_next_bit,
    find_next_zero_bit,
};
use core::panic::Location;
use log::{debug, error, info};
use thiserror::Error;

/// A single named test in a suite.
#[derive(Clone, Copy, Debug)]
pub struct SelfTest {
    /// Name used in log output and reports.
    pub name: &'static str,
    /// Test body. Records its expectations on the given [`Checker`].
    pub run: fn(&mut Checker),
}

/// Records the outcome of every expectation made by one test.
///
/// A failed expectation does not abort the test; all checks run and the
/// failures are counted.
#[derive(Debug, Default)]
pub struct Checker {
    checks: usize,
    failures: usize,
}

impl Checker {
    /// Creates a checker with no recorded checks.
    pub const fn new() -> Self {
        Self {
            checks: 0,
            failures: 0,
        }
    }

    /// Checks that `actual == expected` and records the outcome.
    ///
    /// Returns whether the check passed. A failure is logged at error level
    /// with the caller's location.
    #[track_caller]
    pub fn expect_eq(&mut self, actual: usize, expected: usize) -> bool {
        self.checks += 1;
        if actual == expected {
            return true;
        }
        self.failures += 1;
        let location = Location::caller();
        error!(
            "{}:{}: expected {expected}, got {actual}",
            location.file(),
            location.line()
        );
        false
    }

    /// Number of expectations recorded so far.
    pub const fn checks(&self) -> usize {
        self.checks
    }

    /// Number of expectations that failed.
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Returns `true` if no expectation has failed.
    pub const fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// Summary of a suite in which every check passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuiteReport {
    /// Suite name.
    pub suite: &'static str,
    /// Number of tests run.
    pub tests: usize,
    /// Number of checks made across all tests.
    pub checks: usize,
}

/// Reasons a suite run is not a pass.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SelfTestError {
    /// At least one check failed.
    #[error("suite {suite}: {failed_checks} failed checks in {failed_tests} of {total_tests} tests")]
    Failed {
        /// Suite name.
        suite: &'static str,
        /// Number of failed checks across all tests.
        failed_checks: usize,
        /// Number of tests with at least one failed check.
        failed_tests: usize,
        /// Number of tests run.
        total_tests: usize,
    },
    /// The suite has no tests registered.
    #[error("suite {suite} has no tests")]
    Empty {
        /// Suite name.
        suite: &'static str,
    },
}

/// Runs every test in `tests`, each with a fresh [`Checker`].
///
/// All tests run even after a failure.
///
/// # Errors
/// Returns [`SelfTestError::Empty`] if `tests` is empty and
/// [`SelfTestError::Failed`] if any check failed.
pub fn run_suite(suite: &'static str, tests: &[SelfTest]) -> Result<SuiteReport, SelfTestError> {
    if tests.is_empty() {
        return Err(SelfTestError::Empty { suite });
    }
    info!("{suite}: running {} tests", tests.len());

    let mut checks = 0;
    let mut failed_checks = 0;
    let mut failed_tests = 0;
    for test in tests {
        let mut checker = Checker::new();
        (test.run)(&mut checker);
        checks += checker.checks();
        if checker.passed() {
            debug!("{suite}::{} ok ({} checks)", test.name, checker.checks());
        } else {
            error!(
                "{suite}::{} FAILED ({} of {} checks)",
                test.name,
                checker.failures(),
                checker.checks()
            );
            failed_checks += checker.failures();
            failed_tests += 1;
        }
    }

    if failed_tests > 0 {
        return Err(SelfTestError::Failed {
            suite,
            failed_checks,
            failed_tests,
            total_tests: tests.len(),
        });
    }
    info!("{suite}: {} tests passed ({checks} checks)", tests.len());
    Ok(SuiteReport {
        suite,
        tests: tests.len(),
        checks,
    })
}

/// The scanner's own vectors, one test per scan.
pub const BITOPS_SUITE: &[SelfTest] = &[
    SelfTest {
        name: "find_first_bit",
        run: find_first_bit_test,
    },
    SelfTest {
        name: "find_first_zero_bit",
        run: find_first_zero_bit_test,
    },
    SelfTest {
        name: "find_last_bit",
        run: find_last_bit_test,
    },
    SelfTest {
        name: "find_next_bit",
        run: find_next_bit_test,
    },
    SelfTest {
        name: "find_next_zero_bit",
        run: find_next_zero_bit_test,
    },
];

const PATTERN: Word = 0xDEAD_BEEF;
const LOW_HALF: Word = 0xFFFF_FFFF;
const TOP_BIT: Word = 1 << (BITS_PER_WORD - 1);

fn find_first_bit_test(t: &mut Checker) {
    let size = BITS_PER_WORD;
    t.expect_eq(find_first_bit(&[PATTERN], size), 0);
    t.expect_eq(find_first_bit(&[0], size), size);
    t.expect_eq(find_first_bit(&[LOW_HALF], size), 0);
    t.expect_eq(find_first_bit(&[TOP_BIT], size), BITS_PER_WORD - 1);
}

fn find_first_zero_bit_test(t: &mut Checker) {
    let size = BITS_PER_WORD;
    t.expect_eq(find_first_zero_bit(&[PATTERN], size), 4);
    t.expect_eq(find_first_zero_bit(&[0], size), 0);
    t.expect_eq(find_first_zero_bit(&[LOW_HALF], size), 32);
    t.expect_eq(find_first_zero_bit(&[TOP_BIT], size), 0);
}

fn find_last_bit_test(t: &mut Checker) {
    let size = BITS_PER_WORD;
    t.expect_eq(find_last_bit(&[PATTERN], size), 31);
    t.expect_eq(find_last_bit(&[0], size), size);
    t.expect_eq(find_last_bit(&[LOW_HALF], size), 31);
}

fn find_next_bit_test(t: &mut Checker) {
    let size = BITS_PER_WORD;
    t.expect_eq(find_next_bit(&[PATTERN], size, 0), 0);
    t.expect_eq(find_next_bit(&[PATTERN], size, 4), 5);
    t.expect_eq(find_next_bit(&[0], size, 0), size);
    t.expect_eq(find_next_bit(&[LOW_HALF], size, 0), 0);
    t.expect_eq(find_next_bit(&[TOP_BIT], size, 0), BITS_PER_WORD - 1);
}

fn find_next_zero_bit_test(t: &mut Checker) {
    let size = 2 * BITS_PER_WORD;
    let pattern = [PATTERN, 0b1];
    t.expect_eq(find_next_zero_bit(&pattern, size, 0), 4);
    t.expect_eq(find_next_zero_bit(&pattern, size, 5), 8);
    t.expect_eq(find_next_zero_bit(&pattern, size, BITS_PER_WORD), BITS_PER_WORD + 1);
    t.expect_eq(find_next_zero_bit(&[0, 0], size, 0), 0);
    t.expect_eq(find_next_zero_bit(&[!0, !0], size, 0), size);
    t.expect_eq(find_next_zero_bit(&pattern, size, size), size);
}
