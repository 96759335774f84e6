//! Numbered test suites and the dispatcher that routes a selector to them.

use anyhow::Result;
use tracing::{error, info, info_span};

pub mod div;
pub mod factorial;
pub mod golden;
pub mod hand_picked;
pub mod load_cmp;
pub mod randomized;
pub mod rsa;

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for a failed suite or a mismatched result.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for a missing or unknown selector, or malformed driver input.
pub const EXIT_USAGE: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suite {
    Div,
    Rsa,
    LoadCmp,
    HandPicked,
    Golden,
    Factorial,
    Randomized,
}

impl Suite {
    pub const ALL: [Suite; 7] = [
        Suite::Div,
        Suite::Rsa,
        Suite::LoadCmp,
        Suite::HandPicked,
        Suite::Golden,
        Suite::Factorial,
        Suite::Randomized,
    ];

    /// Map a selector in `0..=6` to its suite.
    pub fn from_selector(n: i64) -> Option<Self> {
        usize::try_from(n).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Suite::Div => "div",
            Suite::Rsa => "rsa",
            Suite::LoadCmp => "load_cmp",
            Suite::HandPicked => "hand_picked",
            Suite::Golden => "golden",
            Suite::Factorial => "factorial",
            Suite::Randomized => "randomized",
        }
    }

    fn run(self, args: &[String]) -> i32 {
        let outcome: Result<()> = match self {
            Suite::Div => div::run(),
            Suite::Rsa => rsa::run(),
            Suite::LoadCmp => load_cmp::run(),
            Suite::HandPicked => hand_picked::run(),
            Suite::Golden => golden::run(),
            Suite::Factorial => factorial::run(),
            Suite::Randomized => return randomized::main(args),
        };
        match outcome {
            Ok(()) => {
                info!("passed");
                EXIT_SUCCESS
            }
            Err(e) => {
                error!("{e:#}");
                EXIT_FAILURE
            }
        }
    }
}

/// Run the suite named by `selector`, returning the process exit code.
pub fn dispatch(selector: Option<&str>, args: &[String]) -> i32 {
    let Some(raw) = selector else {
        error!("missing suite selector; expected a number between 0 and 6");
        return EXIT_USAGE;
    };
    let Some(suite) = raw.trim().parse().ok().and_then(Suite::from_selector) else {
        error!(selector = raw, "selector not between 0 and 6");
        return EXIT_USAGE;
    };

    let _span = info_span!("suite", name = suite.name()).entered();
    suite.run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_mapping() {
        assert_eq!(Suite::from_selector(0), Some(Suite::Div));
        assert_eq!(Suite::from_selector(6), Some(Suite::Randomized));
        assert_eq!(Suite::from_selector(7), None);
        assert_eq!(Suite::from_selector(-1), None);
    }

    #[test]
    fn test_suite_names_are_unique() {
        let mut names: Vec<_> = Suite::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Suite::ALL.len());
    }
}
