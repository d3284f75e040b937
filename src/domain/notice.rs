//! Human-readable progress notices.

use std::fmt;

/// One line reported per run outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Cumulative successful runs after a success
    Success { count: u64 },
    /// 1-based index of the run that failed
    Failure { run: u64 },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success { count } => write!(f, "{} runs successful.", count),
            Notice::Failure { run } => write!(f, "Error in run {}!", run),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::Success { count: 3 }.to_string(), "3 runs successful.");
        assert_eq!(Notice::Failure { run: 4 }.to_string(), "Error in run 4!");
    }
}
