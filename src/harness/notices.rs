//! Where per-run notices go.

use crate::domain::Notice;
use colored::*;

/// Receives one notice per completed run
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

/// Prints notices to stdout
#[derive(Debug, Default)]
pub struct ConsoleNotices;

impl NoticeSink for ConsoleNotices {
    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Success { .. } => println!("{}", notice.to_string().green()),
            Notice::Failure { .. } => println!("{}", notice.to_string().red().bold()),
        }
    }
}

impl NoticeSink for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
