//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target; data
//! collection stays separate from formatting.

mod new;
mod output;
mod preview;

pub use new::NewReport;
pub use output::{Output, Report, TerminalOutput};
pub use preview::{PlannedFile, PreviewReport};
