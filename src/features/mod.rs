pub mod summarize;

pub use summarize::SummaryWorkflow;
