pub mod batch;
pub mod error;
pub mod layout;
pub mod report;
pub mod settings;
pub mod tools;

pub use batch::BatchConverter;
pub use error::ConvertError;
pub use layout::OutputLayout;
pub use report::BatchReport;
pub use settings::ToolSettings;
pub use tools::{Invocation, ProcessRunner, ToolOutcome, ToolRunner};

pub const CONFY_APP_NAME: &str = "ozz-batch";
