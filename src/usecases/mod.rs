//! Application use cases. The three completion stages and the pipeline that sequences them.

pub mod confirmation_stage;
pub mod detail_stage;
pub mod extraction_stage;
pub mod pipeline;

pub use confirmation_stage::ConfirmationStage;
pub use detail_stage::DetailParsingStage;
pub use extraction_stage::ExtractionStage;
pub use pipeline::{EventPipeline, PipelineSettings};

use crate::ports::ClockPort;

/// Today's date as written into prompts, e.g. "Friday, October 16, 2026".
pub(crate) fn prompt_date(clock: &dyn ClockPort) -> String {
    clock.today().format("%A, %B %d, %Y").to_string()
}
