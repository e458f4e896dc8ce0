pub mod batch;
pub mod error;
pub mod escape;
pub mod outcome;
pub mod submission;
pub mod token;
pub mod ufn;

pub use batch::{BatchConfig, ItemConfig, ScheduleConfig, TemplateConfig, UfnConfig};
pub use error::AppError;
pub use outcome::{Outcome, ScheduleHeader};
pub use submission::{DocumentState, SubmissionDocument};
pub use token::surname_token;
pub use ufn::UfnSequence;
