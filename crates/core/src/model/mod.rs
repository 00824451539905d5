mod category;
mod consent;
mod demographic;
mod exit;
mod ids;
mod record;
mod table;
mod task;

pub use category::Category;
pub use consent::{ConsentError, ConsentRecord};
pub use demographic::{
    ANONYMOUS_NAME, CheckFrequency, DemographicDraft, DemographicError, DemographicRecord,
    Familiarity, NamePolicy,
};
pub use exit::{ExitDraft, ExitError, ExitRecord, LikertScore};
pub use ids::SessionId;
pub use record::{Record, columns, format_bool, parse_bool};
pub use table::{Table, TableError};
pub use task::{TaskCatalog, TaskDraft, TaskError, TaskOutcome, TaskRecord};
