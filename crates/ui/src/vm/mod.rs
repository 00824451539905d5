mod form_vm;
mod report_vm;
mod time_fmt;

pub use form_vm::{parse_age, parse_score};
pub use report_vm::{
    BarVm, ConsentSectionVm, DemographicSectionVm, ExitSectionVm, ReportVm, TableVm,
    TaskSectionVm, format_mean, map_report,
};
pub use time_fmt::{format_datetime, format_duration_secs};
