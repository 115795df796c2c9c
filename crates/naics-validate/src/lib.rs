mod cell;
mod engine;
mod report;
mod selfcheck;
mod source;

pub use cell::any_to_canonical;
pub use engine::{MAX_REPORTED_VALUES, check_cells, check_frame_column, check_source};
pub use report::{write_column_check_report_json, write_self_check_report_json};
pub use selfcheck::{CheckOutcome, CheckStatus, SelfCheckReport, run_self_check};
pub use source::{CellColumn, ColumnSource, FrameColumn};
