pub mod report_json;

pub use report_json::{compute_week_json, WeekRequest};
