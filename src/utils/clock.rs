use chrono::Local;

/// `2024-03-01;14_05_09`; shared by documentation and archive file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d;%H_%M_%S";

/// Produces the timestamp stamped on a provider's run artifacts.
pub type Clock = fn() -> String;

pub fn run_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
