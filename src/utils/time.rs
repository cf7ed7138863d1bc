use chrono::Utc;

/// Wall-clock stamp attached to each run's log lines.
pub fn run_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
