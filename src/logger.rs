use std::io::Write;

use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;

/// Console logger: one stamped line per event, info level unless RUST_LOG
/// says otherwise.
pub fn init() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}
