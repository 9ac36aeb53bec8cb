//! `log` facade → browser console, via `console_log`.

use log::Level;

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: Level) {
    if console_log::init_with_level(level).is_ok() {
        log::debug!("console logger installed at {level}");
    } else {
        log::set_max_level(level.to_level_filter());
    }
}

/// Pick a level from a page query string: `?debug=1` or `?log=1` turns on
/// debug output, `?log=trace` everything.
pub fn level_from_query(search: &str) -> Level {
    let query = search.trim_start_matches('?');
    let mut level = Level::Warn;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != "debug" && key != "log" {
            continue;
        }
        level = match value {
            "trace" => Level::Trace,
            "1" | "true" | "debug" => Level::Debug,
            "info" => Level::Info,
            _ => level,
        };
    }
    level
}
