use chrono::Local;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging(app_name: &str) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        if let Err(err) = init_logging_inner(app_name) {
            init_result = Err(err);
        }
    });
    init_result
}

fn init_logging_inner(app_name: &str) -> Result<(), String> {
    let level = std::env::var("CCGEN_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let level = parse_level(&level);
    let log_dir = resolve_log_dir(std::env::var("CCGEN_LOG_DIR").ok().as_deref());

    // stdout carries the card data
    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let date = Local::now().format("%Y_%m_%d");
        let file_path = dir.join(format!("{app_name}-{date}.log"));
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}

fn parse_level(value: &str) -> log::LevelFilter {
    value
        .trim()
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info)
}

fn resolve_log_dir(value: Option<&str>) -> Option<PathBuf> {
    match value {
        None | Some("off") | Some("none") | Some("") => None,
        Some(path) => Some(PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_falls_back_to_info() {
        assert_eq!(parse_level("debug"), log::LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), log::LevelFilter::Warn);
        assert_eq!(parse_level("off"), log::LevelFilter::Off);
        assert_eq!(parse_level("chatty"), log::LevelFilter::Info);
    }

    #[test]
    fn file_logging_is_opt_in() {
        assert_eq!(resolve_log_dir(None), None);
        assert_eq!(resolve_log_dir(Some("off")), None);
        assert_eq!(resolve_log_dir(Some("")), None);
        assert_eq!(resolve_log_dir(Some("logs")), Some(PathBuf::from("logs")));
    }
}
