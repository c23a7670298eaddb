// Copyright (C) 2020-2026 Andy Kurnia.

use log::LevelFilter;

pub const LOG_ENV_VAR: &str = "WORDHOOK_LOG";

// unset or unparsable means warn.
pub fn level_from_env_value(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

// the logger itself passes everything; the max level does the filtering so it
// can be changed later with set_level.
pub fn init() -> LevelFilter {
    let level = level_from_env_value(std::env::var(LOG_ENV_VAR).ok().as_deref());
    let logger = env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .build();
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
    level
}

// what the shell's verbose command switches to. from a quiet level that is debug;
// from debug or louder it is the initial level, or warn if that was loud too.
pub fn toggled_level(current: LevelFilter, initial: LevelFilter) -> LevelFilter {
    if current < LevelFilter::Debug {
        LevelFilter::Debug
    } else if initial < LevelFilter::Debug {
        initial
    } else {
        LevelFilter::Warn
    }
}

#[inline(always)]
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!(level_from_env_value(None), LevelFilter::Warn);
        assert_eq!(level_from_env_value(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_env_value(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(level_from_env_value(Some("off")), LevelFilter::Off);
        assert_eq!(level_from_env_value(Some("chatty")), LevelFilter::Warn);
    }

    #[test]
    fn verbose_toggle_always_changes_level() {
        use LevelFilter::*;
        assert_eq!(toggled_level(Warn, Warn), Debug);
        assert_eq!(toggled_level(Debug, Warn), Warn);
        assert_eq!(toggled_level(Off, Off), Debug);
        assert_eq!(toggled_level(Debug, Off), Off);
        // started loud: switching off debug goes to warn.
        assert_eq!(toggled_level(Debug, Debug), Warn);
        assert_eq!(toggled_level(Trace, Trace), Warn);
        assert_eq!(toggled_level(Warn, Trace), Debug);
    }
}
