//! Routes geomval's `log` records to a C callback or stderr.

use std::os::raw::{c_char, c_void};
use std::sync::RwLock;

use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

use crate::error::{
    GeometryError, clear_error, cstring_from_str_lossy, geomval_error_t, write_geometry_error,
};

const TARGET: &str = "geomval";

/// Verbosity threshold. Discriminants match `log::LevelFilter` ordering.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(C)]
pub enum geomval_log_level_t {
    GEOMVAL_LOG_OFF = 0,
    GEOMVAL_LOG_ERROR = 1,
    GEOMVAL_LOG_WARN = 2,
    GEOMVAL_LOG_INFO = 3,
    GEOMVAL_LOG_DEBUG = 4,
    GEOMVAL_LOG_TRACE = 5,
}

use geomval_log_level_t::*;

const LEVELS: [geomval_log_level_t; 6] = [
    GEOMVAL_LOG_OFF,
    GEOMVAL_LOG_ERROR,
    GEOMVAL_LOG_WARN,
    GEOMVAL_LOG_INFO,
    GEOMVAL_LOG_DEBUG,
    GEOMVAL_LOG_TRACE,
];

impl geomval_log_level_t {
    fn filter(self) -> LevelFilter {
        LevelFilter::iter()
            .nth(self as usize)
            .unwrap_or(LevelFilter::Trace)
    }
}

/// A record handed to the callback. Both strings live only for the duration of the call.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct geomval_log_record_t {
    pub level: geomval_log_level_t,
    pub target: *const c_char,
    pub message: *const c_char,
}

#[allow(non_camel_case_types)]
pub type geomval_log_callback_t =
    Option<extern "C" fn(record: *const geomval_log_record_t, user_data: *mut c_void)>;

struct Sink {
    level: LevelFilter,
    callback: geomval_log_callback_t,
    // Address only, so the sink is Send + Sync.
    user_data: usize,
}

struct GeomvalLogger {
    sink: RwLock<Sink>,
}

static LOGGER: GeomvalLogger = GeomvalLogger {
    sink: RwLock::new(Sink {
        level: LevelFilter::Info,
        callback: None,
        user_data: 0,
    }),
};

static INSTALLED: OnceCell<bool> = OnceCell::new();

impl GeomvalLogger {
    fn read<T>(&self, f: impl FnOnce(&Sink) -> T) -> T {
        f(&self.sink.read().unwrap_or_else(|err| err.into_inner()))
    }

    fn replace(&self, sink: Sink) {
        *self.sink.write().unwrap_or_else(|err| err.into_inner()) = sink;
    }
}

impl Log for GeomvalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(TARGET) && self.read(|sink| metadata.level() <= sink.level)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let (callback, user_data) = self.read(|sink| (sink.callback, sink.user_data));
        let Some(callback) = callback else {
            eprintln!("{} {}: {}", record.level(), record.target(), record.args());
            return;
        };

        let target = cstring_from_str_lossy(record.target());
        let message = cstring_from_str_lossy(&record.args().to_string());
        let c_record = geomval_log_record_t {
            level: LEVELS[record.level() as usize],
            target: target.as_ptr(),
            message: message.as_ptr(),
        };
        callback(&c_record, user_data as *mut c_void);
    }

    fn flush(&self) {}
}

fn install() -> Result<(), GeometryError> {
    if *INSTALLED.get_or_init(|| log::set_logger(&LOGGER).is_ok()) {
        Ok(())
    } else {
        Err(GeometryError::Logging("another logger is already installed"))
    }
}

/// Sends geomval's log records at or above `level` to `callback`, or to stderr when
/// `callback` is null. Calling again replaces the previous settings.
#[unsafe(no_mangle)]
pub extern "C" fn geomval_log_init(
    level: geomval_log_level_t,
    callback: geomval_log_callback_t,
    user_data: *mut c_void,
    out_error: *mut *mut geomval_error_t,
) -> bool {
    clear_error(out_error);
    if let Err(err) = install() {
        write_geometry_error(out_error, &err);
        return false;
    }
    let level = level.filter();
    LOGGER.replace(Sink {
        level,
        callback,
        user_data: user_data as usize,
    });
    log::set_max_level(level);
    true
}
