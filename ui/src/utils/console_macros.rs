/// Macros for properly formatted console logging
/// In the browser these wrap gloo_console functions and prefix a timestamp.
/// Native builds (unit tests) forward to `tracing` since there is no JS console.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_dispatch!(info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_dispatch!(info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {
        $crate::__console_dispatch!(log, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_dispatch!(log, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_dispatch!(warn, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_dispatch!(warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_dispatch!(error, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_dispatch!(error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_dispatch!(debug, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_dispatch!(debug, format!($fmt, $($arg)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __console_dispatch {
    (info, $msg:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Info, $msg)
    };
    (log, $msg:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Log, $msg)
    };
    (warn, $msg:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Warn, $msg)
    };
    (error, $msg:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Error, $msg)
    };
    (debug, $msg:expr) => {
        $crate::utils::console_macros::emit($crate::utils::console_macros::Level::Debug, $msg)
    };
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Log,
    Warn,
    Error,
    Debug,
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, message: String) {
    let line = format!("[{}] {}", js_sys::Date::now(), message);
    match level {
        Level::Info => gloo_console::info!(line),
        Level::Log => gloo_console::log!(line),
        Level::Warn => gloo_console::warn!(line),
        Level::Error => gloo_console::error!(line),
        Level::Debug => gloo_console::debug!(line),
    }
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: Level, message: String) {
    match level {
        Level::Info | Level::Log => tracing::info!("{}", message),
        Level::Warn => tracing::warn!("{}", message),
        Level::Error => tracing::error!("{}", message),
        Level::Debug => tracing::debug!("{}", message),
    }
}
