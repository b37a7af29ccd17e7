//! Calling macros for the process-wide facade
//!
//! The `*f!` macros take a format string and arguments like `format!`. The
//! `log_*!` macros take values and concatenate their `Display` output.

/// Log at debug level
///
/// # Example
///
/// ```
/// simplelogger::debugf!("cache size {}", 128);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::global().debugf(::std::format_args!($($arg)+))
    };
}

/// Log at info level
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::global().infof(::std::format_args!($($arg)+))
    };
}

/// Log at warn level
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::global().warnf(::std::format_args!($($arg)+))
    };
}

/// Log at error level
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::global().errorf(::std::format_args!($($arg)+))
    };
}

/// Log at panic level; evaluates to an [`Escalation`](crate::Escalation)
///
/// # Example
///
/// ```should_panic
/// simplelogger::panicf!("invariant broken: {}", "len < 0").raise();
/// ```
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::global().panicf(::std::format_args!($($arg)+))
    };
}

/// Log at fatal level; evaluates to an [`Escalation`](crate::Escalation)
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::global().fatalf(::std::format_args!($($arg)+))
    };
}

/// Log concatenated values at error level
///
/// # Example
///
/// ```
/// let attempts = 3;
/// simplelogger::log_error!("gave up after ", attempts, " attempts");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($value:expr),+ $(,)?) => {
        $crate::global().error(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Log concatenated values at panic level; evaluates to an escalation
#[macro_export]
macro_rules! log_panic {
    ($($value:expr),+ $(,)?) => {
        $crate::global().panic(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Log concatenated values at fatal level; evaluates to an escalation
#[macro_export]
macro_rules! log_fatal {
    ($($value:expr),+ $(,)?) => {
        $crate::global().fatal(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Log the current stack and then the formatted message, both at error level
#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)+) => {
        $crate::global().trace_error(::std::format_args!($($arg)+))
    };
}
