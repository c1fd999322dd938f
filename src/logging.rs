//! Leveled log macros.
//!
//! Each level is switched on by its Cargo feature (`log-error` through
//! `log-trace`, each implying the ones above it) and writes a prefixed line to
//! the serial port. Disabled levels expand to nothing, arguments included.

/// Logs an error message with a red "ERROR: " prefix.
#[cfg(all(feature = "log-error", target_arch = "x86_64"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::serial_println!("\x1B[31mERROR:\x1B[0m {}", ::core::format_args!($($arg)*));
    };
}

#[cfg(not(all(feature = "log-error", target_arch = "x86_64")))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {};
}

/// Logs a warning message with a yellow "WARN: " prefix.
#[cfg(all(feature = "log-warn", target_arch = "x86_64"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::serial_println!("\x1B[33mWARN:\x1B[0m {}", ::core::format_args!($($arg)*));
    };
}

#[cfg(not(all(feature = "log-warn", target_arch = "x86_64")))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

/// Logs a info message with a green "INFO: " prefix.
#[cfg(all(feature = "log-info", target_arch = "x86_64"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::serial_println!("\x1B[32mINFO:\x1B[0m {}", ::core::format_args!($($arg)*));
    };
}

#[cfg(not(all(feature = "log-info", target_arch = "x86_64")))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

/// Logs a debug message with a cyan "DEBUG: " prefix.
#[cfg(all(feature = "log-debug", target_arch = "x86_64"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::serial_println!("\x1B[36mDEBUG:\x1B[0m {}", ::core::format_args!($($arg)*));
    };
}

#[cfg(not(all(feature = "log-debug", target_arch = "x86_64")))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// Logs a trace message with a grey "TRACE: " prefix.
#[cfg(all(feature = "log-trace", target_arch = "x86_64"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::serial_println!("\x1B[90mTRACE:\x1B[0m {}", ::core::format_args!($($arg)*));
    };
}

#[cfg(not(all(feature = "log-trace", target_arch = "x86_64")))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
