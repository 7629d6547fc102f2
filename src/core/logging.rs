//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - `defmt` feature: Uses defmt (embedded targets with RTT/probe logging)
//! - `log` feature: Uses the `log` facade
//! - Host tests: Uses println!/eprintln!
//! - Otherwise: No-op (arguments are still type-checked)
//!
//! Bring-up failures are never fatal, so these macros are the only place a
//! missing or misbehaving sensor becomes visible.

#[cfg(feature = "log")]
#[doc(hidden)]
pub use log as __log;

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        $crate::core::logging::__log::info!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        $crate::core::logging::__log::warn!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::error!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        $crate::core::logging::__log::error!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(feature = "log", not(feature = "defmt")))]
        $crate::core::logging::__log::debug!($($arg)*);

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(feature = "log"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}
