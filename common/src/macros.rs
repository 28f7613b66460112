/// Reports a positive outcome to the user ("[+]" line).
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

/// Reports a recoverable problem to the user ("[*]" line).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

/// Reports a failure to the user ("[-]" line).
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
