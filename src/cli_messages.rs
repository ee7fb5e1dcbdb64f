//! CLI command messaging
//!
//! Coloured one-line messages for the non-interactive commands
//! (`search`, `set-server`, `reset`).

const YELLOW: &str = "\x1b[1;33m";
const BRIGHT_RED: &str = "\x1b[1;91m";
const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// `[TAG] title` followed by a tab and the details, if any.
pub fn format_tagged(color: &str, tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{}[{}]{} {}", color, tag, RESET, title)
    } else {
        format!("{}[{}]{} {}\t {}", color, tag, RESET, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", format_tagged(YELLOW, "INFO", title, details));
}

pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_tagged(BRIGHT_RED, "WARN", title, details));
}

/// Errors go to stderr, details on their own line.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", format_tagged(RED, "ERROR", title, ""));
    if let Some(details) = details {
        eprintln!("{}", format_tagged(RED, "ERROR", "Details:", details));
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", format_tagged(GREEN, "SUCCESS", title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
