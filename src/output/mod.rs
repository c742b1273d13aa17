//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - The confirmation prompt
//! - Progress spinners
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod prompt;
pub mod stats;

pub use self::console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use progress::create_spinner;
pub use prompt::{confirm, confirm_on_terminal, is_affirmative};
pub use stats::{format_bytes, print_clean_stats};
