//! Console output utilities.

use std::path::Path;

use console::style;

/// Maximum number of entries shown in the folder summary.
pub const SAMPLE_SIZE: usize = 5;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Folder Cleaner                                    ║
║     sanitize · convert · compress                     ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the configuration summary.
pub fn print_config_summary(folder: &Path, mode: &str, collision: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Folder:     {}", folder.display());
    println!("  Mode:       {}", mode);
    println!("  Collisions: {}", collision);
    println!();
}
