use crate::domain::Version;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_version_change(package_name: &str, current: &Version, next: &Version) {
    println!(
        "\n{}",
        style(format!("Version for '{}'", package_name)).bold()
    );
    println!("  From: {}", style(current).red());
    println!("  To:   {}", style(next).green());
}
