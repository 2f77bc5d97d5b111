//! Colored status messages.

use crossterm::style::Stylize;

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn info(message: &str) {
    println!("{}", message.cyan());
}

pub fn warn(message: &str) {
    println!("{}", message.yellow());
}

/// Printed to stderr.
pub fn danger(message: &str) {
    eprintln!("{}", message.red().bold());
}
