use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";

const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}▶{} {}", FG_CYAN, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}✔{} {}", FG_GREEN, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}⚠{} {}", FG_YELLOW, RESET, msg);
}
