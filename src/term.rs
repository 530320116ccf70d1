use colored::Colorize;

/// Blue: progress.
pub fn info(msg: &str) {
    println!("{}", msg.blue());
}

/// Green: a completed step.
pub fn done(msg: &str) {
    println!("{}", msg.green());
}

/// Yellow on black: run-level result.
pub fn success(msg: &str) {
    println!("{}", msg.yellow().on_black());
}

pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}
