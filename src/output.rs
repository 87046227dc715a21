use owo_colors::OwoColorize;

/// Colored stderr messages for the few moments the program speaks to the user
/// outside the tracing pipeline (before init, or when init itself failed).
/// Colors only on a TTY. The rename log on stdout never passes through here.
fn use_color() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_warn(msg: &str) {
    if use_color() {
        eprintln!("{} {msg}", "warn:".yellow().bold());
    } else {
        eprintln!("warn: {msg}");
    }
}

pub fn print_error(msg: &str) {
    if use_color() {
        eprintln!("{} {msg}", "error:".red().bold());
    } else {
        eprintln!("error: {msg}");
    }
}
