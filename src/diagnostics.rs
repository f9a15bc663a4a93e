use mdlinks::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and how to fix it.
/// Designed to be readable by both humans and LLM agents.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::Io(e) => format!(
            "\
# Error: I/O

{e}
"
        ),
        Error::TomlDe(e) => format!(
            "\
# Error: Invalid TOML

{e}

## Fix

Check the syntax of `.mdlinks.toml`. Expected shape:

    include = [\"docs/\"]
    exclude = [\"docs/archive/\"]
"
        ),
    }
}
