use std::path::PathBuf;

use serde::Serialize;

use mdlinks::walker;

/// Output the comprehensive mdlinks reference document.
pub fn run(json: bool) {
    let root = PathBuf::from(".");
    let state = gather_state(&root);

    if json {
        print_json(&state);
    } else {
        print_markdown(&state);
    }
}

// ── State gathering ───────────────────────────────────────────────────

struct CurrentState {
    config_found: bool,
    markdown_files: usize,
}

fn gather_state(root: &std::path::Path) -> CurrentState {
    let config_found = root.join(".mdlinks.toml").exists();
    let markdown_files = walker::discover_markdown_files(root).len();

    CurrentState { config_found, markdown_files }
}

// ── Markdown output ───────────────────────────────────────────────────

fn print_markdown(state: &CurrentState) {
    let version = env!("CARGO_PKG_VERSION");
    print_markdown_header(version);
    print_markdown_state(state);
    println!();
    print_markdown_exit_codes();
}

fn print_markdown_header(version: &str) {
    print!(
        "\
# mdlinks {version}

Extract Markdown links with line numbers: inline links, reference-style
uses, and the document-wide definitions that resolve them. Fenced code
blocks are never scanned.

## Link Syntax

    [text](./page.md)               inline link
    ![alt](./image.png)             image, never extracted
    [text][name]                    reference use (name is case-insensitive)
    [name]: ./page.md               reference definition (last one wins)

## Workflow

    mdlinks scan [path]             List every link with file:line provenance
    mdlinks check [path]            Report unresolved references (exit 0/1/2)
    mdlinks info                    This document

## Configuration (.mdlinks.toml)

    include = [\"docs/\"]                 # only scan these paths
    exclude = [\"docs/archive/\"]         # skip these paths

## Current State

"
    );
}

fn print_markdown_state(state: &CurrentState) {
    if state.config_found {
        println!("Config:          .mdlinks.toml (found)");
    } else {
        println!("Config:          .mdlinks.toml (not found)");
    }
    println!("Markdown files:  {} under the current directory", state.markdown_files);
}

fn print_markdown_exit_codes() {
    print!(
        "\
## Exit Codes

| Code | Meaning |
|------|---------|
| 0    | Success / all references resolved |
| 1    | Unresolved references found |
| 2    | File errors (missing or unreadable) |
| 3    | Runtime error |

Codes 1 and 2 come from `check`; `scan` and `info` exit 0 unless a
runtime error occurs.
"
    );
}

// ── JSON output ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct InfoJson {
    version: String,
    link_syntax: Vec<SyntaxInfo>,
    exit_codes: Vec<ExitCodeInfo>,
    current_state: StateJson,
}

#[derive(Serialize)]
struct SyntaxInfo {
    form: String,
    meaning: String,
}

#[derive(Serialize)]
struct ExitCodeInfo {
    code: u8,
    meaning: String,
}

#[derive(Serialize)]
struct StateJson {
    config_found: bool,
    markdown_files: usize,
}

fn print_json(state: &CurrentState) {
    let info = InfoJson {
        version: env!("CARGO_PKG_VERSION").to_string(),
        link_syntax: vec![
            SyntaxInfo {
                form: "[text](target)".to_string(),
                meaning: "inline link".to_string(),
            },
            SyntaxInfo {
                form: "![alt](target)".to_string(),
                meaning: "image, never extracted".to_string(),
            },
            SyntaxInfo {
                form: "[text][name]".to_string(),
                meaning: "reference use, case-insensitive name".to_string(),
            },
            SyntaxInfo {
                form: "[name]: target".to_string(),
                meaning: "reference definition, last one wins".to_string(),
            },
        ],
        exit_codes: vec![
            ExitCodeInfo { code: 0, meaning: "Success / all references resolved".to_string() },
            ExitCodeInfo { code: 1, meaning: "Unresolved references found".to_string() },
            ExitCodeInfo { code: 2, meaning: "File errors (missing or unreadable)".to_string() },
            ExitCodeInfo { code: 3, meaning: "Runtime error".to_string() },
        ],
        current_state: StateJson {
            config_found: state.config_found,
            markdown_files: state.markdown_files,
        },
    };

    // serde_json::to_string_pretty won't fail on this structure.
    let json = serde_json::to_string_pretty(&info).unwrap_or_default();
    println!("{json}");
}
