use std::sync::LazyLock;

use regex::Regex;

use crate::reftable::ReferenceTable;
use crate::types::{LinkOccurrence, ParseReport, UnresolvedReference};

/// Inline link: `[text](target)`. Image syntax is filtered after matching
/// by inspecting the byte before the match, since the regex crate has no
/// look-behind.
static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));

/// Reference-style use: `[text][name]`. No image filtering here; only the
/// inline pattern carries the `!` exclusion.
static REFERENCE_USE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\[([^\]]+)\]").expect("valid regex"));

/// Extract every link from a Markdown document, in document order.
///
/// Reference definitions are collected from the raw text first, then lines
/// are scanned in order under a fence accumulator. Reference uses with no
/// definition are dropped. Pure and deterministic: no filesystem access,
/// no shared state.
pub fn parse(content: &str) -> Vec<LinkOccurrence> {
    parse_with_unresolved(content).links
}

/// Like [`parse`], but keeps the reference uses that resolved to nothing
/// instead of dropping them.
pub fn parse_with_unresolved(content: &str) -> ParseReport {
    let table = ReferenceTable::build(content);
    let mut report = ParseReport::default();
    let mut in_fence = false;

    for (line, number) in content.lines().zip(1u32..) {
        // A fence marker line toggles state and is itself never scanned,
        // whether it opens or closes the block.
        if line.trim().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        scan_line(line, number, &table, &mut report);
    }

    report
}

/// Scan one visible line: every inline link first, then every reference
/// use, each group left to right.
fn scan_line(line: &str, number: u32, table: &ReferenceTable, report: &mut ParseReport) {
    let mut at = 0;
    while let Some(cap) = INLINE_LINK.captures_at(line, at) {
        let Some(whole) = cap.get(0) else {
            break;
        };
        if is_image(line, whole.start()) {
            // A rejected match disqualifies only its opening bracket; the
            // scan resumes just past it, as a look-behind would.
            at = whole.start().saturating_add(1);
            continue;
        }
        report.links.push(LinkOccurrence {
            line: number,
            target: cap[2].to_string(),
            text: cap[1].to_string(),
        });
        at = whole.end();
    }

    for cap in REFERENCE_USE.captures_iter(line) {
        let name = &cap[2];
        match table.resolve(name) {
            Some(target) => report.links.push(LinkOccurrence {
                line: number,
                target: target.to_string(),
                text: cap[1].to_string(),
            }),
            None => report.unresolved.push(UnresolvedReference {
                line: number,
                name: name.to_string(),
                text: cap[1].to_string(),
            }),
        }
    }
}

/// Whether the bracket at byte offset `start` is image syntax, i.e.
/// immediately preceded by `!`. A match at the very start of the line has
/// no preceding byte and is kept.
fn is_image(line: &str, start: usize) -> bool {
    let Some(previous) = start.checked_sub(1) else {
        return false;
    };
    line.as_bytes().get(previous) == Some(&b'!')
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn document_without_links_parses_empty() {
        assert!(parse("").is_empty());
        assert!(parse("# Title\n\nPlain prose with no links.\n").is_empty());
    }

    #[test]
    fn extracts_inline_links_with_line_numbers() {
        let links = parse("# Guide\n\nSee [Home](./index.md) for more.\n");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "Home");
        assert_eq!(links[0].target, "./index.md");
        assert_eq!(links[0].line, 3);
    }

    #[test]
    fn multiple_links_on_one_line_keep_left_to_right_order() {
        let links = parse("[a](1.md) then [b](2.md)\n");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target, "1.md");
        assert_eq!(links[1].target, "2.md");
    }

    #[test]
    fn image_syntax_is_not_a_link() {
        assert!(parse("![alt](image.png)\n").is_empty());
        let links = parse("An ![icon](i.png) next to [real](./r.md)\n");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "real");
    }

    #[test]
    fn image_marker_blocks_only_its_own_bracket() {
        let links = parse("![a[b](c)\n");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "b");
        assert_eq!(links[0].target, "c");

        assert!(parse("!![x](y)\n").is_empty());
    }

    #[test]
    fn image_marker_does_not_block_reference_uses() {
        let links = parse("![alt][api]\n\n[api]: ./api.md\n");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "alt");
        assert_eq!(links[0].target, "./api.md");
    }

    #[test]
    fn fences_toggle_and_markers_are_skipped() {
        let content = "[a](1.md)\n```\n[b](2.md)\n```\n[c](3.md)\n``` [d](4.md)\n[e](5.md)\n";
        let links = parse(content);
        let targets: Vec<&str> = links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["1.md", "3.md"]);
        assert_eq!(links[1].line, 5);
    }

    #[test]
    fn indented_and_language_tagged_fences_still_toggle() {
        let content = "  ```rust\n[hidden](x.md)\n  ```\n[shown](y.md)\n";
        let links = parse(content);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "y.md");
        assert_eq!(links[0].line, 4);
    }

    #[test]
    fn reference_use_resolves_case_insensitively() {
        let content = "[one][DOCS] and [two][docs]\n\n[Docs]: ./docs.md\n";
        let links = parse(content);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target, "./docs.md");
        assert_eq!(links[1].target, "./docs.md");
    }

    #[test]
    fn unresolved_use_is_dropped_silently() {
        let content = "See [missing][nowhere].\n";
        assert!(parse(content).is_empty());

        let report = parse_with_unresolved(content);
        assert!(report.links.is_empty());
        assert_eq!(report.unresolved.len(), 1);
        assert_eq!(report.unresolved[0].name, "nowhere");
        assert_eq!(report.unresolved[0].line, 1);
    }

    #[test]
    fn definition_inside_fence_still_registers() {
        let content = "```\n[api]: ./api.md\n```\nUse [it][api].\n";
        let links = parse(content);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "./api.md");
        assert_eq!(links[0].line, 4);
    }

    #[test]
    fn definition_lines_emit_no_occurrences() {
        assert!(parse("[api]: ./api.md\n").is_empty());
    }

    #[test]
    fn inline_links_come_before_reference_uses_on_a_line() {
        let content = "See [Home](./index.md) and [API][api].\n[api]: ./api.md\n";
        let links = parse(content);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text, "Home");
        assert_eq!(links[0].line, 1);
        assert_eq!(links[1].text, "API");
        assert_eq!(links[1].target, "./api.md");
        assert_eq!(links[1].line, 1);
    }
}
