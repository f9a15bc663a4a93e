use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// One reference definition line: `[name]: target`. Multiline-anchored so
/// a single pass over the raw document finds every definition.
static REFERENCE_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\[([^\]]+)\]:\s*(.+)$").expect("valid regex"));

/// Document-wide reference definitions, keyed by lowercased name.
pub struct ReferenceTable {
    definitions: HashMap<String, String>,
}

impl ReferenceTable {
    /// Collect every definition in `content`.
    ///
    /// The scan covers the raw document and is not fence-aware: a
    /// definition inside a fenced code block still registers and can
    /// resolve uses anywhere in the document. When a name is defined more
    /// than once, the last definition wins. Names are lowercased, targets
    /// whitespace-trimmed.
    pub fn build(content: &str) -> Self {
        let mut definitions = HashMap::new();
        for cap in REFERENCE_DEF.captures_iter(content) {
            definitions.insert(cap[1].to_lowercase(), cap[2].trim().to_string());
        }
        Self { definitions }
    }

    /// Look up the target for a reference use. The name is lowercased
    /// before the lookup, so resolution is case-insensitive.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.definitions.get(&name.to_lowercase()).map(String::as_str)
    }
}
