use std::path::Path;

use crate::error::Error;

/// Name of the per-project configuration file, looked up in the scan root.
const CONFIG_FILE_NAME: &str = ".mdlinks.toml";

/// Scan filtering for directory runs, loaded from `.mdlinks.toml`.
///
/// Patterns are plain path prefixes matched against each file's path
/// relative to the scan root. Filtering happens in the CLI layer only;
/// the library walker visits every markdown file unconditionally.
pub struct Config {
    exclude: Vec<String>,
    include: Vec<String>,
}

/// On-disk shape of `.mdlinks.toml`. Both keys are optional.
#[derive(serde::Deserialize)]
struct RawConfig {
    #[serde(default)]
    exclude: Vec<String>,
    #[serde(default)]
    include: Vec<String>,
}

impl Config {
    fn any_prefix_matches(prefixes: &[String], relative_path: &str) -> bool {
        prefixes.iter().any(|prefix| relative_path.starts_with(prefix.as_str()))
    }

    /// Read the scan configuration for `root`.
    ///
    /// A missing file means no filtering at all. A file that exists but
    /// fails to parse is a hard error; a written config is never silently
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` when the file cannot be read for any reason
    /// other than not existing, and `Error::TomlDe` when it is not valid
    /// TOML.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let content = match std::fs::read_to_string(root.join(CONFIG_FILE_NAME)) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::unfiltered()),
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: RawConfig = toml::from_str(&content)?;
        Ok(Self {
            exclude: raw.exclude,
            include: raw.include,
        })
    }

    /// Whether `relative_path` survives the include and exclude patterns.
    ///
    /// An empty include list admits every path; otherwise the path must
    /// start with one of the include prefixes. Exclude prefixes then veto
    /// admitted paths, so exclusion wins where the two overlap.
    pub fn should_scan(&self, relative_path: &str) -> bool {
        if !self.include.is_empty() && !Self::any_prefix_matches(&self.include, relative_path) {
            return false;
        }
        !Self::any_prefix_matches(&self.exclude, relative_path)
    }

    /// The configuration used when no config file exists: scan everything.
    fn unfiltered() -> Self {
        Self {
            exclude: Vec::new(),
            include: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_scans_everything() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.should_scan("anything/at/all.md"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(".mdlinks.toml"), "include = not toml").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(Error::TomlDe(_))));
    }

    #[test]
    fn exclude_wins_over_include() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".mdlinks.toml"),
            "include = [\"docs/\"]\nexclude = [\"docs/archive/\"]\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert!(config.should_scan("docs/guide.md"));
        assert!(!config.should_scan("docs/archive/old.md"));
        assert!(!config.should_scan("src/readme.md"));
    }
}
