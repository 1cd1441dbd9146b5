//! Language catalog and extension resolution
//!
//! Maps case-insensitive language tags (and a few aliases) to the file
//! extensions that belong to them. The table is static and never mutated;
//! [`LanguageCatalog`] is a thin view over it.

use std::fmt;

/// Reserved tag selecting every extension in the catalog
pub const ALL_TAG: &str = "all";

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Canonical tag, lowercase
    pub tag: &'static str,
    /// Alternative spellings accepted on the command line
    pub aliases: &'static [&'static str],
    /// Extensions including the leading dot, lowercase
    pub extensions: &'static [&'static str],
}

impl LanguageEntry {
    fn matches(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(tag))
    }
}

const fn entry(
    tag: &'static str,
    aliases: &'static [&'static str],
    extensions: &'static [&'static str],
) -> LanguageEntry {
    LanguageEntry {
        tag,
        aliases,
        extensions,
    }
}

static BUILTIN: &[LanguageEntry] = &[
    entry("java", &[], &[".java"]),
    entry("c#", &["csharp"], &[".cs"]),
    entry("python", &["py"], &[".py"]),
    entry("javascript", &["js"], &[".js"]),
    entry("c++", &["cpp"], &[".cpp", ".cc"]),
    entry("c", &[], &[".c", ".h"]),
    entry("html", &[], &[".html"]),
    entry("css", &[], &[".css"]),
    entry("typescript", &["ts"], &[".ts"]),
    entry("go", &[], &[".go"]),
    entry("ruby", &[], &[".rb"]),
    entry("php", &[], &[".php"]),
    entry("rust", &["rs"], &[".rs"]),
    entry("kotlin", &[], &[".kt", ".kts"]),
    entry("swift", &[], &[".swift"]),
    entry("shell", &["sh"], &[".sh"]),
    entry("sql", &[], &[".sql"]),
    entry("json", &[], &[".json"]),
    entry("yaml", &["yml"], &[".yaml", ".yml"]),
    entry("xml", &[], &[".xml"]),
    entry("markdown", &["md"], &[".md"]),
    entry("text", &["txt"], &[".txt"]),
];

/// Read-only view over the language table
#[derive(Debug, Clone, Copy)]
pub struct LanguageCatalog {
    entries: &'static [LanguageEntry],
}

impl LanguageCatalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    #[cfg(test)]
    pub fn entries(&self) -> &'static [LanguageEntry] {
        self.entries
    }

    /// Find the entry for a tag or alias, ignoring case
    pub fn lookup(&self, tag: &str) -> Option<&'static LanguageEntry> {
        let tag = tag.trim();
        self.entries.iter().find(|e| e.matches(tag))
    }

    /// Whether the tag is accepted on the command line
    pub fn is_known(&self, tag: &str) -> bool {
        is_all_tag(tag) || self.lookup(tag).is_some()
    }

    /// Canonical tags in catalog order, followed by `all`
    pub fn supported_tags(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|e| e.tag)
            .chain(std::iter::once(ALL_TAG))
            .collect()
    }

    /// Union of every entry's extensions
    pub fn all_extensions(&self) -> ExtensionSet {
        let mut set = ExtensionSet::default();
        for ext in self.entries.iter().flat_map(|e| e.extensions) {
            set.insert(ext);
        }
        set
    }

    /// Resolve requested tags into an extension set.
    ///
    /// `all` anywhere in the request short-circuits to [`Self::all_extensions`].
    /// Unknown tags are collected in [`Resolution::unrecognized`] instead of
    /// failing the whole request.
    pub fn resolve<S: AsRef<str>>(&self, tags: &[S]) -> Resolution {
        if tags.iter().any(|t| is_all_tag(t.as_ref())) {
            return Resolution {
                extensions: self.all_extensions(),
                unrecognized: Vec::new(),
            };
        }

        let mut resolution = Resolution::default();
        for tag in tags {
            let tag = tag.as_ref();
            match self.lookup(tag) {
                Some(entry) => {
                    for ext in entry.extensions {
                        resolution.extensions.insert(ext);
                    }
                }
                None => resolution.unrecognized.push(tag.to_string()),
            }
        }
        resolution
    }
}

fn is_all_tag(tag: &str) -> bool {
    tag.trim().eq_ignore_ascii_case(ALL_TAG)
}

/// Outcome of [`LanguageCatalog::resolve`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub extensions: ExtensionSet,
    /// Requested tags that matched nothing, in request order
    pub unrecognized: Vec<String>,
}

/// Deduplicated, case-insensitive set of extensions in first-seen order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    /// Insert an extension; returns false if it was already present
    pub fn insert(&mut self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        if self.extensions.contains(&ext) {
            return false;
        }
        self.extensions.push(ext);
        true
    }

    /// Membership test; `ext` must include the leading dot
    pub fn contains(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extensions: Vec<&str> = self.iter().collect();
        f.write_str(&extensions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.lookup("Python").map(|e| e.tag), Some("python"));
        assert_eq!(catalog.lookup("C++").map(|e| e.tag), Some("c++"));
        assert_eq!(catalog.lookup("CSharp").map(|e| e.tag), Some("c#"));
        assert!(catalog.lookup("cobol").is_none());
    }

    #[test]
    fn test_all_is_known_but_not_an_entry() {
        let catalog = LanguageCatalog::builtin();
        assert!(catalog.is_known("ALL"));
        assert!(catalog.lookup("all").is_none());
        assert_eq!(catalog.supported_tags().last(), Some(&ALL_TAG));
    }

    #[test]
    fn test_resolve_all_is_union_of_entries() {
        let catalog = LanguageCatalog::builtin();
        let resolution = catalog.resolve(&["java", "All"]);

        assert!(resolution.unrecognized.is_empty());
        for entry in catalog.entries() {
            for ext in entry.extensions {
                assert!(resolution.extensions.contains(ext), "missing {ext}");
            }
        }
        let total: usize = catalog.entries().iter().map(|e| e.extensions.len()).sum();
        assert_eq!(resolution.extensions.len(), total);
    }

    #[test]
    fn test_resolve_deduplicates() {
        let catalog = LanguageCatalog::builtin();
        let resolution = catalog.resolve(&["python", "py", "PYTHON"]);
        assert_eq!(resolution.extensions.iter().collect::<Vec<_>>(), vec![".py"]);
    }

    #[test]
    fn test_resolve_keeps_request_order() {
        let catalog = LanguageCatalog::builtin();
        let resolution = catalog.resolve(&["c++", "c"]);
        assert_eq!(resolution.extensions.to_string(), ".cpp, .cc, .c, .h");
    }

    #[test]
    fn test_resolve_skips_unknown_tags() {
        let catalog = LanguageCatalog::builtin();
        let resolution = catalog.resolve(&["cobol", "go"]);
        assert_eq!(resolution.unrecognized, vec!["cobol".to_string()]);
        assert!(resolution.extensions.contains(".go"));
        assert_eq!(resolution.extensions.len(), 1);
    }

    #[test]
    fn test_resolve_only_unknown_tags_is_empty() {
        let catalog = LanguageCatalog::builtin();
        let resolution = catalog.resolve(&["cobol", "fortran"]);
        assert!(resolution.extensions.is_empty());
        assert_eq!(resolution.unrecognized.len(), 2);
    }

    #[test]
    fn test_extension_membership_ignores_case() {
        let mut set = ExtensionSet::default();
        assert!(set.insert(".CS"));
        assert!(!set.insert(".cs"));
        assert!(set.contains(".Cs"));
        assert!(!set.contains("cs"));
    }
}
