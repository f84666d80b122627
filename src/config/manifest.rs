//! Client asset manifest.
//!
//! The manifest is a hand-maintained, ordered list of root-relative
//! stylesheet sources read by the asset bundling step. Entries are appended
//! by developers; nothing here discovers, deduplicates or checks them.

use std::path::{Path, PathBuf};

/// Asset sources handed to the bundler, in declaration order.
pub const CLIENT_ASSET_MANIFEST: &[&str] = &["/static/less/style.less"];

/// The kind of an asset, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A stylesheet source (`.less`, `.css`, `.scss`).
    Stylesheet,
    /// Anything else.
    Other,
}

impl AssetKind {
    /// Infer the kind of a manifest path.
    pub fn of(path: &str) -> Self {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("less" | "css" | "scss") => Self::Stylesheet,
            _ => Self::Other,
        }
    }

    /// Get the kind label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheet",
            Self::Other => "other",
        }
    }
}

/// A manifest entry with its inferred kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    /// Root-relative path as declared.
    pub path: &'static str,
    /// Kind inferred from the extension.
    pub kind: AssetKind,
}

/// Read-only view over a compiled-in manifest table.
///
/// # Example
///
/// ```
/// use deployenv::config::AssetManifest;
///
/// let manifest = AssetManifest::client();
/// assert_eq!(manifest.iter().next(), Some("/static/less/style.less"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetManifest {
    paths: &'static [&'static str],
}

impl AssetManifest {
    /// The client asset manifest.
    pub fn client() -> Self {
        Self::from_static(CLIENT_ASSET_MANIFEST)
    }

    /// Wrap an arbitrary static table.
    pub const fn from_static(paths: &'static [&'static str]) -> Self {
        Self { paths }
    }

    /// Paths in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.paths.iter().copied()
    }

    /// The underlying table.
    pub fn as_slice(&self) -> &'static [&'static str] {
        self.paths
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Entries with their inferred kind.
    pub fn entries(&self) -> Vec<AssetEntry> {
        self.iter()
            .map(|path| AssetEntry {
                path,
                kind: AssetKind::of(path),
            })
            .collect()
    }

    /// Map each root-relative path onto a filesystem root.
    ///
    /// Paths are joined as-is after stripping leading slashes. Existence is
    /// not checked.
    pub fn resolve_under(&self, root: &Path) -> Vec<PathBuf> {
        self.iter()
            .map(|path| root.join(path.trim_start_matches('/')))
            .collect()
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::client()
    }
}

impl serde::Serialize for AssetManifest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "/static/less/base.less",
        "/static/css/vendor.css",
        "/static/less/base.less",
        "/static/js/app.js",
    ];

    #[test]
    fn client_manifest_has_single_stylesheet() {
        let manifest = AssetManifest::client();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.as_slice(), &["/static/less/style.less"]);
        assert_eq!(manifest.entries()[0].kind, AssetKind::Stylesheet);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let manifest = AssetManifest::from_static(SAMPLE);
        let paths: Vec<_> = manifest.iter().collect();
        assert_eq!(paths, SAMPLE);
    }

    #[test]
    fn repeated_views_are_identical() {
        assert_eq!(AssetManifest::client(), AssetManifest::client());
        assert_eq!(AssetManifest::default(), AssetManifest::client());
    }

    #[test]
    fn kind_inferred_from_extension() {
        assert_eq!(AssetKind::of("/static/less/style.less"), AssetKind::Stylesheet);
        assert_eq!(AssetKind::of("/static/css/site.CSS"), AssetKind::Stylesheet);
        assert_eq!(AssetKind::of("/static/sass/site.scss"), AssetKind::Stylesheet);
        assert_eq!(AssetKind::of("/static/js/app.js"), AssetKind::Other);
        assert_eq!(AssetKind::of("/static/README"), AssetKind::Other);
    }

    #[test]
    fn entries_follow_declaration_order() {
        let entries = AssetManifest::from_static(SAMPLE).entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1].path, "/static/css/vendor.css");
        assert_eq!(entries[3].kind, AssetKind::Other);
    }

    #[test]
    fn resolve_under_strips_leading_slash() {
        let resolved = AssetManifest::client().resolve_under(Path::new("/srv/app"));
        assert_eq!(
            resolved,
            vec![PathBuf::from("/srv/app/static/less/style.less")]
        );
    }

    #[test]
    fn empty_manifest() {
        let manifest = AssetManifest::from_static(&[]);
        assert!(manifest.is_empty());
        assert!(manifest.entries().is_empty());
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&AssetManifest::client()).unwrap();
        assert_eq!(json, r#"["/static/less/style.less"]"#);
    }
}
