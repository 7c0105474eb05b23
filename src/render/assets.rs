//! Template asset set embedded into the binary at build time.
//!
//! The assembler consumes an [`AssetSet`] as an injected dependency, so
//! tests can substitute a synthetic set instead of the real templates.

/// Read-only mapping from relative asset path to content.
#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    entries: Vec<(String, String)>,
}

impl AssetSet {
    /// The template assets compiled into the binary from `templates/`.
    pub fn embedded() -> Self {
        Self::from_entries([
            (
                "liquibase.properties.tmpl",
                include_str!("../../templates/liquibase.properties.tmpl"),
            ),
            (
                "changelog-master.xml.tmpl",
                include_str!("../../templates/changelog-master.xml.tmpl"),
            ),
            (
                "changelog/template_employee_1.0.0.xml.tmpl",
                include_str!("../../templates/changelog/template_employee_1.0.0.xml.tmpl"),
            ),
        ])
    }

    pub fn from_entries<I, P, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(path, content)| (path.into(), content.into()))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
