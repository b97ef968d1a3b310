use serde::{Deserialize, Serialize};

/// A game (and optionally its admin backend) listed in the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub logo: String,
    pub link: String,
    #[serde(default, rename = "adminUrl", skip_serializing_if = "Option::is_none")]
    pub admin_url: Option<String>,
}

impl CatalogEntry {
    /// Name as rendered on cards; run-together names get spaced out.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_str() {
            "BIGDADDYDRAGON" => "BIG DADDY DRAGON",
            "GREATBALLSOFFIRE" => "GREAT BALLS OF FIRE",
            other => other,
        }
    }

    /// Call-to-action label for the play link.
    #[must_use]
    pub fn play_label(&self) -> &'static str {
        if self.name == "BLUE DRAGON" {
            "Web Version"
        } else {
            "Play Game"
        }
    }

    #[must_use]
    pub const fn has_admin(&self) -> bool {
        self.admin_url.is_some()
    }

    /// Matches against both the stored and the displayed name.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        matches_query(&self.name, query) || matches_query(self.display_name(), query)
    }
}

/// Case-insensitive substring test; an empty query matches everything.
#[must_use]
pub fn matches_query(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Lowercased name with all whitespace removed, used for cross-list lookups.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The immutable, ordered list of hub entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub const fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from its JSON array form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an entry lacks a required field.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose name contains `query`, in catalog order.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(query))
            .collect()
    }

    /// Like [`Catalog::filter`] but limited to entries with an admin backend.
    #[must_use]
    pub fn admin_links(&self, query: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.has_admin() && entry.matches(query))
            .collect()
    }

    /// Logo for a name, ignoring case and whitespace.
    #[must_use]
    pub fn logo_for(&self, name: &str) -> Option<&str> {
        let key = normalize_name(name);
        self.entries
            .iter()
            .find(|entry| normalize_name(&entry.name) == key)
            .map(|entry| entry.logo.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, name: &str, admin: bool) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            logo: format!("/logos/{id}.png"),
            link: format!("https://play.example/{id}"),
            admin_url: admin.then(|| format!("https://admin.example/{id}")),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            entry(1, "Juwa", true),
            entry(2, "Game Vault", true),
            entry(3, "Vegas Luck", false),
            entry(4, "BIGDADDYDRAGON", false),
        ])
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let catalog = sample();
        let hits = catalog.filter("juwa");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Juwa");

        let hits = catalog.filter("VAULT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        assert!(catalog.filter("zzz").is_empty());
    }

    #[test]
    fn filter_sees_spaced_display_name() {
        let catalog = sample();
        for query in ["big daddy", "bigdaddy"] {
            let ids: Vec<u32> = catalog.filter(query).iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![4], "{query}");
        }
    }

    #[test]
    fn empty_query_keeps_full_order() {
        let catalog = sample();
        let ids: Vec<u32> = catalog.filter("").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn admin_links_skip_entries_without_backend() {
        let catalog = sample();
        let ids: Vec<u32> = catalog.admin_links("").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(catalog.admin_links("vegas").is_empty());
    }

    #[test]
    fn display_names_and_labels() {
        let catalog = sample();
        assert_eq!(catalog.entries()[3].display_name(), "BIG DADDY DRAGON");
        assert_eq!(catalog.entries()[0].display_name(), "Juwa");
        assert_eq!(catalog.entries()[0].play_label(), "Play Game");
        assert_eq!(entry(9, "BLUE DRAGON", true).play_label(), "Web Version");
    }

    #[test]
    fn logo_lookup_ignores_spacing() {
        let catalog = sample();
        assert_eq!(catalog.logo_for("Gamevault"), Some("/logos/2.png"));
        assert_eq!(catalog.logo_for("  JUWA "), Some("/logos/1.png"));
        assert_eq!(catalog.logo_for("Moolah"), None);
    }

    #[test]
    fn admin_url_is_optional_in_json() {
        let catalog = Catalog::from_json(
            r#"[{"id":1,"name":"A","logo":"/a.png","link":"https://a"},
                {"id":2,"name":"B","logo":"/b.png","link":"https://b","adminUrl":"https://b/admin"}]"#,
        )
        .unwrap();
        assert!(!catalog.entries()[0].has_admin());
        assert_eq!(
            catalog.entries()[1].admin_url.as_deref(),
            Some("https://b/admin")
        );
        assert!(Catalog::from_json(r#"[{"id":1,"name":"A"}]"#).is_err());
    }
}
