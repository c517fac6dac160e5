//! Navigation entries and the template that holds them

use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// A single navigation entry.
///
/// An entry with a `pathname` is a leaf; an entry with an empty `pathname`
/// and at least one sub-entry is an accordion parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Position of the entry within its parent list
    pub index: usize,
    /// Label shown in the menu
    pub name: String,
    /// Navigation target (empty for accordion parents)
    #[serde(default)]
    pub pathname: String,
    /// Ordered children (empty for leaves)
    #[serde(default)]
    pub sub_entries: Vec<MenuEntry>,
}

impl MenuEntry {
    /// Create a leaf entry that navigates to `pathname`
    pub fn leaf(index: usize, name: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            pathname: pathname.into(),
            sub_entries: Vec::new(),
        }
    }

    /// Create an accordion parent holding `sub_entries`
    pub fn accordion(index: usize, name: impl Into<String>, sub_entries: Vec<MenuEntry>) -> Self {
        Self {
            index,
            name: name.into(),
            pathname: String::new(),
            sub_entries,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !self.pathname.is_empty()
    }

    pub fn has_sub_entries(&self) -> bool {
        !self.sub_entries.is_empty()
    }
}

/// Check that `pathname` is something the router can navigate to.
///
/// Pathnames must be absolute (`/`-prefixed) and contain no whitespace.
pub fn validate_pathname(pathname: &str) -> NavResult<()> {
    if !pathname.starts_with('/') || pathname.chars().any(char::is_whitespace) {
        return Err(NavError::InvalidLeafTarget(pathname.to_string()));
    }
    Ok(())
}

/// Immutable, ordered set of top-level menu entries.
///
/// Cloning a template is cheap; every clone shares the same entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MenuEntry>", into = "Vec<MenuEntry>")]
pub struct MenuTemplate {
    entries: Arc<[MenuEntry]>,
}

impl MenuTemplate {
    /// Build a template, rejecting entries that break the model rules
    pub fn new(entries: Vec<MenuEntry>) -> NavResult<Self> {
        for (position, entry) in entries.iter().enumerate() {
            validate_entry(entry, position, true)?;
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every navigable pathname in declaration order
    pub fn pathnames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().flat_map(|entry| {
            std::iter::once(entry)
                .chain(entry.sub_entries.iter())
                .filter(|e| e.is_leaf())
                .map(|e| e.pathname.as_str())
        })
    }

    /// The site's stock navigation menu
    pub fn site_menu() -> Self {
        let entries = vec![
            MenuEntry::leaf(0, "Home", "/"),
            MenuEntry::accordion(
                1,
                "About",
                vec![
                    MenuEntry::leaf(0, "Intro", "/about/intro"),
                    MenuEntry::leaf(1, "Privacy", "/about/privacy"),
                    MenuEntry::leaf(2, "Terms", "/about/terms"),
                ],
            ),
            MenuEntry::accordion(
                2,
                "More",
                vec![
                    MenuEntry::leaf(0, "신상", "/more/new"),
                    MenuEntry::leaf(1, "인기", "/more/popular"),
                    MenuEntry::leaf(2, "상의", "/more/top"),
                    MenuEntry::leaf(3, "아우터", "/more/outer"),
                    MenuEntry::leaf(4, "바지", "/more/pants"),
                    MenuEntry::leaf(5, "신발", "/more/shoes"),
                ],
            ),
        ];
        Self {
            entries: entries.into(),
        }
    }
}

impl Default for MenuTemplate {
    fn default() -> Self {
        Self::site_menu()
    }
}

impl Index<usize> for MenuTemplate {
    type Output = MenuEntry;

    fn index(&self, index: usize) -> &MenuEntry {
        &self.entries[index]
    }
}

impl TryFrom<Vec<MenuEntry>> for MenuTemplate {
    type Error = NavError;

    fn try_from(entries: Vec<MenuEntry>) -> NavResult<Self> {
        Self::new(entries)
    }
}

impl From<MenuTemplate> for Vec<MenuEntry> {
    fn from(template: MenuTemplate) -> Self {
        template.entries.to_vec()
    }
}

fn validate_entry(entry: &MenuEntry, position: usize, top_level: bool) -> NavResult<()> {
    if entry.index != position {
        return Err(NavError::InvalidTemplate(format!(
            "entry '{}' declares index {} but sits at position {}",
            entry.name, entry.index, position
        )));
    }

    match (entry.is_leaf(), entry.has_sub_entries()) {
        (true, false) => validate_pathname(&entry.pathname).map_err(|_| {
            NavError::InvalidTemplate(format!(
                "entry '{}' has malformed pathname '{}'",
                entry.name, entry.pathname
            ))
        }),
        (false, true) if top_level => {
            for (sub_position, sub) in entry.sub_entries.iter().enumerate() {
                validate_entry(sub, sub_position, false)?;
            }
            Ok(())
        }
        (false, true) => Err(NavError::InvalidTemplate(format!(
            "sub-entry '{}' cannot hold further entries",
            entry.name
        ))),
        (true, true) => Err(NavError::InvalidTemplate(format!(
            "entry '{}' has both a pathname and sub-entries",
            entry.name
        ))),
        (false, false) => Err(NavError::InvalidTemplate(format!(
            "entry '{}' has neither a pathname nor sub-entries",
            entry.name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_menu_is_valid() {
        let site = MenuTemplate::site_menu();
        let rebuilt = MenuTemplate::new(site.entries().to_vec()).unwrap();
        assert_eq!(site, rebuilt);
        assert_eq!(site.len(), 3);
        assert!(site[0].is_leaf());
        assert_eq!(site[2].sub_entries.len(), 6);
        assert_eq!(site[2].sub_entries[0].name, "신상");
    }

    #[test]
    fn test_pathnames_follow_declaration_order() {
        let site = MenuTemplate::site_menu();
        let paths: Vec<&str> = site.pathnames().collect();
        assert_eq!(paths[0], "/");
        assert_eq!(paths[1..4], ["/about/intro", "/about/privacy", "/about/terms"]);
        assert_eq!(paths.last(), Some(&"/more/shoes"));
        assert_eq!(paths.len(), 10);
    }

    #[test]
    fn test_rejects_misnumbered_entry() {
        let result = MenuTemplate::new(vec![MenuEntry::leaf(1, "Home", "/")]);
        assert!(matches!(result, Err(NavError::InvalidTemplate(_))));
    }

    #[test]
    fn test_rejects_nested_accordion() {
        let nested = MenuEntry::accordion(0, "Inner", vec![MenuEntry::leaf(0, "Deep", "/deep")]);
        let result = MenuTemplate::new(vec![MenuEntry::accordion(0, "Outer", vec![nested])]);
        assert!(matches!(result, Err(NavError::InvalidTemplate(_))));
    }

    #[test]
    fn test_rejects_empty_entry() {
        let result = MenuTemplate::new(vec![MenuEntry::accordion(0, "Empty", Vec::new())]);
        assert!(matches!(result, Err(NavError::InvalidTemplate(_))));
    }

    #[test]
    fn test_validate_pathname() {
        assert!(validate_pathname("/about/intro").is_ok());
        assert!(validate_pathname("").is_err());
        assert!(validate_pathname("about").is_err());
        assert!(validate_pathname("/more /new").is_err());
    }

    #[test]
    fn test_template_from_json() {
        let json = r#"[
            {"index": 0, "name": "Home", "pathname": "/"},
            {"index": 1, "name": "Docs", "sub_entries": [
                {"index": 0, "name": "Guide", "pathname": "/docs/guide"}
            ]}
        ]"#;
        let template: MenuTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.len(), 2);
        assert!(template[1].has_sub_entries());

        let bad = r#"[{"index": 0, "name": "Broken"}]"#;
        assert!(serde_json::from_str::<MenuTemplate>(bad).is_err());
    }
}
