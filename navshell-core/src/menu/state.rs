//! Per-mount menu state derived from the template

use serde::Serialize;

use crate::error::{NavError, NavResult};
use crate::menu::{MenuEntry, MenuTemplate};

/// One top-level entry together with its expanded flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuRecord {
    pub entry: MenuEntry,
    /// Always `false` for entries without sub-entries
    pub is_open: bool,
}

/// Expanded state of the top-level entries.
///
/// Only the index of the expanded entry is stored, so at most one record
/// can ever report `is_open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    template: MenuTemplate,
    expanded: Option<usize>,
}

impl MenuState {
    /// Fresh state with every entry collapsed
    pub fn closed(template: &MenuTemplate) -> Self {
        Self {
            template: template.clone(),
            expanded: None,
        }
    }

    /// Collapse every entry
    pub fn reset(&mut self) {
        self.expanded = None;
    }

    pub fn template(&self) -> &MenuTemplate {
        &self.template
    }

    /// Index of the expanded accordion, if any
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn is_all_closed(&self) -> bool {
        self.expanded.is_none()
    }

    /// State after toggling entry `index`.
    ///
    /// The target flips and every other entry closes. Toggling an entry that
    /// has no sub-entries therefore leaves everything closed.
    pub fn toggled(&self, index: usize) -> NavResult<Self> {
        let entry = self
            .template
            .get(index)
            .ok_or(NavError::InvalidEntryIndex(index))?;

        let expanded = if !entry.has_sub_entries() || self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };

        Ok(Self {
            template: self.template.clone(),
            expanded,
        })
    }

    /// Sub-entries currently shown beneath the expanded accordion
    pub fn visible_sub_entries(&self) -> &[MenuEntry] {
        self.expanded
            .and_then(|index| self.template.get(index))
            .map(|entry| entry.sub_entries.as_slice())
            .unwrap_or(&[])
    }

    /// One record per template entry, in template order
    pub fn records(&self) -> Vec<MenuRecord> {
        self.template
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| MenuRecord {
                entry: entry.clone(),
                is_open: self.is_open(index),
            })
            .collect()
    }
}
