//! The catalog is the list of bond offerings at one bank, kept in the order
//! they were first added so the buy list stays stable.

use crate::models::bond::{BondTemplate, BondTemplateID};
use serde::{Serialize, Deserialize};

/// What happened when a template was written into a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogChange {
    /// The template id was new
    Added,
    /// An existing template was overwritten
    Updated,
    /// The template id already existed and overwrites are off, so nothing
    /// changed. Scripted content hitting a duplicate id keeps running.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondCatalog {
    templates: Vec<BondTemplate>,
}

impl BondCatalog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn exists(&self, id: &BondTemplateID) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &BondTemplateID) -> Option<&BondTemplate> {
        self.templates.iter().find(|t| t.id() == id)
    }

    /// Add a template. An existing id is left alone unless `overwrite` is set,
    /// in which case this acts like `update()`.
    pub(crate) fn add(&mut self, template: BondTemplate, overwrite: bool) -> CatalogChange {
        if self.exists(template.id()) && !overwrite {
            return CatalogChange::Ignored;
        }
        self.update(template)
    }

    /// Insert a template, or overwrite every field of an existing one while
    /// keeping its position.
    pub(crate) fn update(&mut self, template: BondTemplate) -> CatalogChange {
        match self.templates.iter_mut().find(|t| t.id() == template.id()) {
            Some(existing) => {
                *existing = template;
                CatalogChange::Updated
            }
            None => {
                self.templates.push(template);
                CatalogChange::Added
            }
        }
    }

    /// A snapshot of the catalog, in insertion order.
    pub fn list(&self) -> Vec<BondTemplate> {
        self.templates.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BondTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
