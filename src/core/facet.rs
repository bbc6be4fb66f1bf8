use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DrillDownError, DrillDownResult};

/// A named, user-toggleable categorical filter dimension.
///
/// `all` mirrors "every value selected" and is recomputed by every mutating
/// method and on deserialization; an incoming `all` flag is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFilterFacet")]
pub struct FilterFacet {
    values: IndexMap<String, bool>,
    all: bool,
    pub expanded: bool,
}

#[derive(Deserialize)]
struct RawFilterFacet {
    #[serde(default)]
    values: IndexMap<String, bool>,
    #[serde(default)]
    expanded: bool,
}

impl From<RawFilterFacet> for FilterFacet {
    fn from(raw: RawFilterFacet) -> Self {
        let mut facet = Self {
            values: raw.values,
            all: true,
            expanded: raw.expanded,
        };
        facet.recompute_all();
        facet
    }
}

impl FilterFacet {
    /// Creates a facet with every value selected.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = labels.into_iter().map(|l| (l.into(), true)).collect();
        let mut facet = Self {
            values,
            all: true,
            expanded: false,
        };
        facet.recompute_all();
        facet
    }

    #[must_use]
    pub fn all(&self) -> bool {
        self.all
    }

    #[must_use]
    pub fn values(&self) -> &IndexMap<String, bool> {
        &self.values
    }

    /// Selection state of one value, `None` when the facet has no such value.
    #[must_use]
    pub fn is_selected(&self, label: &str) -> Option<bool> {
        self.values.get(label).copied()
    }

    fn recompute_all(&mut self) {
        self.all = self.values.values().all(|selected| *selected);
    }

    pub fn set_value(&mut self, label: &str, selected: bool) -> DrillDownResult<()> {
        let slot = self.values.get_mut(label).ok_or_else(|| {
            DrillDownError::InvalidData(format!("facet has no value named `{label}`"))
        })?;
        *slot = selected;
        self.recompute_all();
        Ok(())
    }

    /// Selects or clears every value at once. Collapses the value list.
    pub fn set_all(&mut self, selected: bool) {
        for value in self.values.values_mut() {
            *value = selected;
        }
        self.expanded = false;
        self.recompute_all();
    }

    /// Selects exactly the given labels and clears every sibling.
    pub fn select_only<S: AsRef<str>>(&mut self, labels: &[S]) {
        for (key, value) in &mut self.values {
            *value = labels.iter().any(|label| label.as_ref() == key);
        }
        self.recompute_all();
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.values.values().filter(|selected| **selected).count()
    }

    #[must_use]
    pub fn selected_labels(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(label, _)| label.as_str())
            .collect()
    }

    /// Whether the facet list is long enough to need a "show more" link.
    #[must_use]
    pub fn needs_show_more(&self, max_visible: usize) -> bool {
        self.selected_count() > max_visible
    }
}

/// Facets keyed by name in the order the data source announced them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterFacets(IndexMap<String, FilterFacet>);

impl FilterFacets {
    /// Builds facets from the available filter values, overlaying any saved
    /// selection. Saved values that are no longer available are dropped.
    #[must_use]
    pub fn from_available(
        available: &IndexMap<String, Vec<String>>,
        saved: Option<&IndexMap<String, IndexMap<String, bool>>>,
    ) -> Self {
        let mut facets = IndexMap::with_capacity(available.len());
        for (name, labels) in available {
            let mut facet = FilterFacet::new(labels.iter().cloned());
            if let Some(saved_values) = saved.and_then(|saved| saved.get(name)) {
                for (label, selected) in saved_values {
                    if let Some(slot) = facet.values.get_mut(label) {
                        *slot = *selected;
                    }
                }
                facet.recompute_all();
            }
            facets.insert(name.clone(), facet);
        }
        Self(facets)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterFacet> {
        self.0.get(name)
    }

    pub fn facet_mut(&mut self, name: &str) -> DrillDownResult<&mut FilterFacet> {
        self.0
            .get_mut(name)
            .ok_or_else(|| DrillDownError::UnknownFacet(name.to_owned()))
    }

    pub fn insert(&mut self, name: impl Into<String>, facet: FilterFacet) {
        self.0.insert(name.into(), facet);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterFacet)> {
        self.0.iter().map(|(name, facet)| (name.as_str(), facet))
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn collapse_all(&mut self) {
        for facet in self.0.values_mut() {
            facet.expanded = false;
        }
    }
}

impl FromIterator<(String, FilterFacet)> for FilterFacets {
    fn from_iter<T: IntoIterator<Item = (String, FilterFacet)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
