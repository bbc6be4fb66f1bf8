use indexmap::IndexMap;
use tracing::warn;

use crate::core::ChartSeries;
use crate::error::DrillDownResult;

/// Lookup key used to label unnamed series.
pub const BLANK_LABEL_KEY: &str = "blank";

const CUSTOM_FIELD_PREFIX_LEN: usize = "custom_".len();

/// Maps a label key to display text.
///
/// A miss must return the key unchanged; `Err` is reserved for a lookup
/// backend that genuinely failed.
pub trait TranslationLookup {
    fn translate(&self, key: &str) -> DrillDownResult<String>;
}

/// In-memory translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: IndexMap<String, String>,
}

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl TranslationLookup for TranslationTable {
    fn translate(&self, key: &str) -> DrillDownResult<String> {
        Ok(self
            .entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned()))
    }
}

impl<F> TranslationLookup for F
where
    F: Fn(&str) -> DrillDownResult<String>,
{
    fn translate(&self, key: &str) -> DrillDownResult<String> {
        self(key)
    }
}

/// Replaces series names with their translated legend labels.
///
/// Names are looked up lowercased and replaced only when the lookup returns
/// something different. Unnamed series get the `blank_key` translation.
/// A failing lookup leaves every name untouched.
pub fn translate_legends(
    series: &mut [ChartSeries],
    lookup: &dyn TranslationLookup,
    blank_key: &str,
) -> DrillDownResult<()> {
    let mut renamed = Vec::with_capacity(series.len());
    for item in series.iter() {
        let label = match item.name.as_deref() {
            Some(name) => {
                let key = name.to_lowercase();
                let translated = lookup.translate(&key)?;
                if translated == key {
                    name.to_owned()
                } else {
                    translated
                }
            }
            None => lookup.translate(blank_key)?,
        };
        renamed.push(label);
    }

    for (item, label) in series.iter_mut().zip(renamed) {
        item.name = Some(label);
    }
    Ok(())
}

/// Like [`translate_legends`] but logs and swallows lookup failures.
pub fn translate_legends_or_keep(
    series: &mut [ChartSeries],
    lookup: &dyn TranslationLookup,
    blank_key: &str,
) {
    if let Err(err) = translate_legends(series, lookup, blank_key) {
        warn!(error = %err, "keeping untranslated legend labels");
    }
}

/// Human-readable facet name. `custom_*` facets are user-defined fields and
/// are shown verbatim with underscores as spaces.
pub fn filter_display_name(
    facet_name: &str,
    lookup: &dyn TranslationLookup,
) -> DrillDownResult<String> {
    if !facet_name.starts_with("custom") {
        return lookup.translate(facet_name);
    }
    let field = strip_prefix_ignore_case(facet_name, "custom_").unwrap_or(facet_name);
    Ok(field.replace('_', " "))
}

/// Custom field names announced by the available filters, without their
/// `custom_` prefix.
#[must_use]
pub fn custom_field_names<'a, I>(facet_names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    facet_names
        .into_iter()
        .filter(|name| name.starts_with("custom"))
        .map(|name| name.get(CUSTOM_FIELD_PREFIX_LEN..).unwrap_or_default().to_owned())
        .collect()
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}
