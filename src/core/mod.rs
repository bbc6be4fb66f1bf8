pub mod facet;
pub mod highest;
pub mod legend;
pub mod palette;
pub mod series_filter;
pub mod suppression;
pub mod types;

pub use facet::{FilterFacet, FilterFacets};
pub use highest::{HighestIsolation, isolate_highest};
pub use legend::{
    BLANK_LABEL_KEY, TranslationLookup, TranslationTable, custom_field_names,
    filter_display_name, translate_legends, translate_legends_or_keep,
};
pub use palette::PaletteColors;
pub use series_filter::{restrict_series, strip_custom_prefixes};
pub use suppression::{Suppression, suppress_empty};
pub use types::{Category, CategoryAxis, ChartDataset, ChartSeries, DataValue, SeriesPoint};
