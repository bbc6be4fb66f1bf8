use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DrillDownError, DrillDownResult};

/// A single numeric cell of a chart series.
///
/// Dashboard payloads carry values as numbers, numeric strings or `null`.
/// Anything that does not parse to a finite number is kept as an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataValue(Option<f64>);

impl DataValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(Some(value))
        } else {
            Self(None)
        }
    }

    #[must_use]
    pub fn null() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn get(self) -> Option<f64> {
        self.0
    }

    /// Numeric value with empty cells read as zero.
    #[must_use]
    pub fn as_f64_or_zero(self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_nonzero(self) -> bool {
        matches!(self.0, Some(value) if value != 0.0)
    }

    fn parse_text(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map_or_else(|_| Self::null(), Self::new)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Option<f64>> for DataValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or_else(Self::null, Self::new)
    }
}

impl Serialize for DataValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DataValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawValue {
            Number(f64),
            Text(String),
        }

        Ok(match Option::<RawValue>::deserialize(deserializer)? {
            Some(RawValue::Number(value)) => Self::new(value),
            Some(RawValue::Text(text)) => Self::parse_text(&text),
            None => Self::null(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(default)]
    pub value: DataValue,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(value: impl Into<DataValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn null() -> Self {
        Self {
            value: DataValue::null(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
}

impl Category {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// One named line/bar of data across the shared category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(rename = "seriesname", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data: Vec<SeriesPoint>,
}

impl ChartSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: Some(name.into()),
            data: values.into_iter().map(SeriesPoint::new).collect(),
        }
    }

    /// Unnamed two-point series rendered in place of an empty chart.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: None,
            data: vec![SeriesPoint::null(), SeriesPoint::null()],
        }
    }

    #[must_use]
    pub fn has_nonzero_value(&self) -> bool {
        self.data.iter().any(|point| point.value.is_nonzero())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WireCategories", into = "WireCategories")]
pub struct CategoryAxis(pub Vec<Category>);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireCategories(Vec<WireCategoryGroup>);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireCategoryGroup {
    #[serde(default)]
    category: Vec<Category>,
}

impl From<WireCategories> for CategoryAxis {
    fn from(wire: WireCategories) -> Self {
        // Only the first category group drives the shared axis.
        Self(
            wire.0
                .into_iter()
                .next()
                .map(|group| group.category)
                .unwrap_or_default(),
        )
    }
}

impl From<CategoryAxis> for WireCategories {
    fn from(axis: CategoryAxis) -> Self {
        Self(vec![WireCategoryGroup { category: axis.0 }])
    }
}

/// Ordered series sharing one category axis.
///
/// Every series is expected to carry exactly one value per category; use
/// [`ChartDataset::validate`] before running any index-based transformation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default)]
    pub categories: CategoryAxis,
    #[serde(rename = "dataset", default)]
    pub series: Vec<ChartSeries>,
}

impl ChartDataset {
    #[must_use]
    pub fn new(categories: Vec<Category>, series: Vec<ChartSeries>) -> Self {
        Self {
            categories: CategoryAxis(categories),
            series,
        }
    }

    #[must_use]
    pub fn from_labels<I, S>(labels: I, series: Vec<ChartSeries>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(labels.into_iter().map(Category::new).collect(), series)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories.0
    }

    #[must_use]
    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.0.iter().map(|c| c.label.as_str()).collect()
    }

    #[must_use]
    pub fn series_names(&self) -> Vec<Option<&str>> {
        self.series.iter().map(|s| s.name.as_deref()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// True when the only series is the empty-chart placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.series.as_slice(), [only] if *only == ChartSeries::placeholder())
    }

    pub fn validate(&self) -> DrillDownResult<()> {
        let expected = self.categories.0.len();
        for (index, series) in self.series.iter().enumerate() {
            if series.data.len() != expected {
                return Err(DrillDownError::InvariantViolation {
                    series: index,
                    expected,
                    actual: series.data.len(),
                });
            }
        }
        Ok(())
    }

    /// Keeps only the category indices for which `keep` is true, in every
    /// series and in the category axis.
    pub(crate) fn retain_indices(&mut self, keep: &[bool]) {
        let mut index = 0;
        self.categories.0.retain(|_| {
            let kept = keep.get(index).copied().unwrap_or(false);
            index += 1;
            kept
        });
        for series in &mut self.series {
            let mut index = 0;
            series.data.retain(|_| {
                let kept = keep.get(index).copied().unwrap_or(false);
                index += 1;
                kept
            });
        }
    }

    pub fn to_json_pretty(&self) -> DrillDownResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DrillDownError::InvalidData(format!("failed to serialize chart dataset: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> DrillDownResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DrillDownError::InvalidData(format!("failed to parse chart dataset json: {e}"))
        })
    }
}
