use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

const SEPARATOR: &str = ", ";

/// Ordered color tokens, index-aligned to the series of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteColors(Vec<String>);

impl PaletteColors {
    #[must_use]
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(colors.into_iter().map(Into::into).collect())
    }

    /// Parses the `", "`-joined wire form. Blank tokens are skipped.
    #[must_use]
    pub fn from_joined(joined: &str) -> Self {
        Self(
            joined
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    #[must_use]
    pub fn to_joined(&self) -> String {
        self.0.join(SEPARATOR)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy without the colors at `removed` (indices into the
    /// palette before any removal).
    ///
    /// Indices are applied in ascending order; the `m`-th removal of original
    /// index `k` deletes the current position `k - m`. Indices beyond the
    /// palette are ignored.
    #[must_use]
    pub fn pruned(&self, removed: &[usize]) -> Self {
        let mut indices: SmallVec<[usize; 8]> = removed.iter().copied().collect();
        indices.sort_unstable();
        indices.dedup();

        let mut colors = self.0.clone();
        for (already_removed, original_index) in indices.into_iter().enumerate() {
            let position = original_index - already_removed;
            if position < colors.len() {
                colors.remove(position);
            }
        }
        Self(colors)
    }
}

impl Serialize for PaletteColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_joined())
    }
}

impl<'de> Deserialize<'de> for PaletteColors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let joined = String::deserialize(deserializer)?;
        Ok(Self::from_joined(&joined))
    }
}
