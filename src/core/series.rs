use serde::{Deserialize, Serialize};

/// One bar: a category label and its numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered bar data, left to right.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    bars: Vec<BarDatum>,
}

impl Series {
    #[must_use]
    pub fn new(bars: Vec<BarDatum>) -> Self {
        Self { bars }
    }

    /// Pairs values with labels index-for-index.
    ///
    /// Values drive the bar count. Missing labels render blank and surplus
    /// labels are ignored.
    #[must_use]
    pub fn from_values_and_labels<S: AsRef<str>>(values: &[f64], labels: &[S]) -> Self {
        let bars = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let label: &str = labels.get(index).map_or("", |label| label.as_ref());
                BarDatum::new(label, value)
            })
            .collect();
        Self { bars }
    }

    #[must_use]
    pub fn bars(&self) -> &[BarDatum] {
        &self.bars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|bar| bar.value)
    }
}
