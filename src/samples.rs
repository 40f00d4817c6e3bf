//! The uniform (value, label) table every game pipeline reshapes into.

use serde::{Deserialize, Serialize};

/// Who made the choices in a sample set. The string form doubles as the
/// chart legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cohort {
    Human,
    Gpt4,
    Gpt3,
}

impl Cohort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cohort::Human => "Human",
            Cohort::Gpt4 => "ChatGPT-4",
            Cohort::Gpt3 => "ChatGPT-3",
        }
    }

    pub fn all() -> [Cohort; 3] {
        [Cohort::Human, Cohort::Gpt4, Cohort::Gpt3]
    }
}

impl std::fmt::Display for Cohort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation. Weight defaults to 1.0; Bomb Risk human samples carry
/// inverse-probability weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub value: f64,
    pub weight: f64,
}

impl Sample {
    pub fn unit(value: f64) -> Self {
        Self { value, weight: 1.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSet {
    pub cohort: Cohort,
    pub samples: Vec<Sample>,
}

impl SampleSet {
    pub fn from_values(cohort: Cohort, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            cohort,
            samples: values
                .into_iter()
                .filter(|v| v.is_finite())
                .map(Sample::unit)
                .collect(),
        }
    }

    /// Values paired with weights; pairs are truncated to the shorter side.
    pub fn from_weighted(
        cohort: Cohort,
        values: impl IntoIterator<Item = f64>,
        weights: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            cohort,
            samples: values
                .into_iter()
                .zip(weights)
                .filter(|(v, w)| v.is_finite() && w.is_finite())
                .map(|(value, weight)| Sample { value, weight })
                .collect(),
        }
    }

    /// Captured tables with refusal entries model them as `None`; those are
    /// dropped here.
    pub fn from_optional(cohort: Cohort, values: &[Option<f64>]) -> Self {
        Self::from_values(cohort, values.iter().copied().flatten())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.samples.iter().map(|s| s.weight).sum()
    }

    pub fn min(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.value)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
    }

    pub fn max(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.value)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    /// Weighted mean; 0.0 for an empty set.
    pub fn mean(&self) -> f64 {
        let w = self.total_weight();
        if w <= 0.0 {
            return 0.0;
        }
        self.samples.iter().map(|s| s.value * s.weight).sum::<f64>() / w
    }
}
