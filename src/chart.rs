//! The `render(samples) -> chart` seam: overlaid density histograms as a
//! serializable spec. The dashboard template consumes this JSON directly.

use serde::{Deserialize, Serialize};

use crate::games::Panel;
use crate::logging;
use crate::samples::SampleSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    /// Raw observation count, for tooltips and tallies.
    pub n: usize,
    /// Weighted count per bin.
    pub counts: Vec<f64>,
    /// Normalized so each series integrates to 1 over the shared domain.
    pub densities: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `bin_edges.len() == bins + 1`; empty when no set had data.
    pub bin_edges: Vec<f64>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    pub fn bins(&self) -> usize {
        self.bin_edges.len().saturating_sub(1)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Bin width from the 1/2/2.5/5 ladder such that the span needs at most
/// `max_bins` bins.
fn nice_width(span: f64, max_bins: usize) -> f64 {
    let raw = span / max_bins.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    for mult in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let width = mult * mag;
        if span / width <= max_bins as f64 {
            return width;
        }
    }
    10.0 * mag
}

fn domain(sets: &[SampleSet]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for set in sets {
        if let (Some(min), Some(max)) = (set.min(), set.max()) {
            lo = lo.min(min);
            hi = hi.max(max);
        }
    }
    if lo.is_finite() && hi.is_finite() {
        Some((lo, hi))
    } else {
        None
    }
}

/// Shared equal-width binning across every set of a panel, then per-set
/// weighted counts and densities (density = weighted count / (total weight
/// × bin width)).
pub fn histogram(panel: &Panel, max_bins: usize) -> ChartSpec {
    let mut spec = ChartSpec {
        title: panel.title.clone(),
        x_label: panel.x_label.clone(),
        y_label: "Density".to_string(),
        bin_edges: Vec::new(),
        series: Vec::new(),
    };

    let (edges, width) = match domain(&panel.sets) {
        Some((lo, hi)) if hi > lo => {
            let width = nice_width(hi - lo, max_bins);
            let start = (lo / width).floor() * width;
            let bins = (((hi - start) / width).ceil() as usize).max(1);
            let edges: Vec<f64> = (0..=bins).map(|i| start + i as f64 * width).collect();
            (edges, width)
        }
        // all observed values identical: one unit-width bin centered on them
        Some((v, _)) => (vec![v - 0.5, v + 0.5], 1.0),
        None => {
            for set in &panel.sets {
                spec.series.push(ChartSeries {
                    label: set.cohort.as_str().to_string(),
                    n: 0,
                    counts: Vec::new(),
                    densities: Vec::new(),
                });
            }
            return spec;
        }
    };

    let bins = edges.len() - 1;
    let start = edges[0];
    for set in &panel.sets {
        let mut counts = vec![0.0f64; bins];
        for s in &set.samples {
            let idx = (((s.value - start) / width).floor() as usize).min(bins - 1);
            counts[idx] += s.weight;
        }
        let total = set.total_weight();
        let densities = counts
            .iter()
            .map(|c| if total > 0.0 { c / (total * width) } else { 0.0 })
            .collect();
        spec.series.push(ChartSeries {
            label: set.cohort.as_str().to_string(),
            n: set.len(),
            counts,
            densities,
        });
    }

    spec.bin_edges = edges;
    logging::log_chart(&spec.title, spec.bins(), spec.series.len());
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::Cohort;

    fn panel(sets: Vec<SampleSet>) -> Panel {
        Panel::new("t", "x", sets)
    }

    #[test]
    fn nice_width_respects_max_bins() {
        for span in [1.0, 7.0, 100.0, 250.0, 12345.0] {
            for max_bins in [5usize, 20, 50] {
                let w = nice_width(span, max_bins);
                assert!(span / w <= max_bins as f64, "span={} bins={}", span, max_bins);
            }
        }
    }

    #[test]
    fn densities_integrate_to_one() {
        let p = panel(vec![
            SampleSet::from_values(Cohort::Human, vec![0.0, 10.0, 50.0, 50.0, 100.0]),
            SampleSet::from_values(Cohort::Gpt4, vec![50.0, 50.0, 60.0]),
        ]);
        let spec = histogram(&p, 20);
        let width = spec.bin_edges[1] - spec.bin_edges[0];
        for series in &spec.series {
            let area: f64 = series.densities.iter().map(|d| d * width).sum();
            assert!((area - 1.0).abs() < 1e-9, "area={}", area);
        }
    }

    #[test]
    fn sets_share_the_domain() {
        let p = panel(vec![
            SampleSet::from_values(Cohort::Human, vec![0.0, 100.0]),
            SampleSet::from_values(Cohort::Gpt4, vec![50.0]),
        ]);
        let spec = histogram(&p, 20);
        assert!(spec.bins() <= 20);
        assert_eq!(spec.series[0].counts.len(), spec.series[1].counts.len());
        assert!(*spec.bin_edges.first().unwrap() <= 0.0);
        assert!(*spec.bin_edges.last().unwrap() >= 100.0);
    }

    #[test]
    fn max_value_lands_in_last_bin() {
        let p = panel(vec![SampleSet::from_values(
            Cohort::Human,
            vec![0.0, 100.0],
        )]);
        let spec = histogram(&p, 20);
        let counts = &spec.series[0].counts;
        assert_eq!(*counts.last().unwrap(), 1.0);
        assert_eq!(counts.iter().sum::<f64>(), 2.0);
    }

    #[test]
    fn degenerate_domain_gets_single_bin() {
        let p = panel(vec![SampleSet::from_values(
            Cohort::Human,
            vec![50.0, 50.0, 50.0],
        )]);
        let spec = histogram(&p, 20);
        assert_eq!(spec.bins(), 1);
        assert_eq!(spec.series[0].densities, vec![1.0]);
    }

    #[test]
    fn empty_panel_yields_empty_series() {
        let p = panel(vec![SampleSet::from_values(
            Cohort::Human,
            std::iter::empty(),
        )]);
        let spec = histogram(&p, 20);
        assert!(spec.bin_edges.is_empty());
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].n, 0);
    }

    #[test]
    fn weights_shift_density_mass() {
        let p = panel(vec![SampleSet::from_weighted(
            Cohort::Human,
            vec![0.0, 100.0],
            vec![3.0, 1.0],
        )]);
        let spec = histogram(&p, 20);
        let counts = &spec.series[0].counts;
        assert_eq!(*counts.first().unwrap(), 3.0);
        assert_eq!(*counts.last().unwrap(), 1.0);
    }
}
