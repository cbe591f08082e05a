// Numeric series consumed by the plotting layer. The core supplies plain
// arrays; rendering happens elsewhere.
use crate::nucleus::Nucleus;

/// Parallel arrays of plot inputs for a batch of nuclides, in input order:
/// mass numbers, proton numbers, radii (fm) and binding energy per nucleon
/// (MeV).
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub a_values: Vec<f64>,
    pub z_values: Vec<f64>,
    pub radii: Vec<f64>,
    pub binding_per_nucleon: Vec<f64>,
}

impl PlotSeries {
    /// Evaluate the series for a batch of nuclides.
    pub fn from_nuclei(nuclei: &[Nucleus]) -> Self {
        PlotSeries {
            a_values: nuclei.iter().map(|n| n.mass_number as f64).collect(),
            z_values: nuclei.iter().map(|n| n.atomic_number as f64).collect(),
            radii: nuclei.iter().map(|n| n.radius()).collect(),
            binding_per_nucleon: nuclei
                .iter()
                .map(|n| n.binding_energy_per_nucleon())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.a_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a_values.is_empty()
    }

    /// (A, radius) points for the radius-vs-mass-number plot.
    pub fn radius_points(&self) -> Vec<(f64, f64)> {
        self.a_values
            .iter()
            .copied()
            .zip(self.radii.iter().copied())
            .collect()
    }

    /// (Z, B/A) points for the binding-energy-per-nucleon-vs-Z plot.
    pub fn binding_points(&self) -> Vec<(f64, f64)> {
        self.z_values
            .iter()
            .copied()
            .zip(self.binding_per_nucleon.iter().copied())
            .collect()
    }
}
