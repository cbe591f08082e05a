// Per-nuclide report: the textual output layer over the core observables.
use std::fmt;

use serde::Serialize;

use crate::nucleus::Nucleus;

/// Computed observables for one nuclide, ready for display or
/// serialization. Values are captured once at construction so a report is
/// a plain snapshot with no further computation behind it.
#[derive(Debug, Clone, Serialize)]
pub struct NucleusReport {
    pub name: String,
    pub mass_number: u32,
    pub atomic_number: u32,
    pub neutron_number: i64,
    pub binding_energy_mev: f64,
    pub binding_energy_per_nucleon_mev: f64,
    pub mass_u: f64,
    pub radius_fm: f64,
    pub beta_stable: bool,
    pub can_split_even_even: bool,
}

impl NucleusReport {
    /// Evaluate all observables for one nuclide.
    pub fn from_nucleus(nucleus: &Nucleus) -> Self {
        NucleusReport {
            name: nucleus.name.clone(),
            mass_number: nucleus.mass_number,
            atomic_number: nucleus.atomic_number,
            neutron_number: nucleus.neutron_number(),
            binding_energy_mev: nucleus.binding_energy(),
            binding_energy_per_nucleon_mev: nucleus.binding_energy_per_nucleon(),
            mass_u: nucleus.mass(),
            radius_fm: nucleus.radius(),
            beta_stable: nucleus.is_beta_stable(),
            can_split_even_even: nucleus.can_split_even_even(),
        }
    }
}

impl fmt::Display for NucleusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "   Binding Energy (MeV): {:.4}", self.binding_energy_mev)?;
        writeln!(
            f,
            "   Binding Energy per Nucleon (MeV): {:.4}",
            self.binding_energy_per_nucleon_mev
        )?;
        writeln!(f, "   Mass (atomic mass units): {:.5}", self.mass_u)?;
        writeln!(f, "   Radius (fm): {:.4}", self.radius_fm)?;
        writeln!(f, "   Stable: {}", self.beta_stable)?;
        write!(f, "   Can Split Even-Even: {}", self.can_split_even_even)
    }
}

/// Build reports for a batch of nuclides, preserving input order.
pub fn report_all(nuclei: &[Nucleus]) -> Vec<NucleusReport> {
    nuclei.iter().map(NucleusReport::from_nucleus).collect()
}
