mod constants;
mod data;
mod input;
mod nucleus;
mod plot;
mod report;
mod series;

pub use constants::{
    A1_VOLUME, A2_SURFACE, A3_COULOMB, A4_ASYMMETRY, MEV_PER_U, NEUTRON_MASS_U, PAIRING_MAGNITUDE,
    PROTON_MASS_U, R0_FM,
};
pub use data::{sample_nuclei, SAMPLE_BY_NAME, SAMPLE_NUCLIDES};
pub use input::{read_nuclei_from_json, InputError};
pub use nucleus::{Nucleus, PairingClass};
pub use plot::{plot_binding_per_nucleon_vs_z, plot_radius_vs_mass_number};
pub use report::{report_all, NucleusReport};
pub use series::PlotSeries;
