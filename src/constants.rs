// Physical constants for the semi-empirical mass formula.
// All values are fixed at compile time; there is no runtime configuration.

/// Volume term coefficient a1 (MeV).
pub const A1_VOLUME: f64 = 15.75;

/// Surface term coefficient a2 (MeV).
pub const A2_SURFACE: f64 = 17.8;

/// Coulomb term coefficient a3 (MeV).
pub const A3_COULOMB: f64 = 0.711;

/// Asymmetry term coefficient a4 (MeV).
pub const A4_ASYMMETRY: f64 = 23.7;

/// Magnitude of the pairing correction δ (MeV). The sign depends on the
/// parity of A and Z, see [`crate::nucleus::PairingClass`].
pub const PAIRING_MAGNITUDE: f64 = 12.0;

/// Nuclear radius constant r0 (fm), for R = r0 * A^(1/3).
pub const R0_FM: f64 = 1.2;

/// Proton mass in atomic mass units.
pub const PROTON_MASS_U: f64 = 1.007276466812;

/// Neutron mass in atomic mass units.
pub const NEUTRON_MASS_U: f64 = 1.00866491588;

/// Conversion factor between MeV and atomic mass units.
pub const MEV_PER_U: f64 = 931.5;
