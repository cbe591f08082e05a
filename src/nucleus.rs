// Core value object: a nuclide identified by (name, A, Z) with pure
// computed observables from the Weizsäcker semi-empirical mass formula.
use serde::{Deserialize, Serialize};

use crate::constants::{
    A1_VOLUME, A2_SURFACE, A3_COULOMB, A4_ASYMMETRY, MEV_PER_U, NEUTRON_MASS_U, PAIRING_MAGNITUDE,
    PROTON_MASS_U, R0_FM,
};

/// Parity classification of (A, Z) used to select the pairing term δ.
///
/// Classification order matters and is checked in this sequence: even A
/// with even Z first, then odd A with odd Z, everything else is treated as
/// mixed parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingClass {
    /// A even and Z even, δ = +12 MeV.
    EvenEven,
    /// A odd and Z odd, δ = -12 MeV.
    OddOdd,
    /// Mixed parity (one of Z/N odd, the other even), δ = 0.
    OddA,
}

impl PairingClass {
    /// Pairing term δ in MeV for this class.
    pub fn delta(self) -> f64 {
        match self {
            PairingClass::EvenEven => PAIRING_MAGNITUDE,
            PairingClass::OddOdd => -PAIRING_MAGNITUDE,
            PairingClass::OddA => 0.0,
        }
    }
}

/// A single nuclide and its derived observables.
///
/// Immutable after construction: `mass_number` (A) and `atomic_number` (Z)
/// are fixed and the neutron number N = A - Z is always derived, never
/// stored independently. All observables are pure functions of (A, Z); the
/// name is a label only and takes no part in any computation.
///
/// Inputs are not validated. A = 0 propagates as NaN through the IEEE
/// arithmetic rather than panicking, and Z > A shows up as a large
/// asymmetry penalty from the negative neutron count. Misuse is surfaced
/// to the caller, not masked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nucleus {
    /// Identifying label (e.g. "U-238").
    pub name: String,
    /// Mass number A (protons + neutrons).
    pub mass_number: u32,
    /// Atomic (proton) number Z.
    pub atomic_number: u32,
}

impl Nucleus {
    /// Create a nuclide from its label, mass number A and atomic number Z.
    pub fn new(name: impl Into<String>, mass_number: u32, atomic_number: u32) -> Self {
        Nucleus {
            name: name.into(),
            mass_number,
            atomic_number,
        }
    }

    /// Neutron number N = A - Z. Signed so that Z > A yields a visible
    /// negative count instead of wrapping.
    pub fn neutron_number(&self) -> i64 {
        self.mass_number as i64 - self.atomic_number as i64
    }

    /// Parity classification of (A, Z) selecting the pairing term.
    pub fn pairing_class(&self) -> PairingClass {
        if self.mass_number % 2 == 0 && self.atomic_number % 2 == 0 {
            PairingClass::EvenEven
        } else if self.mass_number % 2 == 1 && self.atomic_number % 2 == 1 {
            PairingClass::OddOdd
        } else {
            PairingClass::OddA
        }
    }

    /// Total binding energy in MeV from the semi-empirical mass formula:
    ///
    /// B = a1·A - a2·A^(2/3) - a3·Z²/A^(1/3) - a4·(A-2Z)²/A + δ·A^(-3/4)
    ///
    /// This is the total binding energy, not the per-nucleon value. The
    /// result may be negative or non-finite for nonphysical (A, Z); no
    /// validation is performed.
    pub fn binding_energy(&self) -> f64 {
        let a = self.mass_number as f64;
        let z = self.atomic_number as f64;
        let delta = self.pairing_class().delta();

        A1_VOLUME * a
            - A2_SURFACE * a.powf(2.0 / 3.0)
            - A3_COULOMB * z * z / a.powf(1.0 / 3.0)
            - A4_ASYMMETRY * (a - 2.0 * z).powi(2) / a
            + delta * a.powf(-0.75)
    }

    /// Binding energy per nucleon, B/A, in MeV.
    pub fn binding_energy_per_nucleon(&self) -> f64 {
        self.binding_energy() / self.mass_number as f64
    }

    /// Atomic mass in atomic mass units:
    ///
    /// M = Z·m_p + (A-Z)·m_n - B/931.5
    pub fn mass(&self) -> f64 {
        let z = self.atomic_number as f64;
        let n = self.neutron_number() as f64;
        z * PROTON_MASS_U + n * NEUTRON_MASS_U - self.binding_energy() / MEV_PER_U
    }

    /// Nuclear radius R = r0·A^(1/3) in femtometers. Independent of Z.
    pub fn radius(&self) -> f64 {
        R0_FM * (self.mass_number as f64).powf(1.0 / 3.0)
    }

    /// Coarse beta-stability heuristic: true iff N <= Z + 1.
    ///
    /// This is a rule of thumb, not a lookup in a physical stability
    /// table. Heavy nuclides with large neutron excess are always reported
    /// unstable even when they are long-lived in practice.
    pub fn is_beta_stable(&self) -> bool {
        self.neutron_number() <= self.atomic_number as i64 + 1
    }

    /// Even-even split heuristic: true iff A is even.
    ///
    /// A necessary-but-not-sufficient proxy for "can split into two
    /// even-even fragments". Only the parity of A is inspected; Z parity
    /// is ignored and no actual even-even partition is verified.
    pub fn can_split_even_even(&self) -> bool {
        self.mass_number % 2 == 0
    }
}
