// Built-in sample nuclide table.
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::nucleus::Nucleus;

/// Built-in sample set of nuclides as (name, mass number A, atomic number Z),
/// in display order.
pub static SAMPLE_NUCLIDES: &[(&str, u32, u32)] = &[
    ("U-238", 238, 92),
    ("Pu-239", 239, 94),
    ("Cf-252", 252, 98),
    ("Pu-238", 238, 94),
    ("Te-135", 135, 52),
];

/// Map from nuclide name to its (A, Z) pair, derived from
/// [`SAMPLE_NUCLIDES`] so the two can never disagree.
pub static SAMPLE_BY_NAME: Lazy<HashMap<&'static str, (u32, u32)>> = Lazy::new(|| {
    SAMPLE_NUCLIDES
        .iter()
        .map(|&(name, a, z)| (name, (a, z)))
        .collect()
});

/// Construct [`Nucleus`] values for the built-in sample set, preserving
/// table order.
pub fn sample_nuclei() -> Vec<Nucleus> {
    SAMPLE_NUCLIDES
        .iter()
        .map(|&(name, a, z)| Nucleus::new(name, a, z))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_table_order_preserved() {
        let nuclei = sample_nuclei();
        assert_eq!(nuclei.len(), 5);
        assert_eq!(nuclei[0].name, "U-238");
        assert_eq!(nuclei[4].name, "Te-135");
    }

    #[test]
    fn test_sample_lookup_by_name() {
        assert_eq!(SAMPLE_BY_NAME.get("Cf-252"), Some(&(252, 98)));
        assert_eq!(SAMPLE_BY_NAME.get("Xe-135"), None);
    }
}
