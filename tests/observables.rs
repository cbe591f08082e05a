// End-to-end checks of the computed observables for the built-in sample
// nuclides, plus the monotonicity properties of the formula.

use semf::{report_all, sample_nuclei, Nucleus, PairingClass, PlotSeries};

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{}: expected {} within {}, got {}",
        what,
        expected,
        tol,
        actual
    );
}

#[test]
fn test_sample_set_known_values() {
    let reports = report_all(&sample_nuclei());
    assert_eq!(reports.len(), 5);

    let u238 = &reports[0];
    assert_close(u238.binding_energy_mev, 1803.643813, 1e-4, "U-238 B");
    assert_close(u238.mass_u, 237.99823375, 1e-6, "U-238 M");
    assert_close(u238.radius_fm, 7.436585, 1e-4, "U-238 R");
    assert!(!u238.beta_stable);
    assert!(u238.can_split_even_even);

    let pu239 = &reports[1];
    assert_close(pu239.binding_energy_mev, 1808.469887, 1e-4, "Pu-239 B");
    assert_close(pu239.mass_u, 238.99894079, 1e-6, "Pu-239 M");
    assert_close(pu239.radius_fm, 7.446986, 1e-4, "Pu-239 R");
    assert!(!pu239.can_split_even_even);

    let cf252 = &reports[2];
    assert_close(cf252.binding_energy_mev, 1883.027788, 1e-4, "Cf-252 B");
    assert_close(cf252.mass_u, 252.02599022, 1e-6, "Cf-252 M");
    assert_close(cf252.radius_fm, 7.579632, 1e-4, "Cf-252 R");
    assert!(!cf252.beta_stable);

    let te135 = &reports[4];
    assert_close(te135.binding_energy_mev, 1114.343286, 1e-4, "Te-135 B");
    assert!(!te135.can_split_even_even);
}

#[test]
fn test_pairing_classification_across_sample() {
    assert_eq!(
        Nucleus::new("U-238", 238, 92).pairing_class(),
        PairingClass::EvenEven
    );
    assert_eq!(
        Nucleus::new("Pu-239", 239, 94).pairing_class(),
        PairingClass::OddA
    );
    // Both A and Z odd
    assert_eq!(
        Nucleus::new("Li-7", 7, 3).pairing_class(),
        PairingClass::OddOdd
    );
}

#[test]
fn test_radius_monotone_across_series() {
    // Cube-root growth in A, regardless of Z.
    let mut ladder: Vec<Nucleus> = (10..260)
        .map(|a| Nucleus::new(format!("A{}", a), a, a / 2))
        .collect();
    ladder.sort_by_key(|n| n.mass_number);
    for pair in ladder.windows(2) {
        assert!(pair[1].radius() > pair[0].radius());
    }
}

#[test]
fn test_mass_monotone_at_fixed_a_over_z_ratio() {
    // A = 2Z ladder: adding nucleons always adds more rest mass than the
    // binding energy removes.
    let mut prev = Nucleus::new("start", 4, 2).mass();
    for z in 3..150u32 {
        let m = Nucleus::new("step", 2 * z, z).mass();
        assert!(m > prev, "mass not increasing at Z={}", z);
        prev = m;
    }
}

#[test]
fn test_plot_series_matches_reports() {
    let nuclei = sample_nuclei();
    let series = PlotSeries::from_nuclei(&nuclei);
    let reports = report_all(&nuclei);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(series.a_values[i], report.mass_number as f64);
        assert_eq!(series.z_values[i], report.atomic_number as f64);
        assert_eq!(series.radii[i].to_bits(), report.radius_fm.to_bits());
        assert_eq!(
            series.binding_per_nucleon[i].to_bits(),
            report.binding_energy_per_nucleon_mev.to_bits()
        );
    }
}
