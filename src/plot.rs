// Plot rendering over PlotSeries, delegating entirely to plotters.
use std::path::Path;

use plotters::prelude::*;

use crate::series::PlotSeries;

/// Axis padding fraction applied around the data range.
const RANGE_PAD: f64 = 0.05;

fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(1e-9);
    (min - span * RANGE_PAD, max + span * RANGE_PAD)
}

fn draw_line_with_points<P: AsRef<Path>>(
    points: &[(f64, f64)],
    path: P,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let (x_min, x_max) = padded_range(&xs);
    let (y_min, y_max) = padded_range(&ys);

    let root = BitMapBackend::new(path.as_ref(), (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    // plotters draws line segments in point order; sort by x so the curve
    // reads left to right regardless of input order.
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    chart.draw_series(LineSeries::new(sorted.clone(), &BLUE))?;
    chart.draw_series(sorted.iter().map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())))?;

    root.present()?;
    Ok(())
}

/// Render radius (fm) against mass number A to a PNG file.
pub fn plot_radius_vs_mass_number<P: AsRef<Path>>(
    series: &PlotSeries,
    path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    draw_line_with_points(
        &series.radius_points(),
        path,
        "Nuclear radius vs mass number",
        "Mass number A",
        "Radius (fm)",
    )
}

/// Render binding energy per nucleon (MeV) against proton number Z to a
/// PNG file.
pub fn plot_binding_per_nucleon_vs_z<P: AsRef<Path>>(
    series: &PlotSeries,
    path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    draw_line_with_points(
        &series.binding_points(),
        path,
        "Binding energy per nucleon vs proton number",
        "Proton number Z",
        "Binding energy per nucleon (MeV)",
    )
}
