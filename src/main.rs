use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use semf::{
    plot_binding_per_nucleon_vs_z, plot_radius_vs_mass_number, read_nuclei_from_json, report_all,
    sample_nuclei, PlotSeries,
};

/// Semi-empirical mass formula calculator: per-nuclide report plus radius
/// and binding-energy plots.
#[derive(Debug, Parser)]
#[command(name = "semf", version, about)]
struct Cli {
    /// JSON file with an array of {name, mass_number, atomic_number}
    /// records. Defaults to the built-in sample set.
    #[arg(long)]
    nuclei: Option<PathBuf>,

    /// Directory the plot PNG files are written to.
    #[arg(long, default_value = ".")]
    plot_dir: PathBuf,

    /// Skip writing the plot files.
    #[arg(long)]
    no_plots: bool,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let nuclei = match &cli.nuclei {
        Some(path) => {
            tracing::info!("Reading nuclide table from {}", path.display());
            read_nuclei_from_json(path)?
        }
        None => {
            tracing::debug!("No nuclide file given, using built-in sample set");
            sample_nuclei()
        }
    };
    tracing::info!("Evaluating {} nuclides", nuclei.len());

    let reports = report_all(&nuclei);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report);
        }
    }

    if !cli.no_plots {
        let series = PlotSeries::from_nuclei(&nuclei);
        let radius_path = cli.plot_dir.join("radius_vs_mass_number.png");
        plot_radius_vs_mass_number(&series, &radius_path)?;
        tracing::info!("Wrote {}", radius_path.display());

        let binding_path = cli.plot_dir.join("binding_energy_per_nucleon.png");
        plot_binding_per_nucleon_vs_z(&series, &binding_path)?;
        tracing::info!("Wrote {}", binding_path.display());
    }

    Ok(())
}
