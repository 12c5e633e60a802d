use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use forelule::ForelUle;
use forelule::config::Config;
use forelule::lut::{analytic, load_cmf_table, load_fu_angle_table};
use forelule::readers::create_reader;
use forelule::utils::{print_class_statistics, write_class_raster};

/// Classifies reflectance spectra on the Forel-Ule water-color scale.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, default_value = "./data/config/fui_config.json")]
    config: PathBuf,

    /// Print debug information; repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = Config::from_file(&args.config)?;

    if let Some(threads) = config.threads() {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        debug!(threads, "configured thread pool");
    }

    let angles = load_fu_angle_table(config.fu_table())?;
    let cmf = match config.cmf_table() {
        Some(path) => load_cmf_table(path)?,
        None => {
            info!("no cmf_table configured, using the analytic CIE 1931 functions");
            analytic::cie1931_default()?
        }
    };

    let reader = create_reader(config.input().to_string_lossy().to_string())?;
    let mut data = reader.read_data()?;
    if let Some(nodata) = config.nodata() {
        data.mask_nodata(nodata);
    }
    debug!("input data\n{}", data);

    let spectrum = data.into_spectrum(config.wavelengths())?;
    info!(%spectrum, "classifying");

    let classes = ForelUle::new(cmf, angles).classify(&spectrum)?;
    print_class_statistics(&classes);

    if let Some(output) = config.output() {
        write_class_raster(output, &classes)?;
        info!(path = %output.display(), "wrote Forel-Ule classes");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if !args.quiet {
        let filter = match args.verbose {
            0 => tracing::level_filters::LevelFilter::INFO,
            1 => tracing::level_filters::LevelFilter::DEBUG,
            2.. => tracing::level_filters::LevelFilter::TRACE,
        };
        let env_filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(filter.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .init();
    }

    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
