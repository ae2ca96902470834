use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use film_emulation::{CurveMode, FilmEmulator, ProfileSet, RunOverrides};
use filmsim::assets::{AssetCategory, AssetLoader};
use filmsim::models::AppConfig;
use filmsim::services::{ApplyJob, EmulationService};

#[derive(Parser)]
#[command(name = "filmsim")]
#[command(about = "Emulate analog film stocks on digital photographs")]
struct Cli {
    /// Log every pipeline stage
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply film profiles to an image, writing one JPEG per profile
    Apply {
        /// Input image
        input: PathBuf,

        /// Configuration file (default: FILMSIM_CONFIG or the embedded config)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Profile set JSON (default: FILMSIM_PROFILES, config or embedded stocks)
        #[arg(short, long)]
        profiles: Option<PathBuf>,

        /// Override chromatic aberration strength for every profile
        #[arg(long)]
        chroma: Option<f32>,

        /// Override blur radius for every profile
        #[arg(long)]
        blur: Option<f32>,

        /// Color temperature in Kelvin (6500 is neutral)
        #[arg(long)]
        color_temp: Option<f32>,

        /// Apply the cross-processing grade
        #[arg(long)]
        cross_process: bool,

        /// Curve selection: color, advanced, both or auto
        #[arg(long)]
        curve_mode: Option<CurveMode>,

        /// Add random light leaks
        #[arg(long)]
        light_leak: bool,

        /// Render profiles concurrently
        #[arg(long)]
        parallel: bool,

        /// Worker threads for --parallel
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Seed for reproducible grain and light leaks
        #[arg(long)]
        seed: Option<u64>,

        /// Only run this profile (name or id, may repeat)
        #[arg(long = "only", value_name = "NAME")]
        only: Vec<String>,

        /// Output directory (default: next to the input)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// JPEG quality, 1-100
        #[arg(short, long)]
        quality: Option<u8>,
    },
    /// List the profiles in a set and whether they validate
    List {
        /// Configuration file (default: FILMSIM_CONFIG or the embedded config)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Profile set JSON (default: FILMSIM_PROFILES, config or embedded stocks)
        #[arg(short, long)]
        profiles: Option<PathBuf>,
    },
    /// Extract the embedded profile set and config for customization
    Init {
        /// Extract profiles.json
        #[arg(long)]
        profiles: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Target directory for files without a configured path
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "filmsim=debug,film_emulation=debug"
    } else {
        "filmsim=info,film_emulation=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loader = AssetLoader::from_env();

    match cli.command {
        Commands::Apply {
            input,
            config: config_file,
            profiles,
            chroma,
            blur,
            color_temp,
            cross_process,
            curve_mode,
            light_leak,
            parallel,
            jobs,
            seed,
            only,
            output_dir,
            quality,
        } => {
            let loader = loader.config_file(config_file);
            let config = AppConfig::load_from_assets(&loader);
            let loader = loader
                .profiles_file(config.profiles.clone())
                .profiles_file(profiles);

            let mut overrides = RunOverrides::default()
                .color_temp(color_temp.unwrap_or(config.color_temp))
                .cross_process(cross_process)
                .curve_mode(curve_mode.unwrap_or(config.curve_mode))
                .light_leak(light_leak);
            if let Some(strength) = chroma {
                overrides = overrides.chroma(strength);
            }
            if let Some(radius) = blur {
                overrides = overrides.blur(radius);
            }
            if let Some(seed) = seed.or(config.seed) {
                overrides = overrides.seed(seed);
            }

            let mut emulator =
                FilmEmulator::with_overrides(overrides).parallel(parallel || config.parallel);
            if let Some(jobs) = jobs.or(config.jobs) {
                emulator = emulator.jobs(jobs);
            }

            let job = ApplyJob::new(input)
                .output_dir(output_dir.or(config.output_dir))
                .quality(quality.unwrap_or(config.jpeg_quality))
                .only(only);

            run_apply_command(&loader, EmulationService::new(emulator), &job)
        }
        Commands::List {
            config: config_file,
            profiles,
        } => {
            let loader = loader.config_file(config_file);
            let config = AppConfig::load_from_assets(&loader);
            let loader = loader
                .profiles_file(config.profiles)
                .profiles_file(profiles);
            run_list_command(&loader)
        }
        Commands::Init {
            profiles,
            config,
            dir,
            force,
            list,
        } => run_init_command(&loader, profiles, config, &dir, force, list),
    }
}

fn load_profile_set(loader: &AssetLoader) -> anyhow::Result<ProfileSet> {
    let source = loader
        .profiles_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "embedded profiles".to_string());
    let json = loader
        .read_profiles_string()
        .with_context(|| format!("Failed to read {source}"))?;
    ProfileSet::from_json_str(&json).with_context(|| format!("Failed to load {source}"))
}

fn run_apply_command(
    loader: &AssetLoader,
    service: EmulationService,
    job: &ApplyJob,
) -> anyhow::Result<()> {
    let set = load_profile_set(loader)?;
    let report = service.apply(job, set)?;

    println!("Wrote {} files:", report.written.len());
    for (_, path) in &report.written {
        println!("  + {}", path.display());
    }
    if !report.failed.is_empty() {
        println!("\n{} profiles failed:", report.failed.len());
        for (name, error) in &report.failed {
            println!("  - {name}: {error}");
        }
    }
    if !report.failed_writes.is_empty() {
        println!("\n{} files could not be written:", report.failed_writes.len());
        for (name, error) in &report.failed_writes {
            println!("  - {name}: {error}");
        }
    }

    Ok(())
}

fn run_list_command(loader: &AssetLoader) -> anyhow::Result<()> {
    let set = load_profile_set(loader)?;

    println!("{} profiles ({} valid):\n", set.len(), set.valid_count());
    for entry in &set {
        match &entry.profile {
            Ok(profile) => println!("  ok    {:<24} {}", entry.name, profile.id()),
            Err(e) => println!("  error {:<24} {e}", entry.name),
        }
    }

    Ok(())
}

fn run_init_command(
    loader: &AssetLoader,
    profiles: bool,
    config: bool,
    dir: &Path,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if profiles || !config {
        categories.push(AssetCategory::Profiles);
    }
    if config || !profiles {
        categories.push(AssetCategory::Config);
    }

    let report = loader.init(dir, &categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}
