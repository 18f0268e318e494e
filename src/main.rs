use std::path::PathBuf;

use clap::Parser;
use log::info;

use ozz_batch::{BatchConverter, OutputLayout, ProcessRunner, ToolSettings};

/// Convert a directory of FBX files into ozz skeleton and animation files.
#[derive(Debug, Parser)]
#[command(name = "ozz-batch", version, about)]
struct Cli {
    /// Directory holding pose.fbx and the animation sources
    input_dir: PathBuf,
    /// Directory receiving skeleton.ozz, archive.ozz and <name>.ozz
    output_dir: PathBuf,
    /// Fail when a converter cannot be started or exits unsuccessfully
    #[arg(long)]
    strict: bool,
    /// Write a JSON summary of every converter run
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    #[arg(long, value_name = "PROGRAM")]
    fbx2skel: Option<String>,
    #[arg(long, value_name = "PROGRAM")]
    fbx2anim: Option<String>,
    /// Persist the tool overrides to the user config
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = ToolSettings::load().with_overrides(cli.fbx2skel, cli.fbx2anim);
    if cli.save_config {
        let path = settings.save()?;
        info!("saved tool settings to {}", path.display());
    }

    let layout = OutputLayout::new(cli.input_dir, cli.output_dir);
    let converter = BatchConverter::new(settings, layout).strict(cli.strict);
    let report = converter.run(&mut ProcessRunner)?;

    if let Some(path) = &cli.report {
        report.write_json(path)?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
