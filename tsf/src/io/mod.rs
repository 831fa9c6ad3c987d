use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use circpack::io::ext_repr::ExtInstance;
use circpack::io::svg::packing_to_svg;

use crate::EPOCH;
use crate::config::TSFConfig;
use crate::io::output::TSFOutput;
use crate::opt::TSFSolution;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path).with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Writes `sol_<stem>.json` and `sol_<stem>.svg` to `folder`, returns both paths
pub fn write_solution(
    folder: &Path,
    stem: &str,
    ext_instance: &ExtInstance,
    solution: &TSFSolution,
    config: &TSFConfig,
) -> Result<(PathBuf, PathBuf)> {
    if !folder.exists() {
        fs::create_dir_all(folder).with_context(|| format!("could not create solution folder: {}", folder.display()))?;
    }

    let json_path = folder.join(format!("sol_{stem}.json"));
    let output = TSFOutput {
        instance: ext_instance.clone(),
        solution: solution.export(),
        config: *config,
    };
    write_json(&output, &json_path)?;

    let svg_path = folder.join(format!("sol_{stem}.svg"));
    let svg = packing_to_svg(&solution.snapshot, config.svg_draw_options, stem);
    write_svg(&svg, &svg_path)?;

    Ok((json_path, svg_path))
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!(
        "[MAIN] start time: {}",
        jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S %Z")
    );
    Ok(())
}
