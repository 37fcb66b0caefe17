use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use ceilgrid::io::ext_repr::ExtProject;
use log::{LevelFilter, info, warn};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::config::PlannerConfig;

pub mod cli;
pub mod layout_to_svg;
pub mod output;
pub mod report;
pub mod svg_util;

pub fn read_project(path: &Path) -> Result<ExtProject> {
    let file = File::open(path).context(format!("could not open project file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context(format!("could not parse project file: {}", path.display()))
}

/// Reads the config at `path`, or falls back to the default config if there is none.
pub fn read_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            Ok(PlannerConfig::default())
        }
        Some(path) if !path.exists() => {
            warn!(
                "[MAIN] Config file {} does not exist, falling back to the default config",
                path.display()
            );
            Ok(PlannerConfig::default())
        }
        Some(path) => {
            let file = File::open(path).context(format!("could not open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).context(format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .context(format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution json written to file://{}", canonical(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).context(format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", canonical(path)?);
    Ok(())
}

pub fn write_report(report: &str, path: &Path) -> Result<()> {
    fs::write(path, report).context(format!("could not write report: {}", path.display()))?;
    info!("[IO] report written to file://{}", canonical(path)?);
    Ok(())
}

fn canonical(path: &Path) -> Result<String> {
    let path = fs::canonicalize(path).context(format!("could not canonicalize path: {}", path.display()))?;
    Ok(path.to_string_lossy().into_owned())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
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
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
