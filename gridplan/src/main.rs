use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ceilgrid::io::export;
use ceilgrid::io::import::Importer;
use ceilgrid::planner;
use clap::Parser as ClapParser;
use gridplan::io::cli::Cli;
use gridplan::io::layout_to_svg::layout_to_svg;
use gridplan::io::output::PlanOutput;
use gridplan::io::report::plan_report;
use gridplan::{EPOCH, io};
use log::info;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("[MAIN] Successfully parsed PlannerConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?
        .to_string();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).context(format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        ))?;
    }

    let ext_project = io::read_project(&args.input_file)?;
    let importer = Importer::new(config.plan_options);
    let mut request = importer
        .import_project(&ext_project)
        .context(format!("invalid project: {}", args.input_file.display()))?;
    if let Some(strategy) = args.strategy {
        info!("[MAIN] strategy overridden to {strategy}");
        request.options.strategy = strategy;
    }

    let plan = planner::plan(&request).context("could not plan the layout")?;
    info!(
        "[MAIN] planned '{}' in {:.3}ms",
        ext_project.name,
        EPOCH.elapsed().as_secs_f64() * 1000.0
    );

    let output_folder = args.solution_folder.as_path();
    {
        let output = PlanOutput {
            project: export::export_project(&ext_project.name, &request),
            plan: export::export_plan(&plan),
            config,
        };
        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = output_folder.join(format!("sol_{input_stem}.svg"));
        let svg = layout_to_svg(&plan.layout, config.svg_draw_options, &ext_project.name);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    {
        let report_path = output_folder.join(format!("sol_{input_stem}.txt"));
        let report = plan_report(&ext_project.name, &request, &plan)?;
        io::write_report(&report, Path::new(&report_path))?;
    }

    Ok(())
}
