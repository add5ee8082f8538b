use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::path::PathBuf;
use tracing::{info, warn};

use marble_planner::catalog::{build_catalog, load_catalog, load_kits, BuildOptions};
use marble_planner::export::{export_csv, export_json, write_catalog};
use marble_planner::logging::init_logging;
use marble_planner::model::{total_prints, Kit};
use marble_planner::planner::{build_print_list, unmet_dependencies, Selection};
use marble_planner::ui::App;

const DEFAULT_CATALOG: &str = "data/parts-list.json";
const DEFAULT_EXPORT: &str = "marble_run_print_list.csv";

#[derive(Parser, Debug)]
#[command(name = "marble-planner")]
#[command(about = "Marble Planner - build the parts catalog and plan what to print")]
#[command(version)]
struct Cli {
    /// Log debug details
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the parts catalog from a folder of part directories
    Build(BuildArgs),
    /// Plan prints from the catalog (interactive unless exporting)
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Root directory with one folder per part family
    #[arg(required = true)]
    root: PathBuf,

    /// Catalog output path
    #[arg(long, short, value_name = "FILE", default_value = DEFAULT_CATALOG)]
    output: PathBuf,

    /// Directory prefix for part images
    #[arg(long, value_name = "DIR", default_value = marble_planner::catalog::DEFAULT_IMAGE_DIR)]
    image_dir: String,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Catalog document
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CATALOG)]
    catalog: PathBuf,

    /// Kit document with preset selections
    #[arg(long, value_name = "FILE")]
    kits: Option<PathBuf>,

    /// Start from a kit (by id)
    #[arg(long, value_name = "ID", requires = "kits")]
    kit: Option<String>,

    /// Part quantity, may be repeated
    #[arg(long = "select", value_name = "ID=QTY", value_parser = parse_select)]
    select: Vec<(String, String)>,

    /// Export print list to CSV and exit
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export print list to JSON and exit
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Where the interactive planner saves its CSV
    #[arg(long, value_name = "FILE", default_value = DEFAULT_EXPORT)]
    export_to: PathBuf,
}

fn parse_select(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((id, qty)) if !id.trim().is_empty() => Ok((id.trim().to_string(), qty.to_string())),
        _ => Err(format!("expected ID=QTY, got '{raw}'")),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => {
            init_logging(cli.verbose);
            run_build(&args)
        }
        Command::Plan(args) => run_plan(args, cli.verbose),
    }
}

fn run_build(args: &BuildArgs) -> Result<()> {
    let options = BuildOptions {
        image_dir: args.image_dir.clone(),
    };

    let catalog = build_catalog(&args.root, &options)?;
    write_catalog(&catalog, &args.output)?;

    info!("Catalog written to {}", args.output.display());
    Ok(())
}

fn run_plan(args: PlanArgs, verbose: bool) -> Result<()> {
    let exporting = args.csv.is_some() || args.json.is_some();
    if exporting {
        init_logging(verbose);
    }

    let catalog = load_catalog(&args.catalog)?;
    let kits: Vec<Kit> = match &args.kits {
        Some(path) => load_kits(path)?,
        None => Vec::new(),
    };

    let mut selection = match &args.kit {
        Some(kit_id) => {
            let kit = kits
                .iter()
                .find(|k| &k.id == kit_id)
                .ok_or_else(|| eyre!("kit '{kit_id}' not found"))?;
            Selection::from_kit(kit)
        }
        None => Selection::new(),
    };
    for (id, qty) in &args.select {
        selection.set_raw(id, qty);
    }

    if !exporting {
        let terminal = ratatui::init();
        let result = App::new(catalog, kits, selection)
            .with_export_path(args.export_to)
            .run(terminal);
        ratatui::restore();
        return result;
    }

    let print_list = build_print_list(&catalog, &selection);
    for hint in unmet_dependencies(&catalog, &selection) {
        warn!("{}", hint);
    }
    info!(
        "{} distinct files, {} prints",
        print_list.len(),
        total_prints(&print_list)
    );

    if let Some(csv_path) = &args.csv {
        export_csv(&print_list, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&print_list, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    Ok(())
}
