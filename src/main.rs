use std::path::Path;

use burgers_characteristics::{
    characteristics::InitialCondition,
    initialization::{apply_overrides, initialize_params},
    io::write_to_csv::write_solution_to_csv,
    solver::CharacteristicsSolver,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Characteristic lines and first shocks of the inviscid Burgers equation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON parameter file (defaults to inputs/params.json when present)
    #[arg(short, long)]
    params: Option<String>,
    /// Initial condition u(x, 0), overrides the parameter file
    #[arg(short, long, value_enum)]
    initial_condition: Option<InitialCondition>,
    /// Directory receiving the CSV geometry
    #[arg(short, long)]
    output_dir: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let param = initialize_params(args.params.as_deref())?;
    let param = apply_overrides(param, args.initial_condition, args.output_dir);
    let solver_params = param.solver_parameters();
    info!(
        initial_condition = param.initial_condition.name(),
        left = solver_params.left,
        right = solver_params.right,
        t_max = solver_params.t_max,
        lines = solver_params.line_num,
        "solving characteristics"
    );

    let solver = CharacteristicsSolver::new(param.initial_condition.as_fn(), &solver_params);
    let solution = solver.solve()?;
    write_solution_to_csv(&solution, Path::new(&param.output_dir))?;
    info!(output_dir = %param.output_dir, "done");
    Ok(())
}
