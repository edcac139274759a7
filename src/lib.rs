pub mod geo_3d;
pub mod query;
pub mod args;
pub mod io;
mod crate_errors;

use tracing::info;

pub use crate_errors::{
    CadGeoError,
    CadGeoResult,
    err_str,
};

use query::{QueryDocument, OperationChoice};

/// Run the subcommand picked on the command line.
pub fn run(cli_args: args::CadGeoCli) -> CadGeoResult<()> {
    match cli_args.sub_command {
        args::Command::Eval(eval_args) => eval_queries(eval_args),
        args::Command::Example(example_args) => example_queries(example_args),
    }
}

/// Evaluate a query file and print (or save) the report.
/// Failed operations are part of the report; only IO and parse failures are an `Err`.
pub fn eval_queries(eval_args: args::EvalArgs) -> CadGeoResult<()> {
    let format = match (&eval_args.format, &eval_args.output_path) {
        (Some(format), _) => *format,
        (None, Some(output_path)) => match args::Format::from_path(output_path) {
            Some(format) => format,
            None => return err_str(&format!(
                "Cannot tell the output format from {}; pass --format or use a .json, .toml, .yaml or .yml file",
                output_path,
            )),
        },
        (None, None) => args::Format::Yaml,
    };

    info!("Loading query file: {}...", eval_args.query_path);
    let document = QueryDocument::from_file(&eval_args.query_path)?;

    let report = document.evaluate();
    info!("Evaluated {} queries, {} failed", report.results.len(), report.failures());

    let rendered = io::to_cfg_string(&report, format)?;
    match eval_args.output_path {
        Some(output_path) => {
            info!("Saving results to {}...", output_path);
            io::write_to_file(&output_path, &rendered)?;
        },
        None => print!("{}", rendered),
    }
    Ok(())
}

/// List the available operations, or print an example query document for one.
pub fn example_queries(example_args: args::ExampleArgs) -> CadGeoResult<()> {
    let op_name = match example_args.op {
        Some(op_name) => op_name,
        None => {
            println!("{}", query::available_operations());
            return Ok(());
        },
    };

    let document = QueryDocument::single(OperationChoice::from_name(&op_name)?);
    print!("{}", io::to_cfg_string(&document, example_args.format)?);
    Ok(())
}
