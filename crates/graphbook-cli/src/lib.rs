//! CLI logic for the Graphbook diagram tool.
//!
//! This module contains the core CLI logic: every [`Command`] resolves its
//! input through a [`Resolver`] built from the loaded configuration.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::{Args, Command};
pub use error::CliError;

use std::io::{self, Write};

use log::info;

use graphbook::{
    Collection, Diagram, GraphbookError, LayoutEngine, OutputFormat, Resolver,
};

/// Run the Graphbook CLI application
///
/// This function loads the configuration, executes the selected command and
/// writes its output to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Invalid command options
/// - DOT rejected by Graphviz (`check`)
/// - Graphviz rendering errors (`render`)
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(args, &mut out)
}

/// Execute the command in `args`, writing its output to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn execute(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let resolver = Resolver::new(app_config);

    match &args.command {
        Command::List { collection } => list(&resolver, collection.as_deref(), out),
        Command::Show { input } => {
            writeln!(out, "{}", resolver.resolve(input).source())?;
            Ok(())
        }
        Command::Render {
            input,
            output,
            format,
            engine,
        } => render(
            &resolver,
            input,
            output.as_deref(),
            format.as_deref(),
            engine.as_deref(),
            out,
        ),
        Command::Check { input } => check(&resolver, input.as_deref(), out),
    }
}

fn list(resolver: &Resolver, collection: Option<&str>, out: &mut impl Write) -> Result<(), CliError> {
    let collection = collection
        .map(str::parse::<Collection>)
        .transpose()
        .map_err(|err| GraphbookError::Config(err.to_string()))?;

    for (name, entry) in resolver.registry() {
        if collection.is_some_and(|c| c != entry.collection()) {
            continue;
        }
        writeln!(out, "{name}\t{}", entry.collection())?;
    }
    Ok(())
}

fn render(
    resolver: &Resolver,
    input: &str,
    output: Option<&str>,
    format: Option<&str>,
    engine: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut diagram: Diagram = resolver.resolve(input);
    if let Some(format) = format {
        diagram = diagram.with_format(format.parse::<OutputFormat>()?);
    }
    if let Some(engine) = engine {
        diagram = diagram.with_engine(engine.parse::<LayoutEngine>()?);
    }

    let output = output.or(diagram.name()).unwrap_or("out").to_string();
    info!(
        input_is_name = diagram.name().is_some(),
        output_path = output;
        "Rendering diagram"
    );

    let path = diagram.render_to(&output)?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

fn check(resolver: &Resolver, input: Option<&str>, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(input) = input {
        let diagram = resolver.resolve(input);
        diagram.validate()?;
        writeln!(out, "ok\t{}", diagram.name().unwrap_or("<literal>"))?;
        return Ok(());
    }

    let checked = resolver.registry().len();
    let failures = resolver.check_all();
    if !failures.is_empty() {
        return Err(CliError::CheckFailed { failures, checked });
    }

    writeln!(out, "ok\t{checked} diagram(s)")?;
    Ok(())
}
