//! Example: Rendering the built-in catalog
//!
//! This example resolves every registered diagram and renders it to SVG in
//! the directory given as the first argument (default: `diagrams`).
//! Graphviz must be installed.

use std::{env, fs, path::PathBuf};

use graphbook::{Registry, Resolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::args().nth(1).unwrap_or_else(|| "diagrams".to_string()));
    fs::create_dir_all(&out_dir)?;

    let resolver = Resolver::default();

    for name in Registry::builtin().names() {
        let diagram = resolver.resolve(name.as_str());
        match diagram.render_to(out_dir.join(name.as_str())) {
            Ok(path) => println!("{name}: {}", path.display()),
            Err(err) => eprintln!("{name}: {err}"),
        }
    }

    // Anything that is not a registered name is rendered as DOT itself
    let literal = resolver.resolve("digraph g { a -> b; }");
    let path = literal.render_to(out_dir.join("literal"))?;
    println!("literal: {}", path.display());

    Ok(())
}
