use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::{TempDir, tempdir};

use graphbook_cli::{Args, CliError, Command, execute};

/// Writes a config file into a fresh temporary directory
fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

fn args(config: &Path, command: Command) -> Args {
    Args {
        config: Some(config.to_string_lossy().to_string()),
        log_level: "off".to_string(),
        command,
    }
}

fn run_to_string(args: &Args) -> Result<String, CliError> {
    let mut out = Vec::new();
    execute(args, &mut out)?;
    Ok(String::from_utf8(out).expect("CLI output should be UTF-8"))
}

#[test]
fn e2e_list_builtin_diagrams() {
    let (_dir, config) = write_config("");

    let output = run_to_string(&args(&config, Command::List { collection: None }))
        .expect("list should succeed");
    let names: Vec<_> = output
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();

    assert_eq!(names.first(), Some(&"add-op"));
    assert_eq!(names.last(), Some(&"LSTM_full"));
    assert_eq!(names.len(), 13);
}

#[test]
fn e2e_list_filters_by_collection() {
    let (_dir, config) = write_config("[diagrams]\nmine = \"digraph { m }\"\n");

    let output = run_to_string(&args(
        &config,
        Command::List {
            collection: Some("custom".to_string()),
        },
    ))
    .expect("list should succeed");

    assert_eq!(output, "mine\tcustom\n");
}

#[test]
fn e2e_list_rejects_unknown_collection() {
    let (_dir, config) = write_config("");

    let result = run_to_string(&args(
        &config,
        Command::List {
            collection: Some("vision".to_string()),
        },
    ));

    assert!(result.is_err(), "Unknown collection should fail");
}

#[test]
fn e2e_show_registered_and_literal() {
    let (_dir, config) = write_config("");

    let registered = run_to_string(&args(
        &config,
        Command::Show {
            input: "const-op".to_string(),
        },
    ))
    .expect("show should succeed");
    assert!(registered.contains("\"tf.constant\" -> z;"));

    let literal = run_to_string(&args(
        &config,
        Command::Show {
            input: "not-a-real-name".to_string(),
        },
    ))
    .expect("show never fails on unknown names");
    assert_eq!(literal, "not-a-real-name\n");
}

#[test]
fn e2e_show_uses_configured_override() {
    let (_dir, config) = write_config("[diagrams]\nconst-op = \"digraph { replaced }\"\n");

    let output = run_to_string(&args(
        &config,
        Command::Show {
            input: "const-op".to_string(),
        },
    ))
    .expect("show should succeed");

    assert_eq!(output, "digraph { replaced }\n");
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn e2e_check_literal() {
    let (_dir, config) = write_config("");

    let output = run_to_string(&args(
        &config,
        Command::Check {
            input: Some("digraph g { a -> b; }".to_string()),
        },
    ))
    .expect("minimal graph should parse");
    assert_eq!(output, "ok\t<literal>\n");

    let result = run_to_string(&args(
        &config,
        Command::Check {
            input: Some("not-a-real-name".to_string()),
        },
    ));
    assert!(result.is_err(), "Bare words are not valid DOT");
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn e2e_check_builtin_catalog() {
    let (_dir, config) = write_config("");

    let output = run_to_string(&args(&config, Command::Check { input: None }))
        .unwrap_or_else(|err| panic!("built-in diagrams should validate: {err}"));

    assert_eq!(output, "ok\t13 diagram(s)\n");
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn e2e_check_accepts_anonymous_subgraph() {
    let (_dir, config) = write_config("");

    let output = run_to_string(&args(
        &config,
        Command::Check {
            input: Some("digraph { { rank = same; a; b } }".to_string()),
        },
    ))
    .expect("Graphviz accepts anonymous subgraphs");

    assert_eq!(output, "ok\t<literal>\n");
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn e2e_check_reports_broken_custom_diagram() {
    let (_dir, config) = write_config("[diagrams]\nbroken = \"digraph { a -> \"\n");

    let result = run_to_string(&args(&config, Command::Check { input: None }));

    match result {
        Err(CliError::CheckFailed { failures, checked }) => {
            assert_eq!(checked, 14);
            let names: Vec<_> = failures.iter().map(|(name, _)| name.as_str()).collect();
            assert_eq!(names, ["broken"]);
        }
        other => panic!("Expected check failure, got {other:?}"),
    }
}

#[test]
fn e2e_config_rejects_blank_diagram_name() {
    let (_dir, config) = write_config("[diagrams]\n\"  \" = \"digraph { a }\"\n");

    let result = run_to_string(&args(&config, Command::List { collection: None }));

    match result {
        Err(err) => assert!(err.to_string().contains("Invalid diagram name")),
        Ok(output) => panic!("Expected config error, got {output:?}"),
    }
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn e2e_render_dotted_name_gets_extension() {
    let (dir, config) = write_config("[diagrams]\n\"v1.2\" = \"digraph { a -> b }\"\n");
    let output = dir.path().join("v1.2");

    let printed = run_to_string(&args(
        &config,
        Command::Render {
            input: "v1.2".to_string(),
            output: Some(output.to_string_lossy().to_string()),
            format: Some("svg".to_string()),
            engine: None,
        },
    ))
    .expect("render should succeed");

    let written = dir.path().join("v1.2.svg");
    assert_eq!(printed.trim(), written.to_string_lossy());
    assert!(written.exists());
}

#[test]
fn e2e_render_rejects_unknown_format() {
    let (dir, config) = write_config("");

    let result = run_to_string(&args(
        &config,
        Command::Render {
            input: "exercise".to_string(),
            output: Some(dir.path().join("exercise").to_string_lossy().to_string()),
            format: Some("bmp".to_string()),
            engine: None,
        },
    ));

    assert!(result.is_err(), "Unknown format should fail before rendering");
    assert!(!dir.path().join("exercise.bmp").exists());
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn e2e_render_registered_diagrams() {
    let (dir, config) = write_config("");

    for name in ["add-op", "feed-forward", "unrolled"] {
        let output = dir.path().join(name);
        let printed = run_to_string(&args(
            &config,
            Command::Render {
                input: name.to_string(),
                output: Some(output.to_string_lossy().to_string()),
                format: Some("svg".to_string()),
                engine: None,
            },
        ))
        .unwrap_or_else(|err| panic!("{name} failed to render: {err}"));

        let written = output.with_extension("svg");
        assert_eq!(printed.trim(), written.to_string_lossy());
        let svg = fs::read_to_string(&written).unwrap();
        assert!(svg.contains("<svg"), "{name} should render to SVG");
    }
}
