//! Integration tests for the resolution API
//!
//! These tests verify the lookup-or-literal contract through the public API.

use indexmap::IndexMap;

use graphbook::{
    GraphbookError, LayoutEngine, OutputFormat, Registry, RegistryBuilder, Resolution, Resolver,
    config::{AppConfig, RenderConfig},
    resolve,
};

#[test]
fn test_registered_name_resolves_to_registered_text() {
    let diagram = resolve("const-op");

    let expected = Registry::builtin().get("const-op").unwrap();
    assert_eq!(diagram.source(), expected.as_str());
    assert_eq!(diagram.name(), Some("const-op"));
}

#[test]
fn test_every_registered_name_resolves() {
    for (name, entry) in Registry::builtin() {
        let diagram = resolve(name.as_str());
        assert_eq!(diagram.source(), entry.description().as_str());
    }
}

#[test]
fn test_unknown_name_falls_back_to_literal() {
    let diagram = resolve("not-a-real-name");

    assert_eq!(diagram.source(), "not-a-real-name");
    assert_eq!(diagram.resolution(), &Resolution::Literal);
}

#[test]
fn test_unknown_name_fails_only_when_parsed() {
    let diagram = resolve("not-a-real-name");
    assert!(matches!(
        diagram.parse(),
        Err(GraphbookError::Syntax { .. })
    ));
}

#[test]
fn test_literal_dot_is_passed_through_and_parses() {
    let source = "digraph g { a -> b; }";
    let diagram = resolve(source);

    assert_eq!(diagram.source(), source);
    assert_eq!(diagram.name(), None);
    assert!(
        diagram.parse().is_ok(),
        "Minimal graph should parse: {:?}",
        diagram.parse().err()
    );
}

#[test]
fn test_empty_input_is_literal() {
    let diagram = resolve("");
    assert_eq!(diagram.source(), "");
    assert_eq!(diagram.resolution(), &Resolution::Literal);
}

#[test]
fn test_resolve_is_idempotent() {
    assert_eq!(resolve("recurrent"), resolve("recurrent"));
    assert_eq!(resolve("digraph { x }"), resolve("digraph { x }"));
}

#[test]
fn test_duplicate_registration_last_write_wins() {
    let registry = RegistryBuilder::new()
        .insert("dup", "digraph { first }")
        .insert("dup", "digraph { second }")
        .build();

    assert_eq!(registry.resolve("dup").source(), "digraph { second }");
}

#[test]
fn test_resolver_applies_render_defaults() {
    let config = AppConfig::new(
        RenderConfig::new(LayoutEngine::Twopi, OutputFormat::Pdf),
        IndexMap::new(),
    );
    let diagram = Resolver::new(config).resolve("feed-forward");

    assert_eq!(diagram.engine(), LayoutEngine::Twopi);
    assert_eq!(diagram.format(), OutputFormat::Pdf);
    assert_eq!(diagram.name(), Some("feed-forward"));
}

#[test]
fn test_resolver_registers_custom_diagrams() {
    let mut diagrams = IndexMap::new();
    diagrams.insert("pipeline".to_string(), "digraph { read -> parse }".to_string());
    diagrams.insert("const-op".to_string(), "digraph { overridden }".to_string());

    let resolver = Resolver::new(AppConfig::new(RenderConfig::default(), diagrams));

    assert_eq!(resolver.resolve("pipeline").source(), "digraph { read -> parse }");
    assert_eq!(resolver.resolve("const-op").source(), "digraph { overridden }");
    assert_eq!(resolver.registry().len(), Registry::builtin().len() + 1);

    // The process-wide registry is untouched
    assert_ne!(resolve("const-op").source(), "digraph { overridden }");
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn test_check_all_accepts_builtin_catalog() {
    let failures = Resolver::default().check_all();

    let names: Vec<_> = failures.iter().map(|(name, _)| name.as_str()).collect();
    assert!(names.is_empty(), "Graphviz rejected built-in diagrams: {names:?}");
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn test_check_all_reports_only_broken_custom_diagram() {
    let mut diagrams = IndexMap::new();
    diagrams.insert("broken".to_string(), "digraph { a -> ".to_string());
    diagrams.insert(
        "ranked".to_string(),
        "digraph { { rank = same; a; b } a -> c }".to_string(),
    );

    let resolver = Resolver::new(AppConfig::new(RenderConfig::default(), diagrams));
    let failures = resolver.check_all();

    let names: Vec<_> = failures.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["broken"]);
    assert!(matches!(failures[0].1, GraphbookError::Syntax { .. }));
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn test_render_registered_diagram_to_svg() {
    let svg = resolve("simple-graph")
        .render_svg()
        .expect("Failed to render diagram");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn test_render_to_file_adds_extension() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let diagram = resolve("digraph g { a -> b; }").with_format(OutputFormat::Png);

    let path = diagram
        .render_to(dir.path().join("minimal"))
        .expect("Failed to render diagram");

    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    assert!(path.metadata().unwrap().len() > 0);
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn test_render_reports_graphviz_errors() {
    let result = resolve("not-a-real-name").render();
    assert!(matches!(result, Err(GraphbookError::Render(_))));
}

#[test]
fn test_registry_and_diagram_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
    assert_send_sync::<graphbook::Diagram>();
    assert_send_sync::<Resolver>();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| resolve("translation")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), resolve("translation"));
    }
}
