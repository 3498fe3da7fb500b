//! Renderer-focused tests over the library interface

use std::io::Cursor;

use gridlock::description::GraphDescription;
use gridlock::detector::CycleDetector;
use gridlock::graph::{GraphRenderer, WaitGraphBuilder};

fn build(processes: usize, waits: &[(usize, usize)]) -> (WaitGraphBuilder, CycleDetector) {
    let mut description = GraphDescription::new(processes);
    for &(from, to) in waits {
        description.add_wait(from, to);
    }
    let mut builder = WaitGraphBuilder::new();
    builder.build_from_description(&description).unwrap();

    let mut detector = CycleDetector::new();
    detector.detect(builder.graph()).unwrap();
    (builder, detector)
}

#[test]
fn test_dot_contains_all_nodes_and_edges() {
    let (builder, detector) = build(3, &[(0, 1), (1, 2)]);
    let renderer = GraphRenderer::new(true);

    let mut output = Cursor::new(Vec::new());
    renderer
        .render_dot(builder.graph(), detector.cycle(), &mut output)
        .unwrap();
    let dot = String::from_utf8(output.into_inner()).unwrap();

    for label in ["P0", "P1", "P2"] {
        assert!(dot.contains(label), "missing node {label}");
    }
    assert!(dot.contains("\"P0\" -> \"P1\""));
    assert!(dot.contains("\"P1\" -> \"P2\""));
    assert!(dot.contains("layout=circo"));
}

#[test]
fn test_dot_highlights_only_cycle_members() {
    let (builder, detector) = build(3, &[(0, 1), (1, 0), (2, 0)]);
    let renderer = GraphRenderer::new(true);

    let mut output = Cursor::new(Vec::new());
    renderer
        .render_dot(builder.graph(), detector.cycle(), &mut output)
        .unwrap();
    let dot = String::from_utf8(output.into_inner()).unwrap();

    // P0 and P1 deadlock; P2 merely waits on P0
    assert!(dot.contains("\"P0\" [fillcolor"));
    assert!(dot.contains("\"P1\" [fillcolor"));
    assert!(!dot.contains("\"P2\" [fillcolor"));
}

#[test]
fn test_mermaid_without_cycle_has_no_class_line() {
    let (builder, detector) = build(2, &[(0, 1)]);
    let renderer = GraphRenderer::new(true);

    let mut output = Cursor::new(Vec::new());
    renderer
        .render_mermaid(builder.graph(), detector.cycle(), &mut output)
        .unwrap();
    let mermaid = String::from_utf8(output.into_inner()).unwrap();

    assert!(mermaid.contains("graph LR"));
    assert!(!mermaid.contains("class "));
    assert!(!mermaid.contains("linkStyle"));
}

#[test]
fn test_ascii_shows_wait_targets_in_input_order() {
    let (builder, detector) = build(3, &[(0, 2), (0, 1)]);
    let renderer = GraphRenderer::new(true);

    let mut output = Cursor::new(Vec::new());
    renderer
        .render_ascii(builder.graph(), detector.cycle(), &mut output)
        .unwrap();
    let ascii = String::from_utf8(output.into_inner()).unwrap();

    assert!(ascii.contains("waits on: P2, P1"));
    assert!(ascii.contains("(not waiting on anyone)"));
}

#[test]
fn test_highlighting_disabled_leaves_plain_output() {
    let (builder, detector) = build(2, &[(0, 1), (1, 0)]);
    let renderer = GraphRenderer::new(false);

    let mut output = Cursor::new(Vec::new());
    renderer
        .render_ascii(builder.graph(), detector.cycle(), &mut output)
        .unwrap();
    let ascii = String::from_utf8(output.into_inner()).unwrap();

    assert!(!ascii.contains("DEADLOCKED"));
}
