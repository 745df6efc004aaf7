#![allow(clippy::unwrap_used)]

use boardline::document::{BoardDocument, Component, DrawingSession, Layer, MemoryDocument};
use boardline::geometry::{Contour, Direction, Handle, Heading, Primitive};
use boardline::math::{Vector2, VectorExt};
use boardline::operations::{ContourTracer, HolePlacer};
use boardline::TraceConfig;
use tracing_subscriber::EnvFilter;

const MM: i64 = 1_000_000;
const HALF: i64 = 9_500_000;
const RAY: i64 = MM / 10;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Square with corners (0,0) and (100,100) mm, traced clockwise on screen
/// from the bottom edge with 5 mm fillets.
fn trace_square(tracer: &mut ContourTracer) -> Contour {
    let start = Vector2::new(5 * MM, 100 * MM);
    let radius = Some(5 * MM);
    tracer.begin(start).unwrap();
    tracer
        .line_arc(Heading::Right, Vector2::new(100 * MM, 50 * MM), Heading::Down, radius)
        .unwrap();
    tracer
        .line_arc(Heading::Up, Vector2::new(50 * MM, 0), Heading::Right, radius)
        .unwrap();
    tracer
        .line_arc(Heading::Left, Vector2::new(0, 50 * MM), Heading::Up, radius)
        .unwrap();
    tracer
        .line_arc(Heading::Down, start, Heading::Left, radius)
        .unwrap();
    tracer.finish()
}

fn on_line(point: &Vector2, origin: &Vector2, dir: &Vector2) -> bool {
    let bound = 4 * i128::from(dir.x.abs() + dir.y.abs());
    (point - origin).cross_2d(dir).abs() <= bound
}

#[test]
fn four_fillet_square_closes_on_its_start() {
    init_logging();
    let mut tracer = ContourTracer::default();
    let contour = trace_square(&mut tracer);

    assert_eq!(contour.len(), 8);
    assert!(contour.is_continuous(0));
    assert!(contour.is_closed(2));
    assert_eq!(contour.first_point(), Some(Vector2::new(5 * MM, 100 * MM)));

    let arc_ends: Vec<Vector2> = contour
        .iter()
        .filter(|p| matches!(p, Primitive::Arc { .. }))
        .map(Primitive::end)
        .collect();
    assert_eq!(
        arc_ends,
        vec![
            Vector2::new(100 * MM, 95 * MM),
            Vector2::new(95 * MM, 0),
            Vector2::new(0, 5 * MM),
            Vector2::new(5 * MM, 100 * MM),
        ]
    );
}

#[test]
fn tracing_twice_gives_identical_output() {
    let mut tracer = ContourTracer::default();
    let first = trace_square(&mut tracer);
    let second = trace_square(&mut tracer);
    let fresh = trace_square(&mut ContourTracer::default());
    assert_eq!(first, second);
    assert_eq!(first, fresh);

    let mut doc_a = MemoryDocument::new();
    let mut doc_b = MemoryDocument::new();
    DrawingSession::new(&mut doc_a, Layer::EdgeCuts).emit(&first);
    DrawingSession::new(&mut doc_b, Layer::EdgeCuts).emit(&second);
    assert_eq!(doc_a.drawings(), doc_b.drawings());
}

#[test]
fn each_step_starts_where_the_last_one_ended() {
    let mut tracer = ContourTracer::default();
    tracer.begin(Vector2::new(0, 0)).unwrap();
    let anchors = [
        (Heading::Right, Vector2::new(40 * MM, 30 * MM), Heading::Up),
        (Heading::Down, Vector2::new(20 * MM, 50 * MM), Heading::Right),
        (Heading::Left, Vector2::new(0, 20 * MM), Heading::Down),
    ];
    for (incoming, anchor, outgoing) in anchors {
        let before = tracer.contour().len();
        let cursor = tracer.line_arc(incoming, anchor, outgoing, None).unwrap();
        let emitted = &tracer.contour().primitives()[before..];
        assert_eq!(emitted.last().unwrap().end(), cursor);
        assert_eq!(tracer.cursor(), Some(cursor));
    }
    assert!(tracer.contour().is_continuous(0));
}

#[test]
fn wrist_rest_outline_and_holes() {
    init_logging();
    let radius = 12 * MM;
    let (width, height) = (88 * MM, 65 * MM);

    let mut doc = MemoryDocument::new();
    doc.insert_component("S65", Component::new(Vector2::new(150 * MM, 80 * MM), 0.0));
    doc.insert_component("H1", Component::new(Vector2::new(0, 0), 0.0));
    doc.insert_component("H2", Component::new(Vector2::new(0, 0), 0.0));
    // Stale outline from an earlier run.
    doc.add_segment(Vector2::new(0, 0), Vector2::new(MM, MM), Layer::EdgeCuts);

    let mut session = DrawingSession::new(&mut doc, Layer::EdgeCuts);
    session.clear();

    let start = session
        .anchor("S65", Vector2::new(-64 * MM, HALF + 28 * MM + radius))
        .unwrap()
        .position;
    let mut holes = HolePlacer::new(["H1", "H2", "H3"]);
    let mut tracer = ContourTracer::new(TraceConfig::new(radius, RAY).unwrap()).unwrap();
    tracer.begin(start).unwrap();

    let corners = [
        (Heading::Down, Vector2::new(-radius, height - radius), Heading::Right),
        (Heading::Left, Vector2::new(-width + radius, -radius), Heading::Down),
        (Heading::Up, Vector2::new(radius, -height + radius), Heading::Left),
    ];
    for (incoming, offset, outgoing) in corners {
        let cursor = tracer.cursor().unwrap();
        let anchor = cursor + offset;
        let inc = Direction::from(incoming).ray(&cursor, RAY).unwrap();
        let out = Direction::from(outgoing).ray(&anchor, RAY).unwrap();
        holes.place(&mut session, &inc, &out, 6 * MM).unwrap();
        let exit = tracer.line_arc(incoming, anchor, outgoing, None).unwrap();
        assert_eq!(exit, anchor);
    }
    let closing = tracer.line_arc(Heading::Right, start, Heading::Up, None).unwrap();
    assert_eq!(closing, start);

    let contour = tracer.finish();
    assert!(contour.is_closed(0));
    session.emit(&contour);

    assert_eq!(doc.primitives_on(Layer::EdgeCuts).count(), 8);
    assert!(doc
        .primitives_on(Layer::EdgeCuts)
        .all(|p| *p != Primitive::Segment {
            start: Vector2::new(0, 0),
            end: Vector2::new(MM, MM),
        }));

    // Bottom-right corner of the rest is (start.x, start.y + height - radius).
    let bottom_right = start + Vector2::new(0, height - radius);
    assert_eq!(holes.placed(), 2);
    assert_eq!(
        doc.find_component("H1").unwrap().position,
        bottom_right + Vector2::new(-6 * MM, -6 * MM)
    );
    let bottom_left = bottom_right + Vector2::new(-width, 0);
    assert_eq!(
        doc.find_component("H2").unwrap().position,
        bottom_left + Vector2::new(6 * MM, -6 * MM)
    );
}

#[test]
fn rotated_key_anchors_keep_the_outline_on_key_edges() {
    init_logging();
    let mut doc = MemoryDocument::new();
    doc.insert_component("S1", Component::new(Vector2::new(0, 0), 0.0));
    doc.insert_component("S2", Component::new(Vector2::new(60 * MM, 10 * MM), -10.0));
    let session = DrawingSession::new(&mut doc, Layer::EdgeCuts);

    let start = session.anchor("S1", Vector2::new(0, HALF)).unwrap();
    let left_edge = session.anchor("S2", Vector2::new(-HALF, 0)).unwrap();
    let top_edge = session.anchor("S2", Vector2::new(0, -HALF)).unwrap();

    let mut tracer = ContourTracer::default();
    tracer.begin(start.position).unwrap();
    let first = tracer
        .line_arc(
            Heading::Right,
            left_edge.position,
            left_edge.direction(Heading::Down),
            None,
        )
        .unwrap();
    assert!(on_line(
        &first,
        &left_edge.position,
        &left_edge.direction(Heading::Down).vector(RAY)
    ));

    let second = tracer
        .line_arc(
            left_edge.direction(Heading::Up),
            top_edge.position,
            top_edge.direction(Heading::Left),
            Some(MM / 2),
        )
        .unwrap();
    assert!(on_line(
        &second,
        &top_edge.position,
        &top_edge.direction(Heading::Left).vector(RAY)
    ));
    assert!(tracer.contour().is_continuous(0));
}

#[test]
fn bezier_wall_closes_and_lands_on_layer() {
    let n = 17 * MM;
    let start = Vector2::new(100 * MM, 75 * MM);
    let mut tracer = ContourTracer::default();
    tracer.begin(start).unwrap();
    let corner_a = Vector2::new(75 * MM, 100 * MM);
    tracer
        .curve_to(Handle::new(Heading::Down, n), corner_a, Handle::new(Heading::Right, n))
        .unwrap();
    tracer.line_to(Vector2::new(25 * MM, 100 * MM)).unwrap();
    let corner_b = Vector2::new(0, 75 * MM);
    tracer
        .curve_to(Handle::new(Heading::Left, n), corner_b, Handle::new(Heading::Down, n))
        .unwrap();
    tracer.line_to(Vector2::new(0, 0)).unwrap();
    tracer.line_to(Vector2::new(100 * MM, 0)).unwrap();
    tracer.line_to(start).unwrap();
    let contour = tracer.finish();
    assert!(contour.is_closed(0));

    let mut doc = MemoryDocument::new();
    let mut session = DrawingSession::new(&mut doc, Layer::User(2));
    session.emit(&contour);
    session.clear();
    session.emit(&contour);

    let on_layer: Vec<&Primitive> = doc.primitives_on(Layer::User(2)).collect();
    assert_eq!(on_layer.len(), 6);
    assert_eq!(
        *on_layer[0],
        Primitive::CubicBezier {
            start,
            c1: Vector2::new(100 * MM, 92 * MM),
            c2: Vector2::new(92 * MM, 100 * MM),
            end: corner_a,
        }
    );
    assert_eq!(doc.primitives_on(Layer::EdgeCuts).count(), 0);
}
