//! Reine Geometrie-Funktionen: Distanz, Punktspiegelung, kubische Bézier-Auswertung.
//!
//! Zustandslos und Layer-neutral, wird von `core`, `app` und den Benchmarks genutzt.

use super::Node;
use glam::Vec2;

/// Euklidische Distanz zwischen zwei Punkten.
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}

/// Spiegelt `p` am Zentrum `center` (Punktspiegelung: `2·center − p`).
pub fn mirror(p: Vec2, center: Vec2) -> Vec2 {
    2.0 * center - p
}

/// B(t) = a·(1-t)³ + 3·c1·t·(1-t)² + 3·c2·(1-t)·t² + b·t³
///
/// `a`/`b` sind die Anker, `c1` liegt bei `a`, `c2` bei `b`.
pub fn cubic_bezier(a: Vec2, b: Vec2, c1: Vec2, c2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    a * (inv2 * inv) + 3.0 * c1 * t * inv2 + 3.0 * c2 * inv * t2 + b * (t2 * t)
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Tastet das Kurvensegment zwischen zwei Nodes ab.
///
/// Liefert genau `segment_count` Punkte für `t = i / segment_count`,
/// `i ∈ 0..segment_count`. Der Endpunkt bei `t = 1` ist nicht enthalten,
/// das nächste Segment beginnt dort mit seinem Anker.
pub fn sample_curve(node_a: &Node, node_b: &Node, segment_count: usize) -> CurveSamples {
    CurveSamples {
        start: node_a.anchor,
        end: node_b.anchor,
        c1: node_a.handle_b.position(),
        c2: node_b.handle_a.position(),
        segment_count,
        next: 0,
    }
}

/// Lazy, endliche und per `clone()` neu startbare Abtastung eines Segments.
#[derive(Debug, Clone)]
pub struct CurveSamples {
    start: Vec2,
    end: Vec2,
    c1: Vec2,
    c2: Vec2,
    segment_count: usize,
    next: usize,
}

impl Iterator for CurveSamples {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next >= self.segment_count {
            return None;
        }
        let t = self.next as f32 / self.segment_count as f32;
        self.next += 1;
        Some(cubic_bezier(self.start, self.end, self.c1, self.c2, t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.segment_count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSamples {}
