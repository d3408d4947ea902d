// File: crates/scatter-core/src/trend.rs
// Summary: Monotone-in-x cubic curve through the yearly average points (Steffen tangents).

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line { to: (f64, f64) },
    Cubic { c1: (f64, f64), c2: (f64, f64), to: (f64, f64) },
}

/// Path in plot coordinates. `start == None` means nothing to draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendPath {
    pub start: Option<(f64, f64)>,
    pub segments: Vec<Segment>,
}

impl TrendPath {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// SVG path data (`M ... C ...`).
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        let Some((x, y)) = self.start else { return d };
        let _ = write!(d, "M{},{}", fmt(x), fmt(y));
        for s in &self.segments {
            let _ = match *s {
                Segment::Line { to } => write!(d, "L{},{}", fmt(to.0), fmt(to.1)),
                Segment::Cubic { c1, c2, to } => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt(c1.0), fmt(c1.1), fmt(c2.0), fmt(c2.1), fmt(to.0), fmt(to.1)
                ),
            };
        }
        d
    }
}

fn fmt(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() { format!("{}", r as i64) } else { format!("{r}") }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at an interior point from its neighbours.
fn slope3(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if m.is_finite() { m } else { 0.0 }
}

/// One-sided tangent at an end point given the neighbour's tangent.
fn slope2(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 { t } else { (3.0 * (p1.1 - p0.1) / h - t) / 2.0 }
}

/// Curve through `points` (x ascending). Two points give a straight line; fewer give no segments.
pub fn monotone_x(points: &[(f64, f64)]) -> TrendPath {
    let Some(&first) = points.first() else { return TrendPath::empty() };
    let n = points.len();
    let mut path = TrendPath { start: Some(first), segments: Vec::with_capacity(n.saturating_sub(1)) };
    if n == 2 {
        path.segments.push(Segment::Line { to: points[1] });
    }
    if n < 3 {
        return path;
    }

    let mut m = vec![0.0; n];
    for i in 1..n - 1 {
        m[i] = slope3(points[i - 1], points[i], points[i + 1]);
    }
    m[0] = slope2(points[0], points[1], m[1]);
    m[n - 1] = slope2(points[n - 2], points[n - 1], m[n - 2]);

    for i in 0..n - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        path.segments.push(Segment::Cubic {
            c1: (x0 + dx, y0 + dx * m[i]),
            c2: (x1 - dx, y1 - dx * m[i + 1]),
            to: (x1, y1),
        });
    }
    path
}
