// File: crates/engagement-core/src/geometry.rs
// Summary: Pixel-space points, rectangles, path commands and natural cubic spline fitting.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier: two control points then the end point.
    CubicTo(Point, Point, Point),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        self.cmds.push(PathCmd::CubicTo(c1, c2, end));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn commands(&self) -> &[PathCmd] { &self.cmds }

    pub fn is_empty(&self) -> bool { self.cmds.is_empty() }

    /// Points the path passes through (segment ends, not control points).
    pub fn vertices(&self) -> Vec<Point> {
        self.cmds
            .iter()
            .filter_map(|c| match *c {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) | PathCmd::CubicTo(_, _, p) => Some(p),
                PathCmd::Close => None,
            })
            .collect()
    }

    /// SVG path data (`d` attribute) form.
    pub fn to_svg_d(&self) -> String {
        let mut out = String::new();
        for c in &self.cmds {
            match *c {
                PathCmd::MoveTo(p) => out.push_str(&format!("M{},{}", p.x, p.y)),
                PathCmd::LineTo(p) => out.push_str(&format!("L{},{}", p.x, p.y)),
                PathCmd::CubicTo(a, b, p) => {
                    out.push_str(&format!("C{},{},{},{},{},{}", a.x, a.y, b.x, b.y, p.x, p.y))
                }
                PathCmd::Close => out.push('Z'),
            }
        }
        out
    }
}

/// Smooth curve through `points` using a natural cubic spline
/// (second derivative zero at both ends).
///
/// One point gives a lone move, two points a straight segment.
pub fn natural_curve(points: &[Point]) -> PathData {
    let mut path = PathData::new();
    let Some(&first) = points.first() else { return path };
    path.move_to(first);
    match points.len() {
        1 => {}
        2 => {
            path.line_to(points[1]);
        }
        _ => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let (ax, bx) = control_points(&xs);
            let (ay, by) = control_points(&ys);
            for i in 0..points.len() - 1 {
                path.cubic_to(Point::new(ax[i], ay[i]), Point::new(bx[i], by[i]), points[i + 1]);
            }
        }
    }
    path
}

/// First and second Bézier control coordinates of each segment over knots `x`
/// (at least three), from the tridiagonal system of a natural spline.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];
    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];
    // forward sweep
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    // back substitution; `a` now holds the first control points
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }
    (a, b)
}
