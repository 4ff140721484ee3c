use tiny_skia::{Path, PathBuilder};

/// A vertex in origin-centered coordinates, y pointing up.
pub type Vertex = (f32, f32);

/// A filled circular sector. Angles are in degrees, measured clockwise
/// from 12 o'clock, matching how the pie icons are laid out on screen.
#[derive(Clone, Copy, Debug)]
pub struct Wedge {
    pub radius: f32,
    /// Where the arc starts, in degrees clockwise from 12 o'clock.
    pub start_angle: f32,
    /// Angular extent in degrees; zero is a valid degenerate wedge.
    pub sweep: f32,
}

impl Wedge {
    /// Samples the outer arc as a polyline, roughly one vertex per degree.
    ///
    /// Both endpoints are included, so a zero-sweep wedge yields two
    /// coincident vertices (zero area, but never an error).
    pub fn arc_vertices(&self) -> Vec<Vertex> {
        let steps = (self.sweep.abs().ceil() as usize).max(1);
        let mut verts = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let angle = self.start_angle + self.sweep * (i as f32 / steps as f32);
            verts.push(self.point_at(angle));
        }
        verts
    }

    /// Boundary of the solid sector: the arc plus the straight edges
    /// through the center (the polygon closes back to the first vertex).
    pub fn solid_vertices(&self) -> Vec<Vertex> {
        let mut verts = self.arc_vertices();
        verts.push((0.0, 0.0));
        verts
    }

    fn point_at(&self, angle_deg: f32) -> Vertex {
        let rad = angle_deg.to_radians();
        // 0 degrees is straight up; positive angles go clockwise.
        (self.radius * rad.sin(), self.radius * rad.cos())
    }
}

/// Cuts the inner region out of a wedge, leaving a ring sector.
///
/// Takes the wedge's arc vertices (no closing edges) and a retention ratio
/// `retain` in [0, 1]: the new boundary is the original arc, then the same
/// vertices reversed and scaled by `retain` toward the origin, then a closing
/// vertex equal to the first arc vertex. Filling the closed polygon yields
/// the region between the two arcs.
///
/// `retain == 0.0` collapses the inner arc onto the center, reproducing the
/// solid wedge; `retain == 1.0` yields a zero-area (infinitesimally thin)
/// ring. Returns a new vertex list; the input is not modified.
pub fn cut_wedge(arc: &[Vertex], retain: f32) -> Vec<Vertex> {
    if arc.is_empty() {
        return Vec::new();
    }
    let mut verts = Vec::with_capacity(arc.len() * 2 + 1);
    verts.extend_from_slice(arc);
    verts.extend(arc.iter().rev().map(|&(x, y)| (x * retain, y * retain)));
    verts.push(arc[0]);
    verts
}

/// Builds a closed fillable path from a polygon, translating the
/// origin-centered y-up vertices onto a canvas with center `(cx, cy)`.
///
/// Returns `None` for degenerate polygons (fewer than two vertices), which
/// callers treat as "nothing to draw".
pub fn polygon_path(verts: &[Vertex], cx: f32, cy: f32) -> Option<Path> {
    let (&first, rest) = verts.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(cx + first.0, cy - first.1);
    for &(x, y) in rest {
        pb.line_to(cx + x, cy - y);
    }
    pb.close();
    pb.finish()
}
