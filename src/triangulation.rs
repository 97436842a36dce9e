use std::collections::{HashMap, HashSet};

use anyhow::Result;
use geogram_predicates as gp;
use log::error;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    bounds::BoundingBox,
    circumcircle::{CandidateStatus, Circumcircle},
    config::Config,
    edges::cancel_shared_edges,
    error::TriangulationError,
    utils::{
        convexity::ccw_order,
        helper::DisplayWrapper,
        point_order::sort_for_sweep,
        types::{Edge, Triangle2, TriangleIdxs, Vertex2, VertexIdx},
    },
    VertexNode,
};

/// A 2D Delaunay triangulation, built by an incremental left-to-right sweep.
///
/// ```
/// use tessel::Triangulation;
///
/// let vertices = vec![
///     [0.0, 0.0],
///     [-0.5, 1.0],
///     [0.0, 2.5],
///     [2.0, 3.0],
///     [4.0, 2.5],
///     [5.0, 1.5],
///     [4.5, 0.5],
///     [2.5, -0.5],
///     [1.5, 1.5],
///     [3.0, 1.0],
/// ];
///
/// let mut triangulation = Triangulation::new(None); // specify a config here
/// triangulation.triangulate(&vertices).unwrap();
///
/// assert_eq!(triangulation.num_tris(), 10);
/// assert_eq!(triangulation.is_delaunay_p(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Triangulation {
    config: Config,
    vertices: Vec<Vertex2>,
    /// The emitted triangles with their circumcircles, none touches a super triangle corner.
    circles: Vec<Circumcircle>,
    /// Flat index triples, one per emitted triangle.
    triangle_indices: Vec<VertexIdx>,
    /// Triangles that were locked during the sweep, before finalizing.
    num_locked_early: usize,
    time_setup: u128,
    time_sweeping: u128,
    time_finalizing: u128,
}

impl Default for Triangulation {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Create a new [`Triangulation`] from vertices with an optional epsilon.
///
/// Errors are dropped, a failed triangulation has no triangles.
///
/// ## Example
/// ```
/// # use tessel::triangulation;
/// triangulation!(&[[0.0, 9.9], [6.9, 12.3], [5.2, 3.33]]);
/// // with epsilon
/// triangulation!(&[[0.0, 9.9], [6.9, 12.3], [5.2, 3.33]], epsilon = 1e-9);
/// ```
#[macro_export]
macro_rules! triangulation {
    ($vertices:expr) => {{
        let mut triangulation = $crate::Triangulation::new_with_vert_capacity(None, $vertices.len());
        let _ = triangulation.triangulate($vertices);
        triangulation
    }};
    ($vertices:expr, epsilon = $epsilon:expr) => {{
        let config = $crate::Config::new().with_epsilon($epsilon);
        let mut triangulation =
            $crate::Triangulation::new_with_vert_capacity(Some(config), $vertices.len());
        let _ = triangulation.triangulate($vertices);
        triangulation
    }};
}

/// Triangulate `vertices` with the default [`Config`].
///
/// Returns a flat list of index triples into `vertices`, empty for fewer than 3 or more than
/// 2000 vertices.
pub fn triangulate(vertices: &[Vertex2]) -> Result<Vec<VertexIdx>> {
    let mut triangulation = Triangulation::new_with_vert_capacity(None, vertices.len());
    triangulation.triangulate(vertices)?;

    Ok(triangulation.triangle_indices)
}

/// The state of one sweep, over the input followed by the super triangle corners.
struct Sweep {
    vertices: Vec<Vertex2>,
    num_input: usize,
    epsilon: f64,
    candidates: Vec<Circumcircle>,
    locked: Vec<Circumcircle>,
    edges: Vec<Edge>,
}

impl Sweep {
    fn new(vertices: Vec<Vertex2>, num_input: usize, epsilon: f64) -> Result<Self> {
        let seed = Circumcircle::new(&vertices, num_input, num_input + 1, num_input + 2, epsilon)?;

        Ok(Self {
            vertices,
            num_input,
            epsilon,
            candidates: vec![seed],
            locked: Vec::new(),
            edges: Vec::new(),
        })
    }

    /// Break up the candidates whose circumcircle holds `v_idx` and fill the cavity.
    fn insert(&mut self, v_idx: VertexIdx) -> Result<()> {
        let v = self.vertices[v_idx];
        self.edges.clear();

        // backwards, so swap_remove only moves candidates that were already tested
        for tri_idx in (0..self.candidates.len()).rev() {
            match self.candidates[tri_idx].status(v, self.epsilon) {
                CandidateStatus::Final => {
                    let tri = self.candidates.swap_remove(tri_idx);
                    self.locked.push(tri);
                }
                CandidateStatus::Outside => (),
                CandidateStatus::Broken => {
                    let tri = self.candidates.swap_remove(tri_idx);
                    self.edges.extend(tri.edges());
                }
            }
        }

        cancel_shared_edges(&mut self.edges);

        for &[a, b] in self.edges.iter().rev() {
            let tri = Circumcircle::new(&self.vertices, a, b, v_idx, self.epsilon)?;
            self.candidates.push(tri);
        }

        Ok(())
    }

    /// Lock all remaining candidates and keep the triangles without super triangle corners.
    fn finalize(mut self) -> (Vec<Circumcircle>, usize) {
        let num_locked_early = self.locked.len();
        self.locked.extend(self.candidates.drain(..).rev());

        let num_input = self.num_input;
        self.locked.retain(|tri| {
            tri.nodes()
                .iter()
                .all(|&idx| !VertexNode::from_idx(idx, num_input).is_synthetic())
        });

        (self.locked, num_locked_early)
    }
}

impl Triangulation {
    pub const fn new(config: Option<Config>) -> Self {
        let config = match config {
            Some(config) => config,
            None => Config::new(),
        };

        Self {
            config,
            vertices: Vec::new(),
            circles: Vec::new(),
            triangle_indices: Vec::new(),
            num_locked_early: 0,
            time_setup: 0,
            time_sweeping: 0,
            time_finalizing: 0,
        }
    }

    /// Create a new `Triangulation` with a pre-allocated capacity for vertices
    pub fn new_with_vert_capacity(config: Option<Config>, capacity: usize) -> Self {
        let mut triangulation = Self::new(config);
        triangulation.vertices.reserve(capacity + 3);
        triangulation
    }

    /// Triangulate a set of vertices, replacing any previous result.
    ///
    /// Fewer than 3 or more than [`Config::max_vertices`] vertices give an empty triangulation.
    /// Fails with [`TriangulationError::DegenerateTriangle`] when a circumcircle through three
    /// y-aligned vertices would be needed, in which case no triangles are kept.
    pub fn triangulate(&mut self, vertices: &[Vertex2]) -> Result<()> {
        self.config.validate()?;

        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        self.circles.clear();
        self.triangle_indices.clear();
        self.num_locked_early = 0;

        let n = vertices.len();

        if n < 3 || n > self.config.max_vertices {
            log::debug!(
                "Skipping triangulation of {} vertices, expected 3 to {}",
                n,
                self.config.max_vertices
            );
            return Ok(());
        }

        let now = std::time::Instant::now();

        let mut idxs_to_insert = sort_for_sweep(vertices, &(0..n).collect::<Vec<_>>());

        let bbox = BoundingBox::from_vertices(vertices)
            .ok_or_else(|| anyhow::Error::msg("Needs at least 1 vertex to compute a bounding box!"))?;

        // every triangle over the input would be y-aligned
        if bbox.height() < self.config.epsilon {
            let [a, b, c] = [n - 1, n - 2, n - 3].map(|i| idxs_to_insert[i]);
            return Err(TriangulationError::DegenerateTriangle {
                vertices: [a, b, c],
            }
            .into());
        }

        let super_tri = bbox.super_triangle(self.config.super_triangle_margin);
        log::trace!(
            "Super triangle: {}, {}, {}",
            DisplayWrapper(super_tri[0]),
            DisplayWrapper(super_tri[1]),
            DisplayWrapper(super_tri[2])
        );

        let mut working = self.vertices.clone();
        working.extend_from_slice(&super_tri);

        let mut sweep = Sweep::new(working, n, self.config.epsilon)?;
        self.time_setup = now.elapsed().as_micros();

        let now = std::time::Instant::now();
        while let Some(v_idx) = idxs_to_insert.pop() {
            sweep.insert(v_idx)?;
        }
        self.time_sweeping = now.elapsed().as_micros();

        let now = std::time::Instant::now();
        let (circles, num_locked_early) = sweep.finalize();

        self.triangle_indices = circles.iter().flat_map(|tri| tri.nodes()).collect();
        self.circles = circles;
        self.num_locked_early = num_locked_early;
        self.time_finalizing = now.elapsed().as_micros();

        log::debug!(
            "Triangulated {} vertices into {} tris ({} locked during the sweep)",
            n,
            self.num_tris(),
            self.num_locked_early
        );
        self.log_time();

        Ok(())
    }

    /// Check if a triangle is flat, i.e. exists of three co-linear vertices.
    pub fn is_tri_flat(&self, tri_idx: usize) -> bool {
        ccw_order(self.circles[tri_idx].nodes(), &self.vertices).is_none()
    }

    /// Check for a vertex, if it lies strictly inside the circumcircle of a triangle.
    ///
    /// Uses the exact lifted orientation predicate; flat triangles contain nothing.
    pub fn is_v_in_circumcircle(&self, v_idx: VertexIdx, tri_idx: usize) -> bool {
        let Some([a, b, c]) = ccw_order(self.circles[tri_idx].nodes(), &self.vertices) else {
            return false;
        };

        let height = |idx: VertexIdx| self.vertices[idx][0].powi(2) + self.vertices[idx][1].powi(2);

        let in_circle = gp::orient_2dlifted_SOS(
            &self.vertices[a],
            &self.vertices[b],
            &self.vertices[c],
            &self.vertices[v_idx],
            height(a),
            height(b),
            height(c),
            height(v_idx),
        );

        in_circle > 0
    }

    fn is_tri_violated(&self, tri_idx: usize) -> bool {
        if self.is_tri_flat(tri_idx) {
            return true;
        }

        let nodes = self.circles[tri_idx].nodes();
        (0..self.vertices.len())
            .filter(|v_idx| !nodes.contains(v_idx))
            .any(|v_idx| self.is_v_in_circumcircle(v_idx, tri_idx))
    }

    /// Check if the triangulation is Delaunay w.r.t. the empty circumcircle property.
    ///
    /// Returns if the validation is valid and to what degree.
    pub fn is_delaunay(&self) -> (bool, f64) {
        let mut num_violated_tris = 0;

        for tri_idx in 0..self.num_tris() {
            if self.is_tri_flat(tri_idx) {
                error!("Flat triangle: {}", self.circles[tri_idx]);
                num_violated_tris += 1;
            } else if self.is_tri_violated(tri_idx) {
                error!("Non Delaunay triangle: {}", self.circles[tri_idx]);
                num_violated_tris += 1;
            }
        }

        (num_violated_tris == 0, self.delaunay_ratio(num_violated_tris))
    }

    /// Checks the empty circumcircle property in a parallel manner using `rayon`s `par_iter()`.
    #[must_use]
    pub fn is_delaunay_p(&self) -> f64 {
        let tri_idxs: Vec<usize> = (0..self.num_tris()).collect();

        let num_violated_tris = tri_idxs
            .par_iter()
            .filter(|&&tri_idx| self.is_tri_violated(tri_idx))
            .count();

        self.delaunay_ratio(num_violated_tris)
    }

    /// Check that no vertex lies inside a circumcircle by more than the configured epsilon.
    ///
    /// This is the guarantee of the sweep itself, it compares squared distances like the sweep does.
    pub fn is_delaunay_eps(&self) -> bool {
        self.circles.iter().all(|tri| {
            let nodes = tri.nodes();
            self.vertices
                .iter()
                .enumerate()
                .filter(|(v_idx, _)| !nodes.contains(v_idx))
                .all(|(_, &v)| !tri.contains(v, self.config.epsilon))
        })
    }

    fn delaunay_ratio(&self, num_violated_tris: usize) -> f64 {
        if self.num_tris() == 0 {
            return 1.0;
        }
        1.0 - num_violated_tris as f64 / self.num_tris() as f64
    }

    /// The number of vertices on the boundary, i.e. on edges used by a single triangle.
    pub fn num_hull_vertices(&self) -> usize {
        let mut edge_count: HashMap<Edge, usize> = HashMap::new();

        for tri in &self.circles {
            for [a, b] in tri.edges() {
                *edge_count.entry([a.min(b), a.max(b)]).or_insert(0) += 1;
            }
        }

        edge_count
            .iter()
            .filter(|(_, count)| **count == 1)
            .flat_map(|(edge, _)| *edge)
            .collect::<HashSet<_>>()
            .len()
    }

    /// The number of triangles, i.e. index triples.
    pub fn num_tris(&self) -> usize {
        self.circles.len()
    }

    /// The number of triangles that were locked during the sweep, before finalizing.
    pub const fn num_locked_early(&self) -> usize {
        self.num_locked_early
    }

    /// The flat list of index triples into [`Self::vertices`].
    pub fn triangle_indices(&self) -> &[VertexIdx] {
        &self.triangle_indices
    }

    /// The triangles as index triples.
    pub fn tri_idxs(&self) -> Vec<TriangleIdxs> {
        self.circles.iter().map(|tri| tri.nodes()).collect()
    }

    /// Get the triangles of the triangulation as `Triangle2`, i.e `[[f64; 2]; 3]`.
    pub fn tris(&self) -> Vec<Triangle2> {
        self.circles
            .iter()
            .map(|tri| tri.nodes().map(|idx| self.vertices[idx]))
            .collect()
    }

    /// The circumcircles of the triangles, in the order of [`Self::tri_idxs`].
    pub fn circumcircles(&self) -> &[Circumcircle] {
        &self.circles
    }

    /// Get the vertices of the last call to [`Self::triangulate`].
    pub fn vertices(&self) -> &[Vertex2] {
        &self.vertices
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn log_time(&self) {
        log::debug!("-------------------------------------------");
        log::debug!("Time elapsed:");
        log::debug!("Setup computed in {} μs", self.time_setup);
        log::debug!("Sweep computed in {} μs", self.time_sweeping);
        log::debug!("Finalizing computed in {} μs", self.time_finalizing);
    }
}

impl core::fmt::Display for Triangulation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Triangulation with {} vertices and {} tris",
            self.vertices.len(),
            self.num_tris()
        )
    }
}
