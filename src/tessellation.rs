//! Random background tessellations of a view box.
//!
//! A [`Tessellation`] owns the view box and the generator parameters. Each call to
//! [`Tessellation::next`] scatters a jittered grid over the view box, triangulates it, and hands
//! the result out as a [`Frame`]. Drawing the frame and fading between frames is up to the caller.

use core::str::FromStr;

use anyhow::Result;
use rand::Rng;

use crate::{
    triangulation::Triangulation,
    utils::types::{Triangle2, Vertex2, VertexIdx},
};

/// Grid spacing in viewport units.
pub const DEFAULT_GRID_SPACING: f64 = 250.0;

/// How far a vertex may leave its grid position, as a share of the grid size.
pub const DEFAULT_SCATTER: f64 = 0.75;

/// The drawing area in its own coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl FromStr for ViewBox {
    type Err = anyhow::Error;

    /// Parses `"min-x min-y width height"`, separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()?;

        let [_, _, width, height] = values[..] else {
            return Err(anyhow::Error::msg(format!(
                "A view box needs 4 values, got {}",
                values.len()
            )));
        };

        if !(width > 0.0 && height > 0.0) {
            return Err(anyhow::Error::msg("A view box needs a positive width and height"));
        }

        Ok(Self { width, height })
    }
}

/// One triangulated point set, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub vertices: Vec<Vertex2>,
    /// Flat index triples into `vertices`.
    pub triangles: Vec<VertexIdx>,
}

impl Frame {
    pub fn num_tris(&self) -> usize {
        self.triangles.len() / 3
    }

    /// The corners of each triangle.
    pub fn polygons(&self) -> impl Iterator<Item = Triangle2> + '_ {
        self.triangles
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]].map(|idx| self.vertices[idx]))
    }
}

/// Generator of random tessellations for one view box.
#[derive(Debug, Clone)]
pub struct Tessellation {
    view_box: ViewBox,
    grid_spacing: f64,
    scatter: f64,
    triangulation: Triangulation,
    num_frames: usize,
}

impl Tessellation {
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box,
            grid_spacing: DEFAULT_GRID_SPACING,
            scatter: DEFAULT_SCATTER,
            triangulation: Triangulation::default(),
            num_frames: 0,
        }
    }

    #[must_use]
    pub const fn with_grid_spacing(mut self, grid_spacing: f64) -> Self {
        self.grid_spacing = grid_spacing;
        self
    }

    #[must_use]
    pub const fn with_scatter(mut self, scatter: f64) -> Self {
        self.scatter = scatter;
        self
    }

    #[must_use]
    pub fn with_triangulation(mut self, triangulation: Triangulation) -> Self {
        self.triangulation = triangulation;
        self
    }

    pub const fn view_box(&self) -> &ViewBox {
        &self.view_box
    }

    /// The number of frames produced so far.
    pub const fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// The grid size in view box units, such that the grid spacing holds on screen.
    ///
    /// The view box is scaled to fit the viewport along its tighter side.
    pub fn grid_size(&self, viewport: [f64; 2]) -> f64 {
        let [w_width, w_height] = viewport;
        let ViewBox { width, height } = self.view_box;

        if w_width / w_height > width / height {
            self.grid_spacing * width / w_width
        } else {
            self.grid_spacing * height / w_height
        }
    }

    /// Scatter one vertex per grid cell, with one extra cell on each side of the view box.
    pub fn scatter_vertices<R: Rng>(&self, viewport: [f64; 2], rng: &mut R) -> Vec<Vertex2> {
        let grid_size = self.grid_size(viewport);
        let ViewBox { width, height } = self.view_box;

        let x_offset = (width % grid_size) / 2.0;
        let y_offset = (height % grid_size) / 2.0;
        let x_cells = (width / grid_size).floor() as i64;
        let y_cells = (height / grid_size).floor() as i64;

        let mut vertices = Vec::new();
        for x in (-1..=x_cells + 1).rev() {
            for y in (-1..=y_cells + 1).rev() {
                let jitter_x = self.scatter * (rng.random::<f64>() - 0.5);
                let jitter_y = self.scatter * (rng.random::<f64>() - 0.5);

                vertices.push([
                    x_offset + grid_size * (x as f64 + jitter_x),
                    y_offset + grid_size * (y as f64 + jitter_y),
                ]);
            }
        }

        vertices
    }

    /// Produce the next random tessellation.
    pub fn next<R: Rng>(&mut self, viewport: [f64; 2], rng: &mut R) -> Result<Frame> {
        let vertices = self.scatter_vertices(viewport, rng);
        self.triangulation.triangulate(&vertices)?;
        self.num_frames += 1;

        log::debug!(
            "Frame {}: {} vertices, {} tris",
            self.num_frames,
            vertices.len(),
            self.triangulation.num_tris()
        );

        Ok(Frame {
            vertices,
            triangles: self.triangulation.triangle_indices().to_vec(),
        })
    }
}
