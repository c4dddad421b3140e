//! Slicing source triangles into terrace bands.
//!
//! Every triangle is cut by the horizontal planes at each integer height
//! between its lowest and highest vertex. Each slice becomes either a flat
//! tread (one triangle) or a vertical riser with a tread on top (three or
//! four triangles), lifted to `level * step`. Every emitted triangle gets
//! three fresh vertices; nothing is shared between triangles.

use glam::Vec3;
use terrace_grid::{HexMap, SourceTriangle, SquareMap};

use crate::band::{BandCase, BandUv, classify};
use crate::buffers::TerraceBuffers;
use crate::error::TerraceError;
use crate::stats::MeshStats;

/// Vertical distance between two terrace levels unless configured otherwise.
pub const DEFAULT_STEP: f32 = 0.5;

/// Upper bound on vertices a single slice can emit (four triangles).
const MAX_SLICE_VERTICES: u64 = 12;

/// Validated terracing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerraceParams {
    max_height: u32,
    step: f32,
}

impl TerraceParams {
    /// `max_height` is the number of UV bands, `step` the height of one
    /// terrace in world units.
    pub fn new(max_height: u32, step: f32) -> Result<Self, TerraceError> {
        if max_height == 0 {
            return Err(TerraceError::ZeroMaxHeight);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(TerraceError::InvalidStep(step));
        }
        Ok(Self { max_height, step })
    }

    /// Parameters with [`DEFAULT_STEP`].
    pub fn with_max_height(max_height: u32) -> Result<Self, TerraceError> {
        Self::new(max_height, DEFAULT_STEP)
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

#[inline]
fn at_height(v: Vec3, height: f32) -> Vec3 {
    Vec3::new(v.x, height, v.z)
}

/// Terrace one triangle into `buffers`.
///
/// Indices are written as `running + local`, and the advanced counter is
/// returned so the caller can feed it into the next call. A triangle with a
/// non-finite coordinate is rejected before anything is emitted.
pub fn terrace_triangle(
    tri: &SourceTriangle,
    params: &TerraceParams,
    buffers: &mut TerraceBuffers,
    running: u32,
) -> Result<u32, TerraceError> {
    slice_triangle(tri, params, buffers, running, &mut MeshStats::default())
}

fn slice_triangle(
    tri: &SourceTriangle,
    params: &TerraceParams,
    buffers: &mut TerraceBuffers,
    mut running: u32,
    stats: &mut MeshStats,
) -> Result<u32, TerraceError> {
    if !tri.is_finite() {
        return Err(TerraceError::NonFiniteHeight {
            vertices: tri.vertices(),
        });
    }

    let min = tri.min_height().floor() as i32;
    let max = tri.max_height().floor() as i32;

    let levels = (i64::from(max) - i64::from(min) + 1) as u64;
    if u64::from(running) + levels * MAX_SLICE_VERTICES > u64::from(u32::MAX) + 1 {
        return Err(TerraceError::IndexOverflow);
    }

    stats.source_triangles += 1;
    let step = params.step;

    for level in min..=max {
        let (case, [v1, v2, v3]) = classify(tri.a, tri.b, tri.c, level);
        let uv = BandUv::new(level, params.max_height);

        let height = level as f32 * step;
        let v0_u = at_height(v1, height);
        let v1_u = at_height(v2, height);
        let v2_u = at_height(v3, height);

        if case.is_flat() {
            buffers.push_triangle([v0_u, v1_u, v2_u], &uv, running);
            running += 3;
            stats.record(case);
            continue;
        }

        // `v2` lies strictly on the other side of the plane from `v1` and
        // `v3`, so neither denominator is zero and both ratios are in [0, 1].
        let plane = level as f32;
        let t0 = (v1.y - plane) / (v1.y - v2.y);
        let t1 = (v3.y - plane) / (v3.y - v2.y);
        debug_assert!(t0.is_finite() && t1.is_finite(), "level {level}: t0 {t0}, t1 {t1}");

        let v0_d = at_height(v1, height - step);
        let v1_d = at_height(v2, height - step);
        let v2_d = at_height(v3, height - step);

        let v0_d_t = v0_d.lerp(v1_d, t0);
        let v0_u_t = v0_u.lerp(v1_u, t0);
        let v2_d_t = v2_d.lerp(v1_d, t1);
        let v2_u_t = v2_u.lerp(v1_u, t1);

        // Riser.
        buffers.push_triangle([v0_d_t, v0_u_t, v2_u_t], &uv, running);
        buffers.push_triangle([v0_d_t, v2_u_t, v2_d_t], &uv, running + 3);
        running += 6;

        // Tread.
        if case == BandCase::SingleAbove {
            buffers.push_triangle([v0_u_t, v1_u, v2_u_t], &uv, running);
            running += 3;
        } else {
            buffers.push_triangle([v0_u_t, v0_u, v2_u], &uv, running);
            buffers.push_triangle([v0_u_t, v2_u, v2_u_t], &uv, running + 3);
            running += 6;
        }
        stats.record(case);
    }

    Ok(running)
}

/// Accumulates the terraced output of many triangles into one set of
/// buffers.
#[derive(Debug)]
pub struct Terracer {
    params: TerraceParams,
    buffers: TerraceBuffers,
    running: u32,
    stats: MeshStats,
}

impl Terracer {
    pub fn new(params: TerraceParams) -> Self {
        Self {
            params,
            buffers: TerraceBuffers::new(),
            running: 0,
            stats: MeshStats::default(),
        }
    }

    /// Pre-size the buffers for roughly `triangles` source triangles.
    pub fn with_capacity(params: TerraceParams, triangles: usize) -> Self {
        Self {
            buffers: TerraceBuffers::with_capacity(triangles * 3, triangles * 3),
            ..Self::new(params)
        }
    }

    pub fn push(&mut self, tri: &SourceTriangle) -> Result<(), TerraceError> {
        self.running = slice_triangle(
            tri,
            &self.params,
            &mut self.buffers,
            self.running,
            &mut self.stats,
        )?;
        Ok(())
    }

    /// Terrace every triangle, stopping at the first error.
    pub fn extend<I>(&mut self, triangles: I) -> Result<(), TerraceError>
    where
        I: IntoIterator<Item = SourceTriangle>,
    {
        for tri in triangles {
            self.push(&tri)?;
        }
        Ok(())
    }

    pub fn params(&self) -> &TerraceParams {
        &self.params
    }

    pub fn buffers(&self) -> &TerraceBuffers {
        &self.buffers
    }

    pub fn stats(&self) -> &MeshStats {
        &self.stats
    }

    pub fn finish(self) -> TerraceBuffers {
        self.buffers
    }

    pub fn finish_with_stats(self) -> (TerraceBuffers, MeshStats) {
        (self.buffers, self.stats)
    }
}

/// Terrace a stream of triangles into fresh buffers.
pub fn terrace_triangles<I>(triangles: I, params: &TerraceParams) -> Result<TerraceBuffers, TerraceError>
where
    I: IntoIterator<Item = SourceTriangle>,
{
    let mut terracer = Terracer::new(*params);
    terracer.extend(triangles)?;
    Ok(terracer.finish())
}

/// Terrace every base triangle of a square map.
pub fn terrace_square_map(
    map: &SquareMap,
    params: &TerraceParams,
) -> Result<(TerraceBuffers, MeshStats), TerraceError> {
    let _span = tracing::debug_span!(
        "terrace_square_map",
        width = map.width(),
        height = map.height()
    )
    .entered();

    let mut terracer = Terracer::with_capacity(*params, map.mesh().triangle_count());
    terracer.extend(map.source_triangles())?;
    let (buffers, stats) = terracer.finish_with_stats();

    tracing::debug!(
        vertices = buffers.vertex_count(),
        triangles = buffers.triangle_count(),
        "terraced square map: {stats}"
    );
    Ok((buffers, stats))
}

/// Terrace every fan triangle of a hex map.
pub fn terrace_hex_map(
    map: &HexMap,
    params: &TerraceParams,
) -> Result<(TerraceBuffers, MeshStats), TerraceError> {
    let _span =
        tracing::debug_span!("terrace_hex_map", width = map.width(), rows = map.rows()).entered();

    let mut terracer = Terracer::with_capacity(*params, map.cells().len() * 6);
    terracer.extend(map.source_triangles())?;
    let (buffers, stats) = terracer.finish_with_stats();

    tracing::debug!(
        vertices = buffers.vertex_count(),
        triangles = buffers.triangle_count(),
        "terraced hex map: {stats}"
    );
    Ok((buffers, stats))
}
