use std::fmt;

use crate::band::BandCase;

/// Counters gathered during a terracing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    /// Source triangles consumed.
    pub source_triangles: usize,
    /// Slices that produced a single flat tread.
    pub flat_slices: usize,
    pub single_above_slices: usize,
    pub double_above_slices: usize,
}

impl MeshStats {
    pub fn record(&mut self, case: BandCase) {
        match case {
            BandCase::AllBelow | BandCase::AllAbove => self.flat_slices += 1,
            BandCase::SingleAbove => self.single_above_slices += 1,
            BandCase::DoubleAbove => self.double_above_slices += 1,
        }
    }

    /// Slices recorded so far.
    pub fn emitted_slices(&self) -> usize {
        self.flat_slices + self.single_above_slices + self.double_above_slices
    }

    /// Triangles the recorded slices emitted.
    pub fn emitted_triangles(&self) -> usize {
        self.flat_slices * BandCase::AllAbove.triangle_count() as usize
            + self.single_above_slices * BandCase::SingleAbove.triangle_count() as usize
            + self.double_above_slices * BandCase::DoubleAbove.triangle_count() as usize
    }

    /// Every emitted triangle owns three fresh vertices.
    pub fn emitted_vertices(&self) -> usize {
        self.emitted_triangles() * 3
    }

    pub fn merge(&mut self, other: &MeshStats) {
        self.source_triangles += other.source_triangles;
        self.flat_slices += other.flat_slices;
        self.single_above_slices += other.single_above_slices;
        self.double_above_slices += other.double_above_slices;
    }
}

impl fmt::Display for MeshStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} source triangles -> {} triangles ({} flat, {} single-above, {} double-above)",
            self.source_triangles,
            self.emitted_triangles(),
            self.flat_slices,
            self.single_above_slices,
            self.double_above_slices,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_totals() {
        let mut stats = MeshStats::default();
        stats.record(BandCase::AllAbove);
        stats.record(BandCase::AllBelow);
        stats.record(BandCase::SingleAbove);
        stats.record(BandCase::DoubleAbove);

        assert_eq!(stats.flat_slices, 2);
        assert_eq!(stats.emitted_slices(), 4);
        assert_eq!(stats.emitted_triangles(), 1 + 1 + 3 + 4);
        assert_eq!(stats.emitted_vertices(), 27);
    }

    #[test]
    fn test_merge_adds_counters() {
        let mut a = MeshStats {
            source_triangles: 2,
            flat_slices: 1,
            ..Default::default()
        };
        let b = MeshStats {
            source_triangles: 3,
            double_above_slices: 2,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.source_triangles, 5);
        assert_eq!(a.emitted_triangles(), 1 + 8);
    }

    #[test]
    fn test_display_mentions_totals() {
        let mut stats = MeshStats {
            source_triangles: 1,
            ..Default::default()
        };
        stats.record(BandCase::SingleAbove);
        let text = stats.to_string();
        assert!(text.starts_with("1 source triangles -> 3 triangles"));
    }
}
