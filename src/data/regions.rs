/// Width of the map coordinate space the region outlines are drawn in.
pub const MAP_WIDTH: f64 = 1000.0;
/// Height of the map coordinate space the region outlines are drawn in.
pub const MAP_HEIGHT: f64 = 620.0;

/// A region the reel knows how to draw.
#[derive(Clone, Copy, Debug)]
pub struct DeclaredRegion {
    /// Stable payload id.
    pub id: &'static str,
    /// Outline in map space (`MAP_WIDTH` × `MAP_HEIGHT`, y down), closed implicitly.
    pub outline: &'static [(f64, f64)],
}

impl DeclaredRegion {
    /// Vertex average, used as the label anchor.
    pub fn label_anchor(&self) -> (f64, f64) {
        let n = self.outline.len().max(1) as f64;
        let (sx, sy) = self
            .outline
            .iter()
            .fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
        (sx / n, sy / n)
    }
}

/// Regions in reveal order, sweeping west to east.
pub static DECLARED_REGIONS: [DeclaredRegion; 5] = [
    DeclaredRegion {
        id: "west",
        outline: &[
            (40.0, 40.0),
            (330.0, 40.0),
            (330.0, 300.0),
            (250.0, 330.0),
            (170.0, 470.0),
            (90.0, 420.0),
            (40.0, 260.0),
        ],
    },
    DeclaredRegion {
        id: "southwest",
        outline: &[
            (250.0, 330.0),
            (330.0, 300.0),
            (520.0, 300.0),
            (560.0, 420.0),
            (520.0, 560.0),
            (420.0, 600.0),
            (300.0, 520.0),
            (170.0, 470.0),
        ],
    },
    DeclaredRegion {
        id: "midwest",
        outline: &[
            (330.0, 40.0),
            (700.0, 60.0),
            (720.0, 300.0),
            (520.0, 300.0),
            (330.0, 300.0),
        ],
    },
    DeclaredRegion {
        id: "southeast",
        outline: &[
            (520.0, 300.0),
            (720.0, 300.0),
            (860.0, 320.0),
            (900.0, 380.0),
            (820.0, 460.0),
            (860.0, 600.0),
            (780.0, 580.0),
            (680.0, 480.0),
            (560.0, 420.0),
        ],
    },
    DeclaredRegion {
        id: "northeast",
        outline: &[
            (700.0, 60.0),
            (960.0, 40.0),
            (970.0, 180.0),
            (860.0, 320.0),
            (720.0, 300.0),
        ],
    },
];

/// Position of `id` in the declared order.
pub fn declared_index(id: &str) -> Option<usize> {
    DECLARED_REGIONS.iter().position(|r| r.id == id)
}

/// Comma-separated list of known ids, for error messages.
pub fn declared_ids() -> String {
    DECLARED_REGIONS
        .iter()
        .map(|r| r.id)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/data/regions.rs"]
mod tests;
