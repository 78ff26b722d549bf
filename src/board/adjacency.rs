//! Area adjacency graph.
//!
//! Built once from the static edge table into a symmetric boolean matrix and
//! never mutated. Self-adjacency is not stored; "this area or adjacent"
//! queries opt into it through `include_self`.

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use super::area::{Area, AREA_COUNT};

/// Undirected edges of the city map, by area code.
#[rustfmt::skip]
const EDGES: [(u8, u8); 26] = [
    (1, 2), (1, 3), (1, 12),
    (2, 3), (2, 4), (2, 10), (2, 11), (2, 12),
    (3, 4), (3, 10),
    (4, 5), (4, 6), (4, 10),
    (5, 6), (5, 7), (5, 8), (5, 10),
    (6, 7), (6, 8), (6, 10),
    (7, 8),
    (8, 9),
    (9, 10), (9, 11),
    (10, 11),
    (11, 12),
];

/// Neighbor list; no area has more than seven neighbors plus itself.
pub type Neighbors = SmallVec<[Area; 8]>;

/// Fixed N x N adjacency matrix.
#[derive(Debug)]
pub struct AdjacencyGraph {
    matrix: [[bool; AREA_COUNT]; AREA_COUNT],
}

static CITY_MAP: Lazy<AdjacencyGraph> = Lazy::new(|| AdjacencyGraph::from_edges(&EDGES));

impl AdjacencyGraph {
    /// The standard city map.
    #[must_use]
    pub fn city() -> &'static AdjacencyGraph {
        &CITY_MAP
    }

    /// Build a graph from undirected edges given by area code.
    ///
    /// Both directions are set for every edge. Unknown codes and self-loops
    /// are ignored.
    #[must_use]
    pub fn from_edges(edges: &[(u8, u8)]) -> Self {
        let mut matrix = [[false; AREA_COUNT]; AREA_COUNT];
        for &(a, b) in edges {
            if let (Some(a), Some(b)) = (Area::from_code(a), Area::from_code(b)) {
                if a != b {
                    matrix[a.index()][b.index()] = true;
                    matrix[b.index()][a.index()] = true;
                }
            }
        }
        Self { matrix }
    }

    /// Strict adjacency: an area is never adjacent to itself.
    ///
    /// ```
    /// use ankh_engine::board::{AdjacencyGraph, Area};
    ///
    /// let map = AdjacencyGraph::city();
    /// assert!(map.are_adjacent(Area::TheShades, Area::Dimwell));
    /// assert!(map.are_adjacent(Area::Dimwell, Area::TheShades));
    /// assert!(!map.are_adjacent(Area::TheShades, Area::TheShades));
    /// ```
    #[must_use]
    pub fn are_adjacent(&self, a: Area, b: Area) -> bool {
        self.matrix[a.index()][b.index()]
    }

    /// Neighbors of `area` in code order, optionally including `area` itself.
    #[must_use]
    pub fn neighbors(&self, area: Area, include_self: bool) -> Neighbors {
        Area::ALL
            .into_iter()
            .filter(|&other| (include_self && other == area) || self.are_adjacent(area, other))
            .collect()
    }

    /// Whether `b` is `a` or adjacent to it.
    #[must_use]
    pub fn is_in_or_adjacent(&self, a: Area, b: Area) -> bool {
        a == b || self.are_adjacent(a, b)
    }
}
