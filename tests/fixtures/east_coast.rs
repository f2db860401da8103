//! Seven east-coast towns with real driving distances in miles.
//!
//! Entry `[i][j]` of the matrix is the road from town `i` to town `j`.
//! Distances are directional and slightly asymmetric, the way one-way
//! street routing usually comes out.

use tsp_planner::builder;
use tsp_planner::graph::TownGraph;

pub const TOWNS: &[&str] = &[
    "Rockville",
    "Silver Spring",
    "Philadelphia",
    "Pittsburgh",
    "Baltimore",
    "Cleveland",
    "New York City",
];

pub const DISTANCES: &[[i64; 7]; 7] = &[
    [0, 13, 142, 225, 40, 352, 227],   // Rockville
    [13, 0, 136, 237, 34, 363, 222],   // Silver Spring
    [141, 135, 0, 305, 101, 432, 97],  // Philadelphia
    [226, 237, 304, 0, 248, 133, 371], // Pittsburgh
    [40, 34, 106, 248, 0, 374, 192],   // Baltimore
    [352, 364, 431, 133, 375, 0, 462], // Cleveland
    [228, 222, 97, 370, 188, 462, 0],  // New York City
];

/// Town names in matrix order, owned.
pub fn town_names() -> Vec<String> {
    TOWNS.iter().map(|name| name.to_string()).collect()
}

/// Distance rows in matrix order, owned.
pub fn distance_rows() -> Vec<Vec<i64>> {
    DISTANCES.iter().map(|row| row.to_vec()).collect()
}

/// The seven-town graph, with a road in both directions between every
/// pair of towns.
pub fn graph() -> TownGraph {
    builder::from_matrix(&town_names(), &distance_rows()).expect("east coast matrix is square")
}
