//! Graph population from road files and adjacency matrices.
//!
//! This is the boundary where external text becomes towns and roads; the
//! graph itself never sees raw records. Both formats have a string parser
//! for callers that already hold the data and a file loader on top of it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::BuildError;
use crate::graph::TownGraph;
use crate::town::Town;

/// Shape of a JSON adjacency-matrix file.
///
/// `distances` must be square with one row per entry of `towns`. Entries
/// of zero or less mean "no road".
#[derive(Debug, Deserialize)]
struct MatrixFile {
    towns: Vec<String>,
    distances: Vec<Vec<i64>>,
}

/// One parsed road-file line.
struct RoadRecord {
    name: String,
    weight: u32,
    source: String,
    destination: String,
}

/// Parses road records, one per line: `roadName,weight;source;destination`.
///
/// Endpoint towns are registered as they appear, so records can arrive in
/// any order and no town list is needed up front. Blank lines are skipped.
pub fn parse_road_file(input: &str) -> Result<TownGraph, BuildError> {
    let mut graph = TownGraph::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = parse_record(line).map_err(|reason| BuildError::MalformedRecord {
            line: index + 1,
            reason,
        })?;
        debug!(
            road = %record.name,
            weight = record.weight,
            from = %record.source,
            to = %record.destination,
            "road record"
        );
        let source = Town::new(record.source);
        let destination = Town::new(record.destination);
        graph.add_vertex(source.clone());
        graph.add_vertex(destination.clone());
        graph.add_edge(&source, &destination, record.weight, &record.name)?;
    }
    info!(
        towns = graph.vertex_count(),
        roads = graph.edges().count(),
        "graph populated from road records"
    );
    Ok(graph)
}

/// Reads and parses a semicolon-delimited road file.
pub fn load_road_file(path: impl AsRef<Path>) -> Result<TownGraph, BuildError> {
    let contents = fs::read_to_string(path)?;
    parse_road_file(&contents)
}

/// Builds a graph from parallel town names and a square distance matrix.
///
/// Entry `[i][j]` is the weight of the road from town `i` to town `j`;
/// entries of zero or less mean "no road", and the diagonal is ignored.
/// Roads built this way are labeled `"<source> to <destination>"`.
pub fn from_matrix(town_names: &[String], matrix: &[Vec<i64>]) -> Result<TownGraph, BuildError> {
    if town_names.len() != matrix.len() {
        return Err(BuildError::DimensionMismatch {
            towns: town_names.len(),
            rows: matrix.len(),
        });
    }
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != matrix.len() {
            return Err(BuildError::NotSquare {
                row,
                len: entries.len(),
                expected: matrix.len(),
            });
        }
    }
    let towns: Vec<Town> = town_names.iter().cloned().map(Town::new).collect();
    let mut graph = TownGraph::new();
    for town in &towns {
        graph.add_vertex(town.clone());
    }
    for (i, source) in towns.iter().enumerate() {
        for (j, destination) in towns.iter().enumerate() {
            if i == j {
                continue;
            }
            let entry = matrix[i][j];
            if entry <= 0 {
                continue;
            }
            let weight = u32::try_from(entry).map_err(|_| BuildError::WeightOutOfRange {
                row: i,
                col: j,
                value: entry,
            })?;
            let name = format!("{source} to {destination}");
            graph.add_edge(source, destination, weight, &name)?;
        }
    }
    info!(
        towns = graph.vertex_count(),
        roads = graph.edges().count(),
        "graph populated from matrix"
    );
    Ok(graph)
}

/// Parses a JSON adjacency matrix, `{"towns": [...], "distances": [[...]]}`.
pub fn parse_matrix_file(input: &str) -> Result<TownGraph, BuildError> {
    let file: MatrixFile = serde_json::from_str(input)?;
    from_matrix(&file.towns, &file.distances)
}

/// Reads and parses a JSON adjacency-matrix file.
pub fn load_matrix_file(path: impl AsRef<Path>) -> Result<TownGraph, BuildError> {
    let contents = fs::read_to_string(path)?;
    parse_matrix_file(&contents)
}

fn parse_record(line: &str) -> Result<RoadRecord, String> {
    let fields: Vec<&str> = line.split(';').collect();
    let [head, source, destination] = fields.as_slice() else {
        return Err(format!(
            "expected `roadName,weight;source;destination`, found {} field(s)",
            fields.len()
        ));
    };
    let Some((name, weight)) = head.split_once(',') else {
        return Err("missing `,` between road name and weight".to_string());
    };
    let name = name.trim();
    let weight = weight.trim();
    let source = source.trim();
    let destination = destination.trim();
    if name.is_empty() {
        return Err("empty road name".to_string());
    }
    if source.is_empty() || destination.is_empty() {
        return Err("empty town name".to_string());
    }
    let weight: u32 = weight
        .parse()
        .map_err(|_| format!("invalid weight `{weight}`"))?;
    Ok(RoadRecord {
        name: name.to_string(),
        weight,
        source: source.to_string(),
        destination: destination.to_string(),
    })
}
