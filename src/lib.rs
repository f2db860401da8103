//! tsp-planner core
//!
//! A weighted directed graph of named towns, with greedy and exact
//! closed-tour construction over it.

pub mod builder;
pub mod error;
pub mod graph;
pub mod manager;
pub mod report;
pub mod road;
pub mod town;

mod solver;
