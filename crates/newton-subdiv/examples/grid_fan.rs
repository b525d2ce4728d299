//! Print the subdivision of a small random grid.
//!
//! Usage:
//!   cargo run -p newton-subdiv --example grid_fan -- [seed]

use newton_subdiv::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let cfg = GridCfg {
        width: 3,
        height: 2,
        ..GridCfg::default()
    };
    let draw = draw_grid(cfg, ReplayToken { seed, index: 0 });
    match subdivide(&draw.polylines, SubdivCfg { unit: cfg.unit }) {
        Ok(sub) => {
            println!("points ({}):", sub.points.len());
            for (i, p) in sub.points.iter().enumerate() {
                println!("  {i:>3}: {p}");
            }
            println!(
                "cells ({} found, {} expected):",
                sub.maximal_cells.len(),
                draw.expected_cells
            );
            for cell in &sub.maximal_cells {
                println!("  {cell:?}");
            }
            println!("boundary: {:?}", sub.boundary);
        }
        Err(e) => eprintln!("subdivision failed: {e}"),
    }
}
