//! hexcube random path: carve a holey map and route to its edge.
//!
//! Demonstrates:
//!   1. Building a radial map and punching deterministic holes in it
//!   2. Pruning everything the origin cannot reach
//!   3. Presenting tiles through a custom `TilePresenter`
//!   4. Walking rings inwards until a reachable target turns up
//!   5. Tagging the route in a "path" container
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example random_path [seed]

use hexcube::prelude::*;
use tracing_subscriber::EnvFilter;

// ─── Map parameters ─────────────────────────────────────────────

const RADIUS: u32 = 10;
const HOLE_PER_MILLE: u64 = 300;
const PATH_LABEL: &str = "path";

// ─── Presenter: count tiles, hand out sequential handles ────────

#[derive(Default)]
struct CountingPresenter {
    created: u64,
}

impl TilePresenter for CountingPresenter {
    fn present(&mut self, _cube: Cube, _position: WorldPos) -> Option<PayloadHandle> {
        self.created += 1;
        Some(PayloadHandle(self.created))
    }
}

fn mix(seed: u64, i: u64) -> u64 {
    (seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407)))
        >> 33
}

fn render(grid: &GridBuilder) -> String {
    let size = (RADIUS * 4 + 1) as usize;
    let mut rows = vec![vec![' '; size]; (RADIUS * 2 + 1) as usize];
    let on_path = grid.index().container(PATH_LABEL);
    for cube in math::hexagon(Cube::ORIGIN, RADIUS) {
        let a = Axial::from(cube);
        let col = (2 * a.q + a.r + 2 * RADIUS as i32) as usize;
        let row = (a.r + RADIUS as i32) as usize;
        rows[row][col] = if cube == Cube::ORIGIN {
            'O'
        } else if on_path.is_some_and(|p| p.contains(cube)) {
            '*'
        } else if grid.all().contains(cube) {
            '#'
        } else {
            '.'
        };
    }
    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .without_time()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed: u64 = match std::env::args().nth(1) {
        Some(s) => s.parse()?,
        None => 7,
    };

    let mut grid = GridBuilder::new(GridConfig::default())?;
    grid.build_radial(RADIUS);

    let holes: Vec<Cube> = grid
        .all()
        .all_coords()
        .into_iter()
        .enumerate()
        .filter(|&(i, c)| c != Cube::ORIGIN && mix(seed, i as u64) % 1000 < HOLE_PER_MILLE)
        .map(|(_, c)| c)
        .collect();
    grid.remove_many(&holes);

    let pruned = grid.prune_to_reachable(Cube::ORIGIN, RADIUS)?;
    tracing::info!(seed, holes = holes.len(), pruned, tiles = grid.all().len(), "map ready");

    let mut presenter = CountingPresenter::default();
    grid.present(&mut presenter);

    let mut steps = RADIUS;
    while steps > 0 {
        let ring = grid.all().retain_present(&math::ring(Cube::ORIGIN, steps));
        if !ring.is_empty() {
            let target = ring[(mix(seed, u64::from(steps)) % ring.len() as u64) as usize];
            match grid.find_path(Cube::ORIGIN, target) {
                Ok(path) if path.len() >= 2 => {
                    grid.copy_to(PATH_LABEL, &path);
                    println!(
                        "seed {seed}: {} tiles presented, path to {target} takes {} steps",
                        presenter.created,
                        path.len() - 1
                    );
                    break;
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(%target, error = %e, "no route"),
            }
        }
        steps -= 1;
    }
    if steps == 0 {
        println!("seed {seed}: origin is isolated");
    }

    println!("{}", render(&grid));
    Ok(())
}
