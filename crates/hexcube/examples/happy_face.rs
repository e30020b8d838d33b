//! hexcube happy face: set algebra over disks and lines.
//!
//! Carves two eyes and a curved mouth out of a radius-10 disk using
//! `sets::difference` and `math::line`, then prints the map.
//!
//! Run with:
//!   cargo run --example happy_face

use hexcube::prelude::*;

const RADIUS: u32 = 10;

fn cube(x: i32, y: i32, z: i32) -> Result<Cube, CoordError> {
    Cube::new(x, y, z)
}

fn render(grid: &GridBuilder) -> String {
    let size = (RADIUS * 4 + 1) as usize;
    let mut rows = vec![vec![' '; size]; (RADIUS * 2 + 1) as usize];
    for c in math::hexagon(Cube::ORIGIN, RADIUS) {
        let a = Axial::from(c);
        let col = (2 * a.q + a.r + 2 * RADIUS as i32) as usize;
        let row = (a.r + RADIUS as i32) as usize;
        rows[row][col] = if grid.all().contains(c) { '#' } else { '.' };
    }
    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let face = math::hexagon(Cube::ORIGIN, RADIUS);

    let eye_left = math::hexagon(cube(-4, 5, -1)?, 2);
    let eye_right = math::hexagon(cube(4, 1, -5)?, 2);

    // A thick arc: one disk minus a slightly smaller, shifted one.
    let mut mouth = sets::difference(
        &math::hexagon(cube(0, 1, -1)?, 8),
        &math::hexagon(cube(0, 2, -2)?, 7),
    );
    // Trim the arc's ends with two straight cuts.
    mouth = sets::difference(&mouth, &math::line(cube(8, 2, -10)?, cube(8, -10, 2)?));
    mouth = sets::difference(&mouth, &math::line(cube(-8, 10, -2)?, cube(-8, -2, 10)?));
    // Round off the bottom of the curve.
    mouth = sets::combine(&mouth, &[cube(-1, -4, 5)?, cube(1, -5, 4)?, cube(0, -5, 5)?]);
    mouth = sets::difference(&mouth, &[cube(0, -7, 7)?]);

    let mut tiles = sets::difference(&face, &eye_left);
    tiles = sets::difference(&tiles, &eye_right);
    tiles = sets::difference(&tiles, &mouth);

    let mut grid = GridBuilder::new(GridConfig::default())?;
    let created = grid.build_from_list(&tiles);
    println!(
        "{created} tiles, {} carved",
        face.len() - grid.all().len()
    );
    println!("{}", render(&grid));
    Ok(())
}
