//! Grid the reference channel (bumped floor, flat lid) and print a few rows.
//!
//! Usage:
//!   cargo run -p tfigrid --example channel -- [nx] [ny]
//!
//! Defaults to 49 × 19 divisions. Writes nothing to disk; the `tfigrid` CLI
//! handles export.

use tfigrid::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let nx = args.next().and_then(|s| s.parse().ok()).unwrap_or(49usize);
    let ny = args.next().and_then(|s| s.parse().ok()).unwrap_or(19usize);

    let bottom = Bump::new(-10.0, 5.0, -3.0);
    let right = VLine::new(5.0, 0.0, 3.0);
    let top = HLine::new(-10.0, 5.0, 3.0);
    let left = VLine::new(-10.0, 0.0, 3.0);

    let mut domain = match Domain::new(&bottom, &right, &top, &left) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let grid = match domain.generate(nx, ny) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let (lo, hi) = grid.bounding_box();
    println!(
        "{}x{} grid, {} points, bounds ({:.3}, {:.3})..({:.3}, {:.3})",
        nx,
        ny,
        grid.len(),
        lo.x,
        lo.y,
        hi.x,
        hi.y
    );
    for j in [0, ny / 2, ny] {
        let mid = grid.point(nx / 2, j);
        println!("row {j}: mid-channel point ({:.4}, {:.4})", mid.x, mid.y);
    }
}
