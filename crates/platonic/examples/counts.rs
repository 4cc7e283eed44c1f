//! Print orbit counts for the small solids.
//!
//! Usage:
//!   cargo run -p platonic --release --example counts
//!   cargo run -p platonic --release --example counts -- all
//!
//! `all` adds the icosahedron and dodecahedron (minutes in release).

use platonic::burnside::{CountCfg, NoopObserver};
use platonic::geom3::GeomCfg;
use platonic::solid::{Solid, SolidData};

fn main() -> platonic::Result<()> {
    let solids: &[Solid] = match std::env::args().nth(1).as_deref() {
        Some("all") => &Solid::ALL,
        _ => &[Solid::Tetrahedron, Solid::Cube, Solid::Octahedron],
    };
    println!(
        "{:<14} {:>3} {:>3} {:>3} {:>10} {:>10} {:>10}",
        "solid", "V", "E", "G", "all", "connected", "valid"
    );
    for &solid in solids {
        let data = SolidData::build(solid, &GeomCfg::default())?;
        let r = data.count(&CountCfg::default(), &NoopObserver, None)?;
        println!(
            "{:<14} {:>3} {:>3} {:>3} {:>10} {:>10} {:>10}",
            solid.name(),
            r.vertices,
            r.edges,
            r.group_order,
            r.counts.all,
            r.counts.connected,
            r.counts.valid
        );
    }
    Ok(())
}
