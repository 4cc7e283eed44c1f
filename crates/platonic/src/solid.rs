//! The five Platonic solids: known combinatorics and the validated pipeline
//! vertices → geometry → rotation group → edge action → counts.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;

use crate::burnside::{compute_counts_with, CountCfg, CountObserver, Counts};
use crate::error::{PlatonicError, Result};
use crate::geom3::{special, GeomCfg, SolidGeometry};
use crate::symmetry::{edge_permutations, Permutation, RotationGroup, SymmetryFamily};

/// One of the five Platonic solids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Solid {
    Tetrahedron,
    Cube,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

/// Combinatorial values every extraction and closure is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownCounts {
    pub vertices: usize,
    pub edges: usize,
    pub triangles: usize,
    pub group_order: usize,
}

impl Solid {
    pub const ALL: [Solid; 5] = [
        Solid::Tetrahedron,
        Solid::Cube,
        Solid::Octahedron,
        Solid::Icosahedron,
        Solid::Dodecahedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Tetrahedron => "Tetrahedron",
            Self::Cube => "Cube",
            Self::Octahedron => "Octahedron",
            Self::Icosahedron => "Icosahedron",
            Self::Dodecahedron => "Dodecahedron",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Tetrahedron => "tetra",
            Self::Cube => "cube",
            Self::Octahedron => "octa",
            Self::Icosahedron => "ico",
            Self::Dodecahedron => "dod",
        }
    }

    pub fn known(self) -> KnownCounts {
        let (vertices, edges, triangles, group_order) = match self {
            Self::Tetrahedron => (4, 6, 4, 12),
            Self::Cube => (8, 12, 0, 24),
            Self::Octahedron => (6, 12, 8, 24),
            Self::Icosahedron => (12, 30, 20, 60),
            Self::Dodecahedron => (20, 30, 0, 60),
        };
        KnownCounts {
            vertices,
            edges,
            triangles,
            group_order,
        }
    }

    pub fn symmetry(self) -> SymmetryFamily {
        match self {
            Self::Tetrahedron => SymmetryFamily::Tetrahedral,
            Self::Cube | Self::Octahedron => SymmetryFamily::Octahedral,
            Self::Icosahedron | Self::Dodecahedron => SymmetryFamily::Icosahedral,
        }
    }

    /// Static vertex table (unit sphere).
    pub fn vertices(self) -> Vec<nalgebra::Vector3<f64>> {
        match self {
            Self::Tetrahedron => special::tetrahedron(),
            Self::Cube => special::cube(),
            Self::Octahedron => special::octahedron(),
            Self::Icosahedron => special::icosahedron(),
            Self::Dodecahedron => special::dodecahedron(),
        }
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown solid name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSolidError(pub String);

impl fmt::Display for ParseSolidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown solid `{}` (expected one of tetra, cube, octa, ico, dod)",
            self.0
        )
    }
}

impl std::error::Error for ParseSolidError {}

impl FromStr for Solid {
    type Err = ParseSolidError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tetra" | "tet" | "tetrahedron" => Ok(Self::Tetrahedron),
            "cube" | "hexahedron" => Ok(Self::Cube),
            "octa" | "oct" | "octahedron" => Ok(Self::Octahedron),
            "ico" | "icosa" | "icosahedron" => Ok(Self::Icosahedron),
            "dod" | "dodeca" | "dodecahedron" => Ok(Self::Dodecahedron),
            _ => Err(ParseSolidError(s.to_string())),
        }
    }
}

fn check(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PlatonicError::GeometryMismatch {
            what,
            expected,
            found,
        })
    }
}

/// Validated geometry and rotation group of one solid.
///
/// Invariants (established by `build`):
/// - vertex, edge and triangle counts equal `solid.known()`.
/// - `group` has exactly `solid.known().group_order` elements.
#[derive(Clone, Debug)]
pub struct SolidData {
    pub solid: Solid,
    pub geometry: SolidGeometry,
    pub group: RotationGroup,
}

impl SolidData {
    pub fn build(solid: Solid, cfg: &GeomCfg) -> Result<Self> {
        let known = solid.known();
        let geometry = SolidGeometry::from_vertices(solid.vertices(), cfg);
        check("vertices", known.vertices, geometry.vertex_count())?;
        check("edges", known.edges, geometry.edge_count())?;
        check("triangular faces", known.triangles, geometry.triangles.len())?;
        let group = RotationGroup::close_checked(&geometry.vertices, solid.symmetry(), cfg)?;
        if group.order() != known.group_order {
            return Err(PlatonicError::GroupOrderMismatch {
                expected: known.group_order,
                found: group.order(),
            });
        }
        Ok(Self {
            solid,
            geometry,
            group,
        })
    }

    /// Edge action of every group element, in group order.
    pub fn edge_permutations(&self) -> Result<Vec<Permutation>> {
        edge_permutations(&self.geometry.edges, self.group.vertex_permutations())
    }

    pub fn count(
        &self,
        cfg: &CountCfg,
        observer: &dyn CountObserver,
        cancel: Option<&AtomicBool>,
    ) -> Result<SolidReport> {
        let counts = compute_counts_with(&self.geometry, &self.group, cfg, observer, cancel)?;
        Ok(SolidReport {
            solid: self.solid,
            vertices: self.geometry.vertex_count(),
            edges: self.geometry.edge_count(),
            group_order: self.group.order(),
            has_triangles: self.geometry.has_triangles(),
            counts,
        })
    }
}

/// One result row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolidReport {
    pub solid: Solid,
    pub vertices: usize,
    pub edges: usize,
    pub group_order: usize,
    pub has_triangles: bool,
    pub counts: Counts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::burnside::NoopObserver;

    #[test]
    fn every_solid_builds_with_known_combinatorics() {
        for solid in Solid::ALL {
            let data = SolidData::build(solid, &GeomCfg::default()).unwrap();
            let known = solid.known();
            assert_eq!(data.geometry.vertex_count(), known.vertices);
            assert_eq!(data.geometry.edge_count(), known.edges);
            assert_eq!(data.group.order(), known.group_order);
            assert_eq!(data.edge_permutations().unwrap().len(), known.group_order);
        }
    }

    #[test]
    fn names_round_trip() {
        for solid in Solid::ALL {
            assert_eq!(solid.short_name().parse::<Solid>().unwrap(), solid);
            assert_eq!(solid.name().parse::<Solid>().unwrap(), solid);
        }
        assert_eq!(" ICO ".parse::<Solid>().unwrap(), Solid::Icosahedron);
        assert!("prism".parse::<Solid>().is_err());
    }

    #[test]
    fn loose_edge_tolerance_is_a_geometry_defect() {
        // with a huge clustering tolerance every vertex pair becomes an edge
        let cfg = GeomCfg {
            eps_edge: 10.0,
            ..GeomCfg::default()
        };
        let err = SolidData::build(Solid::Cube, &cfg).unwrap_err();
        assert_eq!(
            err,
            PlatonicError::GeometryMismatch {
                what: "edges",
                expected: 12,
                found: 28
            }
        );
    }

    #[test]
    fn report_for_cube() {
        let data = SolidData::build(Solid::Cube, &GeomCfg::default()).unwrap();
        let r = data.count(&CountCfg::default(), &NoopObserver, None).unwrap();
        assert_eq!((r.vertices, r.edges, r.group_order), (8, 12, 24));
        assert!(!r.has_triangles);
        assert_eq!(r.counts.valid, r.counts.connected);
    }
}
