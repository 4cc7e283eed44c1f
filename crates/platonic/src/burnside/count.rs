//! Burnside aggregation: per-element fixed-subset counts, summed and divided
//! by the group order.
//!
//! Work is partitioned into `(element, union range)` items. Each item is mapped
//! to a local `Counts` and the items are reduced by elementwise addition, so
//! there is no shared mutable counter and the result does not depend on the
//! schedule. With the `parallel` feature the items run on rayon's pool.

use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{PlatonicError, Result};
use crate::geom3::SolidGeometry;
use crate::symmetry::{edge_permutations, Permutation, RotationGroup};

use super::classify::{bit, EdgeMask, SubsetClassifier};
use super::unions::{union_count, CycleUnions};

/// Per-category subset counts ("All Combinations", "All Connected",
/// "Valid Incomplete").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counts {
    pub all: u64,
    pub connected: u64,
    pub valid: u64,
}

impl Add for Counts {
    type Output = Counts;
    #[inline]
    fn add(self, rhs: Counts) -> Counts {
        Counts {
            all: self.all + rhs.all,
            connected: self.connected + rhs.connected,
            valid: self.valid + rhs.valid,
        }
    }
}

impl AddAssign for Counts {
    #[inline]
    fn add_assign(&mut self, rhs: Counts) {
        *self = *self + rhs;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Counts>>(iter: I) -> Counts {
        iter.fold(Counts::default(), Add::add)
    }
}

/// Counting configuration.
#[derive(Clone, Copy, Debug)]
pub struct CountCfg {
    /// Run work items on the rayon pool (ignored without the `parallel` feature).
    pub parallel: bool,
    /// Each work item covers at most `2^batch_bits` cycle unions of one element.
    pub batch_bits: u32,
    /// Size of a dedicated worker pool; `None` uses rayon's global pool.
    /// `Some(0)` lets rayon pick the thread count.
    pub workers: Option<usize>,
}

impl Default for CountCfg {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            batch_bits: 16,
            workers: None,
        }
    }
}

/// Progress notifications emitted while counting.
#[derive(Clone, Debug, PartialEq)]
pub enum CountEvent {
    Started {
        elements: usize,
        work_items: usize,
        unions: u64,
    },
    BatchCounted {
        element: usize,
        cycles: usize,
        start: u64,
        end: u64,
        counts: Counts,
    },
    Finished {
        totals: Counts,
    },
}

/// Receiver for `CountEvent`s; may be called from several threads.
pub trait CountObserver: Sync {
    fn on_event(&self, event: &CountEvent);
}

impl<F> CountObserver for F
where
    F: Fn(&CountEvent) + Sync,
{
    fn on_event(&self, event: &CountEvent) {
        self(event)
    }
}

/// Observer that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl CountObserver for NoopObserver {
    fn on_event(&self, _event: &CountEvent) {}
}

/// Cycles of an edge permutation as disjoint edge masks.
pub fn cycle_masks(edge_perm: &Permutation) -> Vec<EdgeMask> {
    edge_perm
        .cycles()
        .iter()
        .map(|c| c.iter().fold(0, |m, &e| m | bit(e)))
        .collect()
}

#[derive(Clone, Copy, Debug)]
struct WorkItem {
    element: usize,
    start: u64,
    end: u64,
}

fn plan(cycles: &[Vec<EdgeMask>], batch_bits: u32) -> Vec<WorkItem> {
    let batch = 1u64 << batch_bits.min(62);
    let mut items = Vec::new();
    for (element, c) in cycles.iter().enumerate() {
        let total = union_count(c.len());
        let mut start = 0;
        while start < total {
            let end = total.min(start.saturating_add(batch));
            items.push(WorkItem {
                element,
                start,
                end,
            });
            start = end;
        }
    }
    items
}

/// Sum over group elements of the fixed subsets in each category.
///
/// `edge_perms` must be the edge action of a whole group; the result is not
/// yet divided by the order (see `orbit_counts`).
pub fn burnside_totals(
    classifier: &SubsetClassifier,
    edge_perms: &[Permutation],
    cfg: &CountCfg,
    observer: &dyn CountObserver,
    cancel: Option<&AtomicBool>,
) -> Result<Counts> {
    for p in edge_perms {
        if p.len() != classifier.edge_count() {
            return Err(PlatonicError::invalid_permutation(format!(
                "edge permutation on {} points for {} edges",
                p.len(),
                classifier.edge_count()
            )));
        }
    }
    let cycles: Vec<Vec<EdgeMask>> = edge_perms.iter().map(cycle_masks).collect();
    let items = plan(&cycles, cfg.batch_bits);
    observer.on_event(&CountEvent::Started {
        elements: edge_perms.len(),
        work_items: items.len(),
        unions: cycles.iter().map(|c| union_count(c.len())).sum(),
    });

    let run = |item: &WorkItem| -> Result<Counts> {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(PlatonicError::Cancelled);
        }
        let c = &cycles[item.element];
        let counts: Counts = CycleUnions::range(c, item.start, item.end)
            .map(|subset| classifier.classify(subset))
            .sum();
        observer.on_event(&CountEvent::BatchCounted {
            element: item.element,
            cycles: c.len(),
            start: item.start,
            end: item.end,
            counts,
        });
        Ok(counts)
    };

    let totals = reduce(&items, cfg, run)?;
    observer.on_event(&CountEvent::Finished { totals });
    Ok(totals)
}

#[cfg(feature = "parallel")]
fn reduce<F>(items: &[WorkItem], cfg: &CountCfg, run: F) -> Result<Counts>
where
    F: Fn(&WorkItem) -> Result<Counts> + Sync,
{
    use rayon::prelude::*;
    if !cfg.parallel {
        return items.iter().map(run).sum();
    }
    let sum = || {
        items
            .par_iter()
            .map(&run)
            .try_reduce(Counts::default, |a, b| Ok(a + b))
    };
    match cfg.workers {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map_err(|e| PlatonicError::WorkerPool {
                reason: e.to_string(),
            })?
            .install(sum),
        None => sum(),
    }
}

#[cfg(not(feature = "parallel"))]
fn reduce<F>(items: &[WorkItem], _cfg: &CountCfg, run: F) -> Result<Counts>
where
    F: Fn(&WorkItem) -> Result<Counts> + Sync,
{
    items.iter().map(run).sum()
}

/// Divide Burnside totals by the group order; a remainder is a defect.
pub fn orbit_counts(totals: Counts, order: usize) -> Result<Counts> {
    let g = order as u64;
    let exact = |category: &'static str, total: u64| {
        if g == 0 || total % g != 0 {
            Err(PlatonicError::NonIntegralOrbitCount {
                category,
                total,
                order,
            })
        } else {
            Ok(total / g)
        }
    };
    Ok(Counts {
        all: exact("All Combinations", totals.all)?,
        connected: exact("All Connected", totals.connected)?,
        valid: exact("Valid Incomplete", totals.valid)?,
    })
}

/// Rotation-distinct edge subsets of a solid, with default configuration.
pub fn compute_counts(geometry: &SolidGeometry, group: &RotationGroup) -> Result<Counts> {
    compute_counts_with(geometry, group, &CountCfg::default(), &NoopObserver, None)
}

/// Rotation-distinct edge subsets in the three categories.
///
/// Pre: `group` is the full rotation group of `geometry`'s vertex set and the
/// edge/triangle sets were extracted from the same vertices.
pub fn compute_counts_with(
    geometry: &SolidGeometry,
    group: &RotationGroup,
    cfg: &CountCfg,
    observer: &dyn CountObserver,
    cancel: Option<&AtomicBool>,
) -> Result<Counts> {
    let classifier = SubsetClassifier::new(&geometry.edges, &geometry.triangles)?;
    let edge_perms = edge_permutations(&geometry.edges, group.vertex_permutations())?;
    let totals = burnside_totals(&classifier, &edge_perms, cfg, observer, cancel)?;
    orbit_counts(totals, group.order())
}
