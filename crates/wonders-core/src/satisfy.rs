//! Resource satisfaction search.
//!
//! Decides whether a requirement can be covered by a fixed resource pool plus
//! a set of exotic resources. Fixed counts are applied first; each exotic may
//! then cover one unit of one type it supports. The search backtracks over
//! exotics in order, and nothing passed in is mutated.

use crate::exotic::ExoticResource;
use crate::resource::{Requirement, Resource, ResourcePool};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Outstanding need per resource type after the fixed pool has been applied.
///
/// Values of zero or below are satisfied. A surplus on one type is never
/// available to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Needs([i32; Resource::COUNT]);

impl Needs {
    /// Needs left over once `pool` has been applied to `requirement`.
    /// Types not listed in the requirement need nothing.
    pub fn new(requirement: &Requirement, pool: &ResourcePool) -> Self {
        let mut needs = [0; Resource::COUNT];
        for (resource, amount) in requirement.iter() {
            needs[resource.index()] = amount.saturating_sub(pool.get(resource));
        }
        Self(needs)
    }

    pub fn get(&self, resource: Resource) -> i32 {
        self.0[resource.index()]
    }

    /// True when every type is covered
    pub fn is_satisfied(&self) -> bool {
        self.0.iter().all(|n| *n <= 0)
    }

    /// Total units still missing across all types
    pub fn outstanding(&self) -> i64 {
        self.0.iter().filter(|n| **n > 0).map(|n| i64::from(*n)).sum()
    }

    fn cover(&mut self, resource: Resource) {
        self.0[resource.index()] -= 1;
    }
}

/// One exotic standing in for one unit of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Position of the exotic in the slice that was searched
    pub exotic: usize,
    /// Resource it covers
    pub resource: Resource,
}

/// Substitutions making up one way of covering a requirement
pub type Assignment = Vec<Substitution>;

/// Can `requirement` be covered by `pool` plus `exotics`?
pub fn is_satisfiable(
    requirement: &Requirement,
    pool: &ResourcePool,
    exotics: &[ExoticResource],
) -> bool {
    find_assignment(requirement, pool, exotics).is_some()
}

/// Find one valid use of `exotics` that covers whatever `pool` leaves unmet.
///
/// Returns an empty assignment when the pool alone suffices, and `None` when
/// no assignment exists. Which assignment is returned is unspecified.
pub fn find_assignment(
    requirement: &Requirement,
    pool: &ResourcePool,
    exotics: &[ExoticResource],
) -> Option<Assignment> {
    if requirement.is_empty() {
        return Some(Vec::new());
    }

    let needs = Needs::new(requirement, pool);
    trace!(
        outstanding = needs.outstanding(),
        exotics = exotics.len(),
        "searching for resource assignment"
    );

    let mut chosen = Vec::new();
    if search(needs, exotics, 0, &mut chosen) {
        Some(chosen)
    } else {
        None
    }
}

fn search(
    needs: Needs,
    exotics: &[ExoticResource],
    next: usize,
    chosen: &mut Assignment,
) -> bool {
    if needs.is_satisfied() {
        return true;
    }

    // Each remaining exotic covers at most one unit.
    let remaining = exotics.len().saturating_sub(next);
    if i64::try_from(remaining).unwrap_or(i64::MAX) < needs.outstanding() {
        return false;
    }

    let Some(exotic) = exotics.get(next) else {
        return false;
    };

    for resource in exotic.iter() {
        // Covering a satisfied type is the same as leaving the exotic unused
        if needs.get(resource) <= 0 {
            continue;
        }
        let mut branch = needs;
        branch.cover(resource);
        chosen.push(Substitution {
            exotic: next,
            resource,
        });
        if search(branch, exotics, next + 1, chosen) {
            return true;
        }
        chosen.pop();
    }

    search(needs, exotics, next + 1, chosen)
}
