//! Body-body collision detection and response
//!
//! Every unordered pair is visited once per pass in index order. Overlapping
//! pairs are pushed apart along the contact normal, then approaching pairs
//! exchange a perfectly elastic impulse weighted by pseudo-mass.

use glam::DVec2;

use super::body::Body;
use crate::cartesian_to_polar;
use crate::consts::RESTITUTION;

/// Overlap between two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the first body toward the second
    pub normal: DVec2,
    /// Penetration depth
    pub overlap: f64,
}

/// What happened to a pair during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Not touching
    Separate,
    /// Pushed apart, already moving apart so velocities untouched
    Corrected,
    /// Pushed apart and impulse applied
    Bounced,
}

/// Counters for one call to [`resolve_collisions`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub contacts: u32,
    pub bounces: u32,
}

/// Check two bodies for overlap
///
/// Exact tangency is not a contact.
pub fn detect_contact(a: &Body, b: &Body) -> Option<Contact> {
    let mut delta = b.pos - a.pos;
    let mut dist = delta.length();
    let min_distance = (a.radius() + b.radius()) as f64;

    if dist >= min_distance {
        return None;
    }

    if dist == 0.0 {
        // Coincident centers: any normal will do
        delta = DVec2::X;
        dist = 1.0;
    }

    Some(Contact {
        normal: delta / dist,
        overlap: min_distance - dist,
    })
}

/// Resolve one pair in place
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> PairOutcome {
    let Some(contact) = detect_contact(a, b) else {
        return PairOutcome::Separate;
    };
    let n = contact.normal;

    // Positional correction, half each
    let push = n * (contact.overlap * 0.5);
    a.pos -= push;
    b.pos += push;

    let va = a.velocity();
    let vb = b.velocity();
    let velocity_along_normal = (vb - va).dot(n);
    if velocity_along_normal > 0.0 {
        return PairOutcome::Corrected;
    }

    let ma = a.mass();
    let mb = b.mass();
    let impulse = 2.0 * velocity_along_normal / (ma + mb);

    let va = va + n * (impulse * mb * RESTITUTION);
    let vb = vb - n * (impulse * ma * RESTITUTION);

    (a.speed, a.heading) = cartesian_to_polar(va);
    (b.speed, b.heading) = cartesian_to_polar(vb);

    PairOutcome::Bounced
}

/// Resolve every overlapping pair, `passes` times over
pub fn resolve_collisions(bodies: &mut [Body], passes: u32) -> CollisionStats {
    let mut stats = CollisionStats::default();

    for _ in 0..passes {
        let mut pass_contacts = 0;
        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                match resolve_pair(a, b) {
                    PairOutcome::Separate => {}
                    PairOutcome::Corrected => pass_contacts += 1,
                    PairOutcome::Bounced => {
                        pass_contacts += 1;
                        stats.bounces += 1;
                    }
                }
            }
        }
        stats.contacts += pass_contacts;
        if pass_contacts == 0 {
            break;
        }
    }

    stats
}
