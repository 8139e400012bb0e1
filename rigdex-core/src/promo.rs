//! Priority-weighted banner rotation.

use rand::Rng;
use rigdex_model::Placement;

/// Pick one placement with probability proportional to its priority weight.
///
/// Draws a uniform value in `[0, total)` and walks the live placements in
/// input order, subtracting each weight from the remainder; the first
/// placement that drives the remainder to zero or below wins. Inactive and
/// zero-weight placements never enter the draw. Each request draws
/// independently; the caller supplies the RNG.
pub fn select_placement<'a, R: Rng + ?Sized>(
    rng: &mut R,
    placements: &'a [Placement],
) -> Option<&'a Placement> {
    let live: Vec<&Placement> = placements
        .iter()
        .filter(|p| p.active && p.priority > 0)
        .collect();

    let total: u64 = live.iter().map(|p| u64::from(p.priority)).sum();
    if total == 0 {
        return None;
    }

    let draw = rng.random::<f64>() * total as f64;
    walk(&live, draw)
}

/// The subtraction walk, split out so the drift guard is testable.
///
/// If rounding leaves a sliver of remainder after the final subtraction, the
/// draw still has to land somewhere: the last considered placement takes it.
fn walk<'a>(live: &[&'a Placement], mut remainder: f64) -> Option<&'a Placement> {
    for placement in live {
        remainder -= f64::from(placement.priority);
        if remainder <= 0.0 {
            return Some(placement);
        }
    }
    live.last().copied()
}
