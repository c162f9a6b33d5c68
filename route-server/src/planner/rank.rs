//! Path selection.

use crate::domain::Path;

/// Choose the best candidate path: the one requiring the fewest route
/// changes.
///
/// Fewest changes is the contract here, not fewest hops; a longer ride on
/// one service beats a shorter ride that makes the traveller change
/// trains. Ties keep the earliest candidate, so the result is
/// deterministic for a fixed graph and search order.
///
/// Returns `None` when there are no candidates, which is the ordinary
/// "no route" outcome rather than an error.
pub fn select_optimal(paths: Vec<Path>) -> Option<Path> {
    let mut best: Option<(usize, Path)> = None;

    for path in paths {
        let changes = path.route_changes();
        match &best {
            Some((fewest, _)) if *fewest <= changes => {}
            _ => best = Some((changes, path)),
        }
    }

    best.map(|(_, path)| path)
}
