//! Victory detection.

use crate::roster::{Roster, Side};

/// Decide whether the battle is over and who won.
///
/// `first` is checked before `second`: if both rosters are wiped out at the
/// same moment, `first` is the one declared beaten and `second`'s side wins.
/// Returns `None` while both sides still have a unit standing.
#[must_use]
pub fn check_victory(first: &Roster, second: &Roster) -> Option<Side> {
    if first.all_destroyed() {
        Some(first.side().opponent())
    } else if second.all_destroyed() {
        Some(second.side().opponent())
    } else {
        None
    }
}
