use crate::core::successor::SuccessorTable;

/// Greedy-earliest placement of `flags` markers, yielded one position at a time.
///
/// The first marker goes on the earliest peak; each following marker goes on
/// the nearest peak at least `flags` positions past the previous one. The
/// iterator stops early when no such peak exists, so a placement is feasible
/// exactly when it yields `flags` positions.
struct GreedyPlacement<'a> {
    table: &'a SuccessorTable,
    flags: usize,
    placed: usize,
    current: Option<usize>,
}

impl<'a> GreedyPlacement<'a> {
    fn new(flags: usize, table: &'a SuccessorTable) -> Self {
        Self {
            table,
            flags,
            placed: 0,
            current: None,
        }
    }
}

impl Iterator for GreedyPlacement<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.placed == self.flags {
            return None;
        }

        let next = match self.current {
            None => self.table.first_peak(),
            Some(current) => current
                .checked_add(self.flags)
                .and_then(|rank| self.table.next_peak_at_or_after(rank)),
        };

        match next {
            Some(index) => {
                self.current = Some(index);
                self.placed += 1;
                Some(index)
            }
            None => {
                // Later markers can only sit further right, so stop for good.
                self.placed = self.flags;
                None
            }
        }
    }
}

/// Returns `true` when `flags` markers fit on the peaks with pairwise spacing `>= flags`.
///
/// Performs at most `flags` table lookups.
#[must_use]
pub fn flags_possible(flags: usize, table: &SuccessorTable) -> bool {
    GreedyPlacement::new(flags, table).count() == flags
}

/// Returns the greedy-earliest placement for `flags` markers, or `None` when infeasible.
#[must_use]
pub fn place_flags(flags: usize, table: &SuccessorTable) -> Option<Vec<usize>> {
    let placement: Vec<usize> = GreedyPlacement::new(flags, table).collect();
    (placement.len() == flags).then_some(placement)
}
