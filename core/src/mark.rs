use crate::*;

impl Grid {
    /// Advances the marker on a closed cell: blank, flagged, questionable, then blank again.
    ///
    /// Open cells cannot be marked.
    pub fn cycle_mark(&mut self, coords: Coord2) -> MarkOutcome {
        use MarkOutcome::*;

        let cell = &mut self[coords];
        if cell.is_revealed {
            return NoChange;
        }

        if cell.is_flagged {
            cell.is_flagged = false;
            cell.is_questionable = true;
            // flags placed by `flag_all_mines` were never counted
            self.flagged_cells = self.flagged_cells.saturating_sub(1);
        } else if cell.is_questionable {
            cell.is_questionable = false;
        } else {
            cell.is_flagged = true;
            self.flagged_cells += 1;
        }
        Changed
    }
}
