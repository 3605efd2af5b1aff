use crate::*;

impl Grid {
    /// Win display: every mine gets a flag. Question marks on mines are replaced.
    ///
    /// The flag counter keeps tracking the player's own flags.
    pub fn flag_all_mines(&mut self) {
        for cell in self.cells_mut() {
            if cell.is_mine {
                cell.is_flagged = true;
                cell.is_questionable = false;
            }
        }
    }

    /// Loss display: opens every flag that sat on a safe cell and marks it as a false alarm.
    pub fn indicate_false_alarms(&mut self) {
        for cell in self.cells_mut() {
            if cell.is_flagged && !cell.is_mine && !cell.did_bust {
                cell.is_false_alarm = true;
                cell.is_revealed = true;
            }
        }
    }
}
