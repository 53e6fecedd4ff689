/// Completion ratio of the active list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut progress = Progress::default();
        for done in flags {
            progress.total += 1;
            if done {
                progress.completed += 1;
            }
        }
        progress
    }

    /// 0.0..=1.0, zero for an empty list
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// `"completed / total"`
    pub fn label(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }

    pub fn all_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// One-shot trigger for the "everything done" celebration.
///
/// Fires once when progress reaches all-complete and re-arms as soon as it
/// drops back below, so finishing the list again fires again.
#[derive(Debug, Clone, Default)]
pub struct Celebration {
    fired: bool,
}

impl Celebration {
    /// Feed the latest progress. Returns true when the celebration should play.
    pub fn observe(&mut self, progress: Progress) -> bool {
        if progress.all_complete() {
            if self.fired {
                return false;
            }
            self.fired = true;
            true
        } else {
            self.fired = false;
            false
        }
    }
}
