use std::fmt;

/// The phases of building a mock transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    FetchingTx,
    FetchingInputs,
    FetchingCellDeps,
    FetchingHeaders,
    Done,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::FetchingTx => "fetching_tx",
            Stage::FetchingInputs => "fetching_inputs",
            Stage::FetchingCellDeps => "fetching_cell_deps",
            Stage::FetchingHeaders => "fetching_headers",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `current` of `total` items of `stage` are done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub stage: Stage,
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl Progress {
    pub fn new(stage: Stage, current: usize, total: usize) -> Self {
        let message = match stage {
            Stage::FetchingTx => "fetching transaction".to_owned(),
            Stage::FetchingInputs => format!("fetching input cells ({}/{})", current, total),
            Stage::FetchingCellDeps => format!("fetching cell deps ({}/{})", current, total),
            Stage::FetchingHeaders => format!("fetching headers ({}/{})", current, total),
            Stage::Done => "done".to_owned(),
        };
        Progress {
            stage,
            current,
            total,
            message,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)
    }
}

/// Receives progress events in the order the work happens.
pub trait ProgressReporter {
    fn report(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> ProgressReporter for F {
    fn report(&mut self, progress: Progress) {
        self(progress)
    }
}
