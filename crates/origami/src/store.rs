//! On-disk layout shared with the fetch/submit tooling.
//!
//! ```text
//! <root>/problems/<id>     problem files
//! <root>/solutions/<id>    solution files
//! <root>/failed/<id>       empty marker: timed out or unsolvable
//! <root>/submitted/<id>    empty marker: solution handed in
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::solution::Solution;

const PROBLEMS: &str = "problems";
const SOLUTIONS: &str = "solutions";
const FAILED: &str = "failed";
const SUBMITTED: &str = "submitted";

#[derive(Clone, Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open `root`, creating the four directories if missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { root: root.into() };
        for dir in [PROBLEMS, SOLUTIONS, FAILED, SUBMITTED] {
            let path = store.root.join(dir);
            fs::create_dir_all(&path).map_err(|e| Error::io(&path, e))?;
        }
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn problem_path(&self, id: u64) -> PathBuf {
        self.root.join(PROBLEMS).join(id.to_string())
    }

    pub fn solution_path(&self, id: u64) -> PathBuf {
        self.root.join(SOLUTIONS).join(id.to_string())
    }

    pub fn load_problem(&self, id: u64) -> Result<Problem> {
        Problem::from_file(self.problem_path(id))
    }

    pub fn save_solution(&self, id: u64, solution: &Solution) -> Result<PathBuf> {
        let path = self.solution_path(id);
        solution.write_to(&path)?;
        debug!(id, path = %path.display(), "solution saved");
        Ok(path)
    }

    pub fn mark_failed(&self, id: u64) -> Result<()> {
        self.touch(FAILED, id)
    }

    pub fn mark_submitted(&self, id: u64) -> Result<()> {
        self.touch(SUBMITTED, id)
    }

    /// A solution exists or the problem has been given up on.
    pub fn is_resolved(&self, id: u64) -> bool {
        self.solution_path(id).is_file() || self.root.join(FAILED).join(id.to_string()).is_file()
    }

    /// Problems with neither a solution nor a failed marker, ascending.
    pub fn unsolved_ids(&self) -> Result<Vec<u64>> {
        let done: BTreeSet<u64> = self
            .ids(SOLUTIONS)?
            .union(&self.ids(FAILED)?)
            .copied()
            .collect();
        Ok(self.ids(PROBLEMS)?.difference(&done).copied().collect())
    }

    /// Solutions without a submitted marker, ascending.
    pub fn unsubmitted_ids(&self) -> Result<Vec<u64>> {
        let submitted = self.ids(SUBMITTED)?;
        Ok(self.ids(SOLUTIONS)?.difference(&submitted).copied().collect())
    }

    fn touch(&self, dir: &str, id: u64) -> Result<()> {
        let path = self.root.join(dir).join(id.to_string());
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map(|_| ())
            .map_err(|e| Error::io(&path, e))
    }

    /// Numeric file names in `dir`; anything else is ignored.
    fn ids(&self, dir: &str) -> Result<BTreeSet<u64>> {
        let path = self.root.join(dir);
        let entries = fs::read_dir(&path).map_err(|e| Error::io(&path, e))?;
        let mut out = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&path, e))?;
            if let Some(id) = entry.file_name().to_str().and_then(|s| s.parse().ok()) {
                out.insert(id);
            }
        }
        Ok(out)
    }
}

/// Reproducible shuffle of a work list.
pub fn shuffled(mut ids: Vec<u64>, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    ids.shuffle(&mut rng);
    ids
}
