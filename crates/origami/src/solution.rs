//! Solution files: folded points, facets over them, and their pre-images.
//!
//! Format:
//! ```text
//! <point count>
//! x,y                      -- square coordinates, one per point
//! <facet count>
//! k i1 i2 ... ik           -- per facet, indices in boundary order
//! x,y                      -- skeleton coordinates, same order as the points
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geom2::{fmt_pt, parse_pt, Pt2};
use crate::problem::Lines;
use crate::solver::PartialSolution;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Folded positions inside the unit square.
    pub points: Vec<Pt2>,
    /// Facets as index lists into `points`.
    pub facets: Vec<Vec<usize>>,
    /// Where each point sits on the unfolded skeleton.
    pub sources: Vec<Pt2>,
}

impl Solution {
    /// Points are keyed by (folded position, pre-image), in first-seen order,
    /// so layers stacked at one position stay distinct.
    pub fn from_partial(ps: &PartialSolution<'_>) -> Self {
        let mut keys: Vec<(Pt2, Pt2)> = Vec::new();
        let mut facets = Vec::with_capacity(ps.facets.len());
        for f in &ps.facets {
            let mut indices = Vec::with_capacity(f.len());
            for x in &f.points {
                let key = (x.clone(), f.transform_inv.map(x));
                let i = match keys.iter().position(|k| *k == key) {
                    Some(i) => i,
                    None => {
                        keys.push(key);
                        keys.len() - 1
                    }
                };
                indices.push(i);
            }
            facets.push(indices);
        }
        let (points, sources): (Vec<Pt2>, Vec<Pt2>) = keys.into_iter().unzip();
        Self {
            points,
            facets,
            sources,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        text.parse()
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_string()).map_err(|e| Error::io(path, e))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.points.len())?;
        for x in &self.points {
            writeln!(f, "{}", fmt_pt(x))?;
        }
        writeln!(f, "{}", self.facets.len())?;
        for facet in &self.facets {
            write!(f, "{}", facet.len())?;
            for i in facet {
                write!(f, " {i}")?;
            }
            writeln!(f)?;
        }
        for x in &self.sources {
            writeln!(f, "{}", fmt_pt(x))?;
        }
        Ok(())
    }
}

impl FromStr for Solution {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = Lines::new(text);
        let mut next = |what: &str| lines.next_line(what);
        let count = |no: usize, s: &str| {
            s.parse::<usize>()
                .map_err(|_| Error::parse(no, format!("bad count {s:?}")))
        };
        let coord = |no: usize, s: &str| {
            parse_pt(s).ok_or_else(|| Error::parse(no, format!("bad coordinate {s:?}")))
        };

        let (no, line) = next("point count")?;
        let n = count(no, line)?;
        let mut points = Vec::new();
        for _ in 0..n {
            let (no, line) = next("point")?;
            points.push(coord(no, line)?);
        }

        let (no, line) = next("facet count")?;
        let m = count(no, line)?;
        let mut facets = Vec::new();
        for _ in 0..m {
            let (no, line) = next("facet")?;
            let mut fields = line.split_whitespace();
            let k = count(no, fields.next().unwrap_or_default())?;
            let indices = fields
                .map(|s| match count(no, s)? {
                    i if i < n => Ok(i),
                    i => Err(Error::parse(no, format!("point index {i} out of range"))),
                })
                .collect::<Result<Vec<usize>>>()?;
            if indices.len() != k {
                return Err(Error::parse(
                    no,
                    format!("facet declares {k} points but lists {}", indices.len()),
                ));
            }
            facets.push(indices);
        }

        let mut sources = Vec::new();
        for _ in 0..n {
            let (no, line) = next("source point")?;
            sources.push(coord(no, line)?);
        }

        Ok(Self {
            points,
            facets,
            sources,
        })
    }
}
