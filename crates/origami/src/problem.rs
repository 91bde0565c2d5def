//! Problem definitions: target silhouette polygons plus skeleton segments.
//!
//! File format (one item per line):
//! ```text
//! <polygon count>
//! <vertex count>          -- repeated per polygon
//! x,y                     -- repeated per vertex
//! <segment count>
//! x,y x,y                 -- repeated per segment
//! ```
//! Coordinates are integers or `numerator/denominator` literals. Blank lines
//! are ignored.

use std::path::Path;
use std::str::FromStr;

use num_traits::Zero;
use tracing::info;

use crate::error::{Error, Result};
use crate::geom2::{parse_pt, signed_area, Pt2, Q};
use crate::skeleton::{build_skeleton, skeleton_stats, Skeleton, SkeletonStats};

/// Immutable input with its derived skeleton.
#[derive(Clone, Debug)]
pub struct Problem {
    pub polygons: Vec<Vec<Pt2>>,
    pub segments: Vec<(Pt2, Pt2)>,
    pub skeleton: Skeleton,
}

impl Problem {
    pub fn new(polygons: Vec<Vec<Pt2>>, segments: Vec<(Pt2, Pt2)>) -> Result<Self> {
        let skeleton = build_skeleton(&polygons, &segments)?;
        Ok(Self {
            polygons,
            segments,
            skeleton,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let problem: Problem = text.parse()?;
        info!(
            path = %path.display(),
            polygons = problem.polygons.len(),
            segments = problem.segments.len(),
            facets = problem.skeleton.facets.len(),
            "problem loaded"
        );
        Ok(problem)
    }

    /// Sum of the polygons' signed areas (holes, listed clockwise, subtract).
    pub fn area(&self) -> Q {
        self.areas().into_iter().fold(Q::zero(), |acc, a| acc + a)
    }

    pub fn areas(&self) -> Vec<Q> {
        self.polygons.iter().map(|p| signed_area(p)).collect()
    }

    /// `((min_x, max_x), (min_y, max_y))` over the skeleton points.
    pub fn bounds(&self) -> ((Q, Q), (Q, Q)) {
        let mut pts = self.skeleton.points.iter().map(|p| &p.xy);
        // build_skeleton rejects empty input, so there is at least one point
        let Some(first) = pts.next() else {
            return ((Q::zero(), Q::zero()), (Q::zero(), Q::zero()));
        };
        let (mut x0, mut x1) = (first.x.clone(), first.x.clone());
        let (mut y0, mut y1) = (first.y.clone(), first.y.clone());
        for p in pts {
            if p.x < x0 {
                x0 = p.x.clone();
            }
            if p.x > x1 {
                x1 = p.x.clone();
            }
            if p.y < y0 {
                y0 = p.y.clone();
            }
            if p.y > y1 {
                y1 = p.y.clone();
            }
        }
        ((x0, x1), (y0, y1))
    }

    pub fn stats(&self) -> SkeletonStats {
        skeleton_stats(&self.skeleton, &self.area())
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = Lines::new(text);

        let n = lines.count("polygon count")?;
        let mut polygons = Vec::new();
        for _ in 0..n {
            let k = lines.count("vertex count")?;
            let mut polygon = Vec::new();
            for _ in 0..k {
                polygon.push(lines.coord()?);
            }
            polygons.push(polygon);
        }

        let m = lines.count("segment count")?;
        let mut segments = Vec::new();
        for _ in 0..m {
            let (no, line) = lines.next_line("segment")?;
            let mut parts = line.split_whitespace();
            let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(Error::parse(no, format!("expected two points, got {line:?}")));
            };
            let a = parse_pt(a).ok_or_else(|| Error::parse(no, format!("bad coordinate {a:?}")))?;
            let b = parse_pt(b).ok_or_else(|| Error::parse(no, format!("bad coordinate {b:?}")))?;
            segments.push((a, b));
        }

        Problem::new(polygons, segments)
    }
}

/// Non-blank lines with 1-based line numbers for error messages.
pub(crate) struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
        }
    }

    pub(crate) fn next_line(&mut self, what: &str) -> Result<(usize, &'a str)> {
        let mut last = 0;
        for (i, line) in self.inner.by_ref() {
            last = i + 1;
            let line = line.trim();
            if !line.is_empty() {
                return Ok((i + 1, line));
            }
        }
        Err(Error::parse(last + 1, format!("unexpected end of input, expected {what}")))
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let (no, line) = self.next_line(what)?;
        line.parse()
            .map_err(|_| Error::parse(no, format!("bad {what} {line:?}")))
    }

    fn coord(&mut self) -> Result<Pt2> {
        let (no, line) = self.next_line("coordinate")?;
        parse_pt(line).ok_or_else(|| Error::parse(no, format!("bad coordinate {line:?}")))
    }
}
