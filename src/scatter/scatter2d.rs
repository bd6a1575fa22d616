use serde::{Deserialize, Serialize};

use super::point::Point2D;
use crate::error::HbookError;

/// Bounding box of a scatter, error bars included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Ordered collection of 2D points with asymmetric errors.
///
/// Points keep insertion order until [`Scatter2D::sort`] is called. Sorting is
/// a one-shot reorder; later fills append at the end.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter2D {
    name: String,
    points: Vec<Point2D>,
}

impl Scatter2D {
    pub fn new(points: impl IntoIterator<Item = Point2D>) -> Self {
        Self {
            name: String::new(),
            points: points.into_iter().collect(),
        }
    }

    /// Pairs `xs[i]` with `ys[i]`, all errors zero.
    ///
    /// Arrays of different lengths are rejected with
    /// [`HbookError::InvalidInput`] rather than truncated.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, HbookError> {
        if xs.len() != ys.len() {
            log::warn!(
                "Refusing to build scatter from {} x values and {} y values",
                xs.len(),
                ys.len()
            );
            return Err(HbookError::InvalidInput {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        Ok(Self::new(xs.iter().zip(ys).map(|(&x, &y)| Point2D::new(x, y))))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn fill(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Result<Point2D, HbookError> {
        self.points
            .get(index)
            .copied()
            .ok_or(HbookError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    // Stable, so points with equal x keep their relative order. NaN sorts last.
    pub fn sort(&mut self) {
        self.points.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    pub fn scale_x(&mut self, factor: f64) {
        for pt in &mut self.points {
            pt.scale_x(factor);
        }
    }

    pub fn scale_y(&mut self, factor: f64) {
        for pt in &mut self.points {
            pt.scale_y(factor);
        }
    }

    pub fn data_range(&self) -> Option<DataRange> {
        let first = self.points.first()?;
        let init = DataRange {
            x_min: first.x_min(),
            x_max: first.x_max(),
            y_min: first.y_min(),
            y_max: first.y_max(),
        };

        Some(self.points.iter().fold(init, |range, pt| DataRange {
            x_min: range.x_min.min(pt.x_min()),
            x_max: range.x_max.max(pt.x_max()),
            y_min: range.y_min.min(pt.y_min()),
            y_max: range.y_max.max(pt.y_max()),
        }))
    }
}

impl FromIterator<Point2D> for Scatter2D {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Point2D> for Scatter2D {
    fn extend<I: IntoIterator<Item = Point2D>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Scatter2D {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
