use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Point {
        Point { row, col }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub p: Point,
    pub height: usize,
    pub width: usize,
}

/// A set of image coordinates produced by segmentation. Only ever iterated,
/// in the region's own order.
pub trait Region {
    fn points(&self) -> impl Iterator<Item = Point> + '_;
}

impl Region for [Point] {
    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().copied()
    }
}

impl Region for Vec<Point> {
    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().copied()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Superpixel {
    pub coordinates: Vec<Point>,
}

impl Superpixel {
    pub fn new(coordinates: Vec<Point>) -> Superpixel {
        Superpixel { coordinates }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// `None` for an empty superpixel.
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = self.coordinates.first()?;
        let (min, max) = self.coordinates.iter().fold((*first, *first), |(min, max), p| {
            (
                Point::new(min.row.min(p.row), min.col.min(p.col)),
                Point::new(max.row.max(p.row), max.col.max(p.col)),
            )
        });
        Some(Rect {
            p: min,
            height: max.row - min.row + 1,
            width: max.col - min.col + 1,
        })
    }
}

impl Region for Superpixel {
    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.coordinates.iter().copied()
    }
}

impl FromIterator<Point> for Superpixel {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Superpixel::new(iter.into_iter().collect())
    }
}
