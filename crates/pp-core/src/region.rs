//! Planar points and bounded regions for spatial processes.
//!
//! Every region exposes an axis-aligned bounding box.  Spatial samplers draw
//! candidates uniformly in the box and keep those the region contains, so any
//! `Region` can host a Poisson process without a dedicated algorithm.

use std::fmt;

use crate::{PpError, PpResult};

/// A point in the plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// A bounded subset of the plane.
pub trait Region: Send + Sync {
    /// Whether `p` lies in the region (boundary included).
    fn contains(&self, p: &Point) -> bool;

    /// Smallest axis-aligned rectangle containing the region.
    fn bounding_box(&self) -> Rectangle;

    /// Lebesgue measure of the region.
    fn area(&self) -> f64;
}

// ── Rectangle ─────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle spanned by its `close` (lower-left) and `far`
/// (upper-right) corners.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    close: Point,
    far:   Point,
}

impl Rectangle {
    /// Build a rectangle, rejecting non-finite corners or `close > far` on
    /// either axis.  Zero-width rectangles are allowed (they have no area).
    pub fn new(close: impl Into<Point>, far: impl Into<Point>) -> PpResult<Self> {
        let close = close.into();
        let far = far.into();
        for v in [close.x, close.y, far.x, far.y] {
            if !v.is_finite() {
                return Err(PpError::invalid("corner", v, "rectangle corners must be finite"));
            }
        }
        if close.x > far.x {
            return Err(PpError::invalid("close.x", close.x, "must not exceed far.x"));
        }
        if close.y > far.y {
            return Err(PpError::invalid("close.y", close.y, "must not exceed far.y"));
        }
        Ok(Self { close, far })
    }

    #[inline]
    pub fn close(&self) -> Point {
        self.close
    }

    #[inline]
    pub fn far(&self) -> Point {
        self.far
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.far.x - self.close.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.far.y - self.close.y
    }
}

impl Region for Rectangle {
    fn contains(&self, p: &Point) -> bool {
        (self.close.x..=self.far.x).contains(&p.x) && (self.close.y..=self.far.y).contains(&p.y)
    }

    fn bounding_box(&self) -> Rectangle {
        *self
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

// ── Disk ──────────────────────────────────────────────────────────────────────

/// Closed disk of `radius` around `center`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disk {
    center: Point,
    radius: f64,
}

impl Disk {
    pub fn new(center: impl Into<Point>, radius: f64) -> PpResult<Self> {
        let center = center.into();
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(PpError::invalid("center", center.x, "disk center must be finite"));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PpError::invalid("radius", radius, "must be finite and > 0"));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Region for Disk {
    fn contains(&self, p: &Point) -> bool {
        p.distance(self.center) <= self.radius
    }

    fn bounding_box(&self) -> Rectangle {
        let r = self.radius;
        Rectangle {
            close: Point::new(self.center.x - r, self.center.y - r),
            far:   Point::new(self.center.x + r, self.center.y + r),
        }
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}
