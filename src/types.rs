use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point with double-precision coordinates.
///
/// Used both for normalized landmark positions (fractions of the image size)
/// and for pixel-space positions after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Pixel dimensions of the reference image the landmarks were placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Create an image size, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidImageSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Convert a point from normalized [0,1] coordinates to pixel coordinates.
    pub fn denormalize(&self, p: Point) -> Point {
        Point::new(p.x * self.width as f64, p.y * self.height as f64)
    }

    /// Convert a point from pixel coordinates to normalized [0,1] coordinates.
    pub fn normalize(&self, p: Point) -> Point {
        Point::new(p.x / self.width as f64, p.y / self.height as f64)
    }
}
