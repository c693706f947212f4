//! Capture regions in physical screen coordinates.
//!
//! A `Region` describes the rectangle a caller wants captured. The origin may
//! be negative (a request can start off-screen); width and height are pixel
//! counts. `intersect` clamps a request to what a display can actually serve.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A rectangle on the screen, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Region covering a full display of the given size, origin at (0, 0).
    pub fn of_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && (x as i64) < self.right() && y >= self.y && (y as i64) < self.bottom()
    }

    /// Intersect with another region. Returns `None` when the rectangles do
    /// not overlap.
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x as i64 || bottom <= y as i64 {
            return None;
        }
        Some(Region {
            x,
            y,
            width: (right - x as i64) as u32,
            height: (bottom - y as i64) as u32,
        })
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}x{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Region {
    type Err = String;

    /// Parse the CLI form "X,Y,WxH", e.g. "100,50,800x600".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || format!("invalid region '{s}', expected X,Y,WxH");

        let mut parts = s.splitn(3, ',');
        let x = parts.next().and_then(|p| p.trim().parse::<i32>().ok());
        let y = parts.next().and_then(|p| p.trim().parse::<i32>().ok());
        let size = parts.next().ok_or_else(err)?;
        let (w, h) = size.split_once('x').ok_or_else(err)?;
        let width = w.trim().parse::<u32>().map_err(|_| err())?;
        let height = h.trim().parse::<u32>().map_err(|_| err())?;

        match (x, y) {
            (Some(x), Some(y)) => Ok(Region { x, y, width, height }),
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(Region::new(0, 0, 0, 10).is_empty());
        assert!(Region::new(0, 0, 10, 0).is_empty());
        assert!(!Region::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_contains() {
        let r = Region::new(-5, -5, 10, 10);
        assert!(r.contains(-5, -5));
        assert!(r.contains(4, 4));
        assert!(!r.contains(5, 0));
        assert!(!r.contains(0, -6));
    }

    #[test]
    fn test_intersect_overlapping() {
        let screen = Region::of_size(1920, 1080);
        let request = Region::new(-100, -100, 400, 400);
        let clamped = screen.intersect(&request).unwrap();
        assert_eq!(clamped, Region::new(0, 0, 300, 300));
    }

    #[test]
    fn test_intersect_contained() {
        let screen = Region::of_size(1920, 1080);
        let request = Region::new(10, 20, 100, 50);
        assert_eq!(screen.intersect(&request), Some(request));
    }

    #[test]
    fn test_intersect_disjoint() {
        let screen = Region::of_size(1920, 1080);
        assert_eq!(screen.intersect(&Region::new(2000, 0, 10, 10)), None);
        assert_eq!(screen.intersect(&Region::new(-20, 0, 10, 10)), None);
    }

    #[test]
    fn test_parse_region() {
        let r: Region = "100,50,800x600".parse().unwrap();
        assert_eq!(r, Region::new(100, 50, 800, 600));

        let r: Region = "-10, -20, 1x1".parse().unwrap();
        assert_eq!(r, Region::new(-10, -20, 1, 1));
    }

    #[test]
    fn test_parse_region_rejects_bad_forms() {
        assert!("800x600".parse::<Region>().is_err());
        assert!("1,2,3,4".parse::<Region>().is_err());
        assert!("a,b,cxd".parse::<Region>().is_err());
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let r = Region::new(-3, 7, 640, 480);
        assert_eq!(r.to_string().parse::<Region>().unwrap(), r);
    }
}
