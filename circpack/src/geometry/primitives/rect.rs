use crate::geometry::primitives::Point;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Returns the smallest rectangle containing all points, `None` if there are none
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Rect> {
        points
            .into_iter()
            .map(|&Point(x, y)| Rect::new(x, y, x, y))
            .reduce(|a, b| Rect::bounding_rect(&a, &b))
    }

    /// Returns the smallest rectangle containing both `r1` and `r2`
    pub fn bounding_rect(r1: &Rect, r2: &Rect) -> Rect {
        Rect {
            x_min: f64::min(r1.x_min, r2.x_min),
            y_min: f64::min(r1.y_min, r2.y_min),
            x_max: f64::max(r1.x_max, r2.x_max),
            y_max: f64::max(r1.y_max, r2.y_max),
        }
    }

    /// Returns a copy of the rectangle, scaled around its centroid by `factor`
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        Rect::new(
            self.x_min - dx,
            self.y_min - dy,
            self.x_max + dx,
            self.y_max + dy,
        )
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
