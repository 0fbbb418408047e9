use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A press/release gesture on the pixel grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSelection {
    pub start: Point,
    pub end: Point,
}

/// What a selection asks the viewport to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionShape {
    /// Zoom into the rectangle spanned by the sorted corners.
    Rectangle { min: Point, max: Point },
    /// Re-centre on the press point, keeping the current span.
    Click(Point),
}

impl PixelSelection {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn click(point: Point) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// Degenerate when the two points share either coordinate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    #[must_use]
    pub fn shape(&self) -> SelectionShape {
        if self.is_degenerate() {
            return SelectionShape::Click(self.start);
        }

        SelectionShape::Rectangle {
            min: Point {
                x: self.start.x.min(self.end.x),
                y: self.start.y.min(self.end.y),
            },
            max: Point {
                x: self.start.x.max(self.end.x),
                y: self.start.y.max(self.end.y),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSelectionError {
    WrongArity { found: usize },
    InvalidCoordinate { value: String },
}

impl fmt::Display for ParseSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArity { found } => {
                write!(
                    f,
                    "expected `x,y` or `x1,y1,x2,y2`, found {} values",
                    found
                )
            }
            Self::InvalidCoordinate { value } => {
                write!(f, "invalid pixel coordinate `{}`", value)
            }
        }
    }
}

impl Error for ParseSelectionError {}

impl FromStr for PixelSelection {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<i32>()
                    .map_err(|_| ParseSelectionError::InvalidCoordinate {
                        value: part.to_string(),
                    })
            })
            .collect::<Result<Vec<i32>, _>>()?;

        match values.as_slice() {
            [x, y] => Ok(Self::click(Point::new(*x, *y))),
            [x1, y1, x2, y2] => Ok(Self::new(Point::new(*x1, *y1), Point::new(*x2, *y2))),
            _ => Err(ParseSelectionError::WrongArity {
                found: values.len(),
            }),
        }
    }
}
