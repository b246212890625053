//! Screen geometry shared by drawing and hit-testing.
//!
//! Every clickable region is computed here once; views position elements with
//! [`Rect::css`] and clicks are mapped back through the same rectangles.

use quiz_core::model::CHOICE_COUNT;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Absolute-position style for an element occupying this rectangle.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Positions of every element on an 800×600-style quiz screen, scaled to the
/// configured size by anchoring to the screen center and bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    width: f64,
    height: f64,
}

impl Layout {
    pub const CHOICE_WIDTH: f64 = 300.0;
    pub const CHOICE_HEIGHT: f64 = 50.0;
    /// Vertical distance between the two rows of choices.
    pub const CHOICE_ROW_STEP: f64 = 80.0;
    /// Distance from the bottom edge to the first choice row.
    pub const CHOICE_TOP_INSET: f64 = 180.0;
    pub const BUTTON_WIDTH: f64 = 200.0;
    pub const BUTTON_HEIGHT: f64 = 50.0;

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Region of the choice button at `index`, laid out as a 2×2 grid.
    #[must_use]
    pub fn choice_region(&self, index: usize) -> Option<Rect> {
        if index >= CHOICE_COUNT {
            return None;
        }
        let col = (index % 2) as f64;
        let row = (index / 2) as f64;
        Some(Rect::new(
            self.width / 2.0 - Self::CHOICE_WIDTH + col * Self::CHOICE_WIDTH,
            self.height - Self::CHOICE_TOP_INSET + row * Self::CHOICE_ROW_STEP,
            Self::CHOICE_WIDTH,
            Self::CHOICE_HEIGHT,
        ))
    }

    /// Index of the displayed choice under `point`, considering the first `count` choices.
    #[must_use]
    pub fn hit_test(&self, point: Point, count: usize) -> Option<usize> {
        (0..count.min(CHOICE_COUNT)).find(|&index| {
            self.choice_region(index)
                .is_some_and(|region| region.contains(point))
        })
    }

    #[must_use]
    pub fn start_button(&self) -> Rect {
        Rect::new(
            self.width / 2.0 - Self::BUTTON_WIDTH / 2.0,
            self.height / 2.0,
            Self::BUTTON_WIDTH,
            Self::BUTTON_HEIGHT,
        )
    }

    #[must_use]
    pub fn retry_button(&self) -> Rect {
        Rect::new(
            self.width / 2.0 - Self::BUTTON_WIDTH / 2.0,
            self.height / 2.0 + Self::BUTTON_HEIGHT,
            Self::BUTTON_WIDTH,
            Self::BUTTON_HEIGHT,
        )
    }

    /// Top-left of the start screen title.
    #[must_use]
    pub fn title_origin(&self) -> Point {
        Point::new(self.width / 2.0 - 100.0, self.height / 3.0)
    }

    /// Center of the prompt image, in the upper part of the screen.
    #[must_use]
    pub fn image_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 3.0)
    }

    /// Center of the wrong-answer message.
    #[must_use]
    pub fn feedback_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height - 100.0)
    }

    /// Top-left of the score line; the percentage sits one line below.
    #[must_use]
    pub fn score_origin(&self) -> Point {
        Point::new(self.width / 2.0 - 50.0, self.height / 3.0)
    }

    #[must_use]
    pub fn percentage_origin(&self) -> Point {
        let origin = self.score_origin();
        Point::new(origin.x, origin.y + 30.0)
    }

    #[must_use]
    pub fn progress_origin(&self) -> Point {
        Point::new(16.0, 16.0)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
