#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`. A finger moving right from `self`
    /// to `other` yields a negative x delta.
    pub fn delta_to(self, other: Point) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenExtent {
    pub width: f32,
    pub height: f32,
}

impl ScreenExtent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Move,
    End,
    /// Platform cancel or any other action that is not down/move/up.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub position: Point,
    pub phase: Phase,
    pub t_ms: u64,
}

impl Sample {
    pub const fn new(phase: Phase, position: Point, t_ms: u64) -> Self {
        Self {
            position,
            phase,
            t_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    HorizontalSwipe,
    VerticalSwipe,
    HorizontalFling,
    VerticalFling,
}

impl GestureKind {
    pub fn label(self) -> &'static str {
        match self {
            GestureKind::HorizontalSwipe => "horizontal_swipe",
            GestureKind::VerticalSwipe => "vertical_swipe",
            GestureKind::HorizontalFling => "horizontal_fling",
            GestureKind::VerticalFling => "vertical_fling",
        }
    }
}

/// A classified gesture. Deltas are `reference - current`, so a rightward
/// or downward movement is negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    HorizontalSwipe {
        delta_x: f32,
        start: Point,
        end: Point,
        first_contact: Point,
        screen: ScreenExtent,
    },
    VerticalSwipe {
        delta_y: f32,
        start: Point,
        end: Point,
        first_contact: Point,
        screen: ScreenExtent,
    },
    HorizontalFling {
        delta_x: f32,
        start: Point,
        end: Point,
        screen: ScreenExtent,
    },
    VerticalFling {
        delta_y: f32,
        start: Point,
        end: Point,
        screen: ScreenExtent,
    },
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::HorizontalSwipe { .. } => GestureKind::HorizontalSwipe,
            GestureEvent::VerticalSwipe { .. } => GestureKind::VerticalSwipe,
            GestureEvent::HorizontalFling { .. } => GestureKind::HorizontalFling,
            GestureEvent::VerticalFling { .. } => GestureKind::VerticalFling,
        }
    }

    /// Delta on the axis that fired.
    pub fn delta(&self) -> f32 {
        match *self {
            GestureEvent::HorizontalSwipe { delta_x, .. }
            | GestureEvent::HorizontalFling { delta_x, .. } => delta_x,
            GestureEvent::VerticalSwipe { delta_y, .. }
            | GestureEvent::VerticalFling { delta_y, .. } => delta_y,
        }
    }

    pub fn start(&self) -> Point {
        match *self {
            GestureEvent::HorizontalSwipe { start, .. }
            | GestureEvent::VerticalSwipe { start, .. }
            | GestureEvent::HorizontalFling { start, .. }
            | GestureEvent::VerticalFling { start, .. } => start,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            GestureEvent::HorizontalSwipe { end, .. }
            | GestureEvent::VerticalSwipe { end, .. }
            | GestureEvent::HorizontalFling { end, .. }
            | GestureEvent::VerticalFling { end, .. } => end,
        }
    }

    pub fn screen(&self) -> ScreenExtent {
        match *self {
            GestureEvent::HorizontalSwipe { screen, .. }
            | GestureEvent::VerticalSwipe { screen, .. }
            | GestureEvent::HorizontalFling { screen, .. }
            | GestureEvent::VerticalFling { screen, .. } => screen,
        }
    }

    pub fn is_swipe(&self) -> bool {
        matches!(
            self,
            GestureEvent::HorizontalSwipe { .. } | GestureEvent::VerticalSwipe { .. }
        )
    }

    pub fn direction(&self) -> SwipeDirection {
        let delta = self.delta();
        match self.kind() {
            GestureKind::HorizontalSwipe | GestureKind::HorizontalFling => {
                if delta > 0.0 {
                    SwipeDirection::Left
                } else {
                    SwipeDirection::Right
                }
            }
            GestureKind::VerticalSwipe | GestureKind::VerticalFling => {
                if delta > 0.0 {
                    SwipeDirection::Up
                } else {
                    SwipeDirection::Down
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClassifierOutput {
    pub event: Option<GestureEvent>,
    pub consumed: bool,
}
