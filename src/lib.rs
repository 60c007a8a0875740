//! Single-finger swipe and fling classification for media-player views.
//!
//! Positions, thresholds and screen extents are device-independent units;
//! converting platform pixels is up to the caller.

pub mod gesture;

pub use gesture::{
    config::{
        parse_config_file, parse_config_str, validate_config, GestureConfig, GestureConfigError,
    },
    core::GestureClassifier,
    types::{
        ClassifierOutput, GestureEvent, GestureKind, Phase, Point, Sample, ScreenExtent,
        SwipeDirection,
    },
    GestureDetector, GestureSink,
};
