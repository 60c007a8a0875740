pub mod config;
pub mod core;
pub mod types;

use self::{
    config::GestureConfig,
    core::GestureClassifier,
    types::{GestureEvent, Phase, Point, Sample, ScreenExtent},
};

/// Receiver for classified gestures.
pub trait GestureSink {
    fn on_gesture(&mut self, event: &GestureEvent);

    /// Called for a release that did not qualify as a fling.
    fn on_click(&mut self, position: Point) {
        let _ = position;
    }
}

/// A classifier bound to the sink that acts on its output.
pub struct GestureDetector<S> {
    classifier: GestureClassifier,
    sink: S,
}

impl<S: GestureSink> GestureDetector<S> {
    pub fn new(config: GestureConfig, sink: S) -> Self {
        Self {
            classifier: GestureClassifier::new(config),
            sink,
        }
    }

    /// Classify one sample and dispatch the result. Returns whether the
    /// sample was consumed by the gesture layer.
    pub fn handle(&mut self, sample: Sample, screen: ScreenExtent) -> bool {
        let output = self.classifier.process_sample(sample, screen);
        if let Some(event) = &output.event {
            self.sink.on_gesture(event);
        }
        if sample.phase == Phase::End && !output.consumed {
            self.sink.on_click(sample.position);
        }
        output.consumed
    }

    pub fn classifier_mut(&mut self) -> &mut GestureClassifier {
        &mut self.classifier
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
