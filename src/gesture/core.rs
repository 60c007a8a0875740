use log::{debug, trace};
use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{
    config::GestureConfig,
    types::{ClassifierOutput, GestureEvent, Phase, Point, Sample, ScreenExtent},
};

#[derive(Clone, Copy, Debug)]
enum ClassifierHsmEvent {
    Sample { sample: Sample, screen: ScreenExtent },
}

#[derive(Clone, Copy, Debug, Default)]
struct DispatchContext {
    event: Option<GestureEvent>,
    consumed: bool,
}

impl DispatchContext {
    fn claim(&mut self) {
        self.consumed = true;
    }

    fn emit(&mut self, event: GestureEvent) {
        self.event = Some(event);
        self.consumed = true;
    }

    fn finish(self) -> ClassifierOutput {
        ClassifierOutput {
            event: self.event,
            consumed: self.consumed,
        }
    }
}

/// Reduces down/move/up samples to swipe and fling gestures.
///
/// Swipes are measured from a moving reference point that advances every
/// time a swipe fires and is dropped after `decay_ms` of inactivity. Flings
/// are measured from the first contact point when the finger lifts.
pub struct GestureClassifier {
    config: GestureConfig,
    machine: statig::blocking::StateMachine<ClassifierHsm>,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            machine: ClassifierHsm::new(config).state_machine(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Forget the current interaction, as if no `Start` had been seen.
    pub fn reset(&mut self) {
        self.machine = ClassifierHsm::new(self.config).state_machine();
    }

    pub fn process_sample(&mut self, sample: Sample, screen: ScreenExtent) -> ClassifierOutput {
        let mut context = DispatchContext::default();
        self.machine
            .handle_with_context(&ClassifierHsmEvent::Sample { sample, screen }, &mut context);
        context.finish()
    }
}

struct ClassifierHsm {
    config: GestureConfig,
    first_contact: Point,
    last_reference: Point,
    last_reference_ms: u64,
}

impl ClassifierHsm {
    fn new(config: GestureConfig) -> Self {
        Self {
            config,
            first_contact: Point::default(),
            last_reference: Point::default(),
            last_reference_ms: 0,
        }
    }

    fn begin_contact(&mut self, sample: &Sample) {
        self.first_contact = sample.position;
        self.set_reference(sample.position, sample.t_ms);
    }

    fn set_reference(&mut self, point: Point, t_ms: u64) {
        self.last_reference = point;
        self.last_reference_ms = t_ms;
    }

    fn track_move(&mut self, context: &mut DispatchContext, sample: &Sample, screen: ScreenExtent) {
        let position = sample.position;
        let idle_ms = sample.t_ms.saturating_sub(self.last_reference_ms);
        if idle_ms > self.config.decay_ms {
            trace!(
                "gesture: reference decayed after {}ms, re-anchoring at ({}, {})",
                idle_ms,
                position.x,
                position.y
            );
            self.set_reference(position, sample.t_ms);
            return;
        }

        let (delta_x, delta_y) = self.last_reference.delta_to(position);
        if below_threshold(delta_x, delta_y, self.config.swipe_threshold) {
            trace!(
                "gesture: move ({}, {}) below swipe threshold",
                delta_x,
                delta_y
            );
            return;
        }

        let start = self.last_reference;
        let event = if horizontal_dominates(delta_x, delta_y) {
            GestureEvent::HorizontalSwipe {
                delta_x,
                start,
                end: position,
                first_contact: self.first_contact,
                screen,
            }
        } else {
            GestureEvent::VerticalSwipe {
                delta_y,
                start,
                end: position,
                first_contact: self.first_contact,
                screen,
            }
        };
        debug!("gesture: {} delta={}", event.kind().label(), event.delta());
        context.emit(event);
        self.set_reference(position, sample.t_ms);
    }

    fn finish_contact(
        &mut self,
        context: &mut DispatchContext,
        sample: &Sample,
        screen: ScreenExtent,
    ) {
        let position = sample.position;
        let (delta_x, delta_y) = self.first_contact.delta_to(position);
        // Short travel is a tap; leave it unconsumed so the caller can click.
        if below_threshold(delta_x, delta_y, self.config.fling_threshold) {
            return;
        }

        let start = self.first_contact;
        let event = if horizontal_dominates(delta_x, delta_y) {
            GestureEvent::HorizontalFling {
                delta_x,
                start,
                end: position,
                screen,
            }
        } else {
            GestureEvent::VerticalFling {
                delta_y,
                start,
                end: position,
                screen,
            }
        };
        debug!("gesture: {} delta={}", event.kind().label(), event.delta());
        context.emit(event);
    }
}

#[state_machine(initial = "State::idle()")]
impl ClassifierHsm {
    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &ClassifierHsmEvent) -> Outcome<State> {
        match event {
            ClassifierHsmEvent::Sample { sample, .. } => match sample.phase {
                Phase::Start => {
                    self.begin_contact(sample);
                    context.claim();
                    Transition(State::tracking())
                }
                Phase::Move => {
                    // No contact yet: every move behaves like a decayed reference.
                    debug!("gesture: move without prior start, re-anchoring reference");
                    self.set_reference(sample.position, sample.t_ms);
                    Handled
                }
                Phase::End => {
                    debug!("gesture: release without prior start ignored");
                    Handled
                }
                Phase::Cancel => Handled,
            },
        }
    }

    #[state]
    fn tracking(
        &mut self,
        context: &mut DispatchContext,
        event: &ClassifierHsmEvent,
    ) -> Outcome<State> {
        match event {
            ClassifierHsmEvent::Sample { sample, screen } => {
                match sample.phase {
                    Phase::Start => {
                        self.begin_contact(sample);
                        context.claim();
                    }
                    Phase::Move => self.track_move(context, sample, *screen),
                    Phase::End => self.finish_contact(context, sample, *screen),
                    Phase::Cancel => {}
                }
                Handled
            }
        }
    }
}

fn below_threshold(delta_x: f32, delta_y: f32, threshold: f32) -> bool {
    delta_x.abs() < threshold && delta_y.abs() < threshold
}

// Ties go to the vertical axis.
fn horizontal_dominates(delta_x: f32, delta_y: f32) -> bool {
    delta_x.abs() > delta_y.abs()
}
