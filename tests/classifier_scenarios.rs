use swipe_gesture::{
    GestureClassifier, GestureConfig, GestureDetector, GestureEvent, GestureKind, GestureSink,
    Phase, Point, Sample, ScreenExtent, SwipeDirection,
};

const SCREEN: ScreenExtent = ScreenExtent::new(411.0, 731.0);

fn sample(phase: Phase, x: f32, y: f32, t_ms: u64) -> Sample {
    Sample::new(phase, Point::new(x, y), t_ms)
}

#[derive(Default)]
struct PlayerControls {
    seek_dp: f32,
    volume_dp: f32,
    skips: Vec<SwipeDirection>,
    clicks: usize,
}

impl GestureSink for PlayerControls {
    fn on_gesture(&mut self, event: &GestureEvent) {
        match *event {
            GestureEvent::HorizontalSwipe { delta_x, .. } => self.seek_dp += delta_x,
            GestureEvent::VerticalSwipe { delta_y, .. } => self.volume_dp += delta_y,
            GestureEvent::HorizontalFling { .. } | GestureEvent::VerticalFling { .. } => {
                self.skips.push(event.direction())
            }
        }
    }

    fn on_click(&mut self, _position: Point) {
        self.clicks += 1;
    }
}

#[test]
fn swipe_then_release_fling() {
    let mut classifier = GestureClassifier::new(GestureConfig::new(250, 20.0, 50.0));

    let out = classifier.process_sample(sample(Phase::Start, 0.0, 0.0, 0), SCREEN);
    assert!(out.consumed);
    assert!(out.event.is_none());

    let out = classifier.process_sample(sample(Phase::Move, 60.0, 0.0, 10), SCREEN);
    assert_eq!(
        out.event,
        Some(GestureEvent::HorizontalSwipe {
            delta_x: -60.0,
            start: Point::new(0.0, 0.0),
            end: Point::new(60.0, 0.0),
            first_contact: Point::new(0.0, 0.0),
            screen: SCREEN,
        })
    );

    let out = classifier.process_sample(sample(Phase::End, 200.0, 0.0, 20), SCREEN);
    assert!(out.consumed);
    let fling = out.event.expect("release should fling");
    assert_eq!(fling.kind(), GestureKind::HorizontalFling);
    assert_eq!(fling.delta(), -200.0);
    assert_eq!(fling.start(), Point::new(0.0, 0.0));
    assert_eq!(fling.end(), Point::new(200.0, 0.0));
    assert_eq!(fling.direction(), SwipeDirection::Right);
}

#[test]
fn resumed_finger_after_pause_does_not_jump() {
    let mut classifier = GestureClassifier::new(GestureConfig::new(100, 15.0, 50.0));
    classifier.process_sample(sample(Phase::Start, 0.0, 0.0, 0), SCREEN);

    let out = classifier.process_sample(sample(Phase::Move, 100.0, 100.0, 101), SCREEN);
    assert!(out.event.is_none());
    assert!(!out.consumed);

    let out = classifier.process_sample(sample(Phase::Move, 105.0, 108.0, 150), SCREEN);
    assert!(out.event.is_none());

    let out = classifier.process_sample(sample(Phase::Move, 105.0, 115.0, 180), SCREEN);
    let swipe = out.event.expect("threshold reached from new reference");
    assert_eq!(swipe.kind(), GestureKind::VerticalSwipe);
    assert_eq!(swipe.start(), Point::new(100.0, 100.0));
    assert_eq!(swipe.delta(), -15.0);
}

#[test]
fn detector_drives_player_controls() {
    let config = GestureConfig::new(250, 10.0, 80.0);
    let mut detector = GestureDetector::new(config, PlayerControls::default());

    // Drag right in two steps, then lift close to where the drag ended.
    detector.handle(sample(Phase::Start, 100.0, 300.0, 0), SCREEN);
    detector.handle(sample(Phase::Move, 115.0, 302.0, 16), SCREEN);
    detector.handle(sample(Phase::Move, 140.0, 301.0, 32), SCREEN);
    let consumed = detector.handle(sample(Phase::End, 141.0, 301.0, 48), SCREEN);
    assert!(!consumed);

    // Quick upward flick.
    detector.handle(sample(Phase::Start, 200.0, 600.0, 1_000), SCREEN);
    let consumed = detector.handle(sample(Phase::End, 205.0, 450.0, 1_080), SCREEN);
    assert!(consumed);

    let controls = detector.into_sink();
    assert_eq!(controls.seek_dp, -40.0);
    assert_eq!(controls.volume_dp, 0.0);
    assert_eq!(controls.skips, vec![SwipeDirection::Up]);
    assert_eq!(controls.clicks, 1);
}
