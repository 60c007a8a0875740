use swipe_gesture::{GestureConfig, GestureDetector, GestureEvent, GestureSink, Point};

use crate::trace::TraceSample;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ReplayRecord {
    Gesture { t_ms: u64, event: GestureEvent },
    Click { t_ms: u64, position: Point },
}

impl ReplayRecord {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            ReplayRecord::Gesture { event, .. } => event.kind().label(),
            ReplayRecord::Click { .. } => "click",
        }
    }

    pub(crate) fn csv_line(&self) -> String {
        match self {
            ReplayRecord::Gesture { t_ms, event } => {
                let start = event.start();
                let end = event.end();
                format!(
                    "event,{},{},{},{},{},{},{}",
                    t_ms,
                    self.label(),
                    event.delta(),
                    start.x,
                    start.y,
                    end.x,
                    end.y
                )
            }
            ReplayRecord::Click { t_ms, position } => format!(
                "event,{},click,0,{},{},{},{}",
                t_ms, position.x, position.y, position.x, position.y
            ),
        }
    }
}

#[derive(Default)]
struct TraceRecorder {
    now_ms: u64,
    records: Vec<ReplayRecord>,
}

impl GestureSink for TraceRecorder {
    fn on_gesture(&mut self, event: &GestureEvent) {
        self.records.push(ReplayRecord::Gesture {
            t_ms: self.now_ms,
            event: *event,
        });
    }

    fn on_click(&mut self, position: Point) {
        self.records.push(ReplayRecord::Click {
            t_ms: self.now_ms,
            position,
        });
    }
}

pub(crate) fn replay(config: GestureConfig, samples: &[TraceSample]) -> Vec<ReplayRecord> {
    let mut detector = GestureDetector::new(config, TraceRecorder::default());
    let mut last_ms = 0u64;
    for item in samples {
        if item.sample.t_ms < last_ms {
            log::warn!(
                "replay: sample at {}ms precedes {}ms; decay uses saturating time",
                item.sample.t_ms,
                last_ms
            );
        }
        last_ms = last_ms.max(item.sample.t_ms);
        detector.sink_mut().now_ms = item.sample.t_ms;
        detector.handle(item.sample, item.screen);
    }
    detector.into_sink().records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::parse_trace_text;

    fn labels(records: &[ReplayRecord]) -> Vec<&'static str> {
        records.iter().map(ReplayRecord::label).collect()
    }

    #[test]
    fn tap_and_fling_trace() {
        let text = "\
gesture_trace,0,down,10,10,360,640
gesture_trace,40,up,12,10,360,640
gesture_trace,500,down,300,100,360,640
gesture_trace,516,move,280,100,360,640
gesture_trace,532,move,200,104,360,640
gesture_trace,548,up,100,108,360,640
";
        let samples = parse_trace_text("inline", text, 1.0).expect("trace should parse");
        let records = replay(GestureConfig::default(), &samples);
        assert_eq!(
            labels(&records),
            vec![
                "click",
                "horizontal_swipe",
                "horizontal_swipe",
                "horizontal_fling"
            ]
        );
        assert_eq!(records[0].csv_line(), "event,40,click,0,12,10,12,10");
        assert_eq!(records[3].csv_line(), "event,548,horizontal_fling,200,300,100,100,108");
    }

    #[test]
    fn bundled_trace_matches_expectation() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("traces");
        let samples = crate::trace::parse_trace(&dir.join("seek_and_volume.csv"), 2.0)
            .expect("bundled trace should parse");
        let expected = crate::trace::parse_expected_kinds(&dir.join("seek_and_volume.expect"))
            .expect("bundled expectation should parse");
        let records = replay(GestureConfig::default(), &samples);
        assert_eq!(labels(&records), expected);
    }
}
