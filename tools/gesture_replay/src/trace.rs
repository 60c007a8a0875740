use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use swipe_gesture::{Phase, Point, Sample, ScreenExtent};

const TRACE_TAG: &str = "gesture_trace";
const TRACE_HEADER: &str = "gesture_trace,ms,phase,x,y,width,height";

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TraceSample {
    pub(crate) sample: Sample,
    pub(crate) screen: ScreenExtent,
}

pub(crate) fn parse_trace(path: &Path, density: f32) -> Result<Vec<TraceSample>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_trace_text(&path.display().to_string(), &text, density)
}

/// Parse `gesture_trace` lines, converting pixel coordinates to
/// device-independent units by dividing by `density`.
pub(crate) fn parse_trace_text(
    source: &str,
    text: &str,
    density: f32,
) -> Result<Vec<TraceSample>> {
    if !density.is_finite() || density <= 0.0 {
        bail!("density must be a positive number, got {density}");
    }

    let mut out = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed == TRACE_HEADER {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts[0] != TRACE_TAG {
            continue;
        }
        if parts.len() < 7 {
            bail!("{source}:{line_no} invalid trace line, expected 7 columns");
        }

        let t_ms = parts[1]
            .parse::<u64>()
            .with_context(|| format!("{source}:{line_no} invalid ms '{}'", parts[1]))?;
        let phase = parse_phase(parts[2])
            .ok_or_else(|| anyhow!("{source}:{line_no} invalid phase '{}'", parts[2]))?;
        let x = parse_px(parts[3], source, line_no, "x")?;
        let y = parse_px(parts[4], source, line_no, "y")?;
        let width = parse_px(parts[5], source, line_no, "width")?;
        let height = parse_px(parts[6], source, line_no, "height")?;

        out.push(TraceSample {
            sample: Sample::new(phase, Point::new(x / density, y / density), t_ms),
            screen: ScreenExtent::new(width / density, height / density),
        });
    }

    Ok(out)
}

pub(crate) fn parse_expected_kinds(path: &Path) -> Result<Vec<&'static str>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut kinds = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }
        let kind = normalize_kind(token).ok_or_else(|| {
            anyhow!(
                "{}:{} invalid expected event kind: {}",
                path.display(),
                line_no + 1,
                token
            )
        })?;
        kinds.push(kind);
    }

    Ok(kinds)
}

pub(crate) fn normalize_kind(kind: &str) -> Option<&'static str> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "horizontal_swipe" => Some("horizontal_swipe"),
        "vertical_swipe" => Some("vertical_swipe"),
        "horizontal_fling" => Some("horizontal_fling"),
        "vertical_fling" => Some("vertical_fling"),
        "click" => Some("click"),
        _ => None,
    }
}

fn parse_phase(raw: &str) -> Option<Phase> {
    match raw.to_ascii_lowercase().as_str() {
        "down" => Some(Phase::Start),
        "move" => Some(Phase::Move),
        "up" => Some(Phase::End),
        "cancel" => Some(Phase::Cancel),
        _ => None,
    }
}

fn parse_px(raw: &str, source: &str, line_no: usize, field: &str) -> Result<f32> {
    raw.parse::<f32>()
        .with_context(|| format!("{source}:{line_no} invalid {field} '{raw}'"))
}
