use glam::DVec2;

/// Host controls that adjust the running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SpeedUp,
    SlowDown,
    RaisePrecision,
    LowerPrecision,
    ZoomIn,
    ZoomOut,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "+" | "=" | "ArrowUp" => Some(KeyAction::SpeedUp),
        "-" | "_" | "ArrowDown" => Some(KeyAction::SlowDown),
        "]" => Some(KeyAction::RaisePrecision),
        "[" => Some(KeyAction::LowerPrecision),
        "z" | "Z" => Some(KeyAction::ZoomIn),
        "x" | "X" => Some(KeyAction::ZoomOut),
        _ => None,
    }
}

/// Map a CSS-pixel offset inside the canvas rect to CSS pixels relative to
/// the canvas center. The device pixel ratio never enters stroke units.
#[inline]
pub fn surface_local(offset_css: DVec2, rect_css: DVec2) -> DVec2 {
    offset_css - rect_css * 0.5
}

/// Suffix shown next to the title, e.g. `" : 12 circles"`.
pub fn circle_count_label(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => " : 1 circle".to_string(),
        n => format!(" : {} circles", n),
    }
}
