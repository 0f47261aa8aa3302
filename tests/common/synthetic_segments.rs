use lane_tracker::Segment;

/// Short dashes along the line through (`x_bottom`, `height - 1`) with `slope`,
/// between rows `y_top` and `height - 1`.
pub fn lane_dashes(x_bottom: f64, slope: f64, height: i32, y_top: i32, dash: i32) -> Vec<Segment> {
    assert!(slope != 0.0, "slope must be non-zero");
    assert!(dash > 0, "dash length must be positive");
    let y_bottom = height - 1;
    let x_at = |y: i32| x_bottom + (y - y_bottom) as f64 / slope;
    let mut out = Vec::new();
    let mut y = y_bottom;
    while y - dash >= y_top {
        let y2 = y - dash;
        out.push(Segment::new(x_at(y).round() as i32, y, x_at(y2).round() as i32, y2));
        y -= 2 * dash;
    }
    out
}

/// Road clutter the classifier must reject: a vertical post, a horizontal
/// shadow edge and a steep guard-rail segment.
pub fn clutter() -> Vec<Segment> {
    vec![
        Segment::new(100, 300, 100, 380),
        Segment::new(200, 420, 420, 421),
        Segment::new(100, 500, 200, 400),
    ]
}
