//! SVG charts for the dashboard. Geometry is computed by plain functions so
//! it can be tested without rendering.

use api::MonthlyPoint;
use dioxus::prelude::*;

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 260.0;
const AXIS_PAD: f64 = 32.0;
const BAR_GAP: f64 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay `values` out as bars inside a `width` × `height` box. Bars are scaled to
/// the largest value; an all-zero or negative series yields flat bars.
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<Bar> {
    if values.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let slot = width / values.len() as f64;
    let bar_w = slot * (1.0 - BAR_GAP);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = if max > 0.0 { (v.max(0.0) / max) * height } else { 0.0 };
            Bar {
                x: i as f64 * slot + (slot - bar_w) / 2.0,
                y: height - h,
                width: bar_w,
                height: h,
            }
        })
        .collect()
}

/// One arc of a donut drawn as a dashed circle stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Share of the whole, 0..=1.
    pub fraction: f64,
    /// Visible stroke length.
    pub dash: f64,
    /// Stroke offset so the arc starts where the previous one ended.
    pub offset: f64,
}

/// Split a circle of `circumference` between `values`. Returns no segments
/// when the total is zero.
pub fn donut_segments(values: &[f64], circumference: f64) -> Vec<Segment> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = v.max(0.0) / total;
            let dash = fraction * circumference;
            let segment = Segment {
                fraction,
                dash,
                offset: -start,
            };
            start += dash;
            segment
        })
        .collect()
}

#[component]
pub fn BarChart(title: String, points: Vec<MonthlyPoint>, color: String) -> Element {
    let plot_w = VIEW_W - AXIS_PAD;
    let plot_h = VIEW_H - AXIS_PAD;
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let bars = bar_layout(&values, plot_w, plot_h);
    let max = values.iter().copied().fold(0.0_f64, f64::max);

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-title", "{title}" }
            if points.is_empty() {
                p { class: "chart-empty", "No data available" }
            } else {
                svg {
                    class: "chart",
                    view_box: "0 0 {VIEW_W} {VIEW_H}",
                    line {
                        x1: "{AXIS_PAD}", y1: "{plot_h}", x2: "{VIEW_W}", y2: "{plot_h}",
                        stroke: "#cbd5e1",
                    }
                    text { x: "0", y: "12", class: "chart-axis", "{max:.0}" }
                    for (bar, point) in bars.iter().zip(points.iter()) {
                        g { key: "{point.label}",
                            rect {
                                x: "{AXIS_PAD + bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                                fill: "{color}",
                                rx: "3",
                                title { "{point.label}: {point.value}" }
                            }
                            text {
                                x: "{AXIS_PAD + bar.x + bar.width / 2.0}",
                                y: "{VIEW_H - 10.0}",
                                class: "chart-axis",
                                text_anchor: "middle",
                                "{point.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One slice of a donut chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[component]
pub fn DonutChart(title: String, slices: Vec<Slice>) -> Element {
    let radius = 70.0_f64;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let segments = donut_segments(&values, circumference);

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-title", "{title}" }
            if segments.is_empty() {
                p { class: "chart-empty", "No data available" }
            } else {
                svg {
                    class: "chart donut",
                    view_box: "0 0 200 200",
                    g { transform: "rotate(-90 100 100)",
                        for (segment, slice) in segments.iter().zip(slices.iter()) {
                            circle {
                                key: "{slice.label}",
                                cx: "100",
                                cy: "100",
                                r: "{radius}",
                                fill: "none",
                                stroke: "{slice.color}",
                                stroke_width: "28",
                                stroke_dasharray: "{segment.dash} {circumference - segment.dash}",
                                stroke_dashoffset: "{segment.offset}",
                            }
                        }
                    }
                }
                ul { class: "chart-legend",
                    for (segment, slice) in segments.iter().zip(slices.iter()) {
                        li { key: "{slice.label}",
                            span { class: "legend-swatch", style: "background: {slice.color}" }
                            "{slice.label}: {segment.fraction * 100.0:.1}%"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_largest_value() {
        let bars = bar_layout(&[50.0, 100.0], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 50.0);
        assert!(bars[0].x < bars[1].x);
        assert!((bars[0].width - 70.0).abs() < 1e-9);
    }

    #[test]
    fn empty_and_zero_series() {
        assert!(bar_layout(&[], 200.0, 100.0).is_empty());
        let flat = bar_layout(&[0.0, 0.0], 200.0, 100.0);
        assert!(flat.iter().all(|b| b.height == 0.0 && b.y == 100.0));
    }

    #[test]
    fn donut_fractions_cover_circle() {
        let segments = donut_segments(&[3.0, 1.0], 100.0);
        assert_eq!(segments[0].fraction, 0.75);
        assert_eq!(segments[0].dash, 75.0);
        assert_eq!(segments[1].offset, -75.0);
        let total: f64 = segments.iter().map(|s| s.dash).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn donut_without_data() {
        assert!(donut_segments(&[0.0, 0.0], 100.0).is_empty());
        assert!(donut_segments(&[], 100.0).is_empty());
    }
}
