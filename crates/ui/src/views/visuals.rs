use dioxus::prelude::*;

use drill_core::{Fraction, Visual};

const BAR_WIDTH: f64 = 320.0;
const BAR_HEIGHT: f64 = 36.0;
const BARS_HEIGHT: f64 = BAR_HEIGHT * 2.0 + 30.0;
const SHADE: &str = "#5b8def";
const BLANK: &str = "#ffffff";
const INK: &str = "#333333";

/// Point on a circle of `radius` around `(cx, cy)`, angle measured counter-clockwise.
fn polar(cx: f64, cy: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (cx + radius * radians.cos(), cy - radius * radians.sin())
}

/// SVG path for the arc marking an angle from the positive x axis.
fn angle_arc(cx: f64, cy: f64, radius: f64, degrees: u32) -> String {
    let (x0, y0) = polar(cx, cy, radius, 0.0);
    let (x1, y1) = polar(cx, cy, radius, f64::from(degrees));
    let large = u8::from(degrees > 180);
    format!("M {x0:.1} {y0:.1} A {radius:.1} {radius:.1} 0 {large} 0 {x1:.1} {y1:.1}")
}

/// Scale a rectangle so its longer side is `max` pixels.
fn fit_rectangle(width: u32, height: u32, max: f64) -> (f64, f64) {
    let longest = f64::from(width.max(height).max(1));
    let scale = max / longest;
    (f64::from(width) * scale, f64::from(height) * scale)
}

fn shaded_parts(fraction: Fraction) -> (u32, u32) {
    let denominator = u32::try_from(fraction.denominator()).unwrap_or(1).max(1);
    let numerator = u32::try_from(fraction.numerator())
        .unwrap_or(0)
        .min(denominator);
    (numerator, denominator)
}

#[component]
pub fn VisualView(visual: Visual) -> Element {
    match visual {
        Visual::None => rsx! {},
        Visual::NumberCards(cards) => rsx! {
            div { class: "visual number-cards",
                for (index, card) in cards.into_iter().enumerate() {
                    span { key: "{index}", class: "number-card", "{card}" }
                }
            }
        },
        Visual::Stacked { top, bottom, operator } => rsx! {
            div { class: "visual stacked",
                div { class: "stacked__row", "{top}" }
                div { class: "stacked__row stacked__row--operator", "{operator} {bottom}" }
                hr { class: "stacked__rule" }
            }
        },
        Visual::AreaModel {
            rows,
            columns: [left, right],
        } => rsx! {
            table { class: "visual area-model",
                thead {
                    tr {
                        th { "×" }
                        th { "{left}" }
                        th { "{right}" }
                    }
                }
                tbody {
                    for (index, row) in rows.into_iter().enumerate() {
                        tr { key: "{index}",
                            th { "{row}" }
                            td { "?" }
                            td { "?" }
                        }
                    }
                }
            }
        },
        Visual::DivisionBracket { dividend, divisor } => rsx! {
            div { class: "visual division",
                span { class: "division__divisor", "{divisor}" }
                span { class: "division__bracket", ")" }
                span { class: "division__dividend", "{dividend}" }
            }
        },
        Visual::FractionGrid { rows, cols, shaded } => rsx! {
            FractionGrid { rows, cols, shaded }
        },
        Visual::FractionBars { left, right } => rsx! {
            svg {
                class: "visual fraction-bars",
                width: "400",
                height: "{BARS_HEIGHT}",
                FractionBar { fraction: left, y: 5.0 }
                FractionBar { fraction: right, y: BAR_HEIGHT + 20.0 }
            }
        },
        Visual::NumberLine { denominator, marked } => rsx! {
            NumberLine { denominator, marked }
        },
        Visual::Rectangle { width, height } => rsx! {
            Rectangle { width, height }
        },
        Visual::Angle { degrees } => rsx! {
            Angle { degrees }
        },
    }
}

fn fill(shaded: bool) -> &'static str {
    if shaded { SHADE } else { BLANK }
}

struct Cell {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: &'static str,
}

fn grid_cells(rows: u32, cols: u32, shaded: u32, size: f64) -> Vec<Cell> {
    let cols = cols.max(1);
    (0..rows * cols)
        .map(|index| Cell {
            x: 1.0 + f64::from(index % cols) * size,
            y: 1.0 + f64::from(index / cols) * size,
            width: size,
            height: size,
            fill: fill(index < shaded),
        })
        .collect()
}

fn bar_cells(fraction: Fraction, y: f64) -> Vec<Cell> {
    let (numerator, denominator) = shaded_parts(fraction);
    let part = BAR_WIDTH / f64::from(denominator);
    (0..denominator)
        .map(|index| Cell {
            x: 1.0 + f64::from(index) * part,
            y,
            width: part,
            height: BAR_HEIGHT,
            fill: fill(index < numerator),
        })
        .collect()
}

#[component]
fn FractionGrid(rows: u32, cols: u32, shaded: u32) -> Element {
    let size = 40.0;
    let width = f64::from(cols) * size + 2.0;
    let height = f64::from(rows) * size + 2.0;
    let cells = grid_cells(rows, cols, shaded, size);

    rsx! {
        svg { class: "visual fraction-grid", width: "{width}", height: "{height}",
            for (index, cell) in cells.into_iter().enumerate() {
                rect {
                    key: "{index}",
                    x: "{cell.x}",
                    y: "{cell.y}",
                    width: "{cell.width}",
                    height: "{cell.height}",
                    fill: cell.fill,
                    stroke: INK,
                }
            }
        }
    }
}

#[component]
fn FractionBar(fraction: Fraction, y: f64) -> Element {
    let cells = bar_cells(fraction, y);
    let label_x = BAR_WIDTH + 12.0;
    let label_y = y + BAR_HEIGHT * 0.65;

    rsx! {
        g {
            for (index, cell) in cells.into_iter().enumerate() {
                rect {
                    key: "{index}",
                    x: "{cell.x}",
                    y: "{cell.y}",
                    width: "{cell.width}",
                    height: "{cell.height}",
                    fill: cell.fill,
                    stroke: INK,
                }
            }
            text { x: "{label_x}", y: "{label_y}", font_size: "18", "{fraction}" }
        }
    }
}

#[component]
fn NumberLine(denominator: u32, marked: u32) -> Element {
    let (left, right, axis) = (20.0, 380.0, 40.0);
    let step = (right - left) / f64::from(denominator.max(1));
    let ticks: Vec<f64> = (0..=denominator)
        .map(|index| left + f64::from(index) * step)
        .collect();
    let dot = left + f64::from(marked) * step;
    let (tick_top, tick_bottom, label_y) = (axis - 8.0, axis + 8.0, axis + 28.0);

    rsx! {
        svg { class: "visual number-line", width: "400", height: "80",
            line { x1: "{left}", y1: "{axis}", x2: "{right}", y2: "{axis}", stroke: INK, stroke_width: "2" }
            for (index, x) in ticks.into_iter().enumerate() {
                line { key: "{index}", x1: "{x}", y1: "{tick_top}", x2: "{x}", y2: "{tick_bottom}", stroke: INK }
            }
            text { x: "{left}", y: "{label_y}", text_anchor: "middle", "0" }
            text { x: "{right}", y: "{label_y}", text_anchor: "middle", "1" }
            circle { cx: "{dot}", cy: "{axis}", r: "7", fill: SHADE }
        }
    }
}

#[component]
fn Rectangle(width: u32, height: u32) -> Element {
    let (w, h) = fit_rectangle(width, height, 220.0);
    let (x, y) = (40.0, 20.0);
    let (svg_width, svg_height) = (w + 80.0, h + 60.0);
    let (width_x, width_y) = (x + w / 2.0, y + h + 22.0);
    let (height_x, height_y) = (x - 10.0, y + h / 2.0);

    rsx! {
        svg { class: "visual rectangle", width: "{svg_width}", height: "{svg_height}",
            rect { x: "{x}", y: "{y}", width: "{w}", height: "{h}", fill: "#e8f0fe", stroke: INK, stroke_width: "2" }
            text { x: "{width_x}", y: "{width_y}", text_anchor: "middle", "{width}" }
            text { x: "{height_x}", y: "{height_y}", text_anchor: "end", "{height}" }
        }
    }
}

#[component]
fn Angle(degrees: u32) -> Element {
    let (cx, cy, ray) = (150.0, 150.0, 120.0);
    let (x0, y0) = polar(cx, cy, ray, 0.0);
    let (x1, y1) = polar(cx, cy, ray, f64::from(degrees));
    let arc = angle_arc(cx, cy, 30.0, degrees);

    rsx! {
        svg { class: "visual angle", width: "300", height: "300",
            line { x1: "{cx}", y1: "{cy}", x2: "{x0:.1}", y2: "{y0:.1}", stroke: INK, stroke_width: "3" }
            line { x1: "{cx}", y1: "{cy}", x2: "{x1:.1}", y2: "{y1:.1}", stroke: INK, stroke_width: "3" }
            path { d: "{arc}", fill: "none", stroke: SHADE, stroke_width: "2" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_points_up_at_ninety_degrees() {
        let (x, y) = polar(100.0, 100.0, 50.0, 90.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn reflex_angles_take_the_long_arc() {
        assert!(angle_arc(0.0, 0.0, 10.0, 120).contains(" 0 0 0 "));
        assert!(angle_arc(0.0, 0.0, 10.0, 270).contains(" 0 1 0 "));
    }

    #[test]
    fn rectangles_keep_their_proportions() {
        let (w, h) = fit_rectangle(10, 5, 200.0);
        assert!((w - 200.0).abs() < 1e-9);
        assert!((h - 100.0).abs() < 1e-9);
    }

    #[test]
    fn grid_shades_the_first_cells_row_by_row() {
        let cells = grid_cells(2, 3, 4, 10.0);
        assert_eq!(cells.len(), 6);
        let shaded = cells.iter().filter(|c| c.fill == SHADE).count();
        assert_eq!(shaded, 4);
        assert!((cells[3].y - 11.0).abs() < 1e-9);
        assert_eq!(cells[4].fill, SHADE);
        assert_eq!(cells[5].fill, BLANK);
    }

    #[test]
    fn shading_never_exceeds_the_bar() {
        let fraction = Fraction::new(3, 4).expect("fraction");
        assert_eq!(shaded_parts(fraction), (3, 4));
    }
}
