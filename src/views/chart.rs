use maud::{html, Markup};

use crate::share::PieSlice;

const RADIUS: f64 = 100.0;
const LABEL_RADIUS: f64 = 0.6 * RADIUS;

fn polar(radius: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    // svg y grows downwards
    (radius * rad.cos(), -radius * rad.sin())
}

fn offset(slice: &PieSlice) -> (f64, f64) {
    if slice.explode == 0.0 {
        return (0.0, 0.0);
    }
    polar(slice.explode * RADIUS, slice.mid_deg())
}

fn wedge_path(slice: &PieSlice) -> String {
    let (ox, oy) = offset(slice);
    let (x1, y1) = polar(RADIUS, slice.start_deg);
    let (x2, y2) = polar(RADIUS, slice.start_deg + slice.sweep_deg);
    let large_arc = u8::from(slice.sweep_deg > 180.0);
    format!(
        "M {ox:.2} {oy:.2} L {:.2} {:.2} A {RADIUS} {RADIUS} 0 {large_arc} 0 {:.2} {:.2} Z",
        ox + x1,
        oy + y1,
        ox + x2,
        oy + y2,
    )
}

fn wedge(slice: &PieSlice) -> Markup {
    html! {
        @if slice.is_full_circle() {
            circle cx="0" cy="0" r=(RADIUS) fill=(slice.kind.color()) {}
        } @else if !slice.is_empty() {
            path d=(wedge_path(slice)) fill=(slice.kind.color()) {}
        }
    }
}

fn percent_text(slice: &PieSlice) -> Markup {
    let (ox, oy) = offset(slice);
    let (x, y) = if slice.is_full_circle() {
        (0.0, 0.0)
    } else {
        polar(LABEL_RADIUS, slice.mid_deg())
    };
    html! {
        @if !slice.is_empty() {
            text x=(format!("{:.2}", ox + x))
                 y=(format!("{:.2}", oy + y))
                 text-anchor="middle"
                 dominant-baseline="middle"
                 class="pie-percent" {
                (slice.percent_label())
            }
        }
    }
}

/// Two-slice pie of fair share versus leftovers.
pub fn pie(slices: &[PieSlice]) -> Markup {
    html! {
        figure.pie {
            svg viewBox="-120 -120 240 240" width="280" height="280" role="img"
                aria-label="Fair share and leftovers" {
                @for slice in slices {
                    (wedge(slice))
                }
                @for slice in slices {
                    (percent_text(slice))
                }
            }
            figcaption {
                ul.pie-legend {
                    @for slice in slices {
                        li {
                            span.swatch style=(format!("background: {}", slice.kind.color())) {}
                            (slice.caption) ": " strong { (slice.value) } " (" (slice.percent_label()) ")"
                        }
                    }
                }
            }
        }
    }
}
