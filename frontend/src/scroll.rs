use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Window};
use yew::prelude::*;

/// Window events that move a tracked section relative to the viewport.
const TRACKED_EVENTS: [&str; 2] = ["scroll", "resize"];

pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Viewport and element measurements sampled in one event callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub viewport_height: f64,
    /// `getBoundingClientRect().top`, negative once the section scrolled past the top.
    pub element_top: f64,
    pub element_height: f64,
}

/// Tuning of the progress ratio
/// `(vh * lead - top) / (vh * viewport_span + height * height_span)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerWeights {
    pub lead: f64,
    pub viewport_span: f64,
    pub height_span: f64,
}

impl TrackerWeights {
    /// Text reveal sections: progress starts as the section enters from the bottom.
    pub const REVEAL: Self = Self {
        lead: 1.0,
        viewport_span: 1.0,
        height_span: 0.5,
    };

    /// Sticky card stack: starts a little later and spans the whole section.
    pub const STACK: Self = Self {
        lead: 0.8,
        viewport_span: 0.5,
        height_span: 1.0,
    };
}

pub fn progress_from_geometry(geometry: Geometry, weights: TrackerWeights) -> f64 {
    let travelled = geometry.viewport_height * weights.lead - geometry.element_top;
    let span = geometry.viewport_height * weights.viewport_span
        + geometry.element_height * weights.height_span;
    clamp01(travelled / span)
}

/// Registers `listener` for `event` as passive, so the browser never waits on
/// it before scrolling.
pub fn listen_passive(window: &Window, event: &str, listener: &Closure<dyn FnMut()>) {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        listener.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("Failed to attach {} listener: {:?}", event, e);
    }
}

pub fn unlisten(window: &Window, event: &str, listener: &Closure<dyn FnMut()>) {
    if let Err(e) =
        window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
    {
        log::warn!("Failed to detach {} listener: {:?}", event, e);
    }
}

fn sample(target: &NodeRef, weights: TrackerWeights) -> Option<f64> {
    let element = target.cast::<Element>()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(progress_from_geometry(
        Geometry {
            viewport_height,
            element_top: rect.top(),
            element_height: rect.height(),
        },
        weights,
    ))
}

/// Tracks how far the element behind `target` has moved through the
/// viewport. Samples once on mount and again on every scroll/resize;
/// listeners are removed when the component unmounts. Events that leave the
/// clamped value unchanged do not re-render.
#[hook]
pub fn use_scroll_progress(target: NodeRef, weights: TrackerWeights) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |target: &NodeRef| {
                let target = target.clone();
                let update = move || {
                    // Not mounted yet (or already gone): keep the last value.
                    if let Some(value) = sample(&target, weights) {
                        progress.set(value);
                    }
                };
                update();

                let listener = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                let window = web_sys::window();
                if let Some(window) = &window {
                    for event in TRACKED_EVENTS {
                        listen_passive(window, event, &listener);
                    }
                }

                move || {
                    if let Some(window) = window {
                        for event in TRACKED_EVENTS {
                            unlisten(&window, event, &listener);
                        }
                    }
                    drop(listener);
                }
            },
            target,
        );
    }

    *progress
}

/// Jumps back to the top of the page whenever `key` changes, e.g. when a
/// detail page is reused for another record.
#[hook]
pub fn use_scroll_to_top<T>(key: T)
where
    T: PartialEq + 'static,
{
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        key,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(viewport_height: f64, element_top: f64, element_height: f64) -> Geometry {
        Geometry { viewport_height, element_top, element_height }
    }

    #[test]
    fn raw_ratio_is_clamped() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
    }

    #[test]
    fn section_below_viewport_has_no_progress() {
        let p = progress_from_geometry(geometry(800.0, 1200.0, 600.0), TrackerWeights::REVEAL);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn reveal_progress_follows_base_formula() {
        // (800 - 200) / (800 + 600 * 0.5) = 600 / 1100
        let p = progress_from_geometry(geometry(800.0, 200.0, 600.0), TrackerWeights::REVEAL);
        assert!((p - 600.0 / 1100.0).abs() < 1e-12);
    }

    #[test]
    fn section_far_above_viewport_is_complete() {
        let p = progress_from_geometry(geometry(800.0, -5000.0, 600.0), TrackerWeights::REVEAL);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn stack_weights_delay_the_start() {
        // (800 * 0.8 - 640) / (800 * 0.5 + 1600) = 0
        let p = progress_from_geometry(geometry(800.0, 640.0, 1600.0), TrackerWeights::STACK);
        assert_eq!(p, 0.0);
        // (640 - (-360)) / 2000 = 0.5
        let p = progress_from_geometry(geometry(800.0, -360.0, 1600.0), TrackerWeights::STACK);
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_geometry_does_not_escape_range() {
        let p = progress_from_geometry(geometry(0.0, 0.0, 0.0), TrackerWeights::REVEAL);
        assert_eq!(p, 0.0);
        let p = progress_from_geometry(geometry(0.0, -10.0, 0.0), TrackerWeights::REVEAL);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn settled_sections_report_identical_progress() {
        // Every event while a section is off either end must yield the same
        // value, so the state setter sees no change and skips the re-render.
        let below = [1200.0, 1500.0, 4000.0]
            .map(|top| progress_from_geometry(geometry(800.0, top, 600.0), TrackerWeights::REVEAL));
        assert!(below.iter().all(|p| p.to_bits() == 0.0_f64.to_bits()));

        let above = [-1000.0, -2500.0, -9000.0]
            .map(|top| progress_from_geometry(geometry(800.0, top, 600.0), TrackerWeights::STACK));
        assert!(above.iter().all(|p| *p == 1.0));
    }

    #[test]
    fn progress_grows_as_the_page_scrolls_down() {
        let mut previous = 0.0;
        for scrolled in (0..3000).step_by(50) {
            let top = 1000.0 - scrolled as f64;
            let p = progress_from_geometry(geometry(800.0, top, 900.0), TrackerWeights::REVEAL);
            assert!(p >= previous);
            previous = p;
        }
        assert_eq!(previous, 1.0);
    }
}
