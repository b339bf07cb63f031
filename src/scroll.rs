use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

/// Whether the page is scrolled past the header threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_past_threshold: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        Self {
            is_past_threshold: offset > threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Scrolled,
}

impl From<ScrollState> for HeaderStyle {
    fn from(state: ScrollState) -> Self {
        if state.is_past_threshold {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Transparent
        }
    }
}

impl HeaderStyle {
    pub fn bar_class(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "site-header",
            HeaderStyle::Scrolled => "site-header scrolled",
        }
    }

    pub fn link_class(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "nav-link nav-link-light",
            HeaderStyle::Scrolled => "nav-link nav-link-dark",
        }
    }
}

fn current_offset() -> Option<f64> {
    window().and_then(|w| w.scroll_y().ok())
}

/// Tracks the window scroll offset against `threshold`.
///
/// The listener is registered on mount and removed on unmount. Only a change
/// of the flag re-renders the caller.
#[hook]
pub fn use_scroll_state(threshold: f64) -> ScrollState {
    let state = use_state_eq(|| {
        current_offset()
            .map(|offset| ScrollState::from_offset(offset, threshold))
            .unwrap_or_default()
    });

    {
        let state = state.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = window().and_then(|window| {
                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        if let Ok(offset) = scroll_window.scroll_y() {
                            state.set(ScrollState::from_offset(offset, threshold));
                        }
                    }) as Box<dyn FnMut()>);

                    match window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Some((window, callback)),
                        Err(err) => {
                            warn!("failed to register scroll listener: {:?}", err);
                            None
                        }
                    }
                });

                move || {
                    if let Some((window, callback)) = listener {
                        if window
                            .remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_err()
                        {
                            debug!("scroll listener already gone");
                        }
                    }
                }
            },
            threshold,
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCROLL_THRESHOLD_PX;

    #[test]
    fn threshold_is_exclusive() {
        for offset in [0.0, 10.0, 49.9, 50.0] {
            assert!(!ScrollState::from_offset(offset, SCROLL_THRESHOLD_PX).is_past_threshold);
        }
        for offset in [50.01, 51.0, 600.0, 10_000.0] {
            assert!(ScrollState::from_offset(offset, SCROLL_THRESHOLD_PX).is_past_threshold);
        }
    }

    #[test]
    fn header_follows_scroll_back_and_forth() {
        let down = HeaderStyle::from(ScrollState::from_offset(100.0, SCROLL_THRESHOLD_PX));
        assert_eq!(down, HeaderStyle::Scrolled);
        assert_eq!(down.bar_class(), "site-header scrolled");

        let up = HeaderStyle::from(ScrollState::from_offset(0.0, SCROLL_THRESHOLD_PX));
        assert_eq!(up, HeaderStyle::Transparent);
        assert_eq!(up.bar_class(), "site-header");
    }

    #[test]
    fn no_hysteresis_around_threshold() {
        let styles: Vec<HeaderStyle> = [49.0, 51.0, 49.0, 51.0]
            .iter()
            .map(|&o| ScrollState::from_offset(o, SCROLL_THRESHOLD_PX).into())
            .collect();
        assert_eq!(
            styles,
            vec![
                HeaderStyle::Transparent,
                HeaderStyle::Scrolled,
                HeaderStyle::Transparent,
                HeaderStyle::Scrolled
            ]
        );
    }
}
