//! Browser-backed implementations of the core scheduling, navigation and
//! viewport traits.
//!
//! On the server nothing is scheduled and [`platform_viewport`] hands out a
//! viewport that never scrolls and reports the top of the page.

use std::sync::Arc;
use std::time::Duration;

use leptos_router::NavigateOptions;

use crate::core::{Navigator, Scheduler, TaskHandle, Viewport};

/// Runs deferred work on the browser event loop with `gloo-timers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(not(feature = "ssr"))]
fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> TaskHandle {
        let handle = TaskHandle::new();

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;

            let guard = handle.clone();
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(millis(delay)).await;
                if !guard.is_cancelled() {
                    task();
                }
            });
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (delay, task);
        }

        handle
    }

    fn schedule_repeating(
        &self,
        initial: Duration,
        every: Duration,
        task: Arc<dyn Fn() + Send + Sync>,
    ) -> TaskHandle {
        let handle = TaskHandle::new();

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;

            let guard = handle.clone();
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(millis(initial)).await;
                while !guard.is_cancelled() {
                    task();
                    TimeoutFuture::new(millis(every)).await;
                }
            });
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (initial, every, task);
        }

        handle
    }
}

/// Adapts the router's `navigate` function to [`Navigator`].
///
/// Must be built inside a `<Router>`, since it captures the router context.
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Send + Sync + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Send + Sync + 'static,
{
    fn navigate(&self, path: &str) {
        tracing::debug!("navigating to {path}");
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Navigator bound to the current router.
pub fn router_navigator() -> Arc<dyn Navigator> {
    Arc::new(RouterNavigator::new(leptos_router::hooks::use_navigate()))
}

/// Smooth scrolling and fullscreen through `web-sys`.
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

#[cfg(not(feature = "ssr"))]
impl Viewport for BrowserViewport {
    fn scroll_to(&self, id: &str) -> bool {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = leptos::prelude::document().get_element_by_id(id) else {
            tracing::debug!("no element with id {id} to scroll to");
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        use web_sys::{ScrollBehavior, ScrollToOptions};

        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        leptos::prelude::window().scroll_to_with_scroll_to_options(&options);
    }

    fn toggle_fullscreen(&self, id: &str) -> bool {
        let document = leptos::prelude::document();

        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
            return true;
        }

        match document.get_element_by_id(id) {
            Some(element) => element.request_fullscreen().is_ok(),
            None => false,
        }
    }

    fn scroll_y(&self) -> f64 {
        leptos::prelude::window().scroll_y().unwrap_or(0.0)
    }
}

/// The window's viewport in the browser; inert during server rendering.
pub fn platform_viewport() -> Arc<dyn Viewport> {
    #[cfg(not(feature = "ssr"))]
    {
        Arc::new(BrowserViewport)
    }
    #[cfg(feature = "ssr")]
    {
        Arc::new(crate::core::viewport::NoopViewport)
    }
}
