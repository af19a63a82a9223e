use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{RevealConfig, RevealDriver, RevealScheduler, RevealTrigger};

type Driver = RwSignal<RevealDriver<TimeoutHandle>>;

/// Browser timeouts that tick the driver they belong to.
struct Timeouts(Driver);

impl RevealScheduler for Timeouts {
    type Handle = TimeoutHandle;

    fn schedule(&mut self, delay: Duration) -> Option<TimeoutHandle> {
        let driver = self.0;
        let tick = move || {
            driver.try_update(|d| {
                d.tick();
            });
        };
        set_timeout_with_handle(tick, delay)
            .map_err(|err| log::warn!("couldn't schedule reveal tick: {err:?}"))
            .ok()
    }

    fn cancel(&mut self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Each tick updates the driver, which re-runs the effect and polls for the next one.
fn use_reveal(text: &str, config: RevealConfig) -> Driver {
    let driver = RwSignal::new(RevealDriver::new(text, config));

    Effect::new(move |_| {
        driver.track();
        driver.update_untracked(|d| {
            d.poll(&mut Timeouts(driver));
        });
    });

    on_cleanup(move || {
        driver.try_update_untracked(|d| d.dispose(&mut Timeouts(driver)));
    });

    driver
}

/// Types `text` out as soon as it mounts. The cursor keeps blinking afterwards.
#[component]
pub fn TypingText(
    #[prop(into)] text: String,
    #[prop(default = RevealConfig::ALWAYS_ON)] config: RevealConfig,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let driver = use_reveal(&text, config);

    view! {
        <span class=class aria-label=text>
            {move || driver.with(|d| d.state().visible_text())}
            <span class="typing-cursor" aria-hidden="true">
                "|"
            </span>
        </span>
    }
}

/// Types `text` out once the element is mostly on screen. Later scrolling is ignored.
#[component]
pub fn TypingOnView(
    #[prop(into)] text: String,
    #[prop(default = RevealConfig::ON_VISIBLE)] config: RevealConfig,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let driver = use_reveal(&text, config);
    let target = NodeRef::<html::Span>::new();

    let threshold = match config.trigger {
        RevealTrigger::OnVisible { threshold } => threshold,
        RevealTrigger::Always => 0.0,
    };
    let observer = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                driver.maybe_update(|d| d.observe_visibility(entry.intersection_ratio()));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    // the latch never re-arms; stop observing once it fires
    let stop = observer.stop;
    Effect::new(move |stopped: Option<bool>| {
        if stopped == Some(true) {
            return true;
        }
        let armed = driver.with(|d| d.state().is_armed());
        if armed {
            stop();
        }
        armed
    });

    view! {
        <span node_ref=target class=class aria-label=text>
            {move || driver.with(|d| d.state().visible_text())}
            <Show when=move || driver.with(|d| d.state().cursor_visible())>
                <span class="typing-cursor" aria-hidden="true">
                    "|"
                </span>
            </Show>
        </span>
    }
}
