use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{Entrance, Motion, RevealLatch};

/// Flips to `true` the first time `target` scrolls into view, then stops observing.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::new());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let seen = entries.iter().any(|entry| entry.is_intersecting());
            if seen && !latch.with_untracked(RevealLatch::is_revealed) {
                latch.update(|l| {
                    l.observe(true);
                });
            }
        },
        UseIntersectionObserverOptions::default().root_margin("0px 0px -100px 0px".to_string()),
    );

    let revealed = Signal::derive(move || latch.with(RevealLatch::is_revealed));
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });
    revealed
}

#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(into)] visible: Signal<bool>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || format!("{} {}", class, motion.class(visible.get())) style=motion.style()>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionTitle(title: &'static str, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Reveal motion=Motion::new(Entrance::FadeUp) visible>
            <h2 class="section-title">
                <span class="gradient-text">{title}</span>
            </h2>
        </Reveal>
    }
}
