use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::PROFILE;

const FADE_AFTER_MS: f64 = 2000.0;
const COMPLETE_AFTER_MS: f64 = 2500.0;

#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let (started, set_started) = signal(false);
    let (fading, set_fading) = signal(false);

    let UseTimeoutFnReturn {
        start: start_fade, ..
    } = use_timeout_fn(move |_: ()| set_fading(true), FADE_AFTER_MS);
    let UseTimeoutFnReturn {
        start: start_complete,
        ..
    } = use_timeout_fn(move |_: ()| on_complete.run(()), COMPLETE_AFTER_MS);

    // effects only run in the browser, so the splash stays up until hydration
    Effect::new(move |_| {
        set_started(true);
        start_fade(());
        start_complete(());
    });

    view! {
        <div class=move || {
            format!(
                "fixed inset-0 z-[100] bg-background flex items-center justify-center transition-opacity duration-500 {}",
                if fading() { "opacity-0" } else { "opacity-100" },
            )
        }>
            <div class="text-center">
                <div class=move || {
                    format!(
                        "relative w-24 h-24 mx-auto mb-8 transition-transform duration-700 {}",
                        if started() { "scale-100 rotate-0" } else { "scale-0 -rotate-180" },
                    )
                }>
                    <div class="absolute inset-0 rounded-full border-2 border-transparent border-t-primary border-r-accent animate-spin" />
                    <div class="absolute inset-2 rounded-full bg-gradient-to-br from-primary/20 to-accent/20 flex items-center justify-center">
                        <span class="text-3xl font-display font-bold gradient-text">
                            {PROFILE.initials}
                        </span>
                    </div>
                </div>
                <div class="space-y-2">
                    <p class="text-muted-foreground">"Loading my portfolio..."</p>
                    <div class="w-48 h-1 bg-muted rounded-full overflow-hidden mx-auto">
                        <div
                            class="h-full bg-gradient-to-r from-primary via-accent to-secondary transition-[width] duration-[1500ms] delay-500"
                            style:width=move || if started() { "100%" } else { "0%" }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
