use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{NAV_LINKS, PROFILE};

const SCROLLED_AFTER: f64 = 50.0;
const BACK_TO_TOP_AFTER: f64 = 500.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let scrolled = move || scroll_y.get() > SCROLLED_AFTER;

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a href=link.anchor class=class on:click=move |_| set_menu_open(false)>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 inset-x-0 z-50 transition-all duration-300 {}",
                if scrolled() { "glass py-3" } else { "bg-transparent py-5" },
            )
        }>
            <nav class="container mx-auto px-4 flex items-center justify-between">
                <a href="#home" class="text-2xl font-display font-bold gradient-text">
                    {PROFILE.initials}
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {links("text-sm font-medium text-muted-foreground hover:text-primary transition-colors")}
                </div>
                <button
                    class="md:hidden p-2 rounded-lg hover:bg-muted"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden glass mx-4 mt-3 p-4 flex flex-col gap-4">
                    {links("font-medium hover:text-primary transition-colors")}
                </div>
            </Show>
        </header>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let shown = move || scroll_y.get() > BACK_TO_TOP_AFTER;

    view! {
        <button
            aria-label="Back to top"
            class=move || {
                format!(
                    "fixed bottom-6 left-6 z-40 w-12 h-12 rounded-full bg-primary text-primary-foreground shadow-lg transition-all duration-300 hover:scale-110 {}",
                    if shown() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-4 pointer-events-none" },
                )
            }
            on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
        >
            "↑"
        </button>
    }
}
