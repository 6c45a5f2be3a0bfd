use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::experience::Experience;
use super::footer::Footer;
use super::header::{BackToTop, Navbar};
use super::hero::Hero;
use super::loading::LoadingScreen;
use super::projects::Projects;
use super::skills::Skills;
use super::toast::{Toaster, Toasts};

/// (size, position, animation delay in seconds)
const SHAPES: [(&str, &str, f64); 5] = [
    ("w-64 h-64", "top-20 -left-32", 0.0),
    ("w-96 h-96", "top-40 -right-48", 1.0),
    ("w-48 h-48", "bottom-32 left-20", 2.0),
    ("w-72 h-72", "-bottom-20 right-10", 0.5),
    ("w-40 h-40", "top-1/2 left-1/3", 1.5),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (is_loading, set_loading) = signal(true);
    provide_context(Toasts::new());

    view! {
        <Title text="Portfolio" />
        <div class="relative min-h-screen">
            <Show when=move || is_loading.get()>
                <LoadingScreen on_complete=Callback::new(move |_| set_loading(false)) />
            </Show>
            <FloatingShapes />
            <div class=move || {
                format!(
                    "relative z-0 transition-opacity duration-500 {}",
                    if is_loading() { "opacity-0" } else { "opacity-100" },
                )
            }>
                <Navbar />
                <main>
                    <Hero />
                    <About />
                    <Projects />
                    <Experience />
                    <Skills />
                    <Contact />
                </main>
                <Footer />
                <BackToTop />
            </div>
            <Toaster />
        </div>
    }
}

#[component]
fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none">
            {SHAPES
                .iter()
                .map(|(size, position, delay)| {
                    view! {
                        <div
                            class=format!("absolute {size} {position} animate-drift")
                            style:animation-delay=format!("{delay}s")
                        >
                            <div class="w-full h-full rounded-full bg-gradient-to-br from-primary/20 via-accent/10 to-secondary/20 blur-3xl animate-morph" />
                        </div>
                    }
                })
                .collect_view()}
            <div class="absolute inset-0 opacity-[0.02] grid-overlay" />
        </div>
    }
}
