use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::reveal::Reveal;
use crate::content::PROFILE;
use crate::motion::{Entrance, Motion, Stagger};

const ROLE_INTERVAL_MS: u64 = 3000;

#[component]
pub fn Hero() -> impl IntoView {
    let (role, set_role) = signal(0usize);
    let (mounted, set_mounted) = signal(false);
    let roles = PROFILE.roles;

    use_interval_fn(
        move || set_role.update(|i| *i = (*i + 1) % roles.len()),
        ROLE_INTERVAL_MS,
    );
    Effect::new(move |_| set_mounted(true));

    let stagger = Stagger::new(0.2, 0.15);
    let step = move |i: usize| Motion::new(Entrance::FadeUp).duration(0.8).delay(stagger.delay(i));

    view! {
        <section id="home" class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="container mx-auto px-4 text-center">
                <Reveal motion=step(0) visible=mounted>
                    <p class="text-primary font-medium tracking-widest uppercase mb-4">
                        "Hello, I'm"
                    </p>
                </Reveal>
                <Reveal motion=step(1) visible=mounted>
                    <h1 class="text-5xl md:text-7xl font-display font-bold mb-6">
                        <span class="gradient-text">{PROFILE.name}</span>
                    </h1>
                </Reveal>
                <Reveal motion=step(2) visible=mounted>
                    <p class="text-2xl md:text-3xl font-display h-10 mb-6">
                        {move || roles[role.get() % roles.len()]}
                    </p>
                </Reveal>
                <Reveal motion=step(3) visible=mounted>
                    <p class="max-w-2xl mx-auto text-lg text-muted-foreground mb-10">
                        {PROFILE.tagline}
                    </p>
                </Reveal>
                <Reveal
                    motion=step(4)
                    visible=mounted
                    class="flex flex-col sm:flex-row items-center justify-center gap-4"
                >
                    <a
                        href="#projects"
                        class="px-8 py-4 rounded-full bg-primary text-primary-foreground font-semibold hover:scale-105 transition-transform"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-4 rounded-full glass-hover font-semibold hover:scale-105 transition-transform"
                    >
                        "Get In Touch"
                    </a>
                </Reveal>
            </div>
            <a
                href="#about"
                aria-label="Scroll to about"
                class="absolute bottom-10 left-1/2 -translate-x-1/2 text-muted-foreground animate-bounce"
            >
                "⌄"
            </a>
        </section>
    }
}
