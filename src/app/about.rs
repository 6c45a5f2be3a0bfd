use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal, SectionTitle};
use crate::content::{HIGHLIGHTS, PROFILE};
use crate::motion::{Entrance, Motion, Stagger};

#[component]
pub fn About() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);
    let cards = Stagger::new(0.7, 0.1);

    view! {
        <section id="about" class="section relative">
            <div class="container mx-auto" node_ref=container>
                <SectionTitle title="About Me" visible />

                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal
                        motion=Motion::new(Entrance::SlideLeft).duration(0.8).delay(0.2)
                        visible
                        class="relative"
                    >
                        <div class="relative w-72 h-72 md:w-96 md:h-96 mx-auto">
                            <div class="absolute inset-0 rounded-full bg-gradient-to-r from-primary via-accent to-secondary p-1 animate-spin-slow">
                                <div class="w-full h-full rounded-full bg-background" />
                            </div>
                            <div class="absolute inset-4 rounded-full bg-gradient-to-br from-primary/20 to-secondary/20 flex items-center justify-center overflow-hidden">
                                <img
                                    src=PROFILE.image
                                    alt=PROFILE.name
                                    class="w-full h-full object-cover rounded-full"
                                />
                            </div>
                            <div class="absolute -top-4 -right-4 glass px-4 py-2 rounded-full animate-float">
                                <span class="text-sm font-medium">{PROFILE.badges[0]}</span>
                            </div>
                            <div class="absolute -bottom-4 -left-4 glass px-4 py-2 rounded-full animate-float-reverse">
                                <span class="text-sm font-medium">{PROFILE.badges[1]}</span>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal
                        motion=Motion::new(Entrance::SlideRight).duration(0.8).delay(0.4)
                        visible
                        class="space-y-6"
                    >
                        <h3 class="text-2xl md:text-3xl font-display font-semibold">
                            "Crafting Digital Experiences with "
                            <span class="gradient-text">"Passion & Precision"</span>
                        </h3>
                        <div class="space-y-4 text-muted-foreground">
                            {PROFILE.bio.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                    </Reveal>
                </div>

                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6 mt-20">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <Reveal
                                    motion=Motion::new(Entrance::FadeUp).duration(0.5).delay(cards.delay(i))
                                    visible
                                    class="glass-hover p-6 text-center group hover:-translate-y-2"
                                >
                                    <div class="w-16 h-16 mx-auto mb-4 rounded-2xl bg-gradient-to-br from-primary/20 to-accent/20 flex items-center justify-center text-2xl text-primary transition-transform duration-500 group-hover:rotate-[360deg]">
                                        {item.icon}
                                    </div>
                                    <h4 class="font-display font-semibold mb-2 group-hover:text-primary transition-colors">
                                        {item.label}
                                    </h4>
                                    <p class="text-sm text-muted-foreground">{item.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
