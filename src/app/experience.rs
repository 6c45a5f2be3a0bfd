use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal, SectionTitle};
use crate::content::EXPERIENCES;
use crate::motion::{Entrance, Motion, Stagger};

#[component]
pub fn Experience() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);
    let entries = Stagger::new(0.3, 0.2);
    let markers = Stagger::new(0.5, 0.2);

    view! {
        <section id="experience" class="section relative">
            <div class="container mx-auto" node_ref=container>
                <SectionTitle title="Experience" visible />

                <div class="relative max-w-4xl mx-auto">
                    <Reveal
                        motion=Motion::new(Entrance::Grow).duration(1.0).delay(0.2)
                        visible
                        class="absolute left-8 md:left-1/2 top-0 bottom-0 w-0.5 bg-gradient-to-b from-primary via-accent to-secondary origin-top"
                    >
                        ""
                    </Reveal>

                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            let left = i % 2 == 0;
                            let entrance = if left { Entrance::SlideLeft } else { Entrance::SlideRight };
                            let achievements = Stagger::new(0.7 + 0.2 * i as f64, 0.1);
                            view! {
                                <Reveal
                                    motion=Motion::new(entrance).delay(entries.delay(i))
                                    visible
                                    class=format!(
                                        "relative flex items-center mb-12 {}",
                                        if left { "md:flex-row" } else { "md:flex-row-reverse" },
                                    )
                                >
                                    <Reveal
                                        motion=Motion::new(Entrance::Pop).duration(0.4).delay(markers.delay(i))
                                        visible
                                        class="absolute left-8 md:left-1/2 -translate-x-1/2 z-10"
                                    >
                                        <div class="w-12 h-12 rounded-full bg-background border-4 border-primary flex items-center justify-center pulse-glow">
                                            {exp.kind.icon()}
                                        </div>
                                    </Reveal>
                                    <div class=format!(
                                        "w-full md:w-5/12 ml-20 md:ml-0 {}",
                                        if left { "md:pr-12" } else { "md:pl-12" },
                                    )>
                                        <div class="glass-hover p-6 transition-transform hover:scale-[1.02] hover:-translate-y-1">
                                            <span class="text-sm text-primary font-medium">{exp.period}</span>
                                            <h3 class="text-xl font-display font-semibold mt-2">{exp.title}</h3>
                                            <p class="text-muted-foreground mt-1">{exp.organization}</p>
                                            <p class="text-sm text-muted-foreground mt-4">{exp.description}</p>
                                            <div class="mt-4 flex flex-wrap gap-2">
                                                {exp
                                                    .achievements
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(j, achievement)| {
                                                        view! {
                                                            <Reveal
                                                                motion=Motion::new(Entrance::Scale).duration(0.3).delay(achievements.delay(j))
                                                                visible
                                                                class="px-3 py-1 text-xs bg-primary/10 text-primary rounded-full"
                                                            >
                                                                {*achievement}
                                                            </Reveal>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
