use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal, SectionTitle};
use crate::content::{Skill, SKILLS, STATS};
use crate::filter::{categories, filter_by_category, ALL};
use crate::motion::{Entrance, Motion, Stagger};

#[component]
pub fn Skills() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);

    let tabs = categories(&SKILLS);
    let (active, set_active) = signal(tabs.first().copied().unwrap_or(ALL));

    let shown = move || {
        filter_by_category(&SKILLS, active.get())
            .into_iter()
            .copied()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let stats = Stagger::new(1.0, 0.1);

    view! {
        <section id="skills" class="section relative">
            <div class="container mx-auto" node_ref=container>
                <SectionTitle title="Skills & Expertise" visible />

                <Reveal
                    motion=Motion::new(Entrance::FadeUp).delay(0.2)
                    visible
                    class="flex flex-wrap justify-center gap-4 mb-12"
                >
                    {tabs
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class=move || {
                                        format!(
                                            "px-6 py-3 rounded-full font-medium transition-all hover:scale-105 active:scale-95 {}",
                                            if active.get() == category {
                                                "bg-primary text-primary-foreground"
                                            } else {
                                                "glass hover:bg-muted"
                                            },
                                        )
                                    }
                                    on:click=move |_| set_active(category)
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()}
                </Reveal>

                // keyed on the category so switching tabs replays the entrance
                {move || {
                    let category = active.get();
                    view! {
                        <div
                            data-category=category
                            class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6 animate-fade-up"
                        >
                            {shown()
                                .into_iter()
                                .map(|(i, skill)| view! { <SkillCard skill index=i visible /> })
                                .collect_view()}
                        </div>
                    }
                }}

                <div class="mt-20 grid grid-cols-2 md:grid-cols-4 gap-8">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <Reveal
                                    motion=Motion::new(Entrance::Pop).duration(0.5).delay(stats.delay(i))
                                    visible
                                    class="text-center"
                                >
                                    <span class="text-4xl md:text-5xl font-display font-bold gradient-text">
                                        {stat.value}
                                    </span>
                                    <p class="text-muted-foreground mt-2">{stat.label}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize, visible: Signal<bool>) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);
    let entrance = Stagger::new(0.0, 0.1);
    let bar = Stagger::new(0.5, 0.1);
    let level = format!("{}%", skill.level);
    let bar_width = {
        let level = level.clone();
        move || if visible.get() { level.clone() } else { "0%".to_string() }
    };

    view! {
        <Reveal motion=Motion::new(Entrance::Flip).delay(entrance.delay(index)) visible class="perspective-1000">
            <div
                class=move || {
                    format!(
                        "relative preserve-3d cursor-pointer transition-transform duration-700 {}",
                        if flipped() { "rotate-y-180" } else { "rotate-y-0" },
                    )
                }
                on:mouseenter=move |_| set_flipped(true)
                on:mouseleave=move |_| set_flipped(false)
            >
                <div class="glass-hover p-6 text-center backface-hidden">
                    <div class="w-16 h-16 mx-auto mb-4 rounded-2xl bg-gradient-to-br from-primary/20 to-accent/20 flex items-center justify-center">
                        <span class="text-2xl font-display font-bold text-primary">
                            {skill.monogram()}
                        </span>
                    </div>
                    <h4 class="font-display font-semibold">{skill.name}</h4>
                    <div class="mt-4 skill-bar">
                        <div
                            class="skill-bar-fill transition-[width] duration-1000"
                            style:width=bar_width
                            style:transition-delay=format!("{:.2}s", bar.delay(index))
                        />
                    </div>
                    <span class="text-sm text-muted-foreground mt-2 block">{level.clone()}</span>
                </div>
                <div class="absolute inset-0 glass-hover p-6 text-center backface-hidden rotate-y-180">
                    <div class="h-full flex flex-col items-center justify-center">
                        <span class="text-4xl font-display font-bold gradient-text">
                            {level.clone()}
                        </span>
                        <span class="text-sm text-muted-foreground mt-2">"Proficiency Level"</span>
                        <div class="mt-4 w-full">
                            <div class="h-2 bg-muted rounded-full overflow-hidden">
                                <div
                                    class="h-full bg-gradient-to-r from-primary to-accent rounded-full"
                                    style:width=level.clone()
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
