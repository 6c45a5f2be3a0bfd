use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::reveal::{use_reveal, Reveal, SectionTitle};
use crate::content::{Project, PROJECTS, PROJECT_CATEGORIES};
use crate::filter::{filter_by_category, ALL};
use crate::motion::{Entrance, Motion, Stagger};

const TECH_PREVIEW: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);
    let (active, set_active) = signal(ALL);
    let (selected, set_selected) = signal(None::<Project>);

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_selected(None);
        }
    });

    let shown = move || {
        filter_by_category(&PROJECTS, active.get())
            .into_iter()
            .copied()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let cards = Stagger::new(0.0, 0.1);

    view! {
        <section id="projects" class="section relative">
            <div class="container mx-auto" node_ref=container>
                <SectionTitle title="My Projects" visible />

                <Reveal
                    motion=Motion::new(Entrance::FadeUp).delay(0.2)
                    visible
                    class="flex flex-wrap justify-center gap-4 mb-12"
                >
                    {PROJECT_CATEGORIES
                        .iter()
                        .map(|category| {
                            let category = *category;
                            view! {
                                <button
                                    class=move || {
                                        format!(
                                            "px-6 py-2 rounded-full font-medium transition-all hover:scale-105 active:scale-95 {}",
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

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=shown
                        key=|(_, project)| project.id
                        children=move |(i, project)| {
                            view! {
                                <Reveal
                                    motion=Motion::new(Entrance::Scale).duration(0.5).delay(cards.delay(i))
                                    visible
                                    class="group cursor-pointer hover:-translate-y-2"
                                >
                                    <ProjectCard project on_open=Callback::new(move |_| set_selected(Some(project))) />
                                </Reveal>
                            }
                        }
                    />
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|project| {
                        view! {
                            <ProjectModal project on_close=Callback::new(move |_| set_selected(None)) />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, on_open: Callback<()>) -> impl IntoView {
    let (tech, hidden) = project.tech_preview(TECH_PREVIEW);

    view! {
        <div class="glass-hover p-6 h-full flex flex-col" on:click=move |_| on_open.run(())>
            <div class=format!(
                "relative h-48 mb-6 rounded-xl bg-gradient-to-br {} overflow-hidden",
                project.gradient,
            )>
                <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end justify-center pb-4">
                    <span class="text-sm font-medium">"Click to view details"</span>
                </div>
                <div class="absolute top-4 left-4 w-12 h-12 rounded-lg bg-background/20 backdrop-blur-sm animate-wobble" />
                <div class="absolute bottom-4 right-4 w-8 h-8 rounded-full bg-background/20 backdrop-blur-sm animate-pulse" />
            </div>
            <div class="flex-1">
                <span class="text-xs font-medium text-primary uppercase tracking-wider">
                    {project.category}
                </span>
                <h3 class="text-xl font-display font-semibold mt-2 mb-3 group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-sm text-muted-foreground line-clamp-2">{project.description}</p>
            </div>
            <div class="flex flex-wrap gap-2 mt-4">
                {tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-3 py-1 text-xs font-medium bg-muted rounded-full">{*t}</span>
                        }
                    })
                    .collect_view()}
                {hidden
                    .map(|n| {
                        view! {
                            <span class="px-3 py-1 text-xs font-medium bg-muted rounded-full">
                                {format!("+{n}")}
                            </span>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn ProjectModal(project: Project, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-background/80 backdrop-blur-sm animate-fade-in"
            on:click=move |_| on_close.run(())
        >
            <div
                role="dialog"
                aria-modal="true"
                class="glass p-8 max-w-2xl w-full max-h-[80vh] overflow-y-auto animate-modal-in"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-start mb-6">
                    <div>
                        <span class="text-sm font-medium text-primary uppercase tracking-wider">
                            {project.category}
                        </span>
                        <h3 class="text-2xl font-display font-bold mt-1">{project.title}</h3>
                    </div>
                    <button
                        aria-label="Close"
                        class="p-2 hover:bg-muted rounded-full transition-colors"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                <div class=format!("h-64 mb-6 rounded-xl bg-gradient-to-br {}", project.gradient) />
                <p class="text-muted-foreground mb-6">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-4 py-2 text-sm font-medium bg-muted rounded-full">{*t}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 px-6 py-3 bg-primary text-primary-foreground rounded-full font-medium hover:scale-105 transition-transform"
                    >
                        "↗ Live Demo"
                    </a>
                    <a
                        href=project.source
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 px-6 py-3 border border-border rounded-full font-medium hover:border-primary transition-colors"
                    >
                        <i class="devicon-github-plain" />
                        " Source Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
