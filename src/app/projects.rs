use leptos::prelude::*;

use crate::profile::{Project, PROJECTS};

use super::{ScrollContext, SectionHeading};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Featured"
                    accent="Projects"
                    blurb="Showcasing innovative solutions built with modern technologies and AI-driven approaches"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project /> }).collect_view()}
                </div>
                <Collaboration />
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let link_class = "text-sm px-3 py-1 rounded-md border border-muted/50 hover:text-cyan hover:border-cyan transition-colors";
    view! {
        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30 flex flex-col">
            <div class="flex items-start justify-between gap-4 mb-2">
                <h3 class="text-xl font-bold">{project.title}</h3>
                <span class="shrink-0 px-3 py-1 rounded-full text-xs bg-purple/20 text-purple">
                    {project.status}
                </span>
            </div>
            <p class="text-sm text-cyan mb-4">{project.category}</p>
            <p class="text-base leading-relaxed mb-4">{project.description}</p>
            <h4 class="font-semibold mb-2">"Key Features"</h4>
            <ul class="text-sm space-y-1 mb-4">
                {project.highlights.iter().map(|h| view! { <li>"• " {*h}</li> }).collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech_stack
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-2 py-1 rounded text-xs border border-muted/50">{*t}</span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-auto flex gap-3">
                {project
                    .demo_link
                    .map(|href| view! { <a href=href class=link_class>"Live Demo ↗"</a> })}
                {project
                    .source_link
                    .map(|href| view! { <a href=href class=link_class>"Source Code"</a> })}
            </div>
        </div>
    }
}

#[component]
fn Collaboration() -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();

    view! {
        <div class="text-center mt-16">
            <div class="bg-brightBlack/30 p-8 rounded-lg border border-muted/30 max-w-2xl mx-auto">
                <h3 class="text-2xl font-bold mb-4">"Interested in Collaboration?"</h3>
                <p class="text-muted mb-6">
                    "I'm always excited to work on innovative projects and learn new technologies."
                </p>
                <button
                    on:click=move |_| {
                        let _ = scroll.navigate("contact");
                    }
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-8 py-3 rounded-md font-medium border border-cyan/30 transition-all duration-300"
                >
                    "Let's Connect"
                </button>
            </div>
        </div>
    }
}
