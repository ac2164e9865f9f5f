use leptos::prelude::*;

use crate::profile::{Education as EducationEntry, EDUCATION};

use super::SectionHeading;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Educational"
                    accent="Journey"
                    blurb="Building a strong foundation in computer science and technology"
                />
                <div class="relative space-y-8">
                    {EDUCATION.iter().map(|entry| view! { <EducationCard entry=*entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EducationCard(entry: EducationEntry) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 p-6 rounded-lg border-l-4 border-cyan">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-2 mb-4">
                <div>
                    <h3 class="text-xl font-bold">"🎓 " {entry.degree}</h3>
                    <p class="text-cyan font-medium">{entry.institution}</p>
                </div>
                <span class="self-start px-3 py-1 rounded-full text-xs bg-green/20 text-green">
                    {entry.status}
                </span>
            </div>
            <div class="flex flex-wrap gap-4 text-sm text-muted mb-4">
                <span>"📅 " {entry.period}</span>
                <span>"📍 " {entry.location}</span>
                <span>"🏆 " {entry.grade}</span>
            </div>
            <ul class="grid sm:grid-cols-2 gap-2 text-sm">
                {entry
                    .highlights
                    .iter()
                    .map(|h| view! { <li class="before:content-['▸'] before:mr-2 before:text-cyan">{*h}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
