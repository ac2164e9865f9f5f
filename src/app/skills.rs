use leptos::prelude::*;

use crate::profile::{level_tone, Skill, SkillCategory, SKILL_CATEGORIES, STRENGTHS};

use super::SectionHeading;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Technical"
                    accent="Expertise"
                    blurb="A comprehensive overview of my technical skills and proficiency levels across different domains"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <CategoryCard category=*category /> })
                        .collect_view()}
                </div>
                <Strengths />
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
            <h3 class="text-lg font-bold mb-6 flex items-center gap-3">
                <span class="text-2xl">{category.icon}</span>
                {category.title}
            </h3>
            <div class="space-y-4">
                {category.skills.iter().map(|skill| view! { <SkillBar skill=*skill /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let badge = skill.proficiency.badge();
    view! {
        <div>
            <div class="flex items-center justify-between mb-1 gap-2">
                <span class="text-sm font-medium">{skill.name}</span>
                <div class="flex items-center gap-2 shrink-0">
                    <span class=format!("px-2 py-0.5 rounded text-xs border {}", badge.class())>
                        {skill.proficiency.label()}
                    </span>
                    <span class="text-xs text-muted">{skill.level} "%"</span>
                </div>
            </div>
            <div class="h-2 rounded-full bg-muted/30 overflow-hidden">
                <div
                    class=format!(
                        "h-full rounded-full transition-all duration-1000 {}",
                        level_tone(skill.level).bar_class(),
                    )
                    style:width=format!("{}%", skill.level)
                ></div>
            </div>
        </div>
    }
}

#[component]
fn Strengths() -> impl IntoView {
    view! {
        <div class="mt-16 bg-brightBlack/30 p-8 rounded-lg border border-muted/30">
            <div class="text-center mb-8">
                <h3 class="text-2xl font-bold text-purple">"Professional Strengths"</h3>
                <p class="text-muted">
                    "Beyond technical skills, I bring valuable soft skills and methodologies to every project"
                </p>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-6 text-center">
                {STRENGTHS
                    .iter()
                    .map(|s| {
                        view! {
                            <div>
                                <div class="text-3xl font-bold text-cyan">{s.value} "%"</div>
                                <div class="font-semibold">{s.label}</div>
                                <div class="text-xs text-muted">{s.description}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
