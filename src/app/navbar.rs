use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::profile::OWNER_NAME;
use crate::scroll::closes_menu;
use crate::sections::Section;

use super::{surface::page_progress, ScrollContext};

fn section_icon(id: &str) -> &'static str {
    match id {
        "home" => "⌂",
        "about" => "☺",
        "education" => "🎓",
        "projects" => "📁",
        "skills" => "⚙",
        "contact" => "✉",
        _ => "•",
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();
    let (is_mobile_menu_open, set_mobile_menu_open) = signal(false);

    let go_to = move |section: &'static Section| {
        if closes_menu(&scroll.navigate(section.id)) {
            set_mobile_menu_open(false);
        }
    };
    let is_active = move |section: &'static Section| {
        scroll.state.with(|s| s.active_section_id == section.id)
    };

    let desktop_items = scroll
        .registry()
        .list()
        .iter()
        .map(|section| {
            view! {
                <button
                    on:click=move |_| go_to(section)
                    class=move || {
                        if is_active(section) {
                            "relative px-4 py-2 rounded-lg text-sm font-medium text-cyan bg-cyan/10 transition-all duration-300"
                        } else {
                            "relative px-4 py-2 rounded-lg text-sm font-medium hover:text-cyan transition-all duration-300"
                        }
                    }
                >
                    <span class="inline mr-2">{section_icon(section.id)}</span>
                    {section.label}
                </button>
            }
        })
        .collect_view();

    let mobile_items = move || {
        scroll
            .registry()
            .list()
            .iter()
            .map(|section| {
                view! {
                    <button
                        on:click=move |_| go_to(section)
                        class=move || {
                            if is_active(section) {
                                "flex items-center w-full px-3 py-2 rounded-md text-base font-medium text-cyan bg-cyan/10"
                            } else {
                                "flex items-center w-full px-3 py-2 rounded-md text-base font-medium hover:text-cyan"
                            }
                        }
                    >
                        <span class="w-5 mr-3">{section_icon(section.id)}</span>
                        {section.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if scroll.state.with(|s| s.is_scrolled) {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-background/80 backdrop-blur-xl border-b border-muted/50"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="text-xl font-bold text-cyan">{OWNER_NAME}</div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-1">{desktop_items}</div>
                    </div>
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md"
                            aria-label="Toggle navigation menu"
                            on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                        >
                            {move || if is_mobile_menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                {move || {
                    if is_mobile_menu_open() {
                        Either::Left(
                            view! {
                                <div class="md:hidden overflow-hidden">
                                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 bg-background/90 mt-2 rounded-lg">
                                        {mobile_items()}
                                    </div>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(())
                    }
                }}
            </div>
        </nav>
    }
}

/// Thin bar along the top edge tracking how far down the page the reader is.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        set_progress.set(page_progress());
    });
    // scroll height and viewport both change on resize
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        set_progress.set(page_progress());
    });

    view! {
        <div
            class="fixed top-0 left-0 h-1 z-[60] bg-gradient-to-r from-cyan to-purple"
            style:width=move || format!("{:.2}%", progress.get() * 100.0)
        ></div>
    }
}
