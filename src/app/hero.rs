use leptos::prelude::*;

use crate::profile::{OWNER_NAME, PROFILE_IMAGE};

use super::ScrollContext;

#[component]
pub fn Hero() -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();
    let go_to = move |id: &'static str| {
        // unknown ids are already logged by the coordinator
        let _ = scroll.navigate(id);
    };

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16">
            <div class="absolute top-20 left-10 w-20 h-20 rounded-full bg-cyan/10 blur-xl animate-pulse"></div>
            <div class="absolute bottom-32 right-16 w-32 h-32 rounded-full bg-purple/10 blur-xl animate-pulse"></div>
            <div class="relative z-10 max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="mb-8 flex justify-center">
                    <div class="relative">
                        <img
                            src=PROFILE_IMAGE
                            alt="Thiyagarajan V - AI & Python Developer"
                            class="w-40 h-40 md:w-48 md:h-48 rounded-full object-cover border-4 border-cyan/30 shadow-2xl"
                        />
                        <span class="absolute -top-2 -right-2 text-2xl animate-bounce">"🧠"</span>
                        <span class="absolute -bottom-2 -left-2 text-2xl animate-bounce">"</>"</span>
                    </div>
                </div>
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6">
                    "Hi, I'm " <span class="text-cyan">{OWNER_NAME}</span>
                </h1>
                <div class="text-xl md:text-2xl text-muted mb-6 max-w-3xl mx-auto">
                    "AI enthusiast and Python Full Stack Developer focused on building intelligent applications"
                </div>
                <p class="text-lg text-muted mb-10 max-w-2xl mx-auto leading-relaxed">
                    "Passionate about solving real-world problems with technology, creating smart, scalable, and impactful applications using AI and modern web technologies."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <button
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-8 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                        on:click=move |_| go_to("projects")
                    >
                        "Explore My Work →"
                    </button>
                    <button
                        class="px-8 py-3 rounded-md font-medium transition-all duration-200 border border-muted/50 hover:border-purple hover:text-purple"
                        on:click=move |_| go_to("contact")
                    >
                        "Get in Touch"
                    </button>
                </div>
                <div class="mt-16 flex justify-center">
                    <div class="w-6 h-10 border-2 border-muted rounded-full flex justify-center">
                        <div class="w-1 h-3 bg-cyan rounded-full mt-2 animate-bounce"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
