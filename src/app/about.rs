use leptos::prelude::*;

use crate::profile::{ABOUT_HIGHLIGHTS, CONTACT_CHANNELS, LOCATION, OWNER_NAME, OWNER_ROLE, PROFILE_IMAGE};

use super::{contact::ChannelLink, SectionHeading};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading lead="About" accent="Me" />
                <div class="grid lg:grid-cols-3 gap-12">
                    <div class="lg:col-span-2 space-y-8">
                        <div class="bg-brightBlack/30 p-8 rounded-lg border border-muted/30">
                            <h3 class="text-2xl font-bold mb-6 text-cyan">"My Journey in Technology"</h3>
                            <div class="space-y-4 text-base leading-relaxed">
                                <p>
                                    "I'm a passionate Python developer with expertise in backend systems and full stack applications. My journey began with a curiosity about how technology can solve real-world problems, and has evolved into a deep specialization in AI-driven solutions."
                                </p>
                                <p>
                                    "I have built robust projects using " <strong>"Django"</strong> ", "
                                    <strong>"React"</strong> ", and " <strong>"MySQL"</strong>
                                    ", while continuously expanding my knowledge in "
                                    <strong>"Artificial Intelligence"</strong> ", "
                                    <strong>"Natural Language Processing"</strong>
                                    ", and Large Language Models like ChatGPT and Gemini."
                                </p>
                                <p>
                                    "My passion lies in building smart, scalable, and impactful applications that bridge the gap between complex AI technologies and practical user needs."
                                </p>
                            </div>
                        </div>
                        <div>
                            <h4 class="text-xl font-semibold mb-4">"What I Bring to the Table"</h4>
                            <div class="flex flex-wrap gap-3">
                                {ABOUT_HIGHLIGHTS
                                    .iter()
                                    .map(|h| {
                                        view! {
                                            <span class="px-4 py-2 rounded-full text-sm bg-purple/20 text-purple">
                                                {*h}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="space-y-6">
                        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30 text-center">
                            <img
                                src=PROFILE_IMAGE
                                alt=OWNER_NAME
                                class="w-24 h-24 rounded-full mx-auto mb-4 object-cover"
                            />
                            <h3 class="text-xl font-bold">{OWNER_NAME}</h3>
                            <p class="text-muted">{OWNER_ROLE}</p>
                            <div class="mt-4 space-y-2 text-sm text-muted">
                                <div>"📍 " {LOCATION}</div>
                                <div>"📅 Available for exciting opportunities"</div>
                            </div>
                        </div>
                        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30 space-y-2">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| view! { <ChannelLink channel=*channel /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
