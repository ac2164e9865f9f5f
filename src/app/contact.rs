use std::time::Duration;

use futures::channel::oneshot;
use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{
    ContactField, ContactForm, ContactMessage, Notice, NoticeTone, SinkError, SubmissionPhase,
    SubmissionSink, SubmitError, SIMULATED_SUBMIT_DELAY,
};
use crate::profile::{
    ContactChannel, BUILD_DATE, CONTACT_CHANNELS, LOCATION, OWNER_NAME, QUICK_ACTIONS,
};

use super::SectionHeading;

/// Resolves after a fixed delay without sending anything anywhere.
#[derive(Debug, Clone, Copy)]
struct SimulatedSink {
    delay: Duration,
}

impl Default for SimulatedSink {
    fn default() -> Self {
        Self {
            delay: SIMULATED_SUBMIT_DELAY,
        }
    }
}

impl SubmissionSink for SimulatedSink {
    async fn submit(&self, message: ContactMessage) -> Result<(), SinkError> {
        let (tx, rx) = oneshot::channel();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            self.delay,
        );
        rx.await.map_err(|_| SinkError::Interrupted)?;
        log::info!(
            "simulated contact submission: {}",
            serde_json::to_string(&message).unwrap_or_default()
        );
        Ok(())
    }
}

#[component]
pub fn ChannelLink(channel: ContactChannel) -> impl IntoView {
    let target = channel.opens_new_tab().then_some("_blank");
    view! {
        <a
            href=channel.href
            target=target
            rel="noopener noreferrer"
            class="flex items-center p-3 rounded-md hover:bg-muted/20 transition-colors"
        >
            <span class="w-10 h-10 rounded-lg bg-cyan/20 text-cyan flex items-center justify-center mr-4 font-bold">
                {channel.icon}
            </span>
            <span class="text-left">
                <span class="block font-semibold">{channel.label}</span>
                <span class="block text-sm text-muted">{channel.value}</span>
            </span>
        </a>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 relative overflow-hidden">
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Get In"
                    accent="Touch"
                    blurb="I'm open to exciting projects and opportunities where I can contribute and learn. Let's connect and build something amazing together!"
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                            <h3 class="text-2xl font-bold text-cyan mb-2">"✨ Let's Connect"</h3>
                            <p class="text-muted mb-4">
                                "Feel free to reach out through any of these channels. I'm always excited to discuss new opportunities and innovative projects."
                            </p>
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| view! { <ChannelLink channel=*channel /> })
                                .collect_view()}
                        </div>
                        <QuickActions />
                        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30 flex items-center gap-4">
                            <span class="text-2xl">"📍"</span>
                            <div>
                                <h4 class="font-semibold">"Based in " {LOCATION}</h4>
                                <p class="text-sm text-muted">
                                    "Available for remote work and local opportunities"
                                </p>
                            </div>
                        </div>
                    </div>
                    <MessageForm />
                </div>
                <footer class="text-center mt-16 pt-8 border-t border-muted/50 text-muted">
                    <p>
                        "© " {OWNER_NAME} ". Built with Rust, Leptos & WebAssembly ✨"
                    </p>
                    <p class="text-xs mt-2">
                        "Last built " {BUILD_DATE}
                    </p>
                </footer>
            </div>
        </section>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
            <h3 class="text-xl font-bold text-purple mb-4">"Quick Actions"</h3>
            <div class="space-y-4">
                {QUICK_ACTIONS
                    .iter()
                    .map(|action| {
                        view! {
                            <div class="flex items-start space-x-4 p-4 rounded-lg hover:bg-muted/20 transition-colors">
                                <div class="flex-1">
                                    <h4 class="font-semibold text-sm">{action.title}</h4>
                                    <p class="text-xs text-muted mb-2">{action.description}</p>
                                    <a
                                        href="#contact-form"
                                        class="text-xs px-3 py-1 rounded-md border border-muted/50 hover:text-cyan"
                                    >
                                        {action.action}
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let phase = RwSignal::new(SubmissionPhase::Idle);
    let notice = RwSignal::new(None::<Notice>);
    let sink = SimulatedSink::default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut next = phase.get_untracked();
        let message = match form.with_untracked(|f| next.begin(f)) {
            Ok(message) => message,
            Err(SubmitError::Invalid(err)) => {
                log::debug!("contact form rejected: {err}");
                notice.set(Some(Notice::from(&err)));
                return;
            }
            Err(SubmitError::InFlight) => return,
        };

        phase.set(next);
        notice.set(None);
        spawn_local(async move {
            let outcome = sink.submit(message).await;
            let mut next = phase.get_untracked();
            let mut fields = form.get_untracked();
            let done = next.finish(&mut fields, outcome);
            form.set(fields);
            phase.set(next);
            notice.set(Some(done));
        });
    };

    let value_of = move |field: ContactField| move || form.with(|f| f.get(field).to_string());
    let input_class = "w-full px-4 py-2 rounded-md border border-muted bg-background focus:outline-none focus:ring-2 focus:ring-cyan transition-all duration-300";

    view! {
        <div
            id="contact-form"
            class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30"
        >
            <h3 class="text-2xl font-bold text-purple mb-2">"➤ Send a Message"</h3>
            <p class="text-muted mb-6">
                "Have a project in mind? Let's discuss how we can work together."
            </p>
            <form class="space-y-6" on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label for="contact_name" class="text-sm font-medium mb-2 block">
                            "Name *"
                        </label>
                        <input
                            id="contact_name"
                            name="name"
                            placeholder="Your full name"
                            required
                            class=input_class
                            prop:value=value_of(ContactField::Name)
                            on:input=move |ev| form.update(|f| f.set(ContactField::Name, event_target_value(&ev)))
                        />
                    </div>
                    <div>
                        <label for="contact_email" class="text-sm font-medium mb-2 block">
                            "Email *"
                        </label>
                        <input
                            id="contact_email"
                            name="email"
                            type="email"
                            placeholder="your.email@example.com"
                            required
                            class=input_class
                            prop:value=value_of(ContactField::Email)
                            on:input=move |ev| form.update(|f| f.set(ContactField::Email, event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div>
                    <label for="contact_subject" class="text-sm font-medium mb-2 block">
                        "Subject"
                    </label>
                    <input
                        id="contact_subject"
                        name="subject"
                        placeholder="What's this about?"
                        class=input_class
                        prop:value=value_of(ContactField::Subject)
                        on:input=move |ev| form.update(|f| f.set(ContactField::Subject, event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="contact_message" class="text-sm font-medium mb-2 block">
                        "Message *"
                    </label>
                    <textarea
                        id="contact_message"
                        name="message"
                        placeholder="Tell me about your project or opportunity..."
                        rows="6"
                        required
                        class=format!("{input_class} resize-none")
                        prop:value=value_of(ContactField::Message)
                        on:input=move |ev| form.update(|f| f.set(ContactField::Message, event_target_value(&ev)))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=move || phase.get().is_sending()
                    class="w-full bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || {
                        if phase.get().is_sending() {
                            Either::Left(
                                view! {
                                    <span class="inline-block w-4 h-4 mr-2 border-2 border-white/20 border-t-white rounded-full animate-spin"></span>
                                    "Sending..."
                                },
                            )
                        } else {
                            Either::Right("➤ Send Message")
                        }
                    }}
                </button>
                <NoticeBanner notice />
            </form>
        </div>
    }
}

#[component]
fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice
            .get()
            .map(|n| {
                let class = match n.tone {
                    NoticeTone::Success => "p-4 rounded-md border-l-4 border-green bg-green/10",
                    NoticeTone::Destructive => "p-4 rounded-md border-l-4 border-red bg-red/10",
                };
                view! {
                    <div role="status" class=class>
                        <p class="font-semibold">{n.title}</p>
                        <p class="text-sm">{n.description}</p>
                    </div>
                }
            })
    }
}
