mod about;
mod contact;
mod education;
mod hero;
mod navbar;
mod projects;
mod skills;
mod surface;

use std::sync::{Arc, Mutex};

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_throttle_fn, use_window};

use crate::profile::FAVICON;
use crate::scroll::{
    Navigation, NavigationError, ScrollConfig, ScrollCoordinator, ScrollState,
};
use crate::sections::SectionRegistry;

use about::About;
use contact::Contact;
use education::Education;
use hero::Hero;
use navbar::{NavBar, ScrollProgress};
use projects::Projects;
use skills::Skills;
use surface::DomSurface;

/// One recompute per animation frame while a scroll gesture is running.
const SCROLL_THROTTLE_MS: f64 = 16.0;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Thiyagarajan V - {title}") />
        <Meta
            name="description"
            content="AI enthusiast and Python Full Stack Developer building intelligent applications."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

type SharedCoordinator = Arc<Mutex<ScrollCoordinator<DomSurface>>>;

/// Handle to the page's scroll coordinator, shared through context.
#[derive(Clone, Copy)]
pub struct ScrollContext {
    coordinator: StoredValue<SharedCoordinator>,
    registry: SectionRegistry,
    pub state: ReadSignal<ScrollState>,
}

impl ScrollContext {
    pub fn registry(&self) -> SectionRegistry {
        self.registry
    }

    pub fn navigate(&self, section_id: &str) -> Result<Navigation, NavigationError> {
        self.coordinator.with_value(|c| {
            c.lock()
                .expect("should be able to lock scroll coordinator")
                .navigate_to(section_id)
        })
    }
}

/// Mounts the scroll coordinator for the lifetime of the page.
fn provide_scroll_context() -> ScrollContext {
    let registry = SectionRegistry::portfolio();
    let mut coordinator = ScrollCoordinator::new(registry, DomSurface, ScrollConfig::default());
    let (state, set_state) = signal(coordinator.state());
    coordinator.subscribe(move |next| set_state.set(*next));
    let coordinator = StoredValue::new(Arc::new(Mutex::new(coordinator)));

    let recompute = move || {
        coordinator.with_value(|c| {
            c.lock()
                .expect("should be able to lock scroll coordinator")
                .on_scroll_or_resize();
        });
    };
    let throttled = use_throttle_fn(recompute, SCROLL_THROTTLE_MS);
    let _ = use_event_listener(use_window(), ev::scroll, {
        let throttled = throttled.clone();
        move |_| {
            throttled();
        }
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        throttled();
    });

    // effects only run in the browser, after the sections are in the DOM
    Effect::new(move |_| recompute());

    on_cleanup(move || {
        coordinator.try_with_value(|c| {
            if let Ok(mut c) = c.lock() {
                c.teardown();
            }
        });
    });

    let ctx = ScrollContext {
        coordinator,
        registry,
        state,
    };
    provide_context(ctx);
    ctx
}

#[component]
fn PortfolioPage() -> impl IntoView {
    provide_scroll_context();

    view! {
        <Title text="AI & Python Developer" />
        <ScrollProgress />
        <div class="min-h-screen">
            <NavBar />
            <main>
                <Hero />
                <About />
                <Education />
                <Projects />
                <Skills />
                <Contact />
            </main>
        </div>
    }
}

/// Shared heading used at the top of every content section.
#[component]
fn SectionHeading(
    lead: &'static str,
    accent: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-5xl font-bold mb-6">
                <span class="text-cyan">{lead}</span>
                " "
                <span class="text-purple">{accent}</span>
            </h2>
            {blurb.map(|b| view! { <p class="text-xl text-muted max-w-3xl mx-auto">{b}</p> })}
            <div class="w-24 h-1 bg-gradient-to-r from-cyan to-purple mx-auto rounded-full mt-6"></div>
        </div>
    }
}
