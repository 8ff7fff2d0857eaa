mod browser;
mod contact;
mod footer;
mod header;
mod homepage;
mod icons;
mod sections;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_media_query;

use crate::{
    config::{asset_path, BASE_PATH, REDUCED_MOTION_MEDIA_QUERY, SITE_OWNER},
    nav::{NavAnchor, ScrollNavigator},
};
use browser::BrowserScroll;
use homepage::PortfolioHome;
use icons::Icon;

pub type PageNavigator = ScrollNavigator<BrowserScroll>;

/// Whether the visitor asked the OS for reduced motion.
#[derive(Debug, Clone, Copy)]
pub struct ReducedMotion(pub Signal<bool>);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = asset_path(&format!("{}/{}.css", options.site_pkg_dir, options.output_name));
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options root=BASE_PATH />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href=asset_path("favicon.svg") />
                <link rel="stylesheet" id="leptos" href=stylesheet />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let reduce_motion = use_media_query(REDUCED_MOTION_MEDIA_QUERY);
    provide_context(ReducedMotion(reduce_motion));
    provide_context::<PageNavigator>(ScrollNavigator::new(BrowserScroll::new(reduce_motion)));

    view! {
        <Title formatter=|title| format!("{SITE_OWNER} - {title}") />

        <Router base=BASE_PATH>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioHome />
            </Routes>
        </Router>
    }
}

/// Click handler that scrolls to `anchor` through the navigator in context.
pub(crate) fn scroll_on_click(anchor: NavAnchor) -> impl Fn(ev::MouseEvent) + Clone + 'static {
    let nav = use_context::<PageNavigator>();
    move |_| {
        if let Some(nav) = nav {
            nav.scroll_to(anchor);
        }
    }
}

/// Reveal-on-load classes, dropped entirely under reduced motion.
pub(crate) fn reveal_class(base: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let reduce_motion = use_context::<ReducedMotion>().map(|r| r.0);
    move || {
        let reduced = reduce_motion.map(|s| s.get()).unwrap_or(true);
        if reduced {
            base.to_string()
        } else {
            format!("{base} animate-fade-up")
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <div class="min-h-screen w-full grid place-items-center bg-background p-6">
            <div class="surface w-full max-w-md rounded-3xl border p-6" data-testid="card-404">
                <div class="flex items-start gap-3">
                    <span class="inline-flex h-10 w-10 items-center justify-center rounded-2xl bg-foreground text-background shadow-sm">
                        <Icon name="alert-circle" />
                    </span>
                    <div>
                        <h1 class="text-xl font-semibold tracking-tight" data-testid="text-404-title">
                            "Page not found"
                        </h1>
                        <p class="mt-1 text-sm text-muted-foreground" data-testid="text-404-body">
                            "This route isn’t set up yet. Head back to the portfolio home page."
                        </p>
                    </div>
                </div>
                <a
                    href=format!("{BASE_PATH}/")
                    class="mt-6 inline-flex w-full items-center justify-center rounded-2xl bg-primary px-4 py-2.5 text-sm font-semibold text-primary-foreground shadow-sm transition hover:shadow-md ring-focus"
                    data-testid="link-404-home"
                >
                    "Go home"
                </a>
            </div>
        </div>
    }
}
