use leptos::prelude::*;

use super::{browser::BrowserTheme, icons::Icon, scroll_on_click};
use crate::{
    config::SITE_OWNER,
    content::NAV_LINKS,
    nav::NavAnchor,
    theme::{ThemeController, ThemePreference},
};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 border-b bg-background/70 backdrop-blur supports-[backdrop-filter]:bg-background/60">
            <div class="container-pro flex h-16 items-center justify-between gap-3">
                <button
                    type="button"
                    on:click=scroll_on_click(NavAnchor::Top)
                    class="group inline-flex items-center gap-2 rounded-xl px-2 py-1 ring-focus"
                    data-testid="button-logo"
                >
                    <span class="inline-flex h-9 w-9 items-center justify-center rounded-xl bg-foreground text-background shadow-sm">
                        <Icon name="sparkles" class="h-5 w-5" />
                    </span>
                    <span class="hidden sm:block">
                        <span class="block text-sm font-semibold leading-4">{SITE_OWNER}</span>
                        <span class="block text-xs text-muted-foreground">
                            "Freelance Designer & Developer"
                        </span>
                    </span>
                </button>

                <nav class="hidden items-center gap-1 md:flex" aria-label="Primary">
                    {NAV_LINKS
                        .into_iter()
                        .map(|anchor| {
                            view! {
                                <button
                                    type="button"
                                    on:click=scroll_on_click(anchor)
                                    class="rounded-xl px-3 py-2 text-sm text-muted-foreground transition-colors hover:text-foreground ring-focus"
                                    data-testid=format!("button-nav-{}", anchor.id())
                                >
                                    {anchor.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-2">
                    <button
                        type="button"
                        on:click=scroll_on_click(NavAnchor::Projects)
                        class="btn-secondary hidden sm:inline-flex"
                        data-testid="button-view-work"
                    >
                        "View My Work"
                        <Icon name="arrow-up-right" class="ml-2 h-4 w-4" />
                    </button>
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let controller = StoredValue::new(ThemeController::new(BrowserTheme));
    let (mode, set_mode) = signal(ThemePreference::default());

    // storage and matchMedia only exist in the browser, so resolve after hydration
    Effect::new(move |_| {
        if let Some(pref) = controller.try_update_value(|c| c.mount()) {
            set_mode.set(pref);
        }
    });

    let toggle = move |_| {
        if let Some(pref) = controller.try_update_value(|c| c.toggle()) {
            set_mode.set(pref);
        }
    };

    view! {
        <button
            type="button"
            on:click=toggle
            class="inline-flex h-10 w-10 items-center justify-center rounded-xl border bg-card/70 text-foreground shadow-sm transition hover:shadow-md ring-focus"
            aria-label=move || {
                if mode.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            data-testid="button-theme-toggle"
        >
            {move || {
                if mode.get().is_dark() {
                    view! { <Icon name="sun" class="h-4 w-4" /> }.into_any()
                } else {
                    view! { <Icon name="moon" class="h-4 w-4" /> }.into_any()
                }
            }}
        </button>
    }
}
