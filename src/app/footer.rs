use leptos::prelude::*;

use super::{icons::Icon, scroll_on_click};
use crate::{
    config::{BUILD_YEAR, SITE_OWNER},
    content::NAV_LINKS,
    nav::NavAnchor,
};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t">
            <div class="container-pro py-10">
                <div class="grid gap-8 md:grid-cols-3">
                    <div>
                        <div class="text-sm font-semibold" data-testid="text-footer-brand">{SITE_OWNER}</div>
                        <p class="mt-2 max-w-xs text-sm text-muted-foreground" data-testid="text-footer-desc">
                            "Minimal, elegant, modern UI with a premium feel—crafted for speed and clarity."
                        </p>
                    </div>

                    <div>
                        <div class="text-sm font-semibold" data-testid="text-footer-links-title">
                            "Quick links"
                        </div>
                        <div class="mt-3 grid gap-2 text-sm">
                            {NAV_LINKS
                                .into_iter()
                                .map(|anchor| {
                                    view! {
                                        <button
                                            type="button"
                                            on:click=scroll_on_click(anchor)
                                            class="w-fit text-left text-muted-foreground transition-colors hover:text-foreground ring-focus"
                                            data-testid=format!("button-footer-{}", anchor.id())
                                        >
                                            {anchor.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="md:justify-self-end">
                        <div class="text-sm font-semibold" data-testid="text-footer-cta-title">"Let’s talk"</div>
                        <p class="mt-2 text-sm text-muted-foreground" data-testid="text-footer-cta-desc">
                            "Have a project in mind? I’m available for a limited number of clients."
                        </p>
                        <button
                            type="button"
                            class="btn-primary mt-4"
                            on:click=scroll_on_click(NavAnchor::Contact)
                            data-testid="button-footer-contact"
                        >
                            "Contact me"
                            <Icon name="arrow-up-right" class="ml-2 h-4 w-4" />
                        </button>
                    </div>
                </div>

                <hr class="my-8 border-border" />

                <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                    <div class="text-xs text-muted-foreground" data-testid="text-footer-copyright">
                        {format!("© {BUILD_YEAR} {SITE_OWNER}. All rights reserved.")}
                    </div>
                    <div class="flex items-center gap-2">
                        <a href="#" class="link-chip text-xs" data-testid="link-footer-github">
                            <Icon name="github" class="h-4 w-4" />
                            "GitHub"
                        </a>
                        <a href="#" class="link-chip text-xs" data-testid="link-footer-linkedin">
                            <Icon name="linkedin" class="h-4 w-4" />
                            "LinkedIn"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
