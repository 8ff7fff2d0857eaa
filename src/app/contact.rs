use leptos::{ev::SubmitEvent, prelude::*};

use super::{browser::BrowserTimer, icons::Icon};
use crate::{
    config::CONTACT_RESET_DELAY,
    contact::{ContactForm, SubmissionStatus},
    content::SOCIAL_LINKS,
    glyphs::social_icon,
    nav::NavAnchor,
};

const SENT_NOTICE: &str = "Message sent (demo). I’ll get back to you soon.";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=NavAnchor::Contact.id() class="section" aria-label="Contact">
            <div class="container-pro">
                <div class="grid gap-10 lg:grid-cols-[1fr_1fr]">
                    <div>
                        <div class="kicker" data-testid="text-contact-kicker">"Contact"</div>
                        <h2 class="mt-3 h2" data-testid="text-contact-title">
                            "Let’s build something clean and memorable."
                        </h2>
                        <p class="mt-3 max-w-xl text-muted-foreground" data-testid="text-contact-subtitle">
                            "Send a message and I’ll reply within 24–48 hours. (This is a prototype form—no backend.)"
                        </p>

                        <div class="mt-6 grid gap-3" aria-label="Social links">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            class="surface flex items-center justify-between rounded-2xl border p-4 transition hover:shadow-md ring-focus"
                                            data-testid=format!("link-contact-{}", social_icon(link.icon))
                                        >
                                            <span class="flex items-center gap-3">
                                                <span class="inline-flex h-10 w-10 items-center justify-center rounded-2xl bg-foreground text-background shadow-sm">
                                                    <Icon name=social_icon(link.icon) class="h-4 w-4" />
                                                </span>
                                                <span>
                                                    <span class="block text-sm font-semibold">{link.label}</span>
                                                    <span class="block text-xs text-muted-foreground">
                                                        {link.handle}
                                                    </span>
                                                </span>
                                            </span>
                                            <Icon name="arrow-up-right" class="h-4 w-4" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <ContactCard />
                </div>
            </div>
        </section>
    }
}

/// The demo form. Nothing leaves the page; submitting only shows a notice
/// that clears itself after [`CONTACT_RESET_DELAY`].
#[component]
fn ContactCard() -> impl IntoView {
    let (status, set_status) = signal(SubmissionStatus::Idle);
    let form = StoredValue::new_local(ContactForm::new(
        BrowserTimer,
        CONTACT_RESET_DELAY,
        move |s| set_status.set(s),
    ));

    on_cleanup(move || {
        form.try_with_value(|f| f.teardown());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.with_value(|f| f.submit());
    };

    view! {
        <div class="surface rounded-3xl border p-6 sm:p-7" data-testid="card-contact-form">
            <form class="grid gap-4" on:submit=on_submit data-testid="form-contact">
                <div class="grid gap-2">
                    <label class="text-sm font-semibold" for="name" data-testid="label-name">
                        "Name"
                    </label>
                    <input
                        id="name"
                        name="name"
                        class="input"
                        placeholder="Your name"
                        required=true
                        data-testid="input-name"
                    />
                </div>

                <div class="grid gap-2">
                    <label class="text-sm font-semibold" for="email" data-testid="label-email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        class="input"
                        placeholder="you@company.com"
                        required=true
                        data-testid="input-email"
                    />
                </div>

                <div class="grid gap-2">
                    <label class="text-sm font-semibold" for="message" data-testid="label-message">
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        class="input min-h-32"
                        placeholder="Tell me about your project…"
                        required=true
                        data-testid="input-message"
                    ></textarea>
                </div>

                <button type="submit" class="btn-primary rounded-2xl" data-testid="button-submit-contact">
                    "Send message"
                    <Icon name="arrow-up-right" class="ml-2 h-4 w-4" />
                </button>

                <div
                    class="min-h-5 text-sm text-muted-foreground"
                    aria-live="polite"
                    data-testid="status-contact"
                >
                    {move || (status.get() == SubmissionStatus::Sent).then_some(SENT_NOTICE)}
                </div>
            </form>
        </div>
    }
}
