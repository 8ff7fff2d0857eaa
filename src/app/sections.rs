use leptos::prelude::*;

use super::{icons::Icon, reveal_class, scroll_on_click};
use crate::{
    config::SITE_OWNER,
    content::{
        slug, Project, Testimonial, HERO_STATS, PROFILE_ROWS, PROJECTS, SERVICES, SKILLS,
        SKILL_HIGHLIGHTS, TESTIMONIALS,
    },
    nav::NavAnchor,
};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden" aria-label="Hero">
            <div class="absolute inset-0 -z-10">
                <div class="absolute inset-0 noise" />
                <div class="hero-glow hero-glow-left" />
                <div class="hero-glow hero-glow-right" />
            </div>

            <div class=reveal_class("container-pro section pb-8 sm:pb-12")>
                <div class="inline-flex items-center gap-2 rounded-full border bg-card/60 px-3 py-1 text-xs text-muted-foreground shadow-sm glass">
                    <span class="inline-flex h-2 w-2 rounded-full bg-accent" />
                    "Available for freelance • Q1 2026"
                </div>

                <div class="mt-6 grid items-start gap-10 lg:grid-cols-[1.35fr_0.65fr]">
                    <div>
                        <h1 class="h1" data-testid="text-hero-title">
                            "I design and build " <span class="text-gradient">"high-end"</span>
                            " digital experiences."
                        </h1>
                        <p
                            class="mt-4 max-w-2xl text-base leading-relaxed text-muted-foreground sm:text-lg"
                            data-testid="text-hero-tagline"
                        >
                            {SITE_OWNER}
                            " — Freelance designer & developer helping founders ship premium websites, product UI, and design systems with clarity, craft, and smooth motion."
                        </p>

                        <div class="mt-7 flex flex-col gap-3 sm:flex-row sm:items-center">
                            <button
                                type="button"
                                class="btn-primary"
                                on:click=scroll_on_click(NavAnchor::Projects)
                                data-testid="button-hero-view-work"
                            >
                                "View My Work"
                                <Icon name="arrow-up-right" class="ml-2 h-4 w-4" />
                            </button>
                            <button
                                type="button"
                                class="btn-secondary"
                                on:click=scroll_on_click(NavAnchor::Contact)
                                data-testid="button-hero-contact"
                            >
                                "Contact Me"
                                <Icon name="mail" class="ml-2 h-4 w-4" />
                            </button>
                            <div class="flex items-center gap-2 sm:ml-2">
                                <a href="#" class="icon-button" aria-label="GitHub" data-testid="link-github">
                                    <Icon name="github" class="h-4 w-4" />
                                </a>
                                <a
                                    href="#"
                                    class="icon-button"
                                    aria-label="LinkedIn"
                                    data-testid="link-linkedin"
                                >
                                    <Icon name="linkedin" class="h-4 w-4" />
                                </a>
                            </div>
                        </div>

                        <div class="mt-10 grid gap-3 sm:grid-cols-3" aria-label="Quick stats">
                            {HERO_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div
                                            class="surface rounded-2xl border p-4"
                                            data-testid=format!("card-stat-{}", slug(stat.label))
                                        >
                                            <div class="text-sm text-muted-foreground">{stat.label}</div>
                                            <div class="mt-1 text-2xl font-semibold tracking-tight">
                                                {stat.value}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <ProfileCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    view! {
        <div class="surface overflow-hidden rounded-3xl border p-4 sm:p-5">
            <div class="flex items-center justify-between">
                <div>
                    <div class="kicker">"Profile"</div>
                    <div class="mt-1 text-sm text-muted-foreground" data-testid="text-profile-subtitle">
                        "Clean, confident, and conversion-focused."
                    </div>
                </div>
                <span class="badge" data-testid="badge-availability">
                    "Available"
                </span>
            </div>

            <div class="mt-4 grid gap-4">
                <div
                    class="relative aspect-[4/5] overflow-hidden rounded-2xl border bg-muted"
                    data-testid="img-profile"
                >
                    <div class="absolute inset-0 profile-glow" />
                    <div class="absolute inset-0 grid place-items-center">
                        <div class="rounded-2xl border bg-card/70 px-4 py-3 text-center shadow-sm glass">
                            <div class="text-sm font-semibold">"Profile image"</div>
                            <div class="text-xs text-muted-foreground">"Drop in a headshot later"</div>
                        </div>
                    </div>
                </div>

                <div class="grid gap-2">
                    {PROFILE_ROWS
                        .iter()
                        .map(|row| {
                            view! {
                                <div
                                    class="flex items-center justify-between rounded-xl border bg-card/60 px-3 py-2"
                                    data-testid=format!("row-profile-{}", slug(row.label))
                                >
                                    <span class="text-sm text-muted-foreground">{row.label}</span>
                                    <span class="text-sm font-medium">{row.value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=NavAnchor::About.id() class="section" aria-label="About">
            <div class="container-pro">
                <div class="grid gap-10 lg:grid-cols-[1fr_1fr]">
                    <div class=reveal_class("")>
                        <div class="kicker" data-testid="text-about-kicker">"About"</div>
                        <h2 class="mt-3 h2" data-testid="text-about-title">
                            "A calm aesthetic with crisp execution."
                        </h2>
                        <p
                            class="mt-4 max-w-xl text-base leading-relaxed text-muted-foreground"
                            data-testid="text-about-body"
                        >
                            "I help freelancers, startups, and teams translate ideas into interfaces that feel premium: clean typography, intentional spacing, and motion that supports the story. I work end-to-end—from positioning and layout to responsive build and polish."
                        </p>

                        <div class="mt-6 grid gap-3 sm:grid-cols-2" aria-label="Skills overview">
                            {SKILL_HIGHLIGHTS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div
                                            class="surface rounded-2xl border p-4"
                                            data-testid=format!("card-skill-{}", slug(skill))
                                        >
                                            <div class="flex items-start gap-3">
                                                <span class="mt-0.5 inline-flex h-9 w-9 items-center justify-center rounded-xl bg-foreground text-background shadow-sm">
                                                    <Icon name="check" class="h-4 w-4" />
                                                </span>
                                                <div>
                                                    <div class="font-semibold">{*skill}</div>
                                                    <div class="mt-1 text-sm text-muted-foreground">
                                                        "Crafted for clarity, accessibility, and conversion."
                                                    </div>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class=reveal_class("")>
                        <div class="surface rounded-3xl border p-6 sm:p-7">
                            <div class="flex items-center justify-between">
                                <div>
                                    <div class="kicker" data-testid="text-skills-kicker">"Skills"</div>
                                    <div
                                        class="mt-1 text-sm text-muted-foreground"
                                        data-testid="text-skills-subtitle"
                                    >
                                        "A modern frontend toolkit."
                                    </div>
                                </div>
                                <span class="badge-secondary" data-testid="badge-skillset">
                                    "2026-ready"
                                </span>
                            </div>

                            <hr class="my-5 border-border" />

                            <div class="grid gap-3 sm:grid-cols-2" aria-label="Skills list">
                                {SKILLS
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div
                                                class="rounded-2xl border bg-card/60 p-3"
                                                data-testid=format!("row-skill-{}", slug(skill.label))
                                            >
                                                <div class="text-sm font-semibold">{skill.label}</div>
                                                <div class="text-xs text-muted-foreground">{skill.value}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=NavAnchor::Projects.id() class="section" aria-label="Projects">
            <div class="container-pro">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <div>
                        <div class="kicker" data-testid="text-projects-kicker">"Portfolio"</div>
                        <h2 class="mt-3 h2" data-testid="text-projects-title">
                            "Selected projects & case studies."
                        </h2>
                        <p class="mt-3 max-w-2xl text-muted-foreground" data-testid="text-projects-subtitle">
                            "A curated grid of work with a focus on craft, clarity, and modern UI execution."
                        </p>
                    </div>
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=scroll_on_click(NavAnchor::Contact)
                        data-testid="button-projects-contact"
                    >
                        "Start a project"
                        <Icon name="arrow-up-right" class="ml-2 h-4 w-4" />
                    </button>
                </div>

                <div class="mt-8 grid gap-4 sm:grid-cols-2 lg:grid-cols-3" data-testid="grid-projects">
                    {PROJECTS.iter().map(|p| view! { <ProjectCard project=*p /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let id = project.id;
    view! {
        <article
            class=reveal_class("group surface relative overflow-hidden rounded-3xl border p-6")
            data-testid=format!("card-project-{id}")
        >
            <div class="absolute inset-0 opacity-0 transition-opacity duration-300 group-hover:opacity-100">
                <div class="absolute inset-0 project-glow" />
            </div>

            <div class="relative">
                <div class="flex items-start justify-between gap-3">
                    <div>
                        <div class="h3" data-testid=format!("text-project-title-{id}")>
                            {project.title}
                        </div>
                        <p
                            class="mt-2 text-sm leading-relaxed text-muted-foreground"
                            data-testid=format!("text-project-desc-{id}")
                        >
                            {project.description}
                        </p>
                    </div>
                    <span class="inline-flex h-10 w-10 items-center justify-center rounded-2xl border bg-card/70 shadow-sm glass">
                        <Icon name="arrow-up-right" class="h-4 w-4" />
                    </span>
                </div>

                <div class="mt-4 flex flex-wrap gap-2" data-testid=format!("list-project-tech-{id}")>
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="badge-secondary">{*tech}</span> })
                        .collect_view()}
                </div>

                <div class="mt-5 flex flex-wrap gap-2">
                    {project
                        .demo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    class="link-chip"
                                    data-testid=format!("link-project-demo-{id}")
                                >
                                    "Live demo"
                                    <Icon name="external-link" class="h-4 w-4" />
                                </a>
                            }
                        })}
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    class="link-chip"
                                    data-testid=format!("link-project-github-{id}")
                                >
                                    "GitHub"
                                    <Icon name="github" class="h-4 w-4" />
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=NavAnchor::Services.id() class="section" aria-label="Services">
            <div class="container-pro">
                <div class="kicker" data-testid="text-services-kicker">"Services"</div>
                <h2 class="mt-3 h2" data-testid="text-services-title">"What I can help you ship."</h2>
                <p class="mt-3 max-w-2xl text-muted-foreground" data-testid="text-services-subtitle">
                    "A small, high-impact menu of services designed for founders and teams that value craft."
                </p>

                <div class="mt-8 grid gap-4 md:grid-cols-3" data-testid="grid-services">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(idx, service)| {
                            view! {
                                <div
                                    class=reveal_class("surface rounded-3xl border p-6")
                                    data-testid=format!("card-service-{idx}")
                                >
                                    <div class="kicker">"Service"</div>
                                    <div
                                        class="mt-2 text-xl font-semibold tracking-tight"
                                        data-testid=format!("text-service-title-{idx}")
                                    >
                                        {service.title}
                                    </div>
                                    <p
                                        class="mt-2 text-sm leading-relaxed text-muted-foreground"
                                        data-testid=format!("text-service-desc-{idx}")
                                    >
                                        {service.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id=NavAnchor::Testimonials.id() class="section" aria-label="Testimonials">
            <div class="container-pro">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <div>
                        <div class="kicker" data-testid="text-testimonials-kicker">"Testimonials"</div>
                        <h2 class="mt-3 h2" data-testid="text-testimonials-title">
                            "Trusted by thoughtful teams."
                        </h2>
                        <p
                            class="mt-3 max-w-2xl text-muted-foreground"
                            data-testid="text-testimonials-subtitle"
                        >
                            "Clean, readable cards with a calm premium feel."
                        </p>
                    </div>
                    <div
                        class="rounded-2xl border bg-card/70 px-4 py-3 text-sm text-muted-foreground shadow-sm glass"
                        data-testid="card-testimonials-note"
                    >
                        "Tip: Swap in real client quotes."
                    </div>
                </div>

                <div class="mt-8 grid gap-4 md:grid-cols-3" data-testid="grid-testimonials">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! { <TestimonialCard testimonial=*t /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let id = testimonial.id;
    view! {
        <figure
            class=reveal_class("surface rounded-3xl border p-6")
            data-testid=format!("card-testimonial-{id}")
        >
            <blockquote
                class="text-sm leading-relaxed text-foreground/90"
                data-testid=format!("text-testimonial-quote-{id}")
            >
                {format!("“{}”", testimonial.quote)}
            </blockquote>
            <figcaption class="mt-4">
                <div class="text-sm font-semibold" data-testid=format!("text-testimonial-name-{id}")>
                    {testimonial.name}
                </div>
                <div
                    class="text-xs text-muted-foreground"
                    data-testid=format!("text-testimonial-role-{id}")
                >
                    {testimonial.role}
                </div>
            </figcaption>
        </figure>
    }
}
