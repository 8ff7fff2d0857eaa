use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::Contact,
    footer::Footer,
    header::Header,
    sections::{About, Hero, Projects, Services, Testimonials},
};
use crate::nav::NavAnchor;

#[component]
pub fn PortfolioHome() -> impl IntoView {
    view! {
        <Title text="Freelance Designer & Developer" />
        <div class="min-h-screen bg-background text-foreground">
            <a
                href="#main"
                class="sr-only focus:not-sr-only focus:fixed focus:left-4 focus:top-4 focus:z-50 focus:rounded-lg focus:bg-card focus:px-3 focus:py-2 focus:text-sm focus:shadow"
                data-testid="link-skip"
            >
                "Skip to content"
            </a>

            <Header />

            <main id="main" class="relative" data-testid="page-portfolio">
                <div id=NavAnchor::Top.id() />
                <Hero />
                <About />
                <Projects />
                <Services />
                <Testimonials />
                <Contact />
                <Footer />
            </main>
        </div>
    }
}
