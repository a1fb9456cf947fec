//! Landing page
//!
//! Hosts the navbar and the anchor targets its section links point at.

use leptos::prelude::*;

use crate::app::components::Navbar;

#[component]
fn Section(
    /// Anchor id targeted by the navbar links
    id: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <section id=id class="landing-section">
            <div class="container">
                <h2 class="section-title">{title}</h2>
                <p class="section-description">{description}</p>
            </div>
        </section>
    }
}

/// Homepage component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page-layout">
            <Navbar/>

            <main class="main-content">
                <section class="hero">
                    <div class="container hero-content">
                        <h1 class="hero-title">
                            "Freelancing, "<span class="highlight">"decentralized"</span>
                        </h1>
                        <p class="hero-description">
                            "Find work, hire talent and get paid on-chain."
                        </p>
                    </div>
                </section>

                <Section
                    id="features"
                    title="Features"
                    description="Escrowed payments, portable reputation and transparent fees."
                />
                <Section
                    id="how-it-works"
                    title="How It Works"
                    description="Post a job, agree on milestones, release funds when work is delivered."
                />
                <Section
                    id="categories"
                    title="Categories"
                    description="Development, design, writing, marketing and more."
                />
            </main>
        </div>
    }
}
