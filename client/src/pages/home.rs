//! Public landing page with service and achievement cards.

use leptos::prelude::*;

/// One landing-page card and the text shown in its detail modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseCard {
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[ShowcaseCard] = &[
    ShowcaseCard {
        title: "Banking and Financial Services",
        summary: "Secure, scalable platforms for regulated finance.",
        description: "Core banking modernization, fraud detection, AML and KYC compliance tooling, \
                      payment integrations, and risk analytics for financial institutions.",
    },
    ShowcaseCard {
        title: "Healthcare",
        summary: "Digital care delivery and clinical workflows.",
        description: "EHR and EMR development, telehealth platforms, patient portals, and \
                      interoperability work that keeps patient data flowing between systems.",
    },
    ShowcaseCard {
        title: "Retail and Consumer Goods",
        summary: "Omnichannel commerce and supply chain.",
        description: "E-commerce platforms, personalization engines, real-time supply chain \
                      tracking, and demand forecasting for retailers.",
    },
    ShowcaseCard {
        title: "Manufacturing",
        summary: "Industry 4.0 for the factory floor.",
        description: "IoT integration, predictive maintenance, smart factory automation, and \
                      ERP rollouts that shorten time to market.",
    },
];

pub const ACHIEVEMENTS: &[ShowcaseCard] = &[
    ShowcaseCard {
        title: "Successful Client Engagements",
        summary: "Delivered on time and on budget.",
        description: "A long record of projects shipped on schedule, followed by support that \
                      keeps clients with us for years.",
    },
    ShowcaseCard {
        title: "Industry Recognition",
        summary: "Recognized by analysts and award programs.",
        description: "Our consulting and digital transformation work is regularly recognized by \
                      industry analysts.",
    },
    ShowcaseCard {
        title: "Talent Development",
        summary: "Continuous learning for every employee.",
        description: "Certification programs, mentorship, and internal training keep our teams \
                      current with new technology.",
    },
    ShowcaseCard {
        title: "Global Expansion",
        summary: "Serving clients on every continent.",
        description: "New offices in international markets let us offer local expertise with the \
                      same delivery standards everywhere.",
    },
    ShowcaseCard {
        title: "Sustainable Practices",
        summary: "Reducing our footprint.",
        description: "Renewable energy, waste reduction, and supply chain policies that lower our \
                      environmental impact.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let selected = RwSignal::new(None::<ShowcaseCard>);

    let cards = move |items: &'static [ShowcaseCard]| {
        items
            .iter()
            .map(|card| {
                let card = *card;
                view! {
                    <button class="showcase-card" on:click=move |_| selected.set(Some(card))>
                        <h3>{card.title}</h3>
                        <p>{card.summary}</p>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Welcome to the Company Portal"</h1>
                <p>"Jobs, questions, project showcases and recognition in one place."</p>
            </section>
            <section class="home-page__section">
                <h2>"Our Services"</h2>
                <div class="home-page__cards">{cards(SERVICES)}</div>
            </section>
            <section class="home-page__section">
                <h2>"Our Achievements"</h2>
                <div class="home-page__cards">{cards(ACHIEVEMENTS)}</div>
            </section>
            <Show when=move || selected.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || selected.get().map(|c| c.title).unwrap_or_default()}</h2>
                        <p>{move || selected.get().map(|c| c.description).unwrap_or_default()}</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| selected.set(None)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
