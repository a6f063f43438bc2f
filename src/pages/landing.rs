use crate::components::animated_section::AnimatedSection;
use crate::components::dashboard::dashboard;
use crate::components::floating_element::FloatingElement;
use crate::components::icon::{Icon, IconKind};
use crate::content::{
    section, Card, CTA_BADGES, DASHBOARD_DELAY_MS, FEATURES, FLOATING_ELEMENTS, SERVICES,
    SERVICE_STAGGER_MS, STATS,
};
use crate::hooks::use_landing_state;
use crate::state::LandingState;
use yew::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_landing_state();
    render_landing(&state)
}

/// The whole page for one state snapshot.
pub fn render_landing(state: &LandingState) -> Html {
    html! {
        <div class="landing-page">
            <div class="dynamic-background" style={state.background_style()} />

            { for FLOATING_ELEMENTS.iter().map(|(class, delay)| html! {
                <FloatingElement key={*class} class={*class} delay={*delay} />
            }) }

            { hero(state) }
            { stats(state) }
            { services(state) }
            { features(state) }
            { cta(state) }
            { footer() }
        </div>
    }
}

fn hero(state: &LandingState) -> Html {
    html! {
        <section class="hero-section">
            <div class="hero-background">
                <div class="bg-shape-1" />
                <div class="bg-shape-2" />
            </div>

            <div class="hero-content" style={format!("transform: {};", state.hero_transform())}>
                <div class="logo-container">
                    <h1 class="main-logo">{"Team"}<span class="logo-accent">{"6"}</span></h1>
                    <div class="logo-glow" />
                </div>

                <div class="slogan-container">
                    <p class="slogan">
                        <Icon kind={IconKind::Sparkles} class={classes!("sparkle-icon")} />
                        {"진료 외 시간, 데이터로 수익을 올려보세요."}
                    </p>
                </div>

                <div class="hero-buttons">
                    <button class="primary-button">
                        <div class="button-shine" />
                        <span class="button-content">
                            <Icon kind={IconKind::Zap} class={classes!("button-icon")} />
                            {"Team6과 함께해보세요"}
                            <Icon kind={IconKind::ArrowRight} class={classes!("arrow-icon")} />
                        </span>
                    </button>
                    <button class="secondary-button">
                        <span class="button-content">
                            <Icon kind={IconKind::Globe} class={classes!("button-icon")} />
                            {"데모 보기"}
                        </span>
                    </button>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-icon">
                    <Icon kind={IconKind::ChevronDown} />
                </div>
            </div>
        </section>
    }
}

fn stats(state: &LandingState) -> Html {
    html! {
        <section class="stats-section">
            <div class="container">
                <AnimatedSection id={section::STATS} visible={state.is_visible(section::STATS)}>
                    <div class="stats-grid">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat-card" key={stat.label}>
                                <div class="stat-content">
                                    <Icon kind={stat.icon} class={classes!("stat-icon")} />
                                    <div class="stat-number">{stat.number}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

fn service_card(card: &Card) -> Html {
    html! {
        <div class={classes!("service-card", card.color_class)}>
            <div class="service-glow" />
            <div class="service-content">
                <div class="service-icon-container">
                    <Icon kind={card.icon} class={classes!("service-icon")} />
                </div>
                <h3 class="service-title">{card.title}</h3>
                <p class="service-description">{card.description}</p>
                <div class="service-link">
                    <span>{"자세히 보기"}</span>
                    <Icon kind={IconKind::ArrowRight} class={classes!("service-arrow")} />
                </div>
            </div>
        </div>
    }
}

fn services(state: &LandingState) -> Html {
    html! {
        <section class="services-section">
            <div class="services-background" />
            <div class="container">
                <AnimatedSection
                    id={section::SERVICES_TITLE}
                    visible={state.is_visible(section::SERVICES_TITLE)}
                >
                    <div class="section-header">
                        <h2 class="section-title">
                            <span class="title-gradient">{"혁신적인"}</span>{" 솔루션"}
                        </h2>
                        <p class="section-subtitle">
                            {"의료 데이터의 무한한 가능성을 발견하고, 새로운 수익 모델을 창출하세요"}
                        </p>
                    </div>
                </AnimatedSection>

                <div class="services-grid">
                    { for SERVICES.iter().zip(section::SERVICES).enumerate().map(|(index, (card, id))| {
                        html! {
                            <AnimatedSection
                                key={id}
                                id={id}
                                visible={state.is_visible(id)}
                                delay={index as u32 * SERVICE_STAGGER_MS}
                            >
                                { service_card(card) }
                            </AnimatedSection>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

fn features(state: &LandingState) -> Html {
    html! {
        <section class="features-section">
            <div class="features-background" />
            <div class="features-pattern" />
            <div class="container">
                <AnimatedSection
                    id={section::FEATURES_TITLE}
                    visible={state.is_visible(section::FEATURES_TITLE)}
                >
                    <div class="section-header">
                        <h2 class="features-title">
                            {"왜 "}<span class="features-accent">{"Team6"}</span>{"인가요?"}
                        </h2>
                        <p class="features-subtitle">
                            {"업계 최고의 전문성과 검증된 기술력으로 여러분의 성공을 보장합니다"}
                        </p>
                    </div>
                </AnimatedSection>

                <div class="features-content">
                    <AnimatedSection
                        id={section::FEATURES_LIST}
                        visible={state.is_visible(section::FEATURES_LIST)}
                    >
                        <div class="features-list">
                            { for FEATURES.iter().map(|card| html! {
                                <div class={classes!("feature-item", card.color_class)} key={card.title}>
                                    <div class="feature-icon-container">
                                        <Icon kind={card.icon} class={classes!("feature-icon")} />
                                    </div>
                                    <div class="feature-text">
                                        <h3 class="feature-title">{card.title}</h3>
                                        <p class="feature-description">{card.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </AnimatedSection>

                    <AnimatedSection
                        id={section::FEATURES_VISUAL}
                        visible={state.is_visible(section::FEATURES_VISUAL)}
                        delay={DASHBOARD_DELAY_MS}
                    >
                        { dashboard(state) }
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}

fn cta(state: &LandingState) -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-background" />
            <div class="container">
                <AnimatedSection id={section::CTA} visible={state.is_visible(section::CTA)}>
                    <div class="cta-container">
                        <h2 class="cta-title">
                            <span class="cta-gradient">{"혁신의 시작"}</span>
                        </h2>
                        <p class="cta-description">
                            {"Team6과 함께 의료 데이터의 새로운 가능성을 발견하고, 진료 외 시간을 수익으로 전환하는 여정을 시작하세요."}
                        </p>

                        <div class="cta-buttons">
                            <button class="cta-primary">
                                <div class="button-shine" />
                                <span class="button-content">
                                    <Icon kind={IconKind::Sparkles} class={classes!("button-icon")} />
                                    {"무료 상담 신청"}
                                </span>
                            </button>
                            <button class="cta-secondary">
                                <span class="button-content">
                                    <Icon kind={IconKind::Database} class={classes!("button-icon")} />
                                    {"서비스 둘러보기"}
                                </span>
                            </button>
                        </div>

                        <div class="cta-features">
                            { for CTA_BADGES.iter().map(|badge| html! {
                                <div class="cta-feature" key={badge.label}>
                                    <Icon kind={badge.icon} class={classes!("cta-feature-icon")} />
                                    <span>{badge.label}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-background" />
            <div class="container">
                <div class="footer-content">
                    <h3 class="footer-logo">{"Team"}<span class="footer-accent">{"6"}</span></h3>
                    <p class="footer-description">{"의료 데이터로 새로운 수익을 창출하세요"}</p>
                    <div class="footer-links">
                        <span>{"© 2025 Team6. All rights reserved."}</span>
                        <div class="footer-dot" />
                        <span>{"Privacy Policy"}</span>
                        <div class="footer-dot" />
                        <span>{"Terms of Service"}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
