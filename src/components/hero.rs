use yew::prelude::*;

use crate::nav::{smooth_scroll, Section};
use crate::particles::{ParticleField, Pulse};

const HERO_PULSE: Pulse = Pulse {
    max_delay: 3.0,
    min_duration: 2.0,
    duration_span: 3.0,
};

#[function_component(Hero)]
pub fn hero() -> Html {
    let discover = Callback::from(|_: MouseEvent| smooth_scroll(Section::Solutions.id()));

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-background">
                <ParticleField count={20} seed={0} pulse={HERO_PULSE} dot_class={classes!("hero-particle")} />
                <svg class="hero-circuit" viewBox="0 0 100 100" preserveAspectRatio="none">
                    <defs>
                        <pattern id="circuit" x="0" y="0" width="20" height="20" patternUnits="userSpaceOnUse">
                            <path d="M0 10h20M10 0v20" stroke="currentColor" stroke-width="0.5" fill="none" />
                            <circle cx="10" cy="10" r="2" fill="currentColor" />
                        </pattern>
                    </defs>
                    <rect width="100%" height="100%" fill="url(#circuit)" />
                </svg>
            </div>

            <div class="hero-content fade-in-up">
                <h1>
                    {"Innovative AI Solutions for a "}
                    <span class="hero-highlight">{"Smarter Future"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Empowering businesses with responsible AI, driving technological advancement, fostering trust, and fueling growth."}
                </p>
                <button class="hero-cta" onclick={discover}>
                    {"Discover Our Solutions"}
                    <span class="cta-arrow">{"→"}</span>
                </button>
            </div>

            <div class="scroll-indicator">{"⌄"}</div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #2563eb 0%, #7e22ce 50%, #312e81 100%);
                }
                .hero-particle {
                    width: 0.5rem;
                    height: 0.5rem;
                    background: rgba(255, 255, 255, 0.2);
                }
                .hero-circuit {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.1;
                    color: #ffffff;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1rem;
                    max-width: 1200px;
                }
                .hero-content h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.15;
                    color: #ffffff;
                    margin-bottom: 1.5rem;
                }
                .hero-highlight {
                    background: linear-gradient(90deg, #d8b4fe, #93c5fd);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subtitle {
                    font-size: clamp(1.125rem, 2.2vw, 1.5rem);
                    color: #dbeafe;
                    max-width: 56rem;
                    margin: 0 auto 2rem;
                    line-height: 1.6;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: linear-gradient(90deg, #a855f7, #3b82f6);
                    color: #ffffff;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.05);
                }
                .cta-arrow {
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover .cta-arrow {
                    transform: translateX(0.25rem);
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.5rem;
                    animation: bounce 1s infinite;
                }
                .fade-in-up {
                    animation: fade-in-up 0.8s ease-out both;
                }
                @keyframes fade-in-up {
                    from { opacity: 0; transform: translateY(2rem); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }
                "#}
            </style>
        </section>
    }
}
