use yew::prelude::*;

use crate::nav::{smooth_scroll, Section};
use crate::particles::{ParticleField, Pulse};

const BAND_PULSE: Pulse = Pulse {
    max_delay: 2.0,
    min_duration: 1.0,
    duration_span: 2.0,
};

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let get_in_touch = Callback::from(|_: MouseEvent| smooth_scroll(Section::Contact.id()));

    html! {
        <section class="cta-band">
            <div class="cta-gradient"></div>
            <ParticleField count={15} seed={20} pulse={BAND_PULSE} dot_class={classes!("cta-particle")} />

            <div class="cta-content">
                <h2>{"Ready to Transform Your Business with AI?"}</h2>
                <p>
                    {"Let's discuss how our tailored AI solutions can help you achieve your goals and gain a competitive edge."}
                </p>
                <button class="cta-button" onclick={get_in_touch}>
                    {"Get in Touch"}
                    <span class="cta-arrow">{"→"}</span>
                </button>
            </div>

            <style>
                {r#"
                .cta-band {
                    position: relative;
                    padding: 5rem 0;
                    overflow: hidden;
                }
                .cta-gradient {
                    position: absolute;
                    inset: 0;
                    background:
                        linear-gradient(rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.2)),
                        linear-gradient(90deg, #9333ea, #2563eb, #4338ca);
                }
                .cta-particle {
                    width: 0.25rem;
                    height: 0.25rem;
                    background: rgba(255, 255, 255, 0.3);
                }
                .cta-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1rem;
                }
                .cta-content h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 1.5rem;
                }
                .cta-content p {
                    font-size: 1.25rem;
                    color: #f3e8ff;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #ffffff;
                    color: #7e22ce;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: all 0.3s ease;
                }
                .cta-button:hover {
                    background: #faf5ff;
                    transform: scale(1.05);
                }
                .cta-button:hover .cta-arrow {
                    transform: translateX(0.25rem);
                }
                "#}
            </style>
        </section>
    }
}
