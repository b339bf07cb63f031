use yew::prelude::*;

use crate::nav::Section;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="about">
            <div class="about-tint"></div>
            <div class="section-inner about-grid">
                <div class="about-copy">
                    <h2>{"About Anzney Technovation"}</h2>
                    <p>
                        {"At Anzney Technovation, we are committed to developing and implementing responsible AI solutions that drive meaningful technological advancement while maintaining the highest standards of ethics and trust."}
                    </p>
                    <p>
                        {"Our mission is to empower businesses across industries with cutting-edge artificial intelligence technologies that not only enhance operational efficiency but also respect privacy, ensure security, and promote sustainable growth."}
                    </p>
                    <p>
                        {"We believe that the future of AI lies in responsible innovation, creating solutions that serve humanity while preserving the values and principles that matter most to our clients and communities."}
                    </p>
                </div>

                <div class="about-logo">
                    <div class="about-logo-glow"></div>
                    <img src="/assets/square-logo.jpg" alt="Anzney Technovation Logo" width="400" height="400" />
                </div>
            </div>

            <style>
                {r#"
                .about {
                    position: relative;
                    padding: 5rem 0;
                    background: #ffffff;
                    overflow: hidden;
                }
                .about-tint {
                    position: absolute;
                    inset: 0;
                    opacity: 0.05;
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                }
                .about-grid {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-copy h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    background: linear-gradient(90deg, #111827, #4b5563);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    margin-bottom: 1.5rem;
                }
                .about-copy p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .about-logo {
                    position: relative;
                    justify-self: end;
                }
                .about-logo-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 1.5rem;
                    background: linear-gradient(90deg, #a855f7, #3b82f6);
                    filter: blur(24px);
                    opacity: 0.3;
                    transition: opacity 0.3s ease;
                }
                .about-logo:hover .about-logo-glow {
                    opacity: 0.5;
                }
                .about-logo img {
                    position: relative;
                    max-width: 100%;
                    height: auto;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                }
                .about-logo:hover img {
                    transform: scale(1.05);
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-logo {
                        justify-self: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
