use yew::prelude::*;

use crate::nav::Section;
use crate::reveal::use_card_reveal;

struct Solution {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const SOLUTIONS: [Solution; 3] = [
    Solution {
        icon: "🧠",
        title: "Local LLM Solutions",
        description: "Advanced local Large Language Model solutions tailored to meet specific business needs while ensuring compliance with local privacy regulations.",
        accent: "accent-purple",
    },
    Solution {
        icon: "⚡",
        title: "AI Systems & Automation",
        description: "Optimizing business operations through AI and Robotic Process Automation (RPA), driving efficiency, enhancing decision-making, and providing data-driven insights.",
        accent: "accent-blue",
    },
    Solution {
        icon: "🛡️",
        title: "Privacy Enhancing Technologies",
        description: "Pioneering the integration of AI with advanced privacy-preserving techniques, ensuring sensitive data remains protected while leveraging AI's power.",
        accent: "accent-indigo",
    },
];

#[function_component(Solutions)]
pub fn solutions() -> Html {
    let card_refs = use_memo(
        |_| (0..SOLUTIONS.len()).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );
    let reveal = use_card_reveal(card_refs.clone());

    html! {
        <section id={Section::Solutions.id()} class="solutions">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Our Solutions"}</h2>
                    <p>{"Cutting-edge AI technologies designed to transform your business operations and drive innovation."}</p>
                </div>

                <div class="solutions-grid">
                    { for SOLUTIONS.iter().zip(card_refs.iter()).enumerate().map(|(index, (solution, node_ref))| html! {
                        <div
                            ref={node_ref.clone()}
                            class={classes!("solution-card", reveal.is_revealed(index).then(|| "revealed"))}
                        >
                            <div class={classes!("card-border", solution.accent)}>
                                <div class="card-border-fill"></div>
                            </div>
                            <div class="card-body">
                                <div class={classes!("card-icon", solution.accent)}>{ solution.icon }</div>
                                <h3>{ solution.title }</h3>
                                <p>{ solution.description }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .solutions {
                    padding: 5rem 0;
                    background: linear-gradient(180deg, #f9fafb, #ffffff);
                }
                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    background: linear-gradient(90deg, #111827, #4b5563);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    margin-bottom: 1rem;
                }
                .section-heading p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .solutions-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .solution-card {
                    position: relative;
                    background: #ffffff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    opacity: 0;
                    transform: translateY(3rem) scale(0.95);
                    transition: all 0.7s ease;
                }
                .solution-card.revealed {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }
                .solution-card.revealed:hover {
                    transform: translateY(-0.5rem) scale(1.05);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .card-border {
                    position: absolute;
                    inset: 0;
                    border-radius: 1.5rem;
                    padding: 2px;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .solution-card:hover .card-border {
                    opacity: 1;
                }
                .card-border-fill {
                    background: #ffffff;
                    border-radius: 1.5rem;
                    width: 100%;
                    height: 100%;
                }
                .card-body {
                    position: relative;
                    z-index: 10;
                }
                .card-icon {
                    width: fit-content;
                    padding: 1rem;
                    border-radius: 1rem;
                    font-size: 2.5rem;
                    line-height: 1;
                    margin-bottom: 1.5rem;
                }
                .card-body h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1rem;
                    transition: color 0.3s ease;
                }
                .solution-card:hover h3 {
                    color: #7e22ce;
                }
                .card-body p {
                    color: #4b5563;
                    line-height: 1.6;
                }
                .accent-purple { background: linear-gradient(90deg, #a855f7, #3b82f6); }
                .accent-blue { background: linear-gradient(90deg, #3b82f6, #6366f1); }
                .accent-indigo { background: linear-gradient(90deg, #6366f1, #a855f7); }
                @media (max-width: 768px) {
                    .solutions-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
