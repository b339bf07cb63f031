use yew::prelude::*;

use crate::nav::Section;

// No submit handler: the form falls through to the browser's default action.
#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="contact">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Contact Us"}</h2>
                    <p>{"Ready to start your AI transformation journey? Get in touch with our team of experts."}</p>
                </div>

                <form class="contact-form">
                    <div class="form-row">
                        <div class="form-field">
                            <label for="name">{"Name"}</label>
                            <input type="text" id="name" placeholder="Your full name" />
                        </div>
                        <div class="form-field">
                            <label for="email">{"Email"}</label>
                            <input type="email" id="email" placeholder="your.email@example.com" />
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="message">{"Message"}</label>
                        <textarea
                            id="message"
                            rows="6"
                            placeholder="Tell us about your project and how we can help..."
                        />
                    </div>

                    <button type="submit" class="form-submit">{"Send Message"}</button>
                </form>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 5rem 0;
                    background: linear-gradient(180deg, #f9fafb, #ffffff);
                }
                .contact-form {
                    max-width: 42rem;
                    margin: 0 auto;
                    background: #ffffff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-field {
                    margin-bottom: 1.5rem;
                }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    font: inherit;
                    transition: all 0.2s ease;
                }
                .form-field textarea {
                    resize: none;
                }
                .form-field input:hover,
                .form-field textarea:hover {
                    border-color: #d8b4fe;
                }
                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #a855f7;
                }
                .form-submit {
                    width: 100%;
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                    color: #ffffff;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .form-submit:hover {
                    transform: scale(1.02);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                @media (max-width: 768px) {
                    .form-row {
                        grid-template-columns: 1fr;
                        gap: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}
