use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-tint"></div>
            <div class="footer-content">
                <img src="/assets/text-logo.jpg" alt="Anzney Technovation" class="footer-logo" />
                <div class="footer-links">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                </div>
                <p class="footer-copyright">
                    {"© 2025 Anzney Technovation. All rights reserved."}
                </p>
            </div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    background: #111827;
                    color: #ffffff;
                    padding: 3rem 0;
                    overflow: hidden;
                }
                .footer-tint {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(88, 28, 135, 0.2), rgba(30, 58, 138, 0.2));
                }
                .footer-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                }
                .footer-logo {
                    height: 2.5rem;
                    width: auto;
                    border-radius: 0.5rem;
                    margin-bottom: 2rem;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .footer-links a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-links a:hover {
                    color: #d8b4fe;
                }
                .footer-copyright {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
