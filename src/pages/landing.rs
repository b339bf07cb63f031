use yew::prelude::*;

use crate::components::{
    about::About, call_to_action::CallToAction, contact::Contact, footer::Footer,
    header::Header, hero::Hero, solutions::Solutions,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Header />
            <Hero />
            <Solutions />
            <About />
            <CallToAction />
            <Contact />
            <Footer />

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                }
                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    overflow-x: hidden;
                }
                "#}
            </style>
        </div>
    }
}
