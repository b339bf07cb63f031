use yew::prelude::*;

use crate::config;
use crate::nav::{smooth_scroll, Section};
use crate::scroll::{use_scroll_state, HeaderStyle};

#[function_component(Header)]
pub fn header() -> Html {
    let scroll = use_scroll_state(config::SCROLL_THRESHOLD_PX);
    let style = HeaderStyle::from(scroll);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |section: Section| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            smooth_scroll(section.id());
        })
    };

    html! {
        <header class={style.bar_class()}>
            <div class="header-content">
                <img src="/assets/text-logo.jpg" alt="Anzney Technovation" class="header-logo" />

                <nav class="header-nav">
                    { for Section::ALL.iter().map(|&section| html! {
                        <button class={style.link_class()} onclick={go_to(section)}>
                            { section.label() }
                        </button>
                    }) }
                </nav>

                <button
                    class={classes!("burger-menu", (style == HeaderStyle::Scrolled).then(|| "burger-dark"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for Section::ALL.iter().map(|&section| html! {
                                <button class="mobile-menu-link" onclick={go_to(section)}>
                                    { section.label() }
                                </button>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.5s ease;
                }
                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(24px);
                    -webkit-backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    box-shadow: 0 10px 15px -3px rgba(168, 85, 247, 0.1);
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    height: 2.5rem;
                    width: auto;
                    border-radius: 0.5rem;
                }
                .header-nav {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    font-weight: 500;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .nav-link:hover {
                    transform: scale(1.05);
                }
                .nav-link-light {
                    color: #ffffff;
                }
                .nav-link-light:hover {
                    color: #e9d5ff;
                }
                .nav-link-dark {
                    color: #1f2937;
                }
                .nav-link-dark:hover {
                    color: #9333ea;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                    transition: background 0.3s ease;
                }
                .burger-menu.burger-dark span {
                    background: #1f2937;
                }
                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    background: rgba(255, 255, 255, 0.95);
                    padding: 0.5rem 1rem 1rem;
                }
                .mobile-menu-link {
                    background: none;
                    border: none;
                    text-align: left;
                    padding: 0.75rem 0;
                    font-size: 1rem;
                    color: #1f2937;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .header-nav {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
