use chrono::Datelike;
use yew::prelude::*;

use crate::components::nav::NAV_LINKS;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer__container container">
                <div class="footer__brand">
                    <a href="#home" class="footer__logo">{"VEFOD"}</a>
                    <p>{"Confección, bordado y serigrafía en Costa Rica."}</p>
                </div>
                <ul class="footer__links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li>
                            <a href={format!("#{}", link.section)} class="footer__link">
                                {link.label}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
            <p class="footer__copy">
                {"© "}<span id="current-year">{current_year()}</span>{" VEFOD. Todos los derechos reservados."}
            </p>
        </footer>
    }
}
