use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Página no encontrada"}</h1>
            <p>{"La dirección que buscó no existe."}</p>
            <Link<Route> to={Route::Home} classes="button">
                {"Volver al inicio"}
            </Link<Route>>
        </div>
    }
}
