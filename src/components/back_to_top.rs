use yew::prelude::*;

use crate::dom::EventListener;
use crate::scroll;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(scroll::shows_back_to_top(scroll::scroll_offset()));
                let listener = EventListener::on_window("scroll", move |_| {
                    visible.set(scroll::shows_back_to_top(scroll::scroll_offset()));
                });
                move || drop(listener)
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| scroll::smooth_scroll_to_top());

    html! {
        <button
            id="backToTop"
            type="button"
            class={classes!("back-to-top", (*visible).then(|| "show"))}
            aria-label="Volver arriba"
            {onclick}
        >
            <i class="ri-arrow-up-line"></i>
        </button>
    }
}
