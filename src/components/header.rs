use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::config;
use crate::dom::EventListener;
use crate::scroll;

struct Pending {
    _timeout: Timeout,
    fired: Rc<Cell<bool>>,
}

/// The scroll-settle timer. At most one is pending; replacing it drops,
/// and so cancels, the previous one.
#[derive(Default)]
pub struct SettleTimer {
    pending: Option<Pending>,
}

impl SettleTimer {
    pub fn reschedule<F>(&mut self, millis: u32, on_settle: F)
    where
        F: FnOnce() + 'static,
    {
        let fired = Rc::new(Cell::new(false));
        let timeout = {
            let fired = fired.clone();
            Timeout::new(millis, move || {
                fired.set(true);
                on_settle();
            })
        };
        self.pending = Some(Pending {
            _timeout: timeout,
            fired,
        });
    }

    /// True between a reschedule and the moment its callback runs.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|pending| !pending.fired.get())
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state_eq(|| false);
    let is_scrolling = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        let is_scrolling = is_scrolling.clone();
        use_effect_with_deps(
            move |_| {
                let settle = Rc::new(RefCell::new(SettleTimer::default()));
                is_scrolled.set(scroll::is_header_scrolled(scroll::scroll_offset()));

                let listener = {
                    let settle = settle.clone();
                    EventListener::on_window("scroll", move |_| {
                        is_scrolled.set(scroll::is_header_scrolled(scroll::scroll_offset()));
                        is_scrolling.set(true);

                        let is_scrolling = is_scrolling.clone();
                        settle.borrow_mut().reschedule(config::SCROLLING_SETTLE_MS, move || {
                            is_scrolling.set(false);
                        });
                    })
                };

                move || {
                    drop(listener);
                    settle.borrow_mut().clear();
                }
            },
            (),
        );
    }

    html! {
        <header
            id="header"
            class={classes!(
                "header",
                (*is_scrolled).then(|| "scrolled"),
                (*is_scrolling).then(|| "scrolling"),
            )}
        >
            <Nav />
        </header>
    }
}
