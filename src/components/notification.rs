use std::rc::Rc;

use gloo_timers::callback::Timeout;
use stylist::css;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "ri-check-line",
            NotificationKind::Error => "ri-error-warning-line",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: Phase,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

pub enum ToastAction {
    Push { kind: NotificationKind, message: String },
    /// Display time is over, start the exit animation.
    Dismiss(u32),
    /// Exit animation is over.
    Remove(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { kind, message } => {
                next.items.push(Toast {
                    id: next.next_id,
                    kind,
                    message,
                    phase: Phase::Shown,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                match next.items.iter_mut().find(|toast| toast.id == id) {
                    Some(toast) => toast.phase = Phase::Leaving,
                    None => return self,
                }
            }
            ToastAction::Remove(id) => {
                let before = next.items.len();
                next.items.retain(|toast| toast.id != id);
                if next.items.len() == before {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// How long a notification stays in the document, exit animation included.
pub const fn lifetime_ms() -> u32 {
    config::NOTIFICATION_DISPLAY_MS + config::NOTIFICATION_EXIT_MS
}

/// Callback the rest of the page uses to raise a notification.
pub fn notifier(toasts: UseReducerDispatcher<Toasts>) -> Callback<(NotificationKind, String)> {
    Callback::from(move |(kind, message): (NotificationKind, String)| {
        toasts.dispatch(ToastAction::Push { kind, message });
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub toasts: Toasts,
    pub dispatcher: UseReducerDispatcher<Toasts>,
    #[prop_or(config::NOTIFICATION_DISPLAY_MS)]
    pub display_ms: u32,
    #[prop_or(config::NOTIFICATION_EXIT_MS)]
    pub exit_ms: u32,
}

#[function_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    html! {
        <div class="form-notifications">
            <style>
                {r#"
                    .form-notifications {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        z-index: 1000;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .form-notification .notification-content {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    @keyframes slideIn {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOut {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(100%); opacity: 0; }
                    }
                "#}
            </style>
            { for props.toasts.items().iter().map(|toast| html! {
                <ToastView
                    key={toast.id}
                    toast={toast.clone()}
                    dispatcher={props.dispatcher.clone()}
                    display_ms={props.display_ms}
                    exit_ms={props.exit_ms}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<Toasts>,
    display_ms: u32,
    exit_ms: u32,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let toast = &props.toast;

    // Timers run once per toast and are never cancelled.
    {
        let dispatcher = props.dispatcher.clone();
        let (display_ms, exit_ms) = (props.display_ms, props.exit_ms);
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(display_ms, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                    let removal = Timeout::new(exit_ms, move || {
                        dispatcher.dispatch(ToastAction::Remove(id));
                    });
                    removal.forget();
                });
                timeout.forget();
                || ()
            },
            toast.id,
        );
    }

    let animation = match toast.phase {
        Phase::Shown => "slideIn 0.3s ease-out",
        Phase::Leaving => "slideOut 0.3s ease-in forwards",
    };
    let style = css!(
        r#"
            background-color: ${bg};
            color: white;
            padding: 1rem 1.5rem;
            border-radius: 0.5rem;
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            animation: ${animation};
        "#,
        bg = toast.kind.color(),
        animation = animation,
    );

    html! {
        <div
            class={classes!(
                "form-notification",
                toast.kind.class(),
                (toast.phase == Phase::Leaving).then(|| "leaving"),
                style,
            )}
            role="status"
        >
            <div class="notification-content">
                <i class={toast.kind.icon()}></i>
                <span>{ &toast.message }</span>
            </div>
        </div>
    }
}
