//! Navigation guard components
//!
//! Each routed page is wrapped in one of these. Guard evaluation also
//! triggers the one-shot session rehydration: the first navigation with no
//! in-memory token pulls the persisted session back in before any redirect
//! decision is made.

use crate::components::LoadingSpinner;
use crate::routes::{evaluate_guards, GuardOutcome, RedirectQuery, Route};
use crate::session::{hydrate, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub route: Route,
    pub children: Children,
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    render_guarded(props)
}

#[function_component(RequireGuest)]
pub fn require_guest(props: &GuardProps) -> Html {
    render_guarded(props)
}

fn render_guarded(props: &GuardProps) -> Html {
    html! {
        <Guarded route={props.route.clone()}>
            {props.children.clone()}
        </Guarded>
    }
}

#[function_component(Guarded)]
fn guarded(props: &GuardProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("guards render inside the router");
    let location = use_location().expect("guards render inside the router");

    // One-shot rehydration before the first guard decision.
    {
        let session = session.clone();
        use_effect_with(session.hydrated, move |hydrated| {
            if !hydrated {
                hydrate(&session);
            }
        });
    }

    let hydrated = session.hydrated;
    let path = location.path();
    // Before hydration the outcome is provisional and never acted on.
    let outcome = if hydrated {
        evaluate_guards(&props.route, &path, session.is_authenticated())
    } else {
        GuardOutcome::Proceed
    };

    {
        let outcome = outcome.clone();
        use_effect_with((hydrated, outcome), move |(hydrated, outcome)| {
            if !*hydrated {
                return;
            }
            match outcome {
                GuardOutcome::ToLogin { redirect } => {
                    let query = RedirectQuery {
                        redirect: redirect.clone(),
                    };
                    if navigator.push_with_query(&Route::Login, &query).is_err() {
                        navigator.push(&Route::Login);
                    }
                }
                GuardOutcome::ToDashboard => navigator.push(&Route::Dashboard),
                GuardOutcome::Proceed => {}
            }
        });
    }

    if !hydrated {
        return html! { <LoadingSpinner /> };
    }

    match outcome {
        GuardOutcome::Proceed => html! { <>{props.children.clone()}</> },
        _ => html! { <LoadingSpinner /> },
    }
}
