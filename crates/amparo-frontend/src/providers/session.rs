//! Session context: one [`BrowserSession`] shared by the whole page tree.
//!
//! Pages never read cookies directly; they take the session from this
//! context and hand it to the API client, so tests can swap in a different
//! [`Session`] without touching the pages.

use std::rc::Rc;

use amparo::session::Session;
use yew::prelude::*;

use crate::session::BrowserSession;

#[derive(Clone)]
pub struct SessionContext {
    session: Rc<BrowserSession>,
}

impl SessionContext {
    pub fn session(&self) -> Rc<dyn Session> {
        self.session.clone()
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let context = use_memo((), |_| SessionContext {
        session: Rc::new(BrowserSession),
    });

    html! {
        <ContextProvider<SessionContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}
