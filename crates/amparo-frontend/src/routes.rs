use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    ActivitiesPage, BeneficiariesPage, CenterDetailPage, CentersPage, InvoicesPage, LoginPage,
    StaffPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/centers")]
    Centers,
    #[at("/centers/:id")]
    Center { id: u64 },
    #[at("/beneficiaries")]
    Beneficiaries,
    #[at("/staff")]
    Staff,
    #[at("/activities")]
    Activities,
    #[at("/invoices")]
    Invoices,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Centers} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Centers => html! { <CentersPage /> },
        Route::Center { id } => html! { <CenterDetailPage id={id} /> },
        Route::Beneficiaries => html! { <BeneficiariesPage /> },
        Route::Staff => html! { <StaffPage /> },
        Route::Activities => html! { <ActivitiesPage /> },
        Route::Invoices => html! { <InvoicesPage /> },
        Route::NotFound => html! { <div>{ "404 Not Found" }</div> },
    }
}
