use amparo::session::LOGIN_ROUTE;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::use_session;
use crate::routes::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let session = use_session();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            let session = session.session();
            session.clear();
            session.redirect(LOGIN_ROUTE);
        })
    };

    html! {
        <nav class="flex items-center space-x-4 px-6 py-3 bg-gray-800 text-white">
            <span class="font-bold">{ "Amparo" }</span>
            <Link<Route> classes="hover:underline" to={Route::Centers}>{ "Centers" }</Link<Route>>
            <Link<Route> classes="hover:underline" to={Route::Beneficiaries}>{ "Beneficiaries" }</Link<Route>>
            <Link<Route> classes="hover:underline" to={Route::Staff}>{ "Staff" }</Link<Route>>
            <Link<Route> classes="hover:underline" to={Route::Activities}>{ "Activities" }</Link<Route>>
            <Link<Route> classes="hover:underline" to={Route::Invoices}>{ "Invoices" }</Link<Route>>
            <span class="flex-1" />
            <button
                class="bg-gray-600 px-3 py-1 rounded hover:bg-gray-500"
                onclick={on_logout}
            >
                { "Log out" }
            </button>
        </nav>
    }
}
