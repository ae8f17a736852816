use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use amparo::data::Credentials;

use crate::hooks::use_mounted;
use crate::providers::{api, use_session};
use crate::routes::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let api = use_memo(session.clone(), |session| api::create(session.session()));
    let navigator = use_navigator().expect("LoginPage must be rendered inside a router");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);
    let mounted = use_mounted();

    let on_email_change = {
        let email = email.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
                error_msg.set(None);
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                error_msg.set(None);
            }
        })
    };

    let is_valid = !email.is_empty() && !password.is_empty();

    let on_submit = {
        let api = api.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        let navigator = navigator.clone();
        let mounted = mounted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let api = api.clone();
            let email = email.clone();
            let password = password.clone();
            let loading = loading.clone();
            let error_msg = error_msg.clone();
            let navigator = navigator.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error_msg.set(None);

                let credentials = Credentials {
                    email: (*email).clone(),
                    password: (*password).clone(),
                };

                let result = api.login(&credentials).await;
                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(_) => {
                        navigator.push(&Route::Centers);
                    }
                    Err(err) => {
                        loading.set(false);
                        error_msg.set(Some(format!("Login failed: {err}")));
                    }
                }
            });
        })
    };

    html! {
        <div class="p-8 max-w-md mx-auto">
            <h1 class="text-2xl font-bold mb-4">{ "Sign in" }</h1>

            <form onsubmit={on_submit}>
                <div class="mb-4">
                    <label class="block mb-1 font-medium" for="email">{ "Email" }</label>
                    <input
                        id="email"
                        type="email"
                        class="w-full px-3 py-2 border border-gray-300 rounded"
                        value={(*email).clone()}
                        oninput={on_email_change}
                    />
                </div>

                <div class="mb-4">
                    <label class="block mb-1 font-medium" for="password">{ "Password" }</label>
                    <input
                        id="password"
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 rounded"
                        value={(*password).clone()}
                        oninput={on_password_change}
                    />
                </div>

                {
                    if let Some(error) = error_msg.as_ref() {
                        html! {
                            <div class="mb-4 p-3 bg-red-100 text-red-700 rounded">
                                <p>{ error }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                    disabled={*loading || !is_valid}
                >
                    { if *loading { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
