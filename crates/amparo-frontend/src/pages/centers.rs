use yew::prelude::*;
use yew_router::prelude::*;

use amparo::{async_callback, data::Center};

use crate::hooks::use_mounted;
use crate::providers::{api, use_session};
use crate::routes::Route;

#[function_component(CentersPage)]
pub fn centers_page() -> Html {
    let session = use_session();
    let api = use_memo(session.clone(), |session| api::create(session.session()));
    let centers = use_state(|| None::<Vec<Center>>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let mounted = use_mounted();

    {
        let api = api.clone();
        let centers = centers.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = async {
                    let profile = api.current_profile().await?;
                    api.centers_for(profile.as_ref()).await
                }
                .await;

                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(data) => {
                        centers.set(Some(data));
                        loading.set(false);
                    }
                    Err(err) => {
                        loading.set(false);
                        error_msg.set(Some(format!("Failed to load centers: {err}")));
                    }
                }
            });
        });
    }

    let refresh = async_callback!([api, centers, loading, error_msg, mounted] {
        loading.set(true);
        error_msg.set(None);

        let result = async {
            let profile = api.current_profile().await?;
            api.centers_for(profile.as_ref()).await
        }
        .await;

        if !mounted.get() {
            return;
        }
        match result {
            Ok(data) => {
                centers.set(Some(data));
                loading.set(false);
            }
            Err(err) => {
                loading.set(false);
                error_msg.set(Some(format!("Failed to load centers: {err}")));
            }
        }
    });

    html! {
        <div class="p-8">
            <div class="flex items-center mb-4 space-x-4">
                <h1 class="text-2xl font-bold">{ "Centers" }</h1>
                <button
                    class="bg-blue-600 text-white px-3 py-1 rounded hover:bg-blue-700 disabled:opacity-50"
                    onclick={refresh}
                    disabled={*loading}
                >
                    { "Reload" }
                </button>
            </div>

            {
                if *loading {
                    html! { <p class="text-gray-500">{ "Loading..." }</p> }
                } else if let Some(error) = error_msg.as_ref() {
                    html! {
                        <div class="p-4 bg-red-100 text-red-700 rounded">
                            <p>{ error }</p>
                        </div>
                    }
                } else if let Some(centers) = centers.as_ref() {
                    if centers.is_empty() {
                        html! { <p class="text-gray-500">{ "No centers to show." }</p> }
                    } else {
                        html! {
                            <table class="min-w-full border border-gray-200">
                                <thead>
                                    <tr class="bg-gray-100 text-left">
                                        <th class="px-4 py-2">{ "Name" }</th>
                                        <th class="px-4 py-2">{ "City" }</th>
                                        <th class="px-4 py-2">{ "Phone" }</th>
                                        <th class="px-4 py-2">{ "Email" }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                {
                                    centers.iter().map(|center| {
                                        let id = center.id.unwrap_or_default();
                                        html! {
                                            <tr key={id.to_string()} class="border-t">
                                                <td class="px-4 py-2">
                                                    <Link<Route> classes="text-blue-600 hover:underline" to={Route::Center { id }}>
                                                        { center.name.clone().unwrap_or_default() }
                                                    </Link<Route>>
                                                </td>
                                                <td class="px-4 py-2">{ center.city.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ center.phone.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ center.email.clone().unwrap_or_default() }</td>
                                            </tr>
                                        }
                                    }).collect::<Html>()
                                }
                                </tbody>
                            </table>
                        }
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
