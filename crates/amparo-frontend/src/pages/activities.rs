use yew::prelude::*;

use amparo::data::Activity;

use crate::hooks::use_mounted;
use crate::providers::{api, use_session};

#[function_component(ActivitiesPage)]
pub fn activities_page() -> Html {
    let session = use_session();
    let api = use_memo(session.clone(), |session| api::create(session.session()));
    let activities = use_state(|| None::<Vec<Activity>>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let mounted = use_mounted();

    {
        let api = api.clone();
        let activities = activities.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = async {
                    let profile = api.current_profile().await?;
                    api.activities_for(profile.as_ref()).await
                }
                .await;

                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(data) => {
                        activities.set(Some(data));
                        loading.set(false);
                    }
                    Err(err) => {
                        loading.set(false);
                        error_msg.set(Some(format!("Failed to load activities: {err}")));
                    }
                }
            });
        });
    }

    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">{ "Activities" }</h1>

            {
                if *loading {
                    html! { <p class="text-gray-500">{ "Loading..." }</p> }
                } else if let Some(error) = error_msg.as_ref() {
                    html! {
                        <div class="p-4 bg-red-100 text-red-700 rounded">
                            <p>{ error }</p>
                        </div>
                    }
                } else if let Some(activities) = activities.as_ref() {
                    if activities.is_empty() {
                        html! { <p class="text-gray-500">{ "No activities to show." }</p> }
                    } else {
                        html! {
                            <table class="min-w-full border border-gray-200">
                                <thead>
                                    <tr class="bg-gray-100 text-left">
                                        <th class="px-4 py-2">{ "Name" }</th>
                                        <th class="px-4 py-2">{ "Starts" }</th>
                                        <th class="px-4 py-2">{ "Ends" }</th>
                                        <th class="px-4 py-2">{ "Description" }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                {
                                    activities.iter().map(|activity| {
                                        html! {
                                            <tr key={activity.id.unwrap_or_default().to_string()} class="border-t">
                                                <td class="px-4 py-2">{ activity.name.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ activity.starts_on.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ activity.ends_on.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ activity.description.clone().unwrap_or_default() }</td>
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
