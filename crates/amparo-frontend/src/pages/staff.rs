use yew::prelude::*;

use amparo::data::StaffMember;

use crate::hooks::use_mounted;
use crate::providers::{api, use_session};

#[function_component(StaffPage)]
pub fn staff_page() -> Html {
    let session = use_session();
    let api = use_memo(session.clone(), |session| api::create(session.session()));
    let staff = use_state(|| None::<Vec<StaffMember>>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let mounted = use_mounted();

    {
        let api = api.clone();
        let staff = staff.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = async {
                    let profile = api.current_profile().await?;
                    api.staff_for(profile.as_ref()).await
                }
                .await;

                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(data) => {
                        staff.set(Some(data));
                        loading.set(false);
                    }
                    Err(err) => {
                        loading.set(false);
                        error_msg.set(Some(format!("Failed to load staff: {err}")));
                    }
                }
            });
        });
    }

    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">{ "Staff" }</h1>

            {
                if *loading {
                    html! { <p class="text-gray-500">{ "Loading..." }</p> }
                } else if let Some(error) = error_msg.as_ref() {
                    html! {
                        <div class="p-4 bg-red-100 text-red-700 rounded">
                            <p>{ error }</p>
                        </div>
                    }
                } else if let Some(staff) = staff.as_ref() {
                    if staff.is_empty() {
                        html! { <p class="text-gray-500">{ "No staff to show." }</p> }
                    } else {
                        html! {
                            <table class="min-w-full border border-gray-200">
                                <thead>
                                    <tr class="bg-gray-100 text-left">
                                        <th class="px-4 py-2">{ "Name" }</th>
                                        <th class="px-4 py-2">{ "Position" }</th>
                                        <th class="px-4 py-2">{ "Email" }</th>
                                        <th class="px-4 py-2">{ "Phone" }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                {
                                    staff.iter().map(|member| {
                                        let name = format!(
                                            "{} {}",
                                            member.first_name.clone().unwrap_or_default(),
                                            member.last_name.clone().unwrap_or_default(),
                                        );
                                        html! {
                                            <tr key={member.id.unwrap_or_default().to_string()} class="border-t">
                                                <td class="px-4 py-2">{ name }</td>
                                                <td class="px-4 py-2">{ member.position.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ member.email.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ member.phone.clone().unwrap_or_default() }</td>
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
