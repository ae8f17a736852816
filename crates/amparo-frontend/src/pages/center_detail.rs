use yew::prelude::*;

use amparo::data::{Center, StaffMember};
use amparo::log::info;

use crate::hooks::use_mounted;
use crate::providers::{api, use_session};

#[derive(Properties, PartialEq)]
pub struct CenterDetailProps {
    pub id: u64,
}

#[function_component(CenterDetailPage)]
pub fn center_detail_page(props: &CenterDetailProps) -> Html {
    let session = use_session();
    let api = use_memo(session.clone(), |session| api::create(session.session()));
    let center = use_state(|| None::<Center>);
    let staff = use_state(Vec::<StaffMember>::new);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let mounted = use_mounted();

    let center_id = props.id;
    {
        let api = api.clone();
        let center = center.clone();
        let staff = staff.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        let mounted = mounted.clone();

        use_effect_with(center_id, move |id: &u64| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error_msg.set(None);

                let result = async {
                    let record = api.center(id).await?;
                    let members = api.staff_by_center(id).await?;
                    Ok::<_, amparo::api::ApiError>((record, members))
                }
                .await;

                if !mounted.get() {
                    return;
                }
                match result {
                    Ok((record, members)) => {
                        info!(center = ?record.name, "center loaded");
                        center.set(Some(record));
                        staff.set(members);
                        loading.set(false);
                    }
                    Err(err) => {
                        loading.set(false);
                        error_msg.set(Some(format!("Failed to load center: {err}")));
                    }
                }
            });
        });
    }

    html! {
        <div class="p-8">
            {
                if *loading {
                    html! { <p class="text-gray-500">{ "Loading..." }</p> }
                } else if let Some(error) = error_msg.as_ref() {
                    html! {
                        <div class="p-4 bg-red-100 text-red-700 rounded">
                            <p>{ error }</p>
                        </div>
                    }
                } else if let Some(center) = center.as_ref() {
                    html! {
                        <>
                            <h1 class="text-2xl font-bold mb-4">
                                { center.name.clone().unwrap_or_else(|| format!("Center #{center_id}")) }
                            </h1>
                            <dl class="mb-8 grid grid-cols-2 gap-2 max-w-xl">
                                <dt class="font-medium">{ "Address" }</dt>
                                <dd>{ center.address.clone().unwrap_or_default() }</dd>
                                <dt class="font-medium">{ "City" }</dt>
                                <dd>{ center.city.clone().unwrap_or_default() }</dd>
                                <dt class="font-medium">{ "Postal code" }</dt>
                                <dd>{ center.postal_code.clone().unwrap_or_default() }</dd>
                                <dt class="font-medium">{ "Phone" }</dt>
                                <dd>{ center.phone.clone().unwrap_or_default() }</dd>
                                <dt class="font-medium">{ "Email" }</dt>
                                <dd>{ center.email.clone().unwrap_or_default() }</dd>
                            </dl>

                            <h2 class="text-xl font-semibold mb-2">{ "Staff" }</h2>
                            {
                                if staff.is_empty() {
                                    html! { <p class="text-gray-500">{ "No staff assigned to this center." }</p> }
                                } else {
                                    html! {
                                        <ul class="list-disc pl-6">
                                        {
                                            staff.iter().map(|member| {
                                                let name = format!(
                                                    "{} {}",
                                                    member.first_name.clone().unwrap_or_default(),
                                                    member.last_name.clone().unwrap_or_default(),
                                                );
                                                html! {
                                                    <li key={member.id.unwrap_or_default().to_string()}>
                                                        { name }
                                                        { member.position.as_ref().map(|p| format!(" ({p})")).unwrap_or_default() }
                                                    </li>
                                                }
                                            }).collect::<Html>()
                                        }
                                        </ul>
                                    }
                                }
                            }
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
