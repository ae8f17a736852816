use yew::prelude::*;

use amparo::data::Beneficiary;

use crate::hooks::use_mounted;
use crate::providers::{api, use_session};

#[function_component(BeneficiariesPage)]
pub fn beneficiaries_page() -> Html {
    let session = use_session();
    let api = use_memo(session.clone(), |session| api::create(session.session()));
    let beneficiaries = use_state(|| None::<Vec<Beneficiary>>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let mounted = use_mounted();

    {
        let api = api.clone();
        let beneficiaries = beneficiaries.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = async {
                    let profile = api.current_profile().await?;
                    api.beneficiaries_for(profile.as_ref()).await
                }
                .await;

                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(data) => {
                        beneficiaries.set(Some(data));
                        loading.set(false);
                    }
                    Err(err) => {
                        loading.set(false);
                        error_msg.set(Some(format!("Failed to load beneficiaries: {err}")));
                    }
                }
            });
        });
    }

    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">{ "Beneficiaries" }</h1>

            {
                if *loading {
                    html! { <p class="text-gray-500">{ "Loading..." }</p> }
                } else if let Some(error) = error_msg.as_ref() {
                    html! {
                        <div class="p-4 bg-red-100 text-red-700 rounded">
                            <p>{ error }</p>
                        </div>
                    }
                } else if let Some(beneficiaries) = beneficiaries.as_ref() {
                    if beneficiaries.is_empty() {
                        html! { <p class="text-gray-500">{ "No beneficiaries to show." }</p> }
                    } else {
                        html! {
                            <table class="min-w-full border border-gray-200">
                                <thead>
                                    <tr class="bg-gray-100 text-left">
                                        <th class="px-4 py-2">{ "Name" }</th>
                                        <th class="px-4 py-2">{ "Document" }</th>
                                        <th class="px-4 py-2">{ "Birth date" }</th>
                                        <th class="px-4 py-2">{ "Phone" }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                {
                                    beneficiaries.iter().map(|b| {
                                        let name = format!(
                                            "{} {}",
                                            b.first_name.clone().unwrap_or_default(),
                                            b.last_name.clone().unwrap_or_default(),
                                        );
                                        html! {
                                            <tr key={b.id.unwrap_or_default().to_string()} class="border-t">
                                                <td class="px-4 py-2">{ name }</td>
                                                <td class="px-4 py-2">{ b.document_number.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ b.birth_date.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ b.phone.clone().unwrap_or_default() }</td>
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
