use yew::prelude::*;

use amparo::data::Invoice;

use crate::hooks::use_mounted;
use crate::providers::{api, use_session};

#[function_component(InvoicesPage)]
pub fn invoices_page() -> Html {
    let session = use_session();
    let api = use_memo(session.clone(), |session| api::create(session.session()));
    let invoices = use_state(|| None::<Vec<Invoice>>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let mounted = use_mounted();

    {
        let api = api.clone();
        let invoices = invoices.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = async {
                    let profile = api.current_profile().await?;
                    api.invoices_for(profile.as_ref()).await
                }
                .await;

                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(data) => {
                        invoices.set(Some(data));
                        loading.set(false);
                    }
                    Err(err) => {
                        loading.set(false);
                        error_msg.set(Some(format!("Failed to load invoices: {err}")));
                    }
                }
            });
        });
    }

    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">{ "Invoices" }</h1>

            {
                if *loading {
                    html! { <p class="text-gray-500">{ "Loading..." }</p> }
                } else if let Some(error) = error_msg.as_ref() {
                    html! {
                        <div class="p-4 bg-red-100 text-red-700 rounded">
                            <p>{ error }</p>
                        </div>
                    }
                } else if let Some(invoices) = invoices.as_ref() {
                    if invoices.is_empty() {
                        html! { <p class="text-gray-500">{ "No invoices to show." }</p> }
                    } else {
                        html! {
                            <table class="min-w-full border border-gray-200">
                                <thead>
                                    <tr class="bg-gray-100 text-left">
                                        <th class="px-4 py-2">{ "Number" }</th>
                                        <th class="px-4 py-2">{ "Concept" }</th>
                                        <th class="px-4 py-2">{ "Issued" }</th>
                                        <th class="px-4 py-2 text-right">{ "Amount" }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                {
                                    invoices.iter().map(|invoice| {
                                        let amount = invoice
                                            .amount
                                            .map(|a| format!("{a:.2}"))
                                            .unwrap_or_default();
                                        html! {
                                            <tr key={invoice.id.unwrap_or_default().to_string()} class="border-t">
                                                <td class="px-4 py-2">{ invoice.number.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ invoice.concept.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2">{ invoice.issued_on.clone().unwrap_or_default() }</td>
                                                <td class="px-4 py-2 text-right">{ amount }</td>
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
