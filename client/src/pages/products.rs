//! Products page: list, create, edit and delete. Open to everyone; the API
//! decides which operations an anonymous caller may perform.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::{NewProduct, Product};
use crate::services::products::ProductsService;

fn parse_product_form(name: &str, price: &str, category: &str) -> Result<NewProduct, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    let price = price.trim().parse::<f64>().map_err(|_| "Price must be a number.")?;
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be zero or more.");
    }
    let category = category.trim();
    if category.is_empty() {
        return Err("Category is required.");
    }
    Ok(NewProduct { name: name.to_owned(), price, category: category.to_owned() })
}

fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let service = ProductsService::new(expect_context::<ApiClient>());

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<i64>);

    let reset_form = move || {
        name.set(String::new());
        price.set(String::new());
        category.set(String::new());
        editing.set(None);
    };

    let reload = Callback::new({
        let service = service.clone();
        move |()| {
            let service = service.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match service.list().await {
                    Ok(list) => {
                        products.set(list);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(format!("Failed to load products: {e}"))),
                }
                loading.set(false);
            });
        }
    });
    reload.run(());

    let on_submit = {
        let service = service.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let draft = match parse_product_form(&name.get(), &price.get(), &category.get()) {
                Ok(draft) => draft,
                Err(message) => return error.set(Some(message.to_owned())),
            };
            let service = service.clone();
            let target = editing.get();
            leptos::task::spawn_local(async move {
                let result = match target {
                    Some(id) => service.update(id, &draft.with_id(id)).await,
                    None => service.create(&draft).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        reset_form();
                        reload.run(());
                    }
                    Err(e) => error.set(Some(format!("Failed to save product: {e}"))),
                }
            });
        }
    };

    let on_edit = Callback::new({
        let service = service.clone();
        move |id: i64| {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                match service.get(id).await {
                    Ok(product) => {
                        name.set(product.name);
                        price.set(format_price(product.price));
                        category.set(product.category);
                        editing.set(Some(product.id));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(format!("Failed to load product {id}: {e}"))),
                }
            });
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        let service = service.clone();
        leptos::task::spawn_local(async move {
            match service.delete(id).await {
                Ok(()) => {
                    if editing.get_untracked() == Some(id) {
                        reset_form();
                    }
                    reload.run(());
                }
                Err(e) => error.set(Some(format!("Failed to delete product {id}: {e}"))),
            }
        });
    });

    view! {
        <div class="products-page">
            <h1>"Products"</h1>
            <form class="record-form" on:submit=on_submit>
                <input
                    class="record-form__input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="record-form__input"
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <input
                    class="record-form__input"
                    type="text"
                    placeholder="Category"
                    prop:value=move || category.get()
                    on:input=move |ev| category.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">
                    {move || if editing.get().is_some() { "Save" } else { "Add Product" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button class="btn" type="button" on:click=move |_| reset_form()>
                        "Cancel"
                    </button>
                </Show>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading products..."</p> }>
                <Show when=move || !products.get().is_empty() fallback=|| view! { <p>"No products yet."</p> }>
                    <table class="record-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Category"</th>
                                <th>"Price"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                products
                                    .get()
                                    .into_iter()
                                    .map(|product| {
                                        let id = product.id;
                                        view! {
                                            <tr>
                                                <td>{product.name}</td>
                                                <td>{product.category}</td>
                                                <td>{format_price(product.price)}</td>
                                                <td>
                                                    <button class="btn" on:click=move |_| on_edit.run(id)>
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete.run(id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
