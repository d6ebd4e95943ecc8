//! Items page: list, create, edit and delete. Requires a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation re-fetches the list; nothing is cached between requests.
//! A 401 from any call is handled by the client middleware (the page is
//! reloaded at `/login`), so the page only renders other errors.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use leptos::prelude::*;

use crate::components::require_session::RequireSession;
use crate::net::http::ApiClient;
use crate::net::types::{Item, ItemCreate, ItemUpdate};
use crate::services::items::ItemsService;
use crate::util::guard::AppRoute;

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn build_item_create(name: &str, description: &str) -> Result<ItemCreate, &'static str> {
    let name = optional_text(name).ok_or("Name is required.")?;
    Ok(ItemCreate { name, description: optional_text(description) })
}

fn build_item_update(name: &str, description: &str) -> Result<ItemUpdate, &'static str> {
    let name = optional_text(name).ok_or("Name is required.")?;
    Ok(ItemUpdate { name: Some(name), description: optional_text(description) })
}

#[component]
pub fn ItemsPage() -> impl IntoView {
    view! {
        <RequireSession route=AppRoute::Items>
            <ItemsList/>
        </RequireSession>
    }
}

#[component]
fn ItemsList() -> impl IntoView {
    let service = ItemsService::new(expect_context::<ApiClient>());

    let items = RwSignal::new(Vec::<Item>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<i64>);

    let reset_form = move || {
        name.set(String::new());
        description.set(String::new());
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
                        items.set(list);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(format!("Failed to load items: {e}"))),
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
            let service = service.clone();
            let target = editing.get();
            let (name_value, description_value) = (name.get(), description.get());
            match target {
                Some(id) => {
                    let update = match build_item_update(&name_value, &description_value) {
                        Ok(update) => update,
                        Err(message) => return error.set(Some(message.to_owned())),
                    };
                    leptos::task::spawn_local(async move {
                        match service.update(id, &update).await {
                            Ok(_) => {
                                reset_form();
                                reload.run(());
                            }
                            Err(e) => error.set(Some(format!("Failed to update item: {e}"))),
                        }
                    });
                }
                None => {
                    let create = match build_item_create(&name_value, &description_value) {
                        Ok(create) => create,
                        Err(message) => return error.set(Some(message.to_owned())),
                    };
                    leptos::task::spawn_local(async move {
                        match service.create(&create).await {
                            Ok(_) => {
                                reset_form();
                                reload.run(());
                            }
                            Err(e) => error.set(Some(format!("Failed to create item: {e}"))),
                        }
                    });
                }
            }
        }
    };

    let on_edit = Callback::new({
        let service = service.clone();
        move |id: i64| {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                match service.get(id).await {
                    Ok(item) => {
                        name.set(item.name);
                        description.set(item.description.unwrap_or_default());
                        editing.set(Some(item.id));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(format!("Failed to load item {id}: {e}"))),
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
                Err(e) => error.set(Some(format!("Failed to delete item {id}: {e}"))),
            }
        });
    });

    view! {
        <div class="items-page">
            <h1>"Items"</h1>
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
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">
                    {move || if editing.get().is_some() { "Save" } else { "Add Item" }}
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
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading items..."</p> }>
                <Show when=move || !items.get().is_empty() fallback=|| view! { <p>"No items yet."</p> }>
                    <ul class="record-list">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|item| {
                                    let id = item.id;
                                    view! {
                                        <li class="record-list__row">
                                            <span class="record-list__name">{item.name}</span>
                                            <span class="record-list__detail">
                                                {item.description.unwrap_or_default()}
                                            </span>
                                            <button class="btn" on:click=move |_| on_edit.run(id)>
                                                "Edit"
                                            </button>
                                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
