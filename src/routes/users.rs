//! Users page: the list view plus the shared name/age form. Update applies the
//! current form values to an existing row. Every completed mutation attempt
//! triggers a full list refresh, failed ones included; the backend owns the
//! data and the view mirrors its latest answer.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::users::{client, types::UserPayload},
};
use leptos::{ev::SubmitEvent, prelude::*};

#[derive(Clone)]
/// Captures one mutation request for the shared action without borrowing signals.
enum UserMutation {
    Create(UserPayload),
    Update(i64, UserPayload),
    Delete(i64),
}

/// Renders the users list and drives create, update, and delete calls.
#[component]
pub fn UsersPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let reload = RwSignal::new(0u32);

    let users = LocalResource::new(move || {
        reload.track();
        async move { client::list_users().await }
    });

    let mutate = Action::new_local(move |mutation: &UserMutation| {
        let mutation = mutation.clone();
        async move {
            match mutation {
                UserMutation::Create(payload) => client::create_user(&payload).await,
                UserMutation::Update(id, payload) => client::update_user(id, &payload).await,
                UserMutation::Delete(id) => client::delete_user(id).await,
            }
        }
    });

    // The list is refreshed whether the mutation succeeded or not.
    Effect::new(move |_| {
        if let Some(result) = mutate.value().get() {
            if let Err(err) = result {
                set_error.set(Some(err));
            }
            reload.update(|count| *count += 1);
        }
    });

    let form_payload = move || UserPayload {
        name: name.get_untracked().trim().to_string(),
        age: age.get_untracked().trim().to_string(),
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let payload = form_payload();
        if payload.name.is_empty() || payload.age.is_empty() {
            set_error.set(Some(AppError::Config(
                "Name and age are required.".to_string(),
            )));
            return;
        }

        mutate.dispatch(UserMutation::Create(payload));
    };

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900">"Users"</h1>
                    <p class="text-sm text-gray-500">
                        "Add a user below, or apply the form values to an existing one with Update."
                    </p>
                </div>

                <form class="flex flex-wrap items-end gap-4" on:submit=on_submit>
                    <div>
                        <label class="block mb-1 text-sm font-medium text-gray-700" for="name">
                            "Name"
                        </label>
                        <input
                            id="name"
                            name="name"
                            type="text"
                            class="rounded-md border border-gray-300 bg-white p-2 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500"
                            placeholder="Homer"
                            prop:value=name
                            on:input=move |event| set_name.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block mb-1 text-sm font-medium text-gray-700" for="age">
                            "Age"
                        </label>
                        <input
                            id="age"
                            name="age"
                            type="number"
                            min="0"
                            class="rounded-md border border-gray-300 bg-white p-2 text-sm text-gray-900 focus:border-indigo-500 focus:ring-indigo-500"
                            placeholder="39"
                            prop:value=age
                            on:input=move |event| set_age.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=mutate.pending()>
                        "Add user"
                    </Button>
                </form>

                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}

                <div class="overflow-hidden rounded-md border border-gray-200 bg-white shadow-sm">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-100">
                            <tr>
                                <th scope="col" class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                    "Name"
                                </th>
                                <th scope="col" class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
                                    "Age"
                                </th>
                                <th scope="col" class="px-4 py-3 text-right text-xs font-medium uppercase tracking-wider text-gray-500">
                                    "Actions"
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            <Suspense fallback=move || view! {
                                <tr>
                                    <td colspan="3" class="px-4 py-10 text-center">
                                        <Spinner />
                                    </td>
                                </tr>
                            }>
                                {move || match users.get() {
                                    Some(Ok(list)) if list.is_empty() => {
                                        view! {
                                            <tr>
                                                <td colspan="3" class="px-4 py-10 text-center text-sm text-gray-500">
                                                    "No users yet."
                                                </td>
                                            </tr>
                                        }.into_any()
                                    }
                                    Some(Ok(list)) => {
                                        view! {
                                            <For
                                                each=move || list.clone()
                                                key=|user| user.id
                                                children=move |user| {
                                                    let id = user.id;
                                                    view! {
                                                        <tr class="hover:bg-gray-50 transition-colors">
                                                            <td class="px-4 py-3 text-sm font-medium text-gray-900">
                                                                {user.name}
                                                            </td>
                                                            <td class="px-4 py-3 text-sm text-gray-600">
                                                                {user.age}
                                                            </td>
                                                            <td class="px-4 py-3 text-right text-sm font-medium space-x-4">
                                                                <button
                                                                    type="button"
                                                                    class="text-indigo-600 hover:text-indigo-800"
                                                                    on:click=move |_| {
                                                                        set_error.set(None);
                                                                        mutate.dispatch(UserMutation::Update(id, form_payload()));
                                                                    }
                                                                >
                                                                    "Update"
                                                                </button>
                                                                <button
                                                                    type="button"
                                                                    class="text-rose-600 hover:text-rose-800"
                                                                    on:click=move |_| {
                                                                        set_error.set(None);
                                                                        mutate.dispatch(UserMutation::Delete(id));
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        }.into_any()
                                    }
                                    Some(Err(err)) => {
                                        view! {
                                            <tr>
                                                <td colspan="3" class="px-4 py-4">
                                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                                </td>
                                            </tr>
                                        }.into_any()
                                    }
                                    None => view! {
                                        <tr>
                                            <td colspan="3" class="px-4 py-10 text-center">
                                                <Spinner />
                                            </td>
                                        </tr>
                                    }.into_any(),
                                }}
                            </Suspense>
                        </tbody>
                    </table>
                </div>
            </div>
        </AppShell>
    }
}
