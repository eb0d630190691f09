mod state;

pub use state::{table_body, CustomerRow, DeleteConfirmation, TableBody};

use crate::domain::a001_customer::store::{self, use_customer_store};
use crate::shared::confirm_dialog::ConfirmationModal;
use crate::shared::icons::icon;
use crate::shared::notification::{use_notifications, ToastOptions, ToastPosition};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
use leptos::prelude::*;
use state::{COLUMN_TITLES, DELETE_MESSAGE, DELETE_SUCCESS, DELETE_TITLE, EMPTY_PLACEHOLDER};

/// Dialog confirmed: at most one removal and one success toast per request.
pub fn confirm_delete(
    confirmation: RwSignal<DeleteConfirmation>,
    mut delete: impl FnMut(CustomerId),
    mut notify: impl FnMut(),
) -> Option<CustomerId> {
    let mut target = None;
    confirmation.update(|c| target = c.confirm());
    if let Some(id) = target {
        delete(id);
        notify();
    }
    target
}

pub fn cancel_delete(confirmation: RwSignal<DeleteConfirmation>) {
    confirmation.update(|c| c.cancel());
}

/// Edit only hands the row's record to the parent
pub fn edit_customer(on_edit_customer: Callback<Customer>, record: &Customer) {
    on_edit_customer.run(record.clone());
}

/// Table of all customers with per-row Edit / Delete.
///
/// Reads the shared `CustomerStore`; refreshes it once on mount. Edit is
/// delegated to the parent, delete goes through a confirmation dialog.
#[component]
#[allow(non_snake_case)]
pub fn CustomerList(#[prop(into)] on_edit_customer: Callback<Customer>) -> impl IntoView {
    let store = use_customer_store();
    let notifications = use_notifications();
    let confirmation = RwSignal::new(DeleteConfirmation::default());

    store::view_customers(store);

    let open_delete_modal = move |id: CustomerId| {
        confirmation.update(|c| c.request(id));
    };

    let handle_confirm_delete = Callback::new(move |_: ()| {
        confirm_delete(
            confirmation,
            |id| store::delete_customer(store, id),
            || {
                notifications.success(
                    DELETE_SUCCESS,
                    ToastOptions::default()
                        .with_position(ToastPosition::BottomRight)
                        .with_auto_close(2000),
                )
            },
        );
    });

    let handle_cancel_delete = Callback::new(move |_: ()| cancel_delete(confirmation));

    let render_row = move |row: CustomerRow| {
        let CustomerRow { id, cells, record } = row;
        let [id_cell, first, last, phone, email, address, gender] = cells;
        view! {
            <tr class="table__row">
                <td class="table__cell">{id_cell}</td>
                <td class="table__cell">{first}</td>
                <td class="table__cell">{last}</td>
                <td class="table__cell">{phone}</td>
                <td class="table__cell">{email}</td>
                <td class="table__cell">{address}</td>
                <td class="table__cell">{gender}</td>
                <td class="table__cell table__cell--actions">
                    <div class="table__actions">
                        <button
                            class="button button--primary button--small"
                            on:click=move |_| edit_customer(on_edit_customer, &record)
                        >
                            {icon("edit")}
                            "Edit"
                        </button>
                        <button
                            class="button button--danger button--small"
                            on:click=move |_| open_delete_modal(id)
                        >
                            {icon("delete")}
                            "Delete"
                        </button>
                    </div>
                </td>
            </tr>
        }
    };

    view! {
        <ConfirmationModal
            is_open=Signal::derive(move || confirmation.with(|c| c.is_open()))
            title=DELETE_TITLE
            message=DELETE_MESSAGE
            confirm_label="Delete"
            on_confirm=handle_confirm_delete
            on_cancel=handle_cancel_delete
        />

        <div class="table table--scroll">
            <table class="table__data table--striped">
                <thead class="table__head table__head--sticky">
                    <tr>
                        {COLUMN_TITLES
                            .iter()
                            .map(|title| view! { <th class="table__header-cell">{*title}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || match store.customers.with(|list| table_body(list)) {
                        TableBody::Placeholder => view! {
                            <tr class="table__row table__row--empty">
                                <td class="table__cell table__cell--placeholder" colspan={COLUMN_TITLES.len().to_string()}>
                                    {EMPTY_PLACEHOLDER}
                                </td>
                            </tr>
                        }
                        .into_any(),
                        TableBody::Rows(rows) => rows
                            .into_iter()
                            .map(render_row)
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::store::CustomerStore;
    use leptos::reactive::owner::Owner;
    use std::sync::{Arc, Mutex};

    fn customer(id: i64, first: &str) -> Customer {
        Customer {
            id: CustomerId(id),
            first_name: first.into(),
            last_name: "Perera".into(),
            phone: "0771234567".into(),
            email: String::new(),
            address: String::new(),
            gender: String::new(),
        }
    }

    #[test]
    fn test_confirm_deletes_the_candidate_once_and_notifies() {
        let owner = Owner::new();
        owner.with(|| {
            let confirmation = RwSignal::new(DeleteConfirmation::default());
            let mut deleted = Vec::new();
            let mut toasts = 0;

            confirmation.update(|c| c.request(CustomerId(4)));
            let target = confirm_delete(confirmation, |id| deleted.push(id), || toasts += 1);

            assert_eq!(target, Some(CustomerId(4)));
            assert_eq!(deleted, vec![CustomerId(4)]);
            assert_eq!(toasts, 1);
            assert!(!confirmation.get_untracked().is_open());
        });
    }

    #[test]
    fn test_second_confirm_sends_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let confirmation = RwSignal::new(DeleteConfirmation::default());
            let mut deleted = Vec::new();
            let mut toasts = 0;

            confirmation.update(|c| c.request(CustomerId(0)));
            confirm_delete(confirmation, |id| deleted.push(id), || toasts += 1);
            let again = confirm_delete(confirmation, |id| deleted.push(id), || toasts += 1);

            assert_eq!(again, None);
            assert_eq!(deleted, vec![CustomerId(0)]);
            assert_eq!(toasts, 1);
        });
    }

    #[test]
    fn test_cancel_sends_no_request() {
        let owner = Owner::new();
        owner.with(|| {
            let confirmation = RwSignal::new(DeleteConfirmation::default());
            let mut deleted = Vec::new();
            let mut toasts = 0;

            confirmation.update(|c| c.request(CustomerId(9)));
            cancel_delete(confirmation);
            assert!(!confirmation.get_untracked().is_open());

            let target = confirm_delete(confirmation, |id| deleted.push(id), || toasts += 1);
            assert_eq!(target, None);
            assert!(deleted.is_empty());
            assert_eq!(toasts, 0);
        });
    }

    #[test]
    fn test_edit_passes_the_record_and_changes_no_state() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CustomerStore::new();
            let list = vec![customer(1, "Ann"), customer(3, "Kasun")];
            store.customers.set(list.clone());

            let confirmation = RwSignal::new(DeleteConfirmation::default());
            confirmation.update(|c| c.request(CustomerId(1)));
            let pending = confirmation.get_untracked();

            let received = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&received);
            let on_edit = Callback::new(move |c: Customer| sink.lock().unwrap().push(c));

            edit_customer(on_edit, &list[1]);

            assert_eq!(*received.lock().unwrap(), vec![customer(3, "Kasun")]);
            assert_eq!(store.customers.get_untracked(), list);
            assert_eq!(confirmation.get_untracked(), pending);
        });
    }
}
