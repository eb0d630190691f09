use super::details::{CustomerDetails, CustomerDetailsViewModel};
use super::list::CustomerList;
use crate::domain::a001_customer::store::{self, use_customer_store};
use crate::shared::icons::icon;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Customers screen: form on top, table below. Editing a row loads it into the form.
#[component]
pub fn CustomerPage() -> impl IntoView {
    let store = use_customer_store();
    let vm = CustomerDetailsViewModel::new();

    let on_edit_customer = Callback::new(move |customer: Customer| vm.load(&customer));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    {icon("customers")}
                    <h1 class="header__title">{Customer::list_name()}</h1>
                    <span class="header__badge">
                        {move || store.customers.with(|list| list.len().to_string())}
                    </span>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        disabled=move || store.loading.get()
                        on:click=move |_| store::view_customers(store)
                    >
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || store.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <CustomerDetails vm=vm />
            <CustomerList on_edit_customer=on_edit_customer />
        </div>
    }
}
