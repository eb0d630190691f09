use super::view_model::{CustomerDetailsViewModel, GENDERS};
use crate::domain::a001_customer::store::use_customer_store;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input};

/// Create / edit form. The parent owns the view model so the list's edit
/// action can load a record into it.
#[component]
pub fn CustomerDetails(vm: CustomerDetailsViewModel) -> impl IntoView {
    let store = use_customer_store();
    let notifications = use_notifications();

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() {
                        match vm.id.get() {
                            Some(id) => format!("Edit Customer #{}", id),
                            None => "Edit Customer".to_string(),
                        }
                    } else {
                        "New Customer".to_string()
                    }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="details-form details-form--grid">
                <div class="form-group">
                    <label>{"First Name"}</label>
                    <Input value=vm.first_name placeholder="Enter first name" />
                </div>

                <div class="form-group">
                    <label>{"Last Name"}</label>
                    <Input value=vm.last_name placeholder="Enter last name" />
                </div>

                <div class="form-group">
                    <label>{"Contact"}</label>
                    <Input value=vm.phone placeholder="Phone number" />
                </div>

                <div class="form-group">
                    <label>{"Email"}</label>
                    <Input value=vm.email placeholder="name@example.com" />
                </div>

                <div class="form-group form-group--wide">
                    <label>{"Address"}</label>
                    <Input value=vm.address placeholder="Street, city" />
                </div>

                <div class="form-group">
                    <label for="customer-gender">{"Gender"}</label>
                    <select
                        id="customer-gender"
                        class="form-select"
                        prop:value=move || vm.gender.get()
                        on:change=move |ev| vm.gender.set(event_target_value(&ev))
                    >
                        <option value="">{"-- Select --"}</option>
                        {GENDERS
                            .iter()
                            .map(|g| view! { <option value=*g>{*g}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(store, notifications)
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update" } else { "Save" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.reset()
                >
                    {icon("cancel")}
                    {"Clear"}
                </Button>
            </div>
        </div>
    }
}
