use crate::domain::a001_customer::store::{self, CustomerStore};
use crate::shared::notification::{NotificationService, ToastOptions};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerId};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// Plain snapshot of the form, independent of signals
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub gender: String,
}

impl CustomerForm {
    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// First failing client-side check, if any
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name is required".to_string());
        }
        if self.phone.trim().is_empty() {
            return Err("Contact number is required".to_string());
        }
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err("Email address is not valid".to_string());
        }
        Ok(())
    }

    pub fn to_dto(&self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            gender: self.gender.trim().to_string(),
        }
    }
}

impl From<&Customer> for CustomerForm {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.id),
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            gender: c.gender.clone(),
        }
    }
}

/// ViewModel for the customer form
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub id: RwSignal<Option<CustomerId>>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            gender: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn snapshot(&self) -> CustomerForm {
        CustomerForm {
            id: self.id.get_untracked(),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            address: self.address.get_untracked(),
            gender: self.gender.get_untracked(),
        }
    }

    fn fill(&self, form: CustomerForm) {
        self.id.set(form.id);
        self.first_name.set(form.first_name);
        self.last_name.set(form.last_name);
        self.phone.set(form.phone);
        self.email.set(form.email);
        self.address.set(form.address);
        self.gender.set(form.gender);
        self.error.set(None);
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    /// Load a row picked for editing
    pub fn load(&self, customer: &Customer) {
        log::debug!("editing customer {}", customer.id);
        self.fill(CustomerForm::from(customer));
    }

    pub fn reset(&self) {
        self.fill(CustomerForm::default());
    }

    /// Validate and send to the server
    pub fn save_command(&self, store: CustomerStore, notifications: NotificationService) {
        let form = self.snapshot();
        if let Err(e) = form.validate() {
            self.error.set(Some(e));
            return;
        }

        let vm = *self;
        let was_edit = form.is_edit_mode();
        vm.saving.set(true);
        spawn_local(async move {
            match store::save_customer(store, form.to_dto()).await {
                Ok(_) => {
                    let message = if was_edit {
                        "Customer updated successfully!"
                    } else {
                        "Customer saved successfully!"
                    };
                    notifications.success(message, ToastOptions::default());
                    vm.reset();
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.saving.set(false);
        });
    }
}
