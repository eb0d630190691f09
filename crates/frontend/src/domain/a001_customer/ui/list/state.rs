use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};

pub const COLUMN_TITLES: [&str; 8] = [
    "Id",
    "First Name",
    "Last Name",
    "Contact",
    "Email",
    "Address",
    "Gender",
    "Actions",
];

pub const EMPTY_PLACEHOLDER: &str = "No customers available.";

pub const DELETE_TITLE: &str = "Confirm Deletion";
pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this customer?";
pub const DELETE_SUCCESS: &str = "Customer deleted successfully!";

/// Pending delete: which customer was picked and whether the dialog is up.
///
/// A candidate of `Some(CustomerId(0))` is a real candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    candidate: Option<CustomerId>,
    open: bool,
}

impl DeleteConfirmation {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn candidate(&self) -> Option<CustomerId> {
        self.candidate
    }

    /// Delete clicked on a row: remember the id and open the dialog
    pub fn request(&mut self, id: CustomerId) {
        self.candidate = Some(id);
        self.open = true;
    }

    /// Dialog confirmed: hands out the candidate exactly once and resets
    pub fn confirm(&mut self) -> Option<CustomerId> {
        self.open = false;
        self.candidate.take()
    }

    /// Dialog dismissed: reset without side effects
    pub fn cancel(&mut self) {
        self.open = false;
        self.candidate = None;
    }
}

/// One rendered table row: display cells plus the record handed to the edit callback
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRow {
    pub id: CustomerId,
    pub cells: [String; 7],
    pub record: Customer,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            cells: [
                c.id.to_string(),
                c.first_name.clone(),
                c.last_name.clone(),
                c.phone.clone(),
                c.email.clone(),
                c.address.clone(),
                c.gender.clone(),
            ],
            record: c.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableBody {
    /// Single row spanning every column
    Placeholder,
    Rows(Vec<CustomerRow>),
}

pub fn table_body(customers: &[Customer]) -> TableBody {
    if customers.is_empty() {
        TableBody::Placeholder
    } else {
        TableBody::Rows(customers.iter().map(CustomerRow::from).collect())
    }
}
