use serde::Deserialize;

/// Geographic coordinates, carried along but never shown
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Postal address of a user
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Employer of a user
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A single directory entry.
///
/// `id` is the row key and the merge key for edits, so it is the only
/// field that must be present in the payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
            username: String::new(),
            email: String::new(),
            address: Address::default(),
            phone: String::new(),
            website: String::new(),
            company: Company::default(),
        }
    }

    /// Cells shown in the table, in column order
    pub fn table_cells(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.username.clone(),
            self.email.clone(),
            self.address.city.clone(),
            self.address.zipcode.clone(),
            self.website.clone(),
            self.company.name.clone(),
        ]
    }
}

/// Column headers matching [`User::table_cells`]
pub const TABLE_HEADERS: [&str; 8] = [
    "ID", "Name", "Username", "Email", "City", "Zipcode", "Website", "Company",
];
