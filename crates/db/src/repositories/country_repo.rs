use axelin_core::types::DbId;
use axelin_postgrest::Resource;

use crate::models::country::{Country, CreateCountry, UpdateCountry};

/// The `countries` table; plain CRUD only.
pub struct CountryRepo;

impl Resource for CountryRepo {
    const TABLE: &'static str = "countries";
    const ENTITY: &'static str = "Country";
    type Id = DbId;
    type Row = Country;
    type Create = CreateCountry;
    type Update = UpdateCountry;
}
