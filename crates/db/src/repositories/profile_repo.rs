use axelin_core::types::EntityUuid;
use axelin_postgrest::Resource;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

/// The `profiles` table; plain CRUD only.
pub struct ProfileRepo;

impl Resource for ProfileRepo {
    const TABLE: &'static str = "profiles";
    const ENTITY: &'static str = "Profile";
    type Id = EntityUuid;
    type Row = Profile;
    type Create = CreateProfile;
    type Update = UpdateProfile;
}
