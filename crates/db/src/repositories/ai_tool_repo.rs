use axelin_core::types::DbId;
use axelin_postgrest::Resource;

use crate::models::ai_tool::{AiTool, CreateAiTool, UpdateAiTool};

/// The `ai_tools` table; plain CRUD only.
pub struct AiToolRepo;

impl Resource for AiToolRepo {
    const TABLE: &'static str = "ai_tools";
    const ENTITY: &'static str = "AI tool";
    type Id = DbId;
    type Row = AiTool;
    type Create = CreateAiTool;
    type Update = UpdateAiTool;
}
