// Shared prompt fragments. Each feature module keeps its own prompts.rs
// alongside it; only cross-cutting pieces live here.

/// Appended to feature system prompts that expect a bare JSON reply.
pub const JSON_ONLY_SYSTEM: &str =
    "You must respond with valid JSON only, following the exact structure provided.";
