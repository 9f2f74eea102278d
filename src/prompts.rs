/// System instruction sent ahead of every user prompt.
pub const HAIKU_SYSTEM: &str = include_str!("../data/prompts/haiku_system.txt");
