pub mod normalize_asm;
pub mod render;
