//! 한글 조합 엔진

pub mod compound;
pub mod converter;
pub mod edit;
pub mod hangul_fsm;
pub mod jamo_mapper;
pub mod text_buffer;
pub mod unicode;
