//! Two-stage phonetic conversion: script → phonetic pivot → script.
//!
//! Both stages run the same consume/emit loop over a read cursor: the first
//! rule matching the whole remaining input emits its replacement and advances
//! the cursor by its consume length; when nothing matches, one character is
//! copied verbatim. Every iteration advances by at least one character.

mod decode;
mod encode;

pub use decode::{decode, decode_with};
pub use encode::{encode, encode_with};

/// Word boundary marker wrapped around every encoded word.
pub const BOUNDARY: char = '#';

/// One iteration of the consume/emit loop, as seen by an observer.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    /// Input left before this step.
    pub remaining: &'a [char],
    /// Pattern of the rule that fired, `None` for a verbatim copy.
    pub pattern: Option<&'a str>,
    /// Text appended to the output, `None` when the rule elides.
    pub emitted: Option<&'a str>,
    /// Whether the glue segment was inserted before `emitted`.
    pub glued: bool,
    pub consumed: usize,
}
