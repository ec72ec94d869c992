//! Bounded token-only scans used to pick between derivations.
//!
//! These never build nodes or report errors. Bracket pairs are matched
//! once per token list in [`GroupMatches`], so a scan steps over a whole
//! group in one move and its cost is bounded by the depth-0 length of one
//! logical line.

use asena_ir::{TokenList, TokenTag};

/// Index of the closer matching each opener, built in one pass.
///
/// `(`, `[` and `{` all nest on one stack and any closer pops the
/// innermost opener. An opener that is never closed has no entry.
pub(crate) struct GroupMatches {
    closers: Vec<u32>,
}

impl GroupMatches {
    const UNMATCHED: u32 = u32::MAX;

    pub(crate) fn new(tokens: &TokenList) -> Self {
        let mut closers = vec![Self::UNMATCHED; tokens.len()];
        let mut open = Vec::new();
        for index in 0..tokens.len() {
            match tokens.tag(index) {
                TokenTag::LParen | TokenTag::LBracket | TokenTag::LBrace => open.push(index),
                TokenTag::RParen | TokenTag::RBracket | TokenTag::RBrace => {
                    if let Some(opener) = open.pop() {
                        closers[opener] = u32::try_from(index).unwrap_or(Self::UNMATCHED);
                    }
                }
                _ => {}
            }
        }
        GroupMatches { closers }
    }

    /// Index of the closer for the opener at `opener`.
    pub(crate) fn closer(&self, opener: usize) -> Option<usize> {
        match self.closers.get(opener) {
            Some(&index) if index != Self::UNMATCHED => Some(index as usize),
            _ => None,
        }
    }
}

/// Whether `target` occurs at bracket depth 0 between `pos` and the end
/// of the logical line.
///
/// Stops at a depth-0 line break, at end of input, at a group that is
/// never closed, and at a closer that has no opener after `pos`.
pub(crate) fn depth0_before_break(
    tokens: &TokenList,
    groups: &GroupMatches,
    pos: usize,
    target: TokenTag,
) -> bool {
    let mut index = pos;
    loop {
        let tag = tokens.tag(index);
        match tag {
            TokenTag::Eof | TokenTag::LineBreak => return false,
            TokenTag::LParen | TokenTag::LBracket | TokenTag::LBrace => {
                match groups.closer(index) {
                    Some(closer) => index = closer + 1,
                    None => return false,
                }
            }
            TokenTag::RParen | TokenTag::RBracket | TokenTag::RBrace => return false,
            _ if tag == target => return true,
            _ => index += 1,
        }
    }
}

/// Whether the group opened at `pos` is non-empty and its matching closer
/// is followed by `->`.
///
/// This is what tells `(x: A) -> B` from the tuple `(x)`. When
/// `skip_breaks` is set, line breaks between the closer and the arrow are
/// layout.
pub(crate) fn arrow_after_group(
    tokens: &TokenList,
    groups: &GroupMatches,
    pos: usize,
    skip_breaks: bool,
) -> bool {
    let closer = match tokens.tag(pos) {
        TokenTag::LParen => TokenTag::RParen,
        TokenTag::LBracket => TokenTag::RBracket,
        _ => return false,
    };
    if next_significant(tokens, pos + 1) == closer {
        return false;
    }
    let Some(index) = groups.closer(pos) else {
        return false;
    };
    let after = if skip_breaks {
        next_significant(tokens, index + 1)
    } else {
        tokens.tag(index + 1)
    };
    after == TokenTag::Arrow
}

/// Tag of the first token at or after `pos` that is not a line break.
fn next_significant(tokens: &TokenList, pos: usize) -> TokenTag {
    let mut index = pos;
    while tokens.tag(index) == TokenTag::LineBreak {
        index += 1;
    }
    tokens.tag(index)
}
