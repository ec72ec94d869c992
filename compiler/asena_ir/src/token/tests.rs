use super::*;
use crate::{Name, Span};
use pretty_assertions::assert_eq;

#[test]
fn tags_track_kinds() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Ident(Name::from_raw(1)), Span::new(0, 3)));
    list.push(Token::new(TokenKind::Arrow, Span::new(4, 6)));
    list.push(Token::new(TokenKind::Eof, Span::point(6)));

    assert_eq!(list.len(), 3);
    assert_eq!(list.tag(0), TokenTag::Ident);
    assert_eq!(list.tag(1), TokenTag::Arrow);
    assert_eq!(list.tag(2), TokenTag::Eof);
    assert_eq!(list.tag(99), TokenTag::Eof);
}

#[test]
fn all_tags_are_in_discriminant_order() {
    for (i, tag) in TokenTag::ALL.iter().enumerate() {
        assert_eq!(usize::from(tag.index()), i);
    }
}

#[test]
fn keywords_and_reserved_symbols() {
    assert_eq!(TokenKind::keyword("match"), Some(TokenKind::Match));
    assert_eq!(TokenKind::keyword("matches"), None);
    assert_eq!(TokenKind::reserved_symbol("<-"), Some(TokenKind::LeftArrow));
    assert_eq!(TokenKind::reserved_symbol("||"), None);
    assert_eq!(TokenKind::reserved_symbol(".."), Some(TokenKind::DotDot));
}

#[test]
fn suffix_prefers_longest_spelling() {
    assert_eq!(NumSuffix::longest_prefix_of("u128", true), Some(NumSuffix::U128));
    assert_eq!(NumSuffix::longest_prefix_of("u16x", true), Some(NumSuffix::U16));
    assert_eq!(NumSuffix::longest_prefix_of("u1", true), Some(NumSuffix::U1));
    assert_eq!(NumSuffix::longest_prefix_of("f32", false), None);
    assert_eq!(NumSuffix::longest_prefix_of("i32", true), None);
    assert_eq!(NumSuffix::longest_prefix_of("n", false), Some(NumSuffix::Nat));
}

#[test]
fn flags_adjacency() {
    let mut flags = TokenFlags::EMPTY;
    assert!(flags.is_adjacent());
    flags.set(TokenFlags::HAS_SEMICOLON);
    assert!(flags.is_adjacent());
    flags.set(TokenFlags::SPACE_BEFORE);
    assert!(!flags.is_adjacent());
    assert!(flags.contains(TokenFlags::SPACE_BEFORE));
}
