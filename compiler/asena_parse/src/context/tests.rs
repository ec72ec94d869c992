use super::*;

#[test]
fn default_context() {
    let ctx = ParseContext::new();
    assert_eq!(ctx, ParseContext::NONE);
    assert!(ctx.allows_trailing_block());
    assert!(!ctx.in_type());
    assert!(!ctx.in_pattern());
    assert!(!ctx.pipe_is_separator());
}

#[test]
fn with_and_without() {
    let ctx = ParseContext::new()
        .with(ParseContext::IN_TYPE)
        .with(ParseContext::PIPE_IS_SEPARATOR);
    assert!(ctx.in_type());
    assert!(ctx.pipe_is_separator());

    let ctx = ctx.without(ParseContext::PIPE_IS_SEPARATOR);
    assert!(ctx.in_type());
    assert!(!ctx.pipe_is_separator());
}

#[test]
fn trailing_block_policy() {
    assert!(!ParseContext::IN_TYPE.allows_trailing_block());
    assert!(!ParseContext::NO_TRAILING_BLOCK.allows_trailing_block());
    assert!(ParseContext::IN_PATTERN.allows_trailing_block());
}

#[test]
fn nested_keeps_only_type_position() {
    let ctx = ParseContext::IN_TYPE
        .with(ParseContext::NO_TRAILING_BLOCK)
        .with(ParseContext::PIPE_IS_SEPARATOR);
    assert_eq!(ctx.nested(), ParseContext::IN_TYPE);
    assert_eq!(ParseContext::NO_TRAILING_BLOCK.nested(), ParseContext::NONE);
}
