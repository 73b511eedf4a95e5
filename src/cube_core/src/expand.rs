use crate::{
    notation::{MoveToken, Primitive, Symbol},
    table::definition_for,
};

/// Expand a symbol turned `count` quarter turns into primitive turns.
/// Composite definitions are repeated as whole blocks.
pub fn expand_times(symbol: Symbol, count: usize) -> Vec<Primitive> {
    match (definition_for(symbol), symbol.as_primitive()) {
        (Some(definition), _) => definition.repeat(count),
        (None, Some(primitive)) => vec![primitive; count],
        // Every symbol is either primitive or has a definition
        (None, None) => Vec::new(),
    }
}

/// Expand a token into the primitive turns that realize it
pub fn expand(token: MoveToken) -> Vec<Primitive> {
    expand_times(token.symbol, token.quarter_turns())
}
