//! The generator facade: binds a token catalogue and extra rules into a ready-to-run [`Scanner`]
//! (spec section 4.5).

use crate::automata::dfa::dfa_of;
use crate::automata::nfa::{merge_nfas, nfa_of};
use crate::error::BuildError;
use crate::pattern::Pattern;
use crate::scanner::{Action, Scanner};

/// One entry of a token catalogue: a pattern and the action invoked when it wins the longest
/// match. A "pattern plus a constant token value" catalogue entry is just an `action` that ignores
/// its lexeme argument.
pub struct TokenRule<T> {
    pub pattern: Pattern,
    pub action: Action<T>,
}

impl<T> TokenRule<T> {
    pub fn new(pattern: Pattern, action: Action<T>) -> Self {
        TokenRule { pattern, action }
    }
}

/// Tunables for [`build_scanner`] that the spec leaves as an implementation choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorConfig {
    /// When `true`, more than one NFA accept state contributing to the same DFA subset is a fatal
    /// [`BuildError::AmbiguousAccept`] rather than just a logged warning. Default `false`, since
    /// the spec's documented tie-break (first-registered-rule wins) is itself well-defined
    /// behavior, not necessarily a bug.
    pub strict: bool,
}

/// Builds a [`Scanner<T>`] from a token catalogue plus extra `(pattern, action)` entries.
///
/// Binding order is catalogue entries in declaration order, followed by extras in declaration
/// order; this is also the tie-break order for ambiguous rules (earlier wins), since each entry's
/// NFA is merged in that same order and `merge_nfas` places earlier children at lower state
/// indices.
pub fn build_scanner<T>(
    config: GeneratorConfig,
    reject_action: Action<T>,
    catalogue: &[TokenRule<T>],
    extras: &[TokenRule<T>],
) -> Result<Scanner<T>, BuildError> {
    let mut nfas = Vec::with_capacity(catalogue.len() + extras.len());
    for rule in catalogue.iter().chain(extras.iter()) {
        let mut nfa = nfa_of(&rule.pattern);
        let accept = nfa.last();
        nfa.set_action(accept, rule.action);
        nfas.push(nfa);
    }
    log::debug!(
        "building scanner from {} catalogue entries + {} extras",
        catalogue.len(),
        extras.len()
    );
    let merged = merge_nfas(nfas);
    let dfa = dfa_of(&merged, config.strict)?;
    Ok(Scanner::from_dfa(&dfa, reject_action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Token {
        Error,
        Plus,
        Minus,
        DotDot,
        KwNot,
        KwIf,
        Ident,
        Int,
        Float,
    }

    fn reject(_: &[u8]) -> Token {
        Token::Error
    }
    fn plus(_: &[u8]) -> Token {
        Token::Plus
    }
    fn minus(_: &[u8]) -> Token {
        Token::Minus
    }
    fn dot_dot(_: &[u8]) -> Token {
        Token::DotDot
    }
    fn kw_not(_: &[u8]) -> Token {
        Token::KwNot
    }
    fn kw_if(_: &[u8]) -> Token {
        Token::KwIf
    }
    fn ident(_: &[u8]) -> Token {
        Token::Ident
    }
    fn int(_: &[u8]) -> Token {
        Token::Int
    }
    fn float(_: &[u8]) -> Token {
        Token::Float
    }

    fn build() -> Scanner<Token> {
        let digit = Pattern::digit;
        let exp = || {
            Pattern::concat([
                Pattern::alt([Pattern::byte(b'e'), Pattern::byte(b'E')]),
                Pattern::alt([Pattern::byte(b'+'), Pattern::byte(b'-')]).opt(),
                digit().many1(),
            ])
        };
        let float_pat = Pattern::concat([
            Pattern::byte(b'-').opt(),
            Pattern::alt([
                Pattern::concat([digit().many(), Pattern::byte(b'.'), digit().many1(), exp().opt()]),
                Pattern::concat([digit().many1(), exp()]),
            ]),
        ]);
        let int_pat = Pattern::concat([Pattern::byte(b'-').opt(), digit().many1()]);
        let ident_pat = Pattern::concat([
            Pattern::alt([Pattern::alpha(), Pattern::byte(b'_')]),
            Pattern::alt([Pattern::alnum(), Pattern::byte(b'_')]).many(),
        ]);

        let catalogue = vec![
            TokenRule::new(Pattern::byte(b'+'), plus as Action<Token>),
            TokenRule::new(Pattern::byte(b'-'), minus),
            TokenRule::new(Pattern::str(".."), dot_dot),
            TokenRule::new(Pattern::str("not"), kw_not),
            TokenRule::new(Pattern::str("if"), kw_if),
            TokenRule::new(ident_pat, ident),
            TokenRule::new(int_pat, int),
            TokenRule::new(float_pat, float),
        ];

        build_scanner(GeneratorConfig::default(), reject, &catalogue, &[]).unwrap()
    }

    fn scan_all(scanner: &Scanner<Token>, input: &[u8]) -> Token {
        let mut cursor = 0;
        scanner.scan(input, &mut cursor)
    }

    #[test]
    fn worked_scenario_from_the_token_catalogue() {
        let scanner = build();
        assert_eq!(scan_all(&scanner, b"+"), Token::Plus);
        assert_eq!(scan_all(&scanner, b".."), Token::DotDot);
        assert_eq!(scan_all(&scanner, b"not"), Token::KwNot);
        assert_eq!(scan_all(&scanner, b"notation"), Token::Ident);
        assert_eq!(scan_all(&scanner, b"iffy"), Token::Ident);
        assert_eq!(scan_all(&scanner, b"-23"), Token::Int);
        assert_eq!(scan_all(&scanner, b"-02.3"), Token::Float);
        assert_eq!(scan_all(&scanner, b"10E-3"), Token::Float);
        assert_eq!(scan_all(&scanner, b"?"), Token::Error);
    }

    #[test]
    fn extras_are_bound_after_the_catalogue() {
        fn semi(_: &[u8]) -> Token {
            Token::DotDot
        }
        let catalogue = vec![TokenRule::new(Pattern::byte(b'+'), plus as Action<Token>)];
        let extras = vec![TokenRule::new(Pattern::byte(b';'), semi)];
        let scanner =
            build_scanner(GeneratorConfig::default(), reject, &catalogue, &extras).unwrap();
        assert_eq!(scan_all(&scanner, b"+"), Token::Plus);
        assert_eq!(scan_all(&scanner, b";"), Token::DotDot);
    }

    #[test]
    fn strict_mode_rejects_ambiguous_catalogues() {
        let catalogue = vec![
            TokenRule::new(Pattern::byte(b'x'), plus as Action<Token>),
            TokenRule::new(Pattern::byte(b'x'), minus),
        ];
        let strict = GeneratorConfig { strict: true };
        assert!(build_scanner(strict, reject, &catalogue, &[]).is_err());
    }
}
