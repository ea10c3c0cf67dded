//! Benchmarks for the construction stages of the pipeline: pattern -> NFA -> DFA.

use criterion::{criterion_group, criterion_main, Criterion};

use flexcore::automata::dfa::dfa_of;
use flexcore::automata::nfa::{merge_nfas, nfa_of};
use flexcore::Pattern;

fn pattern_range() -> Pattern {
    Pattern::range(b'a', b'z')
}

fn pattern_or() -> Pattern {
    Pattern::alt([Pattern::byte(b'a'), Pattern::byte(b'b'), Pattern::byte(b'c')])
}

fn pattern_seq() -> Pattern {
    Pattern::str("hello")
}

fn pattern_many() -> Pattern {
    Pattern::range(b'a', b'z').many()
}

fn complex_rules() -> Vec<Pattern> {
    let digit = Pattern::digit;
    let ident = Pattern::concat([
        Pattern::alt([Pattern::alpha(), Pattern::byte(b'_')]),
        Pattern::alt([Pattern::alnum(), Pattern::byte(b'_')]).many(),
    ]);
    let int = Pattern::concat([Pattern::byte(b'-').opt(), digit().many1()]);
    vec![
        Pattern::byte(b'+'),
        Pattern::byte(b'-'),
        Pattern::str(".."),
        Pattern::str("not"),
        Pattern::str("if"),
        ident,
        int,
    ]
}

fn bench_nfa_construction(c: &mut Criterion) {
    c.bench_function("nfa_of/range", |b| b.iter(|| nfa_of::<u8>(&pattern_range())));
    c.bench_function("nfa_of/or", |b| b.iter(|| nfa_of::<u8>(&pattern_or())));
    c.bench_function("nfa_of/seq", |b| b.iter(|| nfa_of::<u8>(&pattern_seq())));
    c.bench_function("nfa_of/many", |b| b.iter(|| nfa_of::<u8>(&pattern_many())));
}

fn bench_dfa_construction(c: &mut Criterion) {
    c.bench_function("dfa_of/range", |b| {
        let nfa: flexcore::automata::nfa::Nfa<u8> = nfa_of(&pattern_range());
        b.iter(|| dfa_of(&nfa, false).unwrap())
    });
    c.bench_function("dfa_of/complex_rules", |b| {
        let nfas: Vec<_> = complex_rules()
            .iter()
            .map(|p| {
                let mut nfa: flexcore::automata::nfa::Nfa<u8> = nfa_of(p);
                let last = nfa.last();
                nfa.set_action(last, 1u8);
                nfa
            })
            .collect();
        let merged = merge_nfas(nfas);
        b.iter(|| dfa_of(&merged, false).unwrap())
    });
}

criterion_group!(benches, bench_nfa_construction, bench_dfa_construction);
criterion_main!(benches);
