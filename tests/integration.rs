use anyhow::Result;
use quickcheck::quickcheck;
use thompson_regex::{accepts, build_automaton, minimize, parse, Matcher, ParseError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn pipeline_accepts_per_line() -> Result<()> {
    init_logging();

    // a caller compiles one pattern and tests a batch of candidate lines
    let tree = parse("(a|b)*abb")?;
    let automaton = build_automaton(&tree);

    let lines = ["abb", "aababb", "babb", "ab", "abba", ""];
    let results: Vec<bool> = lines.iter().map(|l| accepts(&automaton, l)).collect();

    assert_eq!(results, vec![true, true, true, false, false, false]);
    Ok(())
}

#[test]
fn pipeline_reports_parse_errors() {
    init_logging();

    assert_eq!(parse("(a").unwrap_err(), ParseError::UnmatchedParenthesis);
    assert_eq!(parse("*a").unwrap_err(), ParseError::DanglingStar);
    assert_eq!(parse("a|").unwrap_err(), ParseError::DanglingUnion);
    assert_eq!(parse("a.b").unwrap_err(), ParseError::ReservedDot);
}

#[test]
fn automata_are_shareable_for_simulation() -> Result<()> {
    init_logging();

    // read-only sharing across threads is sound: simulation never mutates
    let automaton = build_automaton(&parse("(ab)*c")?);

    std::thread::scope(|scope| {
        let accept = scope.spawn(|| Matcher::new(&automaton).accepts("ababc"));
        let reject = scope.spawn(|| Matcher::new(&automaton).accepts("abab"));
        assert!(accept.join().unwrap());
        assert!(!reject.join().unwrap());
    });
    Ok(())
}

#[test]
fn minimization_of_a_dfa_preserves_the_language() -> Result<()> {
    init_logging();

    // hand-built DFA for a*b with a redundant clone of the start state
    let mut dfa = thompson_regex::Automaton::new();
    let s0 = dfa.add_state(false);
    let s1 = dfa.add_state(true);
    let s2 = dfa.add_state(false);
    dfa.add_transition(s0, s0, Some('a'));
    dfa.add_transition(s0, s1, Some('b'));
    dfa.add_transition(s2, s2, Some('a'));
    dfa.add_transition(s2, s1, Some('b'));
    dfa.start = s0;
    dfa.accept = s1;

    let minimized = minimize(&dfa);
    assert_eq!(minimized.states.len(), 2);

    for input in ["b", "ab", "aaab", "", "a", "ba", "abb"] {
        assert_eq!(
            accepts(&dfa, input),
            accepts(&minimized, input),
            "language changed on {:?}",
            input
        );
    }
    Ok(())
}

quickcheck! {
    /// A literal-only pattern accepts exactly itself: never a mutation of
    /// one character, never an extension by one character.
    fn literal_pattern_accepts_only_itself(input: String) -> bool {
        let word: String = input
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(8)
            .collect();
        if word.is_empty() {
            return true;
        }

        let automaton = build_automaton(&parse(&word).unwrap());

        let mut extended = word.clone();
        extended.push('x');
        let mut mutated: Vec<char> = word.chars().collect();
        mutated[0] = if mutated[0] == '~' { '!' } else { '~' };
        let mutated: String = mutated.into_iter().collect();

        accepts(&automaton, &word)
            && !accepts(&automaton, &extended)
            && !accepts(&automaton, &mutated)
    }
}
