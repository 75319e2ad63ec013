use thompson_regex::{accepts, build_automaton, minimize, parse, Automaton};

fn main() {
    println!("Thompson NFA Regex Engine - Pipeline Demo");
    println!("=========================================");

    // Patterns paired with candidate lines, exercising each operator,
    // precedence, grouping, nested stars, and the parse error paths.
    let cases = vec![
        ("abc", vec!["abc", "ab", "abcd"]),
        ("a*", vec!["", "a", "aaaa", "b", "ab"]),
        ("a|b", vec!["a", "b", "ab", ""]),
        ("ab|c", vec!["ab", "c", "abc"]),
        ("(a|b)c", vec!["ac", "bc", "abc"]),
        ("(a*)*", vec!["", "aaaa", "ab"]),
        ("(a|b)*abb", vec!["abb", "aababb", "ba"]),
        ("(a", vec![]),
        ("*a", vec![]),
        ("a|", vec![]),
        ("a.b", vec![]),
    ];

    for (pattern, lines) in cases {
        println!("\n=== Pattern: {:?} ===", pattern);

        let tree = match parse(pattern) {
            Ok(tree) => tree,
            Err(e) => {
                println!("Parse error: {}", e);
                continue;
            }
        };
        println!("Tree: {:?}", tree);

        let automaton = build_automaton(&tree);
        print_automaton(&automaton);

        for line in lines {
            println!("  {:?} -> {}", line, accepts(&automaton, line));
        }
    }

    demonstrate_minimization();
}

fn print_automaton(automaton: &Automaton) {
    println!(
        "Automaton: {} states, start {}, accept {}",
        automaton.states.len(),
        automaton.start,
        automaton.accept
    );

    for (id, state) in automaton.states.iter().enumerate() {
        let flag = if state.accepting { " (accepting)" } else { "" };
        println!("  {}{}:", id, flag);
        for transition in automaton.transitions.iter().filter(|t| t.from == id) {
            match transition.symbol {
                Some(symbol) => println!("    '{}' -> {}", symbol, transition.to),
                None => println!("    ε -> {}", transition.to),
            }
        }
    }
}

fn demonstrate_minimization() {
    println!("\n=== Minimization (manual DFA construction) ===");

    // DFA accepting "ab", with a redundant second path through states 3/4
    let mut dfa = Automaton::new();
    let s0 = dfa.add_state(false);
    let s1 = dfa.add_state(false);
    let s2 = dfa.add_state(true);
    let s3 = dfa.add_state(false);
    let s4 = dfa.add_state(false);
    dfa.add_transition(s0, s1, Some('a'));
    dfa.add_transition(s1, s2, Some('b'));
    dfa.add_transition(s3, s4, Some('a'));
    dfa.add_transition(s4, s2, Some('b'));
    dfa.start = s0;
    dfa.accept = s2;

    println!("\n--- Before ---");
    print_automaton(&dfa);

    let minimized = minimize(&dfa);
    println!("\n--- After ---");
    print_automaton(&minimized);

    for line in ["ab", "a", "abb"] {
        println!("  {:?} -> {}", line, accepts(&minimized, line));
    }
}
