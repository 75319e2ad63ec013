use crate::nfa::{Automaton, StateId};
use log::debug;

/// One refinement signature entry: a transition label and the partition its
/// target currently lives in.
type Signature = Vec<(Option<char>, usize)>;

/// Minimize an automaton by Moore partition refinement, producing a fresh
/// automaton; the input is left untouched.
///
/// States are first split by their `accepting` flag, then every partition is
/// repeatedly split by transition signature (label plus target partition,
/// over all outgoing transitions) until a round changes nothing. The output
/// has one state per partition, flagged accepting iff any member was, with
/// the transitions of a single representative member retargeted through the
/// partition map.
///
/// The representative copy makes this sound for deterministic automata: in
/// an automaton with several transitions per label per state, other members
/// of a partition may carry edges the representative lacks.
pub fn minimize(automaton: &Automaton) -> Automaton {
    let mut partitions: Vec<Vec<StateId>> = vec![
        (0..automaton.states.len())
            .filter(|&s| automaton.states[s].accepting)
            .collect(),
        (0..automaton.states.len())
            .filter(|&s| !automaton.states[s].accepting)
            .collect(),
    ];

    loop {
        let mut next: Vec<Vec<StateId>> = Vec::new();
        let mut changed = false;

        for partition in &partitions {
            let mut groups: Vec<(Signature, Vec<StateId>)> = Vec::new();

            for &state in partition {
                let key = signature(automaton, state, &partitions);
                match groups.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, members)) => members.push(state),
                    None => groups.push((key, vec![state])),
                }
            }

            if groups.len() > 1 {
                changed = true;
            }
            for (_, members) in groups {
                next.push(members);
            }
        }

        partitions = next;
        debug!("refinement round left {} partitions", partitions.len());
        if !changed {
            break;
        }
    }

    let mut minimized = Automaton::new();
    for partition in &partitions {
        let accepting = partition.iter().any(|&s| automaton.states[s].accepting);
        minimized.add_state(accepting);
    }

    for (index, partition) in partitions.iter().enumerate() {
        let representative = partition[0];
        for transition in &automaton.transitions {
            if transition.from == representative {
                let target = partition_index(&partitions, transition.to);
                minimized.add_transition(index, target, transition.symbol);
            }
        }
    }

    minimized.start = partition_index(&partitions, automaton.start);
    minimized.accept = partition_index(&partitions, automaton.accept);
    minimized
}

/// The refinement signature of a state: for every outgoing transition, in
/// transition-list order, its label and the current partition of its target.
/// Two states are indistinguishable this round iff their signatures match.
fn signature(automaton: &Automaton, state: StateId, partitions: &[Vec<StateId>]) -> Signature {
    automaton
        .transitions
        .iter()
        .filter(|t| t.from == state)
        .map(|t| (t.symbol, partition_index(partitions, t.to)))
        .collect()
}

/// The index of the partition holding `state`. The partitions cover the
/// whole state set, so a miss is a contract violation.
fn partition_index(partitions: &[Vec<StateId>], state: StateId) -> usize {
    partitions
        .iter()
        .position(|p| p.contains(&state))
        .expect("state missing from partition cover")
}
