//! Topological gate scheduling.
//!
//! Orders gates so each is placed only after all gates producing its
//! inputs. The dependency graph is built explicitly and scheduled with a
//! Kahn-style pass; gates caught in dependency cycles (level-sensitive
//! storage wired as feedback) or depending on a bit nothing produces are
//! appended in their original order rather than failing. The degraded
//! mode is a named, testable outcome, not an incidental fallback.

use cinnabar_netlist::{Gate, Port, SignalBit};
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap, HashSet};

/// The result of scheduling: a full-length ordering of gate indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Every gate was ordered after its producers.
    Full(Vec<usize>),
    /// Some gates could not be resolved (feedback or missing producers);
    /// they appear at the end of `order` in their original relative order.
    PartialWithFeedback {
        /// The complete placement order, resolved gates first.
        order: Vec<usize>,
        /// The indices of the unresolved gates, in original order.
        unresolved: Vec<usize>,
    },
}

impl Schedule {
    /// The complete placement order (always full-length).
    pub fn order(&self) -> &[usize] {
        match self {
            Schedule::Full(order) => order,
            Schedule::PartialWithFeedback { order, .. } => order,
        }
    }

    /// The indices of gates that could not be topologically resolved.
    pub fn unresolved(&self) -> &[usize] {
        match self {
            Schedule::Full(_) => &[],
            Schedule::PartialWithFeedback { unresolved, .. } => unresolved,
        }
    }

    /// Returns `true` if every gate was resolved.
    pub fn is_full(&self) -> bool {
        matches!(self, Schedule::Full(_))
    }
}

/// Schedules gates against the declared input bits.
///
/// A gate is ready once every numeric input bit is either a declared
/// input or produced by an already-scheduled gate; symbolic bits are
/// always available. Among ready gates the one with the lowest original
/// index is scheduled first, so the order is deterministic and degrades
/// to input order for independent gates.
pub fn schedule_gates(gates: &[Gate], inputs: &[Port]) -> Schedule {
    let input_bits: HashSet<&SignalBit> = inputs.iter().map(|p| &p.bit).collect();

    // Later gates overwrite earlier producers of the same bit, matching
    // the last-writer-wins policy of the net-position map.
    let mut producer: HashMap<&SignalBit, usize> = HashMap::new();
    for (i, gate) in gates.iter().enumerate() {
        if let Some(out) = &gate.output {
            producer.insert(out, i);
        }
    }

    let mut graph = DiGraph::<usize, ()>::new();
    let nodes: Vec<_> = (0..gates.len()).map(|i| graph.add_node(i)).collect();
    // Gates consuming a bit that nothing produces can never become ready.
    let mut missing_dep = vec![false; gates.len()];

    for (i, gate) in gates.iter().enumerate() {
        for bit in &gate.inputs {
            if bit.is_symbolic() || input_bits.contains(bit) {
                continue;
            }
            match producer.get(bit) {
                Some(&p) => {
                    // A self-edge keeps a self-driving gate unresolved.
                    graph.add_edge(nodes[p], nodes[i], ());
                }
                None => missing_dep[i] = true,
            }
        }
    }

    let mut indegree: Vec<usize> = nodes
        .iter()
        .map(|&n| graph.edges_directed(n, Direction::Incoming).count())
        .collect();

    let mut ready: BTreeSet<usize> = (0..gates.len())
        .filter(|&i| indegree[i] == 0 && !missing_dep[i])
        .collect();

    let mut order = Vec::with_capacity(gates.len());
    let mut scheduled = vec![false; gates.len()];
    while let Some(&i) = ready.iter().next() {
        ready.remove(&i);
        scheduled[i] = true;
        order.push(i);
        let successors: Vec<usize> = graph
            .edges_directed(nodes[i], Direction::Outgoing)
            .map(|e| graph[e.target()])
            .collect();
        for j in successors {
            indegree[j] -= 1;
            if indegree[j] == 0 && !missing_dep[j] && !scheduled[j] {
                ready.insert(j);
            }
        }
    }

    let unresolved: Vec<usize> = (0..gates.len()).filter(|&i| !scheduled[i]).collect();
    if unresolved.is_empty() {
        Schedule::Full(order)
    } else {
        order.extend(&unresolved);
        Schedule::PartialWithFeedback { order, unresolved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(name: &str, bit: u32) -> Port {
        Port {
            name: name.into(),
            bit: bit.into(),
        }
    }

    fn gate(name: &str, inputs: Vec<SignalBit>, output: Option<u32>) -> Gate {
        Gate {
            name: name.into(),
            kind: "$_AND_".into(),
            inputs,
            output: output.map(SignalBit::Num),
        }
    }

    #[test]
    fn empty_gate_list() {
        let schedule = schedule_gates(&[], &[]);
        assert_eq!(schedule, Schedule::Full(vec![]));
    }

    #[test]
    fn chain_is_reordered() {
        // Gate 0 consumes what gate 1 produces
        let gates = vec![
            gate("g0", vec![5.into()], Some(6)),
            gate("g1", vec![1.into()], Some(5)),
        ];
        let inputs = vec![port("a", 1)];
        let schedule = schedule_gates(&gates, &inputs);
        assert!(schedule.is_full());
        assert_eq!(schedule.order(), &[1, 0]);
    }

    #[test]
    fn independent_gates_keep_input_order() {
        let gates = vec![
            gate("g0", vec![1.into()], Some(10)),
            gate("g1", vec![2.into()], Some(11)),
            gate("g2", vec![1.into(), 2.into()], Some(12)),
        ];
        let inputs = vec![port("a", 1), port("b", 2)];
        let schedule = schedule_gates(&gates, &inputs);
        assert_eq!(schedule.order(), &[0, 1, 2]);
    }

    #[test]
    fn diamond_dependencies() {
        //   1 -> g0 -> 5 -> g2 -> 7
        //   1 -> g1 -> 6 -> g2
        let gates = vec![
            gate("join", vec![5.into(), 6.into()], Some(7)),
            gate("left", vec![1.into()], Some(5)),
            gate("right", vec![1.into()], Some(6)),
        ];
        let inputs = vec![port("a", 1)];
        let schedule = schedule_gates(&gates, &inputs);
        assert!(schedule.is_full());
        assert_eq!(schedule.order(), &[1, 2, 0]);
    }

    #[test]
    fn symbolic_bits_always_available() {
        let gates = vec![gate("tie", vec![SignalBit::Sym("1".into())], Some(5))];
        let schedule = schedule_gates(&gates, &[]);
        assert!(schedule.is_full());
        assert_eq!(schedule.order(), &[0]);
    }

    #[test]
    fn cycle_degrades_to_input_order() {
        // Cross-coupled pair: each consumes the other's output
        let gates = vec![
            gate("g0", vec![1.into(), 6.into()], Some(5)),
            gate("g1", vec![2.into(), 5.into()], Some(6)),
        ];
        let inputs = vec![port("s", 1), port("r", 2)];
        let schedule = schedule_gates(&gates, &inputs);
        assert!(!schedule.is_full());
        assert_eq!(schedule.order(), &[0, 1]);
        assert_eq!(schedule.unresolved(), &[0, 1]);
    }

    #[test]
    fn cycle_after_resolvable_prefix() {
        let gates = vec![
            gate("a", vec![1.into()], Some(5)),
            gate("loop0", vec![5.into(), 8.into()], Some(7)),
            gate("loop1", vec![7.into()], Some(8)),
            gate("b", vec![5.into()], Some(9)),
        ];
        let inputs = vec![port("x", 1)];
        let schedule = schedule_gates(&gates, &inputs);
        assert!(!schedule.is_full());
        // Resolved gates first, feedback pair flushed at the end
        assert_eq!(schedule.order(), &[0, 3, 1, 2]);
        assert_eq!(schedule.unresolved(), &[1, 2]);
    }

    #[test]
    fn self_driving_gate_is_unresolved() {
        let gates = vec![gate("osc", vec![5.into()], Some(5))];
        let schedule = schedule_gates(&gates, &[]);
        assert!(!schedule.is_full());
        assert_eq!(schedule.order(), &[0]);
    }

    #[test]
    fn missing_producer_is_unresolved() {
        let gates = vec![
            gate("dangling", vec![99.into()], Some(5)),
            gate("fine", vec![1.into()], Some(6)),
        ];
        let inputs = vec![port("a", 1)];
        let schedule = schedule_gates(&gates, &inputs);
        assert!(!schedule.is_full());
        assert_eq!(schedule.order(), &[1, 0]);
        assert_eq!(schedule.unresolved(), &[0]);
    }

    #[test]
    fn full_length_invariant() {
        let gates = vec![
            gate("g0", vec![5.into()], Some(5)),
            gate("g1", vec![1.into()], Some(6)),
            gate("g2", vec![42.into()], None),
        ];
        let inputs = vec![port("a", 1)];
        let schedule = schedule_gates(&gates, &inputs);
        assert_eq!(schedule.order().len(), gates.len());
        let mut seen: Vec<_> = schedule.order().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
