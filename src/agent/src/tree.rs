//! Decision tree over two categorical move features.
//!
//! Nodes split on `features[f] <= pivot` using the move ordering
//! Rock < Paper < Scissors and pick the split with the lowest weighted Gini
//! impurity. Growth is unbounded: a node becomes a leaf only when it is pure
//! or no split separates its examples. Ties go to the first candidate
//! (feature 0 before feature 1, lower pivot first) and leaves vote for the
//! lowest move among equally common labels, so fitting is deterministic.

use common::model::game::Move;

pub type Features = [Move; 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub features: Features,
    pub label: Move,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf(Move),
    Split {
        feature: usize,
        pivot: Move,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Returns `None` for an empty training set.
    pub fn fit(examples: &[Example]) -> Option<Self> {
        if examples.is_empty() {
            return None;
        }
        let examples: Vec<&Example> = examples.iter().collect();
        Some(DecisionTree {
            root: grow(&examples),
        })
    }

    pub fn predict(&self, features: Features) -> Move {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(label) => return *label,
                Node::Split {
                    feature,
                    pivot,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *pivot {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        fn depth(node: &Node) -> usize {
            match node {
                Node::Leaf(_) => 0,
                Node::Split { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        depth(&self.root)
    }
}

fn counts(examples: &[&Example]) -> [usize; 3] {
    let mut counts = [0; 3];
    for example in examples {
        counts[example.label.index()] += 1;
    }
    counts
}

fn gini(examples: &[&Example]) -> f64 {
    let total = examples.len() as f64;
    1.0 - counts(examples)
        .iter()
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>()
}

fn majority(examples: &[&Example]) -> Move {
    let counts = counts(examples);
    let mut best = 0;
    for i in 1..counts.len() {
        if counts[i] > counts[best] {
            best = i;
        }
    }
    Move::from_index(best)
}

struct Candidate<'a> {
    feature: usize,
    pivot: Move,
    impurity: f64,
    left: Vec<&'a Example>,
    right: Vec<&'a Example>,
}

fn grow(examples: &[&Example]) -> Node {
    if counts(examples).iter().filter(|&&c| c > 0).count() == 1 {
        return Node::Leaf(examples[0].label);
    }

    let total = examples.len() as f64;
    let mut best: Option<Candidate> = None;
    for feature in 0..2 {
        // Every observed value except the largest is a pivot that leaves both sides non-empty.
        let mut values: Vec<Move> = examples.iter().map(|e| e.features[feature]).collect();
        values.sort();
        values.dedup();
        for &pivot in values.iter().take(values.len().saturating_sub(1)) {
            let (left, right): (Vec<&Example>, Vec<&Example>) = examples
                .iter()
                .copied()
                .partition(|e| e.features[feature] <= pivot);
            let impurity = (left.len() as f64 * gini(&left) + right.len() as f64 * gini(&right))
                / total;
            if best.as_ref().is_none_or(|b| impurity < b.impurity) {
                best = Some(Candidate {
                    feature,
                    pivot,
                    impurity,
                    left,
                    right,
                });
            }
        }
    }

    match best {
        None => Node::Leaf(majority(examples)),
        Some(candidate) => Node::Split {
            feature: candidate.feature,
            pivot: candidate.pivot,
            left: Box::new(grow(&candidate.left)),
            right: Box::new(grow(&candidate.right)),
        },
    }
}
