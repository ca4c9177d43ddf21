use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use super::codebook::CodeTable;
use super::SymbolWeight;
use crate::error::Error;
use crate::Result;

#[derive(Clone, Copy)]
enum NodeKind {
    Leaf { symbol: char },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy)]
struct Node {
    weight: f64,
    index: usize,
    kind: NodeKind,
}

/// Transient merge tree over an arena of nodes indexed by position.
///
/// Only the code table extracted from it is kept; the tree itself is
/// dropped as soon as the caller is done with `code_table`.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // nodes are appended to the arena in creation order, so the index
        // doubles as the tie-break key: equal weights resolve to the
        // earliest-inserted candidate
        self.weight
            .total_cmp(&other.weight)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(weights: &[SymbolWeight]) -> Result<HuffmanTree> {
        if weights.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        let mut heap = BinaryHeap::new();
        let mut nodes: Vec<Node> = Vec::with_capacity(weights.len() * 2 - 1);
        // create the initial nodeset
        for symbol_weight in weights.iter() {
            let node = Node {
                weight: symbol_weight.weight,
                index: nodes.len(),
                kind: NodeKind::Leaf {
                    symbol: symbol_weight.symbol,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        // merge nodes until one remains; the first of the two popped
        // candidates always becomes the left ('0') child
        while heap.len() > 1 {
            let first = heap.pop().unwrap().0;
            let second = heap.pop().unwrap().0;
            let node = Node {
                weight: first.weight + second.weight,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: first.index,
                    right: second.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        let root_index = heap.pop().unwrap().0.index;
        Ok(HuffmanTree { nodes, root_index })
    }

    /// Extract one codeword per leaf, '0' for left edges and '1' for right.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        let root = self.nodes[self.root_index];
        if let NodeKind::Leaf { symbol } = root.kind {
            // a one-symbol alphabet never merges, but the lone symbol still
            // needs a nonempty codeword or greedy decoding could not consume
            // any bits
            table.insert(symbol, "0".to_owned());
            return table;
        }
        let mut path = String::new();
        self.fill_table(&mut table, root, &mut path);
        table
    }

    fn fill_table(&self, table: &mut CodeTable, node: Node, path: &mut String) {
        match node.kind {
            NodeKind::Leaf { symbol } => table.insert(symbol, path.clone()),
            NodeKind::Inner { left, right } => {
                path.push('0');
                self.fill_table(table, self.nodes[left], path);
                path.pop();
                path.push('1');
                self.fill_table(table, self.nodes[right], path);
                path.pop();
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, SymbolWeight};
    use crate::error::Error;

    fn weights(pairs: &[(char, f64)]) -> Vec<SymbolWeight> {
        pairs.iter().copied().map(SymbolWeight::from).collect()
    }

    #[test]
    fn empty_distribution_is_rejected() {
        let result = HuffmanTree::new(&[]);
        assert!(matches!(result, Err(Error::EmptyDistribution)));
    }

    #[test]
    fn single_symbol_gets_a_nonempty_codeword() {
        let tree = HuffmanTree::new(&weights(&[('a', 1.0)])).unwrap();
        let table = tree.code_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table.codeword('a'), Some("0"));
    }

    #[test]
    fn worked_example_produces_pinned_table() {
        // frequencies of "aabbbcc": a and c tie at 2/7, b leads with 3/7
        let tree = HuffmanTree::new(&weights(&[
            ('a', 2.0 / 7.0),
            ('b', 3.0 / 7.0),
            ('c', 2.0 / 7.0),
        ]))
        .unwrap();
        let table = tree.code_table();
        assert_eq!(table.codeword('b'), Some("0"), "most frequent symbol");
        assert_eq!(table.codeword('a'), Some("10"));
        assert_eq!(table.codeword('c'), Some("11"));
    }

    #[test]
    fn equal_weights_break_ties_by_insertion_order() {
        let tree = HuffmanTree::new(&weights(&[
            ('w', 0.25),
            ('x', 0.25),
            ('y', 0.25),
            ('z', 0.25),
        ]))
        .unwrap();
        let table = tree.code_table();
        assert_eq!(table.codeword('w'), Some("00"));
        assert_eq!(table.codeword('x'), Some("01"));
        assert_eq!(table.codeword('y'), Some("10"));
        assert_eq!(table.codeword('z'), Some("11"));
    }

    #[test]
    fn construction_is_deterministic() {
        let input = weights(&[('m', 0.1), ('n', 0.1), ('o', 0.4), ('p', 0.4)]);
        let first: Vec<(char, String)> = HuffmanTree::new(&input)
            .unwrap()
            .code_table()
            .iter()
            .map(|(s, c)| (s, c.to_owned()))
            .collect();
        let second: Vec<(char, String)> = HuffmanTree::new(&input)
            .unwrap()
            .code_table()
            .iter()
            .map(|(s, c)| (s, c.to_owned()))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn skewed_weights_give_the_frequent_symbol_a_short_codeword() {
        let tree = HuffmanTree::new(&weights(&[
            ('e', 0.5),
            ('t', 0.2),
            ('q', 0.15),
            ('z', 0.15),
        ]))
        .unwrap();
        let table = tree.code_table();
        let short = table.codeword('e').unwrap().len();
        for (_, codeword) in table.iter() {
            assert!(codeword.len() >= short);
        }
    }

    #[test]
    fn generated_tables_are_prefix_free() {
        let inputs: &[&[(char, f64)]] = &[
            &[('a', 0.5), ('b', 0.5)],
            &[('a', 2.0 / 7.0), ('b', 3.0 / 7.0), ('c', 2.0 / 7.0)],
            &[('a', 0.05), ('b', 0.05), ('c', 0.1), ('d', 0.3), ('e', 0.5)],
            &[
                ('a', 0.125),
                ('b', 0.125),
                ('c', 0.125),
                ('d', 0.125),
                ('e', 0.5),
            ],
        ];
        for pairs in inputs {
            let table = HuffmanTree::new(&weights(pairs)).unwrap().code_table();
            let codewords: Vec<&str> = table.iter().map(|(_, c)| c).collect();
            for (i, a) in codewords.iter().enumerate() {
                assert!(!a.is_empty(), "empty codeword generated");
                for (j, b) in codewords.iter().enumerate() {
                    if i != j {
                        assert!(
                            !b.starts_with(a),
                            "codeword {} is a prefix of {}",
                            a,
                            b
                        );
                    }
                }
            }
        }
    }
}
