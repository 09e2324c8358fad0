use itertools::Itertools;

use crate::tree::HuffmanTree;

/// Bit sequence of every symbol reachable in a trie; 0 = left, 1 = right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Vec<bool>>>,
}

impl CodeTable {
    /// A trie that is a single leaf gives that symbol the empty code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable {
            codes: vec![None; 256],
        };
        let mut prefix = Vec::new();
        table.collect(tree, &mut prefix);
        table
    }

    fn collect(&mut self, node: &HuffmanTree, prefix: &mut Vec<bool>) {
        match node {
            HuffmanTree::Leaf(_, value) => self.codes[*value as usize] = Some(prefix.clone()),
            HuffmanTree::Node(_, left, right) => {
                prefix.push(false);
                self.collect(left, prefix);
                prefix.pop();

                prefix.push(true);
                self.collect(right, prefix);
                prefix.pop();
            }
        }
    }

    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes[symbol as usize].as_deref()
    }

    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (symbol, code) pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + Clone + '_ {
        (0..=u8::MAX).filter_map(|symbol| self.get(symbol).map(|code| (symbol, code)))
    }

    pub fn code_string(&self, symbol: u8) -> Option<String> {
        self.get(symbol)
            .map(|code| code.iter().map(|bit| if *bit { '1' } else { '0' }).join(""))
    }

    /// One `symbol=code` entry per line, shortest codes first.
    pub fn describe(&self) -> String {
        self.iter()
            .sorted_by_key(|(symbol, code)| (code.len(), *symbol))
            .map(|(symbol, _)| {
                format!(
                    "0x{:02X}={}",
                    symbol,
                    self.code_string(symbol).unwrap_or_default()
                )
            })
            .join("\n")
    }
}
