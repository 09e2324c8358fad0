use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashSet},
    io::{Read, Write},
};

use crate::{
    bitmanipulation::{BitReader, BitWriter},
    frequency::FrequencyTable,
    HuffError,
};

/// Deepest nesting a trie over 256 symbols can have.
const MAX_DEPTH: usize = 255;

#[derive(Debug, PartialEq, Eq)]
pub enum HuffmanTree {
    Node(usize, Box<HuffmanTree>, Box<HuffmanTree>),
    Leaf(usize, u8),
}

/// Queue entry: lowest weight first, then oldest first.
struct Pending {
    order: usize,
    tree: HuffmanTree,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .tree
            .weight()
            .cmp(&self.tree.weight())
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl HuffmanTree {
    pub fn create(counts: &FrequencyTable) -> Result<HuffmanTree, HuffError> {
        let mut heap = BinaryHeap::new();
        for (elem, count) in counts.symbols() {
            heap.push(Pending {
                order: elem as usize,
                tree: HuffmanTree::Leaf(count, elem),
            });
        }

        let mut order = 256;
        loop {
            let left = heap.pop().ok_or(HuffError::EmptyInput)?;
            let Some(right) = heap.pop() else {
                return Ok(left.tree);
            };
            heap.push(Pending {
                order,
                tree: HuffmanTree::Node(
                    left.tree.weight() + right.tree.weight(),
                    Box::new(left.tree),
                    Box::new(right.tree),
                ),
            });
            order += 1;
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffmanTree::Leaf(count, _) => *count,
            HuffmanTree::Node(count, _, _) => *count,
        }
    }

    /// Leaves as (symbol, weight), left to right.
    pub fn leaves(&self) -> Vec<(u8, usize)> {
        match self {
            HuffmanTree::Leaf(count, value) => vec![(*value, *count)],
            HuffmanTree::Node(_, left, right) => {
                let mut leaves = left.leaves();
                leaves.extend(right.leaves());
                leaves
            }
        }
    }

    /// Pre-order encoding: `1` + byte for a leaf, `0` + left + right for a node.
    pub fn write<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<(), HuffError> {
        match self {
            HuffmanTree::Leaf(_, value) => {
                writer.write_bit(true)?;
                writer.write_byte(*value)
            }
            HuffmanTree::Node(_, left, right) => {
                writer.write_bit(false)?;
                left.write(writer)?;
                right.write(writer)
            }
        }
    }

    /// Inverse of [`HuffmanTree::write`]. Weights are not stored, every node reads back as 0.
    pub fn read<R: Read>(reader: &mut BitReader<R>) -> Result<HuffmanTree, HuffError> {
        let mut seen = HashSet::new();
        Self::read_node(reader, 0, &mut seen)
    }

    fn read_node<R: Read>(
        reader: &mut BitReader<R>,
        depth: usize,
        seen: &mut HashSet<u8>,
    ) -> Result<HuffmanTree, HuffError> {
        if depth > MAX_DEPTH {
            return Err(HuffError::CorruptTrie(format!(
                "trie deeper than {} levels",
                MAX_DEPTH
            )));
        }

        if read_in_trie(reader, BitReader::read_bit)? {
            let value = read_in_trie(reader, BitReader::read_byte)?;
            if !seen.insert(value) {
                return Err(HuffError::CorruptTrie(format!(
                    "byte 0x{:02X} appears in more than one leaf",
                    value
                )));
            }
            return Ok(HuffmanTree::Leaf(0, value));
        }

        let left = Self::read_node(reader, depth + 1, seen)?;
        let right = Self::read_node(reader, depth + 1, seen)?;
        Ok(HuffmanTree::Node(0, Box::new(left), Box::new(right)))
    }
}

fn read_in_trie<R: Read, T>(
    reader: &mut BitReader<R>,
    read: impl FnOnce(&mut BitReader<R>) -> Result<T, HuffError>,
) -> Result<T, HuffError> {
    read(reader).map_err(|e| match e {
        HuffError::Underflow => {
            HuffError::CorruptTrie("stream ended inside the trie".to_string())
        }
        other => other,
    })
}
