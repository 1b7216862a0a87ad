//! Connectivity of the word graph: words are nodes, shared cells with equal
//! letters are edges.

use crate::{PlacedWord, Position};
use std::collections::{HashMap, VecDeque};

/// Adjacency lists of the intersection graph, indexed like `placed`
pub fn connectivity_graph(placed: &[PlacedWord]) -> Vec<Vec<usize>> {
    let mut by_cell: HashMap<Position, Vec<(usize, char)>> = HashMap::new();
    for (index, word) in placed.iter().enumerate() {
        for (pos, letter) in word.cells() {
            by_cell.entry(pos).or_default().push((index, letter));
        }
    }

    let mut graph = vec![Vec::new(); placed.len()];
    for occupants in by_cell.values() {
        for (i, &(a, letter_a)) in occupants.iter().enumerate() {
            for &(b, letter_b) in &occupants[i + 1..] {
                if a != b && letter_a == letter_b {
                    graph[a].push(b);
                    graph[b].push(a);
                }
            }
        }
    }
    for neighbours in &mut graph {
        neighbours.sort_unstable();
        neighbours.dedup();
    }
    graph
}

/// Connected components as lists of word indices, largest first
pub fn components(placed: &[PlacedWord]) -> Vec<Vec<usize>> {
    let graph = connectivity_graph(placed);
    let mut visited = vec![false; placed.len()];
    let mut result = Vec::new();

    for start in 0..placed.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            for &next in &graph[node] {
                if !visited[next] {
                    visited[next] = true;
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }

        component.sort_unstable();
        result.push(component);
    }

    // stable: equal sizes keep discovery order
    result.sort_by(|a, b| b.len().cmp(&a.len()));
    result
}

/// True when every word is reachable from every other. Zero or one word
/// counts as connected.
pub fn is_connected(placed: &[PlacedWord]) -> bool {
    components(placed).len() <= 1
}

/// Size of the largest connected group of words
pub fn largest_component_size(placed: &[PlacedWord]) -> usize {
    components(placed).first().map_or(0, Vec::len)
}
