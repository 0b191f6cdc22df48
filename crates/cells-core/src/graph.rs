//! Reverse dependency index for formula cells.
//!
//! Maps each cell to its children: the cells whose formulas reference it.
//! The index is only mutated through paired [`DependencyGraph::add_edge`] /
//! [`DependencyGraph::remove_edge`] calls from the edit handler, and must
//! always equal [`DependencyGraph::from_formulas`] over the current formulas.

use std::collections::{BTreeSet, HashMap, HashSet};

use cells_engine::engine::{CellRef, GridSize, extract_references};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Cell -> cells that depend on it. Empty sets are never stored.
    children: HashMap<CellRef, BTreeSet<CellRef>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from scratch out of `(cell, formula)` pairs.
    pub fn from_formulas<'a, I>(formulas: I, size: &GridSize) -> Self
    where
        I: IntoIterator<Item = (CellRef, &'a str)>,
    {
        let mut graph = Self::new();
        for (dependent, formula) in formulas {
            for precedent in extract_references(formula, size) {
                graph.add_edge(precedent, dependent);
            }
        }
        graph
    }

    /// Record that `dependent`'s formula references `precedent`.
    pub fn add_edge(&mut self, precedent: CellRef, dependent: CellRef) -> bool {
        self.children.entry(precedent).or_default().insert(dependent)
    }

    /// Drop the edge recorded by [`add_edge`](Self::add_edge).
    pub fn remove_edge(&mut self, precedent: CellRef, dependent: CellRef) -> bool {
        let Some(children) = self.children.get_mut(&precedent) else {
            return false;
        };
        let removed = children.remove(&dependent);
        if children.is_empty() {
            self.children.remove(&precedent);
        }
        removed
    }

    /// Cells that directly depend on `cell`, in row-major order.
    pub fn children(&self, cell: CellRef) -> impl Iterator<Item = CellRef> + '_ {
        self.children.get(&cell).into_iter().flatten().copied()
    }

    pub fn has_edge(&self, precedent: CellRef, dependent: CellRef) -> bool {
        self.children
            .get(&precedent)
            .is_some_and(|children| children.contains(&dependent))
    }

    pub fn edge_count(&self) -> usize {
        self.children.values().map(BTreeSet::len).sum()
    }

    /// Whether a strongly connected component is a cycle: several cells, or
    /// one cell that references itself.
    pub fn is_cycle(&self, component: &[CellRef]) -> bool {
        match component {
            [] => false,
            [cell] => self.has_edge(*cell, *cell),
            _ => true,
        }
    }

    /// Strongly connected components of everything reachable from `origin`,
    /// in topological order: a component comes before every component it
    /// reaches, so `origin`'s component is first.
    pub fn components_from(&self, origin: CellRef) -> Vec<Vec<CellRef>> {
        Tarjan::new(self).run(origin)
    }
}

/// Iterative Tarjan over the reachable subgraph.
///
/// `index` doubles as the visited set of the walk: a cell is entered at most
/// once per run, which bounds the work by the size of the grid.
struct Tarjan<'g> {
    graph: &'g DependencyGraph,
    next_index: usize,
    index: HashMap<CellRef, usize>,
    lowlink: HashMap<CellRef, usize>,
    stack: Vec<CellRef>,
    on_stack: HashSet<CellRef>,
    components: Vec<Vec<CellRef>>,
}

struct Frame {
    cell: CellRef,
    children: Vec<CellRef>,
    next: usize,
}

impl<'g> Tarjan<'g> {
    fn new(graph: &'g DependencyGraph) -> Self {
        Tarjan {
            graph,
            next_index: 0,
            index: HashMap::new(),
            lowlink: HashMap::new(),
            stack: Vec::new(),
            on_stack: HashSet::new(),
            components: Vec::new(),
        }
    }

    fn enter(&mut self, cell: CellRef) -> Frame {
        self.index.insert(cell, self.next_index);
        self.lowlink.insert(cell, self.next_index);
        self.next_index += 1;
        self.stack.push(cell);
        self.on_stack.insert(cell);
        Frame {
            cell,
            children: self.graph.children(cell).collect(),
            next: 0,
        }
    }

    fn lower(&mut self, cell: CellRef, candidate: usize) {
        if let Some(low) = self.lowlink.get_mut(&cell) {
            *low = (*low).min(candidate);
        }
    }

    fn run(mut self, origin: CellRef) -> Vec<Vec<CellRef>> {
        let mut work = vec![self.enter(origin)];

        while let Some(frame) = work.last_mut() {
            let cell = frame.cell;
            if let Some(&child) = frame.children.get(frame.next) {
                frame.next += 1;
                match self.index.get(&child).copied() {
                    None => {
                        let child_frame = self.enter(child);
                        work.push(child_frame);
                    }
                    Some(child_index) if self.on_stack.contains(&child) => {
                        self.lower(cell, child_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            work.pop();
            let low = self.lowlink[&cell];
            if let Some(parent) = work.last() {
                let parent = parent.cell;
                self.lower(parent, low);
            }
            if low == self.index[&cell] {
                let mut component = Vec::new();
                while let Some(member) = self.stack.pop() {
                    self.on_stack.remove(&member);
                    component.push(member);
                    if member == cell {
                        break;
                    }
                }
                component.sort();
                self.components.push(component);
            }
        }

        // Tarjan emits sinks first.
        self.components.reverse();
        self.components
    }
}
