//! Ordered containers holding the open list of a search. Every frontier
//! accepts a priority on insertion; the stack and the queue ignore it.

use crate::search::HeuristicValue;
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    collections::{HashMap, VecDeque},
};

pub trait Frontier<T> {
    fn push(&mut self, item: T, priority: HeuristicValue);

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T, _priority: HeuristicValue) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First in, first out.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T, _priority: HeuristicValue) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Smallest priority first. Items with equal priority come out in insertion
/// order, which keeps searches deterministic.
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    queue: PriorityQueue<usize, Reverse<(HeuristicValue, usize)>>,
    items: HashMap<usize, T>,
    next_ticket: usize,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            items: HashMap::new(),
            next_ticket: 0,
        }
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T, priority: HeuristicValue) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.items.insert(ticket, item);
        self.queue.push(ticket, Reverse((priority, ticket)));
    }

    fn pop(&mut self) -> Option<T> {
        let (ticket, _) = self.queue.pop()?;
        self.items.remove(&ticket)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
