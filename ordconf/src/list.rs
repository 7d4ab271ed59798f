use std::fmt;
use std::slice;

use crate::step::{Priority, Step};

/// Steps kept in registration order until sorted.
pub struct StepList<T> {
    steps: Vec<Box<dyn Step<T>>>,
}

impl<T> StepList<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn push(&mut self, step: Box<dyn Step<T>>) {
        self.steps.push(step);
    }

    /// Sort ascending by priority.
    ///
    /// `sort_by_key` is stable, so steps sharing a priority keep their
    /// registration order.
    pub fn sort(&mut self) {
        self.steps.sort_by_key(|step| step.priority());
    }

    pub fn iter(&self) -> slice::Iter<'_, Box<dyn Step<T>>> {
        self.steps.iter()
    }

    /// Priorities in current list order.
    pub fn priorities(&self) -> Vec<Priority> {
        self.steps.iter().map(|step| step.priority()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<T> Default for StepList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Box<dyn Step<T>>> for StepList<T> {
    fn extend<I: IntoIterator<Item = Box<dyn Step<T>>>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}

impl<T> FromIterator<Box<dyn Step<T>>> for StepList<T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Step<T>>>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a StepList<T> {
    type Item = &'a Box<dyn Step<T>>;
    type IntoIter = slice::Iter<'a, Box<dyn Step<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for StepList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepList")
            .field("priorities", &self.priorities())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::ConfigStep;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tagged(priority: Priority, tag: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Box<dyn Step<()>> {
        let log = Rc::clone(log);
        ConfigStep::with_priority(priority, move |_| {
            log.borrow_mut().push(tag);
            Ok(())
        })
        .boxed()
    }

    #[test]
    fn test_sort_is_ascending() {
        let mut list: StepList<()> = [100, -3, 50, 0]
            .into_iter()
            .map(|p| ConfigStep::with_priority(p, |_| Ok(())).boxed())
            .collect();
        list.sort();
        assert_eq!(list.priorities(), vec![-3, 0, 50, 100]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = StepList::new();
        list.push(tagged(50, "a", &log));
        list.push(tagged(10, "b", &log));
        list.push(tagged(50, "c", &log));
        list.push(tagged(10, "d", &log));
        list.push(tagged(50, "e", &log));

        list.sort();
        for step in &list {
            step.apply(&mut ()).unwrap();
        }

        assert_eq!(*log.borrow(), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_len_and_extend() {
        let mut list: StepList<()> = StepList::default();
        assert!(list.is_empty());
        list.extend((0..3).map(|p| ConfigStep::with_priority(p, |_| Ok(())).boxed()));
        assert_eq!(list.len(), 3);
        assert_eq!(format!("{list:?}"), "StepList { priorities: [0, 1, 2] }");
    }
}
