//! Stops and their waiting lines.

use rh_core::PassengerId;

/// A named location holding the passengers currently waiting there.
///
/// The waiting line keeps arrival order; boarding always admits from the
/// front.  Only the directory can change the line, and it does so only while
/// registering a new passenger or boarding a taxi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    name:    String,
    waiting: Vec<PassengerId>,
}

impl Stop {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name:    name.into(),
            waiting: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waiting passengers in arrival order.
    #[inline]
    pub fn waiting(&self) -> &[PassengerId] {
        &self.waiting
    }

    #[inline]
    pub fn has_waiting(&self) -> bool {
        !self.waiting.is_empty()
    }

    /// Append `passenger` to the back of the line.
    ///
    /// The caller must already have set the passenger's status to waiting at
    /// this stop, and must not register the same passenger twice.
    pub(crate) fn add_waiting(&mut self, passenger: PassengerId) {
        debug_assert!(!self.waiting.contains(&passenger), "{passenger} already waiting");
        self.waiting.push(passenger);
    }

    /// Remove the first occurrence of `passenger`.  Returns `false` if it was
    /// not waiting here.
    pub(crate) fn remove_waiting(&mut self, passenger: PassengerId) -> bool {
        match self.waiting.iter().position(|&p| p == passenger) {
            Some(i) => {
                self.waiting.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove and return up to `n` passengers from the front of the line.
    ///
    /// The admitted set is always a prefix of the line, so it is split off in
    /// one pass instead of being erased element by element.
    pub(crate) fn take_front(&mut self, n: usize) -> Vec<PassengerId> {
        let n = n.min(self.waiting.len());
        self.waiting.drain(..n).collect()
    }
}
