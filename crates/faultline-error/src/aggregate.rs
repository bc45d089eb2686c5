use std::fmt;

use crate::Fault;

/// Ordered collection of failures reported together
///
/// Elements keep insertion order and are never deduplicated. Appending
/// another aggregate splices its elements in, so aggregates never nest.
#[derive(Debug, Default)]
pub struct AggregateError {
    faults: Vec<Fault>,
}

impl AggregateError {
    pub const fn new() -> Self {
        Self { faults: Vec::new() }
    }

    /// Add a failure, capturing its call path if it has none
    pub fn append(&mut self, fault: impl Into<Fault>) {
        match fault.into() {
            Fault::Aggregate(other) => self.faults.extend(other.faults),
            fault => self.faults.push(fault.force_stack()),
        }
    }

    /// Record the failure of `result`, passing a success value through
    pub fn append_result<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<Fault>,
    {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.append(error);
                None
            }
        }
    }

    /// Move every element of `other` to the end of this aggregate
    pub fn join(&mut self, other: Self) {
        self.faults.extend(other.faults);
    }

    pub fn len(&self) -> usize {
        self.faults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fault> {
        self.faults.iter()
    }

    /// `Ok(())` when nothing was collected
    ///
    /// # Errors
    ///
    /// Returns the aggregate itself when it holds at least one failure
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Light render of every element, used as context when classifying
    pub(crate) fn summary(&self) -> String {
        self.faults
            .iter()
            .map(|fault| fault.extract("").light())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, fault) in self.faults.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{fault}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

impl FromIterator<Fault> for AggregateError {
    fn from_iter<I: IntoIterator<Item = Fault>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        aggregate.extend(iter);
        aggregate
    }
}

impl Extend<Fault> for AggregateError {
    fn extend<I: IntoIterator<Item = Fault>>(&mut self, iter: I) {
        for fault in iter {
            self.append(fault);
        }
    }
}

impl IntoIterator for AggregateError {
    type Item = Fault;
    type IntoIter = std::vec::IntoIter<Fault>;

    fn into_iter(self) -> Self::IntoIter {
        self.faults.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a Fault;
    type IntoIter = std::slice::Iter<'a, Fault>;

    fn into_iter(self) -> Self::IntoIter {
        self.faults.iter()
    }
}
