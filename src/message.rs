use std::fmt;

use ark_ff::Field;

/// A message flowing along one edge of the recursive computation graph.
///
/// `tag` is the application-assigned message type. Predicates reserve
/// `tag == 0` as a sentinel for an absent or placeholder incoming message;
/// nothing here enforces that convention, callers must respect it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message<F: Field> {
    pub tag: u64,
    pub payload: Vec<F>,
}

impl<F: Field> Message<F> {
    pub fn new(tag: u64, payload: Vec<F>) -> Self {
        Self { tag, payload }
    }
}

impl<F: Field> fmt::Display for Message<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tag)?;
        for elem in self.payload.iter() {
            writeln!(f, "{}", elem)?;
        }
        Ok(())
    }
}

/// Auxiliary data local to one computation step, fixed length per predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalData<F: Field> {
    pub payload: Vec<F>,
}

impl<F: Field> LocalData<F> {
    pub fn new(payload: Vec<F>) -> Self {
        Self { payload }
    }
}

/// Private auxiliary variables of one step, not derivable from its messages
/// or local data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness<F: Field> {
    pub payload: Vec<F>,
}

impl<F: Field> Witness<F> {
    pub fn new(payload: Vec<F>) -> Self {
        Self { payload }
    }
}
