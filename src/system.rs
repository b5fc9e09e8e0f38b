use ark_ff::Field;

/// Capability boundary to the constraint-system engine a predicate embeds.
///
/// The engine is external to this crate; a predicate only needs the variable
/// counts its invariants inspect and a satisfaction check over the assembled
/// primary/auxiliary vectors. Implementations must be read-only: a predicate
/// is shared across concurrent satisfaction checks without locking.
pub trait ConstraintSystemOracle: Clone + PartialEq {
    type Field: Field;

    /// Number of public-input variables (primary input length).
    fn num_inputs(&self) -> usize;

    /// Total number of variables, the constant wire excluded.
    fn num_variables(&self) -> usize;

    /// Whether the assembled assignment satisfies every constraint.
    fn is_satisfied(&self, primary: &[Self::Field], auxiliary: &[Self::Field]) -> bool;
}
