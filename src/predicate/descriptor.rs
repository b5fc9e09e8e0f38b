use crate::system::ConstraintSystemOracle;
use crate::ComplianceError;

/// A compliance predicate: the per-step correctness relation of a
/// proof-carrying-data computation, expressed as an owned constraint system
/// plus the arity and length metadata fixing its variable layout.
///
/// Immutable after construction; a single predicate may back arbitrarily
/// many concurrent satisfaction checks.
#[derive(Clone, Debug)]
pub struct CompliancePredicate<CS: ConstraintSystemOracle> {
    pub name: u64,
    /// Application-assigned predicate type; 0 is reserved and never
    /// well-formed.
    pub predicate_type: u64,
    pub constraint_system: CS,
    pub outgoing_message_payload_length: usize,
    pub max_arity: usize,
    pub incoming_message_payload_lengths: Vec<usize>,
    pub local_data_length: usize,
    pub witness_length: usize,
    /// Advisory hint that the predicate only accepts inputs sharing its own
    /// type. Off the wire format and outside equality.
    pub relies_on_same_type_inputs: bool,
}

impl<CS: ConstraintSystemOracle> CompliancePredicate<CS> {
    /// Builds a predicate. Rejects an incoming-length vector whose size
    /// disagrees with `max_arity`; the remaining well-formedness invariants
    /// are deferred to [`is_well_formed`](Self::is_well_formed).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: u64,
        predicate_type: u64,
        constraint_system: CS,
        outgoing_message_payload_length: usize,
        max_arity: usize,
        incoming_message_payload_lengths: Vec<usize>,
        local_data_length: usize,
        witness_length: usize,
        relies_on_same_type_inputs: bool,
    ) -> Result<Self, ComplianceError> {
        if incoming_message_payload_lengths.len() != max_arity {
            return Err(ComplianceError::ArityMismatch(
                incoming_message_payload_lengths.len(),
                max_arity,
            ));
        }
        Ok(Self {
            name,
            predicate_type,
            constraint_system,
            outgoing_message_payload_length,
            max_arity,
            incoming_message_payload_lengths,
            local_data_length,
            witness_length,
            relies_on_same_type_inputs,
        })
    }

    // total variable count implied by the declared lengths: incoming
    // payloads, outgoing payload, local data, one type tag per incoming slot
    // plus the predicate's own, one arity indicator, witness
    fn expected_num_variables(&self) -> usize {
        self.incoming_message_payload_lengths.iter().sum::<usize>()
            + self.outgoing_message_payload_length
            + self.local_data_length
            + (self.max_arity + 1)
            + 1
            + self.witness_length
    }

    /// Whether the declared metadata and the embedded constraint system are
    /// structurally consistent. Pure; intended as a pre-flight gate before
    /// key generation, never called implicitly by the evaluator.
    pub fn is_well_formed(&self) -> bool {
        self.predicate_type != 0
            && self.incoming_message_payload_lengths.len() == self.max_arity
            && self.constraint_system.num_inputs() == self.outgoing_message_payload_length + 1
            && self.constraint_system.num_variables() == self.expected_num_variables()
    }

    /// True iff every declared incoming length equals the outgoing length:
    /// the uniform-schema shape of homogeneous recursive compositions.
    pub fn has_equal_input_and_output_lengths(&self) -> bool {
        self.incoming_message_payload_lengths
            .iter()
            .all(|len| *len == self.outgoing_message_payload_length)
    }

    /// True iff all declared incoming lengths are mutually equal, the
    /// outgoing length aside.
    pub fn has_equal_input_lengths(&self) -> bool {
        self.incoming_message_payload_lengths
            .windows(2)
            .all(|pair| pair[0] == pair[1])
    }
}

// Structural equality over everything except `relies_on_same_type_inputs`:
// the flag is advisory metadata, consistent with its absence from the wire
// format.
impl<CS: ConstraintSystemOracle> PartialEq for CompliancePredicate<CS> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.predicate_type == other.predicate_type
            && self.constraint_system == other.constraint_system
            && self.outgoing_message_payload_length == other.outgoing_message_payload_length
            && self.max_arity == other.max_arity
            && self.incoming_message_payload_lengths == other.incoming_message_payload_lengths
            && self.local_data_length == other.local_data_length
            && self.witness_length == other.witness_length
    }
}

impl<CS: ConstraintSystemOracle + Eq> Eq for CompliancePredicate<CS> {}

#[cfg(test)]
mod tests {
    use super::CompliancePredicate;
    use crate::r1cs::R1cs;
    use crate::tests::fields::F64;
    use crate::ComplianceError;

    // arity 2, incoming [2, 2], outgoing 2, local data 1, witness 3:
    // num_inputs 3, num_variables 4 + 2 + 1 + 3 + 1 + 3 = 14
    fn consistent_predicate() -> CompliancePredicate<R1cs<F64>> {
        CompliancePredicate::new(1, 7, R1cs::new(3, 14), 2, 2, vec![2, 2], 1, 3, false).unwrap()
    }

    #[test]
    fn constructor_rejects_arity_mismatch() {
        let result =
            CompliancePredicate::new(1, 7, R1cs::<F64>::new(3, 14), 2, 2, vec![2], 1, 3, false);
        assert!(matches!(result, Err(ComplianceError::ArityMismatch(1, 2))));
    }

    #[test]
    fn consistent_predicate_is_well_formed() {
        assert!(consistent_predicate().is_well_formed());
    }

    #[test]
    fn zero_type_is_malformed() {
        let mut predicate = consistent_predicate();
        predicate.predicate_type = 0;
        assert!(!predicate.is_well_formed());
    }

    #[test]
    fn length_vector_size_mismatch_is_malformed() {
        let mut predicate = consistent_predicate();
        predicate.incoming_message_payload_lengths.push(2);
        assert!(!predicate.is_well_formed());
    }

    #[test]
    fn wrong_num_inputs_is_malformed() {
        let mut predicate = consistent_predicate();
        predicate.constraint_system.num_inputs = 4;
        assert!(!predicate.is_well_formed());
    }

    #[test]
    fn wrong_num_variables_is_malformed() {
        let mut predicate = consistent_predicate();
        predicate.constraint_system.num_variables = 13;
        assert!(!predicate.is_well_formed());
    }

    #[test]
    fn equal_input_and_output_lengths() {
        let p = CompliancePredicate::new(
            1,
            7,
            R1cs::<F64>::new(4, 20),
            3,
            2,
            vec![3, 3],
            0,
            0,
            false,
        )
        .unwrap();
        assert!(p.has_equal_input_and_output_lengths());
        let q = CompliancePredicate::new(
            1,
            7,
            R1cs::<F64>::new(4, 20),
            3,
            2,
            vec![3, 2],
            0,
            0,
            false,
        )
        .unwrap();
        assert!(!q.has_equal_input_and_output_lengths());
    }

    #[test]
    fn equal_input_lengths() {
        let p = CompliancePredicate::new(
            1,
            7,
            R1cs::<F64>::new(1, 1),
            9,
            3,
            vec![4, 4, 4],
            0,
            0,
            false,
        )
        .unwrap();
        assert!(p.has_equal_input_lengths());
        let q = CompliancePredicate::new(
            1,
            7,
            R1cs::<F64>::new(1, 1),
            9,
            3,
            vec![4, 5, 4],
            0,
            0,
            false,
        )
        .unwrap();
        assert!(!q.has_equal_input_lengths());
    }

    #[test]
    fn equality_ignores_uniformity_flag() {
        let mut a = consistent_predicate();
        let b = consistent_predicate();
        a.relies_on_same_type_inputs = true;
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_structural_otherwise() {
        let a = consistent_predicate();
        let mut b = consistent_predicate();
        b.name = 2;
        assert_ne!(a, b);
        let mut c = consistent_predicate();
        c.incoming_message_payload_lengths[1] = 3;
        assert_ne!(a, c);
    }
}
