use ark_ff::Field;

use crate::message::{LocalData, Message, Witness};

/// Capability boundary to the input-assembly convention of the surrounding
/// recursive composition scheme.
///
/// The evaluator never hard-codes a flattening policy: it forwards the
/// per-step values plus the declared incoming-length vector and lets the
/// assembler pad and position them. An assembler must produce a primary
/// vector of length `outgoing.payload.len() + 1` and an auxiliary vector of
/// length `Σ incoming_lengths + incoming_lengths.len() + 1 + local_data
/// + witness`, so that the two together cover a constraint system sized per
/// a well-formed predicate's declared lengths.
pub trait InputAssembler<F: Field> {
    /// Public-input vector: the outgoing payload plus one reserved binding
    /// slot whose value is fixed by the assembler's convention.
    fn primary_input(&self, outgoing: &Message<F>) -> Vec<F>;

    /// Private-input vector covering incoming payloads, the incoming
    /// type-tag vector, the arity indicator, local data and witness.
    fn auxiliary_input(
        &self,
        incoming: &[Message<F>],
        local_data: &LocalData<F>,
        witness: &Witness<F>,
        incoming_lengths: &[usize],
    ) -> Vec<F>;
}

/// Reference assembly convention.
///
/// Primary input: outgoing payload, then the reserved slot carrying the
/// outgoing message's type tag. Auxiliary input, in order: each incoming
/// slot's payload zero-padded to its declared length, one type tag per
/// incoming slot (absent slots tagged 0), the arity indicator holding the
/// number of messages actually supplied, local data, witness.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardAssembler;

impl<F: Field> InputAssembler<F> for StandardAssembler {
    fn primary_input(&self, outgoing: &Message<F>) -> Vec<F> {
        let mut primary = Vec::with_capacity(outgoing.payload.len() + 1);
        primary.extend_from_slice(&outgoing.payload);
        primary.push(F::from(outgoing.tag));
        primary
    }

    fn auxiliary_input(
        &self,
        incoming: &[Message<F>],
        local_data: &LocalData<F>,
        witness: &Witness<F>,
        incoming_lengths: &[usize],
    ) -> Vec<F> {
        let payload_len: usize = incoming_lengths.iter().sum();
        let mut auxiliary = Vec::with_capacity(
            payload_len
                + incoming_lengths.len()
                + 1
                + local_data.payload.len()
                + witness.payload.len(),
        );
        for (slot, declared_len) in incoming_lengths.iter().enumerate() {
            match incoming.get(slot) {
                Some(message) => auxiliary.extend_from_slice(&message.payload),
                None => auxiliary.extend(std::iter::repeat(F::zero()).take(*declared_len)),
            }
        }
        for slot in 0..incoming_lengths.len() {
            let tag = incoming.get(slot).map_or(0, |message| message.tag);
            auxiliary.push(F::from(tag));
        }
        auxiliary.push(F::from(incoming.len() as u64));
        auxiliary.extend_from_slice(&local_data.payload);
        auxiliary.extend_from_slice(&witness.payload);
        auxiliary
    }
}

#[cfg(test)]
mod tests {
    use super::{InputAssembler, StandardAssembler};
    use crate::message::{LocalData, Message, Witness};
    use crate::predicate::CompliancePredicate;
    use crate::r1cs::R1cs;
    use crate::system::ConstraintSystemOracle;
    use crate::tests::fields::F64;

    fn f(v: u64) -> F64 {
        F64::from(v)
    }

    #[test]
    fn primary_input_appends_tag_slot() {
        let outgoing = Message::new(9, vec![f(5), f(6)]);
        let primary = StandardAssembler.primary_input(&outgoing);
        assert_eq!(primary, vec![f(5), f(6), f(9)]);
    }

    #[test]
    fn auxiliary_input_layout_with_full_arity() {
        let incoming = vec![Message::new(2, vec![f(3), f(4)]), Message::new(2, vec![f(7)])];
        let local_data = LocalData::new(vec![f(9)]);
        let witness = Witness::new(vec![f(10), f(11)]);
        let auxiliary = StandardAssembler.auxiliary_input(&incoming, &local_data, &witness, &[2, 1]);
        // payloads | tags | arity | local data | witness
        assert_eq!(
            auxiliary,
            vec![f(3), f(4), f(7), f(2), f(2), f(2), f(9), f(10), f(11)]
        );
    }

    #[test]
    fn auxiliary_input_zero_pads_absent_slots() {
        let incoming = vec![Message::new(3, vec![f(8), f(9)])];
        let local_data = LocalData::new(vec![]);
        let witness = Witness::new(vec![]);
        let auxiliary = StandardAssembler.auxiliary_input(&incoming, &local_data, &witness, &[2, 2]);
        // second slot padded with zeros and tagged 0, arity indicator is 1
        assert_eq!(auxiliary, vec![f(8), f(9), f(0), f(0), f(3), f(0), f(1)]);
    }

    #[test]
    fn assembled_lengths_cover_a_well_formed_predicate() {
        // arity 2, incoming [2, 2], outgoing 2, local data 1, witness 3
        let predicate = CompliancePredicate::new(
            1,
            7,
            R1cs::<F64>::new(3, 14),
            2,
            2,
            vec![2, 2],
            1,
            3,
            false,
        )
        .unwrap();
        assert!(predicate.is_well_formed());

        let outgoing = Message::new(7, vec![f(1), f(2)]);
        let incoming = vec![
            Message::new(7, vec![f(3), f(4)]),
            Message::new(7, vec![f(5), f(6)]),
        ];
        let local_data = LocalData::new(vec![f(8)]);
        let witness = Witness::new(vec![f(9), f(10), f(11)]);
        let primary = StandardAssembler.primary_input(&outgoing);
        let auxiliary = StandardAssembler.auxiliary_input(
            &incoming,
            &local_data,
            &witness,
            &predicate.incoming_message_payload_lengths,
        );
        let cs = &predicate.constraint_system;
        assert_eq!(primary.len(), cs.num_inputs());
        assert_eq!(primary.len() + auxiliary.len(), cs.num_variables());
    }
}
