use crate::assembly::InputAssembler;
use crate::message::{LocalData, Message, Witness};
use crate::predicate::CompliancePredicate;
use crate::system::ConstraintSystemOracle;
use crate::ComplianceError;

impl<CS: ConstraintSystemOracle> CompliancePredicate<CS> {
    /// Whether one step of the recursive computation is compliant: the
    /// assembled primary and auxiliary inputs satisfy the embedded
    /// constraint system.
    ///
    /// Shape mismatches between the supplied values and the declared lengths
    /// are caller errors and surface as `Err`; `Ok(false)` is the ordinary
    /// non-compliant outcome. Pure: nothing is retained between calls.
    pub fn is_satisfied<A: InputAssembler<CS::Field>>(
        &self,
        assembler: &A,
        outgoing: &Message<CS::Field>,
        incoming: &[Message<CS::Field>],
        local_data: &LocalData<CS::Field>,
        witness: &Witness<CS::Field>,
    ) -> Result<bool, ComplianceError> {
        self.check_shapes(outgoing, incoming, local_data)?;
        let primary = assembler.primary_input(outgoing);
        let auxiliary = assembler.auxiliary_input(
            incoming,
            local_data,
            witness,
            &self.incoming_message_payload_lengths,
        );
        Ok(self.constraint_system.is_satisfied(&primary, &auxiliary))
    }

    fn check_shapes(
        &self,
        outgoing: &Message<CS::Field>,
        incoming: &[Message<CS::Field>],
        local_data: &LocalData<CS::Field>,
    ) -> Result<(), ComplianceError> {
        if outgoing.payload.len() != self.outgoing_message_payload_length {
            return Err(ComplianceError::OutgoingPayloadLength(
                outgoing.payload.len(),
                self.outgoing_message_payload_length,
            ));
        }
        if incoming.len() > self.max_arity {
            return Err(ComplianceError::ArityExceeded(
                incoming.len(),
                self.max_arity,
            ));
        }
        for (slot, message) in incoming.iter().enumerate() {
            let expected = self.incoming_message_payload_lengths[slot];
            if message.payload.len() != expected {
                return Err(ComplianceError::IncomingPayloadLength(
                    slot,
                    message.payload.len(),
                    expected,
                ));
            }
        }
        if local_data.payload.len() != self.local_data_length {
            return Err(ComplianceError::LocalDataLength(
                local_data.payload.len(),
                self.local_data_length,
            ));
        }
        Ok(())
    }
}
