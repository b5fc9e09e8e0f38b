//! Compliance predicates for proof-carrying data over rank-1 constraint
//! systems.
//!
//! A compliance predicate describes, as an R1CS instance, the relation one
//! step of a recursive computation must satisfy: an outgoing message is
//! compliant with the incoming messages, local data and witness it was
//! produced from iff the embedded constraint system accepts the flattened
//! inputs. This crate describes, validates and evaluates a single predicate;
//! key generation, proving and verification live with the callers.


pub mod assembly;
pub mod codec;
pub mod message;
pub mod predicate;
pub mod r1cs;
pub mod system;

use thiserror::Error;

pub use assembly::{InputAssembler, StandardAssembler};
pub use codec::{CodecError, LineCodec, LineReader};
pub use message::{LocalData, Message, Witness};
pub use predicate::CompliancePredicate;
pub use r1cs::R1cs;
pub use system::ConstraintSystemOracle;

#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("declared {0} incoming payload lengths, but max arity is {1}")]
    ArityMismatch(usize, usize),
    #[error("outgoing payload holds {0} elements, predicate expects {1}")]
    OutgoingPayloadLength(usize, usize),
    #[error("{0} incoming messages exceed the predicate arity {1}")]
    ArityExceeded(usize, usize),
    #[error("incoming message {0} holds {1} payload elements, expected {2}")]
    IncomingPayloadLength(usize, usize, usize),
    #[error("local data holds {0} elements, predicate expects {1}")]
    LocalDataLength(usize, usize),
}
