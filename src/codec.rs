use std::io::{self, BufRead, Write};
use std::str::FromStr;

use ark_ff::PrimeField;
use num_bigint::BigUint;
use thiserror::Error;

use crate::predicate::CompliancePredicate;
use crate::system::ConstraintSystemOracle;
use crate::ComplianceError;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Predicate(#[from] ComplianceError),
    #[error("unexpected end of input after line {0}")]
    UnexpectedEof(usize),
    #[error("line {0}: expected an integer, got {1:?}")]
    InvalidInteger(usize, String),
    #[error("line {0}: expected a field element, got {1:?}")]
    InvalidFieldElement(usize, String),
}

/// Line-oriented text serialization, one field per line.
///
/// Everything that travels on the predicate wire format implements this; the
/// constraint system's own lines are embedded verbatim as the final field of
/// the predicate's serialization.
pub trait LineCodec: Sized {
    fn write_lines<W: Write>(&self, w: &mut W) -> io::Result<()>;
    fn read_lines<R: BufRead>(reader: &mut LineReader<R>) -> Result<Self, CodecError>;
}

/// A `BufRead` wrapper that hands out one trimmed line at a time and tracks
/// the line number for diagnostics.
pub struct LineReader<R: BufRead> {
    inner: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    pub fn next_line(&mut self) -> Result<&str, CodecError> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Err(CodecError::UnexpectedEof(self.line));
        }
        self.line += 1;
        Ok(self.buf.trim_end_matches(['\r', '\n']))
    }

    pub fn next_usize(&mut self) -> Result<usize, CodecError> {
        let line = self.line + 1;
        let text = self.next_line()?;
        usize::from_str(text).map_err(|_| CodecError::InvalidInteger(line, text.to_owned()))
    }

    pub fn next_u64(&mut self) -> Result<u64, CodecError> {
        let line = self.line + 1;
        let text = self.next_line()?;
        u64::from_str(text).map_err(|_| CodecError::InvalidInteger(line, text.to_owned()))
    }

    /// Reads one field element written as its canonical decimal residue.
    /// A residue at or beyond the modulus is rejected, not reduced.
    pub fn next_field<F: PrimeField>(&mut self) -> Result<F, CodecError> {
        let line = self.line + 1;
        let text = self.next_line()?;
        let value = BigUint::from_str(text)
            .map_err(|_| CodecError::InvalidFieldElement(line, text.to_owned()))?;
        let modulus: BigUint = F::MODULUS.into();
        if value >= modulus {
            return Err(CodecError::InvalidFieldElement(line, text.to_owned()));
        }
        Ok(F::from_le_bytes_mod_order(&value.to_bytes_le()))
    }
}

// Wire order: name, type, max_arity, each incoming length, outgoing length,
// local-data length, witness length, then the constraint system's lines.
// `relies_on_same_type_inputs` is advisory metadata and stays off the wire;
// deserialization resets it to false.
impl<CS> LineCodec for CompliancePredicate<CS>
where
    CS: ConstraintSystemOracle + LineCodec,
{
    fn write_lines<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}", self.name)?;
        writeln!(w, "{}", self.predicate_type)?;
        writeln!(w, "{}", self.max_arity)?;
        for len in self.incoming_message_payload_lengths.iter() {
            writeln!(w, "{}", len)?;
        }
        writeln!(w, "{}", self.outgoing_message_payload_length)?;
        writeln!(w, "{}", self.local_data_length)?;
        writeln!(w, "{}", self.witness_length)?;
        self.constraint_system.write_lines(w)
    }

    fn read_lines<R: BufRead>(reader: &mut LineReader<R>) -> Result<Self, CodecError> {
        let name = reader.next_u64()?;
        let predicate_type = reader.next_u64()?;
        let max_arity = reader.next_usize()?;
        let incoming_message_payload_lengths = (0..max_arity)
            .map(|_| reader.next_usize())
            .collect::<Result<Vec<_>, _>>()?;
        let outgoing_message_payload_length = reader.next_usize()?;
        let local_data_length = reader.next_usize()?;
        let witness_length = reader.next_usize()?;
        let constraint_system = CS::read_lines(reader)?;
        Ok(CompliancePredicate::new(
            name,
            predicate_type,
            constraint_system,
            outgoing_message_payload_length,
            max_arity,
            incoming_message_payload_lengths,
            local_data_length,
            witness_length,
            false,
        )?)
    }
}
