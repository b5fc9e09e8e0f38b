use std::io::{self, BufRead, Write};

use ark_ff::PrimeField;
use num_bigint::BigUint;

use crate::codec::{CodecError, LineCodec, LineReader};
use crate::system::ConstraintSystemOracle;

/// Sparse linear combination: `(coefficient, variable index)` terms over the
/// assignment `z = [1] ++ primary ++ auxiliary` (index 0 is the constant
/// wire).
pub type LinearCombination<F> = Vec<(F, usize)>;

pub type Constraint<F> = (
    LinearCombination<F>,
    LinearCombination<F>,
    LinearCombination<F>,
);

/// A rank-1 constraint system: rows `(a_i, b_i, c_i)` satisfied by `z` iff
/// `(a_i · z) * (b_i · z) == c_i · z` for every `i`.
///
/// `num_inputs` and `num_variables` are declared metadata, the quantities a
/// predicate's well-formedness invariants inspect; satisfaction only
/// requires every term index to fall inside the supplied assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct R1cs<F: PrimeField> {
    pub num_inputs: usize,
    pub num_variables: usize,
    pub constraints: Vec<Constraint<F>>,
}

impl<F: PrimeField> R1cs<F> {
    pub fn new(num_inputs: usize, num_variables: usize) -> Self {
        Self {
            num_inputs,
            num_variables,
            constraints: Vec::new(),
        }
    }

    pub fn add_constraint(
        &mut self,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) {
        self.constraints.push((a, b, c));
    }

    // evaluate a sparse linear combination over z; None when a term indexes
    // past the assignment
    fn eval_lc(lc: &[(F, usize)], z: &[F]) -> Option<F> {
        let mut acc = F::zero();
        for (coeff, var) in lc.iter() {
            acc += *coeff * z.get(*var)?;
        }
        Some(acc)
    }

    fn eval_row(row: &Constraint<F>, z: &[F]) -> Option<bool> {
        let (a, b, c) = row;
        let eval_a = Self::eval_lc(a, z)?;
        let eval_b = Self::eval_lc(b, z)?;
        let eval_c = Self::eval_lc(c, z)?;
        Some(eval_a * eval_b == eval_c)
    }
}

impl<F: PrimeField> ConstraintSystemOracle for R1cs<F> {
    type Field = F;

    fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    fn num_variables(&self) -> usize {
        self.num_variables
    }

    fn is_satisfied(&self, primary: &[F], auxiliary: &[F]) -> bool {
        let mut z = Vec::with_capacity(1 + primary.len() + auxiliary.len());
        z.push(F::one());
        z.extend_from_slice(primary);
        z.extend_from_slice(auxiliary);
        self.constraints
            .iter()
            .all(|row| Self::eval_row(row, &z).unwrap_or(false))
    }
}

fn write_lc<F: PrimeField, W: Write>(lc: &[(F, usize)], w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", lc.len())?;
    for (coeff, var) in lc.iter() {
        let residue: BigUint = coeff.into_bigint().into();
        writeln!(w, "{}", residue)?;
        writeln!(w, "{}", var)?;
    }
    Ok(())
}

fn read_lc<F: PrimeField, R: BufRead>(
    reader: &mut LineReader<R>,
) -> Result<LinearCombination<F>, CodecError> {
    let terms = reader.next_usize()?;
    (0..terms)
        .map(|_| {
            let coeff = reader.next_field::<F>()?;
            let var = reader.next_usize()?;
            Ok((coeff, var))
        })
        .collect()
}

impl<F: PrimeField> LineCodec for R1cs<F> {
    fn write_lines<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}", self.num_inputs)?;
        writeln!(w, "{}", self.num_variables)?;
        writeln!(w, "{}", self.constraints.len())?;
        for (a, b, c) in self.constraints.iter() {
            write_lc(a, w)?;
            write_lc(b, w)?;
            write_lc(c, w)?;
        }
        Ok(())
    }

    fn read_lines<R: BufRead>(reader: &mut LineReader<R>) -> Result<Self, CodecError> {
        let num_inputs = reader.next_usize()?;
        let num_variables = reader.next_usize()?;
        let rows = reader.next_usize()?;
        let constraints = (0..rows)
            .map(|_| {
                let a = read_lc(reader)?;
                let b = read_lc(reader)?;
                let c = read_lc(reader)?;
                Ok((a, b, c))
            })
            .collect::<Result<Vec<_>, CodecError>>()?;
        Ok(Self {
            num_inputs,
            num_variables,
            constraints,
        })
    }
}
