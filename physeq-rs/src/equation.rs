use crate::compiler::compile;
use crate::error::EquationError;
use crate::named::NamedQuantity;
use crate::program::Program;
use crate::quantity::Quantity;

/// A compiled program together with the members it is evaluated against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Equation {
    program: Program,
    members: Vec<NamedQuantity>,
}

impl Equation {
    pub fn new(program: Program, members: Vec<NamedQuantity>) -> Self {
        Equation { program, members }
    }

    /// Compiles an infix formula such as `half*mass*velocity^two`.
    pub fn from_formula(formula: &str, members: Vec<NamedQuantity>) -> Result<Self, EquationError> {
        Ok(Equation::new(compile(formula)?, members))
    }

    /// Loads an already compiled, space separated postfix program.
    pub fn from_postfix(postfix: &str, members: Vec<NamedQuantity>) -> Result<Self, EquationError> {
        Ok(Equation::new(Program::from_postfix(postfix)?, members))
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn members(&self) -> &[NamedQuantity] {
        &self.members
    }

    /// Replaces the members, keeping the compiled program.
    pub fn with_members(self, members: Vec<NamedQuantity>) -> Self {
        Equation {
            program: self.program,
            members,
        }
    }

    pub fn calculate(&self) -> Result<Quantity, EquationError> {
        self.program.evaluate(&self.members)
    }
}
