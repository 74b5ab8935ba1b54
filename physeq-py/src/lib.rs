use physeq_rs::{DisplayTables, NamedQuantity, UnitVector};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

#[pyclass(frozen, eq)]
#[derive(Debug, PartialEq, Clone)]
struct Quantity {
    inner: physeq_rs::Quantity,
}

impl From<physeq_rs::Quantity> for Quantity {
    fn from(inner: physeq_rs::Quantity) -> Self {
        Quantity { inner }
    }
}

#[pymethods]
impl Quantity {
    #[new]
    #[pyo3(signature = (magnitude, scale = 0, unit = [0; 7]))]
    fn new(magnitude: f64, scale: i32, unit: [i32; 7]) -> Self {
        physeq_rs::Quantity::new(magnitude, scale, UnitVector::new(unit)).into()
    }

    /// Reads the `magnitude,scale,u0,...,u6` form.
    #[staticmethod]
    fn parse(serialized: &str) -> Result<Self, EquationError> {
        Ok(serialized.parse::<physeq_rs::Quantity>()?.into())
    }

    #[getter]
    fn magnitude(&self) -> f64 {
        self.inner.magnitude()
    }

    #[getter]
    fn scale(&self) -> i32 {
        self.inner.scale()
    }

    #[getter]
    fn unit(&self) -> [i32; 7] {
        self.inner.unit().exponents()
    }

    fn normalized(&self) -> Self {
        self.inner.normalize_to_base_scale().into()
    }

    #[pyo3(signature = (force_si = false))]
    fn verbose(&self, force_si: bool) -> String {
        self.inner
            .to_verbose_string(&DisplayTables::default(), force_si)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Quantity({})", self.inner)
    }
}

#[pyclass(frozen)]
#[derive(Debug)]
struct EquationError {
    message: String,
}

impl From<physeq_rs::EquationError> for EquationError {
    fn from(err: physeq_rs::EquationError) -> Self {
        EquationError {
            message: err.to_string(),
        }
    }
}

impl From<EquationError> for PyErr {
    fn from(err: EquationError) -> Self {
        PyValueError::new_err(err.message)
    }
}

fn named(members: HashMap<String, Quantity>) -> Vec<NamedQuantity> {
    members
        .into_iter()
        .map(|(id, quantity)| NamedQuantity::new(id, quantity.inner))
        .collect()
}

#[pyfunction]
fn tokenize(formula: &str) -> Result<Vec<String>, EquationError> {
    Ok(physeq_rs::tokenize(formula)?
        .iter()
        .map(|token| token.to_string())
        .collect())
}

/// Compiles an infix formula into its space separated postfix form.
#[pyfunction]
fn compile(py: Python<'_>, formula: &str) -> Result<String, EquationError> {
    py.allow_threads(|| physeq_rs::infix_to_postfix(formula))
        .map_err(EquationError::from)
}

#[pyfunction]
fn evaluate(
    py: Python<'_>,
    formula: &str,
    members: HashMap<String, Quantity>,
) -> Result<Quantity, EquationError> {
    let members = named(members);
    py.allow_threads(|| physeq_rs::compile(formula)?.evaluate(&members))
        .map(Quantity::from)
        .map_err(EquationError::from)
}

#[pyfunction]
fn evaluate_postfix(
    py: Python<'_>,
    postfix: &str,
    members: HashMap<String, Quantity>,
) -> Result<Quantity, EquationError> {
    let members = named(members);
    py.allow_threads(|| physeq_rs::Program::from_postfix(postfix)?.evaluate(&members))
        .map(Quantity::from)
        .map_err(EquationError::from)
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(tokenize, m)?)?;
    m.add_function(wrap_pyfunction!(compile, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_postfix, m)?)?;
    m.add_class::<Quantity>()?;
    m.add_class::<EquationError>()?;
    Ok(())
}
