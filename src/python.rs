use crate::engine::{dependencies_of, explain_visibility, is_visible, resolve_visibility};
use crate::validator::{SchemaBuilder, ValidationReport};
use crate::form::Form;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for ValidationReport {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = std::convert::Infallible;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("valid", self.valid).unwrap();

        let errors = PyDict::new(py);
        for (field, message) in self.errors {
            errors.set_item(field, message).unwrap();
        }
        dict.set_item("errors", errors).unwrap();

        Ok(dict)
    }
}

/// A declarative conditional-visibility and validation engine for
/// data-driven forms.
///
/// The form document is parsed and checked once at construction; the
/// resolution methods can then be called repeatedly with different value
/// snapshots.
#[pyclass(name = "Hyouji")]
struct HyoujiPy {
    builder: SchemaBuilder,
}

fn parse_values(values_json: &str) -> PyResult<serde_json::Value> {
    serde_json::from_str(values_json)
        .map_err(|e| PyValueError::new_err(format!("Invalid values JSON: {}", e)))
}

#[pymethods]
impl HyoujiPy {
    /// Parses a form document and prepares the engine.
    ///
    /// Args:
    ///     form_json (str): A string containing the JSON form definition,
    ///         including rows, elements and their visibility rules.
    ///
    /// Raises:
    ///     ValueError: If the document cannot be parsed or violates the
    ///         form invariants (duplicate element ids).
    #[new]
    fn new(form_json: &str) -> PyResult<Self> {
        let form = Form::from_json(form_json)
            .map_err(|e| PyValueError::new_err(format!("Invalid form: {}", e)))?;
        let builder = SchemaBuilder::new(form)
            .map_err(|e| PyValueError::new_err(format!("Invalid form: {}", e)))?;
        Ok(Self { builder })
    }

    /// Resolves visibility for every element against a values snapshot.
    ///
    /// Returns:
    ///     dict[str, bool]: Element id to current visibility.
    fn visibility<'py>(&self, py: Python<'py>, values_json: &str) -> PyResult<Bound<'py, PyDict>> {
        let values = parse_values(values_json)?;
        let dict = PyDict::new(py);
        for (id, visible) in resolve_visibility(self.builder.form(), &values) {
            dict.set_item(id, visible)?;
        }
        Ok(dict)
    }

    /// Returns whether a single element is currently visible.
    fn is_visible(&self, element_id: &str, values_json: &str) -> PyResult<bool> {
        let values = parse_values(values_json)?;
        let element = self.element(element_id)?;
        Ok(is_visible(element, &values))
    }

    /// Returns the ids of the elements whose value changes must trigger
    /// re-evaluation of the given element's visibility.
    fn dependencies(&self, element_id: &str) -> PyResult<Vec<String>> {
        let element = self.element(element_id)?;
        Ok(dependencies_of(element.rules()))
    }

    /// Explains why an element is currently shown or hidden.
    fn explain(&self, element_id: &str, values_json: &str) -> PyResult<String> {
        let values = parse_values(values_json)?;
        let element = self.element(element_id)?;
        Ok(explain_visibility(element, &values))
    }

    /// Validates a values snapshot against the currently-visible fields.
    ///
    /// Returns:
    ///     dict: `{"valid": bool, "errors": dict[str, str]}`.
    fn validate(&self, values_json: &str) -> PyResult<ValidationReport> {
        let values = parse_values(values_json)?;
        let schema = self
            .builder
            .schema(&values)
            .map_err(|e| PyValueError::new_err(format!("Schema construction failed: {}", e)))?;
        Ok(schema.validate(&values))
    }
}

impl HyoujiPy {
    fn element(&self, element_id: &str) -> PyResult<&crate::form::Element> {
        self.builder
            .form()
            .element(element_id)
            .ok_or_else(|| PyKeyError::new_err(format!("Unknown element id '{}'", element_id)))
    }
}

/// A declarative conditional-visibility and validation engine for
/// data-driven forms.
///
/// This module provides Python bindings to the Hyouji Rust library: load a
/// form document once, then resolve visibility, dependency sets and
/// validation reports against live value snapshots.
#[pymodule]
fn hyouji(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<HyoujiPy>()?;
    Ok(())
}
