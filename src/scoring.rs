//! Naive one-parameter (Rasch) response scoring.
//!
//! Closed-form, non-iterative estimates from a binary response matrix:
//! - Per-item facility (proportion correct) and difficulty (1 - facility)
//! - Per-participant ability from difficulty-weighted response sums
//!
//! Rows index items, columns index participants. A cell counts only if it is
//! exactly 0 or exactly 1; any other value is unanswered and ignored.

use ndarray::{Array1, ArrayView2};
use numpy::{PyArray1, PyReadonlyArray2, ToPyArray};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use rayon::prelude::*;

use crate::utils::{div_or, is_valid_response};

/// Item difficulties and participant abilities from one scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveEstimates {
    /// Per-item difficulty, `1 - facility`, length `n_items`.
    pub difficulty: Array1<f64>,
    /// Per-participant ability in [0, 1], length `n_participants`.
    pub ability: Array1<f64>,
}

/// Per-item facility: valid responses equal to 1 over all valid responses.
///
/// An item with no valid responses scores 0.
pub fn item_facilities(responses: ArrayView2<f64>) -> Array1<f64> {
    let facilities: Vec<f64> = responses
        .rows()
        .into_iter()
        .map(|row| {
            let mut correct = 0.0;
            let mut valid = 0.0;
            for &x in row.iter() {
                if is_valid_response(x) {
                    valid += 1.0;
                    if x == 1.0 {
                        correct += 1.0;
                    }
                }
            }
            div_or(correct, valid, 0.0)
        })
        .collect();
    facilities.into()
}

/// Naive 1PL difficulty and ability estimates.
///
/// Item parameters are computed first. Each participant's ability is then
/// the sum of difficulties over items answered correctly, divided by that
/// sum plus the sum of facilities over items answered incorrectly; 0.5 when
/// the denominator is zero. Unanswered cells contribute to neither phase,
/// so an item with no valid responses cannot leak into any ability.
pub fn naive_irt_1pl(responses: ArrayView2<f64>) -> NaiveEstimates {
    let facility = item_facilities(responses);
    let difficulty = facility.mapv(|f| 1.0 - f);

    let n_participants = responses.ncols();
    let ability: Vec<f64> = (0..n_participants)
        .into_par_iter()
        .map(|p| {
            let mut correct_weight = 0.0;
            let mut incorrect_weight = 0.0;
            for (i, &x) in responses.column(p).iter().enumerate() {
                if x == 1.0 {
                    correct_weight += difficulty[i];
                } else if x == 0.0 {
                    incorrect_weight += facility[i];
                }
            }
            div_or(correct_weight, correct_weight + incorrect_weight, 0.5)
        })
        .collect();

    NaiveEstimates {
        difficulty,
        ability: ability.into(),
    }
}

/// Estimate naive 1PL parameters for a response matrix.
///
/// Parameters:
/// - dataset: (n_items, n_participants) matrix; 1 = correct, 0 = incorrect,
///   any other value (including NaN) = unanswered
///
/// Returns a dict with "Difficulty" (n_items,) and "Ability"
/// (n_participants,) float arrays.
#[pyfunction]
#[pyo3(name = "naive_irt_1pl", signature = (dataset))]
fn naive_irt_1pl_py<'py>(
    py: Python<'py>,
    dataset: PyReadonlyArray2<f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let dataset = dataset.as_array().to_owned();

    let estimates = py.detach(|| naive_irt_1pl(dataset.view()));

    let result = PyDict::new(py);
    result.set_item("Difficulty", estimates.difficulty.to_pyarray(py))?;
    result.set_item("Ability", estimates.ability.to_pyarray(py))?;
    Ok(result)
}

/// Per-item facility (proportion of valid responses answered correctly).
#[pyfunction]
#[pyo3(name = "item_facilities", signature = (dataset))]
fn item_facilities_py<'py>(
    py: Python<'py>,
    dataset: PyReadonlyArray2<f64>,
) -> Bound<'py, PyArray1<f64>> {
    let dataset = dataset.as_array();
    item_facilities(dataset).to_pyarray(py)
}

/// Register scoring functions with the Python module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(naive_irt_1pl_py, m)?)?;
    m.add_function(wrap_pyfunction!(item_facilities_py, m)?)?;
    Ok(())
}
