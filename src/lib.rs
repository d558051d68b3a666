//! Major/minor gridlines and angle tick labels, drawn with [Matplotlib][]
//! from [Rust][].
//!
//! Usage
//! -----
//!
//! The crate has two layers.  A thin binding to the parts of
//! [Matplotlib][]'s explicit interface needed to style a plot (see
//! [`figure`], [`axes`] and [`ticker`]) and, on top of it, the demo
//! [`plot_gridlines_demo`] which draws two curves over differently
//! styled major and minor gridlines with the x ticks labelled as
//! multiples of π (see [`angle::pi_label`]).
//!
//! ```no_run
//! gridlines_demo::plot_gridlines_demo(true)?;
//! # Ok::<(), gridlines_demo::Error>(())
//! ```
//!
//! [Rust]: https://www.rust-lang.org/
//! [Matplotlib]: https://matplotlib.org/

use lazy_static::lazy_static;
use ndarray::{ArrayBase, Ix1};
use numpy::{PyArray1, ToPyArray};
use pyo3::{
    prelude::*,
    intern,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Call the method `$m` of the Python object `$obj` (a `Py<_>`),
/// optionally with keyword arguments built by `$kwargs`.  The result
/// of the method is discarded.
macro_rules! meth {
    ($obj: expr, $m: ident, $py: ident -> $args: expr, $kwargs: expr) => {
        Python::with_gil(|$py| -> Result<(), $crate::Error> {
            let args = $args;
            let kwargs = $kwargs;
            $obj.bind($py)
                .call_method(intern!($py, stringify!($m)), args, Some(&kwargs))?;
            Ok(())
        })
    };
    ($obj: expr, $m: ident, $py: ident -> $args: expr) => {
        Python::with_gil(|$py| -> Result<(), $crate::Error> {
            let args = $args;
            $obj.bind($py).call_method1(intern!($py, stringify!($m)), args)?;
            Ok(())
        })
    };
    ($obj: expr, $m: ident, $args: expr) => {
        meth!($obj, $m, _py -> $args)
    };
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import_bound(py, intern!(py, $m)).map(|m| m.unbind()))
}}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $crate::$m.as_ref().map_err(|_| $crate::Error::NoMatplotlib)
}}

pub mod angle;
pub mod axes;
pub mod curves;
pub mod demo;
pub mod figure;
pub mod ticker;

pub use axes::{Axes, AxisSel, TickDirection, Which};
pub use demo::{plot_gridlines_demo, render, DemoConfig};
pub use figure::{figure, figure_sized, show, subplots, Figure, Savefig};
pub use ticker::{Axis, Locator};

/// Possible errors of the plotting functions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Python library "matplotlib" (or "numpy") was not found.
    #[error("The matplotlib library has not been found.\n\
             Please install it.  See https://matplotlib.org/\n\
             If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554")]
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    #[error("A path contains an element that is not a directory or \
             does not exist")]
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    #[error("Permission denied to access or create the filesystem path")]
    PermissionError,
    /// Other Python errors.
    #[error("Python error: {0}")]
    Python(#[from] PyErr),
}

lazy_static! {
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    static ref TICKER: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.ticker")
    };
    // Imported once so that a missing numpy is reported as an error
    // instead of a panic of the array conversions.
    static ref NUMPY: Result<Py<PyModule>, PyErr> = {
        pyimport!("numpy")
    };
}

/// Data that can be copied to a one dimensional `numpy.ndarray`.
pub trait Data {
    fn to_numpy(&self, py: Python<'_>) -> PyObject;
}

impl Data for [f64] {
    fn to_numpy(&self, py: Python<'_>) -> PyObject {
        PyArray1::from_slice_bound(py, self).into_any().unbind()
    }
}

impl Data for Vec<f64> {
    fn to_numpy(&self, py: Python<'_>) -> PyObject {
        self.as_slice().to_numpy(py)
    }
}

impl<const N: usize> Data for [f64; N] {
    fn to_numpy(&self, py: Python<'_>) -> PyObject {
        self.as_slice().to_numpy(py)
    }
}

impl<S> Data for ArrayBase<S, Ix1>
where S: ndarray::Data<Elem = f64> {
    fn to_numpy(&self, py: Python<'_>) -> PyObject {
        self.to_pyarray_bound(py).into_any().unbind()
    }
}

/// Select the off-screen "Agg" backend.  Fail if Matplotlib (or
/// numpy) cannot be imported.
#[cfg(test)]
pub(crate) fn offscreen() -> Result<(), Error> {
    Python::with_gil(|py| -> PyResult<()> {
        PyModule::import_bound(py, intern!(py, "matplotlib"))?
            .call_method1(intern!(py, "use"), ("Agg",))?;
        Ok(())
    }).map_err(|_| Error::NoMatplotlib)?;
    pymod!(PYPLOT)?;
    pymod!(NUMPY)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert!(Error::NoMatplotlib.to_string().contains("matplotlib"));
        assert_eq!(Error::PermissionError.to_string(),
                   "Permission denied to access or create the filesystem path");
    }

    #[test]
    fn python_errors_convert() {
        let e: Error = pyo3::exceptions::PyValueError::new_err("bad").into();
        assert!(matches!(e, Error::Python(_)));
        assert!(e.to_string().starts_with("Python error:"));
    }

    #[test]
    fn slices_and_arrays_to_numpy() -> Result<(), Error> {
        offscreen()?;
        let v = vec![1., 2., 3.];
        let a = ndarray::Array1::linspace(0., 1., 5);
        Python::with_gil(|py| {
            let len = |o: PyObject| o.bind(py).len().unwrap();
            assert_eq!(len(v.to_numpy(py)), 3);
            assert_eq!(len([4., 5.].to_numpy(py)), 2);
            assert_eq!(len(a.to_numpy(py)), 5);
            let last: f64 = a.to_numpy(py).bind(py)
                .get_item(4).unwrap().extract().unwrap();
            assert_eq!(last, 1.);
        });
        Ok(())
    }
}
