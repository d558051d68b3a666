//! Tick locators and formatters (`matplotlib.ticker`).

use pyo3::{
    prelude::*,
    intern,
    types::{PyCFunction, PyDict, PyTuple},
};
use crate::Error;

/// Rule placing the ticks of an axis at every integer multiple of a
/// base (`matplotlib.ticker.MultipleLocator`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locator {
    base: f64,
}

impl Locator {
    pub fn multiple(base: f64) -> Self {
        Locator { base }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    fn to_py(&self, py: Python<'_>, ticker: &Py<PyModule>)
             -> PyResult<PyObject> {
        let locator = ticker.bind(py)
            .getattr(intern!(py, "MultipleLocator"))?
            .call1((self.base,))?;
        Ok(locator.unbind())
    }
}

/// Return a `matplotlib.ticker.FuncFormatter` labelling each tick
/// value with `f`.  The tick position Matplotlib also passes is
/// ignored.
pub fn func_formatter<F>(py: Python<'_>, f: F) -> Result<PyObject, Error>
where F: Fn(f64) -> String + Send + 'static {
    let ticker = pymod!(TICKER)?;
    let label = PyCFunction::new_closure_bound(
        py, None, None,
        move |args: &Bound<'_, PyTuple>, _: Option<&Bound<'_, PyDict>>|
              -> PyResult<String> {
            let value: f64 = args.get_item(0)?.extract()?;
            Ok(f(value))
        })?;
    let formatter = ticker.bind(py)
        .getattr(intern!(py, "FuncFormatter"))?
        .call1((label.unbind(),))?;
    Ok(formatter.unbind())
}

/// One axis (x or y) of an [`Axes`][crate::Axes].
#[derive(Debug, Clone)]
pub struct Axis {
    pub(crate) axis: PyObject, // instance of matplotlib.axis.Axis
}

impl Axis {
    fn set_locator(&mut self, major: bool, l: Locator) -> Result<(), Error> {
        let ticker = pymod!(TICKER)?;
        Python::with_gil(|py| {
            let locator = l.to_py(py, ticker)?;
            let m = if major { "set_major_locator" }
                    else { "set_minor_locator" };
            self.axis.bind(py).call_method1(m, (locator,))?;
            Ok(())
        })
    }

    pub fn set_major_locator(&mut self, l: Locator) -> Result<(), Error> {
        self.set_locator(true, l)
    }

    pub fn set_minor_locator(&mut self, l: Locator) -> Result<(), Error> {
        self.set_locator(false, l)
    }

    /// Label the major ticks with `f`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::f64::consts::PI;
    /// use gridlines_demo::{self as plt, Locator, angle::pi_label};
    /// let (_fig, ax) = plt::subplots()?;
    /// ax.xaxis()?.set_major_locator(Locator::multiple(PI))?;
    /// ax.xaxis()?.set_major_formatter(pi_label)?;
    /// # Ok::<(), gridlines_demo::Error>(())
    /// ```
    pub fn set_major_formatter<F>(&mut self, f: F) -> Result<(), Error>
    where F: Fn(f64) -> String + Send + 'static {
        // Resolve the module before taking the GIL.
        pymod!(TICKER)?;
        Python::with_gil(|py| {
            let formatter = func_formatter(py, f)?;
            self.axis.bind(py)
                .call_method1(intern!(py, "set_major_formatter"), (formatter,))?;
            Ok(())
        })
    }

    /// Locations of the major ticks inside the view limits.
    pub fn major_ticklocs(&self) -> Result<Vec<f64>, Error> {
        Python::with_gil(|py| {
            let axis = self.axis.bind(py);
            // The locator also returns one tick beyond each limit.
            let locs: Vec<f64> = axis
                .call_method0(intern!(py, "get_majorticklocs"))?
                .call_method0(intern!(py, "tolist"))?.extract()?;
            let view: Vec<f64> = axis
                .call_method0(intern!(py, "get_view_interval"))?
                .call_method0(intern!(py, "tolist"))?.extract()?;
            let (lo, hi) = (view[0].min(view[1]), view[0].max(view[1]));
            let slack = 1e-10 * (hi - lo);
            Ok(locs.into_iter()
               .filter(|&l| lo - slack <= l && l <= hi + slack)
               .collect())
        })
    }

    /// Labels of the major ticks produced by the formatter.
    pub fn major_ticklabels(&self) -> Result<Vec<String>, Error> {
        let locs = self.major_ticklocs()?;
        Python::with_gil(|py| {
            let formatter = self.axis.bind(py)
                .call_method0(intern!(py, "get_major_formatter"))?;
            let labels = formatter
                .call_method1(intern!(py, "format_ticks"), (locs,))?;
            Ok(labels.extract()?)
        })
    }
}
