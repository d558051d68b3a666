//! Figures: creation, layout, saving and display.

use std::path::Path;
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::PyDict,
};
use crate::{Axes, Error};

/// The top level container for all the plot elements.
///
/// The figure is closed (forgotten by pyplot) when dropped.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

impl Figure {
    /// Add a single set of axes covering the figure.
    pub fn subplots(&self) -> Result<Axes, Error> {
        Python::with_gil(|py| {
            let ax = self.fig.bind(py)
                .call_method0(intern!(py, "subplots"))?;
            Ok(Axes { ax: ax.unbind() })
        })
    }

    /// Set the background colour of the figure.
    pub fn set_facecolor(&mut self, color: &str) -> Result<(), Error> {
        meth!(self.fig, set_facecolor, (color,))
    }

    /// Adjust the padding between and around the axes.
    pub fn tight_layout(&mut self) -> Result<(), Error> {
        meth!(self.fig, tight_layout, ())
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None, bbox_tight: false }
    }
}

impl Drop for Figure {
    fn drop(&mut self) {
        // The figure can only have been created once pyplot is loaded.
        if let Ok(pyplot) = pymod!(PYPLOT) {
            Python::with_gil(|py| {
                // Nothing sensible to do with an error here.
                let _ = pyplot.bind(py)
                    .call_method1(intern!(py, "close"), (self.fig.clone_ref(py),));
            })
        }
    }
}

pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
    bbox_tight: bool,
}

impl Savefig {
    /// Resolution in dots per inch.  A non-positive value restores
    /// Matplotlib's default.
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    /// Crop the image to the drawn elements.
    pub fn bbox_inches_tight(&mut self) -> &mut Self {
        self.bbox_tight = true;
        self
    }

    /// Write the figure to `path`.  The format is deduced from the
    /// extension.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?
            }
            if self.bbox_tight {
                kwargs.set_item("bbox_inches", "tight")?
            }
            self.fig.bind(py).call_method(
                intern!(py, "savefig"), (path.as_ref(),), Some(&kwargs)
            ).map_err(|e| {
                    if e.is_instance_of::<PyFileNotFoundError>(py) {
                        Error::FileNotFoundError
                    } else if e.is_instance_of::<PyPermissionError>(py) {
                        Error::PermissionError
                    } else {
                        Error::Python(e)
                    }
                })?;
            Ok(())
        })
    }
}


fn new_figure(figsize: Option<(f64, f64)>) -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let kwargs = PyDict::new_bound(py);
        if let Some(size) = figsize {
            kwargs.set_item("figsize", size)?
        }
        let fig = pyplot.bind(py)
            .call_method(intern!(py, "figure"), (), Some(&kwargs))?;
        Ok(Figure { fig: fig.unbind() })
    })
}

/// Create a new figure with Matplotlib's default size.
pub fn figure() -> Result<Figure, Error> {
    new_figure(None)
}

/// Create a new figure of `width` × `height` inches.
pub fn figure_sized(width: f64, height: f64) -> Result<Figure, Error> {
    new_figure(Some((width, height)))
}

/// Create a figure with a single set of axes.
///
/// Return an error if Matplotlib is not present on the system.
pub fn subplots() -> Result<(Figure, Axes), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Display all open figures.  With a non-interactive backend, this
/// does nothing.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        pyplot.bind(py).call_method0(intern!(py, "show"))?;
        Ok(())
    })
}
