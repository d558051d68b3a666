//! Axes: curves, limits, labels, legend, grid and tick styling.

use pyo3::{
    prelude::*,
    intern,
    types::PyDict,
};
use crate::{Data, Error, ticker::Axis};

/// Which ticks (and gridlines) a setting applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Which { Major, Minor, Both }

impl Which {
    pub fn as_str(&self) -> &'static str {
        match self {
            Which::Major => "major",
            Which::Minor => "minor",
            Which::Both => "both",
        }
    }
}

/// Which axis a setting applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSel { X, Y, Both }

impl AxisSel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisSel::X => "x",
            AxisSel::Y => "y",
            AxisSel::Both => "both",
        }
    }
}

/// Side of the axes the tick marks are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDirection {
    /// Outside the axes.
    Out,
    /// Across the axes line.
    InOut,
}

impl TickDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickDirection::Out => "out",
            TickDirection::InOut => "inout",
        }
    }
}

/// Set the keyword `k` of `kwargs` if a value is present.
fn kw<V: ToPyObject>(kwargs: &Bound<'_, PyDict>, k: &str, v: Option<V>)
                     -> PyResult<()> {
    match v {
        Some(v) => kwargs.set_item(k, v),
        None => Ok(()),
    }
}

/// A set of axes of a [`Figure`][crate::Figure].
#[derive(Debug, Clone)]
pub struct Axes {
    pub(crate) ax: PyObject, // instance of matplotlib.axes.Axes
}

impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gridlines_demo as plt;
    /// let (fig, mut ax) = plt::subplots()?;
    /// ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.])
    ///     .fmt("-.o").color("#ef6c00").markevery(2).plot()?;
    /// fig.save().to_file("target/XY_plot.pdf")?;
    /// # Ok::<(), gridlines_demo::Error>(())
    /// ```
    // FIXME: Do we want to check that `x` and `y` have the same
    // dimension?  Better error message?
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // Mutably borrow `self` to reflect that the final `.plot()`
        // will mutate the underlying Python object.
        XY { axes: self, options: PlotOptions::new(), x, y }
    }

    pub fn set_xlim(&mut self, left: f64, right: f64) -> Result<(), Error> {
        meth!(self.ax, set_xlim, (left, right))
    }

    pub fn set_ylim(&mut self, bottom: f64, top: f64) -> Result<(), Error> {
        meth!(self.ax, set_ylim, (bottom, top))
    }

    /// Return the x view limits.
    pub fn xlim(&self) -> Result<(f64, f64), Error> {
        Python::with_gil(|py| {
            Ok(self.ax.bind(py).call_method0(intern!(py, "get_xlim"))?
               .extract()?)
        })
    }

    /// Return the y view limits.
    pub fn ylim(&self) -> Result<(f64, f64), Error> {
        Python::with_gil(|py| {
            Ok(self.ax.bind(py).call_method0(intern!(py, "get_ylim"))?
               .extract()?)
        })
    }

    /// Set the title, with the font size `fontsize` if provided.
    pub fn set_title(&mut self, v: &str, fontsize: Option<f64>)
                     -> Result<(), Error> {
        meth!(self.ax, set_title, py -> (v,), {
            let kwargs = PyDict::new_bound(py);
            kw(&kwargs, "fontsize", fontsize)?;
            kwargs
        })
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<(), Error> {
        meth!(self.ax, set_xlabel, (label,))
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<(), Error> {
        meth!(self.ax, set_ylabel, (label,))
    }

    /// Place a legend of the labelled curves.
    #[must_use]
    pub fn legend(&mut self) -> Legend<'_> {
        Legend { axes: self, loc: None, framealpha: None }
    }

    /// Labels of the curves that will appear in the legend.
    pub fn legend_labels(&self) -> Result<Vec<String>, Error> {
        Python::with_gil(|py| {
            let (_, labels): (PyObject, Vec<String>) = self.ax.bind(py)
                .call_method0(intern!(py, "get_legend_handles_labels"))?
                .extract()?;
            Ok(labels)
        })
    }

    /// Turn on the `which` gridlines of `axis`, styled with the options
    /// of the returned [`Grid`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gridlines_demo::{self as plt, AxisSel, Which};
    /// let (fig, mut ax) = plt::subplots()?;
    /// ax.grid(Which::Minor, AxisSel::Both)
    ///     .color("#d32f2f").alpha(0.3).linestyle(":").apply()?;
    /// # Ok::<(), gridlines_demo::Error>(())
    /// ```
    #[must_use]
    pub fn grid(&mut self, which: Which, axis: AxisSel) -> Grid<'_> {
        Grid { axes: self, which, axis,
               color: None, alpha: None, linestyle: None }
    }

    /// Change the appearance of the `which` ticks of `axis`.
    #[must_use]
    pub fn tick_params(&mut self, axis: AxisSel, which: Which)
                       -> TickParams<'_> {
        TickParams { axes: self, axis, which,
                     direction: None, length: None, width: None,
                     color: None, labelcolor: None }
    }

    fn axis(&self, name: &str) -> Result<Axis, Error> {
        Python::with_gil(|py| {
            let axis = self.ax.bind(py).getattr(name)?;
            Ok(Axis { axis: axis.unbind() })
        })
    }

    /// The x axis, to set its locators and formatters.
    pub fn xaxis(&self) -> Result<Axis, Error> {
        self.axis("xaxis")
    }

    /// The y axis, to set its locators and formatters.
    pub fn yaxis(&self) -> Result<Axis, Error> {
        self.axis("yaxis")
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    color: Option<&'a str>,
    label: &'a str,
    linewidth: Option<f64>,
    markevery: Option<usize>,
    markersize: Option<f64>,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", color: None,
                      label: "", linewidth: None,
                      markevery: None, markersize: None }
    }

    fn kwargs<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let kwargs = PyDict::new_bound(py);
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        kw(&kwargs, "color", self.color)?;
        kw(&kwargs, "linewidth", self.linewidth)?;
        kw(&kwargs, "markevery", self.markevery)?;
        kw(&kwargs, "markersize", self.markersize)?;
        Ok(kwargs)
    }
}

/// Options of a curve added with [`Axes::xy`].
#[must_use]
pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    /// Matplotlib format string, e.g. `"--"` or `"-.o"`.
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    pub fn color(mut self, color: &'a str) -> Self {
        self.options.color = Some(color);
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.linewidth = Some(w);
        self
    }

    /// Only draw a marker on every `n`th point.  Matplotlib rejects 0
    /// when the figure is drawn.
    pub fn markevery(mut self, n: usize) -> Self {
        self.options.markevery = Some(n);
        self
    }

    pub fn markersize(mut self, s: f64) -> Self {
        self.options.markersize = Some(s);
        self
    }

    /// Plot the data with the options specified in [`XY`].
    pub fn plot(self) -> Result<(), Error> {
        pymod!(NUMPY)?;
        Python::with_gil(|py| {
            let x = self.x.to_numpy(py);
            let y = self.y.to_numpy(py);
            let kwargs = self.options.kwargs(py)?;
            self.axes.ax.bind(py).call_method(
                intern!(py, "plot"), (x, y, self.options.fmt),
                Some(&kwargs))?;
            Ok(())
        })
    }
}

/// Style of the gridlines turned on by [`Axes::grid`].
#[must_use]
pub struct Grid<'a> {
    axes: &'a Axes,
    which: Which,
    axis: AxisSel,
    color: Option<&'a str>,
    alpha: Option<f64>,
    linestyle: Option<&'a str>,
}

impl<'a> Grid<'a> {
    pub fn color(mut self, color: &'a str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn alpha(mut self, a: f64) -> Self {
        self.alpha = Some(a);
        self
    }

    /// Line style such as `"-"`, `"--"`, `"-."` or `":"`.
    pub fn linestyle(mut self, ls: &'a str) -> Self {
        self.linestyle = Some(ls);
        self
    }

    pub fn apply(self) -> Result<(), Error> {
        meth!(self.axes.ax, grid, py -> (true,), {
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item("which", self.which.as_str())?;
            kwargs.set_item("axis", self.axis.as_str())?;
            kw(&kwargs, "color", self.color)?;
            kw(&kwargs, "alpha", self.alpha)?;
            kw(&kwargs, "linestyle", self.linestyle)?;
            kwargs
        })
    }
}

/// Appearance of ticks, see [`Axes::tick_params`].
#[must_use]
pub struct TickParams<'a> {
    axes: &'a Axes,
    axis: AxisSel,
    which: Which,
    direction: Option<TickDirection>,
    length: Option<f64>,
    width: Option<f64>,
    color: Option<&'a str>,
    labelcolor: Option<&'a str>,
}

impl<'a> TickParams<'a> {
    pub fn direction(mut self, d: TickDirection) -> Self {
        self.direction = Some(d);
        self
    }

    /// Tick length in points.
    pub fn length(mut self, l: f64) -> Self {
        self.length = Some(l);
        self
    }

    /// Tick width in points.
    pub fn width(mut self, w: f64) -> Self {
        self.width = Some(w);
        self
    }

    pub fn color(mut self, color: &'a str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn labelcolor(mut self, color: &'a str) -> Self {
        self.labelcolor = Some(color);
        self
    }

    pub fn apply(self) -> Result<(), Error> {
        meth!(self.axes.ax, tick_params, py -> (), {
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item("axis", self.axis.as_str())?;
            kwargs.set_item("which", self.which.as_str())?;
            kw(&kwargs, "direction", self.direction.map(|d| d.as_str()))?;
            kw(&kwargs, "length", self.length)?;
            kw(&kwargs, "width", self.width)?;
            kw(&kwargs, "color", self.color)?;
            kw(&kwargs, "labelcolor", self.labelcolor)?;
            kwargs
        })
    }
}

/// Placement of the legend, see [`Axes::legend`].
#[must_use]
pub struct Legend<'a> {
    axes: &'a Axes,
    loc: Option<&'a str>,
    framealpha: Option<f64>,
}

impl<'a> Legend<'a> {
    /// Location such as `"upper right"` or `"best"`.
    pub fn loc(mut self, loc: &'a str) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn framealpha(mut self, a: f64) -> Self {
        self.framealpha = Some(a);
        self
    }

    pub fn show(self) -> Result<(), Error> {
        meth!(self.axes.ax, legend, py -> (), {
            let kwargs = PyDict::new_bound(py);
            kw(&kwargs, "loc", self.loc)?;
            kw(&kwargs, "framealpha", self.framealpha)?;
            kwargs
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::{offscreen, subplots};

    #[test]
    fn matplotlib_spellings() {
        assert_eq!(Which::Both.as_str(), "both");
        assert_eq!(Which::Minor.as_str(), "minor");
        assert_eq!(AxisSel::X.as_str(), "x");
        assert_eq!(AxisSel::Both.as_str(), "both");
        assert_eq!(TickDirection::InOut.as_str(), "inout");
        assert_eq!(TickDirection::Out.as_str(), "out");
    }

    #[test]
    fn limits() -> Result<(), Error> {
        offscreen()?;
        let (_fig, mut ax) = subplots()?;
        ax.set_xlim(-1., 3.)?;
        ax.set_ylim(-1.4, 1.4)?;
        assert_eq!(ax.xlim()?, (-1., 3.));
        assert_eq!(ax.ylim()?, (-1.4, 1.4));
        Ok(())
    }

    #[test]
    fn labelled_curves() -> Result<(), Error> {
        offscreen()?;
        let (_fig, mut ax) = subplots()?;
        let x = ndarray::Array1::linspace(0., 1., 50);
        let y = x.mapv(|x| x * x);
        ax.xy(&x, &y).fmt("--").color("#1565c0").linewidth(2.)
            .label("square").plot()?;
        ax.xy(&[0., 1.], &[1., 0.]).fmt("-.o").markevery(1).markersize(4.)
            .plot()?;
        assert_eq!(ax.legend_labels()?, ["square"]);
        ax.legend().loc("upper right").framealpha(0.85).show()?;
        Ok(())
    }

    #[test]
    fn styling_is_accepted() -> Result<(), Error> {
        offscreen()?;
        let (_fig, mut ax) = subplots()?;
        ax.grid(Which::Major, AxisSel::Both)
            .color("#2e7d32").alpha(0.6).linestyle("-").apply()?;
        ax.tick_params(AxisSel::Both, Which::Minor)
            .direction(TickDirection::InOut).length(5.).width(1.).apply()?;
        ax.set_title("Title", Some(14.))?;
        ax.set_xlabel("x")?;
        ax.set_ylabel("y")?;
        Ok(())
    }

    #[test]
    fn zero_markevery_is_a_python_error() -> Result<(), Error> {
        offscreen()?;
        let (fig, mut ax) = subplots()?;
        ax.xy(&[0., 1., 2.], &[1., 0., 1.]).fmt("-o").markevery(0).plot()?;
        fs::create_dir_all("target/test_out").unwrap();
        let r = fig.save().to_file("target/test_out/markevery_0.png");
        assert!(matches!(r, Err(Error::Python(_))));
        Ok(())
    }

    #[test]
    fn bad_legend_location_is_a_python_error() -> Result<(), Error> {
        offscreen()?;
        let (_fig, mut ax) = subplots()?;
        let r = ax.legend().loc("nowhere").show();
        assert!(matches!(r, Err(Error::Python(_))));
        Ok(())
    }
}
