//! Two curves over distinctly styled major and minor gridlines.

use std::{f64::consts::PI, path::PathBuf};
use crate::{
    Error, Locator,
    angle::pi_label,
    axes::{AxisSel, TickDirection, Which},
    curves,
    figure::{figure_sized, show},
};

/// File written by [`plot_gridlines_demo`] when asked to save.
pub const OUTPUT_FILE: &str = "gridlines_demo.png";
/// Resolution of the saved image.
pub const DPI: f64 = 160.;
/// Figure size in inches.
pub const FIGSIZE: (f64, f64) = (9., 5.5);

/// What to do with the rendered figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Save the figure to this path (PNG at [`DPI`], tight bounding box).
    pub output: Option<PathBuf>,
    /// Display the open figures once drawn.
    pub show: bool,
}

impl DemoConfig {
    /// Configuration of [`plot_gridlines_demo`]: save to [`OUTPUT_FILE`]
    /// in the current directory if `save_png`, and always show.
    pub fn from_flag(save_png: bool) -> Self {
        DemoConfig {
            output: save_png.then(|| PathBuf::from(OUTPUT_FILE)),
            show: true,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self { DemoConfig::from_flag(false) }
}

/// Plot two curves on the same axes with clearly differentiated
/// major and minor gridlines.  If `save_png` is true, the image is
/// also written to [`OUTPUT_FILE`] in the current directory.
pub fn plot_gridlines_demo(save_png: bool) -> Result<(), Error> {
    render(&DemoConfig::from_flag(save_png))
}

/// Draw the demo figure and save and/or show it as `config` says.
/// The figure is closed on return, whether or not drawing succeeded.
pub fn render(config: &DemoConfig) -> Result<(), Error> {
    let x = curves::angles();
    let y1 = curves::decaying_cosine(&x);
    let y2 = curves::mixed_harmonics(&x);

    let mut fig = figure_sized(FIGSIZE.0, FIGSIZE.1)?;
    fig.set_facecolor("#fafafa")?;
    let mut ax = fig.subplots()?;

    ax.xy(&x, &y1).fmt("--").color("#1565c0").linewidth(2.)
        .label("Decaying Cosine").plot()?;
    ax.xy(&x, &y2).fmt("-.o").markevery(30).markersize(4.)
        .color("#ef6c00").linewidth(1.75)
        .label("Mixed Harmonics").plot()?;

    ax.set_xlim(curves::X_MIN, curves::X_MAX)?;
    ax.set_ylim(-1.4, 1.4)?;

    let mut xaxis = ax.xaxis()?;
    xaxis.set_major_locator(Locator::multiple(PI))?;
    xaxis.set_minor_locator(Locator::multiple(PI / 4.))?;
    xaxis.set_major_formatter(pi_label)?;
    let mut yaxis = ax.yaxis()?;
    yaxis.set_major_locator(Locator::multiple(0.5))?;
    yaxis.set_minor_locator(Locator::multiple(0.1))?;

    ax.grid(Which::Major, AxisSel::Both)
        .color("#2e7d32").alpha(0.6).linestyle("-").apply()?;
    ax.grid(Which::Minor, AxisSel::Both)
        .color("#d32f2f").alpha(0.3).linestyle(":").apply()?;

    ax.tick_params(AxisSel::Both, Which::Major)
        .direction(TickDirection::Out).length(9.).width(1.5)
        .color("black").labelcolor("0.25").apply()?;
    ax.tick_params(AxisSel::Both, Which::Minor)
        .direction(TickDirection::InOut).length(5.).width(1.).apply()?;

    ax.set_title("Major/Minor Gridlines Demo", Some(14.))?;
    ax.set_xlabel("Angle (radians)")?;
    ax.set_ylabel("Amplitude")?;
    ax.legend().loc("upper right").framealpha(0.85).show()?;

    fig.tight_layout()?;
    if let Some(path) = &config.output {
        fig.save().dpi(DPI).bbox_inches_tight().to_file(path)?;
    }
    if config.show {
        show()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use super::*;
    use crate::offscreen;

    #[test]
    fn flag_configuration() {
        assert_eq!(DemoConfig::from_flag(true).output,
                   Some(PathBuf::from("gridlines_demo.png")));
        assert_eq!(DemoConfig::from_flag(false).output, None);
        assert!(DemoConfig::from_flag(false).show);
        assert_eq!(DemoConfig::default(), DemoConfig::from_flag(false));
    }

    #[test]
    fn saves_a_png() -> Result<(), Error> {
        offscreen()?;
        let dir = PathBuf::from("target/test_out/demo");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(OUTPUT_FILE);
        let _ = fs::remove_file(&path);
        render(&DemoConfig { output: Some(path.clone()), show: false })?;
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "not a PNG");
        // 9 in at 160 dpi, before cropping.
        let width = u32::from_be_bytes([bytes[16], bytes[17],
                                        bytes[18], bytes[19]]);
        assert!(width > 900 && width <= 1440, "width {width}");
        Ok(())
    }

    // Both flag values in one test: they share the file in the
    // current directory.
    #[test]
    fn entry_point_saves_only_when_asked() -> Result<(), Error> {
        offscreen()?;
        let path = PathBuf::from(OUTPUT_FILE);
        let _ = fs::remove_file(&path);
        plot_gridlines_demo(false)?;
        assert!(!path.exists());
        plot_gridlines_demo(true)?;
        let len = fs::metadata(&path).unwrap().len();
        fs::remove_file(&path).unwrap();
        assert!(len > 0);
        Ok(())
    }
}
