//! Data behind an embedded figure: a figure owns subplots, each subplot owns
//! the line series drawn on it.

use crate::PanesError;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LineSeries {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, PanesError> {
        if x.len() != y.len() {
            return Err(PanesError::SeriesLength {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(x, y)| [*x, *y])
    }
}

/// Axis ranges enclosing every finite point of a subplot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlotBounds {
    fn widen_degenerate(mut self) -> Self {
        if self.max_x - self.min_x <= f64::EPSILON {
            self.min_x -= 0.5;
            self.max_x += 0.5;
        }
        if self.max_y - self.min_y <= f64::EPSILON {
            self.min_y -= 0.5;
            self.max_y += 0.5;
        }
        self
    }
}

/// One subplot of a figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    series: Vec<LineSeries>,
}

impl Axes {
    /// Adds a line through the points `(x[i], y[i])`.
    pub fn plot<X, Y>(&mut self, x: X, y: Y) -> Result<&LineSeries, PanesError>
    where
        X: IntoIterator,
        X::Item: Into<f64>,
        Y: IntoIterator,
        Y::Item: Into<f64>,
    {
        let series = LineSeries::new(
            x.into_iter().map(Into::into).collect(),
            y.into_iter().map(Into::into).collect(),
        )?;
        self.series.push(series);
        Ok(&self.series[self.series.len() - 1])
    }

    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    /// Returns `None` when no series holds a finite point. A range that
    /// collapses to a single value is widened by half a unit on both sides.
    pub fn bounds(&self) -> Option<PlotBounds> {
        let mut bounds: Option<PlotBounds> = None;
        for [x, y] in self.series.iter().flat_map(LineSeries::points) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => PlotBounds {
                    min_x: x,
                    max_x: x,
                    min_y: y,
                    max_y: y,
                },
                Some(b) => PlotBounds {
                    min_x: b.min_x.min(x),
                    max_x: b.max_x.max(x),
                    min_y: b.min_y.min(y),
                    max_y: b.max_y.max(y),
                },
            });
        }
        bounds.map(PlotBounds::widen_degenerate)
    }
}

/// A plotting surface made of stacked subplots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    axes: Vec<Axes>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_subplot(&mut self) -> &mut Axes {
        self.axes.push(Axes::default());
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn series_count(&self) -> usize {
        self.axes.iter().map(|axes| axes.series().len()).sum()
    }
}

/// The demo figure: one subplot with the identity line over the integers 0 to 9.
pub fn identity_figure() -> Figure {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y = x.clone();
    let mut figure = Figure::new();
    figure.add_subplot().series.push(LineSeries { x, y });
    figure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_figure_has_one_series_of_ten_points() {
        let figure = identity_figure();
        assert_eq!(figure.axes().len(), 1);
        assert_eq!(figure.series_count(), 1);
        let series = &figure.axes()[0].series()[0];
        assert_eq!(series.len(), 10);
        for (i, [x, y]) in series.points().enumerate() {
            assert_eq!(x, i as f64);
            assert_eq!(y, i as f64);
        }
    }

    #[test]
    fn plot_rejects_mismatched_lengths() {
        let mut axes = Axes::default();
        let err = axes.plot([1.0, 2.0, 3.0], [1.0]).unwrap_err();
        assert!(matches!(err, PanesError::SeriesLength { x: 3, y: 1 }));
        assert!(axes.series().is_empty());
    }

    #[test]
    fn plot_accepts_integer_data() {
        let mut axes = Axes::default();
        let series = axes.plot([0i32, 1, 2], [4u8, 5, 6]).unwrap();
        assert_eq!(series.y(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn bounds_cover_all_series_and_skip_non_finite() {
        let mut axes = Axes::default();
        axes.plot([0.0, 2.0], [1.0, f64::NAN]).unwrap();
        axes.plot([-1.0, 4.0], [3.0, -2.0]).unwrap();
        let bounds = axes.bounds().unwrap();
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 4.0);
        assert_eq!(bounds.min_y, -2.0);
        assert_eq!(bounds.max_y, 3.0);
    }

    #[test]
    fn bounds_widen_single_point() {
        let mut axes = Axes::default();
        axes.plot([2.0], [5.0]).unwrap();
        let bounds = axes.bounds().unwrap();
        assert_eq!((bounds.min_x, bounds.max_x), (1.5, 2.5));
        assert_eq!((bounds.min_y, bounds.max_y), (4.5, 5.5));
    }

    #[test]
    fn empty_axes_have_no_bounds() {
        assert!(Axes::default().bounds().is_none());
    }
}
