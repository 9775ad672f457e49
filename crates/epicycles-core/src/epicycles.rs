use crate::fourier::Spectrum;
use crate::geometry::Point2D;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDescriptor {
    pub center: Point2D,
    pub radius: f64,
}

/// Ranked spectrum plus the circles it produced at the most recent phase.
///
/// The circle list is rebuilt on every [`EpicycleChain::advance`]; its last
/// entry has radius 0 and sits on the pen.
#[derive(Clone, Debug, Default)]
pub struct EpicycleChain {
    spectrum: Spectrum,
    circles: Vec<CircleDescriptor>,
}

impl EpicycleChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_spectrum(&mut self, spectrum: Spectrum) {
        self.spectrum = spectrum;
        self.circles.clear();
    }

    pub fn clear(&mut self) {
        self.spectrum = Spectrum::default();
        self.circles.clear();
    }

    #[inline]
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    #[inline]
    pub fn has_terms(&self) -> bool {
        !self.spectrum.is_empty()
    }

    /// Rebuild the chain for `phase`, keeping only terms with
    /// `magnitude >= magnitude_cutoff`.
    pub fn advance(&mut self, phase: f64, magnitude_cutoff: f64) -> &[CircleDescriptor] {
        self.circles.clear();
        if self.spectrum.is_empty() {
            return &self.circles;
        }
        let mut acc = self.spectrum.dc;
        for term in &self.spectrum.terms {
            // Sorted descending: everything after the first miss is below the cutoff too.
            if term.magnitude < magnitude_cutoff {
                break;
            }
            self.circles.push(CircleDescriptor {
                center: acc,
                radius: term.magnitude,
            });
            acc += term.rotated(phase);
        }
        self.circles.push(CircleDescriptor {
            center: acc,
            radius: 0.0,
        });
        &self.circles
    }

    #[inline]
    pub fn circles(&self) -> &[CircleDescriptor] {
        &self.circles
    }

    /// Pen position for the last advanced phase, if any chain was built.
    pub fn pen(&self) -> Option<Point2D> {
        self.circles.last().map(|c| c.center)
    }

    /// Number of drawn circles, not counting the terminal pen entry.
    pub fn circle_count(&self) -> usize {
        self.circles.len().saturating_sub(1)
    }
}

/// Display opacity for the circle at `index` in the chain.
#[inline]
pub fn circle_opacity(index: usize, decay: f64) -> f64 {
    1.0 / (1.0 + index as f64 * decay)
}
